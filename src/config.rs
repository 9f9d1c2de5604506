// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Output {
   pub interrupts: String,
   pub registers: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub svd: String,
    /// Peripherals to generate register blocks for. Empty means all of them.
    #[serde(default)]
    pub peripherals: Vec<String>,
    pub output: Output,
}
