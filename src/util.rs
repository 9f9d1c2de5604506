// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::prelude::*;
use anyhow::{Context, Result};

pub fn read_file(path: &str) -> Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path))?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {}", path))?;

    Ok(buf)
}


pub fn read_file_str(path: &str) -> Result<String> {
    let content = read_file(path)?;
    let str = String::from_utf8(content)?;
    Ok(str)
}


pub fn write_file(path: &str, content: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path))?;

    Ok(())
}
