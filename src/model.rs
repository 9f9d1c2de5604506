// SPDX-License-Identifier: GPL-3.0-or-later

//! Flattened, read-only view of the SVD document. The builders only ever see
//! these types, never the svd-parser tree.

use svd_parser::svd::{Device, MaybeArray};

#[derive(Debug, Clone)]
pub struct InterruptBinding {
    pub name: String,
    pub line: u32,
}

/// Repetition metadata of an array register, straight from the dim elements.
#[derive(Debug, Clone)]
pub struct RegisterDim {
    pub count: u32,
    /// Byte distance between consecutive elements.
    pub stride: u32,
    pub indexes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RawRegister {
    pub name: String,
    /// Byte offset from the peripheral base address.
    pub offset: u32,
    pub dim: Option<RegisterDim>,
}

#[derive(Debug, Clone)]
pub struct PeripheralModel {
    pub name: String,
    pub base_address: u64,
    /// Name of the peripheral this one borrows its register layout from.
    /// Single stable accessor for the derivedFrom attribute, whatever the
    /// document schema looked like.
    pub derived_from: Option<String>,
    pub registers: Vec<RawRegister>,
    pub interrupts: Vec<InterruptBinding>,
}

#[derive(Debug, Default)]
pub struct DeviceModel {
    pub peripherals: Vec<PeripheralModel>,
}

impl DeviceModel {
    pub fn from_svd(device: &Device) -> Self {
        let peripherals = device.peripherals.iter().map(|p| {
            // Registers nested in clusters are not supported, top-level ones
            // are all we need for this chip family.
            let registers = p.registers().map(|r| {
                match r {
                    MaybeArray::Single(r) => RawRegister {
                        name: r.name.clone(),
                        offset: r.address_offset,
                        dim: None,
                    },
                    MaybeArray::Array(r, dim) => RawRegister {
                        name: r.name.clone(),
                        offset: r.address_offset,
                        dim: Some(RegisterDim {
                            count: dim.dim,
                            stride: dim.dim_increment,
                            indexes: dim.indexes().map(|s| s.into_owned()).collect(),
                        }),
                    },
                }
            }).collect();

            let interrupts = p.interrupt.iter().map(|intr| InterruptBinding {
                name: intr.name.clone(),
                line: intr.value,
            }).collect();

            PeripheralModel {
                name: p.name.clone(),
                base_address: p.base_address,
                derived_from: p.derived_from.clone(),
                registers,
                interrupts,
            }
        }).collect();

        Self { peripherals }
    }

    pub fn peripheral(&self, name: &str) -> Option<&PeripheralModel> {
        self.peripherals.iter().find(|p| p.name == name)
    }
}
