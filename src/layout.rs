// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GenError, Result};
use crate::model::{DeviceModel, PeripheralModel, RawRegister};

// A subset of keywords that may appear as register names
const RUST_KEYWORDS: &[&str] = &["in"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutField {
    /// A real register, one 32-bit word per element.
    Register {
        name: String,
        /// 0 for a scalar register, N for an N element array.
        array_size: u32,
    },
    /// Padding covering an undocumented gap between registers.
    Reserved {
        index: u32,
        words: u32,
    },
}

impl LayoutField {
    pub fn words(&self) -> u32 {
        match self {
            LayoutField::Register { array_size, .. } => (*array_size).max(1),
            LayoutField::Reserved { words, .. } => *words,
        }
    }
}

#[derive(Debug)]
pub struct PeripheralLayout {
    pub name: String,
    pub base_address: u64,
    pub fields: Vec<LayoutField>,
}

/// Lay out every peripheral named in `filter`, or all of them when it is
/// empty. Peripherals outside the filter are never looked at.
pub fn build_layouts(model: &DeviceModel, filter: &[String]) -> Result<Vec<PeripheralLayout>> {
    model.peripherals.iter()
        .filter(|p| filter.is_empty() || filter.iter().any(|name| name == &p.name))
        .map(|p| layout_peripheral(model, p))
        .collect()
}

fn layout_peripheral(model: &DeviceModel, p: &PeripheralModel) -> Result<PeripheralLayout> {
    let mut registers: Vec<&RawRegister> = p.registers.iter().collect();

    // A derived peripheral borrows the register list of its parent. The list
    // is copied here, the computed layouts stay independent.
    if registers.is_empty() {
        if let Some(parent) = p.derived_from.as_deref().and_then(|name| model.peripheral(name)) {
            registers = parent.registers.iter().collect();
        }
    }

    // Makes no sense to continue in this case
    if registers.is_empty() {
        return Err(GenError::MissingRegisters { peripheral: p.name.clone() });
    }

    // The SVD lists registers in memory order, but nothing guarantees it.
    registers.sort_by_key(|r| r.offset);

    let mut fields = Vec::with_capacity(registers.len());
    let mut expected_offset = 0;
    let mut reserved_id = 1;

    for reg in registers {
        if reg.offset < expected_offset {
            return Err(GenError::MisorderedRegister {
                peripheral: p.name.clone(),
                register: reg.name.clone(),
                offset: reg.offset,
                expected: expected_offset,
            });
        }

        if reg.offset > expected_offset {
            let bytes = reg.offset - expected_offset;
            // ARM requires word aligned registers, so gaps are whole words too
            if bytes % 4 != 0 {
                return Err(GenError::MisalignedGap {
                    peripheral: p.name.clone(),
                    register: reg.name.clone(),
                    bytes,
                });
            }
            fields.push(LayoutField::Reserved { index: reserved_id, words: bytes / 4 });
            reserved_id += 1;
        }

        let array_size = match &reg.dim {
            Some(dim) => {
                if dim.stride != 4 {
                    return Err(GenError::UnsupportedRepetition {
                        peripheral: p.name.clone(),
                        register: reg.name.clone(),
                        detail: format!("element stride is {} bytes instead of 4", dim.stride),
                    });
                }
                let dense: Vec<String> = (0..dim.count).map(|i| i.to_string()).collect();
                if dim.indexes != dense {
                    return Err(GenError::UnsupportedRepetition {
                        peripheral: p.name.clone(),
                        register: reg.name.clone(),
                        detail: format!("indexes {:?} are not 0..{}", dim.indexes, dim.count),
                    });
                }
                dim.count
            }
            None => 0,
        };

        fields.push(LayoutField::Register {
            name: field_name(&reg.name),
            array_size,
        });

        // Arrays occupy all of their elements, so the next register may only
        // start past the last one.
        expected_offset = reg.offset + 4 * array_size.max(1);
    }

    Ok(PeripheralLayout {
        name: p.name.clone(),
        base_address: p.base_address,
        fields,
    })
}

fn field_name(raw: &str) -> String {
    let name = raw.replace("[%s]", "").to_lowercase();
    if RUST_KEYWORDS.contains(&name.as_str()) {
        name + "_"
    } else {
        name
    }
}
