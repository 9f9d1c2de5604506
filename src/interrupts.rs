// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GenError, Result};
use crate::model::DeviceModel;

// Cortex M0 supports up to 32 external interrupts.
// Source: ARMv6-M Architecture Reference Manual,
// Table C-2 "Programmers' model feature comparison"
pub const VECTOR_COUNT: usize = 32;

/// The external interrupt vector table, one slot per NVIC line.
/// Built once per run, immutable afterwards.
#[derive(Debug)]
pub struct InterruptTable {
    slots: [Option<String>; VECTOR_COUNT],
}

impl InterruptTable {
    pub fn build(model: &DeviceModel) -> Result<Self> {
        let mut slots: [Option<String>; VECTOR_COUNT] = std::array::from_fn(|_| None);

        for p in &model.peripherals {
            for intr in &p.interrupts {
                if intr.line as usize >= VECTOR_COUNT {
                    return Err(GenError::InterruptLineOutOfRange {
                        name: intr.name.clone(),
                        line: intr.line,
                        max: VECTOR_COUNT as u32,
                    });
                }

                match &slots[intr.line as usize] {
                    // Peripherals sharing a handler may declare the same line.
                    Some(existing) if *existing == intr.name => {}
                    Some(existing) => {
                        return Err(GenError::ConflictingInterrupt {
                            line: intr.line,
                            existing: existing.clone(),
                            new: intr.name.clone(),
                        });
                    }
                    None => slots[intr.line as usize] = Some(intr.name.clone()),
                }
            }
        }

        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InterruptBinding, PeripheralModel};

    fn model_with_bindings(bindings: &[(&str, u32)]) -> DeviceModel {
        // One peripheral per binding, which is also how shared handlers show
        // up in real documents.
        let peripherals = bindings.iter().enumerate().map(|(n, (name, line))| {
            PeripheralModel {
                name: format!("P{}", n),
                base_address: 0x4000_0000 + (n as u64) * 0x1000,
                derived_from: None,
                registers: vec![],
                interrupts: vec![InterruptBinding { name: name.to_string(), line: *line }],
            }
        }).collect();

        DeviceModel { peripherals }
    }

    #[test]
    fn places_each_binding_on_its_line() {
        let table = InterruptTable::build(&model_with_bindings(&[("RADIO", 1), ("RTC0", 11)])).unwrap();

        assert_eq!(table.slots().len(), VECTOR_COUNT);
        assert_eq!(table.slots()[1].as_deref(), Some("RADIO"));
        assert_eq!(table.slots()[11].as_deref(), Some("RTC0"));
        assert_eq!(table.slots().iter().filter(|s| s.is_some()).count(), 2);
    }

    #[test]
    fn accepts_duplicate_declarations_of_the_same_handler() {
        let table = InterruptTable::build(&model_with_bindings(&[("A", 0), ("B", 1), ("A", 0)])).unwrap();

        assert_eq!(table.slots()[0].as_deref(), Some("A"));
        assert_eq!(table.slots()[1].as_deref(), Some("B"));
        assert_eq!(table.slots().iter().filter(|s| s.is_some()).count(), 2);
    }

    #[test]
    fn rejects_two_handlers_on_one_line() {
        let err = InterruptTable::build(&model_with_bindings(&[("A", 0), ("B", 0)])).unwrap_err();

        assert!(matches!(err, GenError::ConflictingInterrupt { line: 0, .. }));
    }

    #[test]
    fn rejects_lines_beyond_the_nvic() {
        let err = InterruptTable::build(&model_with_bindings(&[("UICR", 32)])).unwrap_err();

        assert!(matches!(err, GenError::InterruptLineOutOfRange { line: 32, .. }));
    }
}
