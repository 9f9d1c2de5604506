// SPDX-License-Identifier: GPL-3.0-or-later

//! Text rendering of the two generated artifacts. No decisions are made
//! here, everything interesting happens in the builders.

use crate::interrupts::InterruptTable;
use crate::layout::{LayoutField, PeripheralLayout};

const PROGRAM: &str = "nrf51-codegen";

// C macros span lines with backslash continuations, except for the last line.
fn push_c_macro(out: &mut String, name: &str, lines: &[String], indent: usize) {
    out.push_str(&format!("#define {} \\\n", name));
    for (n, line) in lines.iter().enumerate() {
        out.push_str(&"\t".repeat(indent));
        out.push_str(line);
        if n < lines.len() - 1 {
            out.push_str(" \\");
        }
        out.push('\n');
    }
}

pub fn render_interrupt_header(table: &InterruptTable) -> String {
    let mut out = format!("/* Automatically generated by {} */\n", PROGRAM);

    let vectors: Vec<String> = table.slots().iter()
        .map(|slot| match slot {
            Some(name) => format!("{}_Handler,", name),
            None => "0, /* Reserved */".to_string(),
        })
        .collect();
    push_c_macro(&mut out, "PERIPHERAL_INTERRUPT_VECTORS", &vectors, 1);

    let handlers: Vec<String> = table.slots().iter()
        .flatten()
        .map(|name| {
            format!("void {}_Handler(void) __attribute__ ((weak, alias(\"Dummy_Handler\")));", name)
        })
        .collect();
    push_c_macro(&mut out, "PERIPHERAL_INTERRUPT_HANDLERS", &handlers, 0);

    out
}

pub fn render_register_structs(layouts: &[PeripheralLayout]) -> String {
    let mut out = format!("/* Automatically generated by {} */\n\n", PROGRAM);
    out.push_str("use common::volatile_cell::VolatileCell;\n");

    for p in layouts {
        out.push_str(&format!("\npub const {}_BASE: usize = 0x{:08x};\n", p.name, p.base_address));
        out.push_str("#[repr(C)]\n");
        out.push_str(&format!("pub struct {} {{\n", p.name));

        for field in &p.fields {
            match field {
                LayoutField::Register { name, array_size: 0 } => {
                    out.push_str(&format!("    pub {}: VolatileCell<u32>,\n", name));
                }
                LayoutField::Register { name, array_size } => {
                    out.push_str(&format!("    pub {}: [VolatileCell<u32>; {}],\n", name, array_size));
                }
                LayoutField::Reserved { index, words } => {
                    out.push_str(&format!("    _reserved{}: [u32; {}],\n", index, words));
                }
            }
        }

        out.push_str("}\n");
    }

    out
}
