// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Everything that can go wrong while turning the SVD model into code.
/// All of these are fatal: a wrong vector table or register block is worse
/// than no output at all.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("interrupt {name} is on line {line}, the NVIC only has {max} lines")]
    InterruptLineOutOfRange { name: String, line: u32, max: u32 },

    #[error("interrupt line {line} is claimed by both {existing} and {new}")]
    ConflictingInterrupt { line: u32, existing: String, new: String },

    #[error("SVD does not contain any registers for peripheral {peripheral}")]
    MissingRegisters { peripheral: String },

    #[error("register {peripheral}.{register} at offset 0x{offset:03x} overlaps the \
             previous register ending at 0x{expected:03x}")]
    MisorderedRegister { peripheral: String, register: String, offset: u32, expected: u32 },

    #[error("{bytes} byte gap before {peripheral}.{register} is not a whole number of words")]
    MisalignedGap { peripheral: String, register: String, bytes: u32 },

    #[error("unsupported array layout for {peripheral}.{register}: {detail}")]
    UnsupportedRepetition { peripheral: String, register: String, detail: String },
}

pub type Result<T> = std::result::Result<T, GenError>;
