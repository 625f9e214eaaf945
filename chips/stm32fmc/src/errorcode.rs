// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Error types for bringing up the FMC SRAM banks.
//!
//! Two layers are used. [`ConfigError`] describes exactly which part of the
//! hardware description was rejected, and is what the decoding and validation
//! code returns. [`ErrorCode`] is the small, fixed set of errors exchanged with
//! the outside world (clock control, host driver binding), and every
//! `ConfigError` converts into one of them.

use core::fmt;

/// Standard errors exchanged with the collaborators of the driver.
///
/// Discriminants follow the Tock kernel numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// The component is powered down
    OFF = 3,
    /// An invalid parameter was passed
    INVAL = 5,
    /// Parameter passed was too large
    SIZE = 6,
    /// Device does not exist
    NODEVICE = 10,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

/// The three per-bank records of the `st,sram-*` binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Control,
    Timing,
    ExtTiming,
}

impl RecordKind {
    /// Device-tree property the record is stored in.
    pub const fn property(self) -> &'static str {
        match self {
            RecordKind::Control => "st,sram-control",
            RecordKind::Timing => "st,sram-timing",
            RecordKind::ExtTiming => "st,sram-exttiming",
        }
    }
}

/// Reasons a bank configuration is rejected.
///
/// All of these are detected before any register is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The controller node has no register block address.
    MissingBaseAddress,
    /// A bank node name has no `@<index>` suffix.
    MissingBankIndex,
    /// The text after `@` is not a decimal number.
    InvalidBankIndex,
    /// The bank index is not one of the four NOR/PSRAM/SRAM banks. Indexes
    /// that do not fit a `u32` are reported as `u32::MAX`.
    BankOutOfRange(u32),
    /// More bank nodes than the controller has banks.
    TooManyBanks,
    /// Two bank nodes target the same bank.
    DuplicateBank(u8),
    /// One of the three records is absent from a bank node.
    MissingRecord(RecordKind),
    /// A record does not have the fixed length of its layout.
    RecordLength {
        kind: RecordKind,
        expected: usize,
        found: usize,
    },
    /// A field holds a value that does not fit, or is not a defined code.
    FieldOutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::MissingBaseAddress => write!(f, "missing register base address"),
            ConfigError::MissingBankIndex => write!(f, "missing sram bank index"),
            ConfigError::InvalidBankIndex => write!(f, "sram bank index is not a number"),
            ConfigError::BankOutOfRange(bank) => write!(
                f,
                "found bank {}, but only bank 0, 1, 2 and 3 are supported",
                bank
            ),
            ConfigError::TooManyBanks => write!(f, "more than 4 sram bank nodes"),
            ConfigError::DuplicateBank(bank) => write!(f, "bank {} configured twice", bank),
            ConfigError::MissingRecord(kind) => write!(f, "{} not found", kind.property()),
            ConfigError::RecordLength {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} has {} bytes, expected {}",
                kind.property(),
                found,
                expected
            ),
            ConfigError::FieldOutOfRange { field, value, max } => {
                write!(f, "{} = {} is out of range (max {})", field, value, max)
            }
        }
    }
}

impl From<ConfigError> for ErrorCode {
    fn from(err: ConfigError) -> ErrorCode {
        match err {
            ConfigError::RecordLength { .. } | ConfigError::TooManyBanks => ErrorCode::SIZE,
            _ => ErrorCode::INVAL,
        }
    }
}
