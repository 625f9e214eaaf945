// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Per-bank configuration records and their register encodings.
//!
//! A board describes each bank with three byte arrays: `st,sram-control`
//! (13 bytes), `st,sram-timing` (7 bytes) and `st,sram-exttiming` (5 bytes).
//! Every byte is one field, in the order of the struct members below. The
//! decoders check the exact length of the array and the range of every
//! field before a record is handed out, so packing a record into its
//! register word never has to mask anything away.
//!
//! ```rust
//! use stm32fmc::bindings::ACCESS_MODE_A;
//! use stm32fmc::record::ExtTimingConfig;
//!
//! let write_timing = ExtTimingConfig::decode(&[ACCESS_MODE_A, 0, 7, 1, 1]).unwrap();
//! assert_eq!(write_timing.register().get(), 0x0000_0711);
//! ```

use tock_registers::fields::Field;
use tock_registers::{LocalRegisterCopy, RegisterLongName};

use crate::bindings;
use crate::errorcode::{ConfigError, RecordKind};
use crate::registers::{BCR, BTR, BWTR};

/// Borrow `bytes` as a fixed-size record of `N` bytes.
fn fixed<const N: usize>(kind: RecordKind, bytes: &[u8]) -> Result<&[u8; N], ConfigError> {
    bytes.try_into().map_err(|_| {
        log::error!(
            "{} has {} bytes, expected {}",
            kind.property(),
            bytes.len(),
            N
        );
        ConfigError::RecordLength {
            kind,
            expected: N,
            found: bytes.len(),
        }
    })
}

/// Check a field value against the largest value it may take.
fn check(field: &'static str, value: u8, max: u8) -> Result<(), ConfigError> {
    if value > max {
        log::error!("{} = {} is out of range (max {})", field, value, max);
        Err(ConfigError::FieldOutOfRange { field, value, max })
    } else {
        Ok(())
    }
}

/// Largest value a register field can hold.
fn field_max<R: RegisterLongName>(field: Field<u32, R>) -> u8 {
    field.mask as u8
}

/// Contents of the `st,sram-control` property, encoded into BCRx.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlConfig {
    pub write_burst_enable: u8,
    pub page_size: u8,
    pub wait_signal_during_asynchronous_transfers: u8,
    pub extended_mode_enable: u8,
    pub wait_enable_bit: u8,
    pub write_enable_bit: u8,
    pub wait_timing_configuration: u8,
    pub wrapped_burst_mode_support: u8,
    pub wait_signal_polarity_bit: u8,
    pub burst_enable_bit: u8,
    pub memory_databus_width: u8,
    pub memory_type: u8,
    pub address_data_multiplexing_enable_bit: u8,
}

impl ControlConfig {
    pub const LEN: usize = 13;

    pub fn decode(bytes: &[u8]) -> Result<ControlConfig, ConfigError> {
        let b = fixed::<{ ControlConfig::LEN }>(RecordKind::Control, bytes)?;
        let config = ControlConfig {
            write_burst_enable: b[0],
            page_size: b[1],
            wait_signal_during_asynchronous_transfers: b[2],
            extended_mode_enable: b[3],
            wait_enable_bit: b[4],
            write_enable_bit: b[5],
            wait_timing_configuration: b[6],
            wrapped_burst_mode_support: b[7],
            wait_signal_polarity_bit: b[8],
            burst_enable_bit: b[9],
            memory_databus_width: b[10],
            memory_type: b[11],
            address_data_multiplexing_enable_bit: b[12],
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that do not fit their field or are reserved codes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "write burst enable",
            self.write_burst_enable,
            field_max(BCR::CBURSTRW),
        )?;
        check("page size", self.page_size, bindings::PAGE_SIZE_1024)?;
        check(
            "asynchronous wait",
            self.wait_signal_during_asynchronous_transfers,
            field_max(BCR::ASYNCWAIT),
        )?;
        check(
            "extended mode enable",
            self.extended_mode_enable,
            field_max(BCR::EXTMOD),
        )?;
        check("wait enable", self.wait_enable_bit, field_max(BCR::WAITEN))?;
        check("write enable", self.write_enable_bit, field_max(BCR::WREN))?;
        check(
            "wait timing configuration",
            self.wait_timing_configuration,
            field_max(BCR::WAITCFG),
        )?;
        check(
            "wrapped burst mode",
            self.wrapped_burst_mode_support,
            field_max(BCR::WRAPMOD),
        )?;
        check(
            "wait signal polarity",
            self.wait_signal_polarity_bit,
            field_max(BCR::WAITPOL),
        )?;
        check("burst enable", self.burst_enable_bit, field_max(BCR::BURSTEN))?;
        check(
            "memory databus width",
            self.memory_databus_width,
            bindings::NORSRAM_MEM_BUS_WIDTH_32,
        )?;
        check("memory type", self.memory_type, bindings::MEMORY_TYPE_NOR)?;
        check(
            "address/data multiplexing",
            self.address_data_multiplexing_enable_bit,
            field_max(BCR::MUXEN),
        )
    }

    /// The BCRx word for this configuration, with the bank still disabled.
    pub fn register(&self) -> LocalRegisterCopy<u32, BCR::Register> {
        let mut bcr = LocalRegisterCopy::new(0);
        bcr.modify(
            BCR::CBURSTRW.val(self.write_burst_enable as u32)
                + BCR::CPSIZE.val(self.page_size as u32)
                + BCR::ASYNCWAIT.val(self.wait_signal_during_asynchronous_transfers as u32)
                + BCR::EXTMOD.val(self.extended_mode_enable as u32)
                + BCR::WAITEN.val(self.wait_enable_bit as u32)
                + BCR::WREN.val(self.write_enable_bit as u32)
                + BCR::WAITCFG.val(self.wait_timing_configuration as u32)
                + BCR::WRAPMOD.val(self.wrapped_burst_mode_support as u32)
                + BCR::WAITPOL.val(self.wait_signal_polarity_bit as u32)
                + BCR::BURSTEN.val(self.burst_enable_bit as u32)
                + BCR::MWID.val(self.memory_databus_width as u32)
                + BCR::MTYP.val(self.memory_type as u32)
                + BCR::MUXEN.val(self.address_data_multiplexing_enable_bit as u32),
        );
        bcr
    }
}

/// Contents of the `st,sram-timing` property, encoded into BTRx.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimingConfig {
    pub access_mode: u8,
    pub data_latency: u8,
    pub clock_divide_ratio: u8,
    pub bus_turnaround_phase_duration: u8,
    pub data_phase_duration: u8,
    pub address_hold_phase_duration: u8,
    pub address_setup_phase_duration: u8,
}

impl TimingConfig {
    pub const LEN: usize = 7;

    pub fn decode(bytes: &[u8]) -> Result<TimingConfig, ConfigError> {
        let b = fixed::<{ TimingConfig::LEN }>(RecordKind::Timing, bytes)?;
        let config = TimingConfig {
            access_mode: b[0],
            data_latency: b[1],
            clock_divide_ratio: b[2],
            bus_turnaround_phase_duration: b[3],
            data_phase_duration: b[4],
            address_hold_phase_duration: b[5],
            address_setup_phase_duration: b[6],
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("access mode", self.access_mode, field_max(BTR::ACCMOD))?;
        check("data latency", self.data_latency, field_max(BTR::DATLAT))?;
        check(
            "clock divide ratio",
            self.clock_divide_ratio,
            field_max(BTR::CLKDIV),
        )?;
        check(
            "bus turnaround",
            self.bus_turnaround_phase_duration,
            field_max(BTR::BUSTURN),
        )?;
        check(
            "data phase",
            self.data_phase_duration,
            field_max(BTR::DATAST),
        )?;
        check(
            "address hold",
            self.address_hold_phase_duration,
            field_max(BTR::ADDHLD),
        )?;
        check(
            "address setup",
            self.address_setup_phase_duration,
            field_max(BTR::ADDSET),
        )
    }

    pub fn register(&self) -> LocalRegisterCopy<u32, BTR::Register> {
        let mut btr = LocalRegisterCopy::new(0);
        btr.modify(
            BTR::ACCMOD.val(self.access_mode as u32)
                + BTR::DATLAT.val(self.data_latency as u32)
                + BTR::CLKDIV.val(self.clock_divide_ratio as u32)
                + BTR::BUSTURN.val(self.bus_turnaround_phase_duration as u32)
                + BTR::DATAST.val(self.data_phase_duration as u32)
                + BTR::ADDHLD.val(self.address_hold_phase_duration as u32)
                + BTR::ADDSET.val(self.address_setup_phase_duration as u32),
        );
        btr
    }
}

/// Contents of the `st,sram-exttiming` property, encoded into BWTRx.
///
/// Only used by the controller when extended mode is enabled in the control
/// record, but always programmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtTimingConfig {
    pub access_mode: u8,
    pub bus_turnaround_phase_duration: u8,
    pub data_phase_duration: u8,
    pub address_hold_phase_duration: u8,
    pub address_setup_phase_duration: u8,
}

impl ExtTimingConfig {
    pub const LEN: usize = 5;

    pub fn decode(bytes: &[u8]) -> Result<ExtTimingConfig, ConfigError> {
        let b = fixed::<{ ExtTimingConfig::LEN }>(RecordKind::ExtTiming, bytes)?;
        let config = ExtTimingConfig {
            access_mode: b[0],
            bus_turnaround_phase_duration: b[1],
            data_phase_duration: b[2],
            address_hold_phase_duration: b[3],
            address_setup_phase_duration: b[4],
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("write access mode", self.access_mode, field_max(BWTR::ACCMOD))?;
        check(
            "write bus turnaround",
            self.bus_turnaround_phase_duration,
            field_max(BWTR::BUSTURN),
        )?;
        check(
            "write data phase",
            self.data_phase_duration,
            field_max(BWTR::DATAST),
        )?;
        check(
            "write address hold",
            self.address_hold_phase_duration,
            field_max(BWTR::ADDHLD),
        )?;
        check(
            "write address setup",
            self.address_setup_phase_duration,
            field_max(BWTR::ADDSET),
        )
    }

    pub fn register(&self) -> LocalRegisterCopy<u32, BWTR::Register> {
        let mut bwtr = LocalRegisterCopy::new(0);
        bwtr.modify(
            BWTR::ACCMOD.val(self.access_mode as u32)
                + BWTR::BUSTURN.val(self.bus_turnaround_phase_duration as u32)
                + BWTR::DATAST.val(self.data_phase_duration as u32)
                + BWTR::ADDHLD.val(self.address_hold_phase_duration as u32)
                + BWTR::ADDSET.val(self.address_setup_phase_duration as u32),
        );
        bwtr
    }
}
