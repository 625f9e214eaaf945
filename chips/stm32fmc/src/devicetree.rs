// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Reading the bank configuration out of the hardware description.
//!
//! The controller node has one subnode per bank, named `<name>@<bank>`:
//!
//! ```text
//! fmc: fmc@a0000000 {
//!     compatible = "st,stm32-fmc-sram";
//!     reg = <0xa0000000 0x1000>;
//!
//!     bank@0 {
//!         st,sram-control = /bits/ 8 <...13 values...>;
//!         st,sram-timing = /bits/ 8 <...7 values...>;
//!         st,sram-exttiming = /bits/ 8 <...5 values...>;
//!     };
//! };
//! ```
//!
//! Traversal of the description itself is left to the host, which exposes
//! it through [`DeviceDescription`] and [`BankNode`].

use crate::errorcode::{ConfigError, RecordKind};
use crate::params::{BankSlot, ControllerParams, Family};
use crate::record::{ControlConfig, ExtTimingConfig, TimingConfig};
use crate::registers::MAX_SRAM_BANK;

/// One bank subnode.
pub trait BankNode {
    /// Full node name, including the `@<bank>` suffix.
    fn name(&self) -> &str;

    /// Raw value of a byte-array property, if present.
    fn read_u8_array(&self, property: &str) -> Option<&[u8]>;
}

/// The controller node.
pub trait DeviceDescription {
    type Node: BankNode;

    /// Address of the register block, from the `reg` property.
    fn address(&self) -> Option<usize>;

    /// Entries of the `compatible` property.
    fn compatible(&self) -> &[&str];

    fn subnodes(&self) -> impl Iterator<Item = &Self::Node>;
}

/// Extract the bank number from a `<name>@<bank>` node name.
pub fn parse_bank_index(name: &str) -> Result<u8, ConfigError> {
    let (_, index) = name.split_once('@').ok_or_else(|| {
        log::error!("missing sram bank index in {}", name);
        ConfigError::MissingBankIndex
    })?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        log::error!("invalid sram bank index in {}", name);
        return Err(ConfigError::InvalidBankIndex);
    }
    // Only overflow is left, and that is out of range as well.
    let bank = index.parse::<u32>().unwrap_or(u32::MAX);
    if bank as usize >= MAX_SRAM_BANK {
        log::error!(
            "Found bank {}, but only bank 0, 1, 2 and 3 are supported",
            bank
        );
        return Err(ConfigError::BankOutOfRange(bank));
    }
    Ok(bank as u8)
}

fn read_record<N: BankNode>(node: &N, kind: RecordKind) -> Result<&[u8], ConfigError> {
    node.read_u8_array(kind.property()).ok_or_else(|| {
        log::error!("{} not found for {}", kind.property(), node.name());
        ConfigError::MissingRecord(kind)
    })
}

/// Build the slot for one bank node. All three records must be present.
pub fn load_bank<N: BankNode>(node: &N) -> Result<BankSlot, ConfigError> {
    let target_bank = parse_bank_index(node.name())?;
    log::debug!("Find bank {} {}", node.name(), target_bank);

    let control = ControlConfig::decode(read_record(node, RecordKind::Control)?)?;
    let timing = TimingConfig::decode(read_record(node, RecordKind::Timing)?)?;
    let exttiming = ExtTimingConfig::decode(read_record(node, RecordKind::ExtTiming)?)?;

    Ok(BankSlot {
        target_bank,
        control,
        timing,
        exttiming,
    })
}

/// Read the parameters of a whole controller.
///
/// Bank nodes fill the slots in the order they appear. The result has been
/// validated as a whole and is ready for [`crate::sram::init`].
pub fn load_config<D: DeviceDescription>(
    device: &D,
    family: Family,
) -> Result<ControllerParams, ConfigError> {
    let base = device.address().ok_or_else(|| {
        log::error!("missing fmc register address");
        ConfigError::MissingBaseAddress
    })?;
    let mut params = ControllerParams::new(base, family);

    let mut slot = 0;
    for node in device.subnodes() {
        if slot >= MAX_SRAM_BANK {
            log::error!(
                "{}: only {} sram banks are supported",
                node.name(),
                MAX_SRAM_BANK
            );
            return Err(ConfigError::TooManyBanks);
        }
        params.slots[slot] = Some(load_bank(node)?);
        log::debug!("bank {} active!", slot);
        slot += 1;
    }

    params.validate()?;
    Ok(params)
}
