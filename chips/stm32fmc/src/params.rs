// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Controller parameters, built once from the hardware description and read
//! only afterwards.

use crate::errorcode::ConfigError;
use crate::record::{ControlConfig, ExtTimingConfig, TimingConfig};
use crate::registers::{BANK1_WINDOW_BASE, BANK_WINDOW_SIZE, MAX_SRAM_BANK};

/// FMC variants that differ in how the controller is brought up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Stm32F4,
    Stm32H7,
}

impl Family {
    /// Whether BCR1 carries the FMCEN bit that gates the whole controller.
    pub const fn has_global_enable(self) -> bool {
        match self {
            Family::Stm32F4 => false,
            Family::Stm32H7 => true,
        }
    }
}

/// Complete configuration of one chip-select bank.
///
/// A slot only exists when all three records were found, so a bank can
/// never be half configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankSlot {
    /// Bank the records are written to, 0 to 3.
    pub target_bank: u8,
    pub control: ControlConfig,
    pub timing: TimingConfig,
    pub exttiming: ExtTimingConfig,
}

impl BankSlot {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_bank as usize >= MAX_SRAM_BANK {
            log::error!("bank {} does not exist", self.target_bank);
            return Err(ConfigError::BankOutOfRange(self.target_bank as u32));
        }
        self.control.validate()?;
        self.timing.validate()?;
        self.exttiming.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerParams {
    /// Address of the FMC register block.
    pub base: usize,
    /// `None` marks an unused slot.
    pub slots: [Option<BankSlot>; MAX_SRAM_BANK],
    pub family: Family,
}

impl ControllerParams {
    pub const fn new(base: usize, family: Family) -> ControllerParams {
        ControllerParams {
            base,
            slots: [None; MAX_SRAM_BANK],
            family,
        }
    }

    /// Slots that hold a bank configuration, in slot order.
    pub fn valid_slots(&self) -> impl Iterator<Item = &BankSlot> {
        self.slots.iter().flatten()
    }

    /// Check every slot, and that no bank is targeted twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; MAX_SRAM_BANK];
        for slot in self.valid_slots() {
            slot.validate()?;
            let bank = slot.target_bank as usize;
            if seen[bank] {
                log::error!("bank {} configured twice", slot.target_bank);
                return Err(ConfigError::DuplicateBank(slot.target_bank));
            }
            seen[bank] = true;
        }
        Ok(())
    }
}

/// Address range decoded by one enabled chip select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankWindow {
    pub bank: u8,
    pub base: usize,
    pub size: usize,
}

/// What the memory controller exposes once it has been set up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RamInfo {
    /// Indexed by bank number.
    pub windows: [Option<BankWindow>; MAX_SRAM_BANK],
}

impl RamInfo {
    pub fn from_params(params: &ControllerParams) -> RamInfo {
        let mut info = RamInfo::default();
        for slot in params.valid_slots() {
            let bank = slot.target_bank as usize;
            if bank < MAX_SRAM_BANK {
                info.windows[bank] = Some(BankWindow {
                    bank: slot.target_bank,
                    base: BANK1_WINDOW_BASE + bank * BANK_WINDOW_SIZE,
                    size: BANK_WINDOW_SIZE,
                });
            }
        }
        info
    }

    /// Windows of the enabled banks, lowest bank first.
    pub fn enabled(&self) -> impl Iterator<Item = &BankWindow> {
        self.windows.iter().flatten()
    }
}
