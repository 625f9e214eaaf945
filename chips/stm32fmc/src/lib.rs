// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NOR/PSRAM/SRAM bank bring-up for the STM32 Flexible Memory Controller.
//!
//! The banks are described in the device tree, one subnode per chip select,
//! and programmed once at boot:
//!
//! ```rust,ignore
//! static BUS: Mmio = unsafe { Mmio::new(FMC_BASE_STM32F4, 0x400) };
//!
//! let fmc = stm32fmc::driver::bind(&fmc_node, &BUS, &NoClockControl {})?;
//! for window in fmc.get_info().enabled() {
//!     debug!("sram bank {} at {:#x}", window.bank, window.base);
//! }
//! ```
//!
//! STM32F4 reference manual RM0090, section 36.5;
//! STM32H7 reference manual RM0433, section 22.7.

#![no_std]

// Host unit tests use std for the fakes.
#[cfg(test)]
#[macro_use]
extern crate std;

mod config;

pub mod bindings;
pub mod devicetree;
pub mod driver;
pub mod errorcode;
pub mod hil;
pub mod mmio;
pub mod params;
pub mod record;
pub mod registers;
pub mod sram;

#[cfg(test)]
mod fakes;

pub use crate::errorcode::{ConfigError, ErrorCode};
pub use crate::params::{BankSlot, ControllerParams, Family, RamInfo};
pub use crate::sram::FmcSram;
