// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Binding of the FMC SRAM driver into a host driver model.
//!
//! The host matches a device node against [`FMC_SRAM_DRIVER`] and, on a
//! match, hands the node to [`bind`], which returns a probed driver.

use crate::devicetree::DeviceDescription;
use crate::errorcode::ErrorCode;
use crate::hil::{ClockInterface, RegisterBus};
use crate::params::Family;
use crate::sram::FmcSram;

/// Static description of a driver for the host.
pub struct DriverInfo {
    pub name: &'static str,
    /// `compatible` strings handled by the driver, with the controller
    /// family each one implies.
    pub of_match: &'static [(&'static str, Family)],
}

impl DriverInfo {
    pub fn match_compatible(&self, compatible: &str) -> Option<Family> {
        self.of_match
            .iter()
            .find(|(name, _)| *name == compatible)
            .map(|(_, family)| *family)
    }

    /// First entry of a `compatible` list this driver handles.
    pub fn match_device<D: DeviceDescription>(&self, device: &D) -> Option<Family> {
        device
            .compatible()
            .iter()
            .find_map(|compatible| self.match_compatible(compatible))
    }
}

pub const FMC_SRAM_DRIVER: DriverInfo = DriverInfo {
    name: "stm32_fmc_sram",
    of_match: &[
        ("st,stm32-fmc-sram", Family::Stm32F4),
        ("st,stm32h7-fmc-sram", Family::Stm32H7),
    ],
};

/// Create the driver for `device` and probe it.
///
/// Returns `NODEVICE` when no `compatible` entry matches.
pub fn bind<'a, D: DeviceDescription, B: RegisterBus, C: ClockInterface>(
    device: &D,
    bus: &'a B,
    clock: &'a C,
) -> Result<FmcSram<'a, B, C>, ErrorCode> {
    let family = FMC_SRAM_DRIVER.match_device(device).ok_or_else(|| {
        log::debug!("{}: no matching compatible", FMC_SRAM_DRIVER.name);
        ErrorCode::NODEVICE
    })?;
    let fmc = FmcSram::new(bus, clock, family);
    fmc.probe(device)?;
    Ok(fmc)
}
