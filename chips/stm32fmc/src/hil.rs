// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interfaces between the FMC driver and the rest of the system.
//!
//! The driver never touches hardware or host state directly. Register
//! accesses go through a [`RegisterBus`], the controller clock through a
//! [`ClockInterface`], and the host binds the driver through [`Ram`].

use crate::devicetree::DeviceDescription;
use crate::errorcode::{ConfigError, ErrorCode};
use crate::params::{ControllerParams, RamInfo};

/// Access to 32-bit memory-mapped registers by absolute address.
///
/// Accesses are synchronous and cannot fail.
pub trait RegisterBus {
    fn read(&self, address: usize) -> u32;

    fn write(&self, address: usize, value: u32);

    /// Wait until all previous writes have reached the peripheral.
    fn barrier(&self) {}
}

/// Clock gate of a peripheral.
///
/// The FMC clock is never gated again once the banks are set up, so only
/// enabling is needed.
pub trait ClockInterface {
    fn is_enabled(&self) -> bool;

    /// Errors, such as `OFF` for a powered down clock source, are fatal to
    /// the bring-up of the peripheral and are reported to the caller
    /// unchanged.
    fn enable(&self) -> Result<(), ErrorCode>;
}

/// Helper struct for boards whose FMC clock is enabled by an earlier stage.
pub struct NoClockControl {}

impl ClockInterface for NoClockControl {
    fn is_enabled(&self) -> bool {
        true
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        Ok(())
    }
}

/// A memory controller set up once from its hardware description.
pub trait Ram {
    /// Read and validate the configuration of every bank. Performs no
    /// register access.
    fn load_config<D: DeviceDescription>(
        &self,
        device: &D,
    ) -> Result<ControllerParams, ConfigError>;

    /// Program the controller. Nothing is written unless `params` is valid
    /// as a whole.
    fn init(&self, params: &ControllerParams) -> Result<(), ConfigError>;

    /// Address windows of the banks enabled by the last successful `init`.
    fn get_info(&self) -> RamInfo;
}
