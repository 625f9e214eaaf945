// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NOR/PSRAM/SRAM bank setup of the Flexible Memory Controller.
//!
//! Runs once during bring-up, before anything uses the external memory.
//! Every valid bank gets its control, timing and write timing words, then its
//! bank enable bit. On families with a global enable bit the controller is
//! held disabled for the whole sequence.

use core::cell::Cell;

use tock_registers::fields::FieldValue;
use tock_registers::LocalRegisterCopy;

use crate::config::CONFIG;
use crate::devicetree::{self, DeviceDescription};
use crate::errorcode::{ConfigError, ErrorCode};
use crate::hil::{ClockInterface, Ram, RegisterBus};
use crate::params::{ControllerParams, Family, RamInfo};
use crate::registers::{BankRegisters, BCR, BCR1_OFFSET};

fn write<B: RegisterBus + ?Sized>(bus: &B, address: usize, value: u32) {
    if CONFIG.trace_register_writes {
        log::trace!("fmc: write {:#010x} <- {:#010x}", address, value);
    }
    bus.write(address, value);
}

/// Read-modify-write of a control register.
fn modify_bcr<B: RegisterBus + ?Sized>(
    bus: &B,
    address: usize,
    field: FieldValue<u32, BCR::Register>,
) {
    let mut bcr: LocalRegisterCopy<u32, BCR::Register> =
        LocalRegisterCopy::new(bus.read(address));
    if CONFIG.trace_register_writes {
        log::trace!("fmc: read  {:#010x} -> {:#010x}", address, bcr.get());
    }
    bcr.modify(field);
    write(bus, address, bcr.get());
}

/// Program every valid bank of `params` through `bus`.
///
/// `params` is validated first; if it is rejected no register is touched.
pub fn init<B: RegisterBus + ?Sized>(
    bus: &B,
    params: &ControllerParams,
) -> Result<(), ConfigError> {
    params.validate()?;

    let bcr1 = params.base + BCR1_OFFSET;

    // Disable the FMC controller
    if params.family.has_global_enable() {
        modify_bcr(bus, bcr1, BCR::FMCEN::CLEAR);
    }

    for slot in params.valid_slots() {
        let regs = BankRegisters::new(params.base, slot.target_bank as usize);
        let bcr = slot.control.register();
        let btr = slot.timing.register();
        let bwtr = slot.exttiming.register();

        write(bus, regs.bcr, bcr.get());
        write(bus, regs.btr, btr.get());
        write(bus, regs.bwtr, bwtr.get());
        modify_bcr(bus, regs.bcr, BCR::MBKEN::SET);

        log::debug!(
            "fmc: bank {} enabled, bcr {:#010x} btr {:#010x} bwtr {:#010x}",
            slot.target_bank,
            bcr.get(),
            btr.get(),
            bwtr.get()
        );
    }

    // Enable the FMC controller
    if params.family.has_global_enable() {
        modify_bcr(bus, bcr1, BCR::FMCEN::SET);
    }
    bus.barrier();

    Ok(())
}

/// The FMC SRAM driver of one controller instance.
pub struct FmcSram<'a, B: RegisterBus, C: ClockInterface> {
    bus: &'a B,
    clock: &'a C,
    family: Family,
    params: Cell<Option<ControllerParams>>,
}

impl<'a, B: RegisterBus, C: ClockInterface> FmcSram<'a, B, C> {
    pub const fn new(bus: &'a B, clock: &'a C, family: Family) -> FmcSram<'a, B, C> {
        FmcSram {
            bus,
            clock,
            family,
            params: Cell::new(None),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Bring the controller up from its hardware description: load the bank
    /// configuration, enable the clock and program the registers.
    ///
    /// Configuration errors are reported before the clock or any register is
    /// touched. A clock that is already running is left alone; errors from
    /// enabling it are returned unchanged.
    pub fn probe<D: DeviceDescription>(&self, device: &D) -> Result<(), ErrorCode> {
        let params = self.load_config(device)?;

        if !self.clock.is_enabled() {
            self.clock
                .enable()
                .inspect_err(|_| log::error!("fmc: failed to enable clock"))?;
        }

        self.init(&params)?;
        Ok(())
    }
}

impl<B: RegisterBus, C: ClockInterface> Ram for FmcSram<'_, B, C> {
    fn load_config<D: DeviceDescription>(
        &self,
        device: &D,
    ) -> Result<ControllerParams, ConfigError> {
        devicetree::load_config(device, self.family)
    }

    fn init(&self, params: &ControllerParams) -> Result<(), ConfigError> {
        init(self.bus, params)?;
        self.params.set(Some(*params));
        Ok(())
    }

    fn get_info(&self) -> RamInfo {
        self.params
            .get()
            .map_or_else(RamInfo::default, |params| RamInfo::from_params(&params))
    }
}
