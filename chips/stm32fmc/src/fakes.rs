// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Host-side stand-ins for the register bus, the clock and the device tree.

use std::cell::{Cell, RefCell};
use std::sync::Once;
use std::vec::Vec;

use crate::bindings::{
    ACCESS_MODE_A, ASYNCHRONOUS_WAIT_DISABLE, BURST_ACCESS_MODE_DISABLE, DATA_ADDRESS_MUX_DISABLE,
    EXTENDED_MODE_ENABLE, MEMORY_TYPE_SRAM, NORSRAM_MEM_BUS_WIDTH_16, PAGE_SIZE_NONE,
    WAIT_SIGNAL_DISABLE, WAIT_SIGNAL_POLARITY_LOW, WAIT_TIMING_BEFORE_WS, WRAP_MODE_DISABLE,
    WRITE_BURST_DISABLE, WRITE_OPERATION_ENABLE,
};
use crate::devicetree::{BankNode, DeviceDescription};
use crate::errorcode::{ErrorCode, RecordKind};
use crate::hil::{ClockInterface, RegisterBus};
use crate::registers::BCR1_OFFSET;

/// Size of the emulated register block, up to and including the write
/// timing registers.
const BLOCK_SIZE: usize = 0x120;

/// Reset value of BCR1 on the STM32H7, FMCEN clear.
pub const BCR1_RESET: u32 = 0x0000_30DB;
/// Reset value of BCR2..4.
pub const BCRX_RESET: u32 = 0x0000_30D2;
/// Reset value of the timing and write timing registers.
pub const BTR_RESET: u32 = 0x0FFF_FFFF;

const FMCEN: u32 = 1 << 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read(usize),
    Write(usize, u32),
}

/// One bus access, together with the state of FMCEN when it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logged {
    pub access: Access,
    pub fmcen: bool,
}

pub struct FakeBus {
    base: usize,
    regs: RefCell<[u32; BLOCK_SIZE / 4]>,
    log: RefCell<Vec<Logged>>,
    barriers: Cell<usize>,
}

impl FakeBus {
    pub fn new(base: usize) -> FakeBus {
        let mut regs = [0; BLOCK_SIZE / 4];
        for bank in 0..4 {
            regs[bank * 2] = if bank == 0 { BCR1_RESET } else { BCRX_RESET };
            regs[bank * 2 + 1] = BTR_RESET;
            regs[(0x104 / 4) + bank * 2] = BTR_RESET;
        }
        FakeBus {
            base,
            regs: RefCell::new(regs),
            log: RefCell::new(Vec::new()),
            barriers: Cell::new(0),
        }
    }

    fn index(&self, address: usize) -> usize {
        assert!(
            address >= self.base && address < self.base + BLOCK_SIZE && address % 4 == 0,
            "access outside the register block: {:#x}",
            address
        );
        (address - self.base) / 4
    }

    /// Set a register without logging an access.
    pub fn poke(&self, address: usize, value: u32) {
        let index = self.index(address);
        self.regs.borrow_mut()[index] = value;
    }

    /// Read a register without logging an access.
    pub fn peek(&self, address: usize) -> u32 {
        self.regs.borrow()[self.index(address)]
    }

    pub fn snapshot(&self) -> [u32; BLOCK_SIZE / 4] {
        *self.regs.borrow()
    }

    pub fn log(&self) -> Vec<Logged> {
        self.log.borrow().clone()
    }

    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|logged| match logged.access {
                Access::Write(address, value) => Some((address, value)),
                Access::Read(_) => None,
            })
            .collect()
    }

    pub fn barriers(&self) -> usize {
        self.barriers.get()
    }

    fn fmcen(&self) -> bool {
        self.peek(self.base + BCR1_OFFSET) & FMCEN != 0
    }
}

impl RegisterBus for FakeBus {
    fn read(&self, address: usize) -> u32 {
        self.log.borrow_mut().push(Logged {
            access: Access::Read(address),
            fmcen: self.fmcen(),
        });
        self.peek(address)
    }

    fn write(&self, address: usize, value: u32) {
        self.log.borrow_mut().push(Logged {
            access: Access::Write(address, value),
            fmcen: self.fmcen(),
        });
        self.poke(address, value);
    }

    fn barrier(&self) {
        self.barriers.set(self.barriers.get() + 1);
    }
}

pub struct FakeClock {
    enabled: Cell<bool>,
    enables: Cell<usize>,
    error: Option<ErrorCode>,
}

impl FakeClock {
    pub fn new() -> FakeClock {
        FakeClock {
            enabled: Cell::new(false),
            enables: Cell::new(0),
            error: None,
        }
    }

    /// A clock that was enabled by an earlier boot stage.
    pub fn running() -> FakeClock {
        let clock = FakeClock::new();
        clock.enabled.set(true);
        clock
    }

    pub fn failing(error: ErrorCode) -> FakeClock {
        FakeClock {
            error: Some(error),
            ..FakeClock::new()
        }
    }

    /// Number of calls to `enable`.
    pub fn enables(&self) -> usize {
        self.enables.get()
    }
}

impl ClockInterface for FakeClock {
    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        self.enables.set(self.enables.get() + 1);
        match self.error {
            Some(error) => Err(error),
            None => {
                self.enabled.set(true);
                Ok(())
            }
        }
    }
}

std::thread_local! {
    static ERRORS: Cell<usize> = const { Cell::new(0) };
}

/// Counts error records per test thread.
struct ErrorCounter;

impl log::Log for ErrorCounter {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() == log::Level::Error
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            ERRORS.with(|errors| errors.set(errors.get() + 1));
        }
    }

    fn flush(&self) {}
}

static ERROR_COUNTER: ErrorCounter = ErrorCounter;

/// Run `f` and return its result along with the number of errors it logged.
pub fn logged_errors<T>(f: impl FnOnce() -> T) -> (T, usize) {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&ERROR_COUNTER).is_ok() {
            log::set_max_level(log::LevelFilter::Error);
        }
    });
    let before = ERRORS.with(Cell::get);
    let result = f();
    (result, ERRORS.with(Cell::get) - before)
}

#[derive(Clone)]
pub struct FakeNode {
    name: &'static str,
    properties: Vec<(&'static str, Vec<u8>)>,
}

impl FakeNode {
    pub fn new(name: &'static str) -> FakeNode {
        FakeNode {
            name,
            properties: Vec::new(),
        }
    }

    pub fn with(mut self, property: &'static str, value: &[u8]) -> FakeNode {
        self.properties.retain(|(name, _)| *name != property);
        self.properties.push((property, value.to_vec()));
        self
    }

    pub fn without(mut self, property: &str) -> FakeNode {
        self.properties.retain(|(name, _)| *name != property);
        self
    }
}

impl BankNode for FakeNode {
    fn name(&self) -> &str {
        self.name
    }

    fn read_u8_array(&self, property: &str) -> Option<&[u8]> {
        self.properties
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_slice())
    }
}

/// Control record of a 16-bit asynchronous SRAM, as used on the STM32F4
/// discovery boards.
pub const SRAM_CONTROL: [u8; 13] = [
    WRITE_BURST_DISABLE,
    PAGE_SIZE_NONE,
    ASYNCHRONOUS_WAIT_DISABLE,
    EXTENDED_MODE_ENABLE,
    WAIT_SIGNAL_DISABLE,
    WRITE_OPERATION_ENABLE,
    WAIT_TIMING_BEFORE_WS,
    WRAP_MODE_DISABLE,
    WAIT_SIGNAL_POLARITY_LOW,
    BURST_ACCESS_MODE_DISABLE,
    NORSRAM_MEM_BUS_WIDTH_16,
    MEMORY_TYPE_SRAM,
    DATA_ADDRESS_MUX_DISABLE,
];
pub const SRAM_TIMING: [u8; 7] = [ACCESS_MODE_A, 2, 2, 1, 36, 1, 9];
pub const SRAM_EXTTIMING: [u8; 5] = [ACCESS_MODE_A, 0, 7, 1, 1];

/// Packed words of the records above.
pub const SRAM_BCR: u32 = 0x0000_5010;
pub const SRAM_BTR: u32 = 0x0221_2419;
pub const SRAM_BWTR: u32 = 0x0000_0711;

/// A bank node carrying the SRAM records above.
pub fn sram_node(name: &'static str) -> FakeNode {
    FakeNode::new(name)
        .with(RecordKind::Control.property(), &SRAM_CONTROL)
        .with(RecordKind::Timing.property(), &SRAM_TIMING)
        .with(RecordKind::ExtTiming.property(), &SRAM_EXTTIMING)
}

pub struct FakeDevice {
    address: Option<usize>,
    compatible: Vec<&'static str>,
    nodes: Vec<FakeNode>,
}

impl FakeDevice {
    pub fn new(address: Option<usize>, nodes: Vec<FakeNode>) -> FakeDevice {
        FakeDevice {
            address,
            compatible: vec!["st,stm32-fmc-sram"],
            nodes,
        }
    }

    pub fn compatible_with(mut self, compatible: &[&'static str]) -> FakeDevice {
        self.compatible = compatible.to_vec();
        self
    }
}

impl DeviceDescription for FakeDevice {
    type Node = FakeNode;

    fn address(&self) -> Option<usize> {
        self.address
    }

    fn compatible(&self) -> &[&str] {
        &self.compatible
    }

    fn subnodes(&self) -> impl Iterator<Item = &FakeNode> {
        self.nodes.iter()
    }
}
