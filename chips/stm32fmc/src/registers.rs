// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! FMC NOR/PSRAM/SRAM bank register map.
//!
//! Each of the four chip-select banks owns a control register (BCRx) and a
//! timing register (BTRx), laid out in pairs from the start of the register
//! block, plus a write timing register (BWTRx) in a second table at 0x104.
//! Only BCR1 carries the global FMCEN bit, and only on the STM32H7 family.

use tock_registers::register_bitfields;

/// Number of NOR/PSRAM/SRAM chip-select banks.
pub const MAX_SRAM_BANK: usize = 4;

/// Distance between the registers of consecutive banks, in bytes.
pub const BANK_STRIDE: usize = 8;

/// SRAM/NOR-Flash chip-select control register 1
pub const BCR1_OFFSET: usize = 0x000;
/// SRAM/NOR-Flash chip-select timing register 1
pub const BTR1_OFFSET: usize = 0x004;
/// SRAM/NOR-Flash write timing register 1
pub const BWTR1_OFFSET: usize = 0x104;

/// Start of the address window of chip-select bank 1.
pub const BANK1_WINDOW_BASE: usize = 0x6000_0000;
/// Size of the address window decoded by each chip select.
pub const BANK_WINDOW_SIZE: usize = 0x0400_0000;

/// Absolute addresses of the three registers of one bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankRegisters {
    pub bcr: usize,
    pub btr: usize,
    pub bwtr: usize,
}

impl BankRegisters {
    /// Register addresses for `bank` of a controller whose registers start
    /// at `base`. `bank` must be below [`MAX_SRAM_BANK`].
    pub const fn new(base: usize, bank: usize) -> BankRegisters {
        let offset = bank * BANK_STRIDE;
        BankRegisters {
            bcr: base + BCR1_OFFSET + offset,
            btr: base + BTR1_OFFSET + offset,
            bwtr: base + BWTR1_OFFSET + offset,
        }
    }
}

register_bitfields![u32,
    pub BCR [
        /// FMC controller enable, BCR1 of the STM32H7 only
        FMCEN OFFSET(31) NUMBITS(1) [],
        /// Write burst enable
        CBURSTRW OFFSET(19) NUMBITS(1) [],
        /// CRAM page size
        CPSIZE OFFSET(16) NUMBITS(3) [
            NO_BURST = 0b000,
            BYTES_128 = 0b001,
            BYTES_256 = 0b010,
            BYTES_512 = 0b011,
            BYTES_1024 = 0b100
        ],
        /// Wait signal during asynchronous transfers
        ASYNCWAIT OFFSET(15) NUMBITS(1) [],
        /// Extended mode enable
        EXTMOD OFFSET(14) NUMBITS(1) [],
        /// Wait enable bit
        WAITEN OFFSET(13) NUMBITS(1) [],
        /// Write enable bit
        WREN OFFSET(12) NUMBITS(1) [],
        /// Wait timing configuration
        WAITCFG OFFSET(11) NUMBITS(1) [],
        /// Wrapped burst mode support
        WRAPMOD OFFSET(10) NUMBITS(1) [],
        /// Wait signal polarity bit
        WAITPOL OFFSET(9) NUMBITS(1) [],
        /// Burst enable bit
        BURSTEN OFFSET(8) NUMBITS(1) [],
        /// Memory data bus width
        MWID OFFSET(4) NUMBITS(2) [
            BITS_8 = 0b00,
            BITS_16 = 0b01,
            BITS_32 = 0b10
        ],
        /// Memory type
        MTYP OFFSET(2) NUMBITS(2) [
            SRAM = 0b00,
            PSRAM = 0b01,
            NOR = 0b10
        ],
        /// Address/data multiplexing enable bit
        MUXEN OFFSET(1) NUMBITS(1) [],
        /// Memory bank enable bit
        MBKEN OFFSET(0) NUMBITS(1) []
    ],
    pub BTR [
        /// Access mode
        ACCMOD OFFSET(28) NUMBITS(2) [
            A = 0b00,
            B = 0b01,
            C = 0b10,
            D = 0b11
        ],
        /// Data latency for synchronous memory
        DATLAT OFFSET(24) NUMBITS(4) [],
        /// Clock divide ratio (for FMC_CLK signal)
        CLKDIV OFFSET(20) NUMBITS(4) [],
        /// Bus turnaround phase duration
        BUSTURN OFFSET(16) NUMBITS(4) [],
        /// Data-phase duration
        DATAST OFFSET(8) NUMBITS(8) [],
        /// Address-hold phase duration
        ADDHLD OFFSET(4) NUMBITS(4) [],
        /// Address setup phase duration
        ADDSET OFFSET(0) NUMBITS(4) []
    ],
    pub BWTR [
        /// Access mode
        ACCMOD OFFSET(28) NUMBITS(2) [
            A = 0b00,
            B = 0b01,
            C = 0b10,
            D = 0b11
        ],
        /// Bus turnaround phase duration
        BUSTURN OFFSET(16) NUMBITS(4) [],
        /// Data-phase duration
        DATAST OFFSET(8) NUMBITS(8) [],
        /// Address-hold phase duration
        ADDHLD OFFSET(4) NUMBITS(4) [],
        /// Address setup phase duration
        ADDSET OFFSET(0) NUMBITS(4) []
    ]
];
