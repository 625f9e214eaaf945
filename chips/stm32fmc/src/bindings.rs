// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Values of the `st,sram-control`, `st,sram-timing` and `st,sram-exttiming`
//! device-tree properties.
//!
//! These are the codes a board description uses for each byte of the
//! records; they are shared with the device-tree sources and must not change.

pub const WRITE_BURST_DISABLE: u8 = 0;
pub const WRITE_BURST_ENABLE: u8 = 1;

pub const PAGE_SIZE_NONE: u8 = 0;
pub const PAGE_SIZE_128: u8 = 1;
pub const PAGE_SIZE_256: u8 = 2;
pub const PAGE_SIZE_512: u8 = 3;
pub const PAGE_SIZE_1024: u8 = 4;

pub const ASYNCHRONOUS_WAIT_DISABLE: u8 = 0;
pub const ASYNCHRONOUS_WAIT_ENABLE: u8 = 1;

pub const EXTENDED_MODE_DISABLE: u8 = 0;
pub const EXTENDED_MODE_ENABLE: u8 = 1;

pub const WAIT_SIGNAL_DISABLE: u8 = 0;
pub const WAIT_SIGNAL_ENABLE: u8 = 1;

pub const WRITE_OPERATION_DISABLE: u8 = 0;
pub const WRITE_OPERATION_ENABLE: u8 = 1;

pub const WAIT_TIMING_BEFORE_WS: u8 = 0;
pub const WAIT_TIMING_DURING_WS: u8 = 1;

pub const WRAP_MODE_DISABLE: u8 = 0;
pub const WRAP_MODE_ENABLE: u8 = 1;

pub const WAIT_SIGNAL_POLARITY_LOW: u8 = 0;
pub const WAIT_SIGNAL_POLARITY_HIGH: u8 = 1;

pub const BURST_ACCESS_MODE_DISABLE: u8 = 0;
pub const BURST_ACCESS_MODE_ENABLE: u8 = 1;

pub const NORSRAM_MEM_BUS_WIDTH_8: u8 = 0;
pub const NORSRAM_MEM_BUS_WIDTH_16: u8 = 1;
pub const NORSRAM_MEM_BUS_WIDTH_32: u8 = 2;

pub const MEMORY_TYPE_SRAM: u8 = 0;
pub const MEMORY_TYPE_PSRAM: u8 = 1;
pub const MEMORY_TYPE_NOR: u8 = 2;

pub const DATA_ADDRESS_MUX_DISABLE: u8 = 0;
pub const DATA_ADDRESS_MUX_ENABLE: u8 = 1;

pub const ACCESS_MODE_A: u8 = 0;
pub const ACCESS_MODE_B: u8 = 1;
pub const ACCESS_MODE_C: u8 = 2;
pub const ACCESS_MODE_D: u8 = 3;
