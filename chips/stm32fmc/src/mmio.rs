// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Volatile register access to a fixed physical address range.

use core::ptr;

use crate::hil::RegisterBus;

/// Register block of the FMC on the STM32F4 and STM32F7.
pub const FMC_BASE_STM32F4: usize = 0xA000_0000;
/// Register block of the FMC on the STM32H7.
pub const FMC_BASE_STM32H7: usize = 0x5200_4000;

/// A [`RegisterBus`] performing volatile 32-bit accesses inside
/// `[base, base + size)`.
pub struct Mmio {
    base: usize,
    size: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `[base, base + size)` must be a word-aligned register block that is
    /// exclusively owned by the caller for as long as the returned value is
    /// used.
    pub const unsafe fn new(base: usize, size: usize) -> Mmio {
        Mmio { base, size }
    }

    fn check(&self, address: usize) {
        debug_assert!(
            address >= self.base && address + 4 <= self.base + self.size && address % 4 == 0,
            "register access outside {:#x}+{:#x}: {:#x}",
            self.base,
            self.size,
            address
        );
    }
}

impl RegisterBus for Mmio {
    fn read(&self, address: usize) -> u32 {
        self.check(address);
        // Safety: the address lies in the block handed to `Mmio::new`.
        unsafe { ptr::read_volatile(address as *const u32) }
    }

    fn write(&self, address: usize, value: u32) {
        self.check(address);
        // Safety: the address lies in the block handed to `Mmio::new`.
        unsafe { ptr::write_volatile(address as *mut u32, value) }
    }

    fn barrier(&self) {
        #[cfg(all(target_arch = "arm", target_os = "none"))]
        unsafe {
            core::arch::asm!("dsb 0xf", options(nostack, preserves_flags));
        }
    }
}
