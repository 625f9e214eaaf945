// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Compile-time configuration options for the FMC driver.
//!
//! Options live in a typed `const` rather than behind `#[cfg]` so that every
//! code path is type-checked regardless of which features are enabled. The
//! compiler folds the constants, so a disabled option costs nothing in the
//! final binary.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether every register read and write performed during bank setup is
    /// reported at `trace` level.
    ///
    /// This is useful when bringing up a new board and checking the packed
    /// words against the reference manual.
    pub(crate) trace_register_writes: bool,
}

/// The only location in this crate where `#[cfg(x)]` is used to read Cargo
/// features.
pub(crate) const CONFIG: Config = Config {
    trace_register_writes: cfg!(feature = "trace_register_writes"),
};
