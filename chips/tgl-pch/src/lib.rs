// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Register map for the Intel Tiger Lake PCH power management controller
//! (PMC).
//!
//! This crate is a data-only description of where the PMC's registers live
//! and what their bits mean. It contains no hardware access code: drivers
//! that own the relevant port or memory window combine the offsets defined
//! here with a base address and perform the I/O themselves. Register
//! contents follow the Intel 500 Series Chipset Family PCH datasheet,
//! Volume 2 (register descriptions).
//!
//! Registers are grouped the way the hardware groups them:
//!
//! * [`pmc::acpi`] - ACPI and legacy power management registers, I/O port
//!   offsets relative to ACPIBASE.
//! * [`pmc::tco`] - TCO watchdog registers, I/O port offsets relative to
//!   TCOBASE.
//! * [`pmc::pwrm`] - the memory mapped power management window at
//!   PWRMBASE, including the PMC IPC mailbox.
//! * [`pmc::legacy`] - flat constants following Intel's reference naming
//!   convention, for code being ported from EDK2-style firmware.
//!
//! Each register is described by a [`Register`] value giving its
//! addressing domain ([`RegisterSpace`]) and byte offset; bit-level layout
//! comes from `tock_registers::register_bitfields!` groups defined
//! alongside the offsets.
//!
//! Limitations:
//!
//! * Only the PMC function of the PCH is covered.
//! * Serializing IPC command submission is the caller's job. The mailbox
//!   at PWRMBASE is a single shared resource; concurrent writers will
//!   corrupt each other's commands.

#![no_std]

mod regmap;
pub use self::regmap::{PciFunction, Register, RegisterSpace};

pub mod pmc;
