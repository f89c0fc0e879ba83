//! Nappis kernel keyboard driver.
//!
//! Translates raw PS/2 scancodes into ASCII characters while tracking
//! modifier and lock keys.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `keyboard`: Portable driver core (layouts, registry, dispatcher)
//! - `arch`: Platform-specific code (VGA, serial, interrupts, PS/2 port)
//! - `boot`: Boot progress messages on the VGA console
//! - `tests`: Boot-time keyboard self-test
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

pub mod arch;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod boot;
pub mod keyboard;
pub mod tests;

#[cfg(test)]
mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up serial logging and the VGA
/// console, before interrupts are configured.
pub fn init() {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        arch::x86_64::serial::init();
        arch::x86_64::vga::init();
        if arch::x86_64::serial::init_logger(log::LevelFilter::Info).is_err() {
            crate::serial_println!("logger already installed");
        }
    }
}
