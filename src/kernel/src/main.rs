//! Nappis Kernel Entry Point
//!
//! Boots far enough to run the keyboard driver and echo typed characters to
//! the VGA console.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use nappis_hal::InterruptController;
use nappis_kernel::arch::x86_64::{self, interrupts::PicInterrupts, vga::Color};
use nappis_kernel::boot::{self, Status};
use nappis_kernel::keyboard::{layouts, KEYBOARD_IRQ};
use nappis_kernel::{println, serial_println};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    nappis_kernel::init();
    x86_64::vga::clear_screen();
    boot::log(Status::Ok, "Serial logger ready");

    x86_64::interrupts::init_idt();
    boot::log(Status::Ok, "IDT loaded, PICs remapped");

    nappis_kernel::tests::run_all();
    boot::log(Status::Ok, "Keyboard self-test passed");

    match x86_64::keyboard::init() {
        Ok(()) => {
            boot::log(Status::Ok, "Keyboard driver ready");
            boot::log_detail(format_args!(
                "irq {}, layout '{}'",
                KEYBOARD_IRQ,
                layouts::DEFAULT.name()
            ));
        }
        Err(err) => {
            serial_println!("keyboard init failed: {}", err);
            boot::log(Status::Fail, "Keyboard driver");
        }
    }

    PicInterrupts.enable();
    boot::log(Status::Info, "Interrupts enabled");

    x86_64::vga::set_color(Color::Cyan, Color::Black);
    println!("\n Start typing.\n");
    x86_64::vga::set_color(Color::White, Color::Black);

    x86_64::halt_loop()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    x86_64::vga::set_color(Color::LightRed, Color::Black);
    println!("\n\n!!! KERNEL PANIC !!!");
    x86_64::vga::set_color(Color::White, Color::Black);
    println!("{}", info);

    x86_64::halt_loop()
}
