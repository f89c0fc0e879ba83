//! Interrupt Descriptor Table (IDT), exception handlers and the IRQ handler
//! table behind [`PicInterrupts`].
//!
//! Both 8259 PICs are remapped so IRQ 0..15 land on vectors 32..47. Each
//! vector has a stub that runs whatever handler was registered for its line.

use crate::println;
use lazy_static::lazy_static;
use nappis_hal::{InterruptController, IrqHandler};
use pic8259::ChainedPics;
use spin::Mutex;
use x86_64::instructions::interrupts::without_interrupts;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame, PageFaultErrorCode};

/// Vector of IRQ 0 (master PIC).
pub const PIC_1_OFFSET: u8 = 32;

/// Vector of IRQ 8 (slave PIC).
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Number of IRQ lines served by the chained pair.
pub const IRQ_LINES: usize = 16;

/// The chained PICs.
pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

/// Interrupt vector for an IRQ line.
pub const fn vector(line: u8) -> u8 {
    PIC_1_OFFSET + line
}

/// Handlers registered per IRQ line.
static HANDLERS: Mutex<[Option<IrqHandler>; IRQ_LINES]> = Mutex::new([None; IRQ_LINES]);

macro_rules! irq_stubs {
    ($($name:ident => $line:expr),* $(,)?) => {
        $(
            extern "x86-interrupt" fn $name(_stack_frame: InterruptStackFrame) {
                dispatch_irq($line);
            }
        )*

        const IRQ_STUBS: [extern "x86-interrupt" fn(InterruptStackFrame); IRQ_LINES] = [$($name),*];
    };
}

irq_stubs! {
    irq0 => 0, irq1 => 1, irq2 => 2, irq3 => 3,
    irq4 => 4, irq5 => 5, irq6 => 6, irq7 => 7,
    irq8 => 8, irq9 => 9, irq10 => 10, irq11 => 11,
    irq12 => 12, irq13 => 13, irq14 => 14, irq15 => 15,
}

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        idt.double_fault.set_handler_fn(double_fault_handler);
        idt.page_fault.set_handler_fn(page_fault_handler);
        idt.general_protection_fault.set_handler_fn(general_protection_fault_handler);
        idt.divide_error.set_handler_fn(divide_error_handler);

        // Hardware interrupts
        for (line, stub) in IRQ_STUBS.iter().enumerate() {
            idt[usize::from(vector(line as u8))].set_handler_fn(*stub);
        }

        idt
    };
}

/// Loads the IDT and remaps the PICs. Interrupts stay disabled until
/// [`InterruptController::enable`] is called.
pub fn init_idt() {
    IDT.load();
    unsafe {
        PICS.lock().initialize();
    }
}

/// Runs the handler registered for `line`, then acknowledges the interrupt.
fn dispatch_irq(line: u8) {
    let handler = HANDLERS.lock()[usize::from(line)];
    if let Some(handler) = handler {
        handler();
    }
    PicInterrupts.end_of_interrupt(line);
}

/// [`InterruptController`] over the chained 8259 PICs.
#[derive(Debug, Default, Clone, Copy)]
pub struct PicInterrupts;

impl InterruptController for PicInterrupts {
    fn register_handler(&mut self, line: u8, handler: IrqHandler) {
        let slot = usize::from(line);
        if slot >= IRQ_LINES {
            log::warn!("irq {} out of range, handler not registered", line);
            return;
        }
        without_interrupts(|| {
            HANDLERS.lock()[slot] = Some(handler);
        });
    }

    fn enable(&mut self) {
        x86_64::instructions::interrupts::enable();
    }

    fn end_of_interrupt(&mut self, line: u8) {
        unsafe {
            PICS.lock().notify_end_of_interrupt(vector(line));
        }
    }
}

/// Handler for the breakpoint exception (INT3).
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handler for the double fault exception.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}

/// Handler for the page fault exception.
extern "x86-interrupt" fn page_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: PageFaultErrorCode,
) {
    use x86_64::registers::control::Cr2;

    println!("EXCEPTION: PAGE FAULT");
    println!("Accessed Address: {:?}", Cr2::read());
    println!("Error Code: {:?}", error_code);
    println!("{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}

/// Handler for the general protection fault exception.
extern "x86-interrupt" fn general_protection_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: u64,
) {
    println!("EXCEPTION: GENERAL PROTECTION FAULT");
    println!("Error Code: {:#x}", error_code);
    println!("{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}

/// Handler for the divide error exception.
extern "x86-interrupt" fn divide_error_handler(stack_frame: InterruptStackFrame) {
    println!("EXCEPTION: DIVIDE ERROR\n{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}
