//! Keyboard driver: scancode translation with modifier tracking.
//!
//! # Architecture
//!
//! - `layout`: per-layout character maps and modifier key assignments
//! - `layouts`: the compiled-in layouts (`us`, `dvorak`)
//! - `registry`: the active layout and the live modifier mask
//! - `dispatch`: the press/release state machine run on every interrupt
//! - `translate`: picks the normal or shifted character for a key
//!
//! The functions at this level drive a single process-wide registry, created
//! by [`initialize_keyboard_driver`]. The building blocks can also be used on
//! their own with a private [`LayoutRegistry`].

pub mod dispatch;
pub mod layout;
pub mod layouts;
pub mod registry;
pub mod translate;

pub use dispatch::{dispatch, Dispatch};
pub use layout::Layout;
pub use registry::{LayoutRegistry, ModifierState};
pub use translate::translate;

use nappis_common::{DriverError, LayoutError, Modifiers};
use nappis_hal::{CharacterSink, InterruptController, IrqHandler, ScancodeSource};
use spin::Once;

/// Interrupt line of the PS/2 keyboard.
pub const KEYBOARD_IRQ: u8 = 1;

/// Driver settings applied at initialization.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Interrupt line the dispatcher is bound to.
    pub irq_line: u8,
    /// Layout active after initialization.
    pub default_layout: &'static Layout,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            irq_line: KEYBOARD_IRQ,
            default_layout: layouts::DEFAULT,
        }
    }
}

static REGISTRY: Once<LayoutRegistry> = Once::new();

/// Installs the default layout and binds `handler` to the keyboard line.
///
/// `handler` is expected to call [`handle_interrupt`] with the platform's
/// scancode port and character sink.
pub fn initialize_keyboard_driver<C>(
    controller: &mut C,
    handler: IrqHandler,
) -> Result<(), DriverError>
where
    C: InterruptController + ?Sized,
{
    initialize_with(DriverConfig::default(), controller, handler)
}

/// Same as [`initialize_keyboard_driver`] with explicit settings.
pub fn initialize_with<C>(
    config: DriverConfig,
    controller: &mut C,
    handler: IrqHandler,
) -> Result<(), DriverError>
where
    C: InterruptController + ?Sized,
{
    config.default_layout.validate()?;

    let mut installed = false;
    REGISTRY.call_once(|| {
        installed = true;
        LayoutRegistry::new(config.default_layout)
    });
    if !installed {
        return Err(DriverError::AlreadyInitialized);
    }

    controller.register_handler(config.irq_line, handler);
    log::info!(
        "keyboard: irq {} bound, layout '{}'",
        config.irq_line,
        config.default_layout.name()
    );
    Ok(())
}

/// The process-wide registry, once the driver is initialized.
pub fn registry() -> Option<&'static LayoutRegistry> {
    REGISTRY.get()
}

/// Interrupt entry point: reads exactly one byte and dispatches it.
///
/// Must not be re-entered. Before initialization the byte is still read, so
/// the controller's output buffer is drained, and then dropped.
pub fn handle_interrupt<P, S>(port: &mut P, sink: &mut S) -> Dispatch
where
    P: ScancodeSource + ?Sized,
    S: CharacterSink + ?Sized,
{
    let byte = port.read_scancode();
    match REGISTRY.get() {
        Some(registry) => dispatch(registry, byte, sink),
        None => Dispatch::NotReady,
    }
}

/// Replaces the active layout. Modifier state is kept as is.
pub fn switch_layout(layout: &'static Layout) -> Result<(), DriverError> {
    let registry = REGISTRY.get().ok_or(DriverError::NotInitialized)?;
    match registry.switch_layout(layout) {
        Ok(previous) => {
            log::info!("keyboard: layout '{}' -> '{}'", previous.name(), layout.name());
            Ok(())
        }
        Err(err) => {
            log::warn!("keyboard: layout '{}' rejected: {}", layout.name(), err);
            Err(err.into())
        }
    }
}

/// Switches to the built-in layout called `name`.
pub fn switch_layout_by_name(name: &str) -> Result<(), DriverError> {
    let layout = layouts::by_name(name).ok_or(LayoutError::Unknown)?;
    switch_layout(layout)
}

/// Snapshot of the live modifier mask; empty before initialization.
pub fn modifiers() -> Modifiers {
    REGISTRY
        .get()
        .map_or(Modifiers::empty(), |registry| registry.modifiers().get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{RecordingController, RecordingSink, ScriptedPort};
    use core::sync::atomic::{AtomicUsize, Ordering};
    use nappis_common::scancode::{MAP_LEN, NO_CHAR};

    static FIRED: AtomicUsize = AtomicUsize::new(0);
    static EMPTY: Layout = Layout::new(
        "empty",
        [NO_CHAR; MAP_LEN],
        [NO_CHAR; MAP_LEN],
        layouts::PC_MODIFIERS,
    );

    fn count_irq() {
        FIRED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.irq_line, 1);
        assert_eq!(config.default_layout.name(), "us");
    }

    #[test]
    fn test_rejected_default_layout_installs_nothing() {
        let mut controller = RecordingController::new();
        let config = DriverConfig {
            irq_line: KEYBOARD_IRQ,
            default_layout: &EMPTY,
        };
        assert_eq!(
            initialize_with(config, &mut controller, count_irq),
            Err(DriverError::Layout(LayoutError::Empty))
        );
        assert!(controller.lines().is_empty());
    }

    // The only test that touches the process-wide registry.
    #[test]
    fn test_driver_lifecycle() {
        let mut sink = RecordingSink::new();

        // before initialization
        let mut port = ScriptedPort::new(&[30]);
        assert_eq!(handle_interrupt(&mut port, &mut sink), Dispatch::NotReady);
        assert_eq!(port.reads(), 1);
        assert_eq!(switch_layout(&layouts::DVORAK), Err(DriverError::NotInitialized));
        assert_eq!(modifiers(), Modifiers::empty());
        assert!(registry().is_none());

        let mut controller = RecordingController::new();
        initialize_keyboard_driver(&mut controller, count_irq).unwrap();
        assert_eq!(controller.lines(), [KEYBOARD_IRQ]);
        assert!(controller.fire(KEYBOARD_IRQ));
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);
        assert_eq!(controller.eoi(), &[KEYBOARD_IRQ]);
        assert!(!controller.is_enabled());
        controller.enable();
        assert!(controller.is_enabled());
        assert_eq!(registry().map(|r| r.active().name()), Some("us"));

        let mut again = RecordingController::new();
        assert_eq!(
            initialize_keyboard_driver(&mut again, count_irq),
            Err(DriverError::AlreadyInitialized)
        );
        assert!(again.lines().is_empty());

        // one byte per interrupt: caps lock, then 'a' twice
        let mut port = ScriptedPort::new(&[58, 30, 58 | 0x80, 30]);
        for _ in 0..4 {
            handle_interrupt(&mut port, &mut sink);
        }
        assert_eq!(port.remaining(), 0);
        assert_eq!(sink.as_str(), "AA");
        assert_eq!(modifiers(), Modifiers::CAPS_LOCK);

        switch_layout_by_name("dvorak").unwrap();
        assert_eq!(
            switch_layout_by_name("colemak"),
            Err(DriverError::Layout(LayoutError::Unknown))
        );
        assert_eq!(
            switch_layout(&EMPTY),
            Err(DriverError::Layout(LayoutError::Empty))
        );
        assert_eq!(registry().map(|r| r.active().name()), Some("dvorak"));

        // caps lock survives the switch
        let mut port = ScriptedPort::new(&[31, 58, 31]);
        for _ in 0..3 {
            handle_interrupt(&mut port, &mut sink);
        }
        assert_eq!(sink.as_str(), "AAOo");
        assert_eq!(modifiers(), Modifiers::empty());

        // out of range: nothing emitted, state untouched
        let before = sink.emitted().len();
        let mut port = ScriptedPort::new(&[0x60]);
        assert_eq!(handle_interrupt(&mut port, &mut sink), Dispatch::OutOfRange(0x60));
        assert_eq!(sink.emitted().len(), before);
        assert_eq!(modifiers(), Modifiers::empty());
    }
}
