//! The main API to the display driver. It provides a builder API to configure the display at
//! bring-up, and the dirty-gated flush that moves framebuffer contents onto the panel.

use crate::command::consts::*;
use crate::command::*;
use crate::config::{Config, PersistentConfig};
use crate::framebuffer::FrameBuffer;
use crate::interface;

/// A driver for an SSD1305 display.
///
/// The driver owns only the bus interface; image state lives in a [`FrameBuffer`] that the
/// application owns and passes to [`flush`](Display::flush). This keeps the buffer free to be
/// drawn into and inspected without borrowing the bus.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    persistent_config: Option<PersistentConfig>,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for a display connected to the interface `iface`.
    pub fn new(iface: DI) -> Self {
        Display {
            iface: iface,
            persistent_config: None,
        }
    }

    /// Initialize the display with a config message.
    ///
    /// This is the one-time bring-up: the panel is put to sleep, the configuration and
    /// orientation registers are programmed, the address pointer is set to walk the RAM in
    /// page-major order, the RAM is zeroed (its power-up contents are undefined), and the panel
    /// is woken.
    pub fn init(&mut self, config: Config) -> Result<(), ()> {
        self.sleep(true)?;
        config.send(&mut self.iface)?;
        self.persistent_config = Some(config.persistent_config);
        Command::SetMultiplexRatio(PIXEL_HEIGHT as u8).send(&mut self.iface)?;
        Command::SetDisplayOffset(0).send(&mut self.iface)?;
        Command::SetStartLine(0).send(&mut self.iface)?;
        self.persistent_config
            .as_ref()
            .unwrap()
            .send(&mut self.iface)?;
        Command::SetEntireDisplayOn(false).send(&mut self.iface)?;
        Command::SetInverse(false).send(&mut self.iface)?;
        Command::SetMemoryAddressingMode(AddressMode::Horizontal).send(&mut self.iface)?;

        // Power-up RAM contents are undefined; blank them page by page.
        let zeros = [0x00; BUFFER_WIDTH];
        for _ in 0..PAGE_COUNT {
            self.iface.send_data(&zeros)?;
        }

        self.sleep(false)
    }

    /// Control sleep mode.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), ()> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Control the bank-0 contrast current.
    pub fn contrast(&mut self, contrast: u8) -> Result<(), ()> {
        Command::SetContrast(contrast).send(&mut self.iface)
    }

    /// Control display inversion.
    pub fn invert(&mut self, enabled: bool) -> Result<(), ()> {
        Command::SetInverse(enabled).send(&mut self.iface)
    }

    /// Transmit `frame` to the display if it has changed since its last successful flush.
    ///
    /// Safe to call unconditionally once per control loop iteration: a clean buffer returns
    /// without any bus activity. All 1056 bytes travel as a single data-mode transaction in
    /// page-major order. On a transmission error the dirty flag is left set, so the next flush
    /// retries the same content; nothing partially transmitted is ever considered sent.
    pub fn flush(&mut self, frame: &mut FrameBuffer) -> Result<(), ()> {
        if !frame.is_dirty() {
            return Ok(());
        }
        self.iface.send_data(frame.bytes())?;
        frame.mark_clean();
        Ok(())
    }
}
