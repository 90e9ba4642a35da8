//! Driver library for the Solomon Systech SSD1305 dot matrix OLED display driver.
//!
//! The SSD1305 drives monochrome panels of up to 132x64 pixels over a 4-wire SPI bus. This crate
//! models the display RAM as an in-memory [`FrameBuffer`](framebuffer::FrameBuffer) in the chip's
//! page-major layout, which application code mutates with pixel, line, and text primitives and
//! then hands to [`Display::flush`](display::Display::flush) once per control loop. The flush is
//! free when nothing has changed, so it can be called unconditionally.
//!
//! Text is typeset from an externally generated glyph table borrowed through
//! [`Font`](font::Font); while no font is attached, text operations are inert.
//!
//! ```no_run
//! # use ssd1305::*;
//! # fn example<DI: ssd1305::interface::DisplayInterface>(iface: DI) -> Result<(), ()> {
//! let mut disp = Display::new(iface);
//! disp.init(Config::new(SegmentRemap::Reverse, ComScanDirection::RowZeroLast))?;
//!
//! let mut frame = FrameBuffer::new();
//! frame.draw_horizontal_line(20);
//! disp.flush(&mut frame)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
mod testing {
    macro_rules! cmds {
        ($($b:expr),*) => {Sent::Commands(vec![$($b,)*])};
    }
}

pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod interface;

// Re-exports for primary API.
pub use crate::command::{consts, ComScanDirection, SegmentRemap};
pub use crate::config::Config;
pub use crate::display::Display;
pub use crate::font::Font;
pub use crate::framebuffer::FrameBuffer;
pub use crate::interface::spi::SpiInterface;
