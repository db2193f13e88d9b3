//! # Text and bargraph driver for PCD8544 (and ST7576) LCD controllers
//!
//! The PCD8544 is the controller of the Nokia 3310/5110 screens. This crate drives it without a
//! framebuffer: everything is written straight into the controller DDRAM, bank by bank, as columns
//! of 8 pixels. On top of that it renders variable-width packed fonts, raw bitmaps and vertical
//! bars (bargraphs), and handles contrast, power and inverse video.
//!
//! The driver is split into a few small modules:
//!  - [transport] moves single bytes to the controller, either by bit banging GPIO pins or
//!    through a blocking SPI peripheral.
//!  - [source] abstracts where font and bitmap bytes live (RAM, flash, ...).
//!  - [font] decodes the packed font tables, [charset] contains the built-in 6x8 font.
//!  - [display] holds the [Pcd8544] struct with the cursor and all state keeping.
//!  - [text] and [blit] are the drawing paths.
//!
//! ```ignore
//! let transport = GpioTransport::new(clk, din, dc, ce)?;
//! let mut lcd = Pcd8544::new(transport, rst);
//! lcd.begin(Config::default(), &mut delay)?;
//! lcd.set_cursor(0, 2)?;
//! write!(lcd, "Hello World").unwrap();
//! lcd.draw_column(2, 11)?;
//! ```
//!
//! Invalid arguments are never an error: coordinates wrap, bitmaps clip, contrast gets clamped and
//! characters without a glyph are skipped. The only errors are the ones the HAL reports.
#![no_std]

extern crate embedded_hal as hal;

pub mod blit;
pub mod charset;
pub mod checkpoint;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod instructions;
pub mod source;
pub mod text;
pub mod transport;

pub use crate::{
    checkpoint::{Checkpoint, NoCheckpoint, Yield},
    config::Config,
    display::Pcd8544,
    error::Error,
    font::{Font, FontLayout},
    instructions::Chip,
    source::{ByteSource, FnSource},
    transport::{GpioTransport, Mode, SpiTransport, Transport},
};

/// width in pixels of the common Nokia 5110 glass
pub const WIDTH: u8 = 84;
/// height in pixels of the common Nokia 5110 glass
pub const HEIGHT: u8 = 48;
/// number of control codes (0..32) that can hold a custom glyph
pub const CUSTOM_GLYPHS: usize = 32;

// =======================
// For unit tests only!
#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
mod testing;
// =======================
