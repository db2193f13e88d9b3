//! # Text output
//!
//! Characters are looked up in the active [Font](crate::font::Font) and their columns are sent
//! bank by bank at the cursor. After a glyph the cursor moves right by its width, and when it
//! runs off the right edge it continues at column 0 of the next bank.
//!
//! The driver implements [core::fmt::Write], so `write!()` and `writeln!()` work directly on the
//! display. Every byte of the string is one character code: multi-byte UTF-8 sequences are
//! skipped, and so are control characters like `\n` that sit below the first glyph of the font.
//!
//! Codes 0..32 can also hold custom 5 column glyphs, drawn with [Pcd8544::write_custom].
use core::fmt::{Error as FmtError, Result as FmtResult, Write};

use hal::digital::v2::OutputPin;

use crate::{
    checkpoint::{Checkpoint, NoCheckpoint},
    display::Pcd8544,
    error::Error,
    font::Lookup,
    instructions::prelude::*,
    transport::Transport,
};

impl<'a, T, RST> Pcd8544<'a, T, RST>
where
    T: Transport,
    RST: OutputPin,
{
    /// Draws one character at the cursor.
    ///
    /// Returns the number of bytes consumed: 0 for codes 0x80 and above, 1 otherwise, even if
    /// nothing was drawn.
    pub fn write_byte(&mut self, c: u8) -> Result<usize, Error<T::Error, RST::Error>> {
        self.write_byte_with(c, &mut NoCheckpoint)
    }

    /// Same as [Pcd8544::write_byte], calling `checkpoint` after every data byte.
    pub fn write_byte_with<C: Checkpoint>(
        &mut self,
        c: u8,
        checkpoint: &mut C,
    ) -> Result<usize, Error<T::Error, RST::Error>> {
        let glyph = match self.font.lookup(c) {
            Lookup::NonAscii => return Ok(0),
            Lookup::Skipped => return Ok(1),
            Lookup::Blank { width } => {
                self.advance(width);
                return Ok(1);
            }
            Lookup::Glyph(glyph) => glyph,
        };

        let bands = self.bands() as u16;
        for band in 0..glyph.bands {
            // re-address every bank, the controller would continue in the next column otherwise
            let line = ((self.line as u16 + band as u16) % bands) as u8;
            self.command(Yaddress(line))?;
            self.command(Xaddress(self.column))?;

            for column in 0..glyph.width {
                let byte = self.font.read_byte(glyph.column_offset(band, column));
                self.data(if self.inverse_output { !byte } else { byte })?;
                checkpoint.checkpoint();
            }
        }

        self.advance(glyph.width);
        Ok(1)
    }

    /// Draws all bytes, returns how many were consumed.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Error<T::Error, RST::Error>> {
        let mut consumed = 0;
        for &c in bytes {
            consumed += self.write_byte(c)?;
        }
        Ok(consumed)
    }

    /// Registers a 5 column glyph for a control code (0..32). Other codes are ignored.
    ///
    /// The glyph stays borrowed until it is replaced or [Pcd8544::begin] is called again.
    pub fn create_char(&mut self, code: u8, glyph: &'a [u8; 5]) {
        if let Some(slot) = self.custom.get_mut(code as usize) {
            *slot = Some(glyph);
        }
    }

    /// Returns the custom glyph registered for `code`, if any.
    pub fn custom_glyph(&self, code: u8) -> Option<&'a [u8; 5]> {
        self.custom.get(code as usize).copied().flatten()
    }

    /// Draws the custom glyph of `code` followed by a blank spacing column.
    ///
    /// Returns 0 if nothing is registered for the code.
    pub fn write_custom(&mut self, code: u8) -> Result<usize, Error<T::Error, RST::Error>> {
        let glyph = match self.custom_glyph(code) {
            Some(glyph) => glyph,
            None => return Ok(0),
        };

        let line = self.line;
        let column = self.column;
        self.command(Yaddress(line))?;
        self.command(Xaddress(column))?;

        for &byte in glyph.iter().chain(core::iter::once(&0x00)) {
            self.data(if self.inverse_output { !byte } else { byte })?;
        }

        self.advance(glyph.len() as u8 + 1);
        Ok(1)
    }
}

// with this implementation of write_str, the driver becomes addressable with all the
// standard "Write" functions. Especially the writeln!() macro works directly on the screen.
impl<'a, T, RST> Write for Pcd8544<'a, T, RST>
where
    T: Transport,
    RST: OutputPin,
{
    fn write_str(&mut self, s: &str) -> FmtResult {
        for c in s.bytes() {
            self.write_byte(c).map_err(|_| FmtError)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        checkpoint::Yield,
        config::Config,
        font::Font,
        instructions::Chip,
        testing::surface,
        transport::Mode,
    };
    use std::vec::Vec;

    // 16 pixels high, 'a' and 'b', 'b' is blank
    #[rustfmt::skip]
    const TWO_BANKS: [u8; 3 + 2 * 4 + 6] = [
        16, b'a', 2,
        0x00, 0x00, 6, 3,
        0xff, 0xff, 0, 5,
        0x01, 0x02, 0x03,
        0x11, 0x12, 0x13,
    ];

    #[test]
    fn glyph_is_sent_bank_by_bank() {
        let mut lcd = surface(Config::default());
        lcd.set_font(Font::new(&TWO_BANKS));
        lcd.set_cursor(10, 1).unwrap();
        lcd.transport.sent.clear();

        assert_eq!(lcd.write_byte(b'a').unwrap(), 1);
        assert_eq!(
            lcd.transport.sent,
            vec![
                (Mode::Command, 0x41),
                (Mode::Command, 0x80 | 10),
                (Mode::Data, 0x01),
                (Mode::Data, 0x02),
                (Mode::Data, 0x03),
                (Mode::Command, 0x42),
                (Mode::Command, 0x80 | 10),
                (Mode::Data, 0x11),
                (Mode::Data, 0x12),
                (Mode::Data, 0x13),
            ]
        );
        assert_eq!((lcd.column(), lcd.line()), (13, 1));
    }

    #[test]
    fn lower_banks_wrap_to_the_top() {
        let mut lcd = surface(Config::default());
        lcd.set_font(Font::new(&TWO_BANKS));
        lcd.set_cursor(0, 5).unwrap();
        lcd.transport.sent.clear();

        lcd.write_byte(b'a').unwrap();
        let banks: Vec<u8> = lcd
            .transport
            .commands()
            .into_iter()
            .filter(|b| b & 0xc0 == 0x40)
            .collect();
        assert_eq!(banks, vec![0x45, 0x40]);
    }

    #[test]
    fn non_ascii_is_not_consumed() {
        let mut lcd = surface(Config::default());
        lcd.set_cursor(7, 2).unwrap();
        lcd.transport.sent.clear();

        for c in 0x80..=0xff {
            assert_eq!(lcd.write_byte(c).unwrap(), 0);
        }
        assert!(lcd.transport.sent.is_empty());
        assert_eq!((lcd.column(), lcd.line()), (7, 2));
    }

    #[test]
    fn below_first_char_is_consumed_without_moving() {
        let mut lcd = surface(Config::default());
        lcd.set_cursor(7, 2).unwrap();
        lcd.transport.sent.clear();

        assert_eq!(lcd.write_byte(b'\n').unwrap(), 1);
        assert!(lcd.transport.sent.is_empty());
        assert_eq!((lcd.column(), lcd.line()), (7, 2));
    }

    #[test]
    fn blank_glyph_only_advances() {
        let mut lcd = surface(Config::default());
        lcd.set_font(Font::new(&TWO_BANKS));
        lcd.set_cursor(20, 0).unwrap();
        lcd.transport.sent.clear();

        assert_eq!(lcd.write_byte(b'b').unwrap(), 1);
        assert!(lcd.transport.sent.is_empty());
        assert_eq!(lcd.column(), 25);
    }

    #[test]
    fn inverse_output_complements_glyph_bytes() {
        let mut lcd = surface(Config::default());
        lcd.set_inverse_output(true);
        lcd.transport.sent.clear();

        lcd.write_byte(b'A').unwrap();
        assert_eq!(lcd.transport.data(), vec![0x81, 0xee, 0xee, 0xee, 0x81, 0xff]);
    }

    #[test]
    fn text_wraps_into_the_next_bank() {
        let mut lcd = surface(Config::default());
        // 14 glyphs of 6 columns fill the 84 pixel line exactly
        write!(lcd, "{}", "x".repeat(14)).unwrap();
        assert_eq!((lcd.column(), lcd.line()), (0, 1));
    }

    #[test]
    fn text_wrap_uses_the_bank_count() {
        // 80 pixels: set_cursor reaches lines 0..9, text wraps through 0..10
        let mut lcd = surface(Config::new(84, 80, Chip::Pcd8544));
        lcd.set_cursor(78, 8).unwrap();
        lcd.write_byte(b'x').unwrap();
        assert_eq!((lcd.column(), lcd.line()), (0, 9));

        lcd.set_cursor(78, 9).unwrap();
        assert_eq!(lcd.line(), 0);
    }

    #[test]
    fn last_bank_wraps_to_the_first() {
        let mut lcd = surface(Config::default());
        lcd.set_cursor(78, 5).unwrap();
        lcd.write_byte(b'x').unwrap();
        assert_eq!((lcd.column(), lcd.line()), (0, 0));
    }

    #[test]
    fn checkpoint_runs_after_every_data_byte() {
        let mut lcd = surface(Config::default());
        let mut calls = 0;
        lcd.write_byte_with(b'A', &mut Yield(|| calls += 1)).unwrap();
        lcd.write_byte_with(0x80, &mut Yield(|| calls += 1)).unwrap();
        assert_eq!(calls, 6);
    }

    #[test]
    fn write_bytes_counts_consumed_bytes() {
        let mut lcd = surface(Config::default());
        assert_eq!(lcd.write_bytes("é!".as_bytes()).unwrap(), 1);
        assert_eq!(lcd.write_bytes(b"ok\n").unwrap(), 3);
    }

    #[test]
    fn custom_glyphs_are_drawn_with_spacing() {
        static HEART: [u8; 5] = [0x0c, 0x1e, 0x3c, 0x1e, 0x0c];
        let mut lcd = surface(Config::default());
        lcd.create_char(1, &HEART);
        lcd.create_char(b' ', &HEART);
        assert!(lcd.custom_glyph(b' ').is_none());

        lcd.set_cursor(4, 3).unwrap();
        lcd.transport.sent.clear();
        assert_eq!(lcd.write_custom(1).unwrap(), 1);
        assert_eq!(lcd.transport.commands(), vec![0x43, 0x84]);
        assert_eq!(lcd.transport.data(), vec![0x0c, 0x1e, 0x3c, 0x1e, 0x0c, 0x00]);
        assert_eq!(lcd.column(), 10);

        assert_eq!(lcd.write_custom(2).unwrap(), 0);
        assert_eq!(lcd.column(), 10);
    }

    #[test]
    fn custom_glyphs_honour_inverse_output() {
        static BAR: [u8; 5] = [0xff; 5];
        let mut lcd = surface(Config::default());
        lcd.create_char(0, &BAR);
        lcd.set_inverse_output(true);
        lcd.transport.sent.clear();
        lcd.write_custom(0).unwrap();
        assert_eq!(lcd.transport.data(), vec![0x00, 0x00, 0x00, 0x00, 0x00, 0xff]);
    }
}
