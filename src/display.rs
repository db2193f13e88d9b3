//! # Main driver struct for the PCD8544
//!
//! In here is the state keeping of the display: geometry, the cursor, the active font and the
//! custom glyphs, plus everything that only sends commands (bring-up, power, contrast, inverse
//! video, addressing). The drawing paths live in [text](crate::text) and [blit](crate::blit).
//!
//! Typically you want to look into the following functions:
//!  - [Pcd8544::new] and [Pcd8544::begin] to bring the controller up
//!  - [Pcd8544::set_contrast] to change the contrast of the display
//!  - [Pcd8544::set_cursor] to choose where the next character lands
//!
//! ## The cursor
//! The cursor is a `(column, line)` pair where a column is one pixel wide and a line is one bank,
//! 8 pixels high. The PCD8544 has a one-way bus, so the driver keeps a shadow copy of the
//! address.
//!
//! Explicit moves with [Pcd8544::set_cursor] wrap the line modulo `height / 9 + 1`, while text
//! running off the right edge wraps it modulo `height / 8`. On the 84x48 glass both are 6. On
//! other geometries they differ and existing layouts depend on that, so it stays.
use hal::{blocking::delay::DelayMs, digital::v2::OutputPin};

use crate::{
    charset,
    config::Config,
    error::Error,
    font::Font,
    instructions::prelude::*,
    transport::{Mode, Transport},
    CUSTOM_GLYPHS,
};

/// main struct for state keeping of the driver
pub struct Pcd8544<'a, T, RST> {
    pub(crate) transport: T,
    rst: RST,
    width: u8,
    height: u8,
    chip: Chip,
    pub(crate) column: u8,
    pub(crate) line: u8,
    pub(crate) inverse_output: bool,
    pub(crate) font: Font<'a>,
    pub(crate) custom: [Option<&'a [u8; 5]>; CUSTOM_GLYPHS],
}

impl<'a, T, RST> Pcd8544<'a, T, RST>
where
    T: Transport,
    RST: OutputPin,
{
    /// Create a new instance of the driver. Nothing is sent until [Pcd8544::begin].
    ///
    /// Arguments:
    ///
    /// - transport: moves bytes to the controller, see [transport](crate::transport)
    /// - rst: Reset, a GPIO OutputPin connected to RST on the display
    pub fn new(transport: T, rst: RST) -> Pcd8544<'a, T, RST> {
        let config = Config::default();
        Pcd8544 {
            transport,
            rst,
            width: config.width(),
            height: config.height(),
            chip: config.chip(),
            column: 0,
            line: 0,
            inverse_output: false,
            font: charset::default_font(),
            custom: [None; CUSTOM_GLYPHS],
        }
    }

    /// Gives the transport and the reset pin back.
    pub fn release(self) -> (T, RST) {
        (self.transport, self.rst)
    }

    /// Hardware resets and initializes the controller, then clears the DDRAM.
    ///
    /// Resetting at power on is _mandatory_, the PCD8544 is in an undefined state until then.
    /// This also forgets all custom glyphs and puts the cursor at the origin.
    pub fn begin<D: DelayMs<u8>>(
        &mut self,
        config: Config,
        delay: &mut D,
    ) -> Result<(), Error<T::Error, RST::Error>> {
        self.width = config.width();
        self.height = config.height();
        self.chip = config.chip();
        self.column = 0;
        self.line = 0;
        self.custom = [None; CUSTOM_GLYPHS];

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "pcd8544: begin {}x{} on {}",
            self.width,
            self.height,
            self.chip
        );

        self.set_reset(true)?;
        self.set_reset(false)?;
        delay.delay_ms(100);
        self.set_reset(true)?;

        self.command(FunctionSet { pd: false, v: false, h: true })?;
        self.command(SetBiasMode(Bias1To48))?;
        match self.chip {
            Chip::St7576 => {
                self.command(SetVop(self.chip.initial_vop()))?;
                self.command(PartialDisplay)?;
            }
            Chip::Pcd8544 => self.command(SetVop(self.chip.initial_vop()))?,
        }
        self.command(FunctionSet { pd: false, v: false, h: false })?;
        self.command(SetDisplayMode(AllSegmentsOn))?;

        self.clear()?;

        self.command(SetDisplayMode(DisplayBlank))?;
        self.command(SetDisplayMode(Normal))?;
        delay.delay_ms(100);

        // the cursor already is at the origin, only the controller needs to know
        self.command(Xaddress(0))?;
        self.command(Yaddress(0))
    }

    /// Clears the display and powers the controller down.
    pub fn stop(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        self.clear()?;
        self.set_power(false)
    }

    /// Zeroes the whole DDRAM, the cursor ends up at the origin.
    pub fn clear(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        self.set_cursor(0, 0)?;
        for _ in 0..(self.width as u16 * self.bands() as u16) {
            self.data(0x00)?;
        }
        self.set_cursor(0, 0)
    }

    /// Zeroes the current line, the cursor ends up at its start.
    pub fn clear_line(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        let line = self.line;
        self.set_cursor(0, line)?;
        for _ in 0..self.width {
            self.data(0x00)?;
        }
        self.set_cursor(0, line)
    }

    /// Power the controller up or down. Down keeps the DDRAM but shows nothing.
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<T::Error, RST::Error>> {
        self.command(FunctionSet { pd: !on, v: false, h: false })
    }

    pub fn display(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        self.set_power(true)
    }

    pub fn no_display(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        self.set_power(false)
    }

    /// Inverse video in the controller, affects everything on screen.
    pub fn set_inverse(&mut self, enabled: bool) -> Result<(), Error<T::Error, RST::Error>> {
        let mode = if enabled { InverseVideo } else { Normal };
        self.command(SetDisplayMode(mode))
    }

    /// Inverse text: glyph bytes drawn from now on are complemented. Bitmaps and bars are not.
    pub fn set_inverse_output(&mut self, enabled: bool) {
        self.inverse_output = enabled;
    }

    /// Set the Vop and therefore the contrast of the LCD
    ///
    /// The level is clamped to what the chip tolerates, see [Chip::clamp_contrast], and then
    /// masked to 7 bits.
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error<T::Error, RST::Error>> {
        let clamped = self.chip.clamp_contrast(level);

        #[cfg(feature = "defmt")]
        if clamped != level {
            defmt::debug!("pcd8544: contrast {} clamped to {}", level, clamped);
        }

        self.command(FunctionSet { pd: false, v: false, h: true })?;
        self.command(SetVop(clamped))?;
        self.command(FunctionSet { pd: false, v: false, h: false })
    }

    /// Moves the cursor to the start of the current line.
    pub fn home(&mut self) -> Result<(), Error<T::Error, RST::Error>> {
        let line = self.line;
        self.set_cursor(0, line)
    }

    /// Moves the cursor, out of range values wrap.
    ///
    /// The column wraps modulo the width, the line modulo `height / 9 + 1`.
    pub fn set_cursor(&mut self, column: u8, line: u8) -> Result<(), Error<T::Error, RST::Error>> {
        self.column = column % self.width;
        self.line = line % self.cursor_lines();

        self.command(Xaddress(self.column))?;
        self.command(Yaddress(self.line))
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn inverse_output(&self) -> bool {
        self.inverse_output
    }

    /// Switches the font used by [Pcd8544::write_byte]. The table stays borrowed.
    pub fn set_font(&mut self, font: Font<'a>) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "pcd8544: font {}px from {=u8:#x}, {} glyphs",
            font.height(),
            font.first_char(),
            font.glyph_count()
        );

        self.font = font;
    }

    pub fn font(&self) -> Font<'a> {
        self.font
    }

    /// number of banks of 8 pixels
    pub(crate) fn bands(&self) -> u8 {
        self.height / 8
    }

    // lines reachable through set_cursor()
    fn cursor_lines(&self) -> u8 {
        self.height / 9 + 1
    }

    /// Advances the cursor after `width` columns have been drawn, wrapping into the next bank.
    pub(crate) fn advance(&mut self, width: u8) {
        self.column = ((self.column as u16 + width as u16) % self.width as u16) as u8;
        if self.column == 0 {
            self.line = ((self.line as u16 + 1) % self.bands() as u16) as u8;
        }
    }

    fn set_reset(&mut self, high: bool) -> Result<(), Error<T::Error, RST::Error>> {
        let result = if high { self.rst.set_high() } else { self.rst.set_low() };
        Error::reset(result)
    }

    pub(crate) fn command(&mut self, instruction: Instruction) -> Result<(), Error<T::Error, RST::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("pcd8544: {}", instruction);

        Error::transport(self.transport.send(Mode::Command, instruction.byte()))
    }

    pub(crate) fn data(&mut self, value: u8) -> Result<(), Error<T::Error, RST::Error>> {
        Error::transport(self.transport.send(Mode::Data, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{surface, DelayFixture, PinFixture, Recorder, Trace};
    use std::vec::Vec;

    #[test]
    fn begin_sends_the_bring_up_sequence() {
        let trace = Trace::default();
        let mut delay = DelayFixture::default();
        let mut lcd = Pcd8544::new(Recorder::default(), PinFixture::new("rst", &trace));
        lcd.begin(Config::default(), &mut delay).unwrap();

        let sent = &lcd.transport.sent;
        let head: Vec<u8> = sent.iter().take(6).map(|&(_, b)| b).collect();
        assert_eq!(head, vec![0x21, 0x13, 0xc2, 0x20, 0x09, 0x80]);
        assert_eq!(sent.iter().filter(|(mode, _)| *mode == Mode::Data).count(), 504);
        let tail: Vec<u8> = sent.iter().rev().take(6).rev().map(|&(_, b)| b).collect();
        assert_eq!(tail, vec![0x80, 0x40, 0x08, 0x0c, 0x80, 0x40]);

        assert_eq!(
            trace.borrow().iter().map(|&(_, level)| level).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert_eq!(delay.waited_ms, 200);
    }

    #[test]
    fn begin_on_st7576_raises_vop_and_enables_partial_display() {
        let lcd = surface(Config::default().with_chip(Chip::St7576));
        assert_eq!(lcd.chip(), Chip::St7576);

        let trace = Trace::default();
        let mut lcd = Pcd8544::new(Recorder::default(), PinFixture::new("rst", &trace));
        lcd.begin(Config::default().with_chip(Chip::St7576), &mut DelayFixture::default())
            .unwrap();
        let head: Vec<u8> = lcd.transport.sent.iter().take(6).map(|&(_, b)| b).collect();
        assert_eq!(head, vec![0x21, 0x13, 0xe0, 0x05, 0x20, 0x09]);
    }

    #[test]
    fn begin_forgets_custom_glyphs() {
        static GLYPH: [u8; 5] = [1, 2, 3, 4, 5];
        let mut lcd = surface(Config::default());
        lcd.create_char(3, &GLYPH);
        assert!(lcd.custom[3].is_some());
        lcd.begin(Config::default(), &mut DelayFixture::default()).unwrap();
        assert!(lcd.custom[3].is_none());
    }

    #[test]
    fn set_cursor_wraps_and_addresses() {
        let mut lcd = surface(Config::default());
        for &(column, line) in &[(0u8, 0u8), (83, 5), (84, 6), (200, 13), (255, 255)] {
            lcd.transport.sent.clear();
            lcd.set_cursor(column, line).unwrap();
            let expected = (column % 84, line % (48 / 9 + 1));
            assert_eq!((lcd.column(), lcd.line()), expected);
            assert_eq!(
                lcd.transport.commands(),
                vec![0x80 | expected.0, 0x40 | expected.1]
            );
        }
    }

    #[test]
    fn set_cursor_uses_the_legacy_line_modulus() {
        // 80 pixels: 10 banks, but only 9 lines reachable through set_cursor
        let mut lcd = surface(Config::new(84, 80, Chip::Pcd8544));
        lcd.set_cursor(0, 9).unwrap();
        assert_eq!(lcd.line(), 0);
        lcd.set_cursor(0, 8).unwrap();
        assert_eq!(lcd.line(), 8);
    }

    #[test]
    fn home_keeps_the_line() {
        let mut lcd = surface(Config::default());
        lcd.set_cursor(40, 3).unwrap();
        lcd.home().unwrap();
        assert_eq!((lcd.column(), lcd.line()), (0, 3));
    }

    #[test]
    fn contrast_is_clamped_and_sent_in_extended_mode() {
        let mut lcd = surface(Config::default());
        lcd.set_contrast(127).unwrap();
        assert_eq!(lcd.transport.commands(), vec![0x21, 0x80 | 90, 0x20]);

        let mut lcd = surface(Config::default().with_chip(Chip::St7576));
        lcd.set_contrast(0).unwrap();
        assert_eq!(lcd.transport.commands(), vec![0x21, 0x80 | 36, 0x20]);
    }

    #[test]
    fn power_and_inverse_video() {
        let mut lcd = surface(Config::default());
        lcd.no_display().unwrap();
        lcd.display().unwrap();
        lcd.set_inverse(true).unwrap();
        lcd.set_inverse(false).unwrap();
        assert_eq!(lcd.transport.commands(), vec![0x24, 0x20, 0x0d, 0x0c]);
    }

    #[test]
    fn clear_line_zeroes_one_bank() {
        let mut lcd = surface(Config::default());
        lcd.set_cursor(17, 2).unwrap();
        lcd.transport.sent.clear();
        lcd.clear_line().unwrap();
        assert_eq!(lcd.transport.data(), vec![0u8; 84]);
        assert_eq!(lcd.transport.commands(), vec![0x80, 0x42, 0x80, 0x42]);
        assert_eq!((lcd.column(), lcd.line()), (0, 2));
    }

    #[test]
    fn stop_clears_then_powers_down() {
        let mut lcd = surface(Config::default());
        lcd.stop().unwrap();
        assert_eq!(lcd.transport.data().len(), 504);
        assert_eq!(lcd.transport.sent.last(), Some(&(Mode::Command, 0x24)));
    }
}
