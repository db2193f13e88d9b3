//! # Packed variable-width fonts
//!
//! A font is one read-only byte table with three parts:
//!
//! 1. a header with the glyph height in pixels, the first character code and the glyph count,
//! 2. a jump table with one 4 byte record per glyph: offset msb, offset lsb, byte size, width,
//! 3. the glyph pixel data, all glyphs concatenated.
//!
//! The offset in a jump record is relative to the start of the glyph data. An offset of
//! `0xFFFF` marks a glyph that has no pixels (usually the space), it still has a width.
//!
//! A glyph is `ceil(height / 8)` banks tall. Its bytes are stored bank after bank, `width` bytes
//! per bank, so the byte of column `c` in bank `b` is at `b * width + c`.
//!
//! Two header layouts are in use, see [FontLayout]. The built-in [charset](crate::charset) uses
//! the compact one.
use crate::source::ByteSource;

/// size of one jump table record
pub const JUMPTABLE_BYTES: usize = 4;
const JUMPTABLE_LSB: usize = 1;
const JUMPTABLE_SIZE: usize = 2;
const JUMPTABLE_WIDTH: usize = 3;

/// marks a glyph without pixel data
const BLANK: (u8, u8) = (0xff, 0xff);

/// Position of the header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontLayout {
    /// `height, first char, glyph count`, jump table at byte 3
    Compact,
    /// `max width, height, first char, glyph count`, jump table at byte 4.
    /// This is what the common web based font generators for small OLEDs produce.
    WidthPrefixed,
}

impl FontLayout {
    fn height_pos(self) -> usize {
        match self {
            FontLayout::Compact => 0,
            FontLayout::WidthPrefixed => 1,
        }
    }

    fn first_char_pos(self) -> usize {
        self.height_pos() + 1
    }

    fn glyph_count_pos(self) -> usize {
        self.height_pos() + 2
    }

    fn jumptable_start(self) -> usize {
        self.height_pos() + 3
    }
}

/// The result of looking up a character in a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lookup {
    /// 0x80 and above, fonts are 7 bit only. Nothing is drawn, nothing is consumed.
    NonAscii,
    /// below the first character of the font. Nothing is drawn and the cursor stays.
    Skipped,
    /// glyph without pixel data, the cursor still advances by `width`
    Blank { width: u8 },
    /// a glyph to draw
    Glyph(Glyph),
}

/// Location and size of a glyph inside the font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// absolute offset of the first byte in the font table
    pub offset: usize,
    /// number of data bytes as recorded in the jump table
    pub byte_size: u8,
    /// width in columns
    pub width: u8,
    /// height in banks of 8 pixels
    pub bands: u8,
}

impl Glyph {
    /// Absolute offset of the byte for `column` in `band`.
    pub fn column_offset(&self, band: u8, column: u8) -> usize {
        self.offset + band as usize * self.width as usize + column as usize
    }
}

#[derive(Clone, Copy)]
enum Table<'a> {
    Slice(&'a [u8]),
    Source(&'a dyn ByteSource),
}

impl ByteSource for Table<'_> {
    #[inline]
    fn read_byte(&self, offset: usize) -> u8 {
        match self {
            Table::Slice(data) => data.read_byte(offset),
            Table::Source(source) => source.read_byte(offset),
        }
    }
}

/// A borrowed packed font table.
#[derive(Clone, Copy)]
pub struct Font<'a> {
    table: Table<'a>,
    layout: FontLayout,
}

impl<'a> Font<'a> {
    /// A font in memory, compact header.
    pub fn new(data: &'a [u8]) -> Font<'a> {
        Font {
            table: Table::Slice(data),
            layout: FontLayout::Compact,
        }
    }

    /// A font read through any [ByteSource], e.g. from program memory, compact header.
    pub fn from_source(source: &'a dyn ByteSource) -> Font<'a> {
        Font {
            table: Table::Source(source),
            layout: FontLayout::Compact,
        }
    }

    pub fn with_layout(mut self, layout: FontLayout) -> Font<'a> {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> FontLayout {
        self.layout
    }

    /// glyph height in pixels
    pub fn height(&self) -> u8 {
        self.read_byte(self.layout.height_pos())
    }

    pub fn first_char(&self) -> u8 {
        self.read_byte(self.layout.first_char_pos())
    }

    pub fn glyph_count(&self) -> u8 {
        self.read_byte(self.layout.glyph_count_pos())
    }

    /// glyph height in banks, rounded up
    pub fn bands(&self) -> u8 {
        ((self.height() as u16 + 7) / 8) as u8
    }

    /// Reads one byte of the table.
    #[inline]
    pub fn read_byte(&self, offset: usize) -> u8 {
        self.table.read_byte(offset)
    }

    /// Resolves a character code to its glyph.
    ///
    /// Codes between the first character and 0x80 are not checked against the glyph count,
    /// their jump record is read wherever it lands.
    pub fn lookup(&self, c: u8) -> Lookup {
        if c >= 0x80 {
            return Lookup::NonAscii;
        }

        let first_char = self.first_char();
        if c < first_char {
            return Lookup::Skipped;
        }

        let jumptable_start = self.layout.jumptable_start();
        let jumptable_span = self.glyph_count() as usize * JUMPTABLE_BYTES;
        let record = jumptable_start + (c - first_char) as usize * JUMPTABLE_BYTES;

        let msb = self.read_byte(record);
        let lsb = self.read_byte(record + JUMPTABLE_LSB);
        let byte_size = self.read_byte(record + JUMPTABLE_SIZE);
        let width = self.read_byte(record + JUMPTABLE_WIDTH);

        if (msb, lsb) == BLANK {
            return Lookup::Blank { width };
        }

        Lookup::Glyph(Glyph {
            offset: jumptable_start + jumptable_span + ((msb as usize) << 8 | lsb as usize),
            byte_size,
            width,
            bands: self.bands(),
        })
    }
}
