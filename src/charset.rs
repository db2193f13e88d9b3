//! # Built-in 6x8 ASCII charset
//!
//! The default font of the driver, in the packed (compact header) format described in the
//! [font](crate::font) module. It covers 0x20..=0x7F, every glyph is one bank tall and 6 columns
//! wide: 5 columns of pixels plus one blank spacing column.
//!
//! Bytes are vertical lines of 8 pixels with the least significant bit at the top, which is the
//! layout the PCD8544 DDRAM expects.
//!
//! Not quite ASCII: 0x5C is a yen sign, 0x7E and 0x7F are left and right arrows.

use crate::font::Font;

/// size of the packed table: 3 header bytes, 96 jump records of 4 bytes, 96 glyphs of 6 bytes
pub const CHARSET_LEN: usize = 963;

/// returns the built-in charset as a [Font]
pub fn default_font() -> Font<'static> {
    Font::new(&CHARSET)
}

#[rustfmt::skip]
pub static CHARSET: [u8; CHARSET_LEN] = [
    // header: height, first char, glyph count
    8, 0x20, 96,
    // jump table: offset msb, offset lsb, byte size, width
    0x00, 0x00, 6, 6, // 0x20
    0x00, 0x06, 6, 6, // 0x21
    0x00, 0x0c, 6, 6, // 0x22
    0x00, 0x12, 6, 6, // 0x23
    0x00, 0x18, 6, 6, // 0x24
    0x00, 0x1e, 6, 6, // 0x25
    0x00, 0x24, 6, 6, // 0x26
    0x00, 0x2a, 6, 6, // 0x27
    0x00, 0x30, 6, 6, // 0x28
    0x00, 0x36, 6, 6, // 0x29
    0x00, 0x3c, 6, 6, // 0x2a
    0x00, 0x42, 6, 6, // 0x2b
    0x00, 0x48, 6, 6, // 0x2c
    0x00, 0x4e, 6, 6, // 0x2d
    0x00, 0x54, 6, 6, // 0x2e
    0x00, 0x5a, 6, 6, // 0x2f
    0x00, 0x60, 6, 6, // 0x30
    0x00, 0x66, 6, 6, // 0x31
    0x00, 0x6c, 6, 6, // 0x32
    0x00, 0x72, 6, 6, // 0x33
    0x00, 0x78, 6, 6, // 0x34
    0x00, 0x7e, 6, 6, // 0x35
    0x00, 0x84, 6, 6, // 0x36
    0x00, 0x8a, 6, 6, // 0x37
    0x00, 0x90, 6, 6, // 0x38
    0x00, 0x96, 6, 6, // 0x39
    0x00, 0x9c, 6, 6, // 0x3a
    0x00, 0xa2, 6, 6, // 0x3b
    0x00, 0xa8, 6, 6, // 0x3c
    0x00, 0xae, 6, 6, // 0x3d
    0x00, 0xb4, 6, 6, // 0x3e
    0x00, 0xba, 6, 6, // 0x3f
    0x00, 0xc0, 6, 6, // 0x40
    0x00, 0xc6, 6, 6, // 0x41
    0x00, 0xcc, 6, 6, // 0x42
    0x00, 0xd2, 6, 6, // 0x43
    0x00, 0xd8, 6, 6, // 0x44
    0x00, 0xde, 6, 6, // 0x45
    0x00, 0xe4, 6, 6, // 0x46
    0x00, 0xea, 6, 6, // 0x47
    0x00, 0xf0, 6, 6, // 0x48
    0x00, 0xf6, 6, 6, // 0x49
    0x00, 0xfc, 6, 6, // 0x4a
    0x01, 0x02, 6, 6, // 0x4b
    0x01, 0x08, 6, 6, // 0x4c
    0x01, 0x0e, 6, 6, // 0x4d
    0x01, 0x14, 6, 6, // 0x4e
    0x01, 0x1a, 6, 6, // 0x4f
    0x01, 0x20, 6, 6, // 0x50
    0x01, 0x26, 6, 6, // 0x51
    0x01, 0x2c, 6, 6, // 0x52
    0x01, 0x32, 6, 6, // 0x53
    0x01, 0x38, 6, 6, // 0x54
    0x01, 0x3e, 6, 6, // 0x55
    0x01, 0x44, 6, 6, // 0x56
    0x01, 0x4a, 6, 6, // 0x57
    0x01, 0x50, 6, 6, // 0x58
    0x01, 0x56, 6, 6, // 0x59
    0x01, 0x5c, 6, 6, // 0x5a
    0x01, 0x62, 6, 6, // 0x5b
    0x01, 0x68, 6, 6, // 0x5c
    0x01, 0x6e, 6, 6, // 0x5d
    0x01, 0x74, 6, 6, // 0x5e
    0x01, 0x7a, 6, 6, // 0x5f
    0x01, 0x80, 6, 6, // 0x60
    0x01, 0x86, 6, 6, // 0x61
    0x01, 0x8c, 6, 6, // 0x62
    0x01, 0x92, 6, 6, // 0x63
    0x01, 0x98, 6, 6, // 0x64
    0x01, 0x9e, 6, 6, // 0x65
    0x01, 0xa4, 6, 6, // 0x66
    0x01, 0xaa, 6, 6, // 0x67
    0x01, 0xb0, 6, 6, // 0x68
    0x01, 0xb6, 6, 6, // 0x69
    0x01, 0xbc, 6, 6, // 0x6a
    0x01, 0xc2, 6, 6, // 0x6b
    0x01, 0xc8, 6, 6, // 0x6c
    0x01, 0xce, 6, 6, // 0x6d
    0x01, 0xd4, 6, 6, // 0x6e
    0x01, 0xda, 6, 6, // 0x6f
    0x01, 0xe0, 6, 6, // 0x70
    0x01, 0xe6, 6, 6, // 0x71
    0x01, 0xec, 6, 6, // 0x72
    0x01, 0xf2, 6, 6, // 0x73
    0x01, 0xf8, 6, 6, // 0x74
    0x01, 0xfe, 6, 6, // 0x75
    0x02, 0x04, 6, 6, // 0x76
    0x02, 0x0a, 6, 6, // 0x77
    0x02, 0x10, 6, 6, // 0x78
    0x02, 0x16, 6, 6, // 0x79
    0x02, 0x1c, 6, 6, // 0x7a
    0x02, 0x22, 6, 6, // 0x7b
    0x02, 0x28, 6, 6, // 0x7c
    0x02, 0x2e, 6, 6, // 0x7d
    0x02, 0x34, 6, 6, // 0x7e
    0x02, 0x3a, 6, 6, // 0x7f
    // glyph data
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x20
    0x00, 0x00, 0x5f, 0x00, 0x00, 0x00, // 0x21
    0x00, 0x07, 0x00, 0x07, 0x00, 0x00, // 0x22
    0x14, 0x7f, 0x14, 0x7f, 0x14, 0x00, // 0x23
    0x24, 0x2a, 0x7f, 0x2a, 0x12, 0x00, // 0x24
    0x23, 0x13, 0x08, 0x64, 0x62, 0x00, // 0x25
    0x36, 0x49, 0x55, 0x22, 0x50, 0x00, // 0x26
    0x00, 0x05, 0x03, 0x00, 0x00, 0x00, // 0x27
    0x00, 0x1c, 0x22, 0x41, 0x00, 0x00, // 0x28
    0x00, 0x41, 0x22, 0x1c, 0x00, 0x00, // 0x29
    0x14, 0x08, 0x3e, 0x08, 0x14, 0x00, // 0x2a
    0x08, 0x08, 0x3e, 0x08, 0x08, 0x00, // 0x2b
    0x00, 0x50, 0x30, 0x00, 0x00, 0x00, // 0x2c
    0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // 0x2d
    0x00, 0x60, 0x60, 0x00, 0x00, 0x00, // 0x2e
    0x20, 0x10, 0x08, 0x04, 0x02, 0x00, // 0x2f
    0x3e, 0x51, 0x49, 0x45, 0x3e, 0x00, // 0x30
    0x00, 0x42, 0x7f, 0x40, 0x00, 0x00, // 0x31
    0x42, 0x61, 0x51, 0x49, 0x46, 0x00, // 0x32
    0x21, 0x41, 0x45, 0x4b, 0x31, 0x00, // 0x33
    0x18, 0x14, 0x12, 0x7f, 0x10, 0x00, // 0x34
    0x27, 0x45, 0x45, 0x45, 0x39, 0x00, // 0x35
    0x3c, 0x4a, 0x49, 0x49, 0x30, 0x00, // 0x36
    0x01, 0x71, 0x09, 0x05, 0x03, 0x00, // 0x37
    0x36, 0x49, 0x49, 0x49, 0x36, 0x00, // 0x38
    0x06, 0x49, 0x49, 0x29, 0x1e, 0x00, // 0x39
    0x00, 0x36, 0x36, 0x00, 0x00, 0x00, // 0x3a
    0x00, 0x56, 0x36, 0x00, 0x00, 0x00, // 0x3b
    0x08, 0x14, 0x22, 0x41, 0x00, 0x00, // 0x3c
    0x14, 0x14, 0x14, 0x14, 0x14, 0x00, // 0x3d
    0x00, 0x41, 0x22, 0x14, 0x08, 0x00, // 0x3e
    0x02, 0x01, 0x51, 0x09, 0x06, 0x00, // 0x3f
    0x32, 0x49, 0x79, 0x41, 0x3e, 0x00, // 0x40
    0x7e, 0x11, 0x11, 0x11, 0x7e, 0x00, // 0x41
    0x7f, 0x49, 0x49, 0x49, 0x36, 0x00, // 0x42
    0x3e, 0x41, 0x41, 0x41, 0x22, 0x00, // 0x43
    0x7f, 0x41, 0x41, 0x22, 0x1c, 0x00, // 0x44
    0x7f, 0x49, 0x49, 0x49, 0x41, 0x00, // 0x45
    0x7f, 0x09, 0x09, 0x09, 0x01, 0x00, // 0x46
    0x3e, 0x41, 0x49, 0x49, 0x7a, 0x00, // 0x47
    0x7f, 0x08, 0x08, 0x08, 0x7f, 0x00, // 0x48
    0x00, 0x41, 0x7f, 0x41, 0x00, 0x00, // 0x49
    0x20, 0x40, 0x41, 0x3f, 0x01, 0x00, // 0x4a
    0x7f, 0x08, 0x14, 0x22, 0x41, 0x00, // 0x4b
    0x7f, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x4c
    0x7f, 0x02, 0x0c, 0x02, 0x7f, 0x00, // 0x4d
    0x7f, 0x04, 0x08, 0x10, 0x7f, 0x00, // 0x4e
    0x3e, 0x41, 0x41, 0x41, 0x3e, 0x00, // 0x4f
    0x7f, 0x09, 0x09, 0x09, 0x06, 0x00, // 0x50
    0x3e, 0x41, 0x51, 0x21, 0x5e, 0x00, // 0x51
    0x7f, 0x09, 0x19, 0x29, 0x46, 0x00, // 0x52
    0x46, 0x49, 0x49, 0x49, 0x31, 0x00, // 0x53
    0x01, 0x01, 0x7f, 0x01, 0x01, 0x00, // 0x54
    0x3f, 0x40, 0x40, 0x40, 0x3f, 0x00, // 0x55
    0x1f, 0x20, 0x40, 0x20, 0x1f, 0x00, // 0x56
    0x3f, 0x40, 0x38, 0x40, 0x3f, 0x00, // 0x57
    0x63, 0x14, 0x08, 0x14, 0x63, 0x00, // 0x58
    0x07, 0x08, 0x70, 0x08, 0x07, 0x00, // 0x59
    0x61, 0x51, 0x49, 0x45, 0x43, 0x00, // 0x5a
    0x00, 0x7f, 0x41, 0x41, 0x00, 0x00, // 0x5b
    0x2b, 0x2f, 0xfc, 0x2f, 0x2b, 0x00, // 0x5c
    0x00, 0x41, 0x41, 0x7f, 0x00, 0x00, // 0x5d
    0x04, 0x02, 0x01, 0x02, 0x04, 0x00, // 0x5e
    0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x5f
    0x00, 0x01, 0x02, 0x04, 0x00, 0x00, // 0x60
    0x20, 0x54, 0x54, 0x54, 0x78, 0x00, // 0x61
    0x7f, 0x48, 0x44, 0x44, 0x38, 0x00, // 0x62
    0x38, 0x44, 0x44, 0x44, 0x20, 0x00, // 0x63
    0x38, 0x44, 0x44, 0x48, 0x7f, 0x00, // 0x64
    0x38, 0x54, 0x54, 0x54, 0x18, 0x00, // 0x65
    0x08, 0x7e, 0x09, 0x01, 0x02, 0x00, // 0x66
    0x0c, 0x52, 0x52, 0x52, 0x3e, 0x00, // 0x67
    0x7f, 0x08, 0x04, 0x04, 0x78, 0x00, // 0x68
    0x00, 0x44, 0x7d, 0x40, 0x00, 0x00, // 0x69
    0x20, 0x40, 0x44, 0x3d, 0x00, 0x00, // 0x6a
    0x7f, 0x10, 0x28, 0x44, 0x00, 0x00, // 0x6b
    0x00, 0x41, 0x7f, 0x40, 0x00, 0x00, // 0x6c
    0x7c, 0x04, 0x18, 0x04, 0x78, 0x00, // 0x6d
    0x7c, 0x08, 0x04, 0x04, 0x78, 0x00, // 0x6e
    0x38, 0x44, 0x44, 0x44, 0x38, 0x00, // 0x6f
    0x7c, 0x14, 0x14, 0x14, 0x08, 0x00, // 0x70
    0x08, 0x14, 0x14, 0x18, 0x7c, 0x00, // 0x71
    0x7c, 0x08, 0x04, 0x04, 0x08, 0x00, // 0x72
    0x48, 0x54, 0x54, 0x54, 0x20, 0x00, // 0x73
    0x04, 0x3f, 0x44, 0x40, 0x20, 0x00, // 0x74
    0x3c, 0x40, 0x40, 0x20, 0x7c, 0x00, // 0x75
    0x1c, 0x20, 0x40, 0x20, 0x1c, 0x00, // 0x76
    0x3c, 0x40, 0x30, 0x40, 0x3c, 0x00, // 0x77
    0x44, 0x28, 0x10, 0x28, 0x44, 0x00, // 0x78
    0x0c, 0x50, 0x50, 0x50, 0x3c, 0x00, // 0x79
    0x44, 0x64, 0x54, 0x4c, 0x44, 0x00, // 0x7a
    0x00, 0x08, 0x36, 0x41, 0x00, 0x00, // 0x7b
    0x00, 0x00, 0x7f, 0x00, 0x00, 0x00, // 0x7c
    0x00, 0x41, 0x36, 0x08, 0x00, 0x00, // 0x7d
    0x08, 0x1c, 0x2a, 0x08, 0x08, 0x00, // 0x7e
    0x08, 0x08, 0x2a, 0x1c, 0x08, 0x00, // 0x7f
];
