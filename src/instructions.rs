//! # Module defining the instruction set of the PCD8544 family
//!
//! Instructions are enums with their arguments, the source is written to resemble the data sheet.
//! The data sheet can be found here:
//! <https://www.sparkfun.com/datasheets/LCD/Monochrome/Nokia5110.pdf>
//!
//! Two chips are known to speak this protocol: the Philips PCD8544 and the Sitronix
//! ST7576, which is found on some newer "5110" clones. They differ in the usable range of the
//! operating voltage (Vop) and the ST7576 needs partial display mode to behave like a PCD8544.
//!
//! ## Contrast (SetVop)
//! The contrast is the operating voltage of the LCD segments, set in 7 bits. More is darker.
//! The PCD8544 gets Vop = 3.06V + level * 0.06V and should stay below 8.5V in the cold, which
//! limits the level to 90. The ST7576 gets Vop = 2.94V + level * 0.03V and needs at least 4V,
//! so the level should not drop below 36.
//!
//! ## Bias voltage and multiplex rate
//! The standard Nokia 5110 glass has a multiplex ratio of 1:48, that is what the driver sets.

/// The controller chip behind the glass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    /// Philips PCD8544
    Pcd8544,
    /// Sitronix ST7576
    St7576,
}

impl Default for Chip {
    fn default() -> Self {
        Chip::Pcd8544
    }
}

impl From<u8> for Chip {
    /// `1` selects the ST7576, anything else falls back to the PCD8544.
    fn from(model: u8) -> Self {
        match model {
            1 => Chip::St7576,
            _ => Chip::Pcd8544,
        }
    }
}

impl Chip {
    /// highest contrast level that keeps Vop within the safe range of the chip
    pub const PCD8544_MAX_CONTRAST: u8 = 90;
    /// lowest contrast level that keeps Vop above the minimum of the chip
    pub const ST7576_MIN_CONTRAST: u8 = 36;

    /// Keeps a contrast level within the safe Vop range of this chip.
    pub fn clamp_contrast(self, level: u8) -> u8 {
        match self {
            Chip::Pcd8544 => level.min(Self::PCD8544_MAX_CONTRAST),
            Chip::St7576 => level.max(Self::ST7576_MIN_CONTRAST),
        }
    }

    /// Vop level written during bring-up.
    ///
    /// The ST7576 is too faint at the PCD8544 default, it gets a higher one.
    pub fn initial_vop(self) -> u8 {
        match self {
            // 3.06 + 66 * 0.06 = 7V
            Chip::Pcd8544 => 66,
            Chip::St7576 => 96,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The bias voltage for multiplexing the LCD glass.
pub enum MuxRate {
    /// bias voltage for LCD with multiplex ratio 1/100
    Bias1To100 = 0,
    /// bias voltage for LCD with multiplex ratio 1/80
    Bias1To80 = 1,
    /// bias voltage for LCD with multiplex ratio 1/65
    Bias1To65 = 2,
    /// bias voltage for LCD with multiplex ratio 1/48, this is the Nokia 5110.
    Bias1To48 = 3,
    /// bias voltage for LCD with multiplex ratio 1/40
    Bias1To40 = 4,
    /// bias voltage for LCD with multiplex ratio 1/24
    Bias1To24 = 5,
    /// bias voltage for LCD with multiplex ratio 1/18
    Bias1To18 = 6,
    /// bias voltage for LCD with multiplex ratio 1/10
    Bias1To10 = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The display mode (normal, inversed, all black or all blank).
pub enum DisplayMode {
    /// Show a blank screen (all pixels off)
    DisplayBlank = 0b000,

    /// Show image from DDRAM, pixel "on/true" is a black pixel/dot
    Normal = 0b100,

    /// Show a black screen (all pixels on)
    AllSegmentsOn = 0b001,

    /// Show reverse image from DDRAM, pixel "off/false" is a black pixel/dot
    InverseVideo = 0b101,
}

/// PCD8544 instruction set, both basic and "extended" instructions, see data sheet
///
/// PD -> 0=active 1=power down | V -> 0=horizontal 1=vertical addressing | H -> 0=basic 1=extended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// no operation
    // translates to: 0x00
    Nop,

    /// set power down, entry mode and instruction set
    // translates to: 0x20 OR with lowest three bits PD, V, H
    FunctionSet {
        /// power down (standby)
        pd: bool,
        /// vertical addressing
        v: bool,
        /// extended instruction set
        h: bool,
    },

    /// set display configuration (basic)
    // translates to: 0x08 OR with DisplayMode
    SetDisplayMode(DisplayMode),

    /// set Y address (bank) of DDRAM (basic)
    // translates to: 0x40 OR with the bank
    Yaddress(u8),

    /// set X address (column) of DDRAM (basic)
    // translates to: 0x80 OR with the column
    Xaddress(u8),

    /// partial display mode, ST7576 only (extended)
    // translates to: 0x05
    PartialDisplay,

    /// configure the bias voltage level (extended)
    // translates to: 0x10 OR with MuxRate
    SetBiasMode(MuxRate),

    /// set contrast (extended)
    // translates to: 0x80 OR with 7 bits contrast value (0-127)
    SetVop(u8),
}

use Instruction::*;

// Use full binary presentation instead of hex, to look the same as data sheet
impl Instruction {
    /// Returns the instruction as the byte that goes over the wire.
    ///
    /// Addresses are not range checked here, the cursor logic of the driver already wrapped them.
    pub fn byte(self) -> u8 {
        match self {
            Nop => 0b0000_0000,
            FunctionSet { pd, v, h } => 0b0010_0000 | ((pd as u8) << 2) | ((v as u8) << 1) | h as u8,
            SetDisplayMode(mode) => 0b0000_1000 | mode as u8,
            Yaddress(bank) => 0b0100_0000 | bank,
            Xaddress(column) => 0b1000_0000 | column,
            PartialDisplay => 0b0000_0101,
            SetBiasMode(mux) => 0b0001_0000 | mux as u8,
            SetVop(contrast) => 0b1000_0000 | (contrast & 0b0111_1111),
        }
    }

    /// Returns whether the instruction needs the extended instruction set (H=1).
    pub fn extended(self) -> bool {
        matches!(self, PartialDisplay | SetBiasMode(_) | SetVop(_))
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        Chip,
        DisplayMode, DisplayMode::*,
        Instruction, Instruction::*,
        MuxRate, MuxRate::*,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bring_up_bytes() {
        assert_eq!(FunctionSet { pd: false, v: false, h: true }.byte(), 0x21);
        assert_eq!(FunctionSet { pd: false, v: false, h: false }.byte(), 0x20);
        assert_eq!(FunctionSet { pd: true, v: false, h: false }.byte(), 0x24);
        assert_eq!(SetBiasMode(MuxRate::Bias1To48).byte(), 0x13);
        assert_eq!(SetVop(Chip::Pcd8544.initial_vop()).byte(), 0xc2);
        assert_eq!(SetVop(Chip::St7576.initial_vop()).byte(), 0xe0);
        assert_eq!(PartialDisplay.byte(), 0x05);
        assert_eq!(SetDisplayMode(DisplayMode::AllSegmentsOn).byte(), 0x09);
        assert_eq!(SetDisplayMode(DisplayMode::DisplayBlank).byte(), 0x08);
        assert_eq!(SetDisplayMode(DisplayMode::Normal).byte(), 0x0c);
        assert_eq!(SetDisplayMode(DisplayMode::InverseVideo).byte(), 0x0d);
    }

    #[test]
    fn addresses_and_vop_are_masked_into_the_opcode() {
        assert_eq!(Xaddress(83).byte(), 0x80 | 83);
        assert_eq!(Yaddress(5).byte(), 0x45);
        assert_eq!(SetVop(0xff).byte(), 0xff);
        assert_eq!(SetVop(0x80).byte(), 0x80);
    }

    #[test]
    fn extended_instructions() {
        assert!(SetVop(0).extended());
        assert!(SetBiasMode(MuxRate::Bias1To48).extended());
        assert!(!Xaddress(0).extended());
        assert!(!SetDisplayMode(DisplayMode::Normal).extended());
    }

    #[test]
    fn contrast_is_clamped_per_chip() {
        assert_eq!(Chip::Pcd8544.clamp_contrast(127), 90);
        assert_eq!(Chip::Pcd8544.clamp_contrast(10), 10);
        assert_eq!(Chip::St7576.clamp_contrast(10), 36);
        assert_eq!(Chip::St7576.clamp_contrast(127), 127);
    }

    #[test]
    fn unknown_models_fall_back_to_pcd8544() {
        assert_eq!(Chip::from(1), Chip::St7576);
        assert_eq!(Chip::from(0), Chip::Pcd8544);
        assert_eq!(Chip::from(42), Chip::Pcd8544);
    }
}
