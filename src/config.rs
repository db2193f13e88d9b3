//! Geometry and chip selection used at bring-up

use crate::{instructions::Chip, HEIGHT, WIDTH};

/// Parameters for [Pcd8544::begin](crate::Pcd8544::begin).
///
/// Defaults to the 84x48 Nokia 5110 glass on a PCD8544. The height is in pixels and is rounded
/// down to whole banks of 8 pixels, the smallest geometry is 1x8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) width: u8,
    pub(crate) height: u8,
    pub(crate) chip: Chip,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            chip: Chip::Pcd8544,
        }
    }
}

impl Config {
    pub fn new(width: u8, height: u8, chip: Chip) -> Self {
        Config::default().with_size(width, height).with_chip(chip)
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width.max(1);
        self.height = (height & !0x07).max(8);
        self
    }

    pub fn with_chip(mut self, chip: Chip) -> Self {
        self.chip = chip;
        self
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
}
