//! Where font and bitmap bytes are read from
//!
//! On a microcontroller large tables usually stay in flash, and depending on the architecture
//! flash is either memory mapped (a plain `&'static [u8]` works) or needs special reads, like the
//! `lpm` instruction on AVR or a driver for external SPI flash. The drawing code only ever asks
//! for one byte at an offset through [ByteSource], so it does not care which one it is.

/// A read-only table of bytes.
pub trait ByteSource {
    /// Reads the byte at `offset`.
    ///
    /// Reads past the end of the table must not fail, implementations return 0 there.
    fn read_byte(&self, offset: usize) -> u8;
}

impl ByteSource for [u8] {
    #[inline]
    fn read_byte(&self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn read_byte(&self, offset: usize) -> u8 {
        self[..].read_byte(offset)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    #[inline]
    fn read_byte(&self, offset: usize) -> u8 {
        (**self).read_byte(offset)
    }
}

/// Adapts any `Fn(usize) -> u8` into a [ByteSource].
///
/// ```ignore
/// let font = FnSource(|offset| unsafe { avr_progmem::read_byte(FONT.as_ptr().add(offset)) });
/// ```
#[derive(Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: Fn(usize) -> u8> ByteSource for FnSource<F> {
    #[inline]
    fn read_byte(&self, offset: usize) -> u8 {
        (self.0)(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_read_zero_past_the_end() {
        let table: &[u8] = &[1, 2, 3];
        assert_eq!(table.read_byte(2), 3);
        assert_eq!(table.read_byte(3), 0);
        assert_eq!([7u8; 4].read_byte(usize::MAX), 0);
    }

    #[test]
    fn closures_are_sources() {
        let source = FnSource(|offset: usize| offset as u8 ^ 0xff);
        assert_eq!(source.read_byte(0), 0xff);
        assert_eq!(source.read_byte(0x0f), 0xf0);
    }
}
