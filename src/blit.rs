//! # Bitmaps and bargraphs
//!
//! Both write raw DDRAM bytes at the cursor, one bank at a time. Inverse output does not apply
//! here, use [Pcd8544::set_inverse] to flip the whole screen instead.
use hal::digital::v2::OutputPin;

use crate::{display::Pcd8544, error::Error, source::ByteSource, transport::Transport};

impl<'a, T, RST> Pcd8544<'a, T, RST>
where
    T: Transport,
    RST: OutputPin,
{
    /// Draws a bitmap of `columns` x `lines` banks with its top left corner at the cursor.
    ///
    /// The bitmap is stored row after row, `columns` bytes per bank. Whatever does not fit to
    /// the right or below is clipped. Afterwards the cursor is moved right by `columns`, the full
    /// width and not the clipped one, on the line where the bitmap started.
    pub fn draw_bitmap<S>(
        &mut self,
        data: &S,
        columns: u8,
        lines: u8,
    ) -> Result<(), Error<T::Error, RST::Error>>
    where
        S: ByteSource + ?Sized,
    {
        let scolumn = self.column;
        let sline = self.line;

        let mx = if scolumn as u16 + columns as u16 > self.width() as u16 {
            self.width() - scolumn
        } else {
            columns
        };
        let my = if sline as u16 + lines as u16 > self.bands() as u16 {
            self.bands().saturating_sub(sline)
        } else {
            lines
        };

        for y in 0..my {
            self.set_cursor(scolumn, sline + y)?;
            for x in 0..mx {
                let byte = data.read_byte(y as usize * columns as usize + x as usize);
                self.data(byte)?;
            }
        }

        self.set_cursor(scolumn.wrapping_add(columns), sline)
    }

    /// Draws one column of a bargraph: a vertical bar `value` pixels high, standing on the bottom
    /// of a `lines` banks tall area that starts at the cursor.
    ///
    /// `value` is capped at `lines * 8`. The cursor moves one column to the right.
    pub fn draw_column(&mut self, lines: u8, value: u8) -> Result<(), Error<T::Error, RST::Error>> {
        let scolumn = self.column;
        let sline = self.line;

        let pixels = lines as i16 * 8;
        let value = (value as i16).min(pixels);

        // bank holding the top of the bar, the ones above are empty and the ones below full
        let mark = ((pixels - 1 - value) / 8) as u8;

        for line in 0..mark {
            self.set_cursor(scolumn, sline.wrapping_add(line))?;
            self.data(0x00)?;
        }

        // LSB is the top pixel, so the partial byte keeps the low bits clear
        let shift = (pixels - mark as i16 * 8 - value) as u32;
        let partial = 0xffu8.checked_shl(shift).unwrap_or(0);
        self.set_cursor(scolumn, sline.wrapping_add(mark))?;
        self.data(partial)?;

        for line in mark.saturating_add(1)..lines {
            self.set_cursor(scolumn, sline.wrapping_add(line))?;
            self.data(0xff)?;
        }

        self.set_cursor(scolumn.wrapping_add(1), sline)
    }
}
