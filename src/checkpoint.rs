//! Cooperative yield points
//!
//! Drawing a large glyph can mean a few hundred bytes bit banged in a row. On a board that also
//! runs a network stack or a watchdog, the host may want to get control back between bytes.
//! The text drawing functions call [Checkpoint::checkpoint] after every data byte that has been
//! fully sent, and do nothing else with it: no ordering, no cancellation.

pub trait Checkpoint {
    fn checkpoint(&mut self);
}

/// Used when nobody needs to be serviced between bytes
pub struct NoCheckpoint;

impl Checkpoint for NoCheckpoint {
    #[inline]
    fn checkpoint(&mut self) {}
}

/// Calls a closure at every checkpoint, e.g. to feed a watchdog.
pub struct Yield<F>(pub F);

impl<F: FnMut()> Checkpoint for Yield<F> {
    #[inline]
    fn checkpoint(&mut self) {
        (self.0)()
    }
}
