//! Errors of the driver
//!
//! Arguments never cause an error, only the hardware can. The transport and the reset pin may
//! have different error types (a SPI transport for example), so both are kept apart.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<TransportErr, PinErr> {
    /// sending a byte failed
    Transport(TransportErr),
    /// driving the reset line failed
    Reset(PinErr),
}

impl<TransportErr, PinErr> Error<TransportErr, PinErr> {
    pub(crate) fn transport<T>(result: Result<T, TransportErr>) -> Result<T, Self> {
        result.map_err(Error::Transport)
    }

    pub(crate) fn reset<T>(result: Result<T, PinErr>) -> Result<T, Self> {
        result.map_err(Error::Reset)
    }
}
