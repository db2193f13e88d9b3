//! Byte transports to the controller
//!
//! The PCD8544 only listens: it has a clock and a data input, a data/command select and a chip
//! enable, nothing is ever read back. A [Transport] sends one byte in either mode.
//!
//! Two implementations are provided. [GpioTransport] bit banges the byte over four GPIO pins,
//! most significant bit first, which is what the chip expects. [SpiTransport] hands the byte to a
//! blocking SPI peripheral (mode 0, at most 4 Mbit/s) and only drives DC and CE itself.
use hal::{blocking::spi::Write as SpiWrite, digital::v2::OutputPin};

/// What the controller should do with a byte: interpret it as an instruction, or store it in DDRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// DC low, the byte goes to the instruction register
    Command,
    /// DC high, the byte goes to DDRAM at the current address
    Data,
}

pub trait Transport {
    type Error;

    /// Sends one byte, framed by chip enable.
    fn send(&mut self, mode: Mode, value: u8) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send(&mut self, mode: Mode, value: u8) -> Result<(), T::Error> {
        (**self).send(mode, value)
    }
}

/// Bit banged transport over four output pins.
pub struct GpioTransport<CLK, DIN, DC, CE> {
    clk: CLK,
    din: DIN,
    dc: DC,
    ce: CE,
}

impl<CLK, DIN, DC, CE, ERR> GpioTransport<CLK, DIN, DC, CE>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DC: OutputPin<Error = ERR>,
    CE: OutputPin<Error = ERR>,
{
    /// Takes the pins, leaving the clock low and the chip deselected.
    pub fn new(
        mut clk: CLK,
        din: DIN,
        dc: DC,
        mut ce: CE,
    ) -> Result<GpioTransport<CLK, DIN, DC, CE>, ERR> {
        clk.set_low()?;
        ce.set_high()?;
        Ok(GpioTransport { clk, din, dc, ce })
    }

    /// Gives the pins back.
    pub fn release(self) -> (CLK, DIN, DC, CE) {
        (self.clk, self.din, self.dc, self.ce)
    }

    // data is sampled on the rising edge
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.din.set_high()?;
        } else {
            self.din.set_low()?;
        }
        self.clk.set_high()?;
        self.clk.set_low()
    }
}

impl<CLK, DIN, DC, CE, ERR> Transport for GpioTransport<CLK, DIN, DC, CE>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DC: OutputPin<Error = ERR>,
    CE: OutputPin<Error = ERR>,
{
    type Error = ERR;

    fn send(&mut self, mode: Mode, mut value: u8) -> Result<(), ERR> {
        match mode {
            Mode::Data => self.dc.set_high()?,
            Mode::Command => self.dc.set_low()?,
        }
        self.ce.set_low()?;
        for _ in 0..8 {
            self.write_bit((value & 0x80) == 0x80)?;
            value <<= 1;
        }
        self.ce.set_high()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError<PinErr, SpiErr> {
    Pin(PinErr),
    Spi(SpiErr),
}

/// Transport over a blocking SPI peripheral.
pub struct SpiTransport<SPI, DC, CE> {
    spi: SPI,
    dc: DC,
    ce: CE,
}

impl<SPI, DC, CE, PinErr, SpiErr> SpiTransport<SPI, DC, CE>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    CE: OutputPin<Error = PinErr>,
{
    pub fn new(spi: SPI, dc: DC, mut ce: CE) -> Result<SpiTransport<SPI, DC, CE>, PinErr> {
        ce.set_high()?;
        Ok(SpiTransport { spi, dc, ce })
    }

    pub fn release(self) -> (SPI, DC, CE) {
        (self.spi, self.dc, self.ce)
    }
}

impl<SPI, DC, CE, PinErr, SpiErr> Transport for SpiTransport<SPI, DC, CE>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    CE: OutputPin<Error = PinErr>,
{
    type Error = SpiTransportError<PinErr, SpiErr>;

    fn send(&mut self, mode: Mode, value: u8) -> Result<(), Self::Error> {
        let dc = match mode {
            Mode::Data => self.dc.set_high(),
            Mode::Command => self.dc.set_low(),
        };
        dc.map_err(SpiTransportError::Pin)?;
        self.ce.set_low().map_err(SpiTransportError::Pin)?;
        self.spi.write(&[value]).map_err(SpiTransportError::Spi)?;
        self.ce.set_high().map_err(SpiTransportError::Pin)
    }
}
