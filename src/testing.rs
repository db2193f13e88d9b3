//! Fixtures for the unit tests: a transport that records, pins that trace, a delay that counts.
use core::{cell::RefCell, convert::Infallible};
use std::{rc::Rc, vec::Vec};

use hal::{blocking::delay::DelayMs, blocking::spi::Write as SpiWrite, digital::v2::OutputPin};

use crate::{
    config::Config,
    display::Pcd8544,
    transport::{Mode, Transport},
};

/// Every byte sent, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub sent: Vec<(Mode, u8)>,
}

impl Recorder {
    pub fn commands(&self) -> Vec<u8> {
        self.filtered(Mode::Command)
    }

    pub fn data(&self) -> Vec<u8> {
        self.filtered(Mode::Data)
    }

    fn filtered(&self, mode: Mode) -> Vec<u8> {
        self.sent
            .iter()
            .filter(|(m, _)| *m == mode)
            .map(|&(_, b)| b)
            .collect()
    }
}

impl Transport for Recorder {
    type Error = Infallible;

    fn send(&mut self, mode: Mode, value: u8) -> Result<(), Infallible> {
        self.sent.push((mode, value));
        Ok(())
    }
}

/// Shared log of `(pin name, level)` for pins that need to be checked against each other.
pub type Trace = Rc<RefCell<Vec<(&'static str, bool)>>>;

pub struct PinFixture {
    name: &'static str,
    trace: Trace,
}

impl PinFixture {
    pub fn new(name: &'static str, trace: &Trace) -> Self {
        PinFixture {
            name,
            trace: trace.clone(),
        }
    }
}

impl OutputPin for PinFixture {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.trace.borrow_mut().push((self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.trace.borrow_mut().push((self.name, true));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SpiFixture {
    pub written: Vec<u8>,
}

impl SpiWrite<u8> for SpiFixture {
    type Error = Infallible;

    fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
        self.written.extend_from_slice(words);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DelayFixture {
    pub waited_ms: u32,
}

impl DelayMs<u8> for DelayFixture {
    fn delay_ms(&mut self, ms: u8) {
        self.waited_ms += ms as u32;
    }
}

/// A display after begin(), with the bring-up bytes already forgotten.
pub fn surface(config: Config) -> Pcd8544<'static, Recorder, PinFixture> {
    let trace = Trace::default();
    let mut lcd = Pcd8544::new(Recorder::default(), PinFixture::new("rst", &trace));
    lcd.begin(config, &mut DelayFixture::default()).unwrap();
    lcd.transport.sent.clear();
    lcd
}
