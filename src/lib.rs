//! A platform-agnostic driver for the PCF8523 battery-backed real-time clock.
//!
//! The PCF8523 keeps time across power loss on a backup battery. This crate
//! mirrors the device's 20-byte register file in memory, converts between
//! the BCD-packed time registers and chrono's `NaiveDateTime` (always UTC),
//! and keeps a host clock in sync with the device:
//!
//! - [`Pcf8523::read_time`] reads the full register block, validates the
//!   held time and pushes the resulting epoch into a [`HostClock`] — unless
//!   the oscillator stop flag is set or the time is invalid.
//! - [`Pcf8523::write_time`] takes the host clock's current time, encodes
//!   it into the register block (clearing the stop flag and forcing battery
//!   switch-over back to standard mode) and writes the whole block back.
//!
//! Transfers always cover the entire register file: sub-byte fields for
//! unrelated features share bytes with the time fields, and a partial write
//! could corrupt them.
//!
//! Scheduling is the caller's business — call `read_time` periodically and
//! `write_time` on demand. The bus is any `embedded-hal` 1.0 `I2c`
//! implementation; the `async` feature provides the same driver over
//! `embedded-hal-async` in the [`asynch`] module.
//!
//! # Example
//!
//! ```rust,ignore
//! use pcf8523::{Pcf8523, DEFAULT_ADDRESS};
//!
//! let mut rtc = Pcf8523::new(i2c, DEFAULT_ADDRESS, clock);
//!
//! // Fetch the device state once at startup
//! rtc.setup()?;
//!
//! // Periodically: push the RTC time into the host clock
//! rtc.read_time()?;
//!
//! // On demand: persist the host clock into the RTC
//! rtc.write_time()?;
//! ```
#![no_std]

#[macro_use]
mod macros;
mod datetime;
mod registers;

#[cfg(feature = "async")]
pub mod asynch;

pub use datetime::Pcf8523DateTimeError;
pub use registers::*;

use chrono::NaiveDateTime;
use embedded_hal::i2c::I2c;

/// Factory-fixed I2C address of the PCF8523 (7-bit).
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Host clock collaborator kept in sync with the RTC.
///
/// Implemented by the system time source of the integration, e.g. a
/// monotonic-clock-backed wall time that is also disciplined by NTP.
pub trait HostClock {
    /// Returns the current UTC time, or `None` while the clock has no
    /// valid time yet.
    fn now_utc(&self) -> Option<NaiveDateTime>;

    /// Applies a synchronized timestamp as seconds since the UNIX epoch.
    /// The value is UTC; timezone handling happens downstream of this call.
    fn synchronize_epoch(&mut self, epoch_seconds: i64);
}

/// Errors returned by the PCF8523 driver.
#[derive(Debug)]
pub enum Pcf8523Error<I2CE> {
    /// I2C transport error
    I2c(I2CE),
    /// Date/time conversion or validation error
    DateTime(Pcf8523DateTimeError),
    /// The oscillator stop flag is set; the held time is unreliable until
    /// the next successful time write
    OscillatorStopped,
    /// The host clock has no valid time to write
    ClockUnsynchronized,
    /// Setup failed; the driver is unavailable for this session
    Failed,
}

impl<I2CE> From<I2CE> for Pcf8523Error<I2CE> {
    fn from(e: I2CE) -> Self {
        Pcf8523Error::I2c(e)
    }
}

/// PCF8523 Real-Time Clock driver.
///
/// Owns the bus handle, the host clock and an in-memory mirror of the
/// device's register file. The mirror is overwritten wholesale by every
/// read and serialized wholesale by every write; registers the time logic
/// does not touch (alarms, timers, CLKOUT) pass through unchanged.
pub struct Pcf8523<I2C, CLK> {
    i2c: I2C,
    address: u8,
    clock: CLK,
    registers: RegisterBlock,
    failed: bool,
}

impl<I2C: I2c, CLK: HostClock> Pcf8523<I2C, CLK> {
    /// Creates a new PCF8523 driver instance.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus implementation
    /// * `address` - The I2C address of the device (typically [`DEFAULT_ADDRESS`])
    /// * `clock` - The host clock to synchronize
    pub fn new(i2c: I2C, address: u8, clock: CLK) -> Self {
        Self {
            i2c,
            address,
            clock,
            registers: RegisterBlock::default(),
            failed: false,
        }
    }

    /// Performs the initial full-block read.
    ///
    /// A transport failure here marks the driver failed for the rest of the
    /// session; every subsequent cycle short-circuits with
    /// [`Pcf8523Error::Failed`]. Retry policy belongs to the caller's
    /// scheduler, not to the driver.
    pub fn setup(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        if let Err(e) = self.read_registers() {
            error!("Initial register read failed, marking PCF8523 failed");
            self.failed = true;
            return Err(e);
        }
        Ok(())
    }

    /// Returns true when setup failed and the driver is unavailable.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Returns the register mirror as last read from (or encoded for) the
    /// device.
    pub fn registers(&self) -> &RegisterBlock {
        &self.registers
    }

    /// Performs one read cycle: fetch the register block, validate the held
    /// time and synchronize the host clock with the resulting epoch.
    ///
    /// No synchronization happens when the oscillator stop flag is set (the
    /// held time is unreliable until rewritten) or when the registers do
    /// not form a valid calendar time.
    pub fn read_time(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        self.ensure_available()?;
        self.read_registers()?;
        if self.registers.oscillator_stopped() {
            warn!("RTC oscillator stopped, not syncing host clock");
            return Err(Pcf8523Error::OscillatorStopped);
        }
        let datetime = match self.registers.decode_datetime() {
            Ok(datetime) => datetime,
            Err(e) => {
                error!("Invalid RTC time, not syncing host clock");
                return Err(Pcf8523Error::DateTime(e));
            }
        };
        let epoch = datetime.and_utc().timestamp();
        debug!("synchronizing host clock, epoch={}", epoch);
        self.clock.synchronize_epoch(epoch);
        Ok(())
    }

    /// Performs one write cycle: take the host clock's current time, encode
    /// it into the register block and write the whole block to the device.
    ///
    /// The encode clears the oscillator stop flag and forces battery
    /// switch-over to standard mode. Nothing is written when the host clock
    /// has no valid time.
    pub fn write_time(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        self.ensure_available()?;
        let now = match self.clock.now_utc() {
            Some(now) => now,
            None => {
                error!("Host clock not synchronized, not writing RTC");
                return Err(Pcf8523Error::ClockUnsynchronized);
            }
        };
        if let Err(e) = self.registers.encode_datetime(&now) {
            error!("Invalid host clock time, not writing RTC");
            return Err(Pcf8523Error::DateTime(e));
        }
        self.write_registers()
    }

    /// Reads the current date and time from the device.
    ///
    /// # Returns
    /// * `Ok(NaiveDateTime)` - The current date and time (UTC)
    /// * `Err(Pcf8523Error)` on error
    pub fn datetime(&mut self) -> Result<NaiveDateTime, Pcf8523Error<I2C::Error>> {
        self.read_registers()?;
        self.registers
            .decode_datetime()
            .map_err(Pcf8523Error::DateTime)
    }

    /// Sets the device date and time (UTC).
    ///
    /// # Arguments
    /// * `datetime` - The date and time to set
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(Pcf8523Error)` on error
    pub fn set_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), Pcf8523Error<I2C::Error>> {
        self.registers
            .encode_datetime(datetime)
            .map_err(Pcf8523Error::DateTime)?;
        self.write_registers()
    }

    fn ensure_available(&self) -> Result<(), Pcf8523Error<I2C::Error>> {
        if self.failed {
            return Err(Pcf8523Error::Failed);
        }
        Ok(())
    }

    /// Reads the full register block into the mirror.
    fn read_registers(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        let mut data = [0u8; REGISTER_COUNT];
        if let Err(e) = self
            .i2c
            .write_read(self.address, &[RegAddr::Control1 as u8], &mut data)
        {
            error!("Can't read I2C data");
            return Err(Pcf8523Error::I2c(e));
        }
        self.registers = RegisterBlock::from(data);
        debug!("read registers: {:?}", data);
        Ok(())
    }

    /// Writes the full register block from the mirror.
    fn write_registers(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        let data: [u8; REGISTER_COUNT] = (&self.registers).into();
        let mut frame = [0u8; REGISTER_COUNT + 1];
        frame[0] = RegAddr::Control1 as u8;
        frame[1..].copy_from_slice(&data);
        debug!("write registers: {:?}", data);
        if let Err(e) = self.i2c.write(self.address, &frame) {
            error!("Can't write I2C data");
            return Err(Pcf8523Error::I2c(e));
        }
        Ok(())
    }
}
