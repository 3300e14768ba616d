//! Async implementation of the PCF8523 driver.
//!
//! This module provides an async interface to the PCF8523 RTC device using
//! `embedded-hal-async` traits. It is only available when the `async`
//! feature is enabled. The cycle semantics are identical to the sync
//! driver: full-block transfers only, fault and validity checks before any
//! host clock synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! use pcf8523::asynch::Pcf8523;
//! use pcf8523::DEFAULT_ADDRESS;
//!
//! // Initialize device
//! let mut rtc = Pcf8523::new(i2c, DEFAULT_ADDRESS, clock);
//!
//! // Fetch the device state once at startup
//! rtc.setup().await?;
//!
//! // Periodically: push the RTC time into the host clock
//! rtc.read_time().await?;
//! ```

use chrono::NaiveDateTime;
use embedded_hal_async::i2c::I2c;

use crate::{HostClock, Pcf8523Error, RegAddr, RegisterBlock, REGISTER_COUNT};

/// PCF8523 Real-Time Clock async driver.
///
/// This struct provides the async interface to the PCF8523 RTC device.
/// It supports async I2C operations through the `embedded-hal-async`
/// traits; the host clock collaborator stays synchronous.
pub struct Pcf8523<I2C, CLK> {
    i2c: I2C,
    address: u8,
    clock: CLK,
    registers: RegisterBlock,
    failed: bool,
}

impl<I2C: I2c, CLK: HostClock> Pcf8523<I2C, CLK> {
    /// Creates a new PCF8523 async driver instance.
    ///
    /// # Arguments
    /// * `i2c` - The async I2C bus implementation
    /// * `address` - The I2C address of the device (typically [`crate::DEFAULT_ADDRESS`])
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
    /// [`Pcf8523Error::Failed`].
    pub async fn setup(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        if let Err(e) = self.read_registers().await {
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
    pub async fn read_time(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        self.ensure_available()?;
        self.read_registers().await?;
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
    pub async fn write_time(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
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
        self.write_registers().await
    }

    /// Reads the current date and time from the device.
    ///
    /// # Returns
    /// * `Ok(NaiveDateTime)` - The current date and time (UTC)
    /// * `Err(Pcf8523Error)` on error
    pub async fn datetime(&mut self) -> Result<NaiveDateTime, Pcf8523Error<I2C::Error>> {
        self.read_registers().await?;
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
    pub async fn set_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), Pcf8523Error<I2C::Error>> {
        self.registers
            .encode_datetime(datetime)
            .map_err(Pcf8523Error::DateTime)?;
        self.write_registers().await
    }

    fn ensure_available(&self) -> Result<(), Pcf8523Error<I2C::Error>> {
        if self.failed {
            return Err(Pcf8523Error::Failed);
        }
        Ok(())
    }

    /// Reads the full register block into the mirror.
    async fn read_registers(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        let mut data = [0u8; REGISTER_COUNT];
        if let Err(e) = self
            .i2c
            .write_read(self.address, &[RegAddr::Control1 as u8], &mut data)
            .await
        {
            error!("Can't read I2C data");
            return Err(Pcf8523Error::I2c(e));
        }
        self.registers = RegisterBlock::from(data);
        debug!("read registers: {:?}", data);
        Ok(())
    }

    /// Writes the full register block from the mirror.
    async fn write_registers(&mut self) -> Result<(), Pcf8523Error<I2C::Error>> {
        let data: [u8; REGISTER_COUNT] = (&self.registers).into();
        let mut frame = [0u8; REGISTER_COUNT + 1];
        frame[0] = RegAddr::Control1 as u8;
        frame[1..].copy_from_slice(&data);
        debug!("write registers: {:?}", data);
        if let Err(e) = self.i2c.write(self.address, &frame).await {
            error!("Can't write I2C data");
            return Err(Pcf8523Error::I2c(e));
        }
        Ok(())
    }
}
