//! Date/time conversion for the PCF8523 register block.
//!
//! This module implements the conversion logic between the PCF8523's
//! BCD-encoded time registers and chrono's `NaiveDateTime`. All values are
//! validated: BCD digits are checked on decode, and calendar validity is
//! established through `chrono` before a timestamp is produced.
//!
//! # Register Model
//!
//! The PCF8523 stores date and time in 7 consecutive registers:
//! - Seconds, Minutes, Hours, Days, Weekdays, Months, Years
//!
//! The device carries no timezone information; all conversions treat the
//! registers as UTC.
//!
//! # Error Handling
//!
//! Conversion errors are reported via [`Pcf8523DateTimeError`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::registers::{
    Days, Hours, Minutes, Months, PowerManagement, RegisterBlock, Seconds, Weekdays, Years,
};

/// Errors that can occur during PCF8523 date/time conversion or validation.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pcf8523DateTimeError {
    /// The provided or decoded date/time is invalid (e.g., out of range, not representable)
    InvalidDateTime,
    /// The year is not before 2100 (the PCF8523 only covers 2000-2099)
    YearNotBefore2100,
    /// The year is not after 1999 (the PCF8523 only covers 2000-2099)
    YearNotAfter1999,
}

impl RegisterBlock {
    /// Helper function to convert a number to BCD format with validation
    pub(crate) fn make_bcd(value: u32, max_value: u32) -> Result<(u8, u8), Pcf8523DateTimeError> {
        if value > max_value {
            return Err(Pcf8523DateTimeError::InvalidDateTime);
        }
        let ones = u8::try_from(value % 10).map_err(|_| Pcf8523DateTimeError::InvalidDateTime)?;
        let tens = u8::try_from(value / 10).map_err(|_| Pcf8523DateTimeError::InvalidDateTime)?;
        Ok((ones, tens))
    }

    /// Helper function to combine BCD digits, rejecting a units nibble that
    /// is not a decimal digit
    pub(crate) fn bcd_value(tens: u8, units: u8) -> Result<u32, Pcf8523DateTimeError> {
        if units > 9 {
            return Err(Pcf8523DateTimeError::InvalidDateTime);
        }
        Ok(10 * u32::from(tens) + u32::from(units))
    }

    fn convert_seconds(seconds: u32) -> Result<Seconds, Pcf8523DateTimeError> {
        let (ones, tens) = Self::make_bcd(seconds, 59)?;
        let mut value = Seconds::default();
        value.set_seconds(ones);
        value.set_ten_seconds(tens);
        Ok(value)
    }

    fn convert_minutes(minutes: u32) -> Result<Minutes, Pcf8523DateTimeError> {
        let (ones, tens) = Self::make_bcd(minutes, 59)?;
        let mut value = Minutes::default();
        value.set_minutes(ones);
        value.set_ten_minutes(tens);
        Ok(value)
    }

    fn convert_hours(hours: u32) -> Result<Hours, Pcf8523DateTimeError> {
        let (ones, tens) = Self::make_bcd(hours, 23)?;
        let mut value = Hours::default();
        value.set_hours(ones);
        value.set_ten_hours(tens);
        Ok(value)
    }

    fn convert_days(days: u32) -> Result<Days, Pcf8523DateTimeError> {
        let (ones, tens) = Self::make_bcd(days, 31)?;
        let mut value = Days::default();
        value.set_days(ones);
        value.set_ten_days(tens);
        Ok(value)
    }

    fn convert_weekdays(weekday: u32) -> Result<Weekdays, Pcf8523DateTimeError> {
        if weekday > 6 {
            return Err(Pcf8523DateTimeError::InvalidDateTime);
        }
        let mut value = Weekdays::default();
        value.set_weekdays(
            u8::try_from(weekday).map_err(|_| Pcf8523DateTimeError::InvalidDateTime)?,
        );
        Ok(value)
    }

    fn convert_months(months: u32) -> Result<Months, Pcf8523DateTimeError> {
        let (ones, tens) = Self::make_bcd(months, 12)?;
        let mut value = Months::default();
        value.set_months(ones);
        value.set_ten_months(tens);
        Ok(value)
    }

    fn convert_years(year: i32) -> Result<Years, Pcf8523DateTimeError> {
        if year > 2099 {
            error!("Year {} is too late! must be before 2100", year);
            return Err(Pcf8523DateTimeError::YearNotBefore2100);
        }
        if year < 2000 {
            error!("Year {} is too early! must be greater than 1999", year);
            return Err(Pcf8523DateTimeError::YearNotAfter1999);
        }

        let year_offset =
            u32::try_from(year - 2000).map_err(|_| Pcf8523DateTimeError::InvalidDateTime)?;
        let (ones, tens) = Self::make_bcd(year_offset, 99)?;
        let mut value = Years::default();
        value.set_years(ones);
        value.set_ten_years(tens);
        Ok(value)
    }

    /// Encodes a calendar time into the block's time registers.
    ///
    /// The datetime is interpreted as UTC and written in 24-hour form; the
    /// weekday register is derived from the date with Sunday = 0. The write
    /// asserts this timestamp is authoritative: the oscillator stop flag is
    /// cleared and battery switch-over is forced back to standard mode. All
    /// other registers keep their current contents.
    pub(crate) fn encode_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), Pcf8523DateTimeError> {
        let seconds = Self::convert_seconds(datetime.second())?;
        let minutes = Self::convert_minutes(datetime.minute())?;
        let hours = Self::convert_hours(datetime.hour())?;
        let days = Self::convert_days(datetime.day())?;
        let weekdays = Self::convert_weekdays(datetime.weekday().num_days_from_sunday())?;
        let months = Self::convert_months(datetime.month())?;
        let years = Self::convert_years(datetime.year())?;

        self.seconds = seconds;
        self.minutes = minutes;
        self.hours = hours;
        self.days = days;
        self.weekdays = weekdays;
        self.months = months;
        self.years = years;

        self.seconds.set_oscillator_stop(false);
        self.control_3
            .set_power_management(PowerManagement::SwitchoverStandard);

        Ok(())
    }

    /// Decodes the block's time registers into a calendar time.
    ///
    /// The weekday register is not consulted: its origin is user-defined
    /// and the date alone determines the timestamp. The oscillator stop
    /// flag is not checked here either; that policy belongs to the caller.
    pub(crate) fn decode_datetime(&self) -> Result<NaiveDateTime, Pcf8523DateTimeError> {
        let seconds = Self::bcd_value(self.seconds.ten_seconds(), self.seconds.seconds())?;
        let minutes = Self::bcd_value(self.minutes.ten_minutes(), self.minutes.minutes())?;
        let hours = Self::bcd_value(self.hours.ten_hours(), self.hours.hours())?;
        let days = Self::bcd_value(self.days.ten_days(), self.days.days())?;
        let months = Self::bcd_value(self.months.ten_months(), self.months.months())?;
        let year = 2000
            + i32::try_from(Self::bcd_value(self.years.ten_years(), self.years.years())?)
                .map_err(|_| Pcf8523DateTimeError::InvalidDateTime)?;

        // Validate the date components before creating NaiveDateTime
        NaiveDate::from_ymd_opt(year, months, days)
            .and_then(|d| d.and_hms_opt(hours, minutes, seconds))
            .ok_or(Pcf8523DateTimeError::InvalidDateTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{RegAddr, REGISTER_COUNT};
    use chrono::NaiveDate;

    fn block_with_time(bytes: [u8; 7]) -> RegisterBlock {
        let mut data = [0u8; REGISTER_COUNT];
        data[RegAddr::Seconds as usize..=RegAddr::Years as usize].copy_from_slice(&bytes);
        RegisterBlock::from(data)
    }

    #[test]
    fn test_make_bcd_valid() {
        assert_eq!(RegisterBlock::make_bcd(0, 59).unwrap(), (0, 0));
        assert_eq!(RegisterBlock::make_bcd(9, 59).unwrap(), (9, 0));
        assert_eq!(RegisterBlock::make_bcd(10, 59).unwrap(), (0, 1));
        assert_eq!(RegisterBlock::make_bcd(45, 59).unwrap(), (5, 4));
        assert_eq!(RegisterBlock::make_bcd(59, 59).unwrap(), (9, 5));
    }

    #[test]
    fn test_make_bcd_invalid() {
        // Values exceeding max_value
        assert!(matches!(
            RegisterBlock::make_bcd(60, 59),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
        assert!(matches!(
            RegisterBlock::make_bcd(32, 31),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
        assert!(matches!(
            RegisterBlock::make_bcd(13, 12),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
    }

    #[test]
    fn test_bcd_value() {
        assert_eq!(RegisterBlock::bcd_value(0, 0).unwrap(), 0);
        assert_eq!(RegisterBlock::bcd_value(5, 9).unwrap(), 59);
        assert_eq!(RegisterBlock::bcd_value(2, 3).unwrap(), 23);

        // A units nibble above 9 is not a BCD digit, whatever the sum would be
        assert!(matches!(
            RegisterBlock::bcd_value(1, 10),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
        assert!(matches!(
            RegisterBlock::bcd_value(0, 15),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let samples = [
            (2000, 1, 1, 0, 0, 0),
            (2024, 3, 14, 15, 30, 0),
            (2024, 6, 1, 9, 15, 30),
            (2099, 12, 31, 23, 59, 59),
        ];
        for (year, month, day, hour, minute, second) in samples {
            let dt = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap();
            let mut block = RegisterBlock::default();
            block.encode_datetime(&dt).unwrap();
            let decoded = block.decode_datetime().unwrap();
            assert_eq!(dt, decoded);
        }
    }

    #[test]
    fn test_decode_datasheet_fixture() {
        // 2024-06-01 09:15:30 UTC
        let block = block_with_time([0x30, 0x15, 0x09, 0x01, 0x03, 0x06, 0x24]);
        let dt = block.decode_datetime().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 15);
        assert_eq!(dt.second(), 30);
        assert_eq!(dt.and_utc().timestamp(), 1_717_233_330);
    }

    #[test]
    fn test_decode_ignores_weekday() {
        // The weekday counter has a user-defined origin; any value decodes
        let base = [0x30, 0x15, 0x09, 0x01, 0x00, 0x06, 0x24];
        for weekday in 0..=6u8 {
            let mut bytes = base;
            bytes[4] = weekday;
            let block = block_with_time(bytes);
            let dt = block.decode_datetime().unwrap();
            assert_eq!(dt.day(), 1);
        }
    }

    #[test]
    fn test_decode_invalid_month() {
        // Month 13 is BCD-clean but not a calendar month
        let block = block_with_time([0x00, 0x00, 0x00, 0x01, 0x00, 0x13, 0x24]);
        assert!(matches!(
            block.decode_datetime(),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
    }

    #[test]
    fn test_decode_invalid_day() {
        let block = block_with_time([0x00, 0x00, 0x00, 0x32, 0x00, 0x06, 0x24]);
        assert!(matches!(
            block.decode_datetime(),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));
    }

    #[test]
    fn test_decode_invalid_units_nibble() {
        // 0x1A reads as tens=1, units=10; the sum would pass a range check
        // but the nibble itself is not a decimal digit
        let block = block_with_time([0x1A, 0x00, 0x00, 0x01, 0x00, 0x06, 0x24]);
        assert!(matches!(
            block.decode_datetime(),
            Err(Pcf8523DateTimeError::InvalidDateTime)
        ));

        // Same for minutes
        let block = block_with_time([0x00, 0x3F, 0x00, 0x01, 0x00, 0x06, 0x24]);
        assert!(block.decode_datetime().is_err());
    }

    #[test]
    fn test_decode_overflowing_tens() {
        // Seconds tens digit of 6 (0x60 = 60 seconds) exceeds the range
        let block = block_with_time([0x60, 0x00, 0x00, 0x01, 0x00, 0x06, 0x24]);
        assert!(block.decode_datetime().is_err());

        // Hour tens of 2 with units 4 (0x24 = 24 hours) as well
        let block = block_with_time([0x00, 0x00, 0x24, 0x01, 0x00, 0x06, 0x24]);
        assert!(block.decode_datetime().is_err());
    }

    #[test]
    fn test_decode_non_leap_february() {
        // 2023-02-29 does not exist
        let block = block_with_time([0x00, 0x00, 0x00, 0x29, 0x00, 0x02, 0x23]);
        assert!(block.decode_datetime().is_err());

        // 2024-02-29 does
        let block = block_with_time([0x00, 0x00, 0x00, 0x29, 0x00, 0x02, 0x24]);
        let dt = block.decode_datetime().unwrap();
        assert_eq!(dt.day(), 29);
    }

    #[test]
    fn test_encode_clears_oscillator_stop() {
        let mut block = block_with_time([0xB0, 0x15, 0x09, 0x01, 0x03, 0x06, 0x24]);
        assert!(block.oscillator_stopped());

        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap();
        block.encode_datetime(&dt).unwrap();
        assert!(!block.oscillator_stopped());
        assert_eq!(u8::from(block.seconds), 0x30);
    }

    #[test]
    fn test_encode_forces_power_management() {
        let mut data = [0u8; REGISTER_COUNT];
        // Switch-over disabled plus both battery interrupt enables
        data[RegAddr::Control3 as usize] = 0xE3;
        let mut block = RegisterBlock::from(data);

        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap();
        block.encode_datetime(&dt).unwrap();

        assert_eq!(
            block.control_3.power_management(),
            PowerManagement::SwitchoverStandard
        );
        // Only the PM field is touched; the enables survive
        assert_eq!(u8::from(block.control_3), 0x03);
    }

    #[test]
    fn test_encode_preserves_unrelated_registers() {
        let mut data = [0u8; REGISTER_COUNT];
        data[RegAddr::Control1 as usize] = 0x80;
        data[RegAddr::MinuteAlarm as usize] = 0x45;
        data[RegAddr::TimerB as usize] = 0x42;
        let mut block = RegisterBlock::from(data);

        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap();
        block.encode_datetime(&dt).unwrap();

        let out: [u8; REGISTER_COUNT] = (&block).into();
        assert_eq!(out[RegAddr::Control1 as usize], 0x80);
        assert_eq!(out[RegAddr::MinuteAlarm as usize], 0x45);
        assert_eq!(out[RegAddr::TimerB as usize], 0x42);
    }

    #[test]
    fn test_encode_register_bytes() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap();
        let mut block = RegisterBlock::default();
        block.encode_datetime(&dt).unwrap();

        let out: [u8; REGISTER_COUNT] = (&block).into();
        assert_eq!(out[RegAddr::Seconds as usize], 0x30);
        assert_eq!(out[RegAddr::Minutes as usize], 0x15);
        assert_eq!(out[RegAddr::Hours as usize], 0x09);
        assert_eq!(out[RegAddr::Days as usize], 0x01);
        // 2024-06-01 is a Saturday; Sunday = 0
        assert_eq!(out[RegAddr::Weekdays as usize], 0x06);
        assert_eq!(out[RegAddr::Months as usize], 0x06);
        assert_eq!(out[RegAddr::Years as usize], 0x24);
    }

    #[test]
    fn test_encode_year_too_early() {
        let dt = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let mut block = RegisterBlock::default();
        assert!(matches!(
            block.encode_datetime(&dt),
            Err(Pcf8523DateTimeError::YearNotAfter1999)
        ));
    }

    #[test]
    fn test_encode_year_too_late() {
        let dt = NaiveDate::from_ymd_opt(2100, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut block = RegisterBlock::default();
        assert!(matches!(
            block.encode_datetime(&dt),
            Err(Pcf8523DateTimeError::YearNotBefore2100)
        ));
    }

    #[test]
    fn test_weekday_written_from_date() {
        let cases = [
            (2024, 3, 10, 0u8), // Sunday
            (2024, 3, 11, 1),   // Monday
            (2024, 3, 13, 3),   // Wednesday
            (2024, 3, 16, 6),   // Saturday
        ];
        for (year, month, day, weekday) in cases {
            let dt = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            let mut block = RegisterBlock::default();
            block.encode_datetime(&dt).unwrap();
            assert_eq!(block.weekdays.weekdays(), weekday);
        }
    }

    #[test]
    fn test_convert_functions_coverage() {
        assert!(RegisterBlock::convert_seconds(60).is_err());
        assert!(RegisterBlock::convert_seconds(0).is_ok());
        assert!(RegisterBlock::convert_seconds(59).is_ok());

        assert!(RegisterBlock::convert_minutes(60).is_err());
        assert!(RegisterBlock::convert_minutes(59).is_ok());

        assert!(RegisterBlock::convert_hours(24).is_err());
        assert!(RegisterBlock::convert_hours(0).is_ok());
        assert!(RegisterBlock::convert_hours(23).is_ok());

        assert!(RegisterBlock::convert_days(32).is_err());
        assert!(RegisterBlock::convert_days(31).is_ok());

        assert!(RegisterBlock::convert_weekdays(7).is_err());
        assert!(RegisterBlock::convert_weekdays(0).is_ok());
        assert!(RegisterBlock::convert_weekdays(6).is_ok());

        assert!(RegisterBlock::convert_months(13).is_err());
        assert!(RegisterBlock::convert_months(12).is_ok());
    }

    #[test]
    fn test_convert_hours_bits() {
        let hours = RegisterBlock::convert_hours(23).unwrap();
        assert_eq!(hours.ten_hours(), 2);
        assert_eq!(hours.hours(), 3);
        assert_eq!(u8::from(hours), 0x23);

        let hours = RegisterBlock::convert_hours(9).unwrap();
        assert_eq!(hours.ten_hours(), 0);
        assert_eq!(hours.hours(), 9);
        assert_eq!(u8::from(hours), 0x09);
    }

    #[test]
    fn test_convert_years_range() {
        let years = RegisterBlock::convert_years(2000).unwrap();
        assert_eq!(years.ten_years(), 0);
        assert_eq!(years.years(), 0);

        let years = RegisterBlock::convert_years(2099).unwrap();
        assert_eq!(years.ten_years(), 9);
        assert_eq!(years.years(), 9);

        assert!(matches!(
            RegisterBlock::convert_years(1999),
            Err(Pcf8523DateTimeError::YearNotAfter1999)
        ));
        assert!(matches!(
            RegisterBlock::convert_years(2100),
            Err(Pcf8523DateTimeError::YearNotBefore2100)
        ));
    }
}
