//! Register definitions and bitfield structures for the PCF8523 RTC.
//!
//! This module contains all register addresses, bitfield definitions, and
//! related types for interacting with the PCF8523 Real-Time Clock registers.
//!
//! The PCF8523 exposes 20 byte registers at addresses `0x00..=0x13`. The
//! driver always transfers the whole block in one transaction, because
//! unrelated features share bytes with the time fields; [`RegisterBlock`]
//! mirrors that block in memory. Every field accessor is an explicit
//! shift/mask over the raw register byte, so byte and bit offsets match the
//! datasheet regardless of target.

use bitfield::bitfield;

/// Total number of registers in the PCF8523 register file.
pub const REGISTER_COUNT: usize = 20;

/// Register addresses for the PCF8523 RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Control_1 register (interrupt enables, hour mode, stop, reset)
    Control1 = 0x00,
    /// Control_2 register (timer/watchdog enables and flags)
    Control2 = 0x01,
    /// Control_3 register (power management, battery flags)
    Control3 = 0x02,
    /// Seconds register (0-59), carries the oscillator stop flag
    Seconds = 0x03,
    /// Minutes register (0-59)
    Minutes = 0x04,
    /// Hours register (0-23 or 1-12 + AM/PM)
    Hours = 0x05,
    /// Days register (1-31)
    Days = 0x06,
    /// Weekdays register (0-6)
    Weekdays = 0x07,
    /// Months register (1-12)
    Months = 0x08,
    /// Years register (0-99, meaning 2000-2099)
    Years = 0x09,
    /// Minute alarm register
    MinuteAlarm = 0x0A,
    /// Hour alarm register
    HourAlarm = 0x0B,
    /// Day alarm register
    DayAlarm = 0x0C,
    /// Weekday alarm register
    WeekdayAlarm = 0x0D,
    /// Frequency offset (correction) register
    Offset = 0x0E,
    /// Timer and CLKOUT control register
    TimerClkoutControl = 0x0F,
    /// Timer A source clock register
    TimerAFreqControl = 0x10,
    /// Timer A value register
    TimerA = 0x11,
    /// Timer B source clock and pulse width register
    TimerBFreqControl = 0x12,
    /// Timer B value register
    TimerB = 0x13,
}

/// Hour representation format, selected in Control_1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourMode {
    /// 24-hour format (0-23)
    TwentyFourHour = 0,
    /// 12-hour format (1-12 + AM/PM)
    TwelveHour = 1,
}
impl From<u8> for HourMode {
    /// Creates an `HourMode` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => HourMode::TwentyFourHour,
            1 => HourMode::TwelveHour,
            _ => panic!("Invalid value for HourMode: {}", v),
        }
    }
}
impl From<HourMode> for u8 {
    /// Converts an `HourMode` to its raw register value.
    fn from(v: HourMode) -> Self {
        v as u8
    }
}

/// Quartz crystal load capacitance selection, Control_1 bit 7.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapacitorSelect {
    /// 7.0 pF load capacitance
    Pf7 = 0,
    /// 12.5 pF load capacitance
    Pf12_5 = 1,
}
impl From<u8> for CapacitorSelect {
    /// Creates a `CapacitorSelect` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => CapacitorSelect::Pf7,
            1 => CapacitorSelect::Pf12_5,
            _ => panic!("Invalid value for CapacitorSelect: {}", v),
        }
    }
}
impl From<CapacitorSelect> for u8 {
    /// Converts a `CapacitorSelect` to its raw register value.
    fn from(v: CapacitorSelect) -> Self {
        v as u8
    }
}

/// Battery switch-over and battery low detection mode, Control_3 bits 7-5.
///
/// A time write always forces [`PowerManagement::SwitchoverStandard`] so a
/// misconfigured mode cannot leave the backup battery disconnected.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerManagement {
    /// Battery switch-over in standard mode, battery low detection enabled
    SwitchoverStandard = 0b000,
    /// Battery switch-over in direct switching mode, battery low detection enabled
    SwitchoverDirect = 0b001,
    /// Battery switch-over disabled, battery low detection enabled
    SwitchoverDisabled = 0b010,
    /// Battery switch-over in standard mode, battery low detection disabled
    SwitchoverStandardNoDetect = 0b100,
    /// Battery switch-over in direct switching mode, battery low detection disabled
    SwitchoverDirectNoDetect = 0b101,
    /// Battery switch-over and battery low detection disabled
    Disabled = 0b111,
}
impl From<u8> for PowerManagement {
    /// Creates a `PowerManagement` from a raw register value.
    ///
    /// The datasheet assigns 0b011 the same meaning as 0b010.
    ///
    /// # Panics
    /// Panics on 0b110, which the datasheet marks as not allowed.
    fn from(v: u8) -> Self {
        match v {
            0b000 => PowerManagement::SwitchoverStandard,
            0b001 => PowerManagement::SwitchoverDirect,
            0b010 | 0b011 => PowerManagement::SwitchoverDisabled,
            0b100 => PowerManagement::SwitchoverStandardNoDetect,
            0b101 => PowerManagement::SwitchoverDirectNoDetect,
            0b111 => PowerManagement::Disabled,
            _ => panic!("Invalid value for PowerManagement: {}", v),
        }
    }
}
impl From<PowerManagement> for u8 {
    /// Converts a `PowerManagement` to its raw register value.
    fn from(v: PowerManagement) -> Self {
        v as u8
    }
}

/// CLKOUT pin frequency selection, Tmr_CLKOUT_ctrl bits 5-3.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClkoutFrequency {
    /// 32.768 kHz output
    Hz32768 = 0b000,
    /// 16.384 kHz output
    Hz16384 = 0b001,
    /// 8.192 kHz output
    Hz8192 = 0b010,
    /// 4.096 kHz output
    Hz4096 = 0b011,
    /// 1.024 kHz output
    Hz1024 = 0b100,
    /// 32 Hz output
    Hz32 = 0b101,
    /// 1 Hz output
    Hz1 = 0b110,
    /// CLKOUT disabled (pin high-impedance)
    Disabled = 0b111,
}
impl From<u8> for ClkoutFrequency {
    /// Creates a `ClkoutFrequency` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value does not fit in 3 bits.
    fn from(v: u8) -> Self {
        match v {
            0b000 => ClkoutFrequency::Hz32768,
            0b001 => ClkoutFrequency::Hz16384,
            0b010 => ClkoutFrequency::Hz8192,
            0b011 => ClkoutFrequency::Hz4096,
            0b100 => ClkoutFrequency::Hz1024,
            0b101 => ClkoutFrequency::Hz32,
            0b110 => ClkoutFrequency::Hz1,
            0b111 => ClkoutFrequency::Disabled,
            _ => panic!("Invalid value for ClkoutFrequency: {}", v),
        }
    }
}
impl From<ClkoutFrequency> for u8 {
    /// Converts a `ClkoutFrequency` to its raw register value.
    fn from(v: ClkoutFrequency) -> Self {
        v as u8
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

bitfield! {
    /// Control_1 register: interrupt enables, hour mode, stop and reset bits.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control1(u8);
    impl Debug;
    /// Crystal load capacitance selection
    pub from into CapacitorSelect, capacitor_select, set_capacitor_select: 7, 7;
    /// STOP bit, freezes the clock divider chain
    pub stop, set_stop: 5;
    /// Software reset trigger
    pub software_reset, set_software_reset: 4;
    /// 12/24 hour mode selection
    pub from into HourMode, hour_mode, set_hour_mode: 3, 3;
    /// Second interrupt enable
    pub second_interrupt_enable, set_second_interrupt_enable: 2;
    /// Alarm interrupt enable
    pub alarm_interrupt_enable, set_alarm_interrupt_enable: 1;
    /// Correction interrupt enable
    pub correction_interrupt_enable, set_correction_interrupt_enable: 0;
}
from_register_u8!(Control1);

bitfield! {
    /// Control_2 register: countdown timer / watchdog enables and flags.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control2(u8);
    impl Debug;
    /// Watchdog timer A interrupt flag
    pub watchdog_flag, set_watchdog_flag: 7;
    /// Countdown timer A interrupt flag
    pub countdown_a_flag, set_countdown_a_flag: 6;
    /// Countdown timer B interrupt flag
    pub countdown_b_flag, set_countdown_b_flag: 5;
    /// Second interrupt flag
    pub second_flag, set_second_flag: 4;
    /// Alarm interrupt flag
    pub alarm_flag, set_alarm_flag: 3;
    /// Watchdog timer A interrupt enable
    pub watchdog_interrupt_enable, set_watchdog_interrupt_enable: 2;
    /// Countdown timer A interrupt enable
    pub countdown_a_interrupt_enable, set_countdown_a_interrupt_enable: 1;
    /// Countdown timer B interrupt enable
    pub countdown_b_interrupt_enable, set_countdown_b_interrupt_enable: 0;
}
from_register_u8!(Control2);

bitfield! {
    /// Control_3 register: power management mode and battery flags.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control3(u8);
    impl Debug;
    /// Battery switch-over and battery low detection mode
    pub from into PowerManagement, power_management, set_power_management: 7, 5;
    /// Battery switch-over interrupt flag
    pub battery_switch_flag, set_battery_switch_flag: 3;
    /// Battery low status flag
    pub battery_low_flag, set_battery_low_flag: 2;
    /// Battery switch-over interrupt enable
    pub battery_switch_interrupt_enable, set_battery_switch_interrupt_enable: 1;
    /// Battery low interrupt enable
    pub battery_low_interrupt_enable, set_battery_low_interrupt_enable: 0;
}
from_register_u8!(Control3);

#[cfg(feature = "defmt")]
impl defmt::Format for Control3 {
    fn format(&self, f: defmt::Formatter) {
        // Raw PM bits; the typed getter rejects the not-allowed pattern
        defmt::write!(
            f,
            "Control3(pm={=u8:b}, bsf={}, blf={})",
            (self.0 >> 5) & 0x07,
            self.battery_switch_flag(),
            self.battery_low_flag()
        );
    }
}

bitfield! {
    /// Seconds register (0-59) with BCD encoding and the oscillator stop flag.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Seconds(u8);
    impl Debug;
    /// Oscillator stop flag; set when clock integrity is no longer guaranteed
    pub oscillator_stop, set_oscillator_stop: 7;
    /// Tens place of seconds (0-5)
    pub ten_seconds, set_ten_seconds: 6, 4;
    /// Ones place of seconds (0-9)
    pub seconds, set_seconds: 3, 0;
}
from_register_u8!(Seconds);

#[cfg(feature = "defmt")]
impl defmt::Format for Seconds {
    fn format(&self, f: defmt::Formatter) {
        let seconds = 10 * self.ten_seconds() + self.seconds();
        defmt::write!(f, "Seconds({}s, osc={})", seconds, !self.oscillator_stop());
    }
}

bitfield! {
    /// Minutes register (0-59) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Minutes(u8);
    impl Debug;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(Minutes);

#[cfg(feature = "defmt")]
impl defmt::Format for Minutes {
    fn format(&self, f: defmt::Formatter) {
        let minutes = 10 * self.ten_minutes() + self.minutes();
        defmt::write!(f, "Minutes({}m)", minutes);
    }
}

bitfield! {
    /// Hours register with BCD encoding.
    ///
    /// In 24-hour mode the tens place occupies bits 5-4. In 12-hour mode
    /// bit 5 reads as the AM/PM flag instead; the mode itself lives in
    /// Control_1.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Hours(u8);
    impl Debug;
    /// AM/PM flag (12-hour mode view of bit 5)
    pub am_pm, set_am_pm: 5;
    /// Tens place of hours, 24-hour mode (0-2)
    pub ten_hours, set_ten_hours: 5, 4;
    /// Ones place of hours (0-9)
    pub hours, set_hours: 3, 0;
}
from_register_u8!(Hours);

#[cfg(feature = "defmt")]
impl defmt::Format for Hours {
    fn format(&self, f: defmt::Formatter) {
        let hours = 10 * self.ten_hours() + self.hours();
        defmt::write!(f, "Hours({}h)", hours);
    }
}

bitfield! {
    /// Days register (1-31) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Days(u8);
    impl Debug;
    /// Tens place of the day of month (0-3)
    pub ten_days, set_ten_days: 5, 4;
    /// Ones place of the day of month (0-9)
    pub days, set_days: 3, 0;
}
from_register_u8!(Days);

#[cfg(feature = "defmt")]
impl defmt::Format for Days {
    fn format(&self, f: defmt::Formatter) {
        let days = 10 * self.ten_days() + self.days();
        defmt::write!(f, "Days({})", days);
    }
}

bitfield! {
    /// Weekdays register (0-6).
    ///
    /// The weekday origin is user-defined; the device only increments the
    /// counter modulo 7.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Weekdays(u8);
    impl Debug;
    /// Day of week (0-6)
    pub weekdays, set_weekdays: 2, 0;
}
from_register_u8!(Weekdays);

#[cfg(feature = "defmt")]
impl defmt::Format for Weekdays {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Weekdays({})", self.weekdays());
    }
}

bitfield! {
    /// Months register (1-12) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Months(u8);
    impl Debug;
    /// Tens place of the month (0-1)
    pub ten_months, set_ten_months: 4, 4;
    /// Ones place of the month (0-9)
    pub months, set_months: 3, 0;
}
from_register_u8!(Months);

#[cfg(feature = "defmt")]
impl defmt::Format for Months {
    fn format(&self, f: defmt::Formatter) {
        let months = 10 * self.ten_months() + self.months();
        defmt::write!(f, "Months({})", months);
    }
}

bitfield! {
    /// Years register (0-99, meaning 2000-2099) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Years(u8);
    impl Debug;
    /// Tens place of the year (0-9)
    pub ten_years, set_ten_years: 7, 4;
    /// Ones place of the year (0-9)
    pub years, set_years: 3, 0;
}
from_register_u8!(Years);

#[cfg(feature = "defmt")]
impl defmt::Format for Years {
    fn format(&self, f: defmt::Formatter) {
        let year = 2000 + u16::from(10 * self.ten_years() + self.years());
        defmt::write!(f, "Years({})", year);
    }
}

bitfield! {
    /// Minute alarm register with enable mask bit (AEN_M, 1 = ignored).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct MinuteAlarm(u8);
    impl Debug;
    /// Alarm mask bit; 1 disables the minute match
    pub alarm_mask, set_alarm_mask: 7;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(MinuteAlarm);

bitfield! {
    /// Hour alarm register with enable mask bit (AEN_H, 1 = ignored).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct HourAlarm(u8);
    impl Debug;
    /// Alarm mask bit; 1 disables the hour match
    pub alarm_mask, set_alarm_mask: 7;
    /// AM/PM flag (12-hour mode view of bit 5)
    pub am_pm, set_am_pm: 5;
    /// Tens place of hours, 24-hour mode (0-2)
    pub ten_hours, set_ten_hours: 5, 4;
    /// Ones place of hours (0-9)
    pub hours, set_hours: 3, 0;
}
from_register_u8!(HourAlarm);

bitfield! {
    /// Day alarm register with enable mask bit (AEN_D, 1 = ignored).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct DayAlarm(u8);
    impl Debug;
    /// Alarm mask bit; 1 disables the day match
    pub alarm_mask, set_alarm_mask: 7;
    /// Tens place of the day of month (0-3)
    pub ten_days, set_ten_days: 5, 4;
    /// Ones place of the day of month (0-9)
    pub days, set_days: 3, 0;
}
from_register_u8!(DayAlarm);

bitfield! {
    /// Weekday alarm register with enable mask bit (AEN_W, 1 = ignored).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct WeekdayAlarm(u8);
    impl Debug;
    /// Alarm mask bit; 1 disables the weekday match
    pub alarm_mask, set_alarm_mask: 7;
    /// Day of week (0-6)
    pub weekdays, set_weekdays: 2, 0;
}
from_register_u8!(WeekdayAlarm);

bitfield! {
    /// Frequency offset (correction) register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Offset(u8);
    impl Debug;
    /// Offset mode; 0 = correction every two hours, 1 = every minute
    pub mode, set_mode: 7;
    /// Correction value, 7-bit two's complement (-64 to +63)
    pub offset, set_offset: 6, 0;
}
from_register_u8!(Offset);

bitfield! {
    /// Timer and CLKOUT control register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerClkoutControl(u8);
    impl Debug;
    /// Timer A interrupt mode; 0 = permanent, 1 = pulsed
    pub timer_a_interrupt_mode, set_timer_a_interrupt_mode: 7;
    /// Timer B interrupt mode; 0 = permanent, 1 = pulsed
    pub timer_b_interrupt_mode, set_timer_b_interrupt_mode: 6;
    /// CLKOUT pin frequency selection
    pub from into ClkoutFrequency, clkout_frequency, set_clkout_frequency: 5, 3;
    /// Timer A mode; 0b00 disabled, 0b01 countdown, 0b10 watchdog
    pub timer_a_control, set_timer_a_control: 2, 1;
    /// Timer B enable
    pub timer_b_enable, set_timer_b_enable: 0;
}
from_register_u8!(TimerClkoutControl);

bitfield! {
    /// Timer A source clock register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerAFreqControl(u8);
    impl Debug;
    /// Timer A source clock selection
    pub timer_a_source_clock, set_timer_a_source_clock: 2, 0;
}
from_register_u8!(TimerAFreqControl);

bitfield! {
    /// Timer A countdown value register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerA(u8);
    impl Debug;
    /// Countdown period value
    pub value, set_value: 7, 0;
}
from_register_u8!(TimerA);

bitfield! {
    /// Timer B source clock and pulse width register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerBFreqControl(u8);
    impl Debug;
    /// Timer B interrupt pulse width selection
    pub timer_b_pulse_width, set_timer_b_pulse_width: 6, 4;
    /// Timer B source clock selection
    pub timer_b_source_clock, set_timer_b_source_clock: 2, 0;
}
from_register_u8!(TimerBFreqControl);

bitfield! {
    /// Timer B countdown value register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerB(u8);
    impl Debug;
    /// Countdown period value
    pub value, set_value: 7, 0;
}
from_register_u8!(TimerB);

/// In-memory mirror of the complete PCF8523 register file.
///
/// The block is read and written as one unit; each field wraps the raw
/// register byte, so the typed view and the byte view returned by the array
/// conversions are always the same memory with no staleness window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RegisterBlock {
    /// Control_1 register (0x00)
    pub control_1: Control1,
    /// Control_2 register (0x01)
    pub control_2: Control2,
    /// Control_3 register (0x02)
    pub control_3: Control3,
    /// Seconds register (0x03)
    pub seconds: Seconds,
    /// Minutes register (0x04)
    pub minutes: Minutes,
    /// Hours register (0x05)
    pub hours: Hours,
    /// Days register (0x06)
    pub days: Days,
    /// Weekdays register (0x07)
    pub weekdays: Weekdays,
    /// Months register (0x08)
    pub months: Months,
    /// Years register (0x09)
    pub years: Years,
    /// Minute alarm register (0x0A)
    pub minute_alarm: MinuteAlarm,
    /// Hour alarm register (0x0B)
    pub hour_alarm: HourAlarm,
    /// Day alarm register (0x0C)
    pub day_alarm: DayAlarm,
    /// Weekday alarm register (0x0D)
    pub weekday_alarm: WeekdayAlarm,
    /// Offset register (0x0E)
    pub offset: Offset,
    /// Timer and CLKOUT control register (0x0F)
    pub timer_clkout: TimerClkoutControl,
    /// Timer A source clock register (0x10)
    pub timer_a_freq: TimerAFreqControl,
    /// Timer A value register (0x11)
    pub timer_a: TimerA,
    /// Timer B source clock register (0x12)
    pub timer_b_freq: TimerBFreqControl,
    /// Timer B value register (0x13)
    pub timer_b: TimerB,
}

impl RegisterBlock {
    /// Returns true when the oscillator stop flag is set and the held time
    /// can no longer be trusted.
    pub fn oscillator_stopped(&self) -> bool {
        self.seconds.oscillator_stop()
    }
}

impl From<[u8; REGISTER_COUNT]> for RegisterBlock {
    fn from(data: [u8; REGISTER_COUNT]) -> Self {
        RegisterBlock {
            control_1: Control1(data[0]),
            control_2: Control2(data[1]),
            control_3: Control3(data[2]),
            seconds: Seconds(data[3]),
            minutes: Minutes(data[4]),
            hours: Hours(data[5]),
            days: Days(data[6]),
            weekdays: Weekdays(data[7]),
            months: Months(data[8]),
            years: Years(data[9]),
            minute_alarm: MinuteAlarm(data[10]),
            hour_alarm: HourAlarm(data[11]),
            day_alarm: DayAlarm(data[12]),
            weekday_alarm: WeekdayAlarm(data[13]),
            offset: Offset(data[14]),
            timer_clkout: TimerClkoutControl(data[15]),
            timer_a_freq: TimerAFreqControl(data[16]),
            timer_a: TimerA(data[17]),
            timer_b_freq: TimerBFreqControl(data[18]),
            timer_b: TimerB(data[19]),
        }
    }
}

impl From<&RegisterBlock> for [u8; REGISTER_COUNT] {
    fn from(block: &RegisterBlock) -> [u8; REGISTER_COUNT] {
        [
            block.control_1.0,
            block.control_2.0,
            block.control_3.0,
            block.seconds.0,
            block.minutes.0,
            block.hours.0,
            block.days.0,
            block.weekdays.0,
            block.months.0,
            block.years.0,
            block.minute_alarm.0,
            block.hour_alarm.0,
            block.day_alarm.0,
            block.weekday_alarm.0,
            block.offset.0,
            block.timer_clkout.0,
            block.timer_a_freq.0,
            block.timer_a.0,
            block.timer_b_freq.0,
            block.timer_b.0,
        ]
    }
}
