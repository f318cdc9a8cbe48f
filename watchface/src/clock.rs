//! Time and date text

use core::fmt::Write;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use heapless::String;

/// `"HH:MM"`
pub type TimeText = String<8>;
/// `"DD MMM"`
pub type DateText = String<8>;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hour convention of the time label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// 01–12
    TwelveHour,
    /// 00–23
    TwentyFourHour,
}

/// Host locale settings consulted on every tick.
pub trait Locale {
    fn clock_style(&self) -> ClockStyle;
}

impl Locale for ClockStyle {
    fn clock_style(&self) -> ClockStyle {
        *self
    }
}

/// Format the hour and minute of `time` as `HH:MM`.
pub fn format_time<T: Timelike>(time: &T, style: ClockStyle) -> TimeText {
    let hour = match style {
        ClockStyle::TwentyFourHour => time.hour(),
        ClockStyle::TwelveHour => time.hour12().1,
    };

    let mut text = TimeText::new();
    write!(text, "{:02}:{:02}", hour, time.minute()).expect("time text fits");
    text
}

/// Format `date` as upper-case `DD MMM`, e.g. `22 JAN`.
pub fn format_date<T: Datelike>(date: &T) -> DateText {
    let mut text = DateText::new();
    write!(
        text,
        "{:02} {}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize]
    )
    .expect("date text fits");
    upcase(&mut text);
    text
}

/// Upper-case ASCII letters in place. Everything outside `a`–`z` is left as is.
pub fn upcase(text: &mut str) {
    text.make_ascii_uppercase();
}

/// Minute of the hour read back from a formatted `HH:MM` label.
///
/// Panics if `time_text` does not have that shape.
pub fn minute_of(time_text: &str) -> u8 {
    match time_text.as_bytes() {
        [_, _, b':', tens @ b'0'..=b'5', ones @ b'0'..=b'9'] => (tens - b'0') * 10 + (ones - b'0'),
        _ => panic!("malformed time text: {}", time_text),
    }
}

/// Wall-clock time for `secs` seconds since the Unix epoch.
///
/// Panics if the timestamp is out of range.
pub fn from_timestamp(secs: i64) -> NaiveDateTime {
    match DateTime::from_timestamp(secs, 0) {
        Some(time) => time.naive_utc(),
        None => panic!("timestamp out of range: {}", secs),
    }
}
