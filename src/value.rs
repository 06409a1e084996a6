use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Neutral value representation accepted by the quoting engine.
///
/// Every variant has exactly one literal rendering, implemented in
/// [`quote_value`](crate::quote_value). Values that have no dedicated
/// variant go through [`SqlValue::Other`], which carries their plain
/// textual form and is rendered as a quoted string.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    /// Raw binary data, rendered as a `0x...` hex literal.
    Bytes(Vec<u8>),
    /// A sequence of Unicode code points, rendered as string data.
    Chars(Vec<char>),
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Fallback textual form for values without a dedicated variant.
    Other(String),
}

impl SqlValue {
    /// Timestamp literal text from chrono's `NaiveDateTime` components,
    /// omitting microseconds when they are zero.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let us = dt.time().nanosecond() / 1_000;
        if us == 0 {
            SqlValue::Text(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ))
        } else {
            SqlValue::Text(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second(),
                us
            ))
        }
    }

    /// Date literal text from chrono's `NaiveDate`.
    pub fn from_date(date: NaiveDate) -> Self {
        SqlValue::Text(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    /// Time-of-day literal text from chrono's `NaiveTime`.
    pub fn from_time(time: NaiveTime) -> Self {
        let us = time.nanosecond() / 1_000;
        if us == 0 {
            SqlValue::Text(format!(
                "{:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            ))
        } else {
            SqlValue::Text(format!(
                "{:02}:{:02}:{:02}.{:06}",
                time.hour(),
                time.minute(),
                time.second(),
                us
            ))
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for SqlValue {
            fn from(value: $t) -> Self {
                SqlValue::Int(value as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for SqlValue {
            fn from(value: $t) -> Self {
                SqlValue::UInt(value as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float(value as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[char]> for SqlValue {
    fn from(value: &[char]) -> Self {
        SqlValue::Chars(value.to_vec())
    }
}

impl From<Vec<char>> for SqlValue {
    fn from(value: Vec<char>) -> Self {
        SqlValue::Chars(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Other(value.to_string())
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::from_datetime(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::from_date(value)
    }
}

impl From<NaiveTime> for SqlValue {
    fn from(value: NaiveTime) -> Self {
        SqlValue::from_time(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
