//! Values read from and written to a meter.

use crate::{
    fmt::LogItem,
    lid::{DataType, Lid},
    log_vec, Loggable,
};

/// A time as kept by the meter: seconds since 2000-01-01 00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeterTime(pub u32);

impl MeterTime {
    /// 2000-01-01 00:00:00 UTC as a unix timestamp.
    pub const EPOCH_UNIX: i64 = 946_684_800;

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn unix_timestamp(&self) -> i64 {
        Self::EPOCH_UNIX + self.0 as i64
    }

    #[cfg(feature = "time")]
    pub fn to_datetime(&self) -> Option<time::OffsetDateTime> {
        time::OffsetDateTime::from_unix_timestamp(self.unix_timestamp()).ok()
    }
}

impl From<u32> for MeterTime {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for MeterTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        #[cfg(feature = "time")]
        {
            let time = self
                .to_datetime()
                .and_then(|t| t.format(&time::format_description::well_known::Rfc3339).ok())
                .ok_or(core::fmt::Error)?;

            write!(f, "{}", time)
        }

        #[cfg(not(feature = "time"))]
        write!(f, "{}", self.0)
    }
}

/// One decoded LID value.
#[derive(Debug, Clone, PartialEq)]
pub enum LidValue {
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    UInt32(u32),
    Single(f32),
    Double(f64),
    DateTime(MeterTime),
    String(String),
    /// Stand-in for a LID that could not be resolved. Always displays as
    /// `0`.
    Unresolved,
}

impl LidValue {
    /// The type this value would be written as.
    ///
    /// Strings have their trailing padding removed when read, so for a
    /// string this is the length of the content, not the width the LID
    /// declares. [`LidReading::data_type`] gives the declared type.
    pub fn data_type(&self) -> DataType {
        match self {
            LidValue::Byte(_) => DataType::Byte,
            LidValue::Int16(_) => DataType::Int16,
            LidValue::UInt16(_) => DataType::UInt16,
            LidValue::UInt32(_) => DataType::UInt32,
            LidValue::Single(_) => DataType::Single,
            LidValue::Double(_) => DataType::Double,
            LidValue::DateTime(_) => DataType::DateTimeEncoded,
            LidValue::String(s) => DataType::FixedString(s.len() as u32),
            LidValue::Unresolved => DataType::Unresolved,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, LidValue::Unresolved)
    }

    /// The value as a number, if it is one.
    ///
    /// Unresolved values are `0.0`, matching how they are displayed.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LidValue::Byte(v) => *v as f64,
            LidValue::Int16(v) => *v as f64,
            LidValue::UInt16(v) => *v as f64,
            LidValue::UInt32(v) => *v as f64,
            LidValue::Single(v) => *v as f64,
            LidValue::Double(v) => *v,
            LidValue::Unresolved => 0.0,
            LidValue::DateTime(_) | LidValue::String(_) => return None,
        };

        Some(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LidValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<MeterTime> {
        match self {
            LidValue::DateTime(t) => Some(*t),
            _ => None,
        }
    }
}

impl core::fmt::Display for LidValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LidValue::Byte(v) => write!(f, "{v}"),
            LidValue::Int16(v) => write!(f, "{v}"),
            LidValue::UInt16(v) => write!(f, "{v}"),
            LidValue::UInt32(v) => write!(f, "{v}"),
            LidValue::Single(v) => write!(f, "{v}"),
            LidValue::Double(v) => write!(f, "{v}"),
            LidValue::DateTime(v) => write!(f, "{v}"),
            LidValue::String(v) => write!(f, "{v}"),
            LidValue::Unresolved => write!(f, "0"),
        }
    }
}

/// A value that can be written to a LID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Double(f64),
    Single(f32),
    UInt32(u32),
}

impl ScalarValue {
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarValue::Double(_) => DataType::Double,
            ScalarValue::Single(_) => DataType::Single,
            ScalarValue::UInt32(_) => DataType::UInt32,
        }
    }

    /// Append the little-endian encoding of this value to `buffer`.
    pub fn write_to(&self, buffer: &mut Vec<u8>) {
        match self {
            ScalarValue::Double(v) => buffer.extend_from_slice(&v.to_le_bytes()),
            ScalarValue::Single(v) => buffer.extend_from_slice(&v.to_le_bytes()),
            ScalarValue::UInt32(v) => buffer.extend_from_slice(&v.to_le_bytes()),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for ScalarValue {
    fn from(value: f32) -> Self {
        Self::Single(value)
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        Self::UInt32(value)
    }
}

impl core::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScalarValue::Double(v) => write!(f, "{v}"),
            ScalarValue::Single(v) => write!(f, "{v}"),
            ScalarValue::UInt32(v) => write!(f, "{v}"),
        }
    }
}

/// A LID together with the value read for it.
#[derive(Debug, Clone, PartialEq)]
pub struct LidReading {
    pub lid: Lid,
    pub value: LidValue,
}

impl LidReading {
    pub fn new(lid: Lid, value: LidValue) -> Self {
        Self { lid, value }
    }

    /// The type the value was read as, including the full width of
    /// fixed-length strings.
    pub fn data_type(&self) -> DataType {
        self.lid.data_type()
    }
}

impl Loggable for LidReading {
    fn as_log(&self) -> Vec<LogItem> {
        let name = if self.lid.description().is_empty() {
            format!("0x{:08X}", self.lid.value())
        } else {
            self.lid.description().to_string()
        };

        let mut log = log_vec![
            (0, "LID reading"),
            (1, "LID", format!("0x{:08X}", self.lid.value())),
            (1, "Name", name),
            (1, "Value", &self.value),
        ];

        if self.value.is_unresolved() {
            log.push((1, "Note", "LID unresolved, value not read").into());
        }

        log
    }
}

impl core::fmt::Display for LidReading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} = {}", self.lid, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_is_zero() {
        assert_eq!(LidValue::Unresolved.to_string(), "0");
        assert_eq!(LidValue::Unresolved.as_f64(), Some(0.0));
    }

    #[test]
    fn scalar_width() {
        for (value, width) in [
            (ScalarValue::Double(1.5), 8),
            (ScalarValue::Single(1.5), 4),
            (ScalarValue::UInt32(15), 4),
        ] {
            let mut buffer = Vec::new();
            value.write_to(&mut buffer);
            assert_eq!(buffer.len(), width);
            assert_eq!(value.data_type().size(), width);
        }
    }

    #[test]
    fn meter_time_epoch() {
        assert_eq!(MeterTime(0).unix_timestamp(), 946_684_800);
        assert_eq!(MeterTime(86_400).unix_timestamp(), 946_771_200);
    }

    #[cfg(feature = "time")]
    #[test]
    fn meter_time_display() {
        assert_eq!(MeterTime(0).to_string(), "2000-01-01T00:00:00Z");
        assert_eq!(MeterTime(3_661).to_string(), "2000-01-01T01:01:01Z");
    }

    #[test]
    fn reading_log() {
        let reading = LidReading::new(Lid::new(0x1400_00BF), LidValue::Unresolved);
        let log = reading.as_log();

        assert_eq!(log.len(), 5);
        assert!(reading.to_string().ends_with("= 0"));
    }

    #[test]
    fn reading_keeps_declared_string_width() {
        let lid = Lid::with_string_length(0x5000_0006, 16);
        let mut reader = crate::reader::TableReader::new(b"ABC123\0\0\0\0\0\0\0\0\0\0");
        let value = reader.read_value(lid.data_type()).unwrap();

        assert_eq!(value, LidValue::String("ABC123".to_string()));
        assert_eq!(value.data_type(), DataType::FixedString(6));

        let reading = LidReading::new(lid, value);
        assert_eq!(reading.data_type(), DataType::FixedString(16));
        assert_eq!(reading.data_type().size(), 16);
    }
}
