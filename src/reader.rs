//! Sequential decoding of a response buffer.

use crate::{
    lid::DataType,
    value::{LidValue, MeterTime},
};

/// A cursor over a response buffer.
///
/// Every `read_*` method either consumes exactly the width of its type
/// and returns `Some`, or leaves the cursor where it was and returns
/// `None`.
#[derive(Debug, Clone)]
pub struct TableReader<'a> {
    data: &'a [u8],
    position: usize,
}

macro_rules! read_le {
    ($($name:ident => $ty:ty,)*) => {
        $(
            pub fn $name(&mut self) -> Option<$ty> {
                let bytes = self.read_bytes(core::mem::size_of::<$ty>())?;
                Some(<$ty>::from_le_bytes(bytes.try_into().ok()?))
            }
        )*
    };
}

impl<'a> TableReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(len)?;
        let bytes = self.data.get(self.position..end)?;
        self.position = end;
        Some(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Option<()> {
        self.read_bytes(len).map(|_| ())
    }

    read_le! {
        read_u8 => u8,
        read_i16 => i16,
        read_u16 => u16,
        read_u32 => u32,
        read_f32 => f32,
        read_f64 => f64,
    }

    pub fn read_time(&mut self) -> Option<MeterTime> {
        self.read_u32().map(MeterTime)
    }

    /// Read a fixed-length ASCII string, dropping trailing NUL and space
    /// padding.
    pub fn read_string(&mut self, len: usize) -> Option<String> {
        let bytes = self.read_bytes(len)?;
        let text = String::from_utf8_lossy(bytes);
        Some(text.trim_end_matches(|c: char| c == '\0' || c == ' ').to_string())
    }

    /// Read one value of the given type.
    ///
    /// [`DataType::Unresolved`] reads nothing and yields
    /// [`LidValue::Unresolved`].
    pub fn read_value(&mut self, data_type: DataType) -> Option<LidValue> {
        let value = match data_type {
            DataType::Byte => LidValue::Byte(self.read_u8()?),
            DataType::Int16 => LidValue::Int16(self.read_i16()?),
            DataType::UInt16 => LidValue::UInt16(self.read_u16()?),
            DataType::UInt32 => LidValue::UInt32(self.read_u32()?),
            DataType::Single => LidValue::Single(self.read_f32()?),
            DataType::Double => LidValue::Double(self.read_f64()?),
            DataType::DateTimeEncoded => LidValue::DateTime(self.read_time()?),
            DataType::FixedString(len) => LidValue::String(self.read_string(len as usize)?),
            DataType::Unresolved => LidValue::Unresolved,
        };

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut reader = TableReader::new(&data);

        assert_eq!(reader.read_u8(), Some(1));
        assert_eq!(reader.read_u16(), Some(0x1234));
        assert_eq!(reader.read_u32(), Some(0x1234_5678));
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.read_u8(), None);
    }

    #[test]
    fn short_read_keeps_position() {
        let data = [1, 2, 3];
        let mut reader = TableReader::new(&data);

        assert_eq!(reader.read_u8(), Some(1));
        assert_eq!(reader.read_u32(), None);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16(), Some(0x0302));
    }

    #[test]
    fn floats() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&(-2.25f64).to_le_bytes());

        let mut reader = TableReader::new(&data);
        assert_eq!(reader.read_value(DataType::Single), Some(LidValue::Single(1.5)));
        assert_eq!(reader.read_value(DataType::Double), Some(LidValue::Double(-2.25)));
    }

    #[test]
    fn padded_string() {
        let data = *b"AB12\0\0  x";
        let mut reader = TableReader::new(&data);

        assert_eq!(reader.read_string(8), Some("AB12".to_string()));
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn unresolved_reads_nothing() {
        let data = [9];
        let mut reader = TableReader::new(&data);

        assert_eq!(reader.read_value(DataType::Unresolved), Some(LidValue::Unresolved));
        assert_eq!(reader.position(), 0);
    }
}
