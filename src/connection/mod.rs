//! The table service a meter is reached through.

mod memory;
pub use memory::MemoryTables;

mod psem_response;
pub use psem_response::PsemResponse;

/// A C12.19 table number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub u16);

impl TableId {
    /// Table the LID request is written to.
    pub const LID_REQUEST: Self = Self(2049);
    /// Table the LID response is read from.
    pub const LID_RESPONSE: Self = Self(2050);
    /// Table LID writes are sent to.
    pub const LID_WRITE: Self = Self(2051);

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for TableId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for TableId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Table {}", self.0)
    }
}

/// How the meter lays out a LID response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestMode {
    /// Only the values, concatenated in request order.
    #[default]
    DataOnly,
    /// Each value preceded by the 4-byte LID it belongs to.
    LidAndData,
    LidAndDataByBlock,
    LidOnly,
}

impl RequestMode {
    pub fn value(&self) -> u8 {
        match self {
            RequestMode::DataOnly => 0,
            RequestMode::LidAndData => 1,
            RequestMode::LidAndDataByBlock => 2,
            RequestMode::LidOnly => 3,
        }
    }
}

impl TryFrom<u8> for RequestMode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let mode = match value {
            0 => Self::DataOnly,
            1 => Self::LidAndData,
            2 => Self::LidAndDataByBlock,
            3 => Self::LidOnly,
            _ => return Err(()),
        };

        Ok(mode)
    }
}

impl From<RequestMode> for u8 {
    fn from(value: RequestMode) -> Self {
        value.value()
    }
}

impl core::fmt::Display for RequestMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RequestMode::DataOnly => write!(f, "Data only"),
            RequestMode::LidAndData => write!(f, "LID and data"),
            RequestMode::LidAndDataByBlock => write!(f, "LID and data by block"),
            RequestMode::LidOnly => write!(f, "LID only"),
        }
    }
}

/// Whole-table reads and writes against a meter.
///
/// Session handling, security and retries are the implementor's business.
/// Calls block until the exchange completes or fails.
pub trait TableService {
    type Error: core::fmt::Debug;

    fn full_read(&mut self, table: TableId) -> Result<Vec<u8>, Self::Error>;
    fn full_write(&mut self, table: TableId, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T> TableService for &mut T
where
    T: TableService + ?Sized,
{
    type Error = T::Error;

    fn full_read(&mut self, table: TableId) -> Result<Vec<u8>, Self::Error> {
        (**self).full_read(table)
    }

    fn full_write(&mut self, table: TableId, data: &[u8]) -> Result<(), Self::Error> {
        (**self).full_write(table, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_mode_round_trip() {
        for value in 0u8..=3 {
            let mode = RequestMode::try_from(value).unwrap();
            assert_eq!(u8::from(mode), value);
        }

        assert!(RequestMode::try_from(4).is_err());
        assert_eq!(RequestMode::default(), RequestMode::DataOnly);
    }
}
