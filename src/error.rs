use crate::connection::RequestMode;

#[derive(Clone, Debug, PartialEq)]
pub enum LidError<CON> {
    /// More LIDs were passed than fit in a single request. Nothing was
    /// sent.
    TooManyLids { requested: usize, max: usize },
    /// The response layout of this mode is not decoded. Nothing was sent.
    UnsupportedMode(RequestMode),
    /// Writing the request table failed.
    Write(CON),
    /// Reading the response table failed.
    Read(CON),
    /// The response ended before LID `index` could be decoded.
    NotEnoughData {
        index: usize,
        needed: usize,
        available: usize,
    },
    /// The meter echoed a different LID than the one requested at `index`.
    EchoMismatch {
        index: usize,
        expected: u32,
        received: u32,
    },
}

impl<CON> LidError<CON> {
    pub fn map<CON2, F>(self, f: F) -> LidError<CON2>
    where
        F: FnOnce(CON) -> CON2,
    {
        match self {
            LidError::TooManyLids { requested, max } => LidError::TooManyLids { requested, max },
            LidError::UnsupportedMode(mode) => LidError::UnsupportedMode(mode),
            LidError::Write(e) => LidError::Write(f(e)),
            LidError::Read(e) => LidError::Read(f(e)),
            LidError::NotEnoughData {
                index,
                needed,
                available,
            } => LidError::NotEnoughData {
                index,
                needed,
                available,
            },
            LidError::EchoMismatch {
                index,
                expected,
                received,
            } => LidError::EchoMismatch {
                index,
                expected,
                received,
            },
        }
    }

    /// Whether the table service reported the failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, LidError::Write(_) | LidError::Read(_))
    }
}

impl<CON> core::fmt::Display for LidError<CON>
where
    CON: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LidError::TooManyLids { requested, max } => {
                write!(f, "{requested} LIDs requested, at most {max} fit in one request")
            }
            LidError::UnsupportedMode(mode) => write!(f, "Request mode '{mode}' is not supported"),
            LidError::Write(e) => write!(f, "Writing LID request failed: {e:?}"),
            LidError::Read(e) => write!(f, "Reading LID response failed: {e:?}"),
            LidError::NotEnoughData {
                index,
                needed,
                available,
            } => write!(
                f,
                "LID {index} needs {needed} bytes, only {available} left in response"
            ),
            LidError::EchoMismatch {
                index,
                expected,
                received,
            } => write!(
                f,
                "LID {index}: expected echo of 0x{expected:08X}, got 0x{received:08X}"
            ),
        }
    }
}

impl<CON> std::error::Error for LidError<CON> where CON: core::fmt::Debug {}
