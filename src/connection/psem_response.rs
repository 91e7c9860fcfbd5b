/// A PSEM response code, as returned by a meter for every service request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PsemResponse {
    Ok,
    Error,
    ServiceNotSupported,
    InsufficientSecurityClearance,
    OperationNotPossible,
    InappropriateActionRequested,
    DeviceBusy,
    DataNotReady,
    DataLocked,
    RenegotiateRequest,
    InvalidServiceSequenceState,
    Reserved(u8),
}

impl From<u8> for PsemResponse {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Ok,
            0x01 => Self::Error,
            0x02 => Self::ServiceNotSupported,
            0x03 => Self::InsufficientSecurityClearance,
            0x04 => Self::OperationNotPossible,
            0x05 => Self::InappropriateActionRequested,
            0x06 => Self::DeviceBusy,
            0x07 => Self::DataNotReady,
            0x08 => Self::DataLocked,
            0x09 => Self::RenegotiateRequest,
            0x0A => Self::InvalidServiceSequenceState,
            v => Self::Reserved(v),
        }
    }
}

impl From<PsemResponse> for u8 {
    fn from(value: PsemResponse) -> Self {
        match value {
            PsemResponse::Ok => 0x00,
            PsemResponse::Error => 0x01,
            PsemResponse::ServiceNotSupported => 0x02,
            PsemResponse::InsufficientSecurityClearance => 0x03,
            PsemResponse::OperationNotPossible => 0x04,
            PsemResponse::InappropriateActionRequested => 0x05,
            PsemResponse::DeviceBusy => 0x06,
            PsemResponse::DataNotReady => 0x07,
            PsemResponse::DataLocked => 0x08,
            PsemResponse::RenegotiateRequest => 0x09,
            PsemResponse::InvalidServiceSequenceState => 0x0A,
            PsemResponse::Reserved(v) => v,
        }
    }
}

impl PsemResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether this response code is a reserved value or not.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved(_))
    }

    /// The short name the C12.18 standard uses for this code.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PsemResponse::Ok => "OK",
            PsemResponse::Error => "ERR",
            PsemResponse::ServiceNotSupported => "SNS",
            PsemResponse::InsufficientSecurityClearance => "ISC",
            PsemResponse::OperationNotPossible => "ONP",
            PsemResponse::InappropriateActionRequested => "IAR",
            PsemResponse::DeviceBusy => "BSY",
            PsemResponse::DataNotReady => "DNR",
            PsemResponse::DataLocked => "DLK",
            PsemResponse::RenegotiateRequest => "RNO",
            PsemResponse::InvalidServiceSequenceState => "ISSS",
            PsemResponse::Reserved(_) => "RSVD",
        }
    }
}

impl core::fmt::Display for PsemResponse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            PsemResponse::Ok => "Acknowledge",
            PsemResponse::Error => "Error",
            PsemResponse::ServiceNotSupported => "Service not supported",
            PsemResponse::InsufficientSecurityClearance => "Insufficient security clearance",
            PsemResponse::OperationNotPossible => "Operation not possible",
            PsemResponse::InappropriateActionRequested => "Inappropriate action requested",
            PsemResponse::DeviceBusy => "Device busy",
            PsemResponse::DataNotReady => "Data not ready",
            PsemResponse::DataLocked => "Data locked",
            PsemResponse::RenegotiateRequest => "Renegotiate request",
            PsemResponse::InvalidServiceSequenceState => "Invalid service sequence state",
            PsemResponse::Reserved(v) => return write!(f, "Reserved response code 0x{v:02X}"),
        };

        write!(f, "{} ({})", text, self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for x in 0u8..=255u8 {
            let response = PsemResponse::from(x);
            let value: u8 = response.into();
            assert_eq!(x, value);
        }
    }

    #[test]
    fn reserved() {
        assert!(PsemResponse::from(0x0B).is_reserved());
        assert!(!PsemResponse::from(0x0A).is_reserved());
        assert!(PsemResponse::from(0).is_success());
        assert_eq!(PsemResponse::DeviceBusy.to_string(), "Device busy (BSY)");
    }
}
