use crate::{
    catalog::defined::CONSTANT_FW_VERSION,
    connection::{RequestMode, TableId, TableService},
    lid::{DataType, Lid},
    reader::TableReader,
    value::{LidReading, LidValue},
    LidError,
};

/// Sent in place of a LID that did not resolve. It is accepted by every
/// meter and answers with a single byte.
pub const PLACEHOLDER_LID: u32 = CONSTANT_FW_VERSION;

/// Wire type of [`PLACEHOLDER_LID`]. Must match its decomposition, or the
/// values after a substituted slot are misaligned.
const PLACEHOLDER_TYPE: DataType = DataType::Byte;

/// What is actually sent for one requested LID.
#[derive(Debug, Clone, Copy)]
struct Slot {
    value: u32,
    data_type: DataType,
    substituted: bool,
}

impl Slot {
    fn for_lid(lid: &Lid) -> Self {
        if lid.is_resolved() {
            Self {
                value: lid.value(),
                data_type: lid.data_type(),
                substituted: false,
            }
        } else {
            log::warn!(
                "LID 0x{:08X} is unresolved, requesting 0x{PLACEHOLDER_LID:08X} in its place",
                lid.value()
            );

            Self {
                value: PLACEHOLDER_LID,
                data_type: PLACEHOLDER_TYPE,
                substituted: true,
            }
        }
    }
}

/// Reads LID values from a meter through the LID request and response
/// tables.
///
/// A retriever holds the response of the last exchange. It must not be
/// shared between concurrent callers.
pub struct LidRetriever<T> {
    service: T,
    response: Vec<u8>,
}

impl<T> LidRetriever<T> {
    /// The largest number of LIDs a single request may carry.
    pub const MAX_LIDS_PER_REQUEST: usize = 8;

    pub fn new(service: T) -> Self {
        Self {
            service,
            response: Vec::new(),
        }
    }

    pub fn release(self) -> T {
        self.service
    }

    pub fn service(&self) -> &T {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut T {
        &mut self.service
    }

    /// The raw response of the last successful exchange.
    pub fn last_response(&self) -> &[u8] {
        &self.response
    }
}

impl<T> From<T> for LidRetriever<T>
where
    T: TableService,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> LidRetriever<T>
where
    T: TableService,
{
    /// Retrieve a single LID in [`RequestMode::DataOnly`].
    pub fn retrieve(&mut self, lid: &Lid) -> Result<LidValue, LidError<T::Error>> {
        let mut values = self.retrieve_multiple(core::slice::from_ref(lid), RequestMode::DataOnly)?;

        values.pop().ok_or(LidError::NotEnoughData {
            index: 0,
            needed: lid.length(),
            available: 0,
        })
    }

    /// Retrieve up to [`Self::MAX_LIDS_PER_REQUEST`] LIDs in one exchange.
    ///
    /// Values are returned in the order of `lids`. Unresolved LIDs are
    /// replaced by [`PLACEHOLDER_LID`] on the wire and yield
    /// [`LidValue::Unresolved`].
    ///
    /// Batches that are too large are rejected, not split.
    pub fn retrieve_multiple(
        &mut self,
        lids: &[Lid],
        mode: RequestMode,
    ) -> Result<Vec<LidValue>, LidError<T::Error>> {
        if lids.len() > Self::MAX_LIDS_PER_REQUEST {
            return Err(LidError::TooManyLids {
                requested: lids.len(),
                max: Self::MAX_LIDS_PER_REQUEST,
            });
        }

        if !matches!(mode, RequestMode::DataOnly | RequestMode::LidAndData) {
            return Err(LidError::UnsupportedMode(mode));
        }

        let slots: Vec<_> = lids.iter().map(Slot::for_lid).collect();

        let request = Self::encode_request(&slots, mode);
        log::debug!("Requesting {} LIDs ({mode})", slots.len());
        log::trace!("LID request: {request:02X?}");

        self.service
            .full_write(TableId::LID_REQUEST, &request)
            .map_err(LidError::Write)?;

        let response = self
            .service
            .full_read(TableId::LID_RESPONSE)
            .map_err(LidError::Read)?;

        log::trace!("LID response: {response:02X?}");
        self.response = response;

        Self::decode(&self.response, &slots, mode)
    }

    /// Like [`Self::retrieve_multiple`], pairing every value with its LID.
    pub fn retrieve_readings(
        &mut self,
        lids: &[Lid],
        mode: RequestMode,
    ) -> Result<Vec<LidReading>, LidError<T::Error>> {
        let values = self.retrieve_multiple(lids, mode)?;

        Ok(lids
            .iter()
            .cloned()
            .zip(values)
            .map(|(lid, value)| LidReading::new(lid, value))
            .collect())
    }

    fn encode_request(slots: &[Slot], mode: RequestMode) -> Vec<u8> {
        let mut request = Vec::with_capacity(2 + slots.len() * 4);
        request.push(mode.value());
        request.push(slots.len() as u8);

        for slot in slots {
            request.extend_from_slice(&slot.value.to_le_bytes());
        }

        request
    }

    fn decode(
        response: &[u8],
        slots: &[Slot],
        mode: RequestMode,
    ) -> Result<Vec<LidValue>, LidError<T::Error>> {
        let mut reader = TableReader::new(response);
        let mut values = Vec::with_capacity(slots.len());

        for (index, slot) in slots.iter().enumerate() {
            let echo = mode == RequestMode::LidAndData;
            let needed = slot.data_type.size() + if echo { 4 } else { 0 };

            let not_enough_data = |available: usize| -> LidError<T::Error> {
                LidError::NotEnoughData {
                    index,
                    needed,
                    available,
                }
            };

            if echo {
                let available = reader.remaining();
                let received = reader.read_u32().ok_or(not_enough_data(available))?;

                if received != slot.value {
                    return Err(LidError::EchoMismatch {
                        index,
                        expected: slot.value,
                        received,
                    });
                }
            }

            let available = reader.remaining();
            let value = reader
                .read_value(slot.data_type)
                .ok_or(not_enough_data(available))?;

            if slot.substituted {
                values.push(LidValue::Unresolved);
            } else {
                values.push(value);
            }
        }

        if reader.remaining() != 0 {
            log::debug!(
                "{} trailing bytes in LID response ignored",
                reader.remaining()
            );
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_type_matches_decomposition() {
        let placeholder = Lid::new(PLACEHOLDER_LID);

        assert!(placeholder.is_resolved());
        assert_eq!(placeholder.data_type(), PLACEHOLDER_TYPE);
        assert_eq!(placeholder.length(), 1);
    }

    #[test]
    fn substituted_slot() {
        let slot = Slot::for_lid(&Lid::new(0));

        assert!(slot.substituted);
        assert_eq!(slot.value, PLACEHOLDER_LID);
        assert_eq!(slot.data_type, Lid::new(PLACEHOLDER_LID).data_type());
    }
}
