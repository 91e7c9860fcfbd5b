use crate::{
    connection::{TableId, TableService},
    lid::Lid,
    value::ScalarValue,
};

/// Writes single LID values to a meter through the LID write table.
pub struct LidWriter<T> {
    service: T,
}

impl<T> LidWriter<T> {
    pub fn new(service: T) -> Self {
        Self { service }
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

    /// The bytes written for `lid = value`: the LID followed by the value,
    /// both little-endian.
    pub fn encode(lid: &Lid, value: ScalarValue) -> Vec<u8> {
        let mut data = Vec::with_capacity(4 + value.data_type().size());
        data.extend_from_slice(&lid.value().to_le_bytes());
        value.write_to(&mut data);
        data
    }
}

impl<T> From<T> for LidWriter<T>
where
    T: TableService,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> LidWriter<T>
where
    T: TableService,
{
    /// Write `value` to `lid`. The result of the table write is returned
    /// as is; the value is not read back.
    pub fn write_scalar(
        &mut self,
        lid: &Lid,
        value: impl Into<ScalarValue>,
    ) -> Result<(), T::Error> {
        let value = value.into();

        if value.data_type() != lid.data_type() {
            log::debug!(
                "Writing {} value to {} LID {lid}",
                value.data_type(),
                lid.data_type()
            );
        }

        let data = Self::encode(lid, value);
        log::trace!("LID write: {data:02X?}");

        self.service.full_write(TableId::LID_WRITE, &data)
    }
}
