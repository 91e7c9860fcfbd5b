use std::collections::HashMap;

use super::{PsemResponse, TableId, TableService};

/// A [`TableService`] backed by plain byte buffers.
///
/// Writes replace the contents of the written table and are recorded in
/// order. Reads and writes of a table can be made to fail with a chosen
/// [`PsemResponse`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    tables: HashMap<TableId, Vec<u8>>,
    writes: Vec<(TableId, Vec<u8>)>,
    read_failures: HashMap<TableId, PsemResponse>,
    write_failures: HashMap<TableId, PsemResponse>,
}

impl MemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: TableId, data: impl Into<Vec<u8>>) -> Self {
        self.set_table(table, data);
        self
    }

    pub fn set_table(&mut self, table: TableId, data: impl Into<Vec<u8>>) {
        self.tables.insert(table, data.into());
    }

    pub fn table(&self, table: TableId) -> Option<&[u8]> {
        self.tables.get(&table).map(Vec::as_slice)
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> &[(TableId, Vec<u8>)] {
        &self.writes
    }

    pub fn fail_reads(&mut self, table: TableId, response: PsemResponse) {
        self.read_failures.insert(table, response);
    }

    pub fn fail_writes(&mut self, table: TableId, response: PsemResponse) {
        self.write_failures.insert(table, response);
    }

    pub fn clear_failures(&mut self) {
        self.read_failures.clear();
        self.write_failures.clear();
    }
}

impl TableService for MemoryTables {
    type Error = PsemResponse;

    fn full_read(&mut self, table: TableId) -> Result<Vec<u8>, Self::Error> {
        if let Some(response) = self.read_failures.get(&table) {
            log::debug!("Read of {table} fails with {response}");
            return Err(*response);
        }

        self.tables
            .get(&table)
            .cloned()
            .ok_or(PsemResponse::InappropriateActionRequested)
    }

    fn full_write(&mut self, table: TableId, data: &[u8]) -> Result<(), Self::Error> {
        if let Some(response) = self.write_failures.get(&table) {
            log::debug!("Write of {table} fails with {response}");
            return Err(*response);
        }

        self.tables.insert(table, data.to_vec());
        self.writes.push((table, data.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let mut tables = MemoryTables::new();
        tables.full_write(TableId(7), &[1, 2, 3]).unwrap();

        assert_eq!(tables.full_read(TableId(7)), Ok(vec![1, 2, 3]));
        assert_eq!(tables.writes(), &[(TableId(7), vec![1, 2, 3])]);
    }

    #[test]
    fn missing_table() {
        let mut tables = MemoryTables::new();
        assert_eq!(
            tables.full_read(TableId(1)),
            Err(PsemResponse::InappropriateActionRequested)
        );
    }

    #[test]
    fn injected_failures() {
        let mut tables = MemoryTables::new().with_table(TableId(1), [0u8; 4]);
        tables.fail_reads(TableId(1), PsemResponse::DataLocked);
        tables.fail_writes(TableId(2), PsemResponse::DeviceBusy);

        assert_eq!(tables.full_read(TableId(1)), Err(PsemResponse::DataLocked));
        assert_eq!(
            tables.full_write(TableId(2), &[0]),
            Err(PsemResponse::DeviceBusy)
        );
        assert!(tables.writes().is_empty());

        tables.clear_failures();
        assert_eq!(tables.full_read(TableId(1)), Ok(vec![0; 4]));
    }
}
