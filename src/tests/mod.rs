use crate::{
    catalog::defined::*,
    connection::{MemoryTables, PsemResponse, RequestMode, TableId},
    lid::DataType,
    reader::TableReader,
    Lid, LidError, LidRetriever, LidValue, LidWriter, ScalarValue, PLACEHOLDER_LID,
};

fn meter(response: &str) -> LidRetriever<MemoryTables> {
    let response = hex::decode(response).unwrap();
    LidRetriever::new(MemoryTables::new().with_table(TableId::LID_RESPONSE, response))
}

fn request_of(retriever: &LidRetriever<MemoryTables>) -> Vec<u8> {
    let writes = retriever.service().writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, TableId::LID_REQUEST);
    writes[0].1.clone()
}

macro_rules! test {
    ($name:ident, $lids:expr, $mode:expr, $response:expr, $then:expr) => {
        #[test]
        pub fn $name() {
            let lids: Vec<Lid> = $lids.into_iter().map(Lid::new).collect();

            let mut retriever = meter($response);
            let values = retriever.retrieve_multiple(&lids, $mode);

            assert_eq!(values, $then);
        }
    };
}

test!(
    data_only_mixed_widths,
    [MISC_NUM_OUTAGES, MISC_CUM_OUTAGE_TIME, DEMAND_MAX_W_DEL],
    RequestMode::DataOnly,
    concat!("0700", "40e20100", "0000c03f"),
    Ok(vec![
        LidValue::UInt16(7),
        LidValue::UInt32(123_456),
        LidValue::Single(1.5)
    ])
);

test!(
    data_only_double,
    [ENERGY_WH_DEL],
    RequestMode::DataOnly,
    "000000000000f83f",
    Ok(vec![LidValue::Double(1.5)])
);

test!(
    lid_and_data,
    [CONSTANT_FW_VERSION, MISC_NUM_OUTAGES],
    RequestMode::LidAndData,
    concat!("01000050", "03", "0100002c", "0200"),
    Ok(vec![LidValue::Byte(3), LidValue::UInt16(2)])
);

test!(
    lid_and_data_echo_mismatch,
    [CONSTANT_FW_VERSION],
    RequestMode::LidAndData,
    concat!("02000050", "03"),
    Err(LidError::EchoMismatch {
        index: 0,
        expected: CONSTANT_FW_VERSION,
        received: 0x5000_0002,
    })
);

test!(
    response_too_short,
    [CONSTANT_FW_VERSION, MISC_CUM_OUTAGE_TIME],
    RequestMode::DataOnly,
    concat!("03", "0102"),
    Err(LidError::NotEnoughData {
        index: 1,
        needed: 4,
        available: 2,
    })
);

test!(
    trailing_bytes_ignored,
    [CONSTANT_FW_VERSION],
    RequestMode::DataOnly,
    "05ffff",
    Ok(vec![LidValue::Byte(5)])
);

#[test]
fn cursor_advances_by_each_width() {
    let data = hex::decode(concat!("2a", "78563412", "0000803f")).unwrap();
    let mut reader = TableReader::new(&data);

    let values: Vec<_> = [DataType::Byte, DataType::UInt32, DataType::Single]
        .into_iter()
        .map(|ty| reader.read_value(ty).unwrap())
        .collect();

    assert_eq!(
        values,
        vec![
            LidValue::Byte(42),
            LidValue::UInt32(0x1234_5678),
            LidValue::Single(1.0)
        ]
    );
    assert_eq!(reader.position(), 9);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn request_layout() {
    let mut retriever = meter(concat!("0000803f", "00000000000000c0"));

    let lids = [Lid::new(DEMAND_MAX_W_DEL), Lid::new(ENERGY_WH_DEL)];
    let values = retriever
        .retrieve_multiple(&lids, RequestMode::DataOnly)
        .unwrap();

    assert_eq!(values, vec![LidValue::Single(1.0), LidValue::Double(-2.0)]);

    let mut expected = vec![0, 2];
    expected.extend_from_slice(&DEMAND_MAX_W_DEL.to_le_bytes());
    expected.extend_from_slice(&ENERGY_WH_DEL.to_le_bytes());
    assert_eq!(request_of(&retriever), expected);
    assert_eq!(retriever.last_response().len(), 12);
}

#[test]
fn unresolved_lid_reads_placeholder() {
    let unresolved = Lid::new(ALL_SEC_ENERGIES_TOTAL);
    assert!(!unresolved.is_resolved());

    let lids = [
        Lid::new(CONSTANT_FW_VERSION),
        unresolved,
        Lid::new(MISC_NUM_OUTAGES),
    ];

    // Byte, placeholder byte, UInt16.
    let mut retriever = meter(concat!("04", "09", "0a00"));
    let values = retriever
        .retrieve_multiple(&lids, RequestMode::DataOnly)
        .unwrap();

    assert_eq!(
        values,
        vec![LidValue::Byte(4), LidValue::Unresolved, LidValue::UInt16(10)]
    );
    assert_eq!(values[1].to_string(), "0");

    let request = request_of(&retriever);
    assert_eq!(request[1], 3);
    assert_eq!(&request[6..10], &PLACEHOLDER_LID.to_le_bytes());
}

#[test]
fn single_retrieve() {
    let mut retriever = meter("0c00");
    let value = retriever.retrieve(&Lid::new(MISC_NUM_OUTAGES)).unwrap();

    assert_eq!(value, LidValue::UInt16(12));
    assert_eq!(request_of(&retriever)[0], RequestMode::DataOnly.value());
}

#[test]
fn readings_pair_lids_and_values() {
    let mut retriever = meter(concat!("01", "0200"));
    let lids = [Lid::new(CONSTANT_FW_VERSION), Lid::new(MISC_NUM_OUTAGES)];

    let readings = retriever
        .retrieve_readings(&lids, RequestMode::DataOnly)
        .unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].lid, lids[0]);
    assert_eq!(readings[1].value, LidValue::UInt16(2));
}

#[test]
fn too_many_lids_sends_nothing() {
    let lids: Vec<_> = (0..9).map(|_| Lid::new(CONSTANT_FW_VERSION)).collect();
    let mut retriever = meter("");

    let result = retriever.retrieve_multiple(&lids, RequestMode::DataOnly);

    assert_eq!(
        result,
        Err(LidError::TooManyLids {
            requested: 9,
            max: LidRetriever::<MemoryTables>::MAX_LIDS_PER_REQUEST,
        })
    );
    assert!(retriever.service().writes().is_empty());
}

#[test]
fn unsupported_modes_send_nothing() {
    let lids = [Lid::new(CONSTANT_FW_VERSION)];

    for mode in [RequestMode::LidAndDataByBlock, RequestMode::LidOnly] {
        let mut retriever = meter("03");
        let result = retriever.retrieve_multiple(&lids, mode);

        assert_eq!(result, Err(LidError::UnsupportedMode(mode)));
        assert!(retriever.service().writes().is_empty());
    }
}

#[test]
fn write_failure_propagates() {
    let mut retriever = meter("03");
    retriever
        .service_mut()
        .fail_writes(TableId::LID_REQUEST, PsemResponse::DeviceBusy);

    let result = retriever.retrieve(&Lid::new(CONSTANT_FW_VERSION));

    assert_eq!(result, Err(LidError::Write(PsemResponse::DeviceBusy)));
    assert!(result.unwrap_err().is_transport());
}

#[test]
fn read_failure_propagates() {
    let mut retriever = meter("03");
    retriever
        .service_mut()
        .fail_reads(TableId::LID_RESPONSE, PsemResponse::DataNotReady);

    let result = retriever.retrieve(&Lid::new(CONSTANT_FW_VERSION));

    assert_eq!(result, Err(LidError::Read(PsemResponse::DataNotReady)));
    assert_eq!(retriever.service().writes().len(), 1);
}

#[test]
fn missing_response_table() {
    let mut retriever = LidRetriever::new(MemoryTables::new());
    let result = retriever.retrieve(&Lid::new(CONSTANT_FW_VERSION));

    assert_eq!(
        result,
        Err(LidError::Read(PsemResponse::InappropriateActionRequested))
    );
}

#[test]
fn writer_wire_format() {
    let mut writer = LidWriter::new(MemoryTables::new());

    writer
        .write_scalar(&Lid::new(ENERGY_WH_DEL), 2.0f64)
        .unwrap();
    writer
        .write_scalar(&Lid::new(DEMAND_MAX_W_DEL), 2.0f32)
        .unwrap();
    writer
        .write_scalar(&Lid::new(MISC_CUM_OUTAGE_TIME), 60u32)
        .unwrap();

    let writes = writer.release().writes().to_vec();
    assert!(writes.iter().all(|(table, _)| *table == TableId::LID_WRITE));

    let lengths: Vec<_> = writes.iter().map(|(_, data)| data.len()).collect();
    assert_eq!(lengths, vec![12, 8, 8]);

    assert_eq!(&writes[0].1[..4], &ENERGY_WH_DEL.to_le_bytes());
    assert_eq!(&writes[0].1[4..], &2.0f64.to_le_bytes());
    assert_eq!(hex::encode(&writes[2].1[4..]), "3c000000");
}

#[test]
fn writer_failure_propagates() {
    let mut tables = MemoryTables::new();
    tables.fail_writes(TableId::LID_WRITE, PsemResponse::DataLocked);

    let mut writer = LidWriter::new(&mut tables);
    let result = writer.write_scalar(&Lid::new(MISC_CUM_OUTAGE_TIME), ScalarValue::UInt32(1));

    assert_eq!(result, Err(PsemResponse::DataLocked));
    assert!(tables.writes().is_empty());
}
