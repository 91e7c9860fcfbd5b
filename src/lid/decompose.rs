use super::bits::*;
use super::items::{self, Item, Modifier};
use super::{Category, DataType, DeviceFamily, LidFlags, MeasurementUnit, Quantity};

const ENERGY_FIELDS: u32 = QUANTITY_MASK | ENERGY_FORMAT_MASK | ENERGY_TOU_MASK;
const SELF_READ_DEMAND_FIELDS: u32 =
    QUANTITY_MASK | DEMAND_TOU_MASK | DEMAND_SEGMENT_MASK | DEMAND_FORMAT_MASK;

/// Everything derived from a LID value.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Decomposition {
    pub data_type: DataType,
    pub description: String,
    pub flags: LidFlags,
}

impl Decomposition {
    pub fn unresolved() -> Self {
        Self {
            data_type: DataType::Unresolved,
            description: String::new(),
            flags: LidFlags::empty(),
        }
    }

    /// A configuration or status item rather than a metered register.
    fn non_register(data_type: DataType, description: String) -> Self {
        Self {
            data_type,
            description,
            flags: LidFlags::NON_REGISTER_ITEM,
        }
    }
}

/// Decompose `value` as seen by a meter of `family`.
pub(super) fn decompose(value: u32, unit: MeasurementUnit, family: DeviceFamily) -> Decomposition {
    let base = decompose_base(value, unit);
    family.refine(value, base)
}

fn decompose_base(value: u32, unit: MeasurementUnit) -> Decomposition {
    let category = match Category::from_value(value) {
        Some(category) => category,
        None => return Decomposition::unresolved(),
    };

    if value & !(COMPONENT_MASK | category.field_mask()) != 0 {
        return Decomposition::unresolved();
    }

    let fields = value & !COMPONENT_MASK;

    let resolved = match category {
        Category::Coefficient => simple(items::COEFFICIENTS, fields),
        Category::CalendarConfig => simple(items::CALENDAR_CONFIG_ITEMS, fields),
        Category::Calendar => simple(items::CALENDAR_DATA_ITEMS, fields),
        Category::EnergyConfig => simple(items::ENERGY_CONFIG_ITEMS, fields),
        Category::Energy => energy(fields, unit),
        Category::DemandConfig => simple(items::DEMAND_CONFIG_ITEMS, fields),
        Category::Demand => demand(fields, unit),
        Category::LoadProfileConfig => simple(items::LOAD_PROFILE_CONFIG_ITEMS, fields),
        Category::LoadProfile => simple(items::LOAD_PROFILE_DATA_ITEMS, fields),
        Category::Metrology => instantaneous(fields, unit),
        Category::Misc => match fields & BLOCK_MASK {
            0 => simple(items::MISC_ITEMS, fields),
            BASE_DATA_STD => simple(items::BASE_DATA_STD_ITEMS, fields & !BLOCK_MASK),
            _ => None,
        },
        Category::ModeControl => simple(items::MODE_CONTROL_ITEMS, fields),
        Category::OptionBoard => simple(items::OPTION_BOARD_ITEMS, fields),
        Category::SelfRead => self_read(fields, unit),
        Category::SiteScan => simple(items::SITESCAN_ITEMS, fields),
        Category::StateMonitor => match fields & BLOCK_MASK {
            STATEMON_STD => simple(items::STATEMON_STD_ITEMS, fields),
            _ => None,
        },
        Category::MeterKey => simple(items::METER_KEY_ITEMS, fields),
        Category::VoltageMonitor => simple(items::VOLTAGE_MONITOR_ITEMS, fields),
        Category::PowerQuality => simple(items::POWER_QUALITY_ITEMS, fields),
        Category::Constant => simple(items::CONSTANT_ITEMS, fields),
    };

    resolved.unwrap_or_else(Decomposition::unresolved)
}

/// Resolve an item + modifier pair against `items`.
///
/// `fields` must already have the component and block bits removed.
pub(super) fn simple(items: &'static [Item], fields: u32) -> Option<Decomposition> {
    if fields & !(ITEM_MASK | MODIFIER_MASK) != 0 {
        return None;
    }

    let item = items::find(items, fields & ITEM_MASK)?;
    let modifier = (fields & MODIFIER_MASK) >> MODIFIER_SHIFT;

    let description = match item.modifier {
        Modifier::None if modifier == 0 => item.description.to_string(),
        Modifier::Index(max) if (1..=max).contains(&modifier) => item
            .description
            .replace('#', &modifier.to_string()),
        Modifier::Phase => format!("{}{}", item.description, items::phase_suffix(modifier)?),
        _ => return None,
    };

    Some(Decomposition::non_register(item.data_type, description))
}

fn scale(scalable: bool, unit: MeasurementUnit) -> &'static str {
    if scalable {
        unit.prefix()
    } else {
        ""
    }
}

fn rate_suffix(rate: u32, flags: &mut LidFlags) -> Option<String> {
    match rate {
        TOU_TOTAL => Some(String::new()),
        RATE_A..=RATE_G => {
            flags.insert(LidFlags::TOU_RATE);
            let letter = char::from(b'A' + (rate - RATE_A) as u8);
            Some(format!(" Rate {letter}"))
        }
        _ => None,
    }
}

fn energy(fields: u32, unit: MeasurementUnit) -> Option<Decomposition> {
    let quantity = Quantity::from_code(fields & QUANTITY_MASK)?;
    let mut flags = LidFlags::ENERGY | LidFlags::QUANTITY;

    let (data_type, format) = match fields & ENERGY_FORMAT_MASK {
        SECONDARY_DATA => (DataType::Double, ""),
        ENERGY_PRIMARY_DATA => {
            flags.insert(LidFlags::PRIMARY);
            (DataType::Double, "Pri ")
        }
        ENERGY_RAW_DATA => (DataType::UInt32, "Raw "),
        _ => return None,
    };

    let rate = rate_suffix((fields & ENERGY_TOU_MASK) >> ENERGY_TOU_SHIFT, &mut flags)?;

    if quantity.signed {
        flags.insert(LidFlags::NEGATIVE_ALLOWED);
    }

    Some(Decomposition {
        data_type,
        description: format!(
            "{format}{}{}{rate}",
            scale(quantity.scalable, unit),
            quantity.energy
        ),
        flags,
    })
}

fn demand(fields: u32, unit: MeasurementUnit) -> Option<Decomposition> {
    let segment = fields & DEMAND_SEGMENT_MASK;

    if segment == MISC_DEMAND {
        // Misc demand items only use the item byte.
        if fields & !(DEMAND_SEGMENT_MASK | QUANTITY_MASK) != 0 {
            return None;
        }
        return simple(items::DEMAND_MISC_ITEMS, fields & QUANTITY_MASK);
    }

    let quantity = Quantity::from_code(fields & QUANTITY_MASK)?;
    let mut flags = LidFlags::QUANTITY;

    let (lead, has_occurrence) = match segment {
        PRESENT_DEMAND => {
            flags.insert(LidFlags::PRESENT);
            ("Present ".to_string(), false)
        }
        PREVIOUS_DEMAND => {
            flags.insert(LidFlags::PREVIOUS);
            ("Prev ".to_string(), false)
        }
        PROJECTED_DEMAND => {
            flags.insert(LidFlags::PROJECTED);
            ("Proj ".to_string(), false)
        }
        CUM_DEMAND => {
            flags.insert(LidFlags::CUMULATIVE);
            ("Cum ".to_string(), false)
        }
        CCUM_DEMAND => {
            flags.insert(LidFlags::CONTINUOUS_CUMULATIVE);
            ("CCum ".to_string(), false)
        }
        MIN_DEMAND => {
            flags.insert(LidFlags::MIN_DEMAND);
            ("Min ".to_string(), true)
        }
        PEAK_1_DEMAND..=PEAK_5_DEMAND => {
            flags.insert(LidFlags::PEAK_DEMAND);
            let n = ((segment - PEAK_1_DEMAND) >> 12) + 1;
            (format!("Peak {n} "), true)
        }
        MAX_DEMAND => {
            flags.insert(LidFlags::MAX_DEMAND);
            ("Max ".to_string(), true)
        }
        COINCIDENT_DEMAND => {
            flags.insert(LidFlags::COINCIDENT);
            ("Coinc ".to_string(), false)
        }
        _ => return None,
    };

    let cumulative = matches!(segment, CUM_DEMAND | CCUM_DEMAND);
    let register_type = if cumulative {
        DataType::Double
    } else {
        DataType::Single
    };

    let (data_type, format) = match fields & DEMAND_FORMAT_MASK {
        SECONDARY_DATA => (register_type, ""),
        DEMAND_PRIMARY_DATA => {
            flags.insert(LidFlags::PRIMARY);
            (register_type, "Pri ")
        }
        DEMAND_RAW_DATA => (DataType::UInt32, "Raw "),
        TOO_DATA if has_occurrence => {
            flags.insert(LidFlags::TIME_OF_OCCURRENCE);
            (DataType::DateTimeEncoded, "TOO ")
        }
        _ => return None,
    };

    let rate = rate_suffix((fields & DEMAND_TOU_MASK) >> DEMAND_TOU_SHIFT, &mut flags)?;

    let trigger_code = (fields & COINC_TRIGGER_MASK) >> COINC_TRIGGER_SHIFT;
    let trigger = match (segment, trigger_code) {
        (_, 0) => String::new(),
        (COINCIDENT_DEMAND, code) => {
            let trigger = Quantity::from_code(code)?;
            format!(
                " @ Max {}{}",
                scale(trigger.scalable, unit),
                trigger.demand
            )
        }
        _ => return None,
    };

    if quantity.signed {
        flags.insert(LidFlags::NEGATIVE_ALLOWED);
    }

    Some(Decomposition {
        data_type,
        description: format!(
            "{format}{lead}{}{}{rate}{trigger}",
            scale(quantity.scalable, unit),
            quantity.demand
        ),
        flags,
    })
}

fn self_read(fields: u32, unit: MeasurementUnit) -> Option<Decomposition> {
    let payload = fields & SR_PAYLOAD_MASK;

    let mut register = match fields & SR_KIND_MASK {
        SR_ENERGY if payload & !ENERGY_FIELDS == 0 => energy(payload, unit)?,
        SR_DEMAND if payload & !SELF_READ_DEMAND_FIELDS == 0 => demand(payload, unit)?,
        _ => return None,
    };

    let suffix = match fields & SR_BUFFER_MASK {
        SR_BUFFER_1 => " (SR1)",
        SR_BUFFER_2 => " (SR2)",
        SR_BUFFER_3 => " (SR3)",
        SR_BUFFER_4 => " (SR4)",
        SR_LAST_DEMAND_RESET => {
            register.flags.insert(LidFlags::SNAPSHOT);
            " (Last DR)"
        }
        SR_2ND_LAST_DEMAND_RESET => {
            register.flags.insert(LidFlags::SNAPSHOT);
            " (2nd Last DR)"
        }
        SR_LAST_SEASON => {
            register.flags.insert(LidFlags::LAST_SEASON);
            " (Last Season)"
        }
        _ => return None,
    };

    register.flags.insert(LidFlags::SELF_READ);
    register.description.push_str(suffix);

    Some(register)
}

fn instantaneous(fields: u32, unit: MeasurementUnit) -> Option<Decomposition> {
    if fields & !(ITEM_MASK | MODIFIER_MASK) != 0 {
        return None;
    }

    let code = fields & ITEM_MASK;
    let reading = items::INSTANTANEOUS.iter().find(|i| i.code == code)?;
    let phase = items::phase_suffix((fields & MODIFIER_MASK) >> MODIFIER_SHIFT)?;

    let mut flags = LidFlags::INSTANTANEOUS;
    if reading.signed {
        flags.insert(LidFlags::NEGATIVE_ALLOWED);
    }

    Some(Decomposition {
        data_type: DataType::Single,
        description: format!(
            "Ins {}{}{phase}",
            scale(reading.scalable, unit),
            reading.word
        ),
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(value: u32) -> Decomposition {
        decompose(value, MeasurementUnit::Unit, DeviceFamily::Generic)
    }

    macro_rules! test {
        ($name:ident, $value:expr, $data_type:expr, $description:literal) => {
            #[test]
            fn $name() {
                let d = generic($value);
                assert_eq!(d.data_type, $data_type);
                assert_eq!(d.description, $description);
            }
        };
    }

    test!(
        number_of_subintervals,
        0x1800_0020,
        DataType::Byte,
        "Number of Subintervals"
    );
    test!(wh_received, 0x1400_00BF, DataType::Double, "Wh r");
    test!(
        too_max_w_d,
        0x1C03_C0BE,
        DataType::DateTimeEncoded,
        "TOO Max W d"
    );
    test!(
        raw_energy_rate_c,
        ENERGY_DATA | ENERGY_RAW_DATA | energy_rate(RATE_C) | VARH_Q1,
        DataType::UInt32,
        "Raw varh Q1 Rate C"
    );
    test!(
        cumulative_demand_is_double,
        DEMAND_DATA | CUM_DEMAND | WH_DELIVERED,
        DataType::Double,
        "Cum W d"
    );
    test!(
        peak_three,
        DEMAND_DATA | PEAK_3_DEMAND | VAH_DEL_ARITH,
        DataType::Single,
        "Peak 3 VA d arith"
    );
    test!(
        coincident_with_trigger,
        DEMAND_DATA | COINCIDENT_DEMAND | VARH_DELIVERED | coinc_trigger(WH_DELIVERED),
        DataType::Single,
        "Coinc var d @ Max W d"
    );
    test!(
        demand_reset_count,
        DEMAND_DATA | MISC_DEMAND | DEMAND_RESET_COUNT,
        DataType::UInt16,
        "Number of Demand Resets"
    );
    test!(
        self_read_last_season,
        SELF_READ_DATA | SR_LAST_SEASON | SR_DEMAND | MAX_DEMAND | demand_rate(RATE_B) | WH_DELIVERED,
        DataType::Single,
        "Max W d Rate B (Last Season)"
    );
    test!(
        self_read_energy_buffer_two,
        SELF_READ_DATA | SR_BUFFER_2 | SR_ENERGY | WH_NET,
        DataType::Double,
        "Wh net (SR2)"
    );
    test!(
        indexed_item,
        LOADPROFILE_CONFIG | LP_CHANNEL_QUANTITY | index(4),
        DataType::UInt32,
        "LP Channel 4 Quantity"
    );
    test!(
        phased_instantaneous,
        METROLOGY_DATA | INS_V | PHASE_B,
        DataType::Single,
        "Ins V (b)"
    );
    test!(
        statemon_std_diag_count,
        STATEMON_DATA | STATEMON_STD | DIAG_COUNT | index(2),
        DataType::Byte,
        "Diag 2 Count"
    );
    test!(
        base_data_std,
        MISC_DATA | BASE_DATA_STD | CAL_DATE,
        DataType::DateTimeEncoded,
        "Calibration Date"
    );

    #[test]
    fn unresolved_patterns() {
        let values = [
            0x0000_0000,
            // Unknown category.
            0xFC00_0001,
            // Unknown item.
            CONSTANT_DATA | 0x7F,
            // Index out of range.
            DEMAND_CONFIG | CONF_THRESHOLD | index(5),
            // Index required.
            DEMAND_CONFIG | CONF_THRESHOLD,
            // Modifier on a plain item.
            CONSTANT_DATA | SERIAL_NUMBER | PHASE_A,
            // Bits outside the energy fields.
            ENERGY_DATA | WH_DELIVERED | 0x0001_0000,
            // Rate H does not exist.
            ENERGY_DATA | WH_DELIVERED | energy_rate(8),
            // TOO has no meaning for present demand.
            DEMAND_DATA | PRESENT_DEMAND | TOO_DATA | WH_DELIVERED,
            // A trigger outside a coincident register.
            DEMAND_DATA | MAX_DEMAND | WH_DELIVERED | coinc_trigger(VARH_DELIVERED),
            // Wildcards.
            ENERGY_DATA | ALL_QUANTITIES,
            DEMAND_DATA | MAX_DEMAND | ALL_QUANTITIES,
            // Unused self-read buffer.
            SELF_READ_DATA | 0x0380_0000 | WH_DELIVERED,
            // Sentinel block without a family.
            STATEMON_DATA | STATEMON_SENTINEL | NON_FATAL_ERRORS,
        ];

        for value in values {
            let d = generic(value);
            assert_eq!(d, Decomposition::unresolved(), "0x{value:08X}");
        }
    }

    #[test]
    fn scale_prefix() {
        let d = decompose(
            DEMAND_DATA | MAX_DEMAND | WH_DELIVERED,
            MeasurementUnit::Kilo,
            DeviceFamily::Generic,
        );
        assert_eq!(d.description, "Max kW d");

        let pf = decompose(
            ENERGY_DATA | PF_AVG,
            MeasurementUnit::Mega,
            DeviceFamily::Generic,
        );
        assert_eq!(pf.description, "PF avg");
    }

    #[test]
    fn flags() {
        let d = generic(SELF_READ_DATA | SR_LAST_DEMAND_RESET | SR_ENERGY | ENERGY_PRIMARY_DATA | WH_NET);
        assert!(d.flags.contains(
            LidFlags::ENERGY
                | LidFlags::PRIMARY
                | LidFlags::SELF_READ
                | LidFlags::SNAPSHOT
                | LidFlags::NEGATIVE_ALLOWED
                | LidFlags::QUANTITY
        ));
        assert!(!d.flags.contains(LidFlags::NON_REGISTER_ITEM));

        let ins = generic(METROLOGY_DATA | INS_W);
        assert_eq!(
            ins.flags,
            LidFlags::INSTANTANEOUS | LidFlags::NEGATIVE_ALLOWED
        );

        let misc = generic(DEMAND_DATA | MISC_DEMAND | DEMAND_RESET_DATE);
        assert_eq!(misc.flags, LidFlags::NON_REGISTER_ITEM);
    }

    #[test]
    fn deterministic() {
        let value = DEMAND_DATA | COINCIDENT_DEMAND | VARH_Q1 | coinc_trigger(WH_NET);
        assert_eq!(generic(value), generic(value));
    }
}
