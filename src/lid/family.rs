use super::bits::*;
use super::decompose::{simple, Decomposition};
use super::items::{indexed, item, Item};
use super::Category;
use super::DataType::*;

/// The meter hardware family whose bit layout is used to interpret a LID.
///
/// Most layouts are shared. A family only changes the meaning of a few
/// state monitor, base data and meter key items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceFamily {
    #[default]
    Generic,
    Sentinel,
    CentronMono,
    /// A polyphase Centron. Everything a [`DeviceFamily::CentronMono`]
    /// knows, plus the polyphase I/O capabilities.
    CentronPoly,
}

impl DeviceFamily {
    pub fn all() -> &'static [DeviceFamily] {
        &[
            DeviceFamily::Generic,
            DeviceFamily::Sentinel,
            DeviceFamily::CentronMono,
            DeviceFamily::CentronPoly,
        ]
    }

    /// The family this one specializes, if any.
    pub fn parent(&self) -> Option<DeviceFamily> {
        match self {
            DeviceFamily::CentronPoly => Some(DeviceFamily::CentronMono),
            DeviceFamily::Generic => None,
            _ => Some(DeviceFamily::Generic),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeviceFamily::Generic => "Generic",
            DeviceFamily::Sentinel => "Sentinel",
            DeviceFamily::CentronMono => "CENTRON (mono)",
            DeviceFamily::CentronPoly => "CENTRON (poly)",
        }
    }

    /// Apply this family's overrides on top of `base`.
    ///
    /// A family pass never clears what the base pass resolved unless it
    /// resolves the same value differently.
    pub(super) fn refine(self, value: u32, base: Decomposition) -> Decomposition {
        let base = match self.parent() {
            Some(parent) if parent != DeviceFamily::Generic => parent.refine(value, base),
            _ => base,
        };

        let category = match Category::from_value(value) {
            Some(category) => category,
            None => return base,
        };

        let fields = value & !COMPONENT_MASK;

        let refined = match (self, category) {
            (DeviceFamily::Sentinel, Category::StateMonitor) => {
                block(fields, STATEMON_SENTINEL, SENTINEL_STATEMON_ITEMS)
            }
            (DeviceFamily::Sentinel, Category::Misc) => {
                block(fields, BASE_DATA_SENTINEL, SENTINEL_BASE_DATA_ITEMS)
            }
            (DeviceFamily::Sentinel, Category::CalendarConfig) => {
                simple(SENTINEL_CALENDAR_CONFIG_ITEMS, fields)
            }
            (DeviceFamily::CentronMono, Category::StateMonitor) => {
                block(fields, STATEMON_CENTRON, CENTRON_STATEMON_ITEMS)
            }
            (DeviceFamily::CentronMono, Category::Misc) => {
                block(fields, BASE_DATA_CENTRON, CENTRON_BASE_DATA_ITEMS)
            }
            (DeviceFamily::CentronMono, Category::LoadProfileConfig) => {
                simple(CENTRON_LOAD_PROFILE_CONFIG_ITEMS, fields)
            }
            (DeviceFamily::CentronPoly, Category::MeterKey) => {
                simple(CENTRON_POLY_METER_KEY_ITEMS, fields)
            }
            _ => None,
        };

        match refined {
            Some(refined) => {
                log::trace!(
                    "{} layout overrides LID 0x{value:08X}: {}",
                    self.name(),
                    refined.description
                );
                refined
            }
            None => base,
        }
    }
}

impl core::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn block(fields: u32, wanted: u32, items: &'static [Item]) -> Option<Decomposition> {
    if fields & BLOCK_MASK == wanted {
        simple(items, fields & !BLOCK_MASK)
    } else {
        None
    }
}

const SENTINEL_STATEMON_ITEMS: &[Item] = &[
    item(NON_FATAL_ERRORS, UInt16, "Non-Fatal Errors"),
    item(FATAL_ERRORS, UInt16, "Fatal Errors"),
    item(DIAG_ERRORS, Byte, "Diagnostic Errors"),
    item(ERROR_COUNTER, UInt16, "Error Counter"),
    indexed(DIAG_COUNT, Byte, "Diag # Count", 6),
];

const SENTINEL_BASE_DATA_ITEMS: &[Item] = &[
    item(CAL_DATE, DateTimeEncoded, "Calibration Date"),
    item(METER_FORM, FixedString(5), "Meter Form"),
    item(METER_BASE, Byte, "Meter Base"),
];

const SENTINEL_CALENDAR_CONFIG_ITEMS: &[Item] = &[item(
    CAL_BILLING_SCHED_NAME_SENTINEL,
    FixedString(30),
    "Billing Schedule Name"
)];

const CENTRON_STATEMON_ITEMS: &[Item] = &[
    item(NON_FATAL_ERRORS, Byte, "Non-Fatal Errors"),
    item(FATAL_ERRORS, Byte, "Fatal Errors"),
    item(DIAG_ERRORS, Byte, "Diagnostic Errors"),
    indexed(DIAG_COUNT, Byte, "Diag # Count", 5),
];

const CENTRON_BASE_DATA_ITEMS: &[Item] = &[
    item(CAL_DATE, DateTimeEncoded, "Calibration Date"),
    item(METER_FORM, FixedString(4), "Meter Form"),
    item(METER_BASE, UInt16, "Meter Base"),
];

const CENTRON_LOAD_PROFILE_CONFIG_ITEMS: &[Item] = &[item(
    LP_LOAD_RESEARCH_ID,
    FixedString(8),
    "Load Research ID"
)];

const CENTRON_POLY_METER_KEY_ITEMS: &[Item] = &[item(
    MK_IO_CAPABILITIES_POLY,
    UInt16,
    "I/O Capabilities"
)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lid::{DataType, Lid, MeasurementUnit};

    fn with(value: u32, family: DeviceFamily) -> Lid {
        Lid::with_options(value, family, MeasurementUnit::Unit, None)
    }

    #[test]
    fn sentinel_statemon() {
        let value = STATEMON_DATA | STATEMON_SENTINEL | NON_FATAL_ERRORS;

        assert!(!with(value, DeviceFamily::Generic).is_resolved());

        let lid = with(value, DeviceFamily::Sentinel);
        assert_eq!(lid.data_type(), DataType::UInt16);
        assert_eq!(lid.description(), "Non-Fatal Errors");
        assert!(lid.is_non_register_item());

        // Another family does not know the Sentinel block.
        assert!(!with(value, DeviceFamily::CentronMono).is_resolved());
    }

    #[test]
    fn sentinel_tables() {
        let diag = STATEMON_DATA | STATEMON_SENTINEL | DIAG_COUNT;
        assert_eq!(
            with(diag | index(6), DeviceFamily::Sentinel).description(),
            "Diag 6 Count"
        );
        assert!(!with(diag | index(7), DeviceFamily::Sentinel).is_resolved());

        let name = with(
            CALENDAR_CONFIG | CAL_BILLING_SCHED_NAME_SENTINEL,
            DeviceFamily::Sentinel,
        );
        assert_eq!(name.data_type(), DataType::FixedString(30));
        assert_eq!(name.description(), "Billing Schedule Name");
    }

    #[test]
    fn centron_load_research_id() {
        let value = LOADPROFILE_CONFIG | LP_LOAD_RESEARCH_ID;

        assert_eq!(
            with(value, DeviceFamily::Generic).data_type(),
            DataType::FixedString(10)
        );
        assert_eq!(
            with(value, DeviceFamily::CentronMono).data_type(),
            DataType::FixedString(8)
        );
        assert_eq!(
            with(value, DeviceFamily::CentronPoly).data_type(),
            DataType::FixedString(8)
        );
    }

    #[test]
    fn poly_inherits_mono() {
        let statemon = STATEMON_DATA | STATEMON_CENTRON | DIAG_COUNT | index(5);
        let lid = with(statemon, DeviceFamily::CentronPoly);
        assert_eq!(lid.description(), "Diag 5 Count");

        let io = METER_KEY_DATA | MK_IO_CAPABILITIES_POLY;
        assert!(!with(io, DeviceFamily::CentronMono).is_resolved());
        assert_eq!(
            with(io, DeviceFamily::CentronPoly).data_type(),
            DataType::UInt16
        );
    }

    #[test]
    fn base_pass_survives_family() {
        let value = ENERGY_DATA | WH_DELIVERED;
        for family in DeviceFamily::all() {
            assert_eq!(with(value, *family).description(), "Wh d");
        }
    }

    #[test]
    fn explicit_type_wins_over_family() {
        let lid = Lid::with_options(
            LOADPROFILE_CONFIG | LP_LOAD_RESEARCH_ID,
            DeviceFamily::CentronMono,
            MeasurementUnit::Unit,
            Some(DataType::FixedString(12)),
        );
        assert_eq!(lid.data_type(), DataType::FixedString(12));
    }
}
