use super::bits::*;

macro_rules! category {
    {
        pub enum Category {
            $($name:ident = [$value:path, $label:literal, $fields:expr],)*
        }
    } => {
        /// The major category of an identifier, selected by
        /// [`COMPONENT_MASK`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $($name,)*
        }

        impl Category {
            /// Returns `None` for component values that name no category.
            pub fn from_value(value: u32) -> Option<Self> {
                match value & COMPONENT_MASK {
                    $($value => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// The component bits for this category.
            pub fn bits(&self) -> u32 {
                match self {
                    $(Self::$name => $value,)*
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$name => $label,)*
                }
            }

            /// Union of every sub-field mask this category defines.
            ///
            /// A well-formed identifier of this category has no bits set
            /// outside `COMPONENT_MASK | field_mask()`.
            pub fn field_mask(&self) -> u32 {
                match self {
                    $(Self::$name => $fields,)*
                }
            }

            pub fn all() -> &'static [Category] {
                &[$(Self::$name,)*]
            }
        }

        impl TryFrom<&str> for Category {
            type Error = ();

            fn try_from(input: &str) -> Result<Self, Self::Error> {
                let to_lower = input.to_ascii_lowercase();

                $(
                    if stringify!($name).to_ascii_lowercase() == to_lower {
                        return Ok(Category::$name);
                    }
                )*

                Err(())
            }
        }
    };
}

const SIMPLE_FIELDS: u32 = ITEM_MASK | MODIFIER_MASK;
const ENERGY_FIELDS: u32 = QUANTITY_MASK | ENERGY_FORMAT_MASK | ENERGY_TOU_MASK;
const DEMAND_FIELDS: u32 = QUANTITY_MASK
    | DEMAND_TOU_MASK
    | DEMAND_SEGMENT_MASK
    | DEMAND_FORMAT_MASK
    | COINC_TRIGGER_MASK;

category! {
    pub enum Category {
        Coefficient = [COEFF_CONFIG, "Coefficient", SIMPLE_FIELDS],
        CalendarConfig = [CALENDAR_CONFIG, "Calendar Configuration", SIMPLE_FIELDS],
        Calendar = [CALENDAR_DATA, "Calendar", SIMPLE_FIELDS],
        EnergyConfig = [ENERGY_CONFIG, "Energy Configuration", SIMPLE_FIELDS],
        Energy = [ENERGY_DATA, "Energy", ENERGY_FIELDS],
        DemandConfig = [DEMAND_CONFIG, "Demand Configuration", SIMPLE_FIELDS],
        Demand = [DEMAND_DATA, "Demand", DEMAND_FIELDS],
        LoadProfileConfig = [LOADPROFILE_CONFIG, "Load Profile Configuration", SIMPLE_FIELDS],
        LoadProfile = [LOADPROFILE_DATA, "Load Profile", SIMPLE_FIELDS],
        Metrology = [METROLOGY_DATA, "Metrology", SIMPLE_FIELDS],
        Misc = [MISC_DATA, "Miscellaneous", SIMPLE_FIELDS | BLOCK_MASK],
        ModeControl = [MODE_CONTROL, "Mode Control", SIMPLE_FIELDS],
        OptionBoard = [OPTION_BOARD_DATA, "Option Board", SIMPLE_FIELDS],
        SelfRead = [SELF_READ_DATA, "Self Read", SR_BUFFER_MASK | SR_KIND_MASK | SR_PAYLOAD_MASK],
        SiteScan = [SITESCAN_DATA, "SiteScan", SIMPLE_FIELDS],
        StateMonitor = [STATEMON_DATA, "State Monitor", SIMPLE_FIELDS | BLOCK_MASK],
        MeterKey = [METER_KEY_DATA, "Meter Key", SIMPLE_FIELDS],
        VoltageMonitor = [VOLTMON_DATA, "Voltage Monitor", SIMPLE_FIELDS],
        PowerQuality = [PQ_DATA, "Power Quality", SIMPLE_FIELDS],
        Constant = [CONSTANT_DATA, "Constant", SIMPLE_FIELDS],
    }
}
