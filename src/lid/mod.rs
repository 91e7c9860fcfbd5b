//! Logical identifiers (LIDs).
//!
//! A LID is a 32-bit value that identifies one addressable quantity or
//! configuration item on a meter. Its meaning is encoded entirely in named
//! bit fields (see [`bits`]): the category in the high six bits, and
//! category-specific sub-fields below that. Decomposing the value yields the
//! wire [`DataType`], a human readable description and a set of
//! classification [`LidFlags`].

pub mod bits;

mod category;
pub use category::Category;

mod decompose;

mod family;
pub use family::DeviceFamily;

mod items;

mod quantity;
pub use quantity::Quantity;

use decompose::Decomposition;

use crate::{fmt::LogItem, log_vec, Loggable};

/// The wire type of the value a meter returns for a LID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Byte,
    Int16,
    UInt16,
    UInt32,
    Single,
    Double,
    /// Seconds since 2000-01-01 00:00:00, as a 4-byte unsigned integer.
    DateTimeEncoded,
    /// A fixed-length ASCII string of the given number of bytes.
    FixedString(u32),
    /// The bit pattern is structurally valid but names no known item.
    Unresolved,
}

impl DataType {
    /// The number of bytes this type occupies in a response.
    ///
    /// [`DataType::Unresolved`] occupies no bytes: the retriever never
    /// sends an unresolved identifier to the meter.
    pub fn size(&self) -> usize {
        match self {
            DataType::Byte => 1,
            DataType::Int16 | DataType::UInt16 => 2,
            DataType::UInt32 | DataType::Single | DataType::DateTimeEncoded => 4,
            DataType::Double => 8,
            DataType::FixedString(len) => *len as usize,
            DataType::Unresolved => 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, DataType::Unresolved)
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::Byte => write!(f, "Byte"),
            DataType::Int16 => write!(f, "Int16"),
            DataType::UInt16 => write!(f, "UInt16"),
            DataType::UInt32 => write!(f, "UInt32"),
            DataType::Single => write!(f, "Single"),
            DataType::Double => write!(f, "Double"),
            DataType::DateTimeEncoded => write!(f, "Date/Time"),
            DataType::FixedString(len) => write!(f, "String[{len}]"),
            DataType::Unresolved => write!(f, "Unresolved"),
        }
    }
}

/// Scale applied to the wording of a LID's description.
///
/// This only changes the text (`Wh d` vs `kWh d`); it has no effect on how
/// values are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasurementUnit {
    #[default]
    Unit,
    Kilo,
    Mega,
}

impl MeasurementUnit {
    pub fn prefix(&self) -> &'static str {
        match self {
            MeasurementUnit::Unit => "",
            MeasurementUnit::Kilo => "k",
            MeasurementUnit::Mega => "M",
        }
    }
}

bitflags::bitflags! {
    /// Classification of a LID, derived from its value.
    #[derive(Default)]
    pub struct LidFlags: u32 {
        const ENERGY = 1 << 0;
        const MAX_DEMAND = 1 << 1;
        const MIN_DEMAND = 1 << 2;
        const PEAK_DEMAND = 1 << 3;
        const CUMULATIVE = 1 << 4;
        const CONTINUOUS_CUMULATIVE = 1 << 5;
        const NON_REGISTER_ITEM = 1 << 6;
        const TIME_OF_OCCURRENCE = 1 << 7;
        const COINCIDENT = 1 << 8;
        const PRESENT = 1 << 9;
        const PREVIOUS = 1 << 10;
        const PROJECTED = 1 << 11;
        const TOU_RATE = 1 << 12;
        const PRIMARY = 1 << 13;
        const SELF_READ = 1 << 14;
        const SNAPSHOT = 1 << 15;
        const LAST_SEASON = 1 << 16;
        const NEGATIVE_ALLOWED = 1 << 17;
        const QUANTITY = 1 << 18;
        const INSTANTANEOUS = 1 << 19;
    }
}

/// A logical identifier together with everything derived from its value.
///
/// Two `Lid`s are equal if and only if their values are equal. The
/// description, flags, unit and family do not take part in comparison or
/// hashing.
#[derive(Debug, Clone)]
pub struct Lid {
    value: u32,
    family: DeviceFamily,
    unit: MeasurementUnit,
    explicit_type: Option<DataType>,
    data_type: DataType,
    description: String,
    flags: LidFlags,
}

impl Lid {
    /// Create a LID for the [`DeviceFamily::Generic`] layout.
    pub fn new(value: u32) -> Self {
        Self::with_options(value, DeviceFamily::Generic, MeasurementUnit::Unit, None)
    }

    pub fn with_unit(value: u32, unit: MeasurementUnit) -> Self {
        Self::with_options(value, DeviceFamily::Generic, unit, None)
    }

    /// Create a LID whose data type is forced to `data_type`.
    ///
    /// The value is still decomposed to obtain a description and flags, but
    /// the resulting type is always `data_type` (unless it is
    /// [`DataType::Unresolved`], which is treated as "no override").
    pub fn with_type(value: u32, data_type: DataType) -> Self {
        Self::with_options(
            value,
            DeviceFamily::Generic,
            MeasurementUnit::Unit,
            Some(data_type),
        )
    }

    /// Create a fixed-length string LID of `length` bytes.
    pub fn with_string_length(value: u32, length: u32) -> Self {
        Self::with_type(value, DataType::FixedString(length))
    }

    pub fn for_family(value: u32, family: DeviceFamily) -> Self {
        Self::with_options(value, family, MeasurementUnit::Unit, None)
    }

    pub fn with_options(
        value: u32,
        family: DeviceFamily,
        unit: MeasurementUnit,
        data_type: Option<DataType>,
    ) -> Self {
        let explicit_type = data_type.filter(DataType::is_resolved);

        let mut me = Self {
            value,
            family,
            unit,
            explicit_type,
            data_type: DataType::Unresolved,
            description: String::new(),
            flags: LidFlags::empty(),
        };

        me.recompute();
        me
    }

    /// Re-derive type, description and flags from the current value.
    ///
    /// Every mutation of `value` goes through here.
    fn recompute(&mut self) {
        let Decomposition {
            data_type,
            description,
            flags,
        } = decompose::decompose(self.value, self.unit, self.family);

        self.data_type = self.explicit_type.unwrap_or(data_type);
        self.description = description;
        self.flags = flags;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Replace the value of this LID, re-deriving everything that
    /// depends on it. An explicit data type given at construction is kept.
    pub fn set_value(&mut self, value: u32) {
        self.value = value;
        self.recompute();
    }

    /// Rewrite the format sub-field of an energy or demand LID to
    /// "secondary", in place.
    ///
    /// Energy and demand keep their format field at different bit
    /// positions. LIDs that are neither are left unchanged.
    pub fn make_secondary(&mut self) {
        let mask = if self.is_energy() {
            bits::ENERGY_FORMAT_MASK
        } else if self.is_demand_register() {
            bits::DEMAND_FORMAT_MASK
        } else {
            log::debug!(
                "LID 0x{:08X} has no format field, not converting to secondary",
                self.value
            );
            return;
        };

        self.set_value((self.value & !mask) | bits::SECONDARY_DATA);
    }

    /// A copy of this LID converted with [`Lid::make_secondary`].
    pub fn to_secondary(&self) -> Self {
        let mut secondary = self.clone();
        secondary.make_secondary();
        secondary
    }

    fn is_demand_register(&self) -> bool {
        match self.category() {
            Some(Category::Demand) => true,
            Some(Category::SelfRead) => self.value & bits::SR_KIND_MASK == bits::SR_DEMAND,
            _ => false,
        }
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_value(self.value)
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Whether the data type was given explicitly rather than derived.
    pub fn has_explicit_type(&self) -> bool {
        self.explicit_type.is_some()
    }

    /// Byte length of the value on the wire.
    pub fn length(&self) -> usize {
        self.data_type.size()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn flags(&self) -> LidFlags {
        self.flags
    }

    pub fn is_resolved(&self) -> bool {
        self.data_type.is_resolved()
    }
}

macro_rules! flag_accessors {
    ($($name:ident => $flag:ident,)*) => {
        impl Lid {
            $(
                pub fn $name(&self) -> bool {
                    self.flags.contains(LidFlags::$flag)
                }
            )*
        }
    };
}

flag_accessors! {
    is_energy => ENERGY,
    is_max_demand => MAX_DEMAND,
    is_min_demand => MIN_DEMAND,
    is_peak_demand => PEAK_DEMAND,
    is_cumulative => CUMULATIVE,
    is_continuous_cumulative => CONTINUOUS_CUMULATIVE,
    is_non_register_item => NON_REGISTER_ITEM,
    is_time_of_occurrence => TIME_OF_OCCURRENCE,
    is_coincident => COINCIDENT,
    is_present => PRESENT,
    is_previous => PREVIOUS,
    is_projected => PROJECTED,
    is_tou_rate => TOU_RATE,
    is_primary => PRIMARY,
    is_self_read => SELF_READ,
    is_snapshot => SNAPSHOT,
    is_last_season => LAST_SEASON,
    is_negative_allowed => NEGATIVE_ALLOWED,
    is_quantity => QUANTITY,
    is_instantaneous => INSTANTANEOUS,
}

impl PartialEq for Lid {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Lid {}

impl core::hash::Hash for Lid {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<u32> for Lid {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<&Lid> for u32 {
    fn from(value: &Lid) -> Self {
        value.value
    }
}

impl core::fmt::Display for Lid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.description.is_empty() {
            write!(f, "0x{:08X}", self.value)
        } else {
            write!(f, "{} (0x{:08X})", self.description, self.value)
        }
    }
}

impl Loggable for Lid {
    fn as_log(&self) -> Vec<LogItem> {
        let category = self.category().map_or("Unknown", |c| c.label());
        let description = if self.description.is_empty() {
            "(none)"
        } else {
            self.description.as_str()
        };

        let mut log = log_vec![
            (0, "LID"),
            (1, "Value", format!("0x{:08X}", self.value)),
            (1, "Category", category),
            (1, "Family", self.family),
            (1, "Description", description),
            (1, "Data type", self.data_type),
            (1, "Length", self.length()),
        ];

        if self.explicit_type.is_some() {
            log.push((1, "Type source", "explicit").into());
        }

        if !self.flags.is_empty() {
            log.push((1, "Flags", format!("{:?}", self.flags)).into());
        }

        log
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::bits::*;
    use super::*;

    fn hash_of(lid: &Lid) -> u64 {
        let mut hasher = DefaultHasher::new();
        lid.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_and_hash_follow_value() {
        let a = Lid::new(0x1C03C0BE);
        let b = Lid::with_unit(0x1C03C0BE, MeasurementUnit::Kilo);
        let c = Lid::new(0x140000BF);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn number_of_subintervals() {
        let lid = Lid::new(DEMAND_CONFIG | CONF_NBR_SUB);

        assert_eq!(lid.value(), 0x18000020);
        assert_eq!(lid.data_type(), DataType::Byte);
        assert_eq!(lid.description(), "Number of Subintervals");
        assert!(lid.is_non_register_item());
        assert!(!lid.is_quantity());
    }

    #[test]
    fn secondary_wh_delivered() {
        let lid = Lid::new(ENERGY_DATA | SECONDARY_DATA | WH_DELIVERED);

        assert_eq!(lid.data_type(), DataType::Double);
        assert_eq!(lid.description(), "Wh d");
        assert!(lid.is_energy());
        assert!(lid.is_quantity());
        assert!(!lid.is_non_register_item());
    }

    #[test]
    fn explicit_type_wins() {
        let lid = Lid::with_type(DEMAND_CONFIG | CONF_NBR_SUB, DataType::Single);
        assert_eq!(lid.data_type(), DataType::Single);
        assert_eq!(lid.description(), "Number of Subintervals");

        let unresolved = Lid::with_type(0x0000_0001, DataType::Single);
        assert_eq!(unresolved.data_type(), DataType::Single);
        assert_eq!(unresolved.description(), "");
    }

    #[test]
    fn unresolved_override_is_ignored() {
        let lid = Lid::with_type(ENERGY_DATA | WH_DELIVERED, DataType::Unresolved);
        assert!(!lid.has_explicit_type());
        assert_eq!(lid.data_type(), DataType::Double);
    }

    #[test]
    fn explicit_type_survives_mutation() {
        let mut lid = Lid::with_string_length(CONSTANT_DATA | UNIT_ID, 4);
        lid.set_value(CONSTANT_DATA | SERIAL_NUMBER);

        assert_eq!(lid.data_type(), DataType::FixedString(4));
        assert_eq!(lid.length(), 4);
        assert_eq!(lid.description(), "Serial Number");
    }

    #[test]
    fn set_value_recomputes() {
        let mut lid = Lid::new(ENERGY_DATA | WH_DELIVERED);
        lid.set_value(DEMAND_DATA | MAX_DEMAND | WH_DELIVERED);

        assert!(!lid.is_energy());
        assert!(lid.is_max_demand());
        assert_eq!(lid.description(), "Max W d");
        assert_eq!(lid.data_type(), DataType::Single);
    }

    #[test]
    fn make_secondary_energy() {
        let mut lid = Lid::new(ENERGY_DATA | ENERGY_PRIMARY_DATA | WH_RECEIVED);
        assert!(lid.is_primary());

        lid.make_secondary();
        assert_eq!(lid.value(), ENERGY_DATA | WH_RECEIVED);
        assert!(!lid.is_primary());
        assert_eq!(lid.description(), "Wh r");
    }

    #[test]
    fn make_secondary_demand() {
        let mut lid = Lid::new(DEMAND_DATA | MAX_DEMAND | TOO_DATA | WH_DELIVERED);
        assert_eq!(lid.value(), 0x1C03C0BE);
        assert!(lid.is_time_of_occurrence());

        lid.make_secondary();
        assert_eq!(lid.value(), DEMAND_DATA | MAX_DEMAND | WH_DELIVERED);
        assert!(!lid.is_time_of_occurrence());
        assert_eq!(lid.data_type(), DataType::Single);
    }

    #[test]
    fn make_secondary_is_idempotent() {
        let once = Lid::new(DEMAND_DATA | PRESENT_DEMAND | DEMAND_RAW_DATA | VAH_LAG).to_secondary();
        let twice = once.to_secondary();

        assert_eq!(once.value(), twice.value());
        assert_eq!(once.description(), twice.description());
    }

    #[test]
    fn make_secondary_ignores_other_categories() {
        let mut lid = Lid::new(DEMAND_CONFIG | CONF_THRESHOLD | index(3));
        let before = lid.value();

        lid.make_secondary();
        assert_eq!(lid.value(), before);
    }

    #[test]
    fn data_type_sizes() {
        assert_eq!(DataType::Byte.size(), 1);
        assert_eq!(DataType::Int16.size(), 2);
        assert_eq!(DataType::UInt16.size(), 2);
        assert_eq!(DataType::UInt32.size(), 4);
        assert_eq!(DataType::DateTimeEncoded.size(), 4);
        assert_eq!(DataType::Single.size(), 4);
        assert_eq!(DataType::Double.size(), 8);
        assert_eq!(DataType::FixedString(9).size(), 9);
    }

    #[test]
    fn display() {
        assert_eq!(
            Lid::new(ENERGY_DATA | WH_DELIVERED).to_string(),
            "Wh d (0x140000BE)"
        );
        assert_eq!(Lid::new(0x0000_0001).to_string(), "0x00000001");
    }
}
