//! Named LIDs for a device family.

use std::collections::BTreeMap;

use crate::lid::{bits::*, Category, DeviceFamily, Lid, MeasurementUnit};

pub mod defined;

/// The LIDs whose layout depends on the meter family.
///
/// Every family must name every field: there are no defaults, so a family
/// that forgets one fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyLids {
    pub statemon_non_fatal_errors: u32,
    pub statemon_fatal_errors: u32,
    pub statemon_diag_errors: u32,
    pub calibration_date: u32,
    pub meter_form: u32,
    pub meter_base: u32,
    pub io_capabilities: u32,
    pub load_research_id: u32,
    pub billing_schedule_name: u32,
}

impl FamilyLids {
    pub const GENERIC: Self = Self {
        statemon_non_fatal_errors: STATEMON_DATA | STATEMON_STD | NON_FATAL_ERRORS,
        statemon_fatal_errors: STATEMON_DATA | STATEMON_STD | FATAL_ERRORS,
        statemon_diag_errors: STATEMON_DATA | STATEMON_STD | DIAG_ERRORS,
        calibration_date: MISC_DATA | BASE_DATA_STD | CAL_DATE,
        meter_form: MISC_DATA | BASE_DATA_STD | METER_FORM,
        meter_base: MISC_DATA | BASE_DATA_STD | METER_BASE,
        io_capabilities: METER_KEY_DATA | MK_IO_CAPABILITIES,
        load_research_id: LOADPROFILE_CONFIG | LP_LOAD_RESEARCH_ID,
        billing_schedule_name: CALENDAR_CONFIG | CAL_BILLING_SCHED_NAME,
    };

    pub const SENTINEL: Self = Self {
        statemon_non_fatal_errors: STATEMON_DATA | STATEMON_SENTINEL | NON_FATAL_ERRORS,
        statemon_fatal_errors: STATEMON_DATA | STATEMON_SENTINEL | FATAL_ERRORS,
        statemon_diag_errors: STATEMON_DATA | STATEMON_SENTINEL | DIAG_ERRORS,
        calibration_date: MISC_DATA | BASE_DATA_SENTINEL | CAL_DATE,
        meter_form: MISC_DATA | BASE_DATA_SENTINEL | METER_FORM,
        meter_base: MISC_DATA | BASE_DATA_SENTINEL | METER_BASE,
        io_capabilities: METER_KEY_DATA | MK_IO_CAPABILITIES,
        load_research_id: LOADPROFILE_CONFIG | LP_LOAD_RESEARCH_ID,
        billing_schedule_name: CALENDAR_CONFIG | CAL_BILLING_SCHED_NAME_SENTINEL,
    };

    pub const CENTRON_MONO: Self = Self {
        statemon_non_fatal_errors: STATEMON_DATA | STATEMON_CENTRON | NON_FATAL_ERRORS,
        statemon_fatal_errors: STATEMON_DATA | STATEMON_CENTRON | FATAL_ERRORS,
        statemon_diag_errors: STATEMON_DATA | STATEMON_CENTRON | DIAG_ERRORS,
        calibration_date: MISC_DATA | BASE_DATA_CENTRON | CAL_DATE,
        meter_form: MISC_DATA | BASE_DATA_CENTRON | METER_FORM,
        meter_base: MISC_DATA | BASE_DATA_CENTRON | METER_BASE,
        io_capabilities: METER_KEY_DATA | MK_IO_CAPABILITIES,
        load_research_id: LOADPROFILE_CONFIG | LP_LOAD_RESEARCH_ID,
        billing_schedule_name: CALENDAR_CONFIG | CAL_BILLING_SCHED_NAME,
    };

    pub const CENTRON_POLY: Self = Self {
        io_capabilities: METER_KEY_DATA | MK_IO_CAPABILITIES_POLY,
        ..Self::CENTRON_MONO
    };

    pub fn for_family(family: DeviceFamily) -> &'static Self {
        match family {
            DeviceFamily::Generic => &Self::GENERIC,
            DeviceFamily::Sentinel => &Self::SENTINEL,
            DeviceFamily::CentronMono => &Self::CENTRON_MONO,
            DeviceFamily::CentronPoly => &Self::CENTRON_POLY,
        }
    }

    fn named(&self) -> [(&'static str, u32); 9] {
        [
            ("STATEMON_NON_FATAL_ERRORS", self.statemon_non_fatal_errors),
            ("STATEMON_FATAL_ERRORS", self.statemon_fatal_errors),
            ("STATEMON_DIAG_ERRORS", self.statemon_diag_errors),
            ("BASE_CALIBRATION_DATE", self.calibration_date),
            ("BASE_METER_FORM", self.meter_form),
            ("BASE_METER_BASE", self.meter_base),
            ("METER_KEY_IO_CAPABILITIES", self.io_capabilities),
            ("LP_CONFIG_LOAD_RESEARCH_ID", self.load_research_id),
            ("CALENDAR_BILLING_SCHEDULE_NAME", self.billing_schedule_name),
        ]
    }
}

/// Every named LID, decomposed for one device family.
///
/// Names are unique: a name always resolves to the same [`Lid`] for the
/// lifetime of the catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    family: DeviceFamily,
    unit: MeasurementUnit,
    entries: BTreeMap<&'static str, Lid>,
}

impl Catalog {
    pub fn for_family(family: DeviceFamily) -> Self {
        Self::with_unit(family, MeasurementUnit::Unit)
    }

    pub fn with_unit(family: DeviceFamily, unit: MeasurementUnit) -> Self {
        let family_lids = FamilyLids::for_family(family);

        let entries = defined::DEFINED
            .iter()
            .copied()
            .chain(family_lids.named())
            .map(|(name, value)| (name, Lid::with_options(value, family, unit, None)))
            .collect();

        Self {
            family,
            unit,
            entries,
        }
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn family_lids(&self) -> &'static FamilyLids {
        FamilyLids::for_family(self.family)
    }

    pub fn get(&self, name: &str) -> Option<&Lid> {
        self.entries.get(name)
    }

    /// Find the name of the entry with the given value.
    pub fn name_of(&self, value: u32) -> Option<&'static str> {
        self.iter()
            .find(|(_, lid)| lid.value() == value)
            .map(|(name, _)| name)
    }

    pub fn by_value(&self, value: u32) -> Option<&Lid> {
        self.entries.values().find(|lid| lid.value() == value)
    }

    /// All entries, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Lid)> + '_ {
        self.entries.iter().map(|(name, lid)| (*name, lid))
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = (&'static str, &Lid)> + '_ {
        self.iter()
            .filter(move |(_, lid)| lid.category() == Some(category))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lid::DataType;

    #[test]
    fn names_are_unique() {
        let catalog = Catalog::for_family(DeviceFamily::Generic);
        assert_eq!(catalog.len(), defined::DEFINED.len() + 9);
    }

    #[test]
    fn composition_round_trip() {
        for family in DeviceFamily::all() {
            for (name, lid) in Catalog::for_family(*family).iter() {
                let value = lid.value();
                let category = Category::from_value(value)
                    .unwrap_or_else(|| panic!("{name} has no category"));

                assert_eq!(
                    category.bits() | (value & category.field_mask()),
                    value,
                    "{name}"
                );
            }
        }
    }

    #[test]
    fn every_entry_resolves_except_wildcards() {
        for family in DeviceFamily::all() {
            for (name, lid) in Catalog::for_family(*family).iter() {
                let wildcard = matches!(name, "ALL_SEC_ENERGIES_TOTAL" | "ALL_SEC_DEMANDS_TOTAL");
                assert_eq!(lid.is_resolved(), !wildcard, "{family}: {name} = {lid}");
            }
        }
    }

    #[test]
    fn scenarios() {
        let catalog = Catalog::for_family(DeviceFamily::Generic);

        let nbr_sub = catalog.get("DEMAND_CONFIG_NBR_SUB").unwrap();
        assert_eq!(nbr_sub.value(), 0x1800_0020);
        assert_eq!(nbr_sub.data_type(), DataType::Byte);
        assert!(nbr_sub.is_non_register_item());

        let wh_del = catalog.get("ENERGY_WH_DEL").unwrap();
        assert_eq!(wh_del.data_type(), DataType::Double);
        assert_eq!(wh_del.description(), "Wh d");
        assert!(wh_del.is_energy());
        assert!(wh_del.is_quantity());

        assert_eq!(catalog.name_of(0x1C03_C0BE), Some("DEMAND_TOO_MAX_W_DEL"));
        assert_eq!(catalog.name_of(0x1400_00BF), Some("ENERGY_WH_REC"));
    }

    #[test]
    fn family_fields_differ() {
        let generic = Catalog::for_family(DeviceFamily::Generic);
        let sentinel = Catalog::for_family(DeviceFamily::Sentinel);
        let poly = Catalog::for_family(DeviceFamily::CentronPoly);

        let name = "STATEMON_NON_FATAL_ERRORS";
        assert_ne!(
            generic.get(name).unwrap().value(),
            sentinel.get(name).unwrap().value()
        );
        assert_eq!(
            sentinel.get(name).unwrap().data_type(),
            DataType::UInt16
        );

        let io = poly.get("METER_KEY_IO_CAPABILITIES").unwrap();
        assert_eq!(io.data_type(), DataType::UInt16);

        assert_eq!(
            poly.get("LP_CONFIG_LOAD_RESEARCH_ID").unwrap().data_type(),
            DataType::FixedString(8)
        );
        assert_eq!(
            FamilyLids::CENTRON_POLY.calibration_date,
            FamilyLids::CENTRON_MONO.calibration_date
        );
    }

    #[test]
    fn by_category() {
        let catalog = Catalog::for_family(DeviceFamily::Generic);

        let coefficients: Vec<_> = catalog.in_category(Category::Coefficient).collect();
        assert_eq!(coefficients.len(), 7);
        assert!(coefficients
            .iter()
            .all(|(name, _)| name.starts_with("COEFF_")));
    }

    #[test]
    fn unit_scales_descriptions() {
        let catalog = Catalog::with_unit(DeviceFamily::Generic, MeasurementUnit::Kilo);
        assert_eq!(
            catalog.get("DEMAND_MAX_W_DEL").unwrap().description(),
            "Max kW d"
        );
    }
}
