//! Event codes found in meter history and event logs, and their
//! descriptions.

use std::collections::{BTreeMap, HashMap};

use crate::lid::DeviceFamily;

/// Text lookup for string keys.
///
/// Descriptions of events are resolved through a catalog so that they can
/// be localized. [`EnglishStrings`] knows every key used by this crate.
pub trait StringCatalog {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl StringCatalog for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T> StringCatalog for &T
where
    T: StringCatalog + ?Sized,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

macro_rules! standard_events {
    {
        $($name:ident = [$code:literal, $key:literal, $text:literal],)*
    } => {
        /// An event defined by ANSI C12.19.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StandardEvent {
            $($name,)*
        }

        impl StandardEvent {
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)*
                    _ => None,
                }
            }

            pub fn code(&self) -> u16 {
                match self {
                    $(Self::$name => $code,)*
                }
            }

            /// The [`StringCatalog`] key describing this event.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Self::$name => $key,)*
                }
            }

            fn english(&self) -> &'static str {
                match self {
                    $(Self::$name => $text,)*
                }
            }

            pub fn all() -> &'static [StandardEvent] {
                &[$(Self::$name,)*]
            }
        }
    };
}

standard_events! {
    NoEvent = [0, "EVT_NO_EVENT", "No Event"],
    PrimaryPowerDown = [1, "EVT_PRIMARY_POWER_DOWN", "Primary Power Down"],
    PrimaryPowerUp = [2, "EVT_PRIMARY_POWER_UP", "Primary Power Up"],
    TimeChangedOld = [3, "EVT_TIME_CHANGED_OLD", "Time Changed (old time)"],
    TimeChangedNew = [4, "EVT_TIME_CHANGED_NEW", "Time Changed (new time)"],
    TimeChangedOldFlagged = [5, "EVT_TIME_CHANGED_OLD_FLAGGED", "Time Changed (old time, flagged)"],
    TimeChangedNewFlagged = [6, "EVT_TIME_CHANGED_NEW_FLAGGED", "Time Changed (new time, flagged)"],
    AccessedForRead = [7, "EVT_ACCESSED_FOR_READ", "End Device Accessed for Read"],
    AccessedForWrite = [8, "EVT_ACCESSED_FOR_WRITE", "End Device Accessed for Write"],
    ProcedureInvoked = [9, "EVT_PROCEDURE_INVOKED", "Procedure Invoked"],
    TableWritten = [10, "EVT_TABLE_WRITTEN", "Table Written To"],
    Programmed = [11, "EVT_PROGRAMMED", "End Device Programmed"],
    CommunicationEndedNormally = [12, "EVT_COMM_ENDED_NORMALLY", "Communication Terminated Normally"],
    CommunicationEndedAbnormally = [13, "EVT_COMM_ENDED_ABNORMALLY", "Communication Terminated Abnormally"],
    ResetListPointers = [14, "EVT_RESET_LIST_POINTERS", "Reset List Pointers"],
    UpdateListPointers = [15, "EVT_UPDATE_LIST_POINTERS", "Update List Pointers"],
    HistoryLogCleared = [16, "EVT_HISTORY_LOG_CLEARED", "History Log Cleared"],
    HistoryLogPointersUpdated = [17, "EVT_HISTORY_LOG_POINTERS_UPDATED", "History Log Pointers Updated"],
    EventLogCleared = [18, "EVT_EVENT_LOG_CLEARED", "Event Log Cleared"],
    EventLogPointersUpdated = [19, "EVT_EVENT_LOG_POINTERS_UPDATED", "Event Log Pointers Updated"],
    DemandReset = [20, "EVT_DEMAND_RESET", "Demand Reset Occurred"],
    SelfRead = [21, "EVT_SELF_READ", "Self Read Occurred"],
    DstOn = [22, "EVT_DST_ON", "Daylight Saving Time On"],
    DstOff = [23, "EVT_DST_OFF", "Daylight Saving Time Off"],
    SeasonChange = [24, "EVT_SEASON_CHANGE", "Season Change"],
    RateChange = [25, "EVT_RATE_CHANGE", "Rate Change"],
    SpecialSchedule = [26, "EVT_SPECIAL_SCHEDULE", "Special Schedule Activated"],
    TierSwitchChange = [27, "EVT_TIER_SWITCH_CHANGE", "Tier Switch Change"],
    PendingTableActivated = [28, "EVT_PENDING_TABLE_ACTIVATED", "Pending Table Activated"],
    PendingTableCleared = [29, "EVT_PENDING_TABLE_CLEARED", "Pending Table Cleared"],
    MeteringModeStarted = [30, "EVT_METERING_MODE_STARTED", "Metering Mode Started"],
    MeteringModeStopped = [31, "EVT_METERING_MODE_STOPPED", "Metering Mode Stopped"],
    TestModeStarted = [32, "EVT_TEST_MODE_STARTED", "Test Mode Started"],
    TestModeStopped = [33, "EVT_TEST_MODE_STOPPED", "Test Mode Stopped"],
    MeterShopModeStarted = [34, "EVT_METER_SHOP_MODE_STARTED", "Meter Shop Mode Started"],
    MeterShopModeStopped = [35, "EVT_METER_SHOP_MODE_STOPPED", "Meter Shop Mode Stopped"],
    Reprogrammed = [36, "EVT_REPROGRAMMED", "End Device Reprogrammed"],
    ConfigurationError = [37, "EVT_CONFIGURATION_ERROR", "Configuration Error Detected"],
    SelfCheckError = [38, "EVT_SELF_CHECK_ERROR", "Self Check Error Detected"],
    RamFailure = [39, "EVT_RAM_FAILURE", "RAM Failure Detected"],
    RomFailure = [40, "EVT_ROM_FAILURE", "ROM Failure Detected"],
    NonvolatileMemoryFailure = [41, "EVT_NVM_FAILURE", "Nonvolatile Memory Failure Detected"],
    ClockError = [42, "EVT_CLOCK_ERROR", "Clock Error Detected"],
    MeasurementError = [43, "EVT_MEASUREMENT_ERROR", "Measurement Error Detected"],
    LowBattery = [44, "EVT_LOW_BATTERY", "Low Battery Detected"],
    LowLossPotential = [45, "EVT_LOW_LOSS_POTENTIAL", "Low Loss Potential Detected"],
    DemandOverload = [46, "EVT_DEMAND_OVERLOAD", "Demand Overload Detected"],
}

/// A manufacturer event, numbered relative to
/// [`EventDictionary::MANUFACTURER_OFFSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerEvent {
    pub offset: u16,
    pub key: &'static str,
    english: &'static str,
}

const fn mfg(offset: u16, key: &'static str, english: &'static str) -> ManufacturerEvent {
    ManufacturerEvent {
        offset,
        key,
        english,
    }
}

const SENTINEL_EVENTS: &[ManufacturerEvent] = &[
    mfg(0, "MFG_SITESCAN_ERROR", "SiteScan Error"),
    mfg(1, "MFG_SITESCAN_ERROR_CLEARED", "SiteScan Error Cleared"),
    mfg(2, "MFG_LOSS_OF_PHASE", "Loss of Phase"),
    mfg(3, "MFG_LOSS_OF_PHASE_RESTORE", "Loss of Phase Restored"),
    mfg(4, "MFG_BILLING_SCHEDULE_EXPIRED", "Billing Schedule Expired"),
    mfg(5, "MFG_INPUT_HIGH", "Input Channel High"),
    mfg(6, "MFG_INPUT_LOW", "Input Channel Low"),
];

const CENTRON_EVENTS: &[ManufacturerEvent] = &[
    mfg(4, "MFG_BILLING_SCHEDULE_EXPIRED", "Billing Schedule Expired"),
    mfg(7, "MFG_REVERSE_POWER_FLOW", "Reverse Power Flow"),
    mfg(8, "MFG_REVERSE_POWER_FLOW_RESTORE", "Reverse Power Flow Restored"),
    mfg(9, "MFG_TAMPER_DETECTED", "Tamper Detected"),
];

const CENTRON_POLY_EVENTS: &[ManufacturerEvent] = &[
    mfg(0, "MFG_SITESCAN_ERROR", "SiteScan Error"),
    mfg(1, "MFG_SITESCAN_ERROR_CLEARED", "SiteScan Error Cleared"),
    mfg(2, "MFG_LOSS_OF_PHASE", "Loss of Phase"),
    mfg(3, "MFG_LOSS_OF_PHASE_RESTORE", "Loss of Phase Restored"),
];

fn manufacturer_events(family: DeviceFamily) -> &'static [ManufacturerEvent] {
    match family {
        DeviceFamily::Generic => &[],
        DeviceFamily::Sentinel => SENTINEL_EVENTS,
        DeviceFamily::CentronMono => CENTRON_EVENTS,
        DeviceFamily::CentronPoly => CENTRON_POLY_EVENTS,
    }
}

/// The built-in English text for every key used by this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl StringCatalog for EnglishStrings {
    fn lookup(&self, key: &str) -> Option<String> {
        let standard = StandardEvent::all()
            .iter()
            .find(|e| e.key() == key)
            .map(StandardEvent::english);

        let text = standard.or_else(|| {
            [SENTINEL_EVENTS, CENTRON_EVENTS, CENTRON_POLY_EVENTS]
                .into_iter()
                .flatten()
                .find(|e| e.key == key)
                .map(|e| e.english)
        })?;

        Some(text.to_string())
    }
}

/// Maps event codes to [`StringCatalog`] keys.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDictionary {
    entries: BTreeMap<u16, &'static str>,
}

impl EventDictionary {
    /// Manufacturer event `n` is logged as code `MANUFACTURER_OFFSET + n`.
    pub const MANUFACTURER_OFFSET: u16 = 2048;

    /// A dictionary with the C12.19 standard events only.
    pub fn standard() -> Self {
        let entries = StandardEvent::all()
            .iter()
            .map(|e| (e.code(), e.key()))
            .collect();

        Self { entries }
    }

    /// The standard events plus the manufacturer events of `family` and
    /// the families it specializes.
    pub fn for_family(family: DeviceFamily) -> Self {
        let mut me = Self::standard();

        let mut chain = vec![family];
        while let Some(parent) = chain.last().and_then(DeviceFamily::parent) {
            chain.push(parent);
        }

        for family in chain.into_iter().rev() {
            for event in manufacturer_events(family) {
                me.insert(Self::MANUFACTURER_OFFSET + event.offset, event.key);
            }
        }

        me
    }

    pub fn is_manufacturer(code: u16) -> bool {
        code >= Self::MANUFACTURER_OFFSET
    }

    /// Add or replace an entry, returning the key it replaced.
    pub fn insert(&mut self, code: u16, key: &'static str) -> Option<&'static str> {
        self.entries.insert(code, key)
    }

    pub fn key(&self, code: u16) -> Option<&'static str> {
        self.entries.get(&code).copied()
    }

    pub fn contains(&self, code: u16) -> bool {
        self.entries.contains_key(&code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.entries.iter().map(|(code, key)| (*code, *key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A human readable description of `code`.
    ///
    /// Codes without an entry, and keys missing from `strings`, are
    /// described by number.
    pub fn describe(&self, code: u16, strings: &impl StringCatalog) -> String {
        if let Some(text) = self.key(code).and_then(|key| strings.lookup(key)) {
            return text;
        }

        if Self::is_manufacturer(code) {
            format!(
                "Manufacturer Event {}",
                code - Self::MANUFACTURER_OFFSET
            )
        } else {
            format!("Event {code}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes_round_trip() {
        for event in StandardEvent::all() {
            assert_eq!(StandardEvent::from_code(event.code()), Some(*event));
        }
        assert_eq!(StandardEvent::from_code(47), None);
    }

    #[test]
    fn describe_standard() {
        let dictionary = EventDictionary::standard();
        assert_eq!(dictionary.describe(20, &EnglishStrings), "Demand Reset Occurred");
        assert_eq!(dictionary.describe(200, &EnglishStrings), "Event 200");
        assert_eq!(dictionary.describe(2048, &EnglishStrings), "Manufacturer Event 0");
    }

    #[test]
    fn family_events() {
        let generic = EventDictionary::for_family(DeviceFamily::Generic);
        assert_eq!(generic, EventDictionary::standard());

        let mono = EventDictionary::for_family(DeviceFamily::CentronMono);
        let poly = EventDictionary::for_family(DeviceFamily::CentronPoly);

        assert!(!mono.contains(2048));
        assert_eq!(poly.key(2048), Some("MFG_SITESCAN_ERROR"));
        assert_eq!(poly.key(2048 + 9), Some("MFG_TAMPER_DETECTED"));
        assert_eq!(poly.describe(2048 + 7, &EnglishStrings), "Reverse Power Flow");
    }

    #[test]
    fn custom_catalog() {
        let mut strings = HashMap::new();
        strings.insert("EVT_DEMAND_RESET".to_string(), "Remise à zéro".to_string());

        let dictionary = EventDictionary::standard();
        assert_eq!(dictionary.describe(20, &strings), "Remise à zéro");
        // Missing keys fall back to the code.
        assert_eq!(dictionary.describe(21, &strings), "Event 21");
    }

    #[test]
    fn every_key_has_english_text() {
        for family in DeviceFamily::all() {
            for (code, key) in EventDictionary::for_family(*family).iter() {
                assert!(EnglishStrings.lookup(key).is_some(), "{code}: {key}");
            }
        }
    }
}
