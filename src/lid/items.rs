//! Decision tables for the categories whose low byte names a single item.

use super::bits::*;
use super::DataType::{self, *};

/// How the modifier nibble (`MODIFIER_MASK`) of an item is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Modifier {
    /// The modifier must be zero.
    None,
    /// The modifier is an index in `1..=max`. A `#` in the description is
    /// replaced by the index.
    Index(u32),
    /// The modifier is an optional phase.
    Phase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Item {
    pub code: u32,
    pub data_type: DataType,
    pub description: &'static str,
    pub modifier: Modifier,
}

pub(super) const fn item(code: u32, data_type: DataType, description: &'static str) -> Item {
    Item {
        code,
        data_type,
        description,
        modifier: Modifier::None,
    }
}

pub(super) const fn indexed(code: u32, data_type: DataType, description: &'static str, max: u32) -> Item {
    Item {
        code,
        data_type,
        description,
        modifier: Modifier::Index(max),
    }
}

const fn phased(code: u32, data_type: DataType, description: &'static str) -> Item {
    Item {
        code,
        data_type,
        description,
        modifier: Modifier::Phase,
    }
}

pub(super) fn find(items: &'static [Item], code: u32) -> Option<&'static Item> {
    items.iter().find(|i| i.code == code)
}

pub(super) fn phase_suffix(phase: u32) -> Option<&'static str> {
    match phase {
        0 => Some(""),
        1 => Some(" (a)"),
        2 => Some(" (b)"),
        3 => Some(" (c)"),
        4 => Some(" (n)"),
        _ => None,
    }
}

pub(super) const COEFFICIENTS: &[Item] = &[
    item(CT_MULTIPLIER, Single, "CT Multiplier"),
    item(VT_MULTIPLIER, Single, "VT Multiplier"),
    item(REGISTER_MULTIPLIER, Single, "Register Multiplier"),
    item(KH, Single, "Kh"),
    item(KT, Single, "Kt"),
    item(PULSE_WEIGHT, Single, "Pulse Weight"),
    item(TRANSFORMER_RATIO, Single, "Transformer Ratio"),
];

pub(super) const CALENDAR_CONFIG_ITEMS: &[Item] = &[
    item(CAL_ID, UInt16, "Calendar ID"),
    item(CAL_DST_ENABLED, Byte, "DST Enabled"),
    item(CAL_EXPIRATION_YEAR, Byte, "Calendar Expiration Year"),
    item(CAL_DST_HOUR, Byte, "DST Switch Hour"),
    item(CAL_DST_OFFSET, Byte, "DST Offset"),
    item(CAL_BILLING_SCHED_NAME, FixedString(12), "Billing Schedule Name"),
];

pub(super) const CALENDAR_DATA_ITEMS: &[Item] = &[
    item(CLD_CURRENT_TIME, DateTimeEncoded, "Current Date/Time"),
    item(CLD_CURRENT_SEASON, Byte, "Current Season"),
    item(CLD_CURRENT_RATE, Byte, "Current Rate"),
    item(CLD_DAY_OF_WEEK, Byte, "Day of Week"),
    item(CLD_DST_ACTIVE, Byte, "DST Active"),
    item(CLD_MINUTES_ON_BATTERY, UInt32, "Minutes on Battery"),
    item(CLD_NEXT_SEASON_DATE, DateTimeEncoded, "Next Season Change"),
];

pub(super) const ENERGY_CONFIG_ITEMS: &[Item] = &[
    item(ECONF_NUM_ENERGIES, Byte, "Number of Energies"),
    indexed(ECONF_ENERGY_DEF, UInt32, "Energy Definition #", 8),
    item(ECONF_DISPLAY_DIGITS, Byte, "Energy Display Digits"),
    item(ECONF_DECIMAL_DIGITS, Byte, "Energy Decimal Digits"),
];

pub(super) const DEMAND_CONFIG_ITEMS: &[Item] = &[
    item(CONF_INTERVAL_LENGTH, Byte, "Demand Interval Length"),
    item(CONF_NBR_SUB, Byte, "Number of Subintervals"),
    item(CONF_TEST_INTERVAL_LENGTH, Byte, "Test Mode Interval Length"),
    item(CONF_TEST_NBR_SUB, Byte, "Test Mode Number of Subintervals"),
    item(CONF_CLPU, UInt16, "Cold Load Pickup Time"),
    item(CONF_OUTAGE_LENGTH, UInt16, "Outage Length Before Cold Load Pickup"),
    item(CONF_SCHEDULED_RESET, Byte, "Scheduled Demand Reset Day"),
    item(CONF_RESET_LOCKOUT, Byte, "Demand Reset Lockout Time"),
    indexed(CONF_THRESHOLD, Single, "Demand Threshold #", 4),
    indexed(CONF_DEMAND_DEF, UInt32, "Demand Definition #", 10),
];

pub(super) const DEMAND_MISC_ITEMS: &[Item] = &[
    item(DEMAND_RESET_COUNT, UInt16, "Number of Demand Resets"),
    item(DEMAND_RESET_DATE, DateTimeEncoded, "Last Demand Reset Date"),
    item(SUBINTERVAL_REMAINING, UInt16, "Time Remaining in Subinterval"),
    item(INTERVAL_REMAINING, UInt16, "Time Remaining in Interval"),
];

pub(super) const LOAD_PROFILE_CONFIG_ITEMS: &[Item] = &[
    item(LP_INTERVAL_LENGTH, Byte, "LP Interval Length"),
    item(LP_NUM_CHANNELS, Byte, "Number of LP Channels"),
    item(LP_MEMORY_SIZE, UInt32, "LP Memory Size"),
    indexed(LP_CHANNEL_QUANTITY, UInt32, "LP Channel # Quantity", 8),
    indexed(LP_CHANNEL_PULSE_WEIGHT, UInt16, "LP Channel # Pulse Weight", 8),
    item(LP_OUTAGE_LENGTH, UInt16, "LP Outage Length"),
    item(LP_LOAD_RESEARCH_ID, FixedString(10), "Load Research ID"),
];

pub(super) const LOAD_PROFILE_DATA_ITEMS: &[Item] = &[
    item(LPD_RUNNING, Byte, "LP Running"),
    item(LPD_NUM_BLOCKS, UInt16, "Number of LP Blocks"),
    item(LPD_VALID_INTERVALS, UInt16, "Valid Intervals in Last Block"),
    item(LPD_LAST_INTERVAL_TIME, DateTimeEncoded, "Last Interval Time"),
    item(LPD_MEMORY_USED, UInt32, "LP Memory Used"),
];

pub(super) const MISC_ITEMS: &[Item] = &[
    item(NUM_OUTAGES, UInt16, "Number of Power Outages"),
    item(NUM_TIMES_PROGRAMMED, UInt16, "Number of Times Programmed"),
    item(DATE_LAST_PROGRAMMED, DateTimeEncoded, "Date Last Programmed"),
    item(DATE_LAST_OUTAGE, DateTimeEncoded, "Date of Last Outage"),
    item(CUM_OUTAGE_TIME, UInt32, "Cumulative Power Outage Time"),
    item(DAYS_SINCE_DEMAND_RESET, UInt16, "Days Since Last Demand Reset"),
    item(DAYS_SINCE_TEST, UInt16, "Days Since Last Test"),
];

/// Base data found in the [`BASE_DATA_STD`] block.
pub(super) const BASE_DATA_STD_ITEMS: &[Item] = &[
    item(CAL_DATE, DateTimeEncoded, "Calibration Date"),
    item(METER_FORM, FixedString(4), "Meter Form"),
    item(METER_BASE, Byte, "Meter Base"),
];

pub(super) const MODE_CONTROL_ITEMS: &[Item] = &[
    item(TEST_MODE_ACTIVE, Byte, "Test Mode Active"),
    item(TEST_MODE_TIMEOUT, Byte, "Test Mode Timeout"),
    item(DISPLAY_MODE, Byte, "Display Mode"),
    item(TEST_MODE_REMAINING, UInt16, "Time Remaining in Test Mode"),
];

pub(super) const OPTION_BOARD_ITEMS: &[Item] = &[
    item(OPT_BRD_ID, Byte, "Option Board ID"),
    item(OPT_BRD_TYPE, FixedString(16), "Option Board Type"),
    item(OPT_BRD_FW_VERSION, Byte, "Option Board Firmware Version"),
    item(OPT_BRD_FW_REVISION, Byte, "Option Board Firmware Revision"),
    item(OPT_BRD_PRESENT, Byte, "Option Board Present"),
];

pub(super) const SITESCAN_ITEMS: &[Item] = &[
    item(SS_SERVICE_TYPE, Byte, "Service Type"),
    item(SS_SERVICE_VOLTAGE, Single, "Service Voltage"),
    phased(SS_V_ANGLE, Single, "Voltage Angle"),
    phased(SS_A_ANGLE, Single, "Current Angle"),
    phased(SS_V_MAGNITUDE, Single, "Voltage Magnitude"),
    phased(SS_A_MAGNITUDE, Single, "Current Magnitude"),
    indexed(SS_DIAG_COUNT, Byte, "Diag # Count", 6),
    item(SS_DIAG_ACTIVE, Byte, "Active Diagnostics"),
];

/// State monitor items found in the [`STATEMON_STD`] block.
pub(super) const STATEMON_STD_ITEMS: &[Item] = &[
    item(NON_FATAL_ERRORS, Byte, "Non-Fatal Errors"),
    item(FATAL_ERRORS, Byte, "Fatal Errors"),
    item(DIAG_ERRORS, Byte, "Diagnostic Errors"),
    indexed(DIAG_COUNT, Byte, "Diag # Count", 5),
];

pub(super) const METER_KEY_ITEMS: &[Item] = &[
    item(MK_SW_VERSION, Byte, "Meter Key Software Version"),
    item(MK_MAX_DEMANDS, Byte, "Maximum Number of Demands"),
    item(MK_TOU_ENABLED, Byte, "TOU Enabled"),
    item(MK_LP_ENABLED, Byte, "Load Profile Enabled"),
    item(MK_LP_CHANNELS, Byte, "Supported LP Channels"),
    item(MK_VM_ENABLED, Byte, "Voltage Monitoring Enabled"),
    item(MK_IO_CAPABILITIES, Byte, "I/O Capabilities"),
];

pub(super) const VOLTAGE_MONITOR_ITEMS: &[Item] = &[
    item(VM_ENABLED, Byte, "VM Enabled"),
    item(VM_INTERVAL_LENGTH, Byte, "VM Interval Length"),
    item(VM_LOW_THRESHOLD, UInt16, "VM Low Threshold"),
    item(VM_HIGH_THRESHOLD, UInt16, "VM High Threshold"),
    item(VM_NUM_PHASES, Byte, "VM Number of Phases"),
    item(VM_VALID_INTERVALS, UInt16, "VM Valid Intervals"),
    item(VM_STATUS, Byte, "VM Status"),
    phased(VM_LAST_VOLTAGE, Single, "VM Last Interval Voltage"),
];

pub(super) const POWER_QUALITY_ITEMS: &[Item] = &[
    item(PQ_SAG_COUNT, UInt16, "Sag Count"),
    item(PQ_SWELL_COUNT, UInt16, "Swell Count"),
    item(PQ_SAG_DURATION, UInt16, "Sag Duration Threshold"),
    item(PQ_SAG_THRESHOLD, Byte, "Sag Voltage Threshold"),
    item(PQ_SWELL_THRESHOLD, Byte, "Swell Voltage Threshold"),
    item(PQ_LAST_SAG_DATE, DateTimeEncoded, "Last Sag Date"),
    item(PQ_LAST_SWELL_DATE, DateTimeEncoded, "Last Swell Date"),
    item(PQ_MOMENTARY_COUNT, UInt16, "Momentary Interruption Count"),
    item(PQ_SUSTAINED_COUNT, UInt16, "Sustained Interruption Count"),
];

pub(super) const CONSTANT_ITEMS: &[Item] = &[
    item(FW_VERSION, Byte, "Firmware Version"),
    item(FW_REVISION, Byte, "Firmware Revision"),
    item(FW_BUILD, Byte, "Firmware Build"),
    item(SW_VERSION, Byte, "Software Version"),
    item(UNIT_ID, FixedString(8), "Unit ID"),
    item(SERIAL_NUMBER, FixedString(16), "Serial Number"),
    item(PROGRAM_ID, UInt16, "Program ID"),
    indexed(USER_DATA, FixedString(10), "User Data #", 3),
    item(METER_TYPE, FixedString(8), "Meter Type"),
];

/// An instantaneous metrology reading.
pub(super) struct Instantaneous {
    pub code: u32,
    pub word: &'static str,
    pub signed: bool,
    pub scalable: bool,
}

const fn ins(code: u32, word: &'static str, signed: bool, scalable: bool) -> Instantaneous {
    Instantaneous {
        code,
        word,
        signed,
        scalable,
    }
}

pub(super) const INSTANTANEOUS: &[Instantaneous] = &[
    ins(INS_W, "W", true, true),
    ins(INS_VA, "VA", false, true),
    ins(INS_VAR, "var", true, true),
    ins(INS_V, "V", false, true),
    ins(INS_A, "A", false, true),
    ins(INS_PF, "PF", true, false),
    ins(INS_FREQ, "Freq", false, false),
    ins(INS_V_ANGLE, "V Angle", true, false),
    ins(INS_A_ANGLE, "A Angle", true, false),
    ins(INS_THD_V, "THD V", false, false),
    ins(INS_THD_A, "THD A", false, false),
    ins(INS_TEMPERATURE, "Temperature", true, false),
];
