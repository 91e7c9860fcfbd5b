//! Named bit-field components.
//!
//! Every identifier in the [`catalog`](crate::catalog) is the bitwise OR of
//! one category constant and the sub-field constants that apply to it. The
//! masks in this module are the same ones used to take an identifier apart
//! again in [`decompose`](super::decompose).

pub use super::quantity::*;

// Category (component) field.

pub const COMPONENT_MASK: u32 = 0xFC00_0000;

pub const COEFF_CONFIG: u32 = 0x0400_0000;
pub const CALENDAR_CONFIG: u32 = 0x0800_0000;
pub const CALENDAR_DATA: u32 = 0x0C00_0000;
pub const ENERGY_CONFIG: u32 = 0x1000_0000;
pub const ENERGY_DATA: u32 = 0x1400_0000;
pub const DEMAND_CONFIG: u32 = 0x1800_0000;
pub const DEMAND_DATA: u32 = 0x1C00_0000;
pub const LOADPROFILE_CONFIG: u32 = 0x2000_0000;
pub const LOADPROFILE_DATA: u32 = 0x2400_0000;
pub const METROLOGY_DATA: u32 = 0x2800_0000;
pub const MISC_DATA: u32 = 0x2C00_0000;
pub const MODE_CONTROL: u32 = 0x3000_0000;
pub const OPTION_BOARD_DATA: u32 = 0x3400_0000;
pub const SELF_READ_DATA: u32 = 0x3800_0000;
pub const SITESCAN_DATA: u32 = 0x3C00_0000;
pub const STATEMON_DATA: u32 = 0x4000_0000;
pub const METER_KEY_DATA: u32 = 0x4400_0000;
pub const VOLTMON_DATA: u32 = 0x4800_0000;
pub const PQ_DATA: u32 = 0x4C00_0000;
pub const CONSTANT_DATA: u32 = 0x5000_0000;

// Fields shared by the simple (item-table) categories.

pub const ITEM_MASK: u32 = 0x0000_00FF;
pub const MODIFIER_MASK: u32 = 0x0000_0F00;
pub const MODIFIER_SHIFT: u32 = 8;
pub const BLOCK_MASK: u32 = 0x00F0_0000;

pub const PHASE_NONE: u32 = 0x0000_0000;
pub const PHASE_A: u32 = 0x0000_0100;
pub const PHASE_B: u32 = 0x0000_0200;
pub const PHASE_C: u32 = 0x0000_0300;
pub const PHASE_N: u32 = 0x0000_0400;

/// Index `n` (1..=15) for indexed items such as demand definitions or
/// load profile channels.
pub const fn index(n: u32) -> u32 {
    (n << MODIFIER_SHIFT) & MODIFIER_MASK
}

// Energy and demand fields.

pub const QUANTITY_MASK: u32 = 0x0000_00FF;

pub const SECONDARY_DATA: u32 = 0x0000_0000;

pub const ENERGY_FORMAT_MASK: u32 = 0x0000_0300;
pub const ENERGY_PRIMARY_DATA: u32 = 0x0000_0100;
pub const ENERGY_RAW_DATA: u32 = 0x0000_0200;

pub const ENERGY_TOU_MASK: u32 = 0x0000_F000;
pub const ENERGY_TOU_SHIFT: u32 = 12;

pub const DEMAND_TOU_MASK: u32 = 0x0000_0F00;
pub const DEMAND_TOU_SHIFT: u32 = 8;

pub const DEMAND_SEGMENT_MASK: u32 = 0x0000_F000;
pub const PRESENT_DEMAND: u32 = 0x0000_1000;
pub const PREVIOUS_DEMAND: u32 = 0x0000_2000;
pub const PROJECTED_DEMAND: u32 = 0x0000_3000;
pub const CUM_DEMAND: u32 = 0x0000_4000;
pub const CCUM_DEMAND: u32 = 0x0000_5000;
pub const MIN_DEMAND: u32 = 0x0000_6000;
pub const PEAK_1_DEMAND: u32 = 0x0000_7000;
pub const PEAK_2_DEMAND: u32 = 0x0000_8000;
pub const PEAK_3_DEMAND: u32 = 0x0000_9000;
pub const PEAK_4_DEMAND: u32 = 0x0000_A000;
pub const PEAK_5_DEMAND: u32 = 0x0000_B000;
pub const MAX_DEMAND: u32 = 0x0000_C000;
pub const COINCIDENT_DEMAND: u32 = 0x0000_D000;
pub const MISC_DEMAND: u32 = 0x0000_E000;

pub const DEMAND_FORMAT_MASK: u32 = 0x0003_0000;
pub const DEMAND_PRIMARY_DATA: u32 = 0x0001_0000;
pub const DEMAND_RAW_DATA: u32 = 0x0002_0000;
pub const TOO_DATA: u32 = 0x0003_0000;

pub const COINC_TRIGGER_MASK: u32 = 0x03FC_0000;
pub const COINC_TRIGGER_SHIFT: u32 = 18;

/// Place a quantity code in the coincident trigger field.
pub const fn coinc_trigger(quantity: u32) -> u32 {
    (quantity << COINC_TRIGGER_SHIFT) & COINC_TRIGGER_MASK
}

// TOU rates, positioned for energy and for demand.

pub const TOU_TOTAL: u32 = 0;

pub const fn energy_rate(rate: u32) -> u32 {
    (rate << ENERGY_TOU_SHIFT) & ENERGY_TOU_MASK
}

pub const fn demand_rate(rate: u32) -> u32 {
    (rate << DEMAND_TOU_SHIFT) & DEMAND_TOU_MASK
}

pub const RATE_A: u32 = 1;
pub const RATE_B: u32 = 2;
pub const RATE_C: u32 = 3;
pub const RATE_D: u32 = 4;
pub const RATE_E: u32 = 5;
pub const RATE_F: u32 = 6;
pub const RATE_G: u32 = 7;

// Demand misc segment items.

pub const DEMAND_RESET_COUNT: u32 = 0x01;
pub const DEMAND_RESET_DATE: u32 = 0x02;
pub const SUBINTERVAL_REMAINING: u32 = 0x03;
pub const INTERVAL_REMAINING: u32 = 0x04;

// Self-read fields.

pub const SR_BUFFER_MASK: u32 = 0x0380_0000;
pub const SR_BUFFER_SHIFT: u32 = 23;
pub const SR_BUFFER_1: u32 = 0x0000_0000;
pub const SR_BUFFER_2: u32 = 0x0080_0000;
pub const SR_BUFFER_3: u32 = 0x0100_0000;
pub const SR_BUFFER_4: u32 = 0x0180_0000;
pub const SR_LAST_DEMAND_RESET: u32 = 0x0200_0000;
pub const SR_2ND_LAST_DEMAND_RESET: u32 = 0x0280_0000;
pub const SR_LAST_SEASON: u32 = 0x0300_0000;

pub const SR_KIND_MASK: u32 = 0x0040_0000;
pub const SR_ENERGY: u32 = 0x0000_0000;
pub const SR_DEMAND: u32 = 0x0040_0000;

/// Energy and demand fields carried inside a self-read identifier.
pub const SR_PAYLOAD_MASK: u32 = 0x0003_FFFF;

// Coefficients.

pub const CT_MULTIPLIER: u32 = 0x01;
pub const VT_MULTIPLIER: u32 = 0x02;
pub const REGISTER_MULTIPLIER: u32 = 0x03;
pub const KH: u32 = 0x04;
pub const KT: u32 = 0x05;
pub const PULSE_WEIGHT: u32 = 0x06;
pub const TRANSFORMER_RATIO: u32 = 0x07;

// Calendar configuration.

pub const CAL_ID: u32 = 0x01;
pub const CAL_DST_ENABLED: u32 = 0x02;
pub const CAL_EXPIRATION_YEAR: u32 = 0x03;
pub const CAL_DST_HOUR: u32 = 0x04;
pub const CAL_DST_OFFSET: u32 = 0x05;
pub const CAL_BILLING_SCHED_NAME: u32 = 0x06;
pub const CAL_BILLING_SCHED_NAME_SENTINEL: u32 = 0x16;

// Calendar data.

pub const CLD_CURRENT_TIME: u32 = 0x01;
pub const CLD_CURRENT_SEASON: u32 = 0x02;
pub const CLD_CURRENT_RATE: u32 = 0x03;
pub const CLD_DAY_OF_WEEK: u32 = 0x04;
pub const CLD_DST_ACTIVE: u32 = 0x05;
pub const CLD_MINUTES_ON_BATTERY: u32 = 0x06;
pub const CLD_NEXT_SEASON_DATE: u32 = 0x07;

// Energy configuration.

pub const ECONF_NUM_ENERGIES: u32 = 0x10;
pub const ECONF_ENERGY_DEF: u32 = 0x20;
pub const ECONF_DISPLAY_DIGITS: u32 = 0x30;
pub const ECONF_DECIMAL_DIGITS: u32 = 0x40;

// Demand configuration.

pub const CONF_INTERVAL_LENGTH: u32 = 0x10;
pub const CONF_NBR_SUB: u32 = 0x20;
pub const CONF_TEST_INTERVAL_LENGTH: u32 = 0x30;
pub const CONF_TEST_NBR_SUB: u32 = 0x40;
pub const CONF_CLPU: u32 = 0x50;
pub const CONF_OUTAGE_LENGTH: u32 = 0x60;
pub const CONF_SCHEDULED_RESET: u32 = 0x70;
pub const CONF_RESET_LOCKOUT: u32 = 0x80;
pub const CONF_THRESHOLD: u32 = 0x90;
pub const CONF_DEMAND_DEF: u32 = 0xA0;

// Load profile configuration.

pub const LP_INTERVAL_LENGTH: u32 = 0x01;
pub const LP_NUM_CHANNELS: u32 = 0x02;
pub const LP_MEMORY_SIZE: u32 = 0x03;
pub const LP_CHANNEL_QUANTITY: u32 = 0x04;
pub const LP_CHANNEL_PULSE_WEIGHT: u32 = 0x05;
pub const LP_OUTAGE_LENGTH: u32 = 0x06;
pub const LP_LOAD_RESEARCH_ID: u32 = 0x10;

// Load profile data.

pub const LPD_RUNNING: u32 = 0x01;
pub const LPD_NUM_BLOCKS: u32 = 0x02;
pub const LPD_VALID_INTERVALS: u32 = 0x03;
pub const LPD_LAST_INTERVAL_TIME: u32 = 0x04;
pub const LPD_MEMORY_USED: u32 = 0x05;

// Metrology (instantaneous).

pub const INS_W: u32 = 0x01;
pub const INS_VA: u32 = 0x02;
pub const INS_VAR: u32 = 0x03;
pub const INS_V: u32 = 0x04;
pub const INS_A: u32 = 0x05;
pub const INS_PF: u32 = 0x06;
pub const INS_FREQ: u32 = 0x07;
pub const INS_V_ANGLE: u32 = 0x08;
pub const INS_A_ANGLE: u32 = 0x09;
pub const INS_THD_V: u32 = 0x0A;
pub const INS_THD_A: u32 = 0x0B;
pub const INS_TEMPERATURE: u32 = 0x0C;

// Misc. Block 0 holds general items; the other blocks hold the
// family-specific base (calibration) data.

pub const NUM_OUTAGES: u32 = 0x01;
pub const NUM_TIMES_PROGRAMMED: u32 = 0x02;
pub const DATE_LAST_PROGRAMMED: u32 = 0x03;
pub const DATE_LAST_OUTAGE: u32 = 0x04;
pub const CUM_OUTAGE_TIME: u32 = 0x05;
pub const DAYS_SINCE_DEMAND_RESET: u32 = 0x06;
pub const DAYS_SINCE_TEST: u32 = 0x07;

pub const BASE_DATA_STD: u32 = 0x0010_0000;
pub const BASE_DATA_SENTINEL: u32 = 0x0020_0000;
pub const BASE_DATA_CENTRON: u32 = 0x0030_0000;

pub const CAL_DATE: u32 = 0x01;
pub const METER_FORM: u32 = 0x02;
pub const METER_BASE: u32 = 0x03;

// Mode control.

pub const TEST_MODE_ACTIVE: u32 = 0x01;
pub const TEST_MODE_TIMEOUT: u32 = 0x02;
pub const DISPLAY_MODE: u32 = 0x03;
pub const TEST_MODE_REMAINING: u32 = 0x04;

// Option board.

pub const OPT_BRD_ID: u32 = 0x01;
pub const OPT_BRD_TYPE: u32 = 0x02;
pub const OPT_BRD_FW_VERSION: u32 = 0x03;
pub const OPT_BRD_FW_REVISION: u32 = 0x04;
pub const OPT_BRD_PRESENT: u32 = 0x05;

// Site scan.

pub const SS_SERVICE_TYPE: u32 = 0x01;
pub const SS_SERVICE_VOLTAGE: u32 = 0x02;
pub const SS_V_ANGLE: u32 = 0x03;
pub const SS_A_ANGLE: u32 = 0x04;
pub const SS_V_MAGNITUDE: u32 = 0x05;
pub const SS_A_MAGNITUDE: u32 = 0x06;
pub const SS_DIAG_COUNT: u32 = 0x10;
pub const SS_DIAG_ACTIVE: u32 = 0x20;

// State monitor. Block 0 is the standard layout; the Sentinel and
// Centron layouts live in their own blocks.

pub const STATEMON_STD: u32 = 0x0000_0000;
pub const STATEMON_SENTINEL: u32 = 0x0020_0000;
pub const STATEMON_CENTRON: u32 = 0x0030_0000;

pub const NON_FATAL_ERRORS: u32 = 0x01;
pub const FATAL_ERRORS: u32 = 0x02;
pub const DIAG_ERRORS: u32 = 0x03;
pub const ERROR_COUNTER: u32 = 0x04;
pub const DIAG_COUNT: u32 = 0x10;

// Meter key.

pub const MK_SW_VERSION: u32 = 0x01;
pub const MK_MAX_DEMANDS: u32 = 0x02;
pub const MK_TOU_ENABLED: u32 = 0x03;
pub const MK_LP_ENABLED: u32 = 0x04;
pub const MK_LP_CHANNELS: u32 = 0x05;
pub const MK_VM_ENABLED: u32 = 0x06;
pub const MK_IO_CAPABILITIES: u32 = 0x10;
pub const MK_IO_CAPABILITIES_POLY: u32 = 0x20;

// Voltage monitor.

pub const VM_ENABLED: u32 = 0x01;
pub const VM_INTERVAL_LENGTH: u32 = 0x02;
pub const VM_LOW_THRESHOLD: u32 = 0x03;
pub const VM_HIGH_THRESHOLD: u32 = 0x04;
pub const VM_NUM_PHASES: u32 = 0x05;
pub const VM_VALID_INTERVALS: u32 = 0x06;
pub const VM_STATUS: u32 = 0x07;
pub const VM_LAST_VOLTAGE: u32 = 0x08;

// Power quality.

pub const PQ_SAG_COUNT: u32 = 0x01;
pub const PQ_SWELL_COUNT: u32 = 0x02;
pub const PQ_SAG_DURATION: u32 = 0x03;
pub const PQ_SAG_THRESHOLD: u32 = 0x04;
pub const PQ_SWELL_THRESHOLD: u32 = 0x05;
pub const PQ_LAST_SAG_DATE: u32 = 0x06;
pub const PQ_LAST_SWELL_DATE: u32 = 0x07;
pub const PQ_MOMENTARY_COUNT: u32 = 0x08;
pub const PQ_SUSTAINED_COUNT: u32 = 0x09;

// Constants.

pub const FW_VERSION: u32 = 0x01;
pub const FW_REVISION: u32 = 0x02;
pub const FW_BUILD: u32 = 0x03;
pub const SW_VERSION: u32 = 0x04;
pub const UNIT_ID: u32 = 0x05;
pub const SERIAL_NUMBER: u32 = 0x06;
pub const PROGRAM_ID: u32 = 0x07;
pub const USER_DATA: u32 = 0x08;
pub const METER_TYPE: u32 = 0x09;
