//! Named LID values shared by every device family.
//!
//! Each value is composed from the constants in [`bits`](crate::lid::bits).
//! Items whose layout depends on the meter family are not listed here; see
//! [`FamilyLids`](super::FamilyLids).

use crate::lid::bits::*;

macro_rules! defined {
    ($($name:ident = $value:expr,)*) => {
        $(pub const $name: u32 = $value;)*

        pub(super) const DEFINED: &[(&str, u32)] = &[$((stringify!($name), $name),)*];
    };
}

defined! {
    // Coefficients
    COEFF_CT_MULTIPLIER = COEFF_CONFIG | CT_MULTIPLIER,
    COEFF_VT_MULTIPLIER = COEFF_CONFIG | VT_MULTIPLIER,
    COEFF_REGISTER_MULTIPLIER = COEFF_CONFIG | REGISTER_MULTIPLIER,
    COEFF_KH = COEFF_CONFIG | KH,
    COEFF_KT = COEFF_CONFIG | KT,
    COEFF_PULSE_WEIGHT = COEFF_CONFIG | PULSE_WEIGHT,
    COEFF_TRANSFORMER_RATIO = COEFF_CONFIG | TRANSFORMER_RATIO,

    // Calendar
    CALENDAR_ID = CALENDAR_CONFIG | CAL_ID,
    CALENDAR_DST_ENABLED = CALENDAR_CONFIG | CAL_DST_ENABLED,
    CALENDAR_EXPIRATION_YEAR = CALENDAR_CONFIG | CAL_EXPIRATION_YEAR,
    CALENDAR_DST_HOUR = CALENDAR_CONFIG | CAL_DST_HOUR,
    CALENDAR_DST_OFFSET = CALENDAR_CONFIG | CAL_DST_OFFSET,
    CALENDAR_CURRENT_TIME = CALENDAR_DATA | CLD_CURRENT_TIME,
    CALENDAR_CURRENT_SEASON = CALENDAR_DATA | CLD_CURRENT_SEASON,
    CALENDAR_CURRENT_RATE = CALENDAR_DATA | CLD_CURRENT_RATE,
    CALENDAR_DAY_OF_WEEK = CALENDAR_DATA | CLD_DAY_OF_WEEK,
    CALENDAR_DST_ACTIVE = CALENDAR_DATA | CLD_DST_ACTIVE,
    CALENDAR_MINUTES_ON_BATTERY = CALENDAR_DATA | CLD_MINUTES_ON_BATTERY,
    CALENDAR_NEXT_SEASON_DATE = CALENDAR_DATA | CLD_NEXT_SEASON_DATE,

    // Energy configuration
    ENERGY_CONFIG_NUM_ENERGIES = ENERGY_CONFIG | ECONF_NUM_ENERGIES,
    ENERGY_CONFIG_DEF_1 = ENERGY_CONFIG | ECONF_ENERGY_DEF | index(1),
    ENERGY_CONFIG_DEF_2 = ENERGY_CONFIG | ECONF_ENERGY_DEF | index(2),
    ENERGY_CONFIG_DEF_3 = ENERGY_CONFIG | ECONF_ENERGY_DEF | index(3),
    ENERGY_CONFIG_DEF_4 = ENERGY_CONFIG | ECONF_ENERGY_DEF | index(4),
    ENERGY_CONFIG_DISPLAY_DIGITS = ENERGY_CONFIG | ECONF_DISPLAY_DIGITS,
    ENERGY_CONFIG_DECIMAL_DIGITS = ENERGY_CONFIG | ECONF_DECIMAL_DIGITS,

    // Energy
    ENERGY_WH_DEL = ENERGY_DATA | SECONDARY_DATA | WH_DELIVERED,
    ENERGY_WH_REC = ENERGY_DATA | SECONDARY_DATA | WH_RECEIVED,
    ENERGY_WH_NET = ENERGY_DATA | SECONDARY_DATA | WH_NET,
    ENERGY_WH_UNI = ENERGY_DATA | SECONDARY_DATA | WH_UNI,
    ENERGY_WH_PHA = ENERGY_DATA | SECONDARY_DATA | WH_PHASE_A,
    ENERGY_WH_PHB = ENERGY_DATA | SECONDARY_DATA | WH_PHASE_B,
    ENERGY_WH_PHC = ENERGY_DATA | SECONDARY_DATA | WH_PHASE_C,
    ENERGY_VARH_DEL = ENERGY_DATA | SECONDARY_DATA | VARH_DELIVERED,
    ENERGY_VARH_REC = ENERGY_DATA | SECONDARY_DATA | VARH_RECEIVED,
    ENERGY_VARH_NET = ENERGY_DATA | SECONDARY_DATA | VARH_NET,
    ENERGY_VARH_Q1 = ENERGY_DATA | SECONDARY_DATA | VARH_Q1,
    ENERGY_VARH_Q2 = ENERGY_DATA | SECONDARY_DATA | VARH_Q2,
    ENERGY_VARH_Q3 = ENERGY_DATA | SECONDARY_DATA | VARH_Q3,
    ENERGY_VARH_Q4 = ENERGY_DATA | SECONDARY_DATA | VARH_Q4,
    ENERGY_VAH_DEL_ARITH = ENERGY_DATA | SECONDARY_DATA | VAH_DEL_ARITH,
    ENERGY_VAH_REC_ARITH = ENERGY_DATA | SECONDARY_DATA | VAH_REC_ARITH,
    ENERGY_VAH_DEL_VECT = ENERGY_DATA | SECONDARY_DATA | VAH_DEL_VECT,
    ENERGY_VAH_REC_VECT = ENERGY_DATA | SECONDARY_DATA | VAH_REC_VECT,
    ENERGY_VAH_LAG = ENERGY_DATA | SECONDARY_DATA | VAH_LAG,
    ENERGY_QH_DEL = ENERGY_DATA | SECONDARY_DATA | QH_DELIVERED,
    ENERGY_AH_AGG = ENERGY_DATA | SECONDARY_DATA | AH_AGG,
    ENERGY_VH_AVG = ENERGY_DATA | SECONDARY_DATA | VH_AVG,
    ENERGY_WH_DEL_RATE_A = ENERGY_DATA | energy_rate(RATE_A) | WH_DELIVERED,
    ENERGY_WH_DEL_RATE_B = ENERGY_DATA | energy_rate(RATE_B) | WH_DELIVERED,
    ENERGY_WH_DEL_RATE_C = ENERGY_DATA | energy_rate(RATE_C) | WH_DELIVERED,
    ENERGY_WH_DEL_RATE_D = ENERGY_DATA | energy_rate(RATE_D) | WH_DELIVERED,
    ENERGY_WH_DEL_RATE_E = ENERGY_DATA | energy_rate(RATE_E) | WH_DELIVERED,
    ENERGY_PRI_WH_DEL = ENERGY_DATA | ENERGY_PRIMARY_DATA | WH_DELIVERED,
    ENERGY_RAW_WH_DEL = ENERGY_DATA | ENERGY_RAW_DATA | WH_DELIVERED,
    ALL_SEC_ENERGIES_TOTAL = ENERGY_DATA | SECONDARY_DATA | ALL_QUANTITIES,

    // Demand configuration
    DEMAND_CONFIG_INTERVAL_LENGTH = DEMAND_CONFIG | CONF_INTERVAL_LENGTH,
    DEMAND_CONFIG_NBR_SUB = DEMAND_CONFIG | CONF_NBR_SUB,
    DEMAND_CONFIG_TEST_INTERVAL_LENGTH = DEMAND_CONFIG | CONF_TEST_INTERVAL_LENGTH,
    DEMAND_CONFIG_TEST_NBR_SUB = DEMAND_CONFIG | CONF_TEST_NBR_SUB,
    DEMAND_CONFIG_CLPU = DEMAND_CONFIG | CONF_CLPU,
    DEMAND_CONFIG_OUTAGE_LENGTH = DEMAND_CONFIG | CONF_OUTAGE_LENGTH,
    DEMAND_CONFIG_SCHEDULED_RESET = DEMAND_CONFIG | CONF_SCHEDULED_RESET,
    DEMAND_CONFIG_RESET_LOCKOUT = DEMAND_CONFIG | CONF_RESET_LOCKOUT,
    DEMAND_CONFIG_THRESHOLD_1 = DEMAND_CONFIG | CONF_THRESHOLD | index(1),
    DEMAND_CONFIG_THRESHOLD_2 = DEMAND_CONFIG | CONF_THRESHOLD | index(2),
    DEMAND_CONFIG_THRESHOLD_3 = DEMAND_CONFIG | CONF_THRESHOLD | index(3),
    DEMAND_CONFIG_THRESHOLD_4 = DEMAND_CONFIG | CONF_THRESHOLD | index(4),
    DEMAND_CONFIG_DEF_1 = DEMAND_CONFIG | CONF_DEMAND_DEF | index(1),
    DEMAND_CONFIG_DEF_2 = DEMAND_CONFIG | CONF_DEMAND_DEF | index(2),
    DEMAND_CONFIG_DEF_3 = DEMAND_CONFIG | CONF_DEMAND_DEF | index(3),
    DEMAND_CONFIG_DEF_4 = DEMAND_CONFIG | CONF_DEMAND_DEF | index(4),

    // Demand
    DEMAND_MAX_W_DEL = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_MAX_W_REC = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | WH_RECEIVED,
    DEMAND_MAX_W_NET = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | WH_NET,
    DEMAND_MAX_VAR_DEL = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | VARH_DELIVERED,
    DEMAND_MAX_VAR_REC = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | VARH_RECEIVED,
    DEMAND_MAX_VA_DEL_ARITH = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | VAH_DEL_ARITH,
    DEMAND_MAX_VA_LAG = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | VAH_LAG,
    DEMAND_MAX_A_AGG = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | AH_AGG,
    DEMAND_PRESENT_W_DEL = DEMAND_DATA | PRESENT_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_PREV_W_DEL = DEMAND_DATA | PREVIOUS_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_PROJ_W_DEL = DEMAND_DATA | PROJECTED_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_CUM_W_DEL = DEMAND_DATA | CUM_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_CCUM_W_DEL = DEMAND_DATA | CCUM_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_MIN_W_DEL = DEMAND_DATA | MIN_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_MIN_PF_AVG = DEMAND_DATA | MIN_DEMAND | SECONDARY_DATA | PF_AVG,
    DEMAND_PEAK_1_W_DEL = DEMAND_DATA | PEAK_1_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_PEAK_2_W_DEL = DEMAND_DATA | PEAK_2_DEMAND | SECONDARY_DATA | WH_DELIVERED,
    DEMAND_TOO_MAX_W_DEL = DEMAND_DATA | MAX_DEMAND | TOO_DATA | WH_DELIVERED,
    DEMAND_TOO_MIN_W_DEL = DEMAND_DATA | MIN_DEMAND | TOO_DATA | WH_DELIVERED,
    DEMAND_TOO_PEAK_1_W_DEL = DEMAND_DATA | PEAK_1_DEMAND | TOO_DATA | WH_DELIVERED,
    DEMAND_MAX_W_DEL_RATE_A = DEMAND_DATA | MAX_DEMAND | demand_rate(RATE_A) | WH_DELIVERED,
    DEMAND_MAX_W_DEL_RATE_B = DEMAND_DATA | MAX_DEMAND | demand_rate(RATE_B) | WH_DELIVERED,
    DEMAND_MAX_W_DEL_RATE_C = DEMAND_DATA | MAX_DEMAND | demand_rate(RATE_C) | WH_DELIVERED,
    DEMAND_MAX_W_DEL_RATE_D = DEMAND_DATA | MAX_DEMAND | demand_rate(RATE_D) | WH_DELIVERED,
    DEMAND_MAX_W_DEL_RATE_E = DEMAND_DATA | MAX_DEMAND | demand_rate(RATE_E) | WH_DELIVERED,
    DEMAND_TOO_MAX_W_DEL_RATE_A = DEMAND_DATA | MAX_DEMAND | TOO_DATA | demand_rate(RATE_A) | WH_DELIVERED,
    DEMAND_PRI_MAX_W_DEL = DEMAND_DATA | MAX_DEMAND | DEMAND_PRIMARY_DATA | WH_DELIVERED,
    DEMAND_RAW_MAX_W_DEL = DEMAND_DATA | MAX_DEMAND | DEMAND_RAW_DATA | WH_DELIVERED,
    DEMAND_COINC_VAR_DEL_AT_MAX_W_DEL = DEMAND_DATA
        | COINCIDENT_DEMAND
        | VARH_DELIVERED
        | coinc_trigger(WH_DELIVERED),
    DEMAND_COINC_PF_AT_MAX_W_DEL = DEMAND_DATA
        | COINCIDENT_DEMAND
        | PF_AVG
        | coinc_trigger(WH_DELIVERED),
    DEMAND_COINC_W_DEL_AT_MAX_VA_DEL = DEMAND_DATA
        | COINCIDENT_DEMAND
        | WH_DELIVERED
        | coinc_trigger(VAH_DEL_ARITH),
    DEMAND_NUMBER_OF_RESETS = DEMAND_DATA | MISC_DEMAND | DEMAND_RESET_COUNT,
    DEMAND_LAST_RESET_DATE = DEMAND_DATA | MISC_DEMAND | DEMAND_RESET_DATE,
    DEMAND_SUBINTERVAL_REMAINING = DEMAND_DATA | MISC_DEMAND | SUBINTERVAL_REMAINING,
    DEMAND_INTERVAL_REMAINING = DEMAND_DATA | MISC_DEMAND | INTERVAL_REMAINING,
    ALL_SEC_DEMANDS_TOTAL = DEMAND_DATA | MAX_DEMAND | SECONDARY_DATA | ALL_QUANTITIES,

    // Load profile
    LP_CONFIG_INTERVAL_LENGTH = LOADPROFILE_CONFIG | LP_INTERVAL_LENGTH,
    LP_CONFIG_NUM_CHANNELS = LOADPROFILE_CONFIG | LP_NUM_CHANNELS,
    LP_CONFIG_MEMORY_SIZE = LOADPROFILE_CONFIG | LP_MEMORY_SIZE,
    LP_CONFIG_CHANNEL_1_QUANTITY = LOADPROFILE_CONFIG | LP_CHANNEL_QUANTITY | index(1),
    LP_CONFIG_CHANNEL_2_QUANTITY = LOADPROFILE_CONFIG | LP_CHANNEL_QUANTITY | index(2),
    LP_CONFIG_CHANNEL_1_PULSE_WEIGHT = LOADPROFILE_CONFIG | LP_CHANNEL_PULSE_WEIGHT | index(1),
    LP_CONFIG_CHANNEL_2_PULSE_WEIGHT = LOADPROFILE_CONFIG | LP_CHANNEL_PULSE_WEIGHT | index(2),
    LP_CONFIG_OUTAGE_LENGTH = LOADPROFILE_CONFIG | LP_OUTAGE_LENGTH,
    LP_DATA_RUNNING = LOADPROFILE_DATA | LPD_RUNNING,
    LP_DATA_NUM_BLOCKS = LOADPROFILE_DATA | LPD_NUM_BLOCKS,
    LP_DATA_VALID_INTERVALS = LOADPROFILE_DATA | LPD_VALID_INTERVALS,
    LP_DATA_LAST_INTERVAL_TIME = LOADPROFILE_DATA | LPD_LAST_INTERVAL_TIME,
    LP_DATA_MEMORY_USED = LOADPROFILE_DATA | LPD_MEMORY_USED,

    // Metrology
    INST_W = METROLOGY_DATA | INS_W,
    INST_W_PHA = METROLOGY_DATA | INS_W | PHASE_A,
    INST_W_PHB = METROLOGY_DATA | INS_W | PHASE_B,
    INST_W_PHC = METROLOGY_DATA | INS_W | PHASE_C,
    INST_VA = METROLOGY_DATA | INS_VA,
    INST_VAR = METROLOGY_DATA | INS_VAR,
    INST_V_PHA = METROLOGY_DATA | INS_V | PHASE_A,
    INST_V_PHB = METROLOGY_DATA | INS_V | PHASE_B,
    INST_V_PHC = METROLOGY_DATA | INS_V | PHASE_C,
    INST_A_PHA = METROLOGY_DATA | INS_A | PHASE_A,
    INST_A_PHB = METROLOGY_DATA | INS_A | PHASE_B,
    INST_A_PHC = METROLOGY_DATA | INS_A | PHASE_C,
    INST_A_NEUTRAL = METROLOGY_DATA | INS_A | PHASE_N,
    INST_PF = METROLOGY_DATA | INS_PF,
    INST_FREQ = METROLOGY_DATA | INS_FREQ,
    INST_TEMPERATURE = METROLOGY_DATA | INS_TEMPERATURE,

    // Misc
    MISC_NUM_OUTAGES = MISC_DATA | NUM_OUTAGES,
    MISC_NUM_TIMES_PROGRAMMED = MISC_DATA | NUM_TIMES_PROGRAMMED,
    MISC_DATE_LAST_PROGRAMMED = MISC_DATA | DATE_LAST_PROGRAMMED,
    MISC_DATE_LAST_OUTAGE = MISC_DATA | DATE_LAST_OUTAGE,
    MISC_CUM_OUTAGE_TIME = MISC_DATA | CUM_OUTAGE_TIME,
    MISC_DAYS_SINCE_DEMAND_RESET = MISC_DATA | DAYS_SINCE_DEMAND_RESET,
    MISC_DAYS_SINCE_TEST = MISC_DATA | DAYS_SINCE_TEST,

    // Mode control
    MODE_CONTROL_TEST_ACTIVE = MODE_CONTROL | TEST_MODE_ACTIVE,
    MODE_CONTROL_TEST_TIMEOUT = MODE_CONTROL | TEST_MODE_TIMEOUT,
    MODE_CONTROL_DISPLAY_MODE = MODE_CONTROL | DISPLAY_MODE,
    MODE_CONTROL_TEST_REMAINING = MODE_CONTROL | TEST_MODE_REMAINING,

    // Option board
    OPTION_BOARD_ID = OPTION_BOARD_DATA | OPT_BRD_ID,
    OPTION_BOARD_TYPE = OPTION_BOARD_DATA | OPT_BRD_TYPE,
    OPTION_BOARD_FW_VERSION = OPTION_BOARD_DATA | OPT_BRD_FW_VERSION,
    OPTION_BOARD_FW_REVISION = OPTION_BOARD_DATA | OPT_BRD_FW_REVISION,
    OPTION_BOARD_PRESENT = OPTION_BOARD_DATA | OPT_BRD_PRESENT,

    // Self read
    SR1_WH_DEL = SELF_READ_DATA | SR_BUFFER_1 | SR_ENERGY | WH_DELIVERED,
    SR1_WH_REC = SELF_READ_DATA | SR_BUFFER_1 | SR_ENERGY | WH_RECEIVED,
    SR1_MAX_W_DEL = SELF_READ_DATA | SR_BUFFER_1 | SR_DEMAND | MAX_DEMAND | WH_DELIVERED,
    SR1_TOO_MAX_W_DEL = SELF_READ_DATA | SR_BUFFER_1 | SR_DEMAND | MAX_DEMAND | TOO_DATA | WH_DELIVERED,
    SR2_WH_DEL = SELF_READ_DATA | SR_BUFFER_2 | SR_ENERGY | WH_DELIVERED,
    SR2_MAX_W_DEL = SELF_READ_DATA | SR_BUFFER_2 | SR_DEMAND | MAX_DEMAND | WH_DELIVERED,
    SR3_WH_DEL = SELF_READ_DATA | SR_BUFFER_3 | SR_ENERGY | WH_DELIVERED,
    SR4_WH_DEL = SELF_READ_DATA | SR_BUFFER_4 | SR_ENERGY | WH_DELIVERED,
    LAST_DR_WH_DEL = SELF_READ_DATA | SR_LAST_DEMAND_RESET | SR_ENERGY | WH_DELIVERED,
    LAST_DR_MAX_W_DEL = SELF_READ_DATA | SR_LAST_DEMAND_RESET | SR_DEMAND | MAX_DEMAND | WH_DELIVERED,
    LAST_DR_CUM_W_DEL = SELF_READ_DATA | SR_LAST_DEMAND_RESET | SR_DEMAND | CUM_DEMAND | WH_DELIVERED,
    SECOND_LAST_DR_WH_DEL = SELF_READ_DATA | SR_2ND_LAST_DEMAND_RESET | SR_ENERGY | WH_DELIVERED,
    SECOND_LAST_DR_MAX_W_DEL = SELF_READ_DATA | SR_2ND_LAST_DEMAND_RESET | SR_DEMAND | MAX_DEMAND | WH_DELIVERED,
    LAST_SEASON_WH_DEL = SELF_READ_DATA | SR_LAST_SEASON | SR_ENERGY | WH_DELIVERED,
    LAST_SEASON_MAX_W_DEL = SELF_READ_DATA | SR_LAST_SEASON | SR_DEMAND | MAX_DEMAND | WH_DELIVERED,

    // Site scan
    SITESCAN_SERVICE_TYPE = SITESCAN_DATA | SS_SERVICE_TYPE,
    SITESCAN_SERVICE_VOLTAGE = SITESCAN_DATA | SS_SERVICE_VOLTAGE,
    SITESCAN_V_ANGLE_PHA = SITESCAN_DATA | SS_V_ANGLE | PHASE_A,
    SITESCAN_V_ANGLE_PHB = SITESCAN_DATA | SS_V_ANGLE | PHASE_B,
    SITESCAN_V_ANGLE_PHC = SITESCAN_DATA | SS_V_ANGLE | PHASE_C,
    SITESCAN_A_ANGLE_PHA = SITESCAN_DATA | SS_A_ANGLE | PHASE_A,
    SITESCAN_A_ANGLE_PHB = SITESCAN_DATA | SS_A_ANGLE | PHASE_B,
    SITESCAN_A_ANGLE_PHC = SITESCAN_DATA | SS_A_ANGLE | PHASE_C,
    SITESCAN_V_MAG_PHA = SITESCAN_DATA | SS_V_MAGNITUDE | PHASE_A,
    SITESCAN_A_MAG_PHA = SITESCAN_DATA | SS_A_MAGNITUDE | PHASE_A,
    SITESCAN_DIAG_1_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(1),
    SITESCAN_DIAG_2_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(2),
    SITESCAN_DIAG_3_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(3),
    SITESCAN_DIAG_4_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(4),
    SITESCAN_DIAG_5_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(5),
    SITESCAN_DIAG_6_COUNT = SITESCAN_DATA | SS_DIAG_COUNT | index(6),
    SITESCAN_DIAG_ACTIVE = SITESCAN_DATA | SS_DIAG_ACTIVE,

    // Meter key
    METER_KEY_SW_VERSION = METER_KEY_DATA | MK_SW_VERSION,
    METER_KEY_MAX_DEMANDS = METER_KEY_DATA | MK_MAX_DEMANDS,
    METER_KEY_TOU_ENABLED = METER_KEY_DATA | MK_TOU_ENABLED,
    METER_KEY_LP_ENABLED = METER_KEY_DATA | MK_LP_ENABLED,
    METER_KEY_LP_CHANNELS = METER_KEY_DATA | MK_LP_CHANNELS,
    METER_KEY_VM_ENABLED = METER_KEY_DATA | MK_VM_ENABLED,

    // Voltage monitor
    VOLTMON_ENABLED = VOLTMON_DATA | VM_ENABLED,
    VOLTMON_INTERVAL_LENGTH = VOLTMON_DATA | VM_INTERVAL_LENGTH,
    VOLTMON_LOW_THRESHOLD = VOLTMON_DATA | VM_LOW_THRESHOLD,
    VOLTMON_HIGH_THRESHOLD = VOLTMON_DATA | VM_HIGH_THRESHOLD,
    VOLTMON_NUM_PHASES = VOLTMON_DATA | VM_NUM_PHASES,
    VOLTMON_VALID_INTERVALS = VOLTMON_DATA | VM_VALID_INTERVALS,
    VOLTMON_STATUS = VOLTMON_DATA | VM_STATUS,
    VOLTMON_LAST_VOLTAGE_PHA = VOLTMON_DATA | VM_LAST_VOLTAGE | PHASE_A,
    VOLTMON_LAST_VOLTAGE_PHB = VOLTMON_DATA | VM_LAST_VOLTAGE | PHASE_B,
    VOLTMON_LAST_VOLTAGE_PHC = VOLTMON_DATA | VM_LAST_VOLTAGE | PHASE_C,

    // Power quality
    POWER_QUALITY_SAG_COUNT = PQ_DATA | PQ_SAG_COUNT,
    POWER_QUALITY_SWELL_COUNT = PQ_DATA | PQ_SWELL_COUNT,
    POWER_QUALITY_SAG_DURATION = PQ_DATA | PQ_SAG_DURATION,
    POWER_QUALITY_SAG_THRESHOLD = PQ_DATA | PQ_SAG_THRESHOLD,
    POWER_QUALITY_SWELL_THRESHOLD = PQ_DATA | PQ_SWELL_THRESHOLD,
    POWER_QUALITY_LAST_SAG_DATE = PQ_DATA | PQ_LAST_SAG_DATE,
    POWER_QUALITY_LAST_SWELL_DATE = PQ_DATA | PQ_LAST_SWELL_DATE,
    POWER_QUALITY_MOMENTARY_COUNT = PQ_DATA | PQ_MOMENTARY_COUNT,
    POWER_QUALITY_SUSTAINED_COUNT = PQ_DATA | PQ_SUSTAINED_COUNT,

    // Constants
    CONSTANT_FW_VERSION = CONSTANT_DATA | FW_VERSION,
    CONSTANT_FW_REVISION = CONSTANT_DATA | FW_REVISION,
    CONSTANT_FW_BUILD = CONSTANT_DATA | FW_BUILD,
    CONSTANT_SW_VERSION = CONSTANT_DATA | SW_VERSION,
    CONSTANT_UNIT_ID = CONSTANT_DATA | UNIT_ID,
    CONSTANT_SERIAL_NUMBER = CONSTANT_DATA | SERIAL_NUMBER,
    CONSTANT_PROGRAM_ID = CONSTANT_DATA | PROGRAM_ID,
    CONSTANT_USER_DATA_1 = CONSTANT_DATA | USER_DATA | index(1),
    CONSTANT_USER_DATA_2 = CONSTANT_DATA | USER_DATA | index(2),
    CONSTANT_USER_DATA_3 = CONSTANT_DATA | USER_DATA | index(3),
    CONSTANT_METER_TYPE = CONSTANT_DATA | METER_TYPE,
}
