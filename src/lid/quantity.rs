//! The "which quantity" sub-field shared by energy, demand and self-read
//! identifiers.

/// A measured quantity as it appears in the low byte of an energy or
/// demand identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub code: u32,
    /// Wording used for energy registers (e.g. `Wh d`).
    pub energy: &'static str,
    /// Wording used for demand registers (e.g. `W d`).
    pub demand: &'static str,
    /// The register may legitimately hold a negative value.
    pub signed: bool,
    /// A kilo/mega prefix may be applied to the wording.
    pub scalable: bool,
}

macro_rules! quantities {
    {
        $($name:ident = [$code:literal, $energy:literal, $demand:literal $(, $flag:ident)*],)*
    } => {
        $(pub const $name: u32 = $code;)*

        const QUANTITIES: &[Quantity] = &[
            $(
                Quantity {
                    code: $code,
                    energy: $energy,
                    demand: $demand,
                    signed: quantities!(@has signed $($flag)*),
                    scalable: !quantities!(@has unscaled $($flag)*),
                },
            )*
        ];
    };

    (@has $want:ident) => { false };
    (@has signed signed $($rest:ident)*) => { true };
    (@has unscaled unscaled $($rest:ident)*) => { true };
    (@has $want:ident $other:ident $($rest:ident)*) => { quantities!(@has $want $($rest)*) };
}

quantities! {
    AH_PHASE_A = [0xA0, "Ah (a)", "A (a)"],
    AH_PHASE_B = [0xA1, "Ah (b)", "A (b)"],
    AH_PHASE_C = [0xA2, "Ah (c)", "A (c)"],
    AH_NEUTRAL = [0xA3, "Ah (n)", "A (n)"],
    AH_AGG = [0xA4, "Ah agg", "A agg"],
    VH_PHASE_A = [0xA5, "Vh (a)", "V (a)"],
    VH_PHASE_B = [0xA6, "Vh (b)", "V (b)"],
    VH_PHASE_C = [0xA7, "Vh (c)", "V (c)"],
    VH_AVG = [0xA8, "Vh avg", "V avg"],
    V2H_AGG = [0xA9, "V2h agg", "V2 agg"],
    I2H_AGG = [0xAA, "I2h agg", "I2 agg"],
    QH_DELIVERED = [0xAB, "Qh d", "Q d"],
    QH_RECEIVED = [0xAC, "Qh r", "Q r"],
    VAH_DEL_ARITH = [0xAD, "VAh d arith", "VA d arith"],
    VAH_REC_ARITH = [0xAE, "VAh r arith", "VA r arith"],
    VAH_DEL_VECT = [0xAF, "VAh d vect", "VA d vect"],
    VAH_REC_VECT = [0xB0, "VAh r vect", "VA r vect"],
    VAH_LAG = [0xB1, "VAh lag", "VA lag"],
    VAH_Q1 = [0xB2, "VAh Q1", "VA Q1"],
    VAH_Q2 = [0xB3, "VAh Q2", "VA Q2"],
    VAH_Q3 = [0xB4, "VAh Q3", "VA Q3"],
    VAH_Q4 = [0xB5, "VAh Q4", "VA Q4"],
    VARH_DELIVERED = [0xB6, "varh d", "var d"],
    VARH_RECEIVED = [0xB7, "varh r", "var r"],
    VARH_NET = [0xB8, "varh net", "var net", signed],
    VARH_Q1 = [0xB9, "varh Q1", "var Q1"],
    VARH_Q2 = [0xBA, "varh Q2", "var Q2"],
    VARH_Q3 = [0xBB, "varh Q3", "var Q3"],
    VARH_Q4 = [0xBC, "varh Q4", "var Q4"],
    VARH_LAG = [0xBD, "varh lag", "var lag"],
    WH_DELIVERED = [0xBE, "Wh d", "W d"],
    WH_RECEIVED = [0xBF, "Wh r", "W r"],
    WH_NET = [0xC0, "Wh net", "W net", signed],
    WH_UNI = [0xC1, "Wh uni", "W uni"],
    WH_PHASE_A = [0xC2, "Wh (a)", "W (a)"],
    WH_PHASE_B = [0xC3, "Wh (b)", "W (b)"],
    WH_PHASE_C = [0xC4, "Wh (c)", "W (c)"],
    PF_AVG = [0xC5, "PF avg", "PF avg", signed, unscaled],
}

/// Quantity code requesting every programmed secondary quantity at once.
pub const ALL_QUANTITIES: u32 = 0xFF;

impl Quantity {
    pub fn from_code(code: u32) -> Option<&'static Quantity> {
        QUANTITIES.iter().find(|q| q.code == code)
    }

    pub fn all() -> &'static [Quantity] {
        QUANTITIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_from_table() {
        let net = Quantity::from_code(WH_NET).unwrap();
        assert!(net.signed);
        assert!(net.scalable);

        let pf = Quantity::from_code(PF_AVG).unwrap();
        assert!(pf.signed);
        assert!(!pf.scalable);

        let del = Quantity::from_code(WH_DELIVERED).unwrap();
        assert!(!del.signed);
        assert_eq!(del.energy, "Wh d");
        assert_eq!(del.demand, "W d");
    }

    #[test]
    fn codes_are_unique() {
        let all = Quantity::all();
        assert_eq!(all.len(), 38);

        for (i, a) in all.iter().enumerate() {
            assert!(all.iter().skip(i + 1).all(|b| b.code != a.code));
        }
    }

    #[test]
    fn wildcard_is_not_a_quantity() {
        assert!(Quantity::from_code(ALL_QUANTITIES).is_none());
    }
}
