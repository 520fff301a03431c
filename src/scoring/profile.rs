/// Maximum marks per exam component for a credit-hour value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarksProfile {
    pub max_mids: f64,
    pub max_final: f64,
    pub max_sectional: f64,
    pub total: f64,
}

impl MarksProfile {
    pub const THREE_CREDIT: MarksProfile = MarksProfile {
        max_mids: 20.0,
        max_final: 30.0,
        max_sectional: 10.0,
        total: 60.0,
    };

    pub const TWO_CREDIT: MarksProfile = MarksProfile {
        max_mids: 15.0,
        max_final: 20.0,
        max_sectional: 5.0,
        total: 40.0,
    };

    /// Fallback for every other credit-hour value: a single obtained total out of 100,
    /// entered in the mids slot.
    pub const GENERIC: MarksProfile = MarksProfile {
        max_mids: 0.0,
        max_final: 0.0,
        max_sectional: 0.0,
        total: 100.0,
    };

    pub fn for_credit_hours(credit_hours: f64) -> Self {
        if credit_hours == 3.0 {
            Self::THREE_CREDIT
        } else if credit_hours == 2.0 {
            Self::TWO_CREDIT
        } else {
            Self::GENERIC
        }
    }

    pub fn is_generic(&self) -> bool {
        *self == Self::GENERIC
    }
}
