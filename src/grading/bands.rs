use serde::{Deserialize, Serialize};

use super::letters::{letter_for, LetterBreakpoint, EXTENDED_LETTERS};

pub const MIN_PERCENTAGE: f64 = 0.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// A percentage interval mapped to a fixed grade-point value.
///
/// Over real-valued percentages a band covers `[low, high)`. The band whose
/// `high` is 100 is closed on both ends so that a full score still lands in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeBand {
    pub low: f64,
    pub high: f64,
    pub points: f64,
}

impl GradeBand {
    pub const fn new(low: f64, high: f64, points: f64) -> Self {
        Self { low, high, points }
    }

    pub fn contains(&self, percentage: f64) -> bool {
        if percentage < self.low {
            return false;
        }
        percentage < self.high || (self.high >= MAX_PERCENTAGE && percentage <= self.high)
    }
}

/// Percentage-to-grade-point bands, highest first.
///
/// 46 passing bands from 40% up, then the failing band below 40%.
pub static BANDED_SCALE: [GradeBand; 47] = [
    GradeBand::new(85.0, 100.0, 4.00),
    GradeBand::new(84.0, 85.0, 3.95),
    GradeBand::new(83.0, 84.0, 3.90),
    GradeBand::new(82.0, 83.0, 3.85),
    GradeBand::new(81.0, 82.0, 3.80),
    GradeBand::new(80.0, 81.0, 3.75),
    GradeBand::new(79.0, 80.0, 3.70),
    GradeBand::new(78.0, 79.0, 3.65),
    GradeBand::new(77.0, 78.0, 3.60),
    GradeBand::new(76.0, 77.0, 3.55),
    GradeBand::new(75.0, 76.0, 3.50),
    GradeBand::new(74.0, 75.0, 3.45),
    GradeBand::new(73.0, 74.0, 3.40),
    GradeBand::new(72.0, 73.0, 3.35),
    GradeBand::new(71.0, 72.0, 3.30),
    GradeBand::new(70.0, 71.0, 3.25),
    GradeBand::new(69.0, 70.0, 3.20),
    GradeBand::new(68.0, 69.0, 3.15),
    GradeBand::new(67.0, 68.0, 3.10),
    GradeBand::new(66.0, 67.0, 3.05),
    GradeBand::new(65.0, 66.0, 3.00),
    GradeBand::new(64.0, 65.0, 2.94),
    GradeBand::new(63.0, 64.0, 2.88),
    GradeBand::new(62.0, 63.0, 2.82),
    GradeBand::new(61.0, 62.0, 2.76),
    GradeBand::new(60.0, 61.0, 2.70),
    GradeBand::new(59.0, 60.0, 2.63),
    GradeBand::new(58.0, 59.0, 2.56),
    GradeBand::new(57.0, 58.0, 2.49),
    GradeBand::new(56.0, 57.0, 2.42),
    GradeBand::new(55.0, 56.0, 2.35),
    GradeBand::new(54.0, 55.0, 2.28),
    GradeBand::new(53.0, 54.0, 2.21),
    GradeBand::new(52.0, 53.0, 2.14),
    GradeBand::new(51.0, 52.0, 2.07),
    GradeBand::new(50.0, 51.0, 2.00),
    GradeBand::new(49.0, 50.0, 1.90),
    GradeBand::new(48.0, 49.0, 1.80),
    GradeBand::new(47.0, 48.0, 1.70),
    GradeBand::new(46.0, 47.0, 1.60),
    GradeBand::new(45.0, 46.0, 1.50),
    GradeBand::new(44.0, 45.0, 1.40),
    GradeBand::new(43.0, 44.0, 1.30),
    GradeBand::new(42.0, 43.0, 1.20),
    GradeBand::new(41.0, 42.0, 1.10),
    GradeBand::new(40.0, 41.0, 1.00),
    GradeBand::new(0.0, 40.0, 0.00),
];

/// What to do with a percentage above 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AboveRange {
    /// Treat it as exactly 100.
    #[default]
    Clamp,
    /// Match no band, so the failing fallback applies.
    Reject,
}

/// Ordered grade bands plus the letter breakpoints used to name their values.
#[derive(Debug, Clone, Copy)]
pub struct GradeTable {
    bands: &'static [GradeBand],
    letters: &'static [LetterBreakpoint],
    above_range: AboveRange,
}

impl Default for GradeTable {
    fn default() -> Self {
        Self::banded(AboveRange::default())
    }
}

impl GradeTable {
    pub const fn new(
        bands: &'static [GradeBand],
        letters: &'static [LetterBreakpoint],
        above_range: AboveRange,
    ) -> Self {
        Self {
            bands,
            letters,
            above_range,
        }
    }

    /// The built-in percentage scale.
    pub fn banded(above_range: AboveRange) -> Self {
        Self::new(&BANDED_SCALE, &EXTENDED_LETTERS, above_range)
    }

    pub fn bands(&self) -> &'static [GradeBand] {
        self.bands
    }

    pub fn above_range(&self) -> AboveRange {
        self.above_range
    }

    /// Bring a raw percentage into `[0, 100]`.
    ///
    /// Negative and NaN values become 0. Values above 100 are clamped or
    /// rejected (`None`) depending on the table's `AboveRange` policy.
    pub fn normalize(&self, percentage: f64) -> Option<f64> {
        if percentage.is_nan() || percentage < MIN_PERCENTAGE {
            return Some(MIN_PERCENTAGE);
        }
        if percentage > MAX_PERCENTAGE {
            return match self.above_range {
                AboveRange::Clamp => Some(MAX_PERCENTAGE),
                AboveRange::Reject => None,
            };
        }
        Some(percentage)
    }

    /// Grade points of the first band containing `percentage`, if any.
    pub fn try_lookup(&self, percentage: f64) -> Option<f64> {
        let percentage = self.normalize(percentage)?;
        self.bands
            .iter()
            .find(|band| band.contains(percentage))
            .map(|band| band.points)
    }

    /// Grade points and letter for `percentage`. Falls back to 0.00 when no band matches.
    pub fn lookup(&self, percentage: f64) -> (f64, &'static str) {
        let points = self.try_lookup(percentage).unwrap_or(0.0);
        (points, self.letter_for(points))
    }

    pub fn letter_for(&self, points: f64) -> &'static str {
        letter_for(self.letters, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_contains_half_open() {
        let band = GradeBand::new(84.0, 85.0, 3.95);
        assert!(band.contains(84.0));
        assert!(band.contains(84.99));
        assert!(!band.contains(85.0));
        assert!(!band.contains(83.99));
    }

    #[test]
    fn test_top_band_closed_at_100() {
        let band = BANDED_SCALE[0];
        assert!(band.contains(100.0));
        assert!(band.contains(85.0));
        assert!(!band.contains(100.01));
    }

    #[test]
    fn test_passing_band_count() {
        let passing = BANDED_SCALE.iter().filter(|b| b.points > 0.0).count();
        assert_eq!(passing, 46);
    }

    #[test]
    fn test_exactly_one_band_matches_across_range() {
        // Every hundredth of a percent from 0 to 100
        for i in 0..=10_000 {
            let p = i as f64 / 100.0;
            let matches = BANDED_SCALE.iter().filter(|b| b.contains(p)).count();
            assert_eq!(matches, 1, "percentage {} matched {} bands", p, matches);
        }
    }

    #[test]
    fn test_lookup_boundaries() {
        let table = GradeTable::default();
        assert_eq!(table.lookup(100.0), (4.00, "A"));
        assert_eq!(table.lookup(85.0), (4.00, "A"));
        assert_eq!(table.lookup(84.5), (3.95, "A"));
        assert_eq!(table.lookup(75.0), (3.50, "B+"));
        assert_eq!(table.lookup(65.0), (3.00, "B"));
        assert_eq!(table.lookup(64.99), (2.94, "C"));
        assert_eq!(table.lookup(50.0), (2.00, "C"));
        assert_eq!(table.lookup(40.0), (1.00, "D"));
        assert_eq!(table.lookup(39.99), (0.00, "F"));
        assert_eq!(table.lookup(0.0), (0.00, "F"));
    }

    #[test]
    fn test_lookup_negative_and_nan_treated_as_zero() {
        let table = GradeTable::default();
        assert_eq!(table.lookup(-12.0), (0.00, "F"));
        assert_eq!(table.lookup(f64::NAN), (0.00, "F"));
    }

    #[test]
    fn test_above_range_clamp() {
        let table = GradeTable::banded(AboveRange::Clamp);
        assert_eq!(table.try_lookup(130.0), Some(4.00));
        assert_eq!(table.lookup(130.0), (4.00, "A"));
    }

    #[test]
    fn test_above_range_reject() {
        let table = GradeTable::banded(AboveRange::Reject);
        assert_eq!(table.try_lookup(100.5), None);
        assert_eq!(table.lookup(100.5), (0.00, "F"));
        // 100 itself is still in range
        assert_eq!(table.try_lookup(100.0), Some(4.00));
    }

    #[test]
    fn test_above_range_serde() {
        let policy: AboveRange = serde_saphyr::from_str("reject").unwrap();
        assert_eq!(policy, AboveRange::Reject);
    }
}
