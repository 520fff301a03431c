use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::letters::{LetterBreakpoint, EXTENDED_LETTERS, SIMPLE_LETTERS};

/// Grade points awarded for a directly chosen letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterPoints {
    pub letter: &'static str,
    pub points: f64,
}

impl LetterPoints {
    const fn new(letter: &'static str, points: f64) -> Self {
        Self { letter, points }
    }
}

static SIMPLE_LETTER_POINTS: [LetterPoints; 5] = [
    LetterPoints::new("A", 4.0),
    LetterPoints::new("B", 3.0),
    LetterPoints::new("C", 2.0),
    LetterPoints::new("D", 1.0),
    LetterPoints::new("F", 0.0),
];

// Anything else, F included, is worth 0.00.
static EXTENDED_LETTER_POINTS: [LetterPoints; 4] = [
    LetterPoints::new("A", 4.00),
    LetterPoints::new("B", 3.00),
    LetterPoints::new("C", 2.00),
    LetterPoints::new("D", 1.00),
];

/// Approximate percentage shown next to a directly chosen letter.
static LETTER_PERCENTAGES: [(&str, f64); 5] = [
    ("A", 85.0),
    ("B", 70.0),
    ("C", 55.0),
    ("D", 45.0),
    ("F", 30.0),
];

const UNKNOWN_LETTER_PERCENTAGE: f64 = 30.0;

/// Letters offered when a grade is picked directly, for either scale.
pub const SELECTABLE_LETTERS: [&str; 5] = ["A", "B", "C", "D", "F"];

/// Which calculator variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GradingScale {
    /// Flat five-letter mapping, letters only, continuous credit hours.
    Simple,
    /// Letters or exam marks, percentage bands, whole credit hours.
    #[default]
    Extended,
}

impl GradingScale {
    pub fn letter_points(self) -> &'static [LetterPoints] {
        match self {
            GradingScale::Simple => &SIMPLE_LETTER_POINTS,
            GradingScale::Extended => &EXTENDED_LETTER_POINTS,
        }
    }

    pub fn breakpoints(self) -> &'static [LetterBreakpoint] {
        match self {
            GradingScale::Simple => &SIMPLE_LETTERS,
            GradingScale::Extended => &EXTENDED_LETTERS,
        }
    }

    /// Grade points for a letter, an exact case-insensitive match. Unknown letters
    /// (surrounding whitespace included) score 0.00.
    pub fn points_for_letter(self, letter: &str) -> f64 {
        self.letter_points()
            .iter()
            .find(|lp| lp.letter.eq_ignore_ascii_case(letter))
            .map(|lp| lp.points)
            .unwrap_or(0.0)
    }

    /// Display percentage for a directly chosen letter. Only the extended scale has one.
    pub fn display_percentage(self, letter: &str) -> Option<f64> {
        match self {
            GradingScale::Simple => None,
            GradingScale::Extended => {
                let pct = LETTER_PERCENTAGES
                    .iter()
                    .find(|(l, _)| l.eq_ignore_ascii_case(letter))
                    .map(|(_, p)| *p)
                    .unwrap_or(UNKNOWN_LETTER_PERCENTAGE);
                Some(pct)
            }
        }
    }

    pub fn supports_marks(self) -> bool {
        matches!(self, GradingScale::Extended)
    }

    pub fn name(self) -> &'static str {
        match self {
            GradingScale::Simple => "simple",
            GradingScale::Extended => "extended",
        }
    }
}
