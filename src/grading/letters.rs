use serde::Serialize;

pub const FAILING_LETTER: &str = "F";

/// The minimum grade-point value at which a letter applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterBreakpoint {
    pub min_points: f64,
    pub letter: &'static str,
}

impl LetterBreakpoint {
    pub const fn new(min_points: f64, letter: &'static str) -> Self {
        Self { min_points, letter }
    }
}

/// Breakpoints for the banded scale, highest first.
pub static EXTENDED_LETTERS: [LetterBreakpoint; 6] = [
    LetterBreakpoint::new(3.75, "A"),
    LetterBreakpoint::new(3.50, "B+"),
    LetterBreakpoint::new(3.00, "B"),
    LetterBreakpoint::new(2.00, "C"),
    LetterBreakpoint::new(1.00, "D"),
    LetterBreakpoint::new(0.00, FAILING_LETTER),
];

/// Breakpoints for the flat five-letter scale, highest first.
pub static SIMPLE_LETTERS: [LetterBreakpoint; 5] = [
    LetterBreakpoint::new(3.75, "A"),
    LetterBreakpoint::new(3.00, "B"),
    LetterBreakpoint::new(2.00, "C"),
    LetterBreakpoint::new(1.00, "D"),
    LetterBreakpoint::new(0.00, FAILING_LETTER),
];

/// Highest letter whose breakpoint is `<= points`.
///
/// `breakpoints` must be ordered highest first.
pub fn letter_for(breakpoints: &[LetterBreakpoint], points: f64) -> &'static str {
    breakpoints
        .iter()
        .find(|bp| points >= bp.min_points)
        .map(|bp| bp.letter)
        .unwrap_or(FAILING_LETTER)
}
