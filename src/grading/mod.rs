pub mod bands;
pub mod letters;
pub mod scale;
pub mod validation;

pub use bands::{AboveRange, GradeBand, GradeTable, BANDED_SCALE, MAX_PERCENTAGE, MIN_PERCENTAGE};
pub use letters::{letter_for, LetterBreakpoint, EXTENDED_LETTERS, FAILING_LETTER, SIMPLE_LETTERS};
pub use scale::{GradingScale, LetterPoints, SELECTABLE_LETTERS};
pub use validation::validate_table;
