pub mod types;
pub mod validation;

pub use types::{CourseEntry, EntryId, EntryInput, Worksheet, DEFAULT_CREDIT_HOURS, DEFAULT_LETTER};
pub use validation::{entry_notes, validate_entries};
