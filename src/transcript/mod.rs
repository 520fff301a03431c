pub mod aggregate;

pub use aggregate::{aggregate, TranscriptSummary, TranscriptTotals};
