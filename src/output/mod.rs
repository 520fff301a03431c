pub mod formatter;

pub use formatter::{
    format_json, format_number, format_scale, format_summary, format_transcript, format_tsv,
    should_use_colors, FormatOptions,
};
