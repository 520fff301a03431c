use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::grading::{AboveRange, GradingScale};

pub const DEFAULT_DECIMALS: usize = 2;
pub const MAX_DECIMALS: usize = 6;

/// Main configuration.
///
/// Every field is optional; a missing field falls back to its default.
///
/// Example YAML:
/// ```yaml
/// scale: extended
/// above_range: clamp
/// decimals: 2
/// color: auto
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grading scale: `simple` (letters only) or `extended` (letters or marks)
    #[serde(default)]
    pub scale: Option<GradingScale>,

    /// Percentages above 100: `clamp` to 100 or `reject` (scores 0.00)
    #[serde(default)]
    pub above_range: Option<AboveRange>,

    /// Decimal places shown for grade points, credits and GPA
    #[serde(default)]
    pub decimals: Option<usize>,

    /// Colored output: `auto`, `always` or `never`
    #[serde(default)]
    pub color: Option<ColorMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: Some(GradingScale::default()),
            above_range: Some(AboveRange::default()),
            decimals: Some(DEFAULT_DECIMALS),
            color: Some(ColorMode::default()),
        }
    }
}

impl Config {
    pub fn effective_scale(&self) -> GradingScale {
        self.scale.unwrap_or_default()
    }

    pub fn effective_above_range(&self) -> AboveRange {
        self.above_range.unwrap_or_default()
    }

    pub fn effective_decimals(&self) -> usize {
        self.decimals.unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn effective_color(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Optional header shown above the transcript.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StudentInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
}

impl StudentInfo {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.roll_number]
            .iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// A course sheet file.
///
/// Example YAML:
/// ```yaml
/// student:
///   name: Ayesha
///   roll_number: "F21-104"
/// courses:
///   - name: Programming
///     credit_hours: 3
///     marks: { mids: 18, final: 27, sectional: 9 }
///   - name: Ethics
///     credit_hours: 2
///     grade: B
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SheetFile {
    #[serde(default)]
    pub student: Option<StudentInfo>,

    #[serde(default)]
    pub courses: Vec<SheetCourse>,
}

/// One course row in a sheet. Exactly one of `grade` and `marks` must be set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SheetCourse {
    #[serde(default)]
    pub name: String,

    pub credit_hours: f64,

    #[serde(default)]
    pub grade: Option<String>,

    #[serde(default)]
    pub marks: Option<MarksInput>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MarksInput {
    pub mids: f64,

    #[serde(default, rename = "final")]
    pub final_marks: f64,

    #[serde(default)]
    pub sectional: f64,
}
