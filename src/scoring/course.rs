use serde::{Deserialize, Serialize};

/// How a course's grade was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    Grade,
    Marks,
}

/// Raw marks and the maxima they were scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarksDetails {
    pub mids: f64,
    #[serde(rename = "final")]
    pub final_marks: f64,
    pub sectional: f64,
    pub max_mids: f64,
    pub max_final: f64,
    pub max_sectional: f64,
    pub total_marks: f64,
    pub obtained: f64,
}

impl MarksDetails {
    /// Obtained marks as a share of the total, before any clamping.
    /// Falls outside [0, 100] when marks exceed their maxima or are negative.
    pub fn raw_percentage(&self) -> f64 {
        if self.total_marks > 0.0 {
            100.0 * self.obtained / self.total_marks
        } else {
            0.0
        }
    }
}

/// A scored course.
///
/// Built only by [`CourseScorer`](super::CourseScorer), which keeps
/// `quality_points == grade_value * credit_hours`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    name: String,
    credit_hours: f64,
    grade_letter: String,
    grade_value: f64,
    quality_points: f64,
    input_method: InputMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marks_details: Option<MarksDetails>,
}

impl Course {
    pub(crate) fn new(
        name: &str,
        credit_hours: f64,
        grade_letter: impl Into<String>,
        grade_value: f64,
        input_method: InputMethod,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            credit_hours,
            grade_letter: grade_letter.into(),
            grade_value,
            quality_points: grade_value * credit_hours,
            input_method,
            percentage: None,
            marks_details: None,
        }
    }

    pub(crate) fn with_percentage(mut self, percentage: Option<f64>) -> Self {
        self.percentage = percentage;
        self
    }

    pub(crate) fn with_marks(mut self, details: MarksDetails) -> Self {
        self.marks_details = Some(details);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit_hours(&self) -> f64 {
        self.credit_hours
    }

    pub fn grade_letter(&self) -> &str {
        &self.grade_letter
    }

    pub fn grade_value(&self) -> f64 {
        self.grade_value
    }

    pub fn quality_points(&self) -> f64 {
        self.quality_points
    }

    pub fn input_method(&self) -> InputMethod {
        self.input_method
    }

    pub fn percentage(&self) -> Option<f64> {
        self.percentage
    }

    pub fn marks_details(&self) -> Option<&MarksDetails> {
        self.marks_details.as_ref()
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
