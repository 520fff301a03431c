use serde::Serialize;

use crate::scoring::Course;

/// Running sums over a set of courses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TranscriptTotals {
    pub total_quality_points: f64,
    pub total_credits: f64,
}

impl TranscriptTotals {
    pub fn add(&mut self, course: &Course) {
        self.total_quality_points += course.quality_points();
        self.total_credits += course.credit_hours();
    }

    /// Quality points per credit hour, or 0 when there are no credits.
    pub fn gpa(&self) -> f64 {
        if self.total_credits > 0.0 {
            self.total_quality_points / self.total_credits
        } else {
            0.0
        }
    }
}

/// The courses that counted toward a GPA and the totals derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    pub courses: Vec<Course>,
    pub totals: TranscriptTotals,
    pub gpa: f64,
    /// Courses left out because their name was blank.
    pub excluded: usize,
}

impl TranscriptSummary {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Sum quality points and credit hours over named courses and derive the GPA.
///
/// Blank-named courses are skipped and counted in `excluded`. No rounding is applied.
pub fn aggregate<I>(courses: I) -> TranscriptSummary
where
    I: IntoIterator<Item = Course>,
{
    let mut totals = TranscriptTotals::default();
    let mut included = Vec::new();
    let mut excluded = 0;

    for course in courses {
        if !course.is_named() {
            excluded += 1;
            continue;
        }
        totals.add(&course);
        included.push(course);
    }

    TranscriptSummary {
        courses: included,
        gpa: totals.gpa(),
        totals,
        excluded,
    }
}
