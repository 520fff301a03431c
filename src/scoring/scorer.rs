use super::course::{Course, InputMethod, MarksDetails};
use super::profile::MarksProfile;
use crate::grading::{AboveRange, GradeTable, GradingScale, BANDED_SCALE};

/// Turns raw course input into [`Course`] records for one grading scale.
///
/// Both entry points are pure and never fail: unknown letters score 0.00 and a
/// zero marks total yields 0%.
#[derive(Debug, Clone, Copy)]
pub struct CourseScorer {
    scale: GradingScale,
    table: GradeTable,
}

impl Default for CourseScorer {
    fn default() -> Self {
        Self::new(GradingScale::default(), AboveRange::default())
    }
}

impl CourseScorer {
    pub fn new(scale: GradingScale, above_range: AboveRange) -> Self {
        Self {
            scale,
            table: GradeTable::new(&BANDED_SCALE, scale.breakpoints(), above_range),
        }
    }

    pub fn scale(&self) -> GradingScale {
        self.scale
    }

    pub fn table(&self) -> &GradeTable {
        &self.table
    }

    /// Score a course from a directly chosen letter.
    pub fn score_by_grade(&self, name: &str, credit_hours: f64, grade_letter: &str) -> Course {
        let grade_value = self.scale.points_for_letter(grade_letter);
        let letter = grade_letter.to_uppercase();
        let percentage = self.scale.display_percentage(&letter);

        Course::new(name, credit_hours, letter, grade_value, InputMethod::Grade)
            .with_percentage(percentage)
    }

    /// Score a course from exam marks.
    ///
    /// The maxima come from [`MarksProfile::for_credit_hours`]. Under the generic
    /// profile `mids` is the whole obtained score out of 100 and the other two
    /// components are ignored.
    pub fn score_by_marks(
        &self,
        name: &str,
        credit_hours: f64,
        mids: f64,
        final_marks: f64,
        sectional: f64,
    ) -> Course {
        let profile = MarksProfile::for_credit_hours(credit_hours);
        let (final_marks, sectional) = if profile.is_generic() {
            (0.0, 0.0)
        } else {
            (final_marks, sectional)
        };

        let obtained = mids + final_marks + sectional;
        let details = MarksDetails {
            mids,
            final_marks,
            sectional,
            max_mids: profile.max_mids,
            max_final: profile.max_final,
            max_sectional: profile.max_sectional,
            total_marks: profile.total,
            obtained,
        };

        let raw = details.raw_percentage();
        let (grade_value, letter) = self.table.lookup(raw);

        // Stored percentage stays in [0, 100]; a rejected one has none
        Course::new(name, credit_hours, letter, grade_value, InputMethod::Marks)
            .with_percentage(self.table.normalize(raw))
            .with_marks(details)
    }
}
