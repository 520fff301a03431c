use super::types::{EntryInput, Worksheet};
use crate::grading::{AboveRange, GradingScale, MAX_PERCENTAGE, SELECTABLE_LETTERS};
use crate::scoring::{CourseScorer, MarksProfile};

const MIN_CREDIT_HOURS: f64 = 1.0;
const MAX_CREDIT_HOURS: f64 = 4.0;

/// Check every entry against the input ranges the scale accepts.
///
/// Blank names are allowed; those rows are left out of the transcript instead.
/// Marks above their maxima are allowed too: the table's above-100 policy
/// decides how they score and [`entry_notes`] reports them.
/// Returns all validation errors at once (not just the first).
pub fn validate_entries(sheet: &Worksheet, scale: GradingScale) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, entry) in sheet.iter().enumerate() {
        if let Err(e) = check_credit_hours(entry.credit_hours, scale) {
            errors.push(format!("courses[{}].credit_hours: {}", i, e));
        }

        match &entry.input {
            EntryInput::Grade { letter } => {
                let known = SELECTABLE_LETTERS
                    .iter()
                    .any(|l| l.eq_ignore_ascii_case(letter));
                if !known {
                    errors.push(format!(
                        "courses[{}].grade: invalid '{}' - expected one of {}",
                        i,
                        letter,
                        SELECTABLE_LETTERS.join(", ")
                    ));
                }
            }
            EntryInput::Marks {
                mids,
                final_marks,
                sectional,
            } => {
                if !scale.supports_marks() {
                    errors.push(format!(
                        "courses[{}].marks: the {} scale only accepts letter grades",
                        i,
                        scale.name()
                    ));
                    continue;
                }
                let profile = MarksProfile::for_credit_hours(entry.credit_hours);
                check_marks(&mut errors, i, "mids", *mids);
                if !profile.is_generic() {
                    check_marks(&mut errors, i, "final", *final_marks);
                    check_marks(&mut errors, i, "sectional", *sectional);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-fatal remarks about how entries will be treated: unnamed rows left out of
/// the GPA, marks above their maxima and percentages above 100.
pub fn entry_notes(sheet: &Worksheet, scorer: &CourseScorer) -> Vec<String> {
    let mut notes = Vec::new();

    for entry in sheet.iter() {
        let label = sheet.label(entry.id()).unwrap_or_default();
        if !entry.is_named() {
            notes.push(format!("{} has no name and was left out of the GPA", label));
            continue;
        }

        let name = entry.name.trim();
        let course = entry.score(scorer);
        let Some(details) = course.marks_details() else {
            continue;
        };

        let components = [
            ("mids", details.mids, details.max_mids),
            ("final", details.final_marks, details.max_final),
            ("sectional", details.sectional, details.max_sectional),
        ];
        for (field, value, max) in components {
            if max > 0.0 && value > max {
                notes.push(format!(
                    "{} ({}): {} marks {} are above the maximum of {}",
                    label, name, field, value, max
                ));
            }
        }

        let raw = details.raw_percentage();
        if raw > MAX_PERCENTAGE {
            let treatment = match scorer.table().above_range() {
                AboveRange::Clamp => "counted as 100%",
                AboveRange::Reject => "scored as F",
            };
            notes.push(format!(
                "{} ({}): {:.2}% is above 100, {}",
                label, name, raw, treatment
            ));
        }
    }

    notes
}

fn check_credit_hours(credit_hours: f64, scale: GradingScale) -> Result<(), String> {
    if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&credit_hours) {
        return Err(format!(
            "{} outside {}-{}",
            credit_hours, MIN_CREDIT_HOURS, MAX_CREDIT_HOURS
        ));
    }
    match scale {
        GradingScale::Simple if (credit_hours * 2.0).fract() != 0.0 => {
            Err(format!("{} is not a multiple of 0.5", credit_hours))
        }
        GradingScale::Extended if credit_hours.fract() != 0.0 => {
            Err(format!("{} is not a whole number", credit_hours))
        }
        _ => Ok(()),
    }
}

fn check_marks(errors: &mut Vec<String>, index: usize, field: &str, value: f64) {
    if value.is_nan() || value < 0.0 {
        errors.push(format!(
            "courses[{}].marks.{}: {} is not a non-negative number",
            index, field, value
        ));
    }
}
