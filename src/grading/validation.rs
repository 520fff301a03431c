use super::bands::{GradeBand, MAX_PERCENTAGE, MIN_PERCENTAGE};
use super::letters::LetterBreakpoint;

const MAX_POINTS: f64 = 4.0;

/// Check that `bands` partition `[0, 100]` and `letters` are usable.
///
/// Bands must be ordered highest first, each band's `low` meeting the next band's
/// `high`, with points that never rise as the percentage falls. Letter breakpoints
/// must be strictly descending and end at 0.
/// Returns all validation errors at once (not just the first).
pub fn validate_table(bands: &[GradeBand], letters: &[LetterBreakpoint]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if bands.is_empty() {
        errors.push("bands: table is empty".to_string());
    }

    if let Some(first) = bands.first() {
        if first.high != MAX_PERCENTAGE {
            errors.push(format!("bands[0].high: must be {}, got {}", MAX_PERCENTAGE, first.high));
        }
    }
    if let Some(last) = bands.last() {
        if last.low != MIN_PERCENTAGE {
            errors.push(format!(
                "bands[{}].low: must be {}, got {}",
                bands.len() - 1,
                MIN_PERCENTAGE,
                last.low
            ));
        }
    }

    for (i, band) in bands.iter().enumerate() {
        if band.low >= band.high {
            errors.push(format!(
                "bands[{}]: low {} must be below high {}",
                i, band.low, band.high
            ));
        }
        if !(0.0..=MAX_POINTS).contains(&band.points) {
            errors.push(format!(
                "bands[{}].points: {} outside 0-{}",
                i, band.points, MAX_POINTS
            ));
        }
    }

    for (i, pair) in bands.windows(2).enumerate() {
        let (upper, lower) = (&pair[0], &pair[1]);
        if upper.low > lower.high {
            errors.push(format!(
                "bands[{}]..bands[{}]: gap between {} and {}",
                i,
                i + 1,
                lower.high,
                upper.low
            ));
        } else if upper.low < lower.high {
            errors.push(format!(
                "bands[{}]..bands[{}]: overlap between {} and {}",
                i,
                i + 1,
                upper.low,
                lower.high
            ));
        }
        if lower.points > upper.points {
            errors.push(format!(
                "bands[{}].points: {} exceeds higher band's {}",
                i + 1,
                lower.points,
                upper.points
            ));
        }
    }

    if letters.is_empty() {
        errors.push("letters: table is empty".to_string());
    }
    for (i, pair) in letters.windows(2).enumerate() {
        if pair[1].min_points >= pair[0].min_points {
            errors.push(format!(
                "letters[{}]: '{}' breakpoint {} not below '{}' at {}",
                i + 1,
                pair[1].letter,
                pair[1].min_points,
                pair[0].letter,
                pair[0].min_points
            ));
        }
    }
    if let Some(last) = letters.last() {
        if last.min_points != 0.0 {
            errors.push(format!(
                "letters[{}]: lowest breakpoint must be 0, got {}",
                letters.len() - 1,
                last.min_points
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{BANDED_SCALE, EXTENDED_LETTERS, SIMPLE_LETTERS};

    #[test]
    fn test_builtin_tables_valid() {
        assert!(validate_table(&BANDED_SCALE, &EXTENDED_LETTERS).is_ok());
        assert!(validate_table(&BANDED_SCALE, &SIMPLE_LETTERS).is_ok());
    }

    #[test]
    fn test_gap_detected() {
        let bands = [
            GradeBand::new(50.0, 100.0, 4.0),
            GradeBand::new(0.0, 45.0, 0.0),
        ];
        let errors = validate_table(&bands, &SIMPLE_LETTERS).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("gap"));
    }

    #[test]
    fn test_overlap_detected() {
        let bands = [
            GradeBand::new(40.0, 100.0, 4.0),
            GradeBand::new(0.0, 45.0, 0.0),
        ];
        let errors = validate_table(&bands, &SIMPLE_LETTERS).unwrap_err();
        assert!(errors[0].contains("overlap"));
    }

    #[test]
    fn test_bounds_and_points_checked() {
        let bands = [
            GradeBand::new(50.0, 90.0, 4.5),
            GradeBand::new(10.0, 50.0, 1.0),
        ];
        let errors = validate_table(&bands, &SIMPLE_LETTERS).unwrap_err();
        // top not at 100, bottom not at 0, points above 4
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.starts_with("bands[0].high")));
        assert!(errors.iter().any(|e| e.starts_with("bands[1].low")));
        assert!(errors.iter().any(|e| e.starts_with("bands[0].points")));
    }

    #[test]
    fn test_non_monotonic_points() {
        let bands = [
            GradeBand::new(50.0, 100.0, 2.0),
            GradeBand::new(0.0, 50.0, 3.0),
        ];
        let errors = validate_table(&bands, &SIMPLE_LETTERS).unwrap_err();
        assert!(errors[0].contains("exceeds"));
    }

    #[test]
    fn test_bad_letter_order() {
        let letters = [
            LetterBreakpoint::new(2.0, "C"),
            LetterBreakpoint::new(3.0, "B"),
            LetterBreakpoint::new(0.0, "F"),
        ];
        let errors = validate_table(&BANDED_SCALE, &letters).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("letters[1]"));
    }

    #[test]
    fn test_empty_tables() {
        let errors = validate_table(&[], &[]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
