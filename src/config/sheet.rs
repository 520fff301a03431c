use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::schema::{SheetCourse, SheetFile};
use crate::worksheet::{EntryInput, Worksheet};

/// Load a course sheet from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML cannot be parsed.
pub fn load_sheet(path: &Path) -> Result<SheetFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read course sheet at {}", path.display()))?;

    parse_sheet(&content)
        .with_context(|| format!("Failed to parse course sheet: invalid YAML in {}", path.display()))
}

pub fn parse_sheet(content: &str) -> Result<SheetFile> {
    let sheet: SheetFile = serde_saphyr::from_str(content)?;
    Ok(sheet)
}

impl SheetCourse {
    fn to_input(&self) -> Result<EntryInput, &'static str> {
        match (&self.grade, &self.marks) {
            (Some(letter), None) => Ok(EntryInput::Grade {
                letter: letter.clone(),
            }),
            (None, Some(marks)) => Ok(EntryInput::Marks {
                mids: marks.mids,
                final_marks: marks.final_marks,
                sectional: marks.sectional,
            }),
            (Some(_), Some(_)) => Err("has both grade and marks, pick one"),
            (None, None) => Err("needs either a grade or marks"),
        }
    }
}

impl SheetFile {
    /// Build a worksheet from the sheet's course rows, in file order.
    /// Returns all shape errors at once (not just the first).
    pub fn to_worksheet(&self) -> Result<Worksheet, Vec<String>> {
        let mut sheet = Worksheet::new();
        let mut errors = Vec::new();

        for (i, course) in self.courses.iter().enumerate() {
            match course.to_input() {
                Ok(input) => {
                    sheet.push(course.name.clone(), course.credit_hours, input);
                }
                Err(e) => errors.push(format!("courses[{}]: {}", i, e)),
            }
        }

        if errors.is_empty() {
            Ok(sheet)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const SAMPLE: &str = r#"
courses:
  - name: Programming
    credit_hours: 3
    marks: { mids: 18, final: 27, sectional: 9 }
  - name: Ethics
    credit_hours: 2
    grade: B
"#;

    #[test]
    fn test_sheet_to_worksheet() {
        let sheet = parse_sheet(SAMPLE).unwrap();
        let worksheet = sheet.to_worksheet().unwrap();
        assert_eq!(worksheet.len(), 2);

        let entries: Vec<_> = worksheet.iter().collect();
        assert_eq!(entries[0].name, "Programming");
        assert_eq!(
            entries[0].input,
            EntryInput::Marks {
                mids: 18.0,
                final_marks: 27.0,
                sectional: 9.0
            }
        );
        assert_eq!(
            entries[1].input,
            EntryInput::Grade {
                letter: "B".to_string()
            }
        );
    }

    #[test]
    fn test_sheet_shape_errors_collected() {
        let yaml = r#"
courses:
  - name: Both
    credit_hours: 3
    grade: A
    marks: { mids: 10 }
  - name: Neither
    credit_hours: 3
"#;
        let sheet = parse_sheet(yaml).unwrap();
        let errors = sheet.to_worksheet().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("courses[0]"));
        assert!(errors[1].contains("either a grade or marks"));
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = parse_sheet("{}").unwrap();
        assert!(sheet.student.is_none());
        assert!(sheet.to_worksheet().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = env::temp_dir().join("gpa_calc_test_missing_sheet.yaml");
        let _ = std::fs::remove_file(&path);
        let err = load_sheet(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read course sheet"));
    }

    #[test]
    fn test_load_sheet_from_file() {
        let path = env::temp_dir().join("gpa_calc_test_sheet.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let sheet = load_sheet(&path).unwrap();
        assert_eq!(sheet.courses.len(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_yaml_errors() {
        assert!(parse_sheet("courses: [ {name: x").is_err());
        assert!(parse_sheet("courses:\n  - name: x\n    credit_hours: three\n    grade: A\n").is_err());
    }
}
