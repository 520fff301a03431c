use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::config::{ColorMode, StudentInfo};
use crate::grading::{GradeTable, FAILING_LETTER};
use crate::scoring::Course;
use crate::transcript::{TranscriptSummary, TranscriptTotals};

const TITLE: &str = "GPA TRANSCRIPT";
const NAME_WIDTH: usize = 30;
const MIN_NAME_WIDTH: usize = 12;
const GRADE_WIDTH: usize = 8;
const POINTS_WIDTH: usize = 8;
const CREDITS_WIDTH: usize = 10;
const QUALITY_WIDTH: usize = 15;
const LABEL_WIDTH: usize = 24;

/// Display settings shared by the renderers.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub decimals: usize,
    pub use_colors: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            use_colors: false,
        }
    }
}

/// Resolve a color mode against stdout
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn name_column_width(term_width: Option<usize>) -> usize {
    let fixed = GRADE_WIDTH + POINTS_WIDTH + CREDITS_WIDTH + QUALITY_WIDTH;
    match term_width {
        Some(w) if w < NAME_WIDTH + fixed => w.saturating_sub(fixed).max(MIN_NAME_WIDTH),
        _ => NAME_WIDTH,
    }
}

/// Truncate a course name to fit the column, counting chars rather than bytes
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn paint_letter(padded: String, letter: &str, use_colors: bool) -> String {
    if !use_colors {
        return padded;
    }
    match letter {
        "A" => padded.green().to_string(),
        "B+" | "B" => padded.cyan().to_string(),
        "C" | "D" => padded.yellow().to_string(),
        l if l == FAILING_LETTER => padded.red().to_string(),
        _ => padded.dimmed().to_string(),
    }
}

fn format_course_row(course: &Course, name_width: usize, opts: &FormatOptions) -> String {
    let name = format!("{:<width$}", truncate_name(course.name(), name_width - 1), width = name_width);
    let letter = paint_letter(
        format!("{:<width$}", course.grade_letter(), width = GRADE_WIDTH),
        course.grade_letter(),
        opts.use_colors,
    );
    format!(
        "{}{}{:<pw$}{:<cw$}{}",
        name,
        letter,
        format_number(course.grade_value(), opts.decimals),
        format_number(course.credit_hours(), opts.decimals),
        format_number(course.quality_points(), opts.decimals),
        pw = POINTS_WIDTH,
        cw = CREDITS_WIDTH,
    )
}

fn format_student(student: &StudentInfo) -> Vec<String> {
    let fields = [
        ("Name", &student.name),
        ("Email", &student.email),
        ("Roll Number", &student.roll_number),
    ];
    fields
        .iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}: {}", label, v))
        })
        .collect()
}

/// Format the totals and GPA lines
pub fn format_summary(totals: &TranscriptTotals, gpa: f64, opts: &FormatOptions) -> String {
    let gpa_str = format_number(gpa, opts.decimals);
    let gpa_str = if opts.use_colors {
        gpa_str.bold().to_string()
    } else {
        gpa_str
    };
    [
        format!(
            "{:<lw$}{}",
            "Total Quality Points:",
            format_number(totals.total_quality_points, opts.decimals),
            lw = LABEL_WIDTH
        ),
        format!(
            "{:<lw$}{}",
            "Total Credits:",
            format_number(totals.total_credits, opts.decimals),
            lw = LABEL_WIDTH
        ),
        format!("{:<lw$}{}", "GPA:", gpa_str, lw = LABEL_WIDTH),
    ]
    .join("\n")
}

/// Format a transcript: optional student header, one row per course, then totals.
pub fn format_transcript(
    summary: &TranscriptSummary,
    student: Option<&StudentInfo>,
    opts: &FormatOptions,
) -> String {
    if summary.is_empty() {
        return if summary.excluded > 0 {
            "Please enter course names for all courses.".to_string()
        } else {
            "No courses to display.".to_string()
        };
    }

    let name_width = name_column_width(get_terminal_width());
    let table_width = name_width + GRADE_WIDTH + POINTS_WIDTH + CREDITS_WIDTH + QUALITY_WIDTH;
    let rule = "=".repeat(table_width);
    let divider = "-".repeat(table_width);

    let mut lines = Vec::new();
    lines.push(rule.clone());
    let title = format!("{:^width$}", TITLE, width = table_width);
    lines.push(if opts.use_colors {
        title.bold().to_string()
    } else {
        title
    });
    lines.push(rule.clone());

    if let Some(student) = student {
        let header = format_student(student);
        if !header.is_empty() {
            lines.extend(header);
            lines.push(String::new());
        }
    }

    let heading = format!(
        "{:<nw$}{:<gw$}{:<pw$}{:<cw$}{}",
        "Course",
        "Grade",
        "Points",
        "Credits",
        "Quality Points",
        nw = name_width,
        gw = GRADE_WIDTH,
        pw = POINTS_WIDTH,
        cw = CREDITS_WIDTH,
    );
    lines.push(if opts.use_colors {
        heading.bold().to_string()
    } else {
        heading
    });
    lines.push(divider.clone());

    for course in &summary.courses {
        lines.push(format_course_row(course, name_width, opts));
    }

    lines.push(divider);
    lines.push(format_summary(&summary.totals, summary.gpa, opts));
    lines.push(rule);

    lines.join("\n")
}

/// Format courses as tab-separated values for scripting
/// Columns: name, letter, grade points, credits, quality points (no headers, no colors)
pub fn format_tsv(summary: &TranscriptSummary, decimals: usize) -> String {
    summary
        .courses
        .iter()
        .map(|course| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                course.name(),
                course.grade_letter(),
                format_number(course.grade_value(), decimals),
                format_number(course.credit_hours(), decimals),
                format_number(course.quality_points(), decimals),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonTranscript<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    student: Option<&'a StudentInfo>,
    courses: &'a [Course],
    totals: &'a TranscriptTotals,
    gpa: f64,
    excluded: usize,
}

/// Format the full transcript as pretty JSON, unrounded.
pub fn format_json(summary: &TranscriptSummary, student: Option<&StudentInfo>) -> Result<String> {
    let doc = JsonTranscript {
        student,
        courses: &summary.courses,
        totals: &summary.totals,
        gpa: summary.gpa,
        excluded: summary.excluded,
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize transcript")
}

/// Format the grade bands, one per line: percentage range, points, letter
pub fn format_scale(table: &GradeTable, use_colors: bool) -> String {
    table
        .bands()
        .iter()
        .map(|band| {
            let range = if band.high >= crate::grading::MAX_PERCENTAGE {
                format!("{:>3}-{}", band.low, band.high)
            } else {
                format!("{:>3}-<{}", band.low, band.high)
            };
            let letter = table.letter_for(band.points);
            let padded = format!("{:<3}", letter);
            format!(
                "{:<10}{:>6}  {}",
                range,
                format_number(band.points, 2),
                paint_letter(padded, letter, use_colors)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{AboveRange, GradingScale};
    use crate::scoring::CourseScorer;
    use crate::transcript::aggregate;

    fn sample_summary() -> TranscriptSummary {
        let scorer = CourseScorer::new(GradingScale::Extended, AboveRange::Clamp);
        aggregate(vec![
            scorer.score_by_marks("Programming", 3.0, 18.0, 27.0, 9.0),
            scorer.score_by_grade("Ethics", 2.0, "B"),
        ])
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.6, 2), "3.60");
        assert_eq!(format_number(18.0, 0), "18");
        assert_eq!(format_number(2.945, 3), "2.945");
    }

    #[test]
    fn test_format_transcript_rows_and_totals() {
        let result = format_transcript(&sample_summary(), None, &FormatOptions::default());
        assert!(result.contains("GPA TRANSCRIPT"));
        assert!(result.contains("Programming"));
        assert!(result.contains("Ethics"));
        assert!(result.contains("Total Quality Points:   18.00"));
        assert!(result.contains("Total Credits:          5.00"));
        assert!(result.contains("GPA:                    3.60"));
    }

    #[test]
    fn test_format_summary_alignment() {
        let totals = TranscriptTotals {
            total_quality_points: 18.0,
            total_credits: 5.0,
        };
        let result = format_summary(&totals, 3.6, &FormatOptions::default());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.find(|c: char| c.is_ascii_digit()), Some(LABEL_WIDTH));
        }
        assert!(lines[2].ends_with("3.60"));
    }

    #[test]
    fn test_format_transcript_row_columns() {
        let result = format_transcript(&sample_summary(), None, &FormatOptions::default());
        let row = result
            .lines()
            .find(|l| l.starts_with("Programming"))
            .unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cells, vec!["Programming", "A", "4.00", "3.00", "12.00"]);
    }

    #[test]
    fn test_format_transcript_student_header() {
        let student = StudentInfo {
            name: Some("Ayesha".to_string()),
            email: None,
            roll_number: Some("F21-104".to_string()),
        };
        let result = format_transcript(&sample_summary(), Some(&student), &FormatOptions::default());
        assert!(result.contains("Name: Ayesha"));
        assert!(result.contains("Roll Number: F21-104"));
        assert!(!result.contains("Email:"));
    }

    #[test]
    fn test_format_transcript_empty_states() {
        let empty = aggregate(Vec::new());
        assert_eq!(
            format_transcript(&empty, None, &FormatOptions::default()),
            "No courses to display."
        );

        let scorer = CourseScorer::default();
        let unnamed = aggregate(vec![scorer.score_by_grade("", 3.0, "A")]);
        assert_eq!(
            format_transcript(&unnamed, None, &FormatOptions::default()),
            "Please enter course names for all courses."
        );
    }

    #[test]
    fn test_format_transcript_custom_decimals() {
        let opts = FormatOptions {
            decimals: 3,
            use_colors: false,
        };
        let result = format_transcript(&sample_summary(), None, &opts);
        assert!(result.contains("3.600"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 20), "Short");
        assert_eq!(truncate_name("Exact", 5), "Exact");
        assert_eq!(truncate_name("Introduction to Algorithms", 15), "Introduction...");
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }

    #[test]
    fn test_name_column_width() {
        assert_eq!(name_column_width(None), NAME_WIDTH);
        assert_eq!(name_column_width(Some(200)), NAME_WIDTH);
        assert_eq!(name_column_width(Some(61)), 20);
        assert_eq!(name_column_width(Some(20)), MIN_NAME_WIDTH);
    }

    #[test]
    fn test_format_tsv() {
        let result = format_tsv(&sample_summary(), 2);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Programming\tA\t4.00\t3.00\t12.00");
        assert_eq!(lines[1], "Ethics\tB\t3.00\t2.00\t6.00");
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&aggregate(Vec::new()), 2), "");
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_summary(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("student").is_none());
        assert_eq!(value["courses"].as_array().unwrap().len(), 2);
        assert_eq!(value["courses"][0]["marks_details"]["final"], 27.0);
        assert_eq!(value["totals"]["total_credits"], 5.0);
        assert!((value["gpa"].as_f64().unwrap() - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_format_scale() {
        let table = GradeTable::default();
        let result = format_scale(&table, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 47);
        assert!(lines[0].starts_with(" 85-100"));
        assert!(lines[0].contains("4.00"));
        assert!(lines[46].contains("0.00"));
        assert!(lines[46].trim_end().ends_with('F'));
    }

    #[test]
    fn test_colors_never() {
        assert!(!should_use_colors(ColorMode::Never));
        assert!(should_use_colors(ColorMode::Always));
    }
}
