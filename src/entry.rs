//! Interactive course entry.
//!
//! Asks for optional student details, then for each course its name, credit
//! hours and either a letter grade or the marks for each exam component.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::StudentInfo;
use crate::grading::{GradingScale, MAX_PERCENTAGE, SELECTABLE_LETTERS};
use crate::prompt::Prompter;
use crate::scoring::MarksProfile;
use crate::worksheet::{EntryInput, Worksheet};

const MAX_COURSES: usize = 100;

/// What an entry session collected.
#[derive(Debug)]
pub struct EntrySession {
    pub student: Option<StudentInfo>,
    pub worksheet: Worksheet,
}

pub fn run_entry_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    scale: GradingScale,
) -> Result<EntrySession> {
    let student = ask_student(prompter)?;

    prompter.say("")?;
    let count: usize = prompter.prompt_value("Number of courses", None, |n: &usize| {
        if (1..=MAX_COURSES).contains(n) {
            Ok(())
        } else {
            Err(format!("enter a number between 1 and {}", MAX_COURSES))
        }
    })?;

    let mut worksheet = Worksheet::new();
    for i in 1..=count {
        prompter.say("")?;
        prompter.say(&format!("--- Course {} ---", i))?;
        let name = prompter.prompt("Course name: ")?;
        let credit_hours = ask_credit_hours(prompter, scale)?;
        let input = ask_input(prompter, scale, credit_hours)?;
        worksheet.push(name, credit_hours, input);
    }

    Ok(EntrySession { student, worksheet })
}

fn ask_student<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<StudentInfo>> {
    let optional = |s: String| if s.is_empty() { None } else { Some(s) };

    let student = StudentInfo {
        name: optional(prompter.prompt("Student name (optional): ")?),
        email: optional(prompter.prompt("Email (optional): ")?),
        roll_number: optional(prompter.prompt("Roll number (optional): ")?),
    };

    Ok(if student.is_empty() { None } else { Some(student) })
}

fn ask_credit_hours<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    scale: GradingScale,
) -> Result<f64> {
    match scale {
        GradingScale::Simple => prompter.prompt_value("Credit hours (1-4, steps of 0.5)", Some("3"), |c: &f64| {
            if (1.0..=4.0).contains(c) && (c * 2.0).fract() == 0.0 {
                Ok(())
            } else {
                Err("must be 1 to 4 in steps of 0.5".to_string())
            }
        }),
        GradingScale::Extended => {
            let hours: u32 = prompter.prompt_value("Credit hours (1-4)", Some("3"), |c: &u32| {
                if (1..=4).contains(c) {
                    Ok(())
                } else {
                    Err("must be a whole number from 1 to 4".to_string())
                }
            })?;
            Ok(f64::from(hours))
        }
    }
}

fn ask_input<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    scale: GradingScale,
    credit_hours: f64,
) -> Result<EntryInput> {
    let use_marks = scale.supports_marks() && prompter.prompt_yes_no("Enter exam marks?", true)?;
    if !use_marks {
        return ask_letter(prompter);
    }

    let profile = MarksProfile::for_credit_hours(credit_hours);
    if profile.is_generic() {
        let mids = ask_marks(prompter, "Total marks obtained", MAX_PERCENTAGE)?;
        return Ok(EntryInput::Marks {
            mids,
            final_marks: 0.0,
            sectional: 0.0,
        });
    }

    let mids = ask_marks(prompter, "Mids marks", profile.max_mids)?;
    let final_marks = ask_marks(prompter, "Final marks", profile.max_final)?;
    let sectional = ask_marks(prompter, "Sectional marks", profile.max_sectional)?;
    Ok(EntryInput::Marks {
        mids,
        final_marks,
        sectional,
    })
}

fn ask_letter<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<EntryInput> {
    let choices = SELECTABLE_LETTERS.join("/");
    loop {
        let letter = prompter
            .prompt_with_default(&format!("Grade ({})", choices), "A")?
            .to_uppercase();
        if SELECTABLE_LETTERS.contains(&letter.as_str()) {
            return Ok(EntryInput::Grade { letter });
        }
        prompter.say(&format!("  Invalid: enter one of {}. Try again.", choices))?;
    }
}

fn ask_marks<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, label: &str, max: f64) -> Result<f64> {
    prompter.prompt_value(&format!("{} (out of {})", label, max), None, |m: &f64| {
        if (0.0..=max).contains(m) {
            Ok(())
        } else {
            Err(format!("must be between 0 and {}", max))
        }
    })
}
