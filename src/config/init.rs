use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{save_config, ColorMode, Config, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::grading::{AboveRange, GradingScale};
use crate::prompt::Prompter;

/// Run the init wizard to create a config file.
///
/// With `accept_defaults` no questions are asked about settings. An existing file
/// is only replaced when `force` is set or the user agrees to overwrite it.
/// Returns the path written, or None if the user aborted.
pub fn run_init_wizard<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    path: &Path,
    accept_defaults: bool,
    force: bool,
) -> Result<Option<PathBuf>> {
    if path.exists() && !force {
        let overwrite = prompter.prompt_yes_no(
            &format!("Config already exists at {}. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            prompter.say("Aborted.")?;
            return Ok(None);
        }
    }

    let config = if accept_defaults {
        Config::default()
    } else {
        ask_settings(prompter)?
    };

    save_config(path, &config)?;
    prompter.say(&format!("Config written to {}", path.display()))?;
    Ok(Some(path.to_path_buf()))
}

fn ask_settings<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Config> {
    prompter.say("")?;
    prompter.say("The simple scale takes letter grades only (A=4, B=3, C=2, D=1, F=0).")?;
    prompter.say("The extended scale also takes exam marks and maps the percentage to grade points.")?;
    let scale = loop {
        let input = prompter.prompt_with_default("Grading scale (simple/extended)", "extended")?;
        match input.to_lowercase().as_str() {
            "simple" => break GradingScale::Simple,
            "extended" => break GradingScale::Extended,
            _ => prompter.say("  Invalid: enter 'simple' or 'extended'. Try again.")?,
        }
    };

    let above_range = if scale.supports_marks() {
        prompter.say("")?;
        prompter.say("Marks above the maximum give a percentage over 100.")?;
        let clamp = prompter.prompt_yes_no("Treat those as 100%? (n scores them as F)", true)?;
        if clamp {
            AboveRange::Clamp
        } else {
            AboveRange::Reject
        }
    } else {
        AboveRange::default()
    };

    prompter.say("")?;
    let decimals: usize = prompter.prompt_value(
        "Decimal places to display",
        Some(&DEFAULT_DECIMALS.to_string()),
        |d: &usize| {
            if *d <= MAX_DECIMALS {
                Ok(())
            } else {
                Err(format!("must be at most {}", MAX_DECIMALS))
            }
        },
    )?;

    Ok(Config {
        scale: Some(scale),
        above_range: Some(above_range),
        decimals: Some(decimals),
        color: Some(ColorMode::Auto),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::env;
    use std::fs;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_accept_defaults_writes_default_config() {
        let path = env::temp_dir().join("gpa_calc_test_init_defaults.yaml");
        let _ = fs::remove_file(&path);

        let mut p = prompter("");
        let written = run_init_wizard(&mut p, &path, true, false).unwrap();
        assert_eq!(written, Some(path.clone()));
        assert_eq!(load_config(Some(path.clone())).unwrap(), Config::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_wizard_answers() {
        let path = env::temp_dir().join("gpa_calc_test_init_answers.yaml");
        let _ = fs::remove_file(&path);

        // bogus scale, then extended; reject overflow; 3 decimals
        let mut p = prompter("fancy\nextended\nn\n3\n");
        run_init_wizard(&mut p, &path, false, false).unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.scale, Some(GradingScale::Extended));
        assert_eq!(config.above_range, Some(AboveRange::Reject));
        assert_eq!(config.decimals, Some(3));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_simple_scale_skips_overflow_question() {
        let path = env::temp_dir().join("gpa_calc_test_init_simple.yaml");
        let _ = fs::remove_file(&path);

        let mut p = prompter("simple\n\n");
        run_init_wizard(&mut p, &path, false, false).unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.scale, Some(GradingScale::Simple));
        assert_eq!(config.above_range, Some(AboveRange::Clamp));
        assert_eq!(config.decimals, Some(2));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_existing_file_not_overwritten_without_consent() {
        let path = env::temp_dir().join("gpa_calc_test_init_existing.yaml");
        fs::write(&path, "decimals: 4\n").unwrap();

        let mut p = prompter("n\n");
        let written = run_init_wizard(&mut p, &path, true, false).unwrap();
        assert!(written.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "decimals: 4\n");

        run_init_wizard(&mut prompter(""), &path, true, true).unwrap();
        assert_eq!(load_config(Some(path.clone())).unwrap(), Config::default());

        let _ = fs::remove_file(&path);
    }
}
