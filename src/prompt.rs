use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Line-oriented question/answer helper over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a full line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before all questions were answered");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    pub fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Keep asking until the answer parses and passes `check`.
    pub fn prompt_value<T, F>(&mut self, message: &str, default: Option<&str>, check: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> Result<(), String>,
    {
        loop {
            let raw = match default {
                Some(d) => self.prompt_with_default(message, d)?,
                None => self.prompt(&format!("{}: ", message))?,
            };
            match raw.parse::<T>() {
                Ok(value) => match check(&value) {
                    Ok(()) => return Ok(value),
                    Err(e) => self.say(&format!("  Invalid: {}. Try again.", e))?,
                },
                Err(_) => self.say(&format!("  Invalid: '{}' is not a valid value. Try again.", raw))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.prompt("> ").unwrap(), "hello");
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "> ");
    }

    #[test]
    fn test_prompt_with_default() {
        let mut p = prompter("\nvalue\n");
        assert_eq!(p.prompt_with_default("Name", "none").unwrap(), "none");
        assert_eq!(p.prompt_with_default("Name", "none").unwrap(), "value");
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut p = prompter("\nYES\nn\n");
        assert!(p.prompt_yes_no("Go?", true).unwrap());
        assert!(p.prompt_yes_no("Go?", false).unwrap());
        assert!(!p.prompt_yes_no("Go?", true).unwrap());
    }

    #[test]
    fn test_prompt_value_retries() {
        let mut p = prompter("abc\n9\n3\n");
        let value: u32 = p
            .prompt_value("Credits", None, |v: &u32| {
                if *v <= 4 {
                    Ok(())
                } else {
                    Err("must be at most 4".to_string())
                }
            })
            .unwrap();
        assert_eq!(value, 3);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("'abc' is not a valid value"));
        assert!(out.contains("must be at most 4"));
    }

    #[test]
    fn test_prompt_eof_errors() {
        let mut p = prompter("");
        assert!(p.prompt("> ").is_err());
    }
}
