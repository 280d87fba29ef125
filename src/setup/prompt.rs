//! Line-based prompts for the interactive setup

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::NotaResult;

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> NotaResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> NotaResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask a question and return the trimmed answer
    pub fn ask(&mut self, label: &str) -> NotaResult<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default().trim().to_string())
    }

    /// Ask a question, keeping `current` when the answer is empty
    pub fn ask_with_default(&mut self, label: &str, current: &str) -> NotaResult<String> {
        let answer = if current.is_empty() {
            self.ask(label)?
        } else {
            self.ask(&format!("{} [{}]", label, current))?
        };

        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    /// Ask a yes/no question
    pub fn confirm(&mut self, label: &str, default: bool) -> NotaResult<bool> {
        let hint = if default { "yes" } else { "no" };
        let answer = self.ask(&format!("{} (yes/no) [{}]", label, hint))?;

        Ok(match answer.to_lowercase().as_str() {
            "" => default,
            "y" | "yes" | "s" | "sim" => true,
            _ => false,
        })
    }

    /// Read a multi-line answer terminated by a line containing only `.`
    ///
    /// An empty first line keeps `current`.
    pub fn ask_multiline(&mut self, label: &str, current: &str) -> NotaResult<String> {
        writeln!(
            self.output,
            "{} (finish with a line containing only '.'; empty line keeps the current text):",
            label
        )?;
        self.output.flush()?;

        let mut lines: Vec<String> = Vec::new();
        while let Some(line) = self.read_line()? {
            if lines.is_empty() && line.trim().is_empty() {
                return Ok(current.to_string());
            }
            if line.trim() == "." {
                break;
            }
            lines.push(line);
        }

        if lines.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(lines.join("\n"))
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
