//! Line-oriented interactive prompt.

use std::io::{self, BufRead, Write};

/// Writes prompts to `output` and reads answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt`, read one line, and return it trimmed.
    ///
    /// End of input returns an empty string.
    ///
    /// # Errors
    /// Returns error if writing the prompt or reading the answer fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Write a full line to the prompt's output.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Consume the prompt, returning its output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut prompt = Prompt::new(Cursor::new("  octocat \r\n"), Vec::new());
        assert_eq!(prompt.ask("User: ").unwrap(), "octocat");
        assert_eq!(prompt.into_output(), b"User: ");
    }

    #[test]
    fn test_ask_reads_one_line_at_a_time() {
        let mut prompt = Prompt::new(Cursor::new("first\nsecond\n"), Vec::new());
        assert_eq!(prompt.ask("a").unwrap(), "first");
        assert_eq!(prompt.ask("b").unwrap(), "second");
    }

    #[test]
    fn test_ask_at_eof_is_empty() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.ask("? ").unwrap(), "");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        prompt.say("Repositories found:").unwrap();
        assert_eq!(
            String::from_utf8(prompt.into_output()).unwrap(),
            "Repositories found:\n"
        );
    }
}
