//! Line-based text I/O consumed by the game.
//!
//! The core only talks to [`InputProvider`] and [`OutputSink`]. The binary
//! plugs in [`TerminalConsole`]; tests use [`ScriptedIo`].

use crossterm::style::Stylize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Supplies one line of player input for a prompt.
pub trait InputProvider {
    /// Blocks until a line is available. Returns an empty string at end of input.
    fn read_line(&mut self, prompt: &str) -> String;

    /// True once a read has hit end of input.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Accepts lines of game text. Fire-and-forget.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Anything that can both prompt and display.
pub trait Console: InputProvider + OutputSink {}

impl<T: InputProvider + OutputSink> Console for T {}

/// Collects output lines in memory.
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Stdin/stdout console. Section headers are highlighted.
#[derive(Debug)]
pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
    closed: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            closed: false,
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("===") && trimmed.ends_with("===")
}

impl InputProvider for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> String {
        {
            let mut out = self.stdout.lock();
            let _ = write!(out, "{}", prompt);
            let _ = out.flush();
        }

        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                String::new()
            }
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(e) => {
                tracing::warn!("failed to read input: {}", e);
                self.closed = true;
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl OutputSink for TerminalConsole {
    fn write_line(&mut self, line: &str) {
        let mut out = self.stdout.lock();
        let _ = if is_header(line) {
            writeln!(out, "{}", line.bold().yellow())
        } else {
            writeln!(out, "{}", line)
        };
    }
}

/// Replays queued input lines and records everything written.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
    closed: bool,
}

impl ScriptedIo {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
            closed: false,
        }
    }

    pub fn push_input(&mut self, line: &str) {
        self.inputs.push_back(line.to_string());
        self.closed = false;
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whole transcript joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl InputProvider for ScriptedIo {
    fn read_line(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        match self.inputs.pop_front() {
            Some(line) => line,
            None => {
                self.closed = true;
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl OutputSink for ScriptedIo {
    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_io_replays_in_order() {
        let mut io = ScriptedIo::new(["1", "2"]);
        assert_eq!(io.read_line("> "), "1");
        assert_eq!(io.read_line("> "), "2");
        assert!(!io.is_closed());
        assert_eq!(io.prompts, vec!["> ", "> "]);
    }

    #[test]
    fn test_scripted_io_closes_when_exhausted() {
        let mut io = ScriptedIo::new(Vec::<String>::new());
        assert_eq!(io.read_line("> "), "");
        assert!(io.is_closed());

        io.push_input("3");
        assert!(!io.is_closed());
        assert_eq!(io.read_line("> "), "3");
    }

    #[test]
    fn test_scripted_io_records_output() {
        let mut io = ScriptedIo::default();
        io.write_line("Hello");
        io.write_line("World");
        assert!(io.contains("Wor"));
        assert_eq!(io.transcript(), "Hello\nWorld");
    }

    #[test]
    fn test_vec_sink() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line("one");
        assert_eq!(lines, vec!["one"]);
    }

    #[test]
    fn test_header_detection() {
        assert!(is_header("=== VILLAGE ==="));
        assert!(is_header("\n=== INVENTORY ==="));
        assert!(!is_header("1: Go to blacksmith"));
    }
}
