//! Run Log Parser
//!
//! Single forward pass over the GA's text output. The parser tracks which
//! generation is current and whether its record has been opened by a
//! `Fitness:` line; chromosome lines are only accepted once the current
//! generation has a record.
//!
//! Chromosome tokens are decoded from a fixed-width prefix: the GA prints
//! each amplitude with `%.5f`, so the first 7 characters of a token are the
//! real part (`0.70711`). Changing `TOKEN_WIDTH` changes parsing semantics
//! for existing logs.

use crate::error::{Result, ViewerError};
use crate::protocol::{classify_line, LogLine};
use crate::run_log::{Chromosome, RunLog};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Significant characters of each chromosome token.
pub const TOKEN_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    NoGeneration,
    GenerationSet(i64),
    RecordOpen(i64),
}

pub struct LogParser {
    state: ParserState,
    line: usize,
    run_log: RunLog,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::NoGeneration,
            line: 0,
            run_log: RunLog::new(),
        }
    }

    /// Feed one raw line.
    pub fn feed(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let line = raw.trim();

        match classify_line(line) {
            Some(LogLine::Generation(value)) => {
                let generation = self.parse_int(value, "generation")?;
                self.state = ParserState::GenerationSet(generation);
            }
            Some(LogLine::Fitness(value)) => {
                let fitness = self.parse_int(value, "fitness")?;
                let generation = match self.state {
                    ParserState::NoGeneration => {
                        return Err(self.precondition("Fitness line before any Generation line"))
                    }
                    ParserState::GenerationSet(g) | ParserState::RecordOpen(g) => g,
                };
                self.run_log.open_record(generation, fitness);
                self.state = ParserState::RecordOpen(generation);
            }
            Some(LogLine::Chromosome(payload)) => {
                let generation = match self.state {
                    ParserState::GenerationSet(g) | ParserState::RecordOpen(g) => g,
                    ParserState::NoGeneration => {
                        return Err(self.precondition("Chromosome line before any Generation line"))
                    }
                };
                let chromosome = self.decode_chromosome(payload)?;
                // A re-announced generation keeps appending to its existing record.
                if !self.run_log.push_chromosome(generation, chromosome) {
                    return Err(self.precondition(&format!(
                        "Chromosome line for generation {} before any Fitness line for it",
                        generation
                    )));
                }
                self.state = ParserState::RecordOpen(generation);
            }
            None => {}
        }
        Ok(())
    }

    /// Consume the parser and return the completed log.
    pub fn finish(self) -> RunLog {
        debug!(
            "Parsed {} lines into {} generations",
            self.line,
            self.run_log.len()
        );
        self.run_log
    }

    fn parse_int(&self, value: &str, field: &str) -> Result<i64> {
        value.parse::<i64>().map_err(|e| ViewerError::ParseError {
            line: self.line,
            message: format!("invalid {} '{}': {}", field, value, e),
        })
    }

    fn decode_chromosome(&self, payload: &str) -> Result<Chromosome> {
        let normalized = payload
            .trim_matches(|c: char| c == '[' || c == ']')
            .replace(' ', "")
            .replace("+-", "-");

        normalized
            .split(',')
            .map(|token| {
                decode_token(token).ok_or_else(|| ViewerError::ParseError {
                    line: self.line,
                    message: format!("invalid chromosome token '{}'", token),
                })
            })
            .collect()
    }

    fn precondition(&self, message: &str) -> ViewerError {
        ViewerError::PreconditionError {
            line: self.line,
            message: message.to_string(),
        }
    }
}

/// `1 - x^2` where `x` is the first `TOKEN_WIDTH` characters of the token.
/// Non-finite amplitudes (`nan`, `inf`) are rejected.
pub fn decode_token(token: &str) -> Option<f64> {
    let prefix: String = token.chars().take(TOKEN_WIDTH).collect();
    let amplitude = prefix.parse::<f64>().ok().filter(|a| a.is_finite())?;
    Some(1.0 - amplitude * amplitude)
}

/// Parse a sequence of lines into a run log. Any failure aborts the parse.
pub fn parse<I, S>(lines: I) -> Result<RunLog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}

pub fn parse_str(content: &str) -> Result<RunLog> {
    parse(content.lines())
}

/// Read and parse a log file.
pub fn load_file(path: &Path) -> Result<RunLog> {
    let content = fs::read_to_string(path).map_err(|e| {
        ViewerError::IoError(format!("Error opening the file {}: {}", path.display(), e))
    })?;
    parse_str(&content)
}
