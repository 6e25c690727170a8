use log::warn;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::data::label::Label;
use crate::error::PerceptronError;

/// One input pair read from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub in1: f64,
    pub in2: f64,
}

/// Read-evaluate loop over a text stream.
///
/// Iterating yields one `Query` per pair of whitespace-separated numbers,
/// prompting on `writer` before each value. Numbers may share a line or be
/// spread across lines. The sequence ends at end of input (even halfway
/// through a pair) or once the stop flag is set.
///
/// A token that is not a number yields `Err(InvalidNumber)`; the remainder of
/// its line is dropped and the next call starts a fresh pair.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    stop_flag: Option<Arc<AtomicBool>>,
    finished: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Session {
            reader,
            writer,
            pending: VecDeque::new(),
            stop_flag: None,
            finished: false,
        }
    }

    /// Ends the sequence before the next query once `flag` is set.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// Writes the classification for the last query.
    pub fn respond(&mut self, output: Label) -> Result<(), PerceptronError> {
        writeln!(self.writer, "output: {output}\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Gives back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn stopped(&self) -> bool {
        self.stop_flag.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Next whitespace-separated token, reading more lines as needed.
    /// `Ok(None)` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, PerceptronError> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Stray non-UTF-8 bytes become a token that fails to parse.
            let text = String::from_utf8_lossy(&line);
            self.pending.extend(text.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Prompts for and parses one value.
    fn read_value(&mut self, prompt: &str) -> Result<Option<f64>, PerceptronError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        match token.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!("rejected input token {token:?}");
                self.pending.clear();
                Err(PerceptronError::InvalidNumber { token })
            }
        }
    }

    fn read_query(&mut self) -> Result<Option<Query>, PerceptronError> {
        let Some(in1) = self.read_value("\nin1: ")? else {
            return Ok(None);
        };
        let Some(in2) = self.read_value("in2: ")? else {
            return Ok(None);
        };
        Ok(Some(Query { in1, in2 }))
    }
}

impl<R: BufRead, W: Write> Iterator for Session<R, W> {
    type Item = Result<Query, PerceptronError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.stopped() {
            return None;
        }
        match self.read_query() {
            Ok(Some(query)) => Some(Ok(query)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(PerceptronError::Io(e)) => {
                self.finished = true;
                Some(Err(PerceptronError::Io(e)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
