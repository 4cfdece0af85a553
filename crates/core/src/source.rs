//! Name sources — where field names come from when the caller supplies none.
//!
//! The builder asks its source for one raw name per value, in order. The
//! console source prompts on a terminal; the others exist for unattended
//! runs and tests.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::NameSourceError;

/// Supplies one raw (unsanitized) name per value.
pub trait NameSource {
    /// Produce the name for the value at `index`. `value` is the string
    /// form shown to whoever picks the name.
    fn name_for(&mut self, index: usize, value: &dyn fmt::Display)
    -> Result<String, NameSourceError>;
}

impl<N: NameSource + ?Sized> NameSource for &mut N {
    fn name_for(
        &mut self,
        index: usize,
        value: &dyn fmt::Display,
    ) -> Result<String, NameSourceError> {
        (**self).name_for(index, value)
    }
}

impl<N: NameSource + ?Sized> NameSource for Box<N> {
    fn name_for(
        &mut self,
        index: usize,
        value: &dyn fmt::Display,
    ) -> Result<String, NameSourceError> {
        (**self).name_for(index, value)
    }
}

/// The prompt written before reading each name.
pub fn prompt_text(value: &dyn fmt::Display) -> String {
    format!("Enter an attribute name for the value \"{value}\": ")
}

/// Interactive source: writes a prompt, reads one line per value.
pub struct ConsoleNames<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleNames<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl ConsoleNames<io::StdinLock<'static>, io::Stdout> {
    /// Bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> NameSource for ConsoleNames<R, W> {
    fn name_for(
        &mut self,
        index: usize,
        value: &dyn fmt::Display,
    ) -> Result<String, NameSourceError> {
        self.writer.write_all(prompt_text(value).as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(NameSourceError::Exhausted { index });
        }

        let name = line.trim_end_matches(['\r', '\n']).to_string();
        tracing::info!(index, value = %value, name = %name, "Collected attribute name");
        Ok(name)
    }
}

/// Names every field automatically by returning an empty name, which the
/// sanitizer turns into `field_<index>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoNames;

impl NameSource for AutoNames {
    fn name_for(
        &mut self,
        index: usize,
        _value: &dyn fmt::Display,
    ) -> Result<String, NameSourceError> {
        tracing::debug!(index, "Auto-naming attribute");
        Ok(String::new())
    }
}

/// Hands out a fixed list of answers in order.
#[derive(Debug, Clone, Default)]
pub struct FixedNames {
    names: VecDeque<String>,
    asked: Vec<String>,
}

impl FixedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// String forms of the values names were requested for, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.names.len()
    }
}

impl NameSource for FixedNames {
    fn name_for(
        &mut self,
        index: usize,
        value: &dyn fmt::Display,
    ) -> Result<String, NameSourceError> {
        self.asked.push(value.to_string());
        self.names
            .pop_front()
            .ok_or(NameSourceError::Exhausted { index })
    }
}
