//! Record Builder — values plus (optional) names in, [`Record`] out.
//!
//! When the caller supplies names they are sanitized and paired with the
//! values. When they don't, the builder's [`NameSource`] is asked for one
//! name per value, in order.

use std::fmt;
use std::io;

use crate::error::{Error, Result};
use crate::keywords::ReservedWords;
use crate::record::Record;
use crate::sanitize::Sanitizer;
use crate::source::{ConsoleNames, NameSource};

/// The console name source bound to stdin/stdout.
pub type StdioNames = ConsoleNames<io::StdinLock<'static>, io::Stdout>;

/// Builds records using a sanitizer and a name source.
pub struct RecordBuilder<N = StdioNames> {
    sanitizer: Sanitizer,
    source: N,
}

impl RecordBuilder<StdioNames> {
    /// A builder that prompts on the terminal for missing names.
    pub fn stdio() -> Self {
        Self::new(ConsoleNames::stdio())
    }
}

impl<N: NameSource> RecordBuilder<N> {
    /// A builder using `source` for missing names and the Python keyword
    /// table for reserved words.
    pub fn new(source: N) -> Self {
        Self {
            sanitizer: Sanitizer::default(),
            source,
        }
    }

    pub fn with_reserved_words(mut self, reserved: ReservedWords) -> Self {
        self.sanitizer = Sanitizer::new(reserved);
        self
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn into_source(self) -> N {
        self.source
    }

    /// Borrow this builder as one that shares its name source.
    pub fn by_ref(&mut self) -> RecordBuilder<&mut N> {
        RecordBuilder {
            sanitizer: self.sanitizer,
            source: &mut self.source,
        }
    }

    /// Build a record from `values`.
    ///
    /// With `names = None` each value's `Display` form is handed to the
    /// name source to collect a name. Supplied names must match the value
    /// count or this fails with [`Error::LengthMismatch`].
    pub fn build<T, I>(&mut self, values: I, names: Option<Vec<String>>) -> Result<Record<T>>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let sanitizer = self.sanitizer;
        build_from(&sanitizer, &mut self.source, values, names)
    }

    /// Like [`RecordBuilder::build`] but collects missing names from
    /// `source` instead of the builder's own.
    pub fn build_with<T, I>(
        &self,
        values: I,
        names: Option<Vec<String>>,
        source: &mut dyn NameSource,
    ) -> Result<Record<T>>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        build_from(&self.sanitizer, source, values, names)
    }

    /// Build from caller-supplied names. Never touches the name source, so
    /// values need not implement `Display`.
    pub fn from_names<T, I, S>(&self, values: I, names: &[S]) -> Result<Record<T>>
    where
        I: IntoIterator<Item = T>,
        S: AsRef<str>,
    {
        assemble(&self.sanitizer, values.into_iter().collect(), names)
    }
}

/// Build a record, prompting on the terminal when `names` is `None`.
pub fn build<T, I>(values: I, names: Option<Vec<String>>) -> Result<Record<T>>
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    RecordBuilder::stdio().build(values, names)
}

/// Build a record from supplied names using the Python keyword table.
pub fn from_names<T, I, S>(values: I, names: &[S]) -> Result<Record<T>>
where
    I: IntoIterator<Item = T>,
    S: AsRef<str>,
{
    assemble(&Sanitizer::default(), values.into_iter().collect(), names)
}

fn build_from<T, I, N>(
    sanitizer: &Sanitizer,
    source: &mut N,
    values: I,
    names: Option<Vec<String>>,
) -> Result<Record<T>>
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
    N: NameSource + ?Sized,
{
    let values: Vec<T> = values.into_iter().collect();

    let raw = match names {
        Some(names) => {
            tracing::debug!(count = names.len(), "Using supplied attribute names");
            names
        }
        None => {
            tracing::info!(count = values.len(), "Collecting attribute names");
            collect_names(source, &values)?
        }
    };

    assemble(sanitizer, values, &raw)
}

fn collect_names<T, N>(source: &mut N, values: &[T]) -> Result<Vec<String>>
where
    T: fmt::Display,
    N: NameSource + ?Sized,
{
    values
        .iter()
        .enumerate()
        .map(|(index, value)| source.name_for(index, value).map_err(Error::from))
        .collect()
}

fn assemble<T, S: AsRef<str>>(
    sanitizer: &Sanitizer,
    values: Vec<T>,
    raw: &[S],
) -> Result<Record<T>> {
    if raw.len() != values.len() {
        tracing::warn!(
            values = values.len(),
            names = raw.len(),
            "Attribute name count does not match value count"
        );
        return Err(Error::LengthMismatch {
            values: values.len(),
            names: raw.len(),
        });
    }

    if values.is_empty() {
        tracing::debug!("No values, returning an empty record");
        return Ok(Record::empty());
    }

    let names = sanitizer.sanitize_all(raw);

    if let Some((index, name)) = names
        .iter()
        .enumerate()
        .find(|(_, name)| !sanitizer.is_identifier(name))
    {
        tracing::error!(index, name = %name, "Sanitizer produced an invalid identifier");
        return Err(Error::InvalidIdentifier {
            index,
            name: name.clone(),
        });
    }

    tracing::info!(fields = ?names, "Record built");
    Ok(Record::from_parts(names, values))
}
