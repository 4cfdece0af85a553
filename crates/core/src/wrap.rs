//! Wrapping adapter — turn a producer of values into a producer of records.
//!
//! [`wrap`] takes a function returning an ordered collection and returns a
//! function with the same argument type that returns a [`Record`] instead.
//! Attribute names travel inside the arguments (see [`ConversionArgs`]) so
//! the producer itself never has to know about them.

use std::fmt;

use crate::builder::RecordBuilder;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::source::{AutoNames, NameSource};

/// Arguments that may carry attribute names for the wrapped producer.
pub trait ConversionArgs {
    /// Names the caller supplied, if any.
    fn attribute_names(&self) -> Option<Vec<String>>;

    /// Name every field automatically instead of asking the name source.
    /// Ignored when names were supplied.
    fn auto_attribute_names(&self) -> bool {
        false
    }
}

/// A producer called without arguments never supplies names.
impl ConversionArgs for () {
    fn attribute_names(&self) -> Option<Vec<String>> {
        None
    }
}

/// Wrap `producer` so its return value comes back as a [`Record`].
///
/// The wrapper reads the attribute names out of the arguments, calls the
/// producer with those same arguments, and builds a record from the values
/// it returned. A producer error is returned unchanged; builder errors are
/// converted into the producer's error type.
pub fn wrap<A, V, T, E, F, N>(
    mut producer: F,
    mut builder: RecordBuilder<N>,
) -> impl FnMut(A) -> std::result::Result<Record<T>, E>
where
    A: ConversionArgs,
    F: FnMut(A) -> std::result::Result<V, E>,
    V: IntoIterator<Item = T>,
    T: fmt::Display,
    E: From<Error>,
    N: NameSource,
{
    move |args: A| {
        let names = args.attribute_names();
        let auto = names.is_none() && args.auto_attribute_names();

        let values = producer(args)?;

        let record = if auto {
            tracing::debug!("auto_attribute_names set, skipping name collection");
            builder.build_with(values, None, &mut AutoNames)?
        } else {
            builder.build(values, names)?
        };
        Ok(record)
    }
}

/// Arguments for [`make_record`]: the values plus naming options.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs<T> {
    pub values: Vec<T>,
    pub attribute_names: Option<Vec<String>>,
    pub auto_attribute_names: bool,
}

impl<T> ConvertArgs<T> {
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            attribute_names: None,
            auto_attribute_names: false,
        }
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn auto(mut self) -> Self {
        self.auto_attribute_names = true;
        self
    }
}

impl<T> ConversionArgs for ConvertArgs<T> {
    fn attribute_names(&self) -> Option<Vec<String>> {
        self.attribute_names.clone()
    }

    fn auto_attribute_names(&self) -> bool {
        self.auto_attribute_names
    }
}

/// Convert `args.values` into a record: the identity producer, wrapped.
pub fn make_record<T, N>(args: ConvertArgs<T>, builder: &mut RecordBuilder<N>) -> Result<Record<T>>
where
    T: fmt::Display,
    N: NameSource,
{
    let mut convert = wrap(|args: ConvertArgs<T>| Ok::<_, Error>(args.values), builder.by_ref());
    convert(args)
}
