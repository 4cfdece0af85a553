//! `namedrecord demo` — Sample run over a built-in person record.

use namedrecord_config::AppConfig;
use namedrecord_core::{ConvertArgs, NameSource, Record, RecordBuilder, make_record};

use crate::value::CliValue;

/// The sample person, in field order.
pub fn sample_values() -> Vec<CliValue> {
    vec![
        CliValue::Text("Alex".into()),
        CliValue::Text("Smith".into()),
        CliValue::Int(45),
        CliValue::Text("brown".into()),
        CliValue::Text("green".into()),
    ]
}

pub fn banner() -> String {
    let message = "This is a sample run of the namedrecord application.";
    format!("\n{message}\n{}\n", "-".repeat(message.len()))
}

pub fn run(config: &AppConfig, auto: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", banner());

    let mut builder = RecordBuilder::stdio().with_reserved_words(config.naming.reserved_words);
    let record = sample(auto || config.naming.auto, &mut builder)?;

    println!("\n{record}");
    Ok(())
}

pub fn sample<N: NameSource>(
    auto: bool,
    builder: &mut RecordBuilder<N>,
) -> Result<Record<CliValue>, namedrecord_core::Error> {
    let args = ConvertArgs::new(sample_values());
    let args = if auto { args.auto() } else { args };
    make_record(args, builder)
}
