//! `namedrecord build` — Build a record from command-line values.

use namedrecord_config::AppConfig;
use namedrecord_core::{ConvertArgs, NameSource, Record, RecordBuilder, ReservedWords, make_record};

use crate::value::CliValue;

pub struct BuildOptions {
    pub values: Vec<String>,
    pub names: Option<Vec<String>>,
    pub auto: bool,
    pub reserved_words: Option<ReservedWords>,
    pub json: bool,
}

pub fn run(config: &AppConfig, options: BuildOptions) -> Result<(), Box<dyn std::error::Error>> {
    let reserved = options
        .reserved_words
        .unwrap_or(config.naming.reserved_words);
    let mut builder = RecordBuilder::stdio().with_reserved_words(reserved);

    let record = convert(config, options.values, options.names, options.auto, &mut builder)?;
    println!("{}", render(&record, options.json)?);
    Ok(())
}

/// Parse the raw values and turn them into a record.
///
/// `--auto` or `naming.auto` skips prompting; explicit names always win.
pub fn convert<N: NameSource>(
    config: &AppConfig,
    values: Vec<String>,
    names: Option<Vec<String>>,
    auto: bool,
    builder: &mut RecordBuilder<N>,
) -> Result<Record<CliValue>, namedrecord_core::Error> {
    let values: Vec<CliValue> = values.iter().map(|v| CliValue::parse(v)).collect();
    tracing::debug!(count = values.len(), "Parsed command-line values");

    let args = ConvertArgs {
        values,
        attribute_names: names,
        auto_attribute_names: auto || config.naming.auto,
    };
    make_record(args, builder)
}

pub fn render(record: &Record<CliValue>, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(record)
    } else {
        Ok(record.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namedrecord_core::FixedNames;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn named_values_render_as_text() {
        let mut builder = RecordBuilder::new(FixedNames::default());
        let record = convert(
            &AppConfig::default(),
            strings(&["pizza", "summer", "too personal"]),
            Some(strings(&["food", "season", "sports team"])),
            false,
            &mut builder,
        )
        .unwrap();

        assert_eq!(
            render(&record, false).unwrap(),
            r#"Record(food="pizza", season="summer", sports_team="too personal")"#
        );
    }

    #[test]
    fn json_keeps_typed_values() {
        let mut builder = RecordBuilder::new(FixedNames::default());
        let record = convert(
            &AppConfig::default(),
            strings(&["Alex", "45"]),
            Some(strings(&["name", "age"])),
            false,
            &mut builder,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&render(&record, true).unwrap()).unwrap();
        assert_eq!(json["name"], "Alex");
        assert_eq!(json["age"], 45);
    }

    #[test]
    fn config_auto_skips_prompts() {
        let mut config = AppConfig::default();
        config.naming.auto = true;
        let mut builder = RecordBuilder::new(FixedNames::default());

        let record = convert(&config, strings(&["a", "b"]), None, false, &mut builder).unwrap();
        assert_eq!(record.names(), ["field_0", "field_1"]);
        assert!(builder.source().asked().is_empty());
    }

    #[test]
    fn prompts_show_plain_values() {
        let mut builder = RecordBuilder::new(FixedNames::new(["n"]));
        convert(&AppConfig::default(), strings(&["45"]), None, false, &mut builder).unwrap();
        assert_eq!(builder.source().asked(), ["45"]);
    }

    #[test]
    fn typed_values_keep_their_spelling() {
        let mut builder = RecordBuilder::new(FixedNames::new(["v", "w"]));
        let record = convert(
            &AppConfig::default(),
            strings(&["007", "9999999999999999999"]),
            None,
            false,
            &mut builder,
        )
        .unwrap();

        assert_eq!(builder.source().asked(), ["007", "9999999999999999999"]);
        assert_eq!(
            render(&record, false).unwrap(),
            r#"Record(v="007", w="9999999999999999999")"#
        );
    }

    #[test]
    fn name_count_mismatch_fails() {
        let mut builder = RecordBuilder::new(FixedNames::default());
        let err = convert(
            &AppConfig::default(),
            strings(&["a", "b"]),
            Some(strings(&["x"])),
            false,
            &mut builder,
        )
        .unwrap_err();
        assert!(matches!(err, namedrecord_core::Error::LengthMismatch { .. }));
    }
}
