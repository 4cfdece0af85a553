//! `namedrecord config` — Configuration management commands.

use namedrecord_config::AppConfig;

pub fn show(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_path();
    AppConfig::write_default(&config_path)?;
    println!("Created config.toml at: {}", config_path.display());
    Ok(())
}
