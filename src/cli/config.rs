use tracing::info;
use tracing::level_filters::LevelFilter;

use crate::error::{RendaError, Result};
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(
    currency: Option<String>,
    name: Option<String>,
    log_level: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();

    if currency.is_none() && name.is_none() && log_level.is_none() {
        println!("Settings:   {}", settings_path().display());
        println!(
            "User:       {}",
            if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
        );
        println!("Currency:   {}", settings.currency_symbol);
        println!("Log level:  {}", settings.log_level);
        return Ok(());
    }

    if let Some(currency) = currency {
        settings.currency_symbol = currency.trim().to_string();
    }
    if let Some(name) = name {
        settings.user_name = name.trim().to_string();
    }
    if let Some(level) = log_level {
        let level = level.trim().to_lowercase();
        level
            .parse::<LevelFilter>()
            .map_err(|e| RendaError::Settings(format!("invalid log level '{level}': {e}")))?;
        settings.log_level = level;
    }

    save_settings(&settings)?;
    info!(path = %settings_path().display(), "settings saved");
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}
