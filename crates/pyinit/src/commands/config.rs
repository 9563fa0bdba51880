//! Config command

use anyhow::{Context, Result};
use pyinit_core::{Settings, SettingsStore};

use crate::cli::{BannerCommands, ConfigCommands};
use crate::output;

pub fn run(cmd: ConfigCommands) -> Result<()> {
    let store = SettingsStore::default_location().context("Failed to locate ~/.pyinitrc")?;

    match cmd {
        ConfigCommands::Show => show(&store),
        ConfigCommands::Reset => reset(&store),
        ConfigCommands::Banner(action) => banner(&store, action),
    }
}

fn show(store: &SettingsStore) -> Result<()> {
    let settings = store
        .load_or_init()
        .context("Failed to read configuration")?;
    let path = store.path().display().to_string();

    output::header("Current pyinit configuration");
    output::kv("Config file", &path);
    output::kv("Banner enabled", &settings.show_banner.to_string());

    output::header("To modify configuration");
    output::commands(&[
        "pyinit config banner enable    # Enable banner".to_string(),
        "pyinit config banner disable   # Disable banner".to_string(),
        "pyinit config reset            # Reset to defaults".to_string(),
        format!("edit {}          # Edit config manually", path),
    ]);

    Ok(())
}

fn reset(store: &SettingsStore) -> Result<()> {
    store
        .save(&Settings::default())
        .context("Failed to reset configuration")?;

    output::success("Configuration reset to defaults");
    output::kv("Config file", &store.path().display().to_string());
    Ok(())
}

fn banner(store: &SettingsStore, action: BannerCommands) -> Result<()> {
    let mut settings = store
        .load_or_init()
        .context("Failed to read configuration")?;
    settings.show_banner = action == BannerCommands::Enable;

    store
        .save(&settings)
        .context("Failed to update configuration")?;

    if settings.show_banner {
        output::success("Banner enabled");
    } else {
        output::success("Banner disabled");
    }
    Ok(())
}
