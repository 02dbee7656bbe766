use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, UnitsArg},
    domain::weather::UnitSystem,
};

/// Settings that survive restarts. CLI flags always win over the persisted
/// values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub units: UnitSystem,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let units = match cli.units {
            UnitsArg::Metric => UnitSystem::Metric,
            UnitsArg::Imperial => UnitSystem::Imperial,
        };
        Self { units }
    }
}

pub fn load_runtime_settings(cli: &Cli) -> (RuntimeSettings, Option<PathBuf>) {
    if cli.no_persist {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };

    let saved = fs::read_to_string(&path)
        .ok()
        .and_then(|content| serde_json::from_str::<RuntimeSettings>(&content).ok());
    (merge(saved, cli), Some(path))
}

/// Persisted values apply first, then any non-default CLI flag overrides.
fn merge(saved: Option<RuntimeSettings>, cli: &Cli) -> RuntimeSettings {
    let mut settings = saved.unwrap_or_else(|| RuntimeSettings::from_cli_defaults(cli));
    if cli.units != UnitsArg::Metric {
        settings.units = UnitSystem::Imperial;
    }
    settings
}

pub fn save_runtime_settings(path: &Path, settings: RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(&settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("METEOGRAM_TUI_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("meteogram-tui")
            .join("settings.json"),
    )
}
