// SPDX-FileCopyrightText: 2023 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use serde::Deserialize;

/// Prefix of environment variables overriding settings, e.g.
/// `HERALD_IN_APP__CLEAR_ON_RESPONSE=false`.
pub const ENV_PREFIX: &str = "HERALD";

/// Configuration of the client.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub in_app: InAppSettings,
}

/// Configuration of local storage.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageSettings {
    // If this isn't present, the pending message is kept in an in-memory
    // database and lost when the client shuts down.
    pub database_path: Option<PathBuf>,
}

/// Configuration of in-app messaging.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InAppSettings {
    /// Clear the pending message when the user responds to the push that
    /// delivered it.
    #[serde(default = "default_true")]
    pub clear_on_response: bool,
}

impl Default for InAppSettings {
    fn default() -> Self {
        Self {
            clear_on_response: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load the settings from an optional YAML file, layering environment
/// variables on top.
pub fn get_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
    }
    builder.add_source(environment()).build()?.try_deserialize()
}

/// Load the settings from the given configuration string (in YAML format).
pub fn get_settings_from_str(base: &str) -> Result<Settings, ConfigError> {
    get_settings_impl(File::from_str(base, FileFormat::Yaml), environment())
}

fn get_settings_impl(
    base: impl Source + Send + Sync + 'static,
    environment: impl Source + Send + Sync + 'static,
) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(base)
        .add_source(environment)
        .build()?
        .try_deserialize()
}
