// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Once;

use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

static INIT_LOGGER_ONCE: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG`; without it, debug builds log at INFO
/// and release builds at WARN. Only the first call has an effect.
pub fn init_logger() {
    let is_logger_initialized = INIT_LOGGER_ONCE.is_completed();

    INIT_LOGGER_ONCE.call_once(|| {
        if let Err(error) = do_init_logger() {
            // Another subscriber was installed by the embedding application.
            eprintln!("failed to init logger: {error}");
        }
    });

    info!(is_logger_initialized, "init_logger");
}

fn do_init_logger() -> Result<(), TryInitError> {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    registry()
        .with(env_filter)
        .with(fmt::Layer::new())
        .try_init()?;

    warn!(
        %default_level,
        "init_logger finished (deliberately output by warn level)"
    );

    Ok(())
}
