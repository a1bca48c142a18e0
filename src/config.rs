//! Application configuration, read from the `app` table of Rocket's figment.

use rocket::fairing::AdHoc;
use serde::{Deserialize, Serialize};

/// Display configuration for the dashboard. Handlers and templates treat
/// this as an opaque value; only the templates pick fields out of it.
///
/// Configured in `Rocket.toml` under `[default.app]`, or via
/// `ROCKET_APP` environment overrides.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Extracts [`AppConfig`] at ignition and puts it in managed state.
/// A missing or malformed `app` table aborts the launch.
pub fn fairing() -> AdHoc {
    AdHoc::try_on_ignite("App Config", |rocket| async {
        match rocket.figment().extract_inner::<AppConfig>("app") {
            Ok(config) => Ok(rocket.manage(config)),
            Err(e) => {
                log::error!("missing or invalid [app] configuration: {}", e);
                Err(rocket)
            }
        }
    })
}
