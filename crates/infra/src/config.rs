use adjutant_utils::create_random_secret;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// The single chat identity allowed to drive this assistant
    pub owner_id: i64,
    /// Port for the application to run on
    pub port: usize,
    /// Directory holding the agenda and to-do JSON stores
    pub data_dir: PathBuf,
    /// Webhook that reaches the owner's private channel
    pub owner_webhook_url: String,
    /// Webhook that reaches the shared broadcast channel
    pub broadcast_webhook_url: String,
    /// Shared secret attached to every outgoing webhook call
    pub webhook_key: String,
    /// How long a nag loop waits for an acknowledgment before notifying
    /// again
    pub nag_interval: Duration,
}

impl Config {
    pub fn new() -> Self {
        let webhook_key = match std::env::var("WEBHOOK_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find WEBHOOK_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Webhook key was generated and set to: {}", key);
                key
            }
        };

        Self {
            owner_id: get_int_env("OWNER_ID", 0),
            port: get_int_env("PORT", 5000) as usize,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            owner_webhook_url: get_env_or(
                "OWNER_WEBHOOK_URL",
                "http://localhost:9000/notify/owner",
            ),
            broadcast_webhook_url: get_env_or(
                "BROADCAST_WEBHOOK_URL",
                "http://localhost:9000/notify/broadcast",
            ),
            webhook_key,
            nag_interval: Duration::from_secs(get_int_env("NAG_INTERVAL_SECS", 15 * 60) as u64),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            warn!(
                "The {} environment variable is not set, falling back to: {}",
                name, default
            );
            default.to_string()
        }
    }
}

fn get_int_env(name: &str, default: i64) -> i64 {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.trim().parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}
