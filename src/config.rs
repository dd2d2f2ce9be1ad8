//! Runtime Configuration
//!
//! Collects the bind address and data directory from CLI arguments and the
//! secrets (admin token, AI API key) from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default endpoint of the external AI search API. The API key is appended
/// as a query parameter at request time.
pub const DEFAULT_AI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Directory holding the persisted document collections.
    pub data_dir: PathBuf,
    /// Shared secret for the admin surface. `None` means the gate stays closed.
    pub admin_token: Option<String>,
    /// API key for the external AI search. `None` disables the availability check.
    pub ai_api_key: Option<String>,
    /// Endpoint of the external AI search API.
    pub ai_endpoint: String,
}

impl Config {
    /// Builds the configuration from `--bind` / `--data` arguments and the
    /// `ADMIN_TOKEN` / `AI_API_KEY` / `AI_ENDPOINT` environment variables.
    pub fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let mut bind_addr: Option<SocketAddr> = None;
        let mut data_dir: Option<PathBuf> = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--bind requires a value"))?;
                    bind_addr = Some(value.parse()?);
                    i += 2;
                }
                "--data" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--data requires a value"))?;
                    data_dir = Some(PathBuf::from(value));
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(Self {
            bind_addr: bind_addr.unwrap_or_else(|| "127.0.0.1:8080".parse().unwrap()),
            data_dir: data_dir.unwrap_or_else(|| PathBuf::from("data")),
            admin_token: std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            ai_api_key: std::env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
            ai_endpoint: std::env::var("AI_ENDPOINT")
                .ok()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_AI_ENDPOINT.to_string()),
        })
    }
}
