use crate::config::{toml_config::TomlConfig, ValidatorConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "field-watch")]
#[command(about = "Interactive registration form validator")]
pub struct CliConfig {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Username availability endpoint")]
    pub check_endpoint: Option<String>,

    #[arg(long, default_value = "", help = "Anti-forgery token placed in the hidden csrf_token field")]
    pub csrf_token: String,

    #[arg(long, help = "Header carrying the anti-forgery token")]
    pub csrf_header: Option<String>,

    #[arg(long, help = "Quiet period before the availability check, in milliseconds")]
    pub debounce_ms: Option<u64>,

    #[arg(long, help = "Minimum trimmed username length that triggers a check")]
    pub min_username_len: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併 TOML 檔與命令列參數
    pub fn resolve(&self) -> Result<ValidatorConfig> {
        let mut resolved = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                ValidatorConfig::from(file_config)
            }
            None => ValidatorConfig::default(),
        };

        if let Some(endpoint) = &self.check_endpoint {
            resolved.check_endpoint = endpoint.clone();
        }
        if let Some(header) = &self.csrf_header {
            resolved.csrf_header = header.clone();
        }
        if let Some(ms) = self.debounce_ms {
            resolved.debounce_ms = ms;
        }
        if let Some(len) = self.min_username_len {
            resolved.min_username_len = len;
        }

        Ok(resolved)
    }
}
