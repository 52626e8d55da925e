use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Innstillinger for kjernen. Default-verdiene er kartets opprinnelige:
/// zoom 15 ved oppstart, 16 ved hopp til en økt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_zoom: f64,
    pub focus_zoom: f64,
    /// Sti til JSON-arkivet. None = arkivering av.
    pub archive_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_zoom: 15.0,
            focus_zoom: 16.0,
            archive_path: None,
        }
    }
}

/// Leser konfig fra disk (JSON). Finnes ikke filen, returneres default.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: AppConfig = serde_json::from_str(&contents)?;
        Ok(cfg)
    } else {
        log::debug!("fant ikke konfig på {path}, bruker default");
        Ok(AppConfig::default())
    }
}
