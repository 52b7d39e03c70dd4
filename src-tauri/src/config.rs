//! Runtime constants, overridable through the environment.

use std::path::PathBuf;
use std::time::Duration;

/// WhatsApp contact that receives finished briefings.
const DEFAULT_WHATSAPP: &str = "5531992781019";
const DEFAULT_FALLBACK_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct BriefingConfig {
    pub whatsapp_number: String,
    /// Where the fallback path saves the generated dossier.
    pub save_dir: PathBuf,
    /// Pause between the info notice and the deep-link open.
    pub fallback_delay: Duration,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP.to_string(),
            save_dir: dirs::download_dir().unwrap_or_else(std::env::temp_dir),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
        }
    }
}

impl BriefingConfig {
    /// Environment overrides win over defaults; a `.env` file is honored
    /// when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let mut config = Self::default();
        if let Ok(number) = std::env::var("BRIEFING_WHATSAPP") {
            if !number.is_empty() {
                config.whatsapp_number = number;
            }
        }
        if let Ok(dir) = std::env::var("BRIEFING_SAVE_DIR") {
            if !dir.is_empty() {
                config.save_dir = PathBuf::from(dir);
            }
        }
        if let Ok(ms) = std::env::var("BRIEFING_FALLBACK_DELAY_MS") {
            if let Ok(ms) = ms.parse() {
                config.fallback_delay = Duration::from_millis(ms);
            }
        }
        config
    }
}
