use std::path::PathBuf;

pub const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";

/// Runtime settings read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub osrm_base_url: String,
    pub responders_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let osrm_base_url = lookup("OSRM_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OSRM_BASE_URL.to_string());

        let responders_path = lookup("RESPONDERS_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            osrm_base_url,
            responders_path,
        }
    }
}
