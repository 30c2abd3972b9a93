use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct BlueprintConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` keeps the service up; every generation request then fails.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
    /// Upstream timeout. `None` waits for as long as the caller does.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl GeminiSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl BlueprintConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the service settings from any key/value source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout_secs = get("GEMINI_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "GEMINI_TIMEOUT_SECS must be a whole number of seconds, got {:?}: {}",
                        raw,
                        e
                    ))
                })
            })
            .transpose()?;

        Ok(BlueprintConfig {
            common,
            gemini: GeminiSettings {
                api_key: lookup("GEMINI_API_KEY")
                    .filter(|value| !value.is_empty())
                    .map(Secret::new),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_base: get("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                timeout_secs,
            },
            telemetry: TelemetrySettings {
                log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                otlp_endpoint: get("OTLP_ENDPOINT"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn api_key_matches(settings: &GeminiSettings, expected: &str) -> bool {
        settings
            .api_key
            .as_ref()
            .is_some_and(|key| key.expose_secret() == expected)
    }

    fn config_from(pairs: &[(&str, &str)]) -> Result<BlueprintConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BlueprintConfig::from_lookup(core_config::Config::default(), |key| {
            vars.get(key).cloned()
        })
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = config_from(&[]).unwrap();

        assert!(!config.gemini.has_api_key());
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(
            config.gemini.api_base,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.gemini.timeout_secs, None);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.otlp_endpoint, None);
    }

    #[test]
    fn reads_api_key_and_overrides() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "k-123"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_BASE", "http://localhost:9999/v1beta"),
            ("GEMINI_TIMEOUT_SECS", "30"),
            ("OTLP_ENDPOINT", "http://tempo:4317"),
        ])
        .unwrap();

        assert!(api_key_matches(&config.gemini, "k-123"));
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.api_base, "http://localhost:9999/v1beta");
        assert_eq!(config.gemini.timeout_secs, Some(30));
        assert_eq!(
            config.telemetry.otlp_endpoint.as_deref(),
            Some("http://tempo:4317")
        );
    }

    #[test]
    fn empty_api_key_counts_as_unset() {
        let config = config_from(&[("GEMINI_API_KEY", "")]).unwrap();
        assert!(!config.gemini.has_api_key());
    }

    #[test]
    fn whitespace_api_key_is_kept_as_is() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(api_key_matches(&config.gemini, "   "));
    }

    #[test]
    fn invalid_timeout_is_a_config_error() {
        let err = config_from(&[("GEMINI_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = config_from(&[("GEMINI_API_KEY", "super-secret")]).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
