use crate::services::providers::GenerationParams;
use secrecy::SecretString;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TONE: &str = "Helpful and professional assistant";
const DEFAULT_SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub generation: GenerationParams,
    pub prompt: PromptSettings,
    pub http: HttpSettings,
    pub observability: ObservabilitySettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when `GEMINI_API_KEY` is unset or empty. Reported per request,
    /// never at startup.
    pub api_key: Option<SecretString>,
    pub model: String,
    /// Versioned API root, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct PromptSettings {
    /// Tone used when the caller sends no `systemPrompt`.
    pub default_tone: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub static_dir: PathBuf,
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ObservabilitySettings {
    /// OTLP collector for span export; logs only when unset.
    pub otlp_endpoint: Option<String>,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the relay settings from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::new);

        Ok(RelayConfig {
            common,
            gemini: GeminiSettings {
                api_key,
                model: get_env(&lookup, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env(&lookup, "GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE)
                    .trim_end_matches('/')
                    .to_string(),
            },
            generation: GenerationParams {
                temperature: parse_env(&lookup, "GENAI_TEMPERATURE", 0.9)?,
                top_p: parse_env(&lookup, "GENAI_TOP_P", 0.95)?,
                top_k: parse_env(&lookup, "GENAI_TOP_K", 64)?,
                max_output_tokens: parse_env(&lookup, "GENAI_MAX_OUTPUT_TOKENS", 2048)?,
                safety_threshold: get_env(
                    &lookup,
                    "GENAI_SAFETY_THRESHOLD",
                    DEFAULT_SAFETY_THRESHOLD,
                ),
            },
            prompt: PromptSettings {
                default_tone: get_env(&lookup, "DEFAULT_TONE", DEFAULT_TONE),
            },
            http: HttpSettings {
                static_dir: PathBuf::from(get_env(&lookup, "STATIC_DIR", "public")),
                allowed_origins: get_env(&lookup, "CORS_ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            },
            observability: ObservabilitySettings {
                otlp_endpoint: lookup("OTLP_ENDPOINT")
                    .filter(|endpoint| !endpoint.trim().is_empty()),
            },
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }
}

fn get_env<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}
