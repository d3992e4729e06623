use crate::core::OverflowPolicy;
use crate::utils::error::{CalcError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,
    #[serde(default)]
    pub team: TeamConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArithmeticConfig {
    pub overflow: Option<OverflowPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamConfig {
    pub repository: Option<String>,
    pub token: Option<String>,
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Empty strings and placeholders that survived substitution count as unset.
pub(crate) fn resolved(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !placeholder_regex().is_match(v))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are
    /// left in place.
    fn substitute_env_vars(content: &str) -> String {
        placeholder_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn overflow_policy(&self) -> Option<OverflowPolicy> {
        self.arithmetic.overflow
    }

    pub fn repository(&self) -> Option<&str> {
        resolved(self.team.repository.as_deref())
    }

    pub fn token(&self) -> Option<&str> {
        resolved(self.team.token.as_deref())
    }

    pub fn api_base(&self) -> &str {
        resolved(self.team.api_base.as_deref()).unwrap_or(DEFAULT_API_BASE)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.team.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}
