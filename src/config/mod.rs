#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, Operands};

use crate::core::arithmetic::Calculator;
use crate::core::{ConfigProvider, OverflowPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_repository, validate_url, Validate};
use toml_config::{resolved, TomlConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECONDS};

pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Effective settings after layering: command line, then config file, then
/// environment, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub overflow: OverflowPolicy,
    pub repository: Option<String>,
    pub token: Option<String>,
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            repository: None,
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub overflow: Option<OverflowPolicy>,
    pub repository: Option<String>,
}

impl Settings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        Self::resolve_with_env(file, overrides, |name| std::env::var(name).ok())
    }

    pub fn resolve_with_env<F>(file: Option<&TomlConfig>, overrides: Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TomlConfig::default();
        let file = file.unwrap_or(&defaults);

        let from_env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        Self {
            overflow: overrides
                .overflow
                .or(file.overflow_policy())
                .unwrap_or_default(),
            repository: resolved(overrides.repository.as_deref())
                .or(file.repository())
                .map(str::to_string)
                .or_else(|| from_env(REPOSITORY_ENV)),
            token: file
                .token()
                .map(str::to_string)
                .or_else(|| from_env(TOKEN_ENV)),
            api_base: file.api_base().to_string(),
            timeout_seconds: file.timeout_seconds(),
        }
    }

    pub fn calculator(&self) -> Calculator {
        Calculator::new(self.overflow_policy())
    }
}

impl ConfigProvider for Settings {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

/// Checks the team fields only. Arithmetic commands skip it.
impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("team.api_base", &self.api_base)?;
        if let Some(repository) = &self.repository {
            validate_repository("team.repository", repository)?;
        }
        validate_range("team.timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
