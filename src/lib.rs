#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, Overrides, Settings};

pub use core::{
    arithmetic::{add, multiply, subtract, Calculator},
    team::{GithubClient, TeamReport},
};
pub use domain::model::{Contributor, Evaluation, Operation, OverflowPolicy};
pub use utils::error::{CalcError, Result};
