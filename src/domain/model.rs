use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary integer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown operation '{}' (expected +, -, *, add, subtract or multiply)",
            self.0
        )
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "subtract" | "sub" | "minus" => Ok(Operation::Subtract),
            "*" | "x" | "multiply" | "mul" | "times" => Ok(Operation::Multiply),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

/// How a [`Calculator`](crate::core::arithmetic::Calculator) treats results
/// outside the `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Report overflow as an error.
    #[default]
    Checked,
    /// Two's complement wrap-around.
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturating,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub lhs: i32,
    pub rhs: i32,
    pub result: i32,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs, self.operation, self.rhs, self.result
        )
    }
}

/// One entry of the GitHub `/repos/{repo}/contributors` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default = "unknown_login")]
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
    #[serde(default)]
    pub html_url: String,
}

fn unknown_login() -> String {
    "Unknown".to_string()
}
