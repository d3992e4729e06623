use crate::core::{Operation, OverflowPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "calc")]
#[command(about = "Integer arithmetic and repository team listing", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overflow policy for arithmetic commands (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub overflow: Option<OverflowPolicy>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a + b
    Add(Operands),
    /// Print a - b
    Subtract(Operands),
    /// Print a * b
    Multiply(Operands),
    /// Evaluate `<a> <op> <b>` where op is +, -, * or an operation name
    Eval {
        #[arg(allow_negative_numbers = true)]
        lhs: i32,
        #[arg(allow_hyphen_values = true)]
        operation: Operation,
        #[arg(allow_negative_numbers = true)]
        rhs: i32,
    },
    /// List the contributors of a GitHub repository
    Team {
        /// Repository as owner/repo (defaults to GITHUB_REPOSITORY)
        #[arg(long)]
        repository: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Operands {
    #[arg(allow_negative_numbers = true)]
    pub a: i32,
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

impl Command {
    /// The operation and operands of an arithmetic command.
    pub fn arithmetic(&self) -> Option<(Operation, i32, i32)> {
        match self {
            Command::Add(Operands { a, b }) => Some((Operation::Add, *a, *b)),
            Command::Subtract(Operands { a, b }) => Some((Operation::Subtract, *a, *b)),
            Command::Multiply(Operands { a, b }) => Some((Operation::Multiply, *a, *b)),
            Command::Eval {
                lhs,
                operation,
                rhs,
            } => Some((*operation, *lhs, *rhs)),
            Command::Team { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_operands() {
        let cli = CliConfig::try_parse_from(["calc", "multiply", "2", "-5"]).unwrap();
        assert_eq!(
            cli.command.arithmetic(),
            Some((Operation::Multiply, 2, -5))
        );
    }

    #[test]
    fn test_parse_eval_with_symbol() {
        let cli = CliConfig::try_parse_from(["calc", "eval", "2", "-", "3"]).unwrap();
        assert_eq!(
            cli.command.arithmetic(),
            Some((Operation::Subtract, 2, 3))
        );
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = CliConfig::try_parse_from([
            "calc",
            "add",
            "1",
            "2",
            "--overflow",
            "saturating",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.overflow, Some(OverflowPolicy::Saturating));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_team() {
        let cli =
            CliConfig::try_parse_from(["calc", "team", "--repository", "octo/calc"]).unwrap();
        assert!(cli.command.arithmetic().is_none());
        assert!(matches!(
            cli.command,
            Command::Team { repository: Some(ref r) } if r == "octo/calc"
        ));
    }

    #[test]
    fn test_rejects_out_of_range_operand() {
        assert!(CliConfig::try_parse_from(["calc", "add", "2147483648", "1"]).is_err());
    }
}
