// Application layer: runs one parsed command against resolved settings.

use crate::config::{Command, Settings};
use crate::core::team::{GithubClient, TeamReport};
use crate::core::ContributorSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs `command` and returns the text to print on stdout.
///
/// Team settings are validated only for the `team` command; arithmetic never
/// looks at them.
pub async fn execute(command: &Command, settings: &Settings) -> Result<String> {
    if let Some((operation, lhs, rhs)) = command.arithmetic() {
        let evaluation = settings.calculator().evaluate(operation, lhs, rhs)?;
        tracing::info!("{}", evaluation);
        return Ok(evaluation.result.to_string());
    }

    settings.validate()?;
    let client = GithubClient::from_config(settings)?;
    tracing::info!("Listing contributors of {}", client.repository());

    let report = TeamReport::from(client.fetch_contributors().await?);
    Ok(report.render())
}
