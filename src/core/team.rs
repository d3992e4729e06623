use crate::core::{ConfigProvider, Contributor, ContributorSource};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_required_field;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::fmt::Write;
use std::time::Duration;

const USER_AGENT_VALUE: &str = concat!("small-calc/", env!("CARGO_PKG_VERSION"));

/// Reads the contributor list of one repository from the GitHub REST API.
pub struct GithubClient {
    client: Client,
    api_base: String,
    repository: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let repository = config.repository().map(str::to_string);
        let repository = validate_required_field("team.repository", &repository)?.clone();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base().trim_end_matches('/').to_string(),
            repository,
            token: config.token().map(str::to_string),
        })
    }

    pub fn contributors_url(&self) -> String {
        format!("{}/repos/{}/contributors", self.api_base, self.repository)
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

#[async_trait::async_trait]
impl ContributorSource for GithubClient {
    async fn fetch_contributors(&self) -> Result<Vec<Contributor>> {
        let url = self.contributors_url();
        tracing::debug!("Making API request to: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CalcError::HttpStatusError {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let contributors: Vec<Contributor> = serde_json::from_slice(&body)?;
        tracing::info!(
            "Fetched {} contributors for {}",
            contributors.len(),
            self.repository
        );
        Ok(contributors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    contributors: Vec<Contributor>,
}

impl From<Vec<Contributor>> for TeamReport {
    fn from(contributors: Vec<Contributor>) -> Self {
        Self { contributors }
    }
}

impl TeamReport {
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "Team members:");
        let _ = writeln!(out, "{}", "-".repeat(50));

        for contributor in &self.contributors {
            let _ = writeln!(out, "{}", contributor.login);
            let _ = writeln!(out, "  Contributions: {} commits", contributor.contributions);
            let _ = writeln!(out, "  Profile: {}", contributor.html_url);
            let _ = writeln!(out);
        }

        let _ = write!(out, "Total members: {}", self.contributors.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(login: &str, contributions: u64) -> Contributor {
        Contributor {
            login: login.to_string(),
            contributions,
            html_url: format!("https://github.com/{}", login),
        }
    }

    #[test]
    fn test_render_report() {
        let report = TeamReport::from(vec![contributor("alice", 42), contributor("bob", 1)]);
        let rendered = report.render();

        assert!(rendered.starts_with("Team members:\n--------------------------------------------------\n"));
        assert!(rendered.contains("alice\n  Contributions: 42 commits\n  Profile: https://github.com/alice\n"));
        assert!(rendered.contains("bob\n  Contributions: 1 commits\n"));
        assert!(rendered.ends_with("Total members: 2"));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_render_empty_report() {
        let report = TeamReport::from(Vec::new());
        assert!(report.is_empty());
        assert!(report.render().ends_with("Total members: 0"));
    }
}
