use crate::domain::model::{Contributor, OverflowPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn overflow_policy(&self) -> OverflowPolicy;
    fn repository(&self) -> Option<&str>;
    fn token(&self) -> Option<&str>;
    fn api_base(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait ContributorSource: Send + Sync {
    async fn fetch_contributors(&self) -> Result<Vec<Contributor>>;
}
