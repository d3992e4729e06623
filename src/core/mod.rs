pub mod arithmetic;
pub mod team;

pub use crate::domain::model::{Contributor, Evaluation, Operation, OverflowPolicy};
pub use crate::domain::ports::{ConfigProvider, ContributorSource};
pub use crate::utils::error::Result;
