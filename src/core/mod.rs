pub mod client;
pub mod query;

pub use crate::domain::model::{Category, Experience, Post, Project, Skill};
pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::Result;
