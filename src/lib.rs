pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{toml_config::TomlConfig, EnvConfig, DEFAULT_API_URL};
pub use core::client::{group_skills_by_category, PostsQuery, WordPressClient};
pub use domain::model::{Category, Experience, Post, Project, Skill};
pub use domain::ports::{ConfigProvider, ContentSource};
pub use utils::error::{FolioError, Result};
pub use utils::format::{
    extract_categories, extract_featured_image, format_period, format_post_date, parse_tech_list,
    reading_time_minutes, strip_html,
};
