use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::core::client::{DEFAULT_LATEST_COUNT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wp-folio")]
#[command(about = "Inspect the WordPress content behind the portfolio site")]
pub struct CliConfig {
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, help = "TOML config file; its api_url replaces --api-url")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List blog posts
    Posts {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Most recent blog posts
    Latest {
        #[arg(long, default_value_t = DEFAULT_LATEST_COUNT)]
        count: u32,
    },
    /// A single post by slug (prints null when missing)
    Post { slug: String },
    /// Non-empty post categories
    Categories,
    /// Portfolio projects
    Projects,
    /// Skills, optionally grouped by category
    Skills {
        #[arg(long)]
        grouped: bool,
    },
    /// Work experience entries
    Experiences,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;

        match &self.command {
            Command::Posts { per_page, page } => {
                validate_range("per_page", *per_page, 1, MAX_PAGE_SIZE)?;
                validate_positive_number("page", *page, 1)?;
            }
            Command::Latest { count } => validate_range("count", *count, 1, MAX_PAGE_SIZE)?,
            Command::Post { slug } => validate_non_empty_string("slug", slug)?,
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts_defaults() {
        let config =
            CliConfig::try_parse_from(["wp-folio", "--api-url", "https://a.test/wp-json", "posts"])
                .unwrap();

        assert_eq!(config.api_base_url(), "https://a.test/wp-json");
        assert!(matches!(
            config.command,
            Command::Posts {
                per_page: 10,
                page: 1
            }
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_skills_grouped() {
        let config = CliConfig::try_parse_from([
            "wp-folio",
            "--api-url",
            "https://a.test/wp-json",
            "skills",
            "--grouped",
        ])
        .unwrap();

        assert!(matches!(config.command, Command::Skills { grouped: true }));
    }

    #[test]
    fn test_validate_rejects_oversized_page() {
        let config = CliConfig::try_parse_from([
            "wp-folio",
            "--api-url",
            "https://a.test/wp-json",
            "posts",
            "--per-page",
            "500",
        ])
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_slug() {
        let config = CliConfig::try_parse_from([
            "wp-folio",
            "--api-url",
            "https://a.test/wp-json",
            "post",
            " ",
        ])
        .unwrap();

        assert!(config.validate().is_err());
    }
}
