use anyhow::Context;
use clap::Parser;
use wp_folio::core::ConfigProvider;
use wp_folio::utils::{logger, validation::Validate};
use wp_folio::{
    group_skills_by_category, CliConfig, Command, FolioError, PostsQuery, TomlConfig,
    WordPressClient,
};

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置（若有），其 api_url 優先
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let verbose = config.verbose
        || file_config
            .as_ref()
            .and_then(TomlConfig::log_level)
            .is_some_and(logger::is_verbose_level);
    logger::init_cli_logger(verbose);

    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        config.api_url = file_config.api_base_url().to_string();
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let command = config.command.clone();
    let client = WordPressClient::new(config);

    match run(&client, &command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);

            // 遠端拒絕 (非 2xx) 與其他錯誤使用不同的退出碼
            let remote_status = e.downcast_ref::<FolioError>().and_then(FolioError::status);
            std::process::exit(if remote_status.is_some() { 2 } else { 1 });
        }
    }
}

async fn run<C: ConfigProvider>(client: &WordPressClient<C>, command: &Command) -> anyhow::Result<String> {
    tracing::info!("Fetching from {}", client.config().api_base_url());

    let output = match command {
        Command::Posts { per_page, page } => {
            let query = PostsQuery {
                per_page: *per_page,
                page: *page,
            };
            let posts = client
                .fetch_posts_with(query)
                .await
                .context("fetching posts")?;
            serde_json::to_string_pretty(&posts)?
        }
        Command::Latest { count } => {
            let posts = client
                .fetch_latest_posts(*count)
                .await
                .context("fetching latest posts")?;
            serde_json::to_string_pretty(&posts)?
        }
        Command::Post { slug } => {
            let post = client
                .fetch_post_by_slug(slug)
                .await
                .with_context(|| format!("fetching post '{}'", slug))?;
            if post.is_none() {
                tracing::info!("No post with slug '{}'", slug);
            }
            serde_json::to_string_pretty(&post)?
        }
        Command::Categories => {
            let categories = client
                .fetch_categories()
                .await
                .context("fetching categories")?;
            serde_json::to_string_pretty(&categories)?
        }
        Command::Projects => {
            let projects = client.fetch_projects().await.context("fetching projects")?;
            serde_json::to_string_pretty(&projects)?
        }
        Command::Skills { grouped } => {
            let skills = client.fetch_skills().await.context("fetching skills")?;
            if *grouped {
                serde_json::to_string_pretty(&group_skills_by_category(skills))?
            } else {
                serde_json::to_string_pretty(&skills)?
            }
        }
        Command::Experiences => {
            let experiences = client
                .fetch_experiences()
                .await
                .context("fetching experiences")?;
            serde_json::to_string_pretty(&experiences)?
        }
    };

    Ok(output)
}
