use crate::core::query::{Endpoint, QueryParams, SortOrder};
use crate::domain::model::{Category, Experience, Post, Project, Skill};
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::{FolioError, Result};
use indexmap::IndexMap;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_LATEST_COUNT: u32 = 3;
/// Largest `per_page` WordPress accepts.
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_SKILL_CATEGORY: &str = "Other";

const CPT_FIELDS: &[&str] = &["id", "title", "acf"];

/// Paging for the posts listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsQuery {
    pub per_page: u32,
    pub page: u32,
}

impl Default for PostsQuery {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

/// Read-only client for the WordPress REST API.
///
/// Each fetch issues exactly one GET. Nothing is cached and nothing is
/// retried; transport errors surface as [`FolioError::HttpError`] and a
/// non-success status as [`FolioError::RequestError`].
pub struct WordPressClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> WordPressClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}",
            self.config.api_base_url().trim_end_matches('/'),
            endpoint.path()
        )
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint, params: QueryParams) -> Result<T> {
        let url = self.url_for(endpoint);
        tracing::debug!("Making API request to: {} {:?}", url, params.pairs());

        let response = self
            .client
            .get(&url)
            .query(params.pairs())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            tracing::warn!("{} responded with {}", endpoint, status);
            return Err(FolioError::RequestError {
                status: status.as_u16(),
                endpoint: endpoint.path().to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn fetch_posts(&self, per_page: u32, page: u32) -> Result<Vec<Post>> {
        let params = QueryParams::new().per_page(per_page).page(page).embed();
        self.get(Endpoint::Posts, params).await
    }

    pub async fn fetch_posts_with(&self, query: PostsQuery) -> Result<Vec<Post>> {
        self.fetch_posts(query.per_page, query.page).await
    }

    /// `None` when no post has this slug.
    pub async fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let params = QueryParams::new().slug(slug).embed();
        let posts: Vec<Post> = self.get(Endpoint::Posts, params).await?;

        if posts.len() > 1 {
            tracing::warn!("{} posts share slug '{}', using the first", posts.len(), slug);
        }

        Ok(posts.into_iter().next())
    }

    pub async fn fetch_latest_posts(&self, count: u32) -> Result<Vec<Post>> {
        self.fetch_posts(count, 1).await
    }

    /// Categories with at least one post.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.get(Endpoint::Categories, QueryParams::new().hide_empty())
            .await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get(Endpoint::Portfolio, custom_type_params()).await
    }

    pub async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        self.get(Endpoint::Skill, custom_type_params()).await
    }

    /// Newest first by publish date. The `start_date`/`end_date` fields are
    /// not consulted.
    pub async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        let params = custom_type_params().order_by("date", SortOrder::Desc);
        self.get(Endpoint::Experience, params).await
    }
}

fn custom_type_params() -> QueryParams {
    QueryParams::new()
        .per_page(MAX_PAGE_SIZE)
        .fields(CPT_FIELDS)
        .acf_standard()
}

#[async_trait::async_trait]
impl<C: ConfigProvider> ContentSource for WordPressClient<C> {
    async fn fetch_posts(&self, per_page: u32, page: u32) -> Result<Vec<Post>> {
        WordPressClient::fetch_posts(self, per_page, page).await
    }

    async fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        WordPressClient::fetch_post_by_slug(self, slug).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        WordPressClient::fetch_categories(self).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        WordPressClient::fetch_projects(self).await
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        WordPressClient::fetch_skills(self).await
    }

    async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        WordPressClient::fetch_experiences(self).await
    }
}

/// Buckets skills by their category label, keeping first-seen label order
/// and input order within each bucket. Unlabelled skills go to "Other".
pub fn group_skills_by_category(skills: Vec<Skill>) -> IndexMap<String, Vec<Skill>> {
    let mut groups: IndexMap<String, Vec<Skill>> = IndexMap::new();

    for skill in skills {
        let label = match skill.acf.category.trim() {
            "" => DEFAULT_SKILL_CATEGORY.to_string(),
            label => label.to_string(),
        };
        groups.entry(label).or_default().push(skill);
    }

    groups
}
