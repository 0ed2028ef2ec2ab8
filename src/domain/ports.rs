use crate::domain::model::{Category, Experience, Post, Project, Skill};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// Base of the WordPress REST API, e.g. `https://example.com/wp-json`.
    fn api_base_url(&self) -> &str;
}

/// Read-only access to the site's remote content.
///
/// Every call is one independent request; implementations keep no state
/// between calls.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_posts(&self, per_page: u32, page: u32) -> Result<Vec<Post>>;
    async fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<Post>>;
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn fetch_skills(&self) -> Result<Vec<Skill>>;
    async fn fetch_experiences(&self) -> Result<Vec<Experience>>;

    async fn fetch_latest_posts(&self, count: u32) -> Result<Vec<Post>> {
        self.fetch_posts(count, 1).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Rendered;
    use std::sync::Mutex;

    // Records the paging it was asked for.
    struct RecordingSource {
        calls: Mutex<Vec<(u32, u32)>>,
    }

    #[async_trait]
    impl ContentSource for RecordingSource {
        async fn fetch_posts(&self, per_page: u32, page: u32) -> Result<Vec<Post>> {
            self.calls.lock().unwrap().push((per_page, page));
            Ok((0..per_page as u64)
                .map(|id| Post {
                    id,
                    slug: format!("post-{}", id),
                    date: "2024-01-01T00:00:00".to_string(),
                    title: Rendered::default(),
                    excerpt: Rendered::default(),
                    content: Rendered::default(),
                    embedded: None,
                    acf: Default::default(),
                })
                .collect())
        }

        async fn fetch_post_by_slug(&self, _slug: &str) -> Result<Option<Post>> {
            Ok(None)
        }

        async fn fetch_categories(&self) -> Result<Vec<Category>> {
            Ok(Vec::new())
        }

        async fn fetch_projects(&self) -> Result<Vec<Project>> {
            Ok(Vec::new())
        }

        async fn fetch_skills(&self) -> Result<Vec<Skill>> {
            Ok(Vec::new())
        }

        async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_latest_posts_is_first_page() {
        let source = RecordingSource {
            calls: Mutex::new(Vec::new()),
        };

        let latest = tokio_test::block_on(source.fetch_latest_posts(3)).unwrap();
        let first_page = tokio_test::block_on(source.fetch_posts(3, 1)).unwrap();

        assert_eq!(latest, first_page);
        assert_eq!(*source.calls.lock().unwrap(), vec![(3, 1), (3, 1)]);
    }
}
