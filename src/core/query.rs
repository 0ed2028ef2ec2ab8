/// REST routes the site reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Posts,
    Categories,
    Portfolio,
    Skill,
    Experience,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Posts => "/wp/v2/posts",
            Endpoint::Categories => "/wp/v2/categories",
            Endpoint::Portfolio => "/wp/v2/portfolio",
            Endpoint::Skill => "/wp/v2/skill",
            Endpoint::Experience => "/wp/v2/experience",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered query string parameters. Serialized in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.push("per_page", per_page.to_string())
    }

    pub fn page(self, page: u32) -> Self {
        self.push("page", page.to_string())
    }

    pub fn slug(self, slug: &str) -> Self {
        self.push("slug", slug)
    }

    /// Inline featured media and taxonomy terms into each post.
    pub fn embed(self) -> Self {
        self.push("_embed", "1")
    }

    pub fn fields(self, fields: &[&str]) -> Self {
        self.push("_fields", fields.join(","))
    }

    /// Ask ACF for formatted values instead of raw database values.
    pub fn acf_standard(self) -> Self {
        self.push("acf_format", "standard")
    }

    pub fn hide_empty(self) -> Self {
        self.push("hide_empty", "true")
    }

    pub fn order_by(self, field: &str, order: SortOrder) -> Self {
        self.push("orderby", field).push("order", order.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Posts.path(), "/wp/v2/posts");
        assert_eq!(Endpoint::Categories.path(), "/wp/v2/categories");
        assert_eq!(Endpoint::Portfolio.path(), "/wp/v2/portfolio");
        assert_eq!(Endpoint::Skill.path(), "/wp/v2/skill");
        assert_eq!(Endpoint::Experience.to_string(), "/wp/v2/experience");
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let params = QueryParams::new()
            .per_page(100)
            .fields(&["id", "title", "acf"])
            .acf_standard()
            .order_by("date", SortOrder::Desc);

        let pairs: Vec<(&str, &str)> = params
            .pairs()
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("per_page", "100"),
                ("_fields", "id,title,acf"),
                ("acf_format", "standard"),
                ("orderby", "date"),
                ("order", "desc"),
            ]
        );
    }
}
