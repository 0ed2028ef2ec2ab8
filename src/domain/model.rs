use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Open-schema custom fields attached to a post by the ACF plugin.
pub type AcfFields = HashMap<String, serde_json::Value>;

/// Pre-rendered HTML as delivered by WordPress (`{"rendered": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

impl From<&str> for Rendered {
    fn from(value: &str) -> Self {
        Self {
            rendered: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub date: String,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub content: Rendered,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
    #[serde(default, deserialize_with = "acf_map")]
    pub acf: AcfFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(
        rename = "wp:featuredmedia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub featured_media: Option<Vec<Media>>,
    #[serde(rename = "wp:term", default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Vec<Term>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    // WordPress embeds an error object here when the media is not readable.
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: Rendered,
    #[serde(default, deserialize_with = "acf_record")]
    pub acf: ProjectFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Comma-joined, see [`crate::utils::format::parse_tech_list`].
    #[serde(default, deserialize_with = "lenient_string")]
    pub technologies: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub featured_image: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub title: Rendered,
    #[serde(default, deserialize_with = "acf_record")]
    pub acf: SkillFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillFields {
    /// Expected in 0..=100, passed through unchecked.
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u64,
    pub title: Rendered,
    #[serde(default, deserialize_with = "acf_record")]
    pub acf: ExperienceFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: String,
    /// `YYYY-MM`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    /// `YYYY-MM` or `present`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub technologies: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company_url: String,
}

// ACF sends `[]` instead of `{}` for a post without custom fields.
fn acf_map<'de, D>(deserializer: D) -> Result<AcfFields, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(obj) => Ok(obj.into_iter().collect()),
        serde_json::Value::Array(items) if items.is_empty() => Ok(HashMap::new()),
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(HashMap::new()),
        other => Err(D::Error::custom(format!(
            "expected an object for acf, got {}",
            other
        ))),
    }
}

// Same quirk for the fixed-schema custom post types: a post with no fields
// filled in arrives as `[]`, `null` or `false`.
fn acf_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(D::Error::custom)
        }
        serde_json::Value::Array(items) if items.is_empty() => Ok(T::default()),
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(T::default()),
        other => Err(D::Error::custom(format!(
            "expected an object for acf, got {}",
            other
        ))),
    }
}

// ACF renders empty fields as `null` or `false` and numbers as numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string field, got {}",
            other
        ))),
    }
}

fn lenient_level<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .ok_or_else(|| D::Error::custom(format!("level out of range: {}", n))),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(0),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.round() as i64)
                })
                .ok_or_else(|| D::Error::custom(format!("level is not a number: '{}'", s)))
        }
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(0),
        other => Err(D::Error::custom(format!("unexpected level value: {}", other))),
    }
}
