use serde::{Deserialize, Deserializer, Serialize};

/// A film as it appears in a catalog file.
///
/// Nothing here is validated: every field may be absent and renders as empty
/// text when it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Movie {
    pub id: Option<String>,
    pub original_title: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub director: Option<String>,
    /// Running time in whole minutes
    #[serde(deserialize_with = "minutes")]
    pub running_time: Option<u32>,
    /// Rotten Tomatoes score, shown verbatim
    #[serde(deserialize_with = "text_or_number")]
    pub rt_score: Option<String>,
    pub description: Option<String>,
    /// Banner image URL
    pub movie_banner: Option<String>,
}

impl Movie {
    /// Stable key for keyed lists: the id when present, else the title.
    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_default()
    }
}

// Catalog files in the wild carry numbers either as JSON numbers or as
// numeric strings ("124").
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Float(f64),
    Text(String),
}

fn minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        NumberOrText::Number(n) => u32::try_from(n).ok(),
        NumberOrText::Float(f) if f >= 0.0 && f <= u32::MAX as f64 => Some(f.trunc() as u32),
        NumberOrText::Float(_) => None,
        NumberOrText::Text(s) => s.trim().parse().ok(),
    }))
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Float(f) => f.to_string(),
        NumberOrText::Text(s) => s,
    }))
}
