use serde::{Deserialize, Serialize};

/// Body of `/api/v1/search/words`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    pub data: Vec<RemoteWord>,
}

/// One dictionary entry returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWord {
    pub japanese: Vec<JapaneseForm>,
    pub senses: Vec<Sense>,
    pub is_common: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub jlpt: Option<Vec<String>>,
}

/// Surface form and its reading; either may be missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseForm {
    pub word: Option<String>,
    pub reading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub english_definitions: Vec<String>,
    pub parts_of_speech: Vec<String>,
    pub info: Option<Vec<String>>,
    pub links: Option<Vec<SenseLink>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseLink {
    pub text: Option<String>,
    pub url: Option<String>,
}

impl JapaneseForm {
    /// Written form, falling back to the reading
    pub fn display(&self) -> Option<&str> {
        self.word.as_deref().or(self.reading.as_deref())
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.word.as_deref() == Some(keyword) || self.reading.as_deref() == Some(keyword)
    }
}

impl RemoteWord {
    pub fn headword(&self) -> Option<&str> {
        self.japanese.first().and_then(JapaneseForm::display)
    }

    /// Reading of the first form when it differs from the written form
    pub fn distinct_reading(&self) -> Option<&str> {
        let first = self.japanese.first()?;
        let reading = first.reading.as_deref()?;
        (first.word.as_deref() != Some(reading)).then_some(reading)
    }

    pub fn is_common(&self) -> bool {
        self.is_common == Some(true)
    }

    pub fn jlpt_levels(&self) -> &[String] {
        self.jlpt.as_deref().unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Whether any form's word or reading is exactly `keyword`
    pub fn matches_exactly(&self, keyword: &str) -> bool {
        self.japanese.iter().any(|form| form.matches(keyword))
    }
}

impl Sense {
    pub fn info(&self) -> &[String] {
        self.info.as_deref().unwrap_or_default()
    }

    /// Links that carry both a label and an http(s) target
    pub fn web_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|link| match (link.text.as_deref(), link.url.as_deref()) {
                (Some(text), Some(url)) if url.starts_with("http") => Some((text, url)),
                _ => None,
            })
    }
}
