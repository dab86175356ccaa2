//! Data models for listing responses and the resulting news table.
//!
//! - [`ListingEnvelope`] / [`RawNewsItem`]: the rolling-news API response. Every
//!   field the crawler reads is required; a missing field fails the page.
//! - [`NewsRow`]: one row of output, built once per API item.
//! - [`NewsTable`]: ordered rows plus the column schema they share.

use crate::utils::truncate_for_log;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Output columns, in order. `content` is dropped when content is not fetched.
pub static COLUMNS: [&str; 10] = [
    "category",
    "title",
    "ctime_raw",
    "ctime",
    "url",
    "wapurl",
    "media_name",
    "keywords",
    "intro",
    "content",
];

/// Top level of a listing response: `{"result": {"data": [...]}}`.
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    pub result: ListingResult,
}

#[derive(Debug, Deserialize)]
pub struct ListingResult {
    pub data: Vec<RawNewsItem>,
}

/// One item of `result.data`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNewsItem {
    /// Epoch seconds exactly as the API sent them.
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub ctime: String,
    pub title: String,
    pub url: String,
    pub wapurl: String,
    pub media_name: String,
    pub keywords: String,
    pub intro: String,
}

/// Accepts a JSON string or number and keeps its text form.
fn string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as DeError;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(DeError::custom(format!(
            "Expected string or number for ctime, received {other:?}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRow {
    /// Canonical category label.
    pub category: String,
    pub title: String,
    pub ctime_raw: String,
    /// Local time, `%Y-%m-%d %H:%M`.
    pub ctime: String,
    pub url: String,
    pub wapurl: String,
    pub media_name: String,
    pub keywords: String,
    pub intro: String,
    /// Extracted article text; `None` when content was not requested.
    pub content: Option<String>,
}

impl NewsRow {
    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![
            self.category.as_str(),
            self.title.as_str(),
            self.ctime_raw.as_str(),
            self.ctime.as_str(),
            self.url.as_str(),
            self.wapurl.as_str(),
            self.media_name.as_str(),
            self.keywords.as_str(),
            self.intro.as_str(),
        ];
        if let Some(content) = &self.content {
            cells.push(content);
        }
        cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTable {
    with_content: bool,
    rows: Vec<NewsRow>,
}

impl NewsTable {
    pub fn new(with_content: bool) -> Self {
        Self {
            with_content,
            rows: Vec::new(),
        }
    }

    pub fn with_content(&self) -> bool {
        self.with_content
    }

    pub fn columns(&self) -> &'static [&'static str] {
        if self.with_content {
            &COLUMNS
        } else {
            &COLUMNS[..COLUMNS.len() - 1]
        }
    }

    pub fn rows(&self) -> &[NewsRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<NewsRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: NewsRow) {
        debug_assert_eq!(row.content.is_some(), self.with_content);
        self.rows.push(row);
    }

    /// Append another table's rows, keeping their order. Duplicates are kept.
    pub fn append(&mut self, other: NewsTable) {
        self.rows.extend(other.rows);
    }
}

/// Tab-separated rendering with a header line. Long content is shortened.
impl fmt::Display for NewsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns().join("\t"))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .cells()
                .into_iter()
                .map(|cell| truncate_for_log(&cell.replace(['\t', '\n'], " "), 120))
                .collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, content: Option<&str>) -> NewsRow {
        NewsRow {
            category: "All".to_string(),
            title: title.to_string(),
            ctime_raw: "1571476812".to_string(),
            ctime: "2019-10-19 09:20".to_string(),
            url: "https://news.test/a.shtml".to_string(),
            wapurl: "https://news.test/wap/a.d.html".to_string(),
            media_name: "Sina".to_string(),
            keywords: "a,b".to_string(),
            intro: "intro".to_string(),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"result": {"data": [{
            "ctime": 1571476812, "title": "T", "url": "u", "wapurl": "w",
            "media_name": "m", "keywords": "k", "intro": "i", "extra": 1
        }]}}"#;
        let envelope: ListingEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.result.data.len(), 1);
        assert_eq!(envelope.result.data[0].ctime, "1571476812");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"result": {"data": [{
            "ctime": "1", "title": "T", "url": "u", "wapurl": "w",
            "media_name": "m", "keywords": "k"
        }]}}"#;
        let err = serde_json::from_str::<ListingEnvelope>(json).unwrap_err();
        assert!(err.to_string().contains("intro"));
    }

    #[test]
    fn test_missing_data_path_is_an_error() {
        assert!(serde_json::from_str::<ListingEnvelope>(r#"{"result": {}}"#).is_err());
        assert!(serde_json::from_str::<ListingEnvelope>(r#"{"data": []}"#).is_err());
    }

    #[test]
    fn test_columns_follow_content_flag() {
        assert_eq!(NewsTable::new(true).columns().len(), 10);
        let without = NewsTable::new(false);
        assert_eq!(without.columns().len(), 9);
        assert_eq!(without.columns().last(), Some(&"intro"));
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut first = NewsTable::new(false);
        first.push(row("A", None));
        let mut second = NewsTable::new(false);
        second.push(row("A", None));
        second.push(row("B", None));

        first.append(second);
        let titles: Vec<&str> = first.rows().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "A", "B"]);
    }

    #[test]
    fn test_display_is_tab_separated() {
        let mut table = NewsTable::new(true);
        table.push(row("A", Some("line one\nline two")));
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("category\ttitle"));
        assert!(lines[1].ends_with("line one line two"));
    }
}
