//! Front-matter parsing and schema validation
//!
//! Every post must carry a YAML frontmatter block with `title`, `date`,
//! `description`, and `author`. `image` and `tags` are optional. A missing
//! or mistyped required field fails the build.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::FrontMatterError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A post's cover image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverImage {
    pub url: String,
    pub alt: Option<String>,
}

/// Front-matter data from a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub description: String,
    pub author: String,
    #[serde(default)]
    pub image: Option<CoverImage>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    ///
    /// Returns (front_matter, remaining_content).
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start();

        if !content.starts_with("---") {
            return Err(FrontMatterError::MissingBlock);
        }

        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(FrontMatterError::Unterminated);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)?;

        // A present-but-unparseable date is as fatal as a missing one
        if parse_date_string(&fm.date).is_none() {
            return Err(FrontMatterError::InvalidDate(fm.date));
        }

        Ok((fm, remaining))
    }

    /// Parse the date string into a DateTime
    ///
    /// Only called after `parse` has validated the field.
    pub fn parse_date(&self) -> DateTime<Local> {
        parse_date_string(&self.date).unwrap_or_else(Local::now)
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
