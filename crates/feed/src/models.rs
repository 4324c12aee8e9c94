// ABOUTME: RSS 2.0 document records with their XML element/attribute mapping.
// ABOUTME: Attributes use `@name`, character data uses `$text`, everything else is a child element.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The only RSS version this schema describes.
pub const VERSION: &str = "2.0";

/// Root `<rss>` element.
///
/// `version` is emitted exactly as stored; use [`Rss::new`] to get `"2.0"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rss {
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(default)]
    pub channel: Channel,
}

impl Rss {
    /// Creates a version 2.0 document around `channel`.
    pub fn new(channel: Channel) -> Self {
        Self {
            version: VERSION.to_string(),
            channel,
        }
    }
}

/// The single `<channel>` of a document: feed metadata followed by its items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copyright: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub managing_editor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_master: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pub_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_build_date: String,
    #[serde(
        default,
        deserialize_with = "last_repeated",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generator: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub docs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Minutes the channel may be cached before refreshing.
    #[serde(
        default,
        deserialize_with = "none_if_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// PICS rating.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<TextInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_hours: Option<SkipHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_days: Option<SkipDays>,
    #[serde(rename = "item", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// One `<item>` entry.
///
/// RSS 2.0 wants at least one of `title` or `description`; neither is
/// required here. See [`crate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Author email address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(
        default,
        deserialize_with = "last_repeated",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,
    /// URL of the comments page.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<Enclosure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<Guid>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pub_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// `<category domain="...">value</category>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "@domain", default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// `<enclosure url="..." type="..." length="..."/>`, all three attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    #[serde(rename = "@url", default)]
    pub url: String,
    /// MIME type.
    #[serde(rename = "@type", default)]
    pub mime_type: String,
    /// Size in bytes.
    #[serde(rename = "@length", default, deserialize_with = "zero_if_empty")]
    pub length: u64,
}

/// `<guid isPermaLink="...">value</guid>`
///
/// An absent `isPermaLink` means `true` to RSS readers; it is kept absent
/// rather than defaulted so documents round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guid {
    #[serde(
        rename = "@isPermaLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_perma_link: Option<bool>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl Guid {
    /// Whether readers should treat the value as a URL.
    pub fn is_perma_link(&self) -> bool {
        self.is_perma_link.unwrap_or(true)
    }
}

/// `<source url="...">channel name</source>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "@url", default)]
    pub url: String,
    #[serde(rename = "$text", default)]
    pub name: String,
}

/// Channel `<image>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "none_if_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "none_if_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

/// RSS-Cloud `<cloud/>` endpoint; every field is an attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    #[serde(rename = "@domain", default)]
    pub domain: String,
    #[serde(rename = "@port", default, deserialize_with = "zero_if_empty")]
    pub port: u16,
    #[serde(rename = "@path", default)]
    pub path: String,
    #[serde(rename = "@registerProcedure", default)]
    pub register_procedure: String,
    /// One of `xml-rpc`, `soap` or `http-post`; see [`crate::validate::CloudProtocol`].
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
}

/// Channel `<textInput>` box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// `<skipDays>` with one `<day>` per weekday name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipDays {
    #[serde(rename = "day", default)]
    pub days: Vec<String>,
}

/// `<skipHours>` with one `<hour>` per GMT hour, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipHours {
    #[serde(rename = "hour", default, deserialize_with = "zeros_if_empty")]
    pub hours: Vec<u32>,
}

/// Accepts repeated occurrences of a single-valued element and keeps the last.
fn last_repeated<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let all = Vec::<T>::deserialize(deserializer)?;
    Ok(all.into_iter().last())
}

/// Reads numeric text, treating empty or blank text as zero.
fn zero_if_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    parse_or_default(&text).map_err(D::Error::custom)
}

/// Like [`zero_if_empty`] for optional elements: blank text reads as `None`.
fn none_if_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse().map(Some).map_err(D::Error::custom)
}

/// Repeated numeric elements; each blank entry reads as zero.
fn zeros_if_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|text| parse_or_default(text).map_err(D::Error::custom))
        .collect()
}

fn parse_or_default<T>(text: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse()
        .map_err(|err| format!("invalid number {:?}: {}", text, err))
}
