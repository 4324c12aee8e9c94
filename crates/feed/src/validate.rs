// ABOUTME: Opt-in RSS 2.0 conformance checks for decoded or constructed documents.
// ABOUTME: Never invoked by the codec; callers decide whether violations matter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Rss, VERSION};

/// English weekday names accepted in `<skipDays>`.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MAX_SKIP_DAYS: usize = 7;
const MAX_SKIP_HOURS: usize = 24;

/// Protocols an RSS-Cloud endpoint may speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudProtocol {
    XmlRpc,
    Soap,
    HttpPost,
}

impl CloudProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            CloudProtocol::XmlRpc => "xml-rpc",
            CloudProtocol::Soap => "soap",
            CloudProtocol::HttpPost => "http-post",
        }
    }
}

impl fmt::Display for CloudProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProtocol {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml-rpc" => Ok(CloudProtocol::XmlRpc),
            "soap" => Ok(CloudProtocol::Soap),
            "http-post" => Ok(CloudProtocol::HttpPost),
            other => Err(Violation::UnknownCloudProtocol(other.to_string())),
        }
    }
}

/// A single way a document departs from RSS 2.0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("rss version is {0:?}, expected \"2.0\"")]
    Version(String),

    #[error("item {index} has neither a title nor a description")]
    ItemMissingTitleAndDescription { index: usize },

    #[error("skipDays contains {0:?}, which is not an English weekday name")]
    UnknownSkipDay(String),

    #[error("skipDays has {0} entries, at most 7 are allowed")]
    TooManySkipDays(usize),

    #[error("skipHours contains {0}, hours must be between 0 and 23")]
    SkipHourOutOfRange(u32),

    #[error("skipHours has {0} entries, at most 24 are allowed")]
    TooManySkipHours(usize),

    #[error("enclosure of item {index} is missing its {missing} attribute")]
    EnclosureIncomplete { index: usize, missing: &'static str },

    #[error("cloud protocol {0:?} is not one of xml-rpc, soap, http-post")]
    UnknownCloudProtocol(String),
}

/// All violations found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rss document")?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, v)?;
        }
        Ok(())
    }
}

/// Lists every violation in document order: version, channel, then items.
pub fn violations(rss: &Rss) -> Vec<Violation> {
    let mut out = Vec::new();

    if rss.version != VERSION {
        out.push(Violation::Version(rss.version.clone()));
    }

    let channel = &rss.channel;

    if let Some(cloud) = &channel.cloud {
        if let Err(v) = cloud.protocol.parse::<CloudProtocol>() {
            out.push(v);
        }
    }

    if let Some(skip) = &channel.skip_hours {
        if skip.hours.len() > MAX_SKIP_HOURS {
            out.push(Violation::TooManySkipHours(skip.hours.len()));
        }
        out.extend(
            skip.hours
                .iter()
                .filter(|h| **h > 23)
                .map(|h| Violation::SkipHourOutOfRange(*h)),
        );
    }

    if let Some(skip) = &channel.skip_days {
        if skip.days.len() > MAX_SKIP_DAYS {
            out.push(Violation::TooManySkipDays(skip.days.len()));
        }
        out.extend(
            skip.days
                .iter()
                .filter(|d| !WEEKDAYS.contains(&d.as_str()))
                .map(|d| Violation::UnknownSkipDay(d.clone())),
        );
    }

    for (index, item) in channel.items.iter().enumerate() {
        if item.title.is_empty() && item.description.is_empty() {
            out.push(Violation::ItemMissingTitleAndDescription { index });
        }
        if let Some(enc) = &item.enclosure {
            // length 0 is legal for streams of unknown size
            if enc.url.is_empty() {
                out.push(Violation::EnclosureIncomplete {
                    index,
                    missing: "url",
                });
            }
            if enc.mime_type.is_empty() {
                out.push(Violation::EnclosureIncomplete {
                    index,
                    missing: "type",
                });
            }
        }
    }

    out
}

/// Checks a document against RSS 2.0, returning every violation on failure.
pub fn validate(rss: &Rss) -> Result<(), ValidationError> {
    let violations = violations(rss);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

impl Rss {
    /// See [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Channel, Cloud, Enclosure, Item, SkipDays, SkipHours};
    use pretty_assertions::assert_eq;

    fn conformant() -> Rss {
        Rss::new(Channel {
            title: "Example".to_string(),
            link: "https://example.com".to_string(),
            description: "An example feed".to_string(),
            items: vec![Item {
                title: "Hello".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_conformant_document_passes() {
        assert!(violations(&conformant()).is_empty());
        assert!(conformant().validate().is_ok());
    }

    #[test]
    fn test_wrong_version() {
        let mut rss = conformant();
        rss.version = "0.91".to_string();
        assert_eq!(violations(&rss), vec![Violation::Version("0.91".to_string())]);
    }

    #[test]
    fn test_item_needs_title_or_description() {
        let mut rss = conformant();
        rss.channel.items.push(Item::default());
        rss.channel.items.push(Item {
            description: "only a description".to_string(),
            ..Default::default()
        });
        assert_eq!(
            violations(&rss),
            vec![Violation::ItemMissingTitleAndDescription { index: 1 }]
        );
    }

    #[test]
    fn test_skip_hints() {
        let mut rss = conformant();
        rss.channel.skip_days = Some(SkipDays {
            days: vec!["Saturday".to_string(), "saturday".to_string()],
        });
        rss.channel.skip_hours = Some(SkipHours {
            hours: vec![0, 23, 24],
        });
        assert_eq!(
            violations(&rss),
            vec![
                Violation::SkipHourOutOfRange(24),
                Violation::UnknownSkipDay("saturday".to_string()),
            ]
        );
    }

    #[test]
    fn test_skip_list_lengths() {
        let mut rss = conformant();
        rss.channel.skip_hours = Some(SkipHours {
            hours: (0..24).chain(0..1).collect(),
        });
        rss.channel.skip_days = Some(SkipDays {
            days: WEEKDAYS
                .iter()
                .chain(WEEKDAYS.iter().take(1))
                .map(|d| d.to_string())
                .collect(),
        });
        assert_eq!(
            violations(&rss),
            vec![Violation::TooManySkipHours(25), Violation::TooManySkipDays(8)]
        );
    }

    #[test]
    fn test_incomplete_enclosure() {
        let mut rss = conformant();
        rss.channel.items[0].enclosure = Some(Enclosure {
            url: String::new(),
            mime_type: String::new(),
            length: 0,
        });
        assert_eq!(
            violations(&rss),
            vec![
                Violation::EnclosureIncomplete {
                    index: 0,
                    missing: "url"
                },
                Violation::EnclosureIncomplete {
                    index: 0,
                    missing: "type"
                },
            ]
        );
    }

    #[test]
    fn test_cloud_protocol() {
        for proto in ["xml-rpc", "soap", "http-post"] {
            let parsed: CloudProtocol = proto.parse().unwrap();
            assert_eq!(parsed.to_string(), proto);
        }

        let mut rss = conformant();
        rss.channel.cloud = Some(Cloud {
            domain: "rpc.example.com".to_string(),
            port: 80,
            path: "/RPC2".to_string(),
            register_procedure: "pingMe".to_string(),
            protocol: "XML-RPC".to_string(),
        });
        assert_eq!(
            violations(&rss),
            vec![Violation::UnknownCloudProtocol("XML-RPC".to_string())]
        );
    }

    #[test]
    fn test_validation_error_lists_everything() {
        let mut rss = conformant();
        rss.version = String::new();
        rss.channel.items[0].title.clear();

        let err = rss.validate().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(
            err.to_string(),
            "invalid rss document: rss version is \"\", expected \"2.0\"; \
             item 0 has neither a title nor a description"
        );
    }
}
