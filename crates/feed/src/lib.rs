// ABOUTME: RSS 2.0 document schema for rsskit.
// ABOUTME: Provides the document records, XML encode/decode, opt-in validation, and date formatting.

pub mod codec;
pub mod dates;
pub mod error;
pub mod models;
pub mod options;
pub mod validate;

pub use codec::{decode, decode_str, encode, encode_to_writer, encode_with};
pub use dates::{format_rfc1123, RFC1123};
pub use error::RssError;
pub use models::{
    Category, Channel, Cloud, Enclosure, Guid, Image, Item, Rss, SkipDays, SkipHours, Source,
    TextInput, VERSION,
};
pub use options::EncodeOptions;
pub use validate::{validate, violations, CloudProtocol, ValidationError, Violation};
