// ABOUTME: Error types for encoding and decoding RSS documents.
// ABOUTME: Markup errors from quick-xml are carried unchanged as the error source.

use std::io;
use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur while converting between `Rss` values and markup.
#[derive(Debug, Error)]
pub enum RssError {
    /// The input is not well-formed markup or does not fit the document shape.
    #[error("failed to decode rss document: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The value could not be serialized.
    #[error("failed to encode rss document: {0}")]
    Encode(#[from] quick_xml::SeError),

    /// Writing encoded output failed.
    #[error("failed to write rss document: {0}")]
    Io(#[from] io::Error),

    /// The document decoded but does not conform to RSS 2.0.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl RssError {
    /// True when the failure came from malformed or mis-shaped input markup.
    pub fn is_decode(&self) -> bool {
        matches!(self, RssError::Decode(_))
    }
}
