// ABOUTME: Conversion between Rss values and RSS 2.0 markup using quick-xml's serde support.
// ABOUTME: Performs no validation; absent markup decodes to empty values.

use std::io::Write;
use std::str::FromStr;

use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::RssError;
use crate::models::Rss;
use crate::options::{EncodeOptions, XML_DECLARATION};

const ROOT: &str = "rss";

/// Decodes an RSS document from raw bytes.
///
/// Missing elements and attributes take their empty value. Malformed markup
/// is returned as [`RssError::Decode`] and no value is produced.
pub fn decode(data: &[u8]) -> Result<Rss, RssError> {
    trace!(bytes = data.len(), "decoding rss document");
    let rss: Rss = quick_xml::de::from_reader(data)?;
    log_decoded(&rss);
    Ok(rss)
}

/// Decodes an RSS document from a string.
pub fn decode_str(s: &str) -> Result<Rss, RssError> {
    trace!(bytes = s.len(), "decoding rss document");
    let rss: Rss = quick_xml::de::from_str(s)?;
    log_decoded(&rss);
    Ok(rss)
}

/// Encodes a document as compact markup without an XML declaration.
pub fn encode(rss: &Rss) -> Result<String, RssError> {
    encode_with(rss, &EncodeOptions::default())
}

/// Encodes a document using the given output settings.
///
/// The root element is always `rss`, carrying `version` exactly as stored.
pub fn encode_with(rss: &Rss, opts: &EncodeOptions) -> Result<String, RssError> {
    let mut out = String::new();
    if opts.declaration {
        out.push_str(XML_DECLARATION);
        if opts.indent.is_some() {
            out.push('\n');
        }
    }

    let mut ser = Serializer::with_root(&mut out, Some(ROOT))?;
    if let Some(spaces) = opts.indent {
        ser.indent(' ', spaces);
    }
    ser.expand_empty_elements(opts.expand_empty_elements);
    rss.serialize(ser)?;

    debug!(
        version = %rss.version,
        items = rss.channel.items.len(),
        bytes = out.len(),
        "encoded rss document"
    );
    Ok(out)
}

/// Encodes a document and writes it to `writer`.
pub fn encode_to_writer<W: Write>(
    rss: &Rss,
    opts: &EncodeOptions,
    mut writer: W,
) -> Result<(), RssError> {
    let markup = encode_with(rss, opts)?;
    writer.write_all(markup.as_bytes())?;
    Ok(())
}

fn log_decoded(rss: &Rss) {
    debug!(
        version = %rss.version,
        title = %rss.channel.title,
        items = rss.channel.items.len(),
        "decoded rss document"
    );
}

impl FromStr for Rss {
    type Err = RssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_str(s)
    }
}

impl Rss {
    /// Shorthand for [`encode`].
    pub fn to_xml(&self) -> Result<String, RssError> {
        encode(self)
    }
}
