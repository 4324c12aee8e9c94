// ABOUTME: Output settings for encoding RSS documents.
// ABOUTME: EncodeOptions defaults to compact output without an XML declaration.

/// Declaration prepended when [`EncodeOptions::declaration`] is set.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Settings for [`crate::codec::encode_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Prepend [`XML_DECLARATION`].
    pub declaration: bool,
    /// Write `<a></a>` instead of `<a/>` for elements with no content.
    pub expand_empty_elements: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: None,
            declaration: false,
            expand_empty_elements: true,
        }
    }
}

impl EncodeOptions {
    /// Same as [`EncodeOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable output: two-space indent and an XML declaration.
    pub fn pretty() -> Self {
        Self::new().indent(2).declaration(true)
    }

    /// Sets spaces per nesting level; `0` switches back to compact output.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = if spaces == 0 { None } else { Some(spaces) };
        self
    }

    /// Enables or disables the leading XML declaration.
    pub fn declaration(mut self, enabled: bool) -> Self {
        self.declaration = enabled;
        self
    }

    /// Chooses between `<a></a>` and `<a/>` for elements with no content.
    pub fn expand_empty_elements(mut self, enabled: bool) -> Self {
        self.expand_empty_elements = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.indent, None);
        assert!(!opts.declaration);
        assert!(opts.expand_empty_elements);
    }

    #[test]
    fn test_zero_indent_means_compact() {
        assert_eq!(EncodeOptions::new().indent(0).indent, None);
        assert_eq!(EncodeOptions::new().indent(4).indent, Some(4));
    }

    #[test]
    fn test_pretty() {
        let opts = EncodeOptions::pretty();
        assert_eq!(opts.indent, Some(2));
        assert!(opts.declaration);
    }
}
