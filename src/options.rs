//! Configuration for serialization and parsing.
//!
//! - [`StringifyOptions`]: output layout (compact or pretty, indentation width)
//! - [`ParseOptions`]: parser limits and leniency
//!
//! ## Examples
//!
//! ```rust
//! use jsontree::{parse, stringify, StringifyOptions};
//!
//! let value = parse(r#"{"a":1,"b":[true,null]}"#).unwrap();
//!
//! let options = StringifyOptions::pretty().with_indent(4);
//! let text = stringify(&value, &options);
//! assert!(text.starts_with("{\n    \"a\": 1,"));
//! ```

/// Default nesting limit for [`ParseOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for serialization.
///
/// Controls whether output is compact or pretty-printed and how wide each
/// indentation step is.
///
/// # Examples
///
/// ```rust
/// use jsontree::StringifyOptions;
///
/// // Default compact options
/// let options = StringifyOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 2-space indentation
/// let options = StringifyOptions::pretty();
/// assert_eq!(options.indent, 2);
///
/// // Pretty-printed with four-space indentation
/// let options = StringifyOptions::pretty().with_indent(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringifyOptions {
    /// Put every member on its own line and indent nested containers.
    pub pretty: bool,
    /// Spaces per nesting level in pretty mode.
    pub indent: usize,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            pretty: false,
            indent: 2,
        }
    }
}

impl StringifyOptions {
    /// Creates default options (compact output, 2-space indent when pretty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::StringifyOptions;
    ///
    /// let options = StringifyOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        StringifyOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Turns pretty-printing on or off.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::StringifyOptions;
    ///
    /// let options = StringifyOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse_with_options, ParseOptions};
///
/// // Accept bytes after the document, as older callers expect.
/// let options = ParseOptions::new().allow_trailing_characters(true);
/// let value = parse_with_options("[1] trailing", &options).unwrap();
/// assert!(value.is_array());
///
/// // Tighten the nesting limit.
/// let options = ParseOptions::new().with_max_depth(2);
/// assert!(parse_with_options("[[[1]]]", &options).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth of arrays and objects, `None` for no limit.
    pub max_depth: Option<usize>,
    /// Stop after the first complete value instead of rejecting what follows it.
    pub allow_trailing_characters: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_trailing_characters: false,
        }
    }
}

impl ParseOptions {
    /// Creates default options (depth limit of 128, trailing bytes rejected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting limit. Deep input can then exhaust the stack.
    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Accepts (and ignores) anything after the top-level value.
    #[must_use]
    pub fn allow_trailing_characters(mut self, allow: bool) -> Self {
        self.allow_trailing_characters = allow;
        self
    }
}
