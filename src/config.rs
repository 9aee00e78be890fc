//! Parser configuration.

/// Which IIIF Image API size grammar to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeGrammar {
    /// Image API 3.0: a leading `^` allows up-scaling and `full` is rejected.
    #[default]
    Current,
    /// Image API 2.x: `full` is a valid size and `^` is not recognised.
    Legacy,
}

impl SizeGrammar {
    /// Returns true if a leading `^` marks an up-scaled size.
    #[must_use]
    pub const fn allows_upscaling(self) -> bool {
        matches!(self, Self::Current)
    }

    /// Returns true if `full` is accepted as a size.
    #[must_use]
    pub const fn allows_full(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// Options controlling how request URIs are parsed.
///
/// # Examples
///
/// ```
/// use iiif_uri::{ParseOptions, SizeGrammar};
///
/// let options = ParseOptions::new().with_size_grammar(SizeGrammar::Legacy);
/// assert_eq!(options.size_grammar(), SizeGrammar::Legacy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Grammar for the size segment.
    ///
    /// Default: [`SizeGrammar::Current`]
    size_grammar: SizeGrammar,
}

impl ParseOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size grammar.
    #[must_use]
    pub const fn with_size_grammar(mut self, size_grammar: SizeGrammar) -> Self {
        self.size_grammar = size_grammar;
        self
    }

    /// Returns the size grammar.
    #[must_use]
    pub const fn size_grammar(self) -> SizeGrammar {
        self.size_grammar
    }
}
