//! Style declaration sets and their CSS rendering.
//!
//! # Design
//! - A sheet is plain data: ordered base declarations plus ordered media blocks.
//! - Rendering scopes every rule to a single class selector.
//! - `computed_at` replays the cascade for one viewport width so layout rules can be
//!   asserted without a browser.

use crate::core::breakpoints::MediaQuery;
use crate::core::error::LayoutError;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::str::FromStr;

const FORBIDDEN: [char; 7] = [';', '{', '}', '<', '>', '\n', '\r'];

/// Validated CSS length or shorthand value (e.g. `1rem`, `0 0 0 3rem`, `calc(100% - 2px)`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssLength(String);

impl CssLength {
    /// Validate a raw length string.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLength`] for empty text or text that would break out
    /// of a declaration.
    pub fn new(raw: &str) -> Result<Self, LayoutError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains(FORBIDDEN) {
            return Err(LayoutError::InvalidLength {
                value: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the validated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CssLength {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated single-word CSS keyword (e.g. `center`, `space-between`, `scroll`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssKeyword(String);

impl CssKeyword {
    /// Validate a raw keyword.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidKeyword`] unless the text is a non-empty run of
    /// ASCII letters, digits and hyphens.
    pub fn new(raw: &str) -> Result<Self, LayoutError> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !valid {
            return Err(LayoutError::InvalidKeyword {
                value: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Borrow the validated keyword.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CssKeyword {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CssKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// CSS property name.
    pub property: &'static str,
    /// CSS value text.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
}

impl Declaration {
    /// Build a normal declaration.
    #[must_use]
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
            important: false,
        }
    }

    /// Build an `!important` declaration.
    #[must_use]
    pub fn important(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
            important: true,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// Declarations guarded by a media query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaBlock {
    /// Viewport condition.
    pub query: MediaQuery,
    /// Declarations applied when the condition holds.
    pub declarations: Vec<Declaration>,
}

/// Ordered style declarations for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSheet {
    base: Vec<Declaration>,
    media: Vec<MediaBlock>,
}

impl StyleSheet {
    /// Empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unconditional declaration.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.base.push(Declaration::new(property, value));
        self
    }

    /// Append a media block; blocks without declarations are dropped.
    pub fn media(&mut self, query: MediaQuery, declarations: Vec<Declaration>) -> &mut Self {
        if !declarations.is_empty() {
            self.media.push(MediaBlock {
                query,
                declarations,
            });
        }
        self
    }

    /// Unconditional declarations in order.
    #[must_use]
    pub fn base(&self) -> &[Declaration] {
        &self.base
    }

    /// Media blocks in order.
    #[must_use]
    pub fn media_blocks(&self) -> &[MediaBlock] {
        &self.media
    }

    /// Whether the sheet has no declarations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.media.is_empty()
    }

    /// Base declarations as an inline `style` attribute value.
    #[must_use]
    pub fn inline(&self) -> String {
        let mut out = String::new();
        for (idx, decl) in self.base.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{decl}");
        }
        out
    }

    /// Render the whole sheet scoped to `.class_name`.
    #[must_use]
    pub fn render(&self, class_name: &str) -> String {
        let mut out = String::new();
        let _ = write!(out, ".{class_name} {{ {} }}", self.inline());
        for block in &self.media {
            let _ = write!(out, "\n{} {{ .{class_name} {{", block.query);
            for decl in &block.declarations {
                let _ = write!(out, " {decl}");
            }
            out.push_str(" } }");
        }
        out
    }

    /// Stable class name derived from the sheet contents.
    #[must_use]
    pub fn class_name(&self, prefix: &str) -> String {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{prefix}-{:012x}", hasher.finish() & 0xffff_ffff_ffff)
    }

    /// Effective declarations for a viewport `width` pixels wide.
    #[must_use]
    pub fn computed_at(&self, width: u16) -> ComputedStyle {
        let mut computed = ComputedStyle::default();
        for decl in &self.base {
            computed.apply(decl);
        }
        for block in self.media.iter().filter(|block| block.query.matches(width)) {
            for decl in &block.declarations {
                computed.apply(decl);
            }
        }
        computed
    }
}

/// Result of replaying the cascade at one viewport width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    values: BTreeMap<&'static str, (String, bool)>,
}

impl ComputedStyle {
    fn apply(&mut self, decl: &Declaration) {
        if let Some((_, important)) = self.values.get(decl.property) {
            if *important && !decl.important {
                return;
            }
        }
        self.values
            .insert(decl.property, (decl.value.clone(), decl.important));
    }

    /// Effective value for `property`, if any rule set it.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(|(value, _)| value.as_str())
    }
}
