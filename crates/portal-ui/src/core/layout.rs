//! Responsive 12-column grid primitives (`Row`, `Col`, `Group`).
//!
//! # Design
//! - Hints are immutable records; `resolve` is a pure function to a [`StyleSheet`].
//! - Column tiers cascade mobile first: a tier only emits the properties it sets, so
//!   an unset tier keeps whatever a narrower tier resolved.
//! - A fraction of 0 means "no rule", never `0%`.
//! - Inputs are validated when the hints are built; resolution cannot fail.

use crate::core::breakpoints::{DESKTOP, MAX_BODY_HEIGHT, MediaQuery, PHONE, TABLET};
use crate::core::error::LayoutError;
use crate::core::style::{CssKeyword, CssLength, Declaration, StyleSheet};

/// Number of columns in the grid.
pub const GRID_COLUMNS: u8 = 12;

/// Share of the 12-column grid, `0..=12`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(u8);

impl Fraction {
    /// No rule at this tier.
    pub const UNSET: Self = Self(0);
    /// All twelve columns.
    pub const FULL: Self = Self(GRID_COLUMNS);

    /// Validate a column count.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::FractionOutOfRange`] above 12.
    pub fn new(columns: u32) -> Result<Self, LayoutError> {
        u8::try_from(columns)
            .ok()
            .filter(|value| *value <= GRID_COLUMNS)
            .map(Self)
            .ok_or(LayoutError::FractionOutOfRange { value: columns })
    }

    /// Raw column count.
    #[must_use]
    pub const fn columns(self) -> u8 {
        self.0
    }

    /// Whether this fraction produces a rule.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 > 0
    }

    /// Percentage text for a set fraction; `None` when unset.
    #[must_use]
    pub fn percent(self) -> Option<String> {
        self.is_set().then(|| percent(self.0))
    }
}

impl TryFrom<u32> for Fraction {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// `(columns / 12) * 100` as CSS percentage text with at most two decimals.
#[must_use]
pub fn percent(columns: u8) -> String {
    let value = f64::from(columns) / f64::from(GRID_COLUMNS) * 100.0;
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

/// Validate an optional length.
///
/// # Errors
///
/// Propagates [`LayoutError::InvalidLength`].
pub fn optional_length(raw: Option<&str>) -> Result<Option<CssLength>, LayoutError> {
    raw.map(CssLength::new).transpose()
}

/// Validate an optional keyword.
///
/// # Errors
///
/// Propagates [`LayoutError::InvalidKeyword`].
pub fn optional_keyword(raw: Option<&str>) -> Result<Option<CssKeyword>, LayoutError> {
    raw.map(CssKeyword::new).transpose()
}

/// Per-tier fractions (phone, tablet, desktop).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tiered {
    /// Applies at the phone tier and wider.
    pub sm: Fraction,
    /// Applies at the tablet tier and wider.
    pub md: Fraction,
    /// Applies at the desktop tier.
    pub lg: Fraction,
}

impl Tiered {
    /// Validate raw column counts for each tier.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::FractionOutOfRange`] for the first tier above 12.
    pub fn new(sm: u32, md: u32, lg: u32) -> Result<Self, LayoutError> {
        Ok(Self {
            sm: Fraction::new(sm)?,
            md: Fraction::new(md)?,
            lg: Fraction::new(lg)?,
        })
    }
}

/// Hints for a wrapping horizontal row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowHints {
    /// Maximum height; unconstrained when unset.
    pub max_height: Option<CssLength>,
    /// Vertical overflow; `hidden` when unset.
    pub overflow_y: Option<CssKeyword>,
    /// Bleed margin compensating for child padding.
    pub margin: Option<CssLength>,
    /// Main-axis distribution.
    pub justify_content: Option<CssKeyword>,
}

impl RowHints {
    /// Resolve the row's declarations.
    #[must_use]
    pub fn resolve(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        sheet
            .push("display", "flex")
            .push("flex-direction", "row")
            .push("width", "100%")
            .push("flex-wrap", "wrap")
            .push(
                "max-height",
                self.max_height.as_ref().map_or("none", CssLength::as_str),
            )
            .push(
                "overflow-y",
                self.overflow_y.as_ref().map_or("hidden", CssKeyword::as_str),
            );
        if let Some(margin) = &self.margin {
            sheet
                .push("margin-left", format!("-{margin}"))
                .push("margin-right", format!("-{margin}"))
                .push("width", format!("calc(100% + {margin} + {margin})"));
        }
        if let Some(justify) = &self.justify_content {
            sheet.push("justify-content", justify.as_str());
        }
        sheet
    }
}

/// Hints for one grid column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColHints {
    /// Width fractions per tier.
    pub span: Tiered,
    /// Left offset fractions per tier.
    pub offset: Tiered,
    /// Literal width; wins over every fraction.
    pub width: Option<CssLength>,
    /// Padding; `0` when unset.
    pub padding: Option<CssLength>,
    /// Literal height.
    pub height: Option<CssLength>,
    /// Grow to the body height at the desktop tier.
    pub full_height: bool,
    /// Lay out content with flexbox.
    pub flex: bool,
    /// Cross-axis alignment for flex content.
    pub align_items: Option<CssKeyword>,
    /// Hide below the phone tier.
    pub hide_on_mobile: bool,
    /// Horizontal overflow.
    pub overflow_x: Option<CssKeyword>,
    /// Vertical overflow.
    pub overflow_y: Option<CssKeyword>,
    /// Horizontal inset applied by an inner wrapper, outside the grid width.
    pub margin: Option<CssLength>,
}

impl ColHints {
    /// Resolve the column's own declarations.
    #[must_use]
    pub fn resolve(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        match &self.width {
            Some(width) => sheet.push("flex", "none").push("width", width.as_str()),
            None => sheet.push("flex", "1").push("width", "auto"),
        };
        sheet.push(
            "padding",
            self.padding.as_ref().map_or("0", CssLength::as_str),
        );
        if let Some(overflow) = &self.overflow_y {
            sheet.push("overflow-y", overflow.as_str());
        }
        if let Some(overflow) = &self.overflow_x {
            sheet.push("overflow-x", overflow.as_str());
        }
        if let Some(height) = &self.height {
            sheet.push("height", height.as_str());
        }
        if self.flex {
            sheet.push("display", "flex");
        }
        if let Some(align) = &self.align_items {
            sheet.push("align-items", align.as_str());
        }

        let fixed = self.width.is_some();
        for (query, span, offset) in [
            (MediaQuery::MinWidth(PHONE), self.span.sm, self.offset.sm),
            (MediaQuery::MinWidth(TABLET), self.span.md, self.offset.md),
            (MediaQuery::MinWidth(DESKTOP), self.span.lg, self.offset.lg),
        ] {
            let mut tier = Vec::new();
            if let Some(width) = span.percent().filter(|_| !fixed) {
                tier.push(Declaration::new("width", width));
                tier.push(Declaration::new("flex", "none"));
            }
            if let Some(margin) = offset.percent() {
                tier.push(Declaration::new("margin-left", margin));
            }
            if query == MediaQuery::MinWidth(DESKTOP) && self.full_height {
                tier.push(Declaration::new("height", MAX_BODY_HEIGHT));
            }
            sheet.media(query, tier);
        }

        if self.hide_on_mobile {
            sheet.media(
                MediaQuery::Below(PHONE),
                vec![Declaration::important("display", "none")],
            );
        }
        sheet
    }

    /// Declarations for the inner inset wrapper, when a margin is set.
    #[must_use]
    pub fn inner(&self) -> Option<StyleSheet> {
        self.margin.as_ref().map(|margin| {
            let mut sheet = StyleSheet::new();
            sheet
                .push("margin-left", margin.as_str())
                .push("margin-right", margin.as_str());
            sheet
        })
    }
}

/// Hints for a group of elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupHints {
    /// Flex row instead of inline block.
    pub horizontal: bool,
    /// Cross-axis alignment.
    pub align_items: Option<CssKeyword>,
    /// Main-axis distribution.
    pub justify_content: Option<CssKeyword>,
    /// Outer margin.
    pub margin: Option<CssLength>,
    /// Center horizontally with automatic margins; overrides `margin`.
    pub center: bool,
    /// Claim the remaining space inside a flex parent.
    pub full_width: bool,
}

impl GroupHints {
    /// Resolve the group's declarations.
    #[must_use]
    pub fn resolve(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        sheet.push(
            "display",
            if self.horizontal {
                "flex"
            } else {
                "inline-block"
            },
        );
        if let Some(justify) = &self.justify_content {
            sheet.push("justify-content", justify.as_str());
        }
        if let Some(align) = &self.align_items {
            sheet.push("align-items", align.as_str());
        }
        if let Some(margin) = &self.margin {
            sheet.push("margin", margin.as_str());
        }
        if self.center {
            sheet.push("margin", "0 auto");
        }
        if self.full_width {
            sheet.push("flex-grow", "1");
        }
        sheet
    }
}

/// Block that holds a page's content below the fixed navigation bar.
///
/// The bar is a sibling placed before this block, never a flex item beside it.
#[must_use]
pub fn page_body() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet
        .push("display", "block")
        .push("width", "100%")
        .push("min-height", MAX_BODY_HEIGHT);
    sheet
}
