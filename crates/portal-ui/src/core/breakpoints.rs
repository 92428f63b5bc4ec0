//! Responsive breakpoint definitions for the Portal UI.
//!
//! # Design
//! - Three ascending tiers drive every responsive layout rule (mobile first).
//! - Thresholds are process-wide constants; components never override them.

use std::fmt;

/// Layout tier with an inclusive minimum viewport width in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Breakpoint {
    /// Short tier name used in diagnostics.
    pub name: &'static str,
    /// Inclusive minimum width in CSS pixels.
    pub min_width: u16,
}

/// Phone tier (the narrowest breakpoint).
pub const PHONE: Breakpoint = Breakpoint {
    name: "phone",
    min_width: 584,
};
/// Tablet tier.
pub const TABLET: Breakpoint = Breakpoint {
    name: "tablet",
    min_width: 784,
};
/// Desktop tier (the widest breakpoint).
pub const DESKTOP: Breakpoint = Breakpoint {
    name: "desktop",
    min_width: 1024,
};

/// Ordered tiers, narrowest first.
pub const BREAKPOINTS: [Breakpoint; 3] = [PHONE, TABLET, DESKTOP];

/// Height of the fixed navigation bar.
pub const NAV_HEIGHT: &str = "4rem";

/// Tallest a full-height column may grow at the desktop tier.
pub const MAX_BODY_HEIGHT: &str = "calc(100vh - 4rem)";

/// Media query condition attached to a block of declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    /// Matches viewports at or above the breakpoint.
    MinWidth(Breakpoint),
    /// Matches viewports strictly below the breakpoint.
    Below(Breakpoint),
}

impl MediaQuery {
    /// Whether a viewport of `width` pixels satisfies the query.
    #[must_use]
    pub const fn matches(self, width: u16) -> bool {
        match self {
            Self::MinWidth(bp) => width >= bp.min_width,
            Self::Below(bp) => width < bp.min_width,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinWidth(bp) => write!(f, "@media screen and (min-width: {}px)", bp.min_width),
            // Fractional pixel keeps the two queries from overlapping at the threshold.
            Self::Below(bp) => write!(
                f,
                "@media screen and (max-width: {}.98px)",
                bp.min_width.saturating_sub(1)
            ),
        }
    }
}

/// Widest tier whose threshold the viewport reaches, if any.
#[must_use]
pub fn for_width(width: u16) -> Option<Breakpoint> {
    BREAKPOINTS
        .iter()
        .rev()
        .copied()
        .find(|bp| width >= bp.min_width)
}
