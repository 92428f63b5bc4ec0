//! Error types for the Portal UI.
//!
//! # Design
//! - Reject bad layout hints and form input when they are built, never at render time.
//! - Keep DOM-free errors separate from transport failures so core stays testable.

use thiserror::Error;

/// Invalid layout hint input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Column fraction above the 12-column grid.
    #[error("column fraction {value} is outside 0..=12")]
    FractionOutOfRange {
        /// Offending fraction.
        value: u32,
    },
    /// Length value that cannot be emitted as a CSS value.
    #[error("invalid CSS length '{value}'")]
    InvalidLength {
        /// Offending length text.
        value: String,
    },
    /// Keyword value that cannot be emitted as a CSS value.
    #[error("invalid CSS keyword '{value}'")]
    InvalidKeyword {
        /// Offending keyword text.
        value: String,
    },
}

/// Invalid update to a form draft.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field name is not part of the draft.
    #[error("unknown form field '{name}'")]
    UnknownField {
        /// Name supplied by the caller.
        name: String,
    },
    /// Value kind does not match the field kind.
    #[error("field '{field}' expects a {expected} value")]
    TypeMismatch {
        /// Wire name of the field.
        field: &'static str,
        /// Expected value kind.
        expected: &'static str,
    },
}

/// Display formatting failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Date text was neither `YYYY-MM-DD` nor RFC 3339.
    #[error("invalid date '{value}'")]
    InvalidDate {
        /// Offending date text.
        value: String,
    },
}

/// Top-level error surfaced by UI flows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UiError {
    /// Layout hint rejected.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Form update rejected.
    #[error(transparent)]
    Form(#[from] FormError),
    /// Formatting failed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Request failed or returned an unexpected status.
    #[error("request to {url} failed: {detail}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport or status detail.
        detail: String,
    },
    /// Response body could not be decoded.
    #[error("failed to decode response from {url}: {detail}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder message.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = LayoutError::FractionOutOfRange { value: 13 };
        assert_eq!(err.to_string(), "column fraction 13 is outside 0..=12");
        let err = FormError::TypeMismatch {
            field: "title",
            expected: "text",
        };
        assert_eq!(err.to_string(), "field 'title' expects a text value");
    }

    #[test]
    fn ui_error_wraps_transparently() {
        let err: UiError = FormatError::InvalidDate {
            value: "soon".into(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid date 'soon'");
    }
}
