//! Post draft record and its single-writer update path.
//!
//! # Design
//! - Form components never own field state; they emit `(field, value)` pairs.
//! - The store applies each pair through [`PostDraft::apply`], one at a time.
//! - Field names match the wire names used by the posts API.

use crate::core::error::{FormError, FormatError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATETIME_INPUT: &str = "%Y-%m-%dT%H:%M";
const DATETIME_INPUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Editable field of a [`PostDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostField {
    /// Post title.
    Title,
    /// Longer description.
    Subtitle,
    /// Publishing organization.
    Source,
    /// Call-to-action link.
    PostUrl,
    /// Cover image location.
    ImageUrl,
    /// Notes for the reviewing admin.
    UserComments,
    /// First moment the post is visible.
    StartDate,
    /// Moment the post stops being visible.
    ExpireDate,
}

impl PostField {
    /// Every field in form order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Subtitle,
        Self::Source,
        Self::PostUrl,
        Self::ImageUrl,
        Self::UserComments,
        Self::StartDate,
        Self::ExpireDate,
    ];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Source => "source",
            Self::PostUrl => "postUrl",
            Self::ImageUrl => "imageUrl",
            Self::UserComments => "userComments",
            Self::StartDate => "startDate",
            Self::ExpireDate => "expireDate",
        }
    }

    /// Whether the field holds a date rather than text.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::StartDate | Self::ExpireDate)
    }
}

impl FromStr for PostField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a single field update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// Local date and time.
    Date(NaiveDateTime),
    /// Cleared value.
    Empty,
}

impl FieldValue {
    /// Parse the value of a `datetime-local` input; blank input clears the field.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDate`] for anything else that does not parse.
    pub fn from_datetime_input(raw: &str) -> Result<Self, FormatError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Empty);
        }
        NaiveDateTime::parse_from_str(trimmed, DATETIME_INPUT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATETIME_INPUT_SECONDS))
            .map(Self::Date)
            .map_err(|_| FormatError::InvalidDate {
                value: raw.to_string(),
            })
    }
}

/// Render a stored date in the shape a `datetime-local` input expects.
#[must_use]
pub fn datetime_input_value(value: Option<NaiveDateTime>) -> String {
    value
        .map(|date| date.format(DATETIME_INPUT).to_string())
        .unwrap_or_default()
}

/// Problem that keeps a draft from being submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DraftIssue {
    /// Title is blank.
    #[error("A title is required.")]
    MissingTitle,
    /// Expire date is not after the start date.
    #[error("The expiration date must be after the start date.")]
    ExpiresBeforeStart,
}

/// Post being composed in the submission form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Post title.
    pub title: String,
    /// Longer description.
    pub subtitle: String,
    /// Publishing organization.
    pub source: String,
    /// Call-to-action link.
    pub post_url: String,
    /// Cover image location.
    pub image_url: String,
    /// Notes for the reviewing admin.
    pub user_comments: String,
    /// First moment the post is visible.
    pub start_date: Option<NaiveDateTime>,
    /// Moment the post stops being visible.
    pub expire_date: Option<NaiveDateTime>,
}

impl PostDraft {
    /// Current text of a text field; empty for date fields.
    #[must_use]
    pub fn text(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Subtitle => &self.subtitle,
            PostField::Source => &self.source,
            PostField::PostUrl => &self.post_url,
            PostField::ImageUrl => &self.image_url,
            PostField::UserComments => &self.user_comments,
            PostField::StartDate | PostField::ExpireDate => "",
        }
    }

    /// Write one field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::TypeMismatch`] when a date is written to a text field or
    /// text to a date field; the draft is left untouched.
    pub fn apply(&mut self, field: PostField, value: FieldValue) -> Result<(), FormError> {
        match field {
            PostField::Title => self.title = text_value(field, value)?,
            PostField::Subtitle => self.subtitle = text_value(field, value)?,
            PostField::Source => self.source = text_value(field, value)?,
            PostField::PostUrl => self.post_url = text_value(field, value)?,
            PostField::ImageUrl => self.image_url = text_value(field, value)?,
            PostField::UserComments => self.user_comments = text_value(field, value)?,
            PostField::StartDate => self.start_date = date_value(field, value)?,
            PostField::ExpireDate => self.expire_date = date_value(field, value)?,
        }
        Ok(())
    }

    /// Whether nothing has been entered; a blank draft is not worth storing.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Issues blocking submission, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(DraftIssue::MissingTitle);
        }
        if let (Some(start), Some(expire)) = (self.start_date, self.expire_date) {
            if expire <= start {
                issues.push(DraftIssue::ExpiresBeforeStart);
            }
        }
        issues
    }
}

fn text_value(field: PostField, value: FieldValue) -> Result<String, FormError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::Empty => Ok(String::new()),
        FieldValue::Date(_) => Err(FormError::TypeMismatch {
            field: field.as_str(),
            expected: "text",
        }),
    }
}

fn date_value(field: PostField, value: FieldValue) -> Result<Option<NaiveDateTime>, FormError> {
    match value {
        FieldValue::Date(date) => Ok(Some(date)),
        FieldValue::Empty => Ok(None),
        FieldValue::Text(_) => Err(FormError::TypeMismatch {
            field: field.as_str(),
            expected: "date",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .unwrap_or_default()
    }

    #[test]
    fn field_names_round_trip_wire_names() {
        for field in PostField::ALL {
            assert_eq!(field.as_str().parse::<PostField>(), Ok(field));
            assert_eq!(field.is_date(), field.as_str().ends_with("Date"));
        }
        assert_eq!(
            "imageURL".parse::<PostField>(),
            Err(FormError::UnknownField {
                name: "imageURL".into()
            })
        );
    }

    #[test]
    fn text_updates_touch_one_field() {
        let mut draft = PostDraft::default();
        assert!(
            draft
                .apply(PostField::Source, FieldValue::Text("Penn Labs".into()))
                .is_ok()
        );
        assert!(
            draft
                .apply(PostField::UserComments, FieldValue::Text("thanks".into()))
                .is_ok()
        );
        assert_eq!(draft.text(PostField::Source), "Penn Labs");
        assert_eq!(draft.user_comments, "thanks");
        assert!(draft.title.is_empty());
        assert!(draft.apply(PostField::Source, FieldValue::Empty).is_ok());
        assert!(draft.source.is_empty());
    }

    #[test]
    fn mismatched_values_are_rejected() {
        let mut draft = PostDraft::default();
        assert_eq!(
            draft.apply(PostField::Title, FieldValue::Date(at(1))),
            Err(FormError::TypeMismatch {
                field: "title",
                expected: "text"
            })
        );
        assert_eq!(
            draft.apply(PostField::StartDate, FieldValue::Text("today".into())),
            Err(FormError::TypeMismatch {
                field: "startDate",
                expected: "date"
            })
        );
        assert_eq!(draft, PostDraft::default());
    }

    #[test]
    fn dates_set_and_clear() {
        let mut draft = PostDraft::default();
        assert!(
            draft
                .apply(PostField::ExpireDate, FieldValue::Date(at(4)))
                .is_ok()
        );
        assert_eq!(draft.expire_date, Some(at(4)));
        assert!(draft.apply(PostField::ExpireDate, FieldValue::Empty).is_ok());
        assert_eq!(draft.expire_date, None);
    }

    #[test]
    fn datetime_input_parsing() {
        assert_eq!(
            FieldValue::from_datetime_input("2024-03-02T09:30"),
            Ok(FieldValue::Date(at(2)))
        );
        assert_eq!(FieldValue::from_datetime_input(" "), Ok(FieldValue::Empty));
        assert!(FieldValue::from_datetime_input("March 2nd").is_err());
        assert_eq!(datetime_input_value(Some(at(2))), "2024-03-02T09:30");
        assert_eq!(datetime_input_value(None), "");
    }

    #[test]
    fn validation_flags_title_and_date_order() {
        let mut draft = PostDraft {
            start_date: Some(at(5)),
            expire_date: Some(at(5)),
            ..PostDraft::default()
        };
        assert_eq!(
            draft.validate(),
            vec![DraftIssue::MissingTitle, DraftIssue::ExpiresBeforeStart]
        );
        draft.title = "Apply to Penn Labs!".into();
        draft.expire_date = Some(at(6));
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn draft_serializes_with_wire_names() {
        let draft = PostDraft {
            post_url: "https://pennlabs.org".into(),
            ..PostDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap_or_default();
        assert_eq!(json["postUrl"], "https://pennlabs.org");
        assert!(json["startDate"].is_null());
    }

    #[test]
    fn blank_until_any_field_is_set() {
        let mut draft = PostDraft::default();
        assert!(draft.is_blank());
        assert!(
            draft
                .apply(PostField::ExpireDate, FieldValue::Date(at(3)))
                .is_ok()
        );
        assert!(!draft.is_blank());
        assert!(draft.apply(PostField::ExpireDate, FieldValue::Empty).is_ok());
        assert!(draft.is_blank());
    }
}
