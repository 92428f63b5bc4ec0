//! Sublet property listing model and the display helpers its card uses.

use crate::core::error::FormatError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One uploaded listing photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    /// Image identifier.
    pub id: u64,
    /// Image URL.
    pub image: String,
}

/// Property listing as served by `/api/sublet/properties/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Listing identifier.
    pub id: u64,
    /// Listing headline.
    pub title: String,
    /// Full street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Monthly price.
    pub price: f64,
    /// First day of the sublet.
    pub start_date: String,
    /// Last day of the sublet.
    pub end_date: String,
    /// Listing photos.
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    /// Offers awaiting a response from the subletter.
    #[serde(default)]
    pub pending_offers: u32,
}

impl Property {
    /// Date range as `Jan 5 - Feb 10`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDate`] when either end does not parse.
    pub fn date_range(&self) -> Result<String, FormatError> {
        Ok(format!(
            "{} - {}",
            format_short_date(&self.start_date)?,
            format_short_date(&self.end_date)?
        ))
    }

    /// Street portion of the address.
    #[must_use]
    pub fn street_line(&self) -> Option<&str> {
        self.address
            .as_deref()
            .and_then(|address| address.split(',').next())
            .map(str::trim)
    }

    /// Price in its shortest form: `1200`, `999.5`.
    #[must_use]
    pub fn price_text(&self) -> String {
        format_price(self.price)
    }
}

/// Format a calendar date as an en-US short month and day (`Jan 5`).
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or RFC 3339. Offsets
/// are kept as written rather than shifted into the viewer's zone.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] for anything else.
pub fn format_short_date(raw: &str) -> Result<String, FormatError> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|value| value.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|value| value.date_naive())
        })
        .ok_or_else(|| FormatError::InvalidDate {
            value: raw.to_string(),
        })?;
    Ok(date.format("%b %-d").to_string())
}

/// Render a price the way the listing API's number reads: no trailing zeros, no
/// padding to cents.
#[must_use]
pub fn format_price(price: f64) -> String {
    price.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Property {
        Property {
            id: 1,
            title: "Hamilton Court".into(),
            address: Some("3900 Chestnut St, Philadelphia, PA".into()),
            price: 1200.0,
            start_date: "2024-05-20".into(),
            end_date: "2024-08-01T00:00:00-04:00".into(),
            images: Vec::new(),
            pending_offers: 2,
        }
    }

    #[test]
    fn short_dates_use_month_abbreviation() {
        assert_eq!(format_short_date("2024-01-05").as_deref(), Ok("Jan 5"));
        assert_eq!(
            format_short_date("2024-12-25T10:00:00").as_deref(),
            Ok("Dec 25")
        );
        assert_eq!(
            format_short_date("2024-07-04T23:30:00Z").as_deref(),
            Ok("Jul 4")
        );
    }

    #[test]
    fn malformed_dates_fail() {
        assert_eq!(
            format_short_date("next tuesday"),
            Err(FormatError::InvalidDate {
                value: "next tuesday".into()
            })
        );
        assert!(format_short_date("2024-02-30").is_err());
    }

    #[test]
    fn card_lines() {
        let property = listing();
        assert_eq!(property.date_range().as_deref(), Ok("May 20 - Aug 1"));
        assert_eq!(property.street_line(), Some("3900 Chestnut St"));
        assert_eq!(property.price_text(), "1200");
    }

    #[test]
    fn missing_address_has_no_street() {
        let property = Property {
            address: None,
            ..listing()
        };
        assert_eq!(property.street_line(), None);
    }

    #[test]
    fn prices_drop_trailing_zeros() {
        assert_eq!(format_price(999.5), "999.5");
        assert_eq!(format_price(1249.99), "1249.99");
        assert_eq!(format_price(850.0), "850");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn decodes_api_payload() {
        let json = r#"[{"id":7,"title":"Loft","price":950,"start_date":"2024-06-01","end_date":"2024-08-15","images":[{"id":1,"image":"/media/a.jpg"}]}]"#;
        let listings: Vec<Property> = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].address, None);
        assert_eq!(listings[0].pending_offers, 0);
        assert_eq!(listings[0].images[0].image, "/media/a.jpg");
    }
}
