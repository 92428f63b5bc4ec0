//! Shared UI atoms used across the pages.

pub(crate) mod button;
pub(crate) mod card;
pub(crate) mod text;

pub(crate) use button::Button;
pub(crate) use card::Card;
pub(crate) use text::{Heading3, Text, Title};
