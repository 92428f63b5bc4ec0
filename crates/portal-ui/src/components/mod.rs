pub(crate) mod atoms;
pub(crate) mod date_picker;
pub(crate) mod form_field;
pub(crate) mod landing;
pub(crate) mod layout;
pub(crate) mod nav;
pub(crate) mod post_form;
pub(crate) mod property_card;
