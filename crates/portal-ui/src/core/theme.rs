//! Brand colors for the Portal UI.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Identifier used for CSS custom properties (e.g. `medium-blue`).
    pub name: &'static str,
    /// Hex RGB(A) value.
    pub hex: &'static str,
}

impl ColorToken {
    /// CSS custom property reference for the token.
    #[must_use]
    pub fn var(self) -> String {
        format!("var(--portal-{}, {})", self.name, self.hex)
    }
}

macro_rules! tokens {
    ($($ident:ident => $name:literal, $hex:literal;)*) => {
        $(
            #[doc = concat!("`", $hex, "`")]
            pub const $ident: ColorToken = ColorToken { name: $name, hex: $hex };
        )*

        /// Every token, in declaration order.
        pub const ALL: &[ColorToken] = &[$($ident),*];
    };
}

tokens! {
    WHITE => "white", "#ffffff";
    YELLOW => "yellow", "#F2C94C";
    ORANGE => "orange", "#f2994a";
    LIGHT_RED => "light-red", "#EED4D4";
    RED => "red", "#EB9387";
    DARK_RED => "dark-red", "#AE2727";
    PURPLE => "purple", "#a98abf";
    LIGHT_BLUE => "light-blue", "#d3e3f5";
    MEDIUM_BLUE => "medium-blue", "#2175cb";
    IMAGE_BLUE => "image-blue", "#2D9CDB";
    NAV_BACKGROUND => "nav-background", "#f7f7f7";
    NAV_PROFILE_BACKGROUND => "nav-profile-background", "#D3E3F566";
    GRAY => "gray", "#999999";
    LIGHTER_GRAY => "lighter-gray", "#e5e5e5";
    LIGHT_GRAY => "light-gray", "#bdbdbd";
    DARK_GRAY => "dark-gray", "#828282";
    LIGHT_GREEN => "light-green", "#D4EEDF";
    GREEN => "green", "#3faa6d";
}

/// `:root` block declaring every token as a custom property.
#[must_use]
pub fn root_variables() -> String {
    let mut css = String::from(":root {");
    for token in ALL {
        css.push_str(&format!(" --portal-{}: {};", token.name, token.hex));
    }
    css.push_str(" }");
    css
}
