//! Current-user state and the navigation it drives.
//!
//! # Design
//! - Presence of a user is the only distinction; roles are not modelled.
//! - Link sets and the login/logout target are plain data so the nav bar stays dumb.

use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by `/api/accounts/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account username.
    pub username: String,
    /// Given name, when the account has one.
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Who is using the UI right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A user is signed in.
    Authenticated(UserProfile),
}

impl Session {
    /// Whether a user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Links shown in the navigation bar for this session.
    #[must_use]
    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.is_authenticated() {
            vec![NavLink::new("Create", "/polls/create")]
        } else {
            ["Home", "About", "Tutorial", "Team"]
                .into_iter()
                .map(NavLink::titled)
                .collect()
        }
    }

    /// Label and target of the login/logout button, returning to `current_path`.
    #[must_use]
    pub fn auth_action(&self, current_path: &str) -> AuthAction {
        let (label, verb) = if self.is_authenticated() {
            ("Logout", "logout")
        } else {
            ("Login", "login")
        };
        AuthAction {
            label,
            href: format!(
                "/api/accounts/{verb}/?next={}",
                urlencoding::encode(current_path)
            ),
        }
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible title.
    pub title: &'static str,
    /// Target path.
    pub href: String,
}

impl NavLink {
    fn new(title: &'static str, href: &str) -> Self {
        Self {
            title,
            href: href.to_string(),
        }
    }

    fn titled(title: &'static str) -> Self {
        Self {
            title,
            href: format!("/{title}"),
        }
    }
}

/// Login or logout button contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthAction {
    /// Button text.
    pub label: &'static str,
    /// Server route that starts the flow.
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        Session::Authenticated(UserProfile {
            username: "quaker".into(),
            first_name: None,
        })
    }

    #[test]
    fn anonymous_sees_landing_links() {
        let links = Session::Anonymous.nav_links();
        let titles: Vec<_> = links.iter().map(|link| link.title).collect();
        assert_eq!(titles, ["Home", "About", "Tutorial", "Team"]);
        assert_eq!(links[2].href, "/Tutorial");
    }

    #[test]
    fn authenticated_sees_create_only() {
        assert_eq!(
            signed_in().nav_links(),
            vec![NavLink::new("Create", "/polls/create")]
        );
    }

    #[test]
    fn auth_action_returns_to_current_path() {
        let login = Session::Anonymous.auth_action("/");
        assert_eq!(login.label, "Login");
        assert_eq!(login.href, "/api/accounts/login/?next=%2F");

        let logout = signed_in().auth_action("/polls/create");
        assert_eq!(logout.label, "Logout");
        assert_eq!(logout.href, "/api/accounts/logout/?next=%2Fpolls%2Fcreate");
    }

    #[test]
    fn profile_decodes_without_optional_fields() {
        let profile: Result<UserProfile, _> = serde_json::from_str(r#"{"username":"ben"}"#);
        assert_eq!(
            profile.ok(),
            Some(UserProfile {
                username: "ben".into(),
                first_name: None
            })
        );
    }
}
