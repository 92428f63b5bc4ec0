//! Fixed top navigation bar.
//!
//! # Design
//! - `NavBar` is prop-driven: it renders whatever session and path it is given.
//! - `Nav` connects it to the store's session and the router's current path.

use crate::components::atoms::{Button, Text};
use crate::components::layout::{Group, styled_element};
use crate::core::breakpoints::{MediaQuery, NAV_HEIGHT, PHONE};
use crate::core::session::{NavLink, Session};
use crate::core::store::AppStore;
use crate::core::style::{Declaration, StyleSheet};
use crate::core::theme;
use yew::prelude::*;
use yew_router::prelude::use_location;
use yewdux::prelude::use_selector;

fn bar_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet
        .push("padding", "1rem 1.5rem 0rem 1.5rem")
        .push("display", "flex")
        .push("width", "100%")
        .push("max-height", NAV_HEIGHT)
        .push("position", "fixed")
        .push("top", "0")
        .push("left", "0")
        .push("background", "rgba(255, 255, 255, 0.9)")
        .push("align-items", "center")
        .push("justify-content", "space-between")
        .push("z-index", "100");
    sheet
}

fn link_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet.push("margin-right", "4rem");
    sheet.media(
        MediaQuery::Below(PHONE),
        vec![Declaration::new("margin-right", "0.5rem")],
    );
    sheet
}

fn nav_link(link: &NavLink) -> Html {
    styled_element(
        "div",
        &link_sheet(),
        &Classes::new(),
        None,
        html! {
            <a href={link.href.clone()}>
                <Text heading=true>{link.title}</Text>
            </a>
        },
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavBarProps {
    pub session: Session,
    pub current_path: AttrValue,
}

#[function_component(NavBar)]
pub(crate) fn nav_bar(props: &NavBarProps) -> Html {
    let action = props.session.auth_action(&props.current_path);
    let links = props.session.nav_links();
    let bar = styled_element(
        "nav",
        &bar_sheet(),
        &Classes::new(),
        None,
        html! {
            <>
                <a href="/" class="portal-logo">
                    <img src="/static/logo.svg" alt="Portal" height="32" />
                </a>
                <Group horizontal=true margin="0 0 0.5rem 0">
                    { for links.iter().map(nav_link) }
                    <a href={action.href}>
                        <Button color={theme::MEDIUM_BLUE}>{action.label}</Button>
                    </a>
                </Group>
            </>
        },
    );
    html! {
        <>
            {bar}
            <div style={format!("width: 100%; height: {NAV_HEIGHT};")} />
        </>
    }
}

#[function_component(Nav)]
pub(crate) fn nav() -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    html! {
        <NavBar session={(*session).clone()} current_path={current_path} />
    }
}
