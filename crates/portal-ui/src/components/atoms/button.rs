//! Filled button tinted with a brand color.

use crate::components::layout::scoped_class;
use crate::core::style::StyleSheet;
use crate::core::theme::{self, ColorToken};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or(theme::MEDIUM_BLUE)]
    pub color: ColorToken,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

fn button_sheet(color: ColorToken) -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet
        .push("background-color", color.var())
        .push("color", theme::WHITE.var())
        .push("border", "none")
        .push("border-radius", "0.5rem")
        .push("padding", "0.5rem 1rem")
        .push("margin-right", "0.5rem")
        .push("font-weight", "600")
        .push("cursor", "pointer");
    sheet
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let (class_name, style_node) = scoped_class(&button_sheet(props.color));
    html! {
        <>
            {style_node}
            <button
                type="button"
                class={classes!("portal-button", class_name)}
                disabled={props.disabled}
                onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        </>
    }
}
