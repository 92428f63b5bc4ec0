use crate::components::layout::styled_element;
use crate::core::style::StyleSheet;
use crate::core::theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let mut sheet = StyleSheet::new();
    sheet
        .push("background", theme::WHITE.var())
        .push("border", format!("1px solid {}", theme::LIGHTER_GRAY.var()))
        .push("border-radius", "0.75rem")
        .push("padding", "1.5rem")
        .push("margin-bottom", "1.5rem");
    styled_element(
        "div",
        &sheet,
        &props.class,
        None,
        html! { for props.children.iter() },
    )
}
