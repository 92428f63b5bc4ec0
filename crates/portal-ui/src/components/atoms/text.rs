//! Typography atoms.

use crate::core::theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    #[prop_or_default]
    pub bold: bool,
    #[prop_or_default]
    pub heading: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    let classes = classes!(
        "portal-text",
        props.bold.then_some("bold"),
        props.heading.then_some("heading")
    );
    html! { <p class={classes}>{ for props.children.iter() }</p> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HeadingProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Heading3)]
pub(crate) fn heading3(props: &HeadingProps) -> Html {
    html! { <h3 class="portal-heading">{ for props.children.iter() }</h3> }
}

#[function_component(Title)]
pub(crate) fn title(props: &HeadingProps) -> Html {
    html! {
        <h1 class="portal-title" style={format!("color: {};", theme::DARK_GRAY.var())}>
            { for props.children.iter() }
        </h1>
    }
}
