//! Responsive grid components: `Row`, `Col`, `Group`, and the page `Container`.
//!
//! # Design
//! - Props carry raw strings and column counts; they are validated into hints on every
//!   render and resolved into a scoped style sheet.
//! - Invalid hints render a visible error block instead of a silently wrong layout.

use crate::components::nav::Nav;
use crate::core::error::LayoutError;
use crate::core::layout::{
    ColHints, GroupHints, RowHints, Tiered, optional_keyword, optional_length, page_body,
};
use crate::core::style::StyleSheet;
use gloo::console;
use yew::prelude::*;
use yew::virtual_dom::VTag;

const CLASS_PREFIX: &str = "pl";

/// Class name scoped to `sheet` plus the `<style>` node that defines it.
pub(crate) fn scoped_class(sheet: &StyleSheet) -> (String, Html) {
    let class_name = sheet.class_name(CLASS_PREFIX);
    let css = sheet.render(&class_name);
    (class_name, html! { <style>{css}</style> })
}

/// Render `tag` with a class scoped to `sheet`, emitting the sheet as a sibling `<style>`.
pub(crate) fn styled_element(
    tag: &'static str,
    sheet: &StyleSheet,
    extra: &Classes,
    style: Option<&AttrValue>,
    children: Html,
) -> Html {
    let (class_name, style_node) = scoped_class(sheet);
    let mut node = VTag::new(tag);
    let mut classes = Classes::from(class_name);
    classes.push(extra.clone());
    node.add_attribute("class", classes.to_string());
    if let Some(style) = style {
        node.add_attribute("style", style.clone());
    }
    node.add_child(children);
    let node: Html = node.into();
    html! {
        <>
            {style_node}
            {node}
        </>
    }
}

/// Visible placeholder for rejected layout hints.
pub(crate) fn layout_error(component: &'static str, err: &LayoutError) -> Html {
    let message = err.to_string();
    console::error!("layout hint rejected", component, message.clone());
    html! {
        <div class="layout-error" role="alert">
            <strong>{component}</strong>{": "}{message}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RowProps {
    #[prop_or_default]
    pub max_height: Option<AttrValue>,
    #[prop_or_default]
    pub overflow_y: Option<AttrValue>,
    #[prop_or_default]
    pub margin: Option<AttrValue>,
    #[prop_or_default]
    pub justify_content: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn row_hints(props: &RowProps) -> Result<RowHints, LayoutError> {
    Ok(RowHints {
        max_height: optional_length(props.max_height.as_deref())?,
        overflow_y: optional_keyword(props.overflow_y.as_deref())?,
        margin: optional_length(props.margin.as_deref())?,
        justify_content: optional_keyword(props.justify_content.as_deref())?,
    })
}

#[function_component(Row)]
pub(crate) fn row(props: &RowProps) -> Html {
    match row_hints(props) {
        Ok(hints) => styled_element(
            "div",
            &hints.resolve(),
            &props.class,
            None,
            html! { for props.children.iter() },
        ),
        Err(err) => layout_error("Row", &err),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ColProps {
    #[prop_or_default]
    pub sm: u32,
    #[prop_or_default]
    pub md: u32,
    #[prop_or_default]
    pub lg: u32,
    #[prop_or_default]
    pub offset_sm: u32,
    #[prop_or_default]
    pub offset_md: u32,
    #[prop_or_default]
    pub offset_lg: u32,
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub padding: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
    #[prop_or_default]
    pub full_height: bool,
    #[prop_or_default]
    pub flex: bool,
    #[prop_or_default]
    pub align_items: Option<AttrValue>,
    #[prop_or_default]
    pub hide_on_mobile: bool,
    #[prop_or_default]
    pub overflow_x: Option<AttrValue>,
    #[prop_or_default]
    pub overflow_y: Option<AttrValue>,
    #[prop_or_default]
    pub margin: Option<AttrValue>,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn col_hints(props: &ColProps) -> Result<ColHints, LayoutError> {
    Ok(ColHints {
        span: Tiered::new(props.sm, props.md, props.lg)?,
        offset: Tiered::new(props.offset_sm, props.offset_md, props.offset_lg)?,
        width: optional_length(props.width.as_deref())?,
        padding: optional_length(props.padding.as_deref())?,
        height: optional_length(props.height.as_deref())?,
        full_height: props.full_height,
        flex: props.flex,
        align_items: optional_keyword(props.align_items.as_deref())?,
        hide_on_mobile: props.hide_on_mobile,
        overflow_x: optional_keyword(props.overflow_x.as_deref())?,
        overflow_y: optional_keyword(props.overflow_y.as_deref())?,
        margin: optional_length(props.margin.as_deref())?,
    })
}

#[function_component(Col)]
pub(crate) fn col(props: &ColProps) -> Html {
    let hints = match col_hints(props) {
        Ok(hints) => hints,
        Err(err) => return layout_error("Col", &err),
    };
    let children = html! { for props.children.iter() };
    let content = match hints.inner() {
        Some(inner) => html! { <div style={inner.inline()}>{children}</div> },
        None => children,
    };
    styled_element(
        "div",
        &hints.resolve(),
        &props.class,
        props.style.as_ref(),
        content,
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct GroupProps {
    #[prop_or_default]
    pub horizontal: bool,
    #[prop_or_default]
    pub align_items: Option<AttrValue>,
    #[prop_or_default]
    pub justify_content: Option<AttrValue>,
    #[prop_or_default]
    pub margin: Option<AttrValue>,
    #[prop_or_default]
    pub center: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn group_hints(props: &GroupProps) -> Result<GroupHints, LayoutError> {
    Ok(GroupHints {
        horizontal: props.horizontal,
        align_items: optional_keyword(props.align_items.as_deref())?,
        justify_content: optional_keyword(props.justify_content.as_deref())?,
        margin: optional_length(props.margin.as_deref())?,
        center: props.center,
        full_width: props.full_width,
    })
}

/// Div wrapper for a group of elements.
#[function_component(Group)]
pub(crate) fn group(props: &GroupProps) -> Html {
    match group_hints(props) {
        Ok(hints) => styled_element(
            "div",
            &hints.resolve(),
            &props.class,
            props.style.as_ref(),
            html! { for props.children.iter() },
        ),
        Err(err) => layout_error("Group", &err),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContainerProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page frame: the fixed navigation bar, then the page body stacked beneath it.
#[function_component(Container)]
pub(crate) fn container(props: &ContainerProps) -> Html {
    html! {
        <>
            <Nav />
            {styled_element(
                "main",
                &page_body(),
                &Classes::new(),
                None,
                html! { for props.children.iter() },
            )}
        </>
    }
}
