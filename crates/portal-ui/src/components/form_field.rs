//! Labelled text input bound to a parent-owned draft.
//!
//! # Design
//! - The field holds no state; every keystroke is emitted through `update_state`.
//! - `value` always comes from the parent, so the draft stays the single source of truth.

use crate::core::form::{FieldValue, PostField};
use yew::prelude::*;

/// Update capability handed down by the form container.
pub(crate) type UpdateState = Callback<(PostField, FieldValue)>;

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub field: PostField,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub text_area: bool,
    pub update_state: UpdateState,
}

#[function_component(FormField)]
pub(crate) fn form_field(props: &FormFieldProps) -> Html {
    let field = props.field;
    let id = format!("field-{}", field.as_str());
    let emit = {
        let update_state = props.update_state.clone();
        move |value: String| update_state.emit((field, FieldValue::Text(value)))
    };

    let control = if props.text_area {
        html! {
            <textarea
                id={id.clone()}
                name={field.as_str()}
                class="portal-input"
                rows="4"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                        emit(input.value());
                    }
                })}
            />
        }
    } else {
        html! {
            <input
                id={id.clone()}
                name={field.as_str()}
                type="text"
                class="portal-input"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                        emit(input.value());
                    }
                })}
            />
        }
    };

    html! {
        <div class="portal-field">
            {props.label.clone().map(|label| html! {
                <label for={id.clone()} class="portal-label">{label}</label>
            }).unwrap_or_default()}
            {control}
        </div>
    }
}
