//! Start/expire date inputs for post visibility.

use crate::components::form_field::UpdateState;
use crate::components::layout::Group;
use crate::core::form::{FieldValue, PostField, datetime_input_value};
use chrono::NaiveDateTime;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DatePickerFormProps {
    #[prop_or_default]
    pub start_date: Option<NaiveDateTime>,
    #[prop_or_default]
    pub expire_date: Option<NaiveDateTime>,
    pub update_state: UpdateState,
}

fn date_input(
    field: PostField,
    label: &'static str,
    value: Option<NaiveDateTime>,
    update_state: &UpdateState,
) -> Html {
    let update_state = update_state.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        match FieldValue::from_datetime_input(&input.value()) {
            Ok(value) => update_state.emit((field, value)),
            Err(err) => console::warn!("date input rejected", field.as_str(), err.to_string()),
        }
    });
    html! {
        <div class="portal-field">
            <label class="portal-label" for={format!("field-{}", field.as_str())}>{label}</label>
            <input
                id={format!("field-{}", field.as_str())}
                name={field.as_str()}
                type="datetime-local"
                class="portal-input"
                value={datetime_input_value(value)}
                oninput={oninput}
            />
        </div>
    }
}

#[function_component(DatePickerForm)]
pub(crate) fn date_picker_form(props: &DatePickerFormProps) -> Html {
    html! {
        <Group horizontal=true align_items="flex-end">
            {date_input(PostField::StartDate, "Start", props.start_date, &props.update_state)}
            {date_input(PostField::ExpireDate, "Expire", props.expire_date, &props.update_state)}
        </Group>
    }
}
