//! Post submission form: content, visibility dates and reviewer notes.

use crate::components::atoms::{Button, Card, Heading3, Text};
use crate::components::date_picker::DatePickerForm;
use crate::components::form_field::{FormField, UpdateState};
use crate::components::layout::Group;
use crate::core::form::{PostDraft, PostField};
use crate::core::theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PostFormProps {
    pub state: PostDraft,
    pub update_state: UpdateState,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(PostForm)]
pub(crate) fn post_form(props: &PostFormProps) -> Html {
    let image_file = use_node_ref();
    let browse = {
        let image_file = image_file.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = image_file.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };
    let state = &props.state;
    let text_field = |field: PostField,
                      label: Option<&'static str>,
                      placeholder: &'static str,
                      text_area: bool| {
        html! {
            <FormField
                label={label.map(AttrValue::from)}
                field={field}
                value={AttrValue::from(state.text(field).to_string())}
                placeholder={placeholder}
                text_area={text_area}
                update_state={props.update_state.clone()}
            />
        }
    };
    let issues = state.validate();

    html! {
        <>
            <Heading3>{"Content"}</Heading3>
            <Card>
                {text_field(PostField::Title, Some("Title"), "e.g. Apply to Penn Labs!", false)}
                {text_field(
                    PostField::Subtitle,
                    Some("Description"),
                    "e.g. Interested in developing new features for Penn Mobile? Come out and meet the team!",
                    true,
                )}
                {text_field(PostField::Source, Some("Organization"), "e.g. Penn Labs", false)}
                {text_field(PostField::PostUrl, Some("Link"), "e.g. https://pennlabs.org", false)}
                <Text bold=true heading=true>{"Add Cover Image"}</Text>
                <input accept="image/*" type="file" ref={image_file} hidden=true />
                <Group horizontal=true>
                    <Button color={theme::IMAGE_BLUE} onclick={browse}>{"Browse"}</Button>
                    if !state.image_url.is_empty() {
                        <Button color={theme::IMAGE_BLUE}>{"Crop"}</Button>
                    }
                </Group>
            </Card>

            <Heading3>{"Visibility"}</Heading3>
            <Card>
                <Text bold=true>{"Dates"}</Text>
                <DatePickerForm
                    update_state={props.update_state.clone()}
                    start_date={state.start_date}
                    expire_date={state.expire_date}
                />
            </Card>

            <Heading3>{"Notes"}</Heading3>
            <Card>
                <Text>{"Portal admin will see this message during the review process."}</Text>
                {text_field(PostField::UserComments, None, "Enter any comments here.", true)}
            </Card>

            if let Some(error) = props.error.clone() {
                <p class="portal-error" role="alert">{error}</p>
            }
            if !issues.is_empty() {
                <ul class="portal-issues">
                    { for issues.iter().map(|issue| html! { <li>{issue.to_string()}</li> }) }
                </ul>
            }
        </>
    }
}
