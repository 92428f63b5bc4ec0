use crate::components::form_field::UpdateState;
use crate::components::landing::LandingPage;
use crate::components::layout::{Col, Container, Row};
use crate::components::post_form::PostForm;
use crate::components::property_card::PropertyGrid;
use crate::core::form::{FieldValue, PostDraft, PostField};
use crate::core::store::{
    AppStore, apply_field_update, begin_listings_fetch, finish_listings_fetch,
};
use crate::core::theme;
use api::ApiCtx;
use gloo::console;
use preferences::{api_base_url, load_post_draft, sync_post_draft};
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;

#[function_component(PortalApp)]
pub(crate) fn portal_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    {
        let dispatch = Dispatch::<AppStore>::new();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    match client.fetch_session().await {
                        Ok(session) => dispatch.reduce_mut(|store| store.session = session),
                        Err(err) => console::warn!("session lookup failed", err.to_string()),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <style>{theme::root_variables()}</style>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::CreatePost => html! { <CreatePostPage /> },
        Route::Listings => html! { <ListingsPage /> },
        Route::NotFound => html! {
            <Container>
                <h3>{"Page not found"}</h3>
                <Link<Route> to={Route::Landing}>{"Back to Portal"}</Link<Route>>
            </Container>
        },
    }
}

#[function_component(CreatePostPage)]
fn create_post_page() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let draft = use_selector(|store: &AppStore| store.post.draft.clone());
    let error = use_selector(|store: &AppStore| store.post.error.clone());

    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |draft| {
                sync_post_draft(draft);
                || ()
            },
            draft,
        );
    }

    let update_state: UpdateState = {
        let dispatch = dispatch.clone();
        Callback::from(move |(field, value): (PostField, FieldValue)| {
            dispatch.reduce_mut(|store| {
                if let Err(err) = apply_field_update(store, field, value) {
                    console::warn!("form update rejected", err.to_string());
                }
            });
        })
    };
    let reset = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| store.post.draft = PostDraft::default());
    });

    html! {
        <Container>
            <Row>
                <Col sm=12 md=8 lg=6 offset_md=2 offset_lg=3 padding="1.5rem">
                    <PostForm
                        state={(*draft).clone()}
                        update_state={update_state}
                        error={(*error).clone().map(AttrValue::from)}
                    />
                    <button type="button" class="portal-link" onclick={reset}>{"Discard draft"}</button>
                </Col>
            </Row>
        </Container>
    }
}

#[function_component(ListingsPage)]
fn listings_page() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let client = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url()))
        .client;
    let properties = use_selector(|store: &AppStore| store.listings.properties.clone());
    let loading = use_selector(|store: &AppStore| store.listings.loading);
    let error = use_selector(|store: &AppStore| store.listings.error.clone());

    use_effect_with_deps(
        move |_| {
            dispatch.reduce_mut(begin_listings_fetch);
            yew::platform::spawn_local(async move {
                let outcome = client.fetch_properties().await;
                if let Err(err) = &outcome {
                    console::error!("listing fetch failed", err.to_string());
                }
                dispatch.reduce_mut(|store| finish_listings_fetch(store, outcome));
            });
            || ()
        },
        (),
    );

    html! {
        <Container>
            if *loading {
                <p class="muted">{"Loading listings…"}</p>
            }
            if let Some(error) = (*error).clone() {
                <p class="portal-error" role="alert">{error}</p>
            }
            <PropertyGrid properties={(*properties).clone()} />
        </Container>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    // Restore before the first render so the first sync sees the stored draft, not a blank one.
    let draft = load_post_draft();
    Dispatch::<AppStore>::new().reduce_mut(|store| store.post.draft = draft);
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PortalApp>::with_root(root).render();
    } else {
        yew::Renderer::<PortalApp>::new().render();
    }
}
