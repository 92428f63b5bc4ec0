//! Routing definitions for the Portal UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Landing,
    #[at("/polls/create")]
    CreatePost,
    #[at("/sublet")]
    Listings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
