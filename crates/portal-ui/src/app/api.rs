//! HTTP client helpers (REST) and the context that shares one client per app boot.

use crate::core::endpoints::Endpoints;
use crate::core::error::UiError;
use crate::core::property::Property;
use crate::core::session::{Session, UserProfile};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    async fn get(url: &str) -> Result<Response, UiError> {
        Request::get(url)
            .send()
            .await
            .map_err(|err| UiError::Http {
                url: url.to_string(),
                detail: err.to_string(),
            })
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, UiError> {
        response.json::<T>().await.map_err(|err| UiError::Decode {
            url: url.to_string(),
            detail: err.to_string(),
        })
    }

    /// Signed-in user; any non-success status means nobody is signed in.
    pub(crate) async fn fetch_session(&self) -> Result<Session, UiError> {
        let url = self.endpoints.session();
        let response = Self::get(&url).await?;
        if !response.ok() {
            return Ok(Session::Anonymous);
        }
        let profile: UserProfile = Self::decode(&url, response).await?;
        Ok(Session::Authenticated(profile))
    }

    pub(crate) async fn fetch_properties(&self) -> Result<Vec<Property>, UiError> {
        let url = self.endpoints.properties();
        let response = Self::get(&url).await?;
        if !response.ok() {
            return Err(UiError::Http {
                url,
                detail: format!("status {}", response.status()),
            });
        }
        Self::decode(&url, response).await
    }
}

/// Shared API client context.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
