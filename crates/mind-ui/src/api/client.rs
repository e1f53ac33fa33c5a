use gloo_net::http::{Method, RequestBuilder, Response};
use leptos::logging::{error, log};
use mind_types::guard::LOGIN_PATH;
use mind_types::session::{ClientKind, CredentialStore};
use mind_types::ApiError;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{FormData, RequestCredentials};

use super::storage::BrowserStore;

/// Request body variants the backend accepts.
enum Payload {
    Empty,
    Json(String),
    Form(FormData),
}

/// HTTP client for the backend API. Paths are relative to the page origin,
/// which the console proxies to the backend.
#[derive(Clone, Debug)]
pub struct Client {
    kind: ClientKind,
}

impl Client {
    pub fn new(kind: ClientKind) -> Self {
        Self { kind }
    }

    pub fn authenticated() -> Self {
        Self::new(ClientKind::Authenticated)
    }

    pub fn public() -> Self {
        Self::new(ClientKind::Public)
    }

    pub fn bearer(token: &str) -> Self {
        Self::new(ClientKind::Bearer(token.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, Payload::Empty).await?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, json(body)?).await?;
        decode(response).await
    }

    /// POST whose response body is not needed.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(Method::POST, path, json(body)?).await?;
        Ok(())
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, Payload::Form(form)).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, Payload::Empty).await?;
        Ok(())
    }

    /// Raw response body, for CSV and Excel downloads.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(Method::GET, path, Payload::Empty).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn is_public(&self) -> bool {
        self.kind == ClientKind::Public
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<Response, ApiError> {
        let url = path;
        let verb = format!("{method:?}");
        let authorization = self.kind.authorization(&BrowserStore);

        let mut builder = RequestBuilder::new(url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(value) = &authorization {
            builder = builder.header("Authorization", value);
        }
        if self.is_public() {
            builder = builder.credentials(RequestCredentials::Omit);
            log!(
                "[public] request {verb} {url} hasAuth={}",
                authorization.is_some()
            );
        }

        let request = match payload {
            Payload::Empty => builder.build(),
            Payload::Json(body) => builder.header("Content-Type", "application/json").body(body),
            Payload::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            if self.is_public() {
                error!("[public] {verb} {url} failed: {e}");
            }
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if self.is_public() {
            log!("[public] response {url} -> {status}");
        }

        if self.kind.on_status(&BrowserStore, status) {
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            if self.is_public() {
                error!("[public] {url} -> {status}: {err}");
            }
            return Err(err);
        }

        Ok(response)
    }
}

fn json<B: Serialize>(body: &B) -> Result<Payload, ApiError> {
    serde_json::to_string(body)
        .map(Payload::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Full page load, so every signal and pending request starts over.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(LOGIN_PATH) {
            error!("redirect to {LOGIN_PATH} failed: {e:?}");
        }
    }
}
