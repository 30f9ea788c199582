//! HTTP client for the hosted data gateway (row store, object storage and
//! identity provider).
//!
//! The gateway speaks a row-oriented REST dialect: filtered selects via
//! query parameters (`?user_id=eq.<uid>&order=created_at.desc`), inserts and
//! partial updates that return the canonical row when asked to
//! (`Prefer: return=representation`), deletes by id, and named server-side
//! procedures under `/rest/v1/rpc/`. Object storage uploads by path and
//! resolves public URLs deterministically.
//!
//! All functions here only perform the call and map the outcome into
//! [`GatewayError`]; user-facing notifications are the entity modules' job.

use serde::de::DeserializeOwned;
use serde::Serialize;

use common::model::profile::AuthUser;
use gloo_net::http::{Request, RequestBuilder, Response};

/// Project endpoint and publishable key, embedded the same way the hosted
/// provider's generated clients embed them.
const GATEWAY_URL: &str = "https://nvjkkgtzkxmxzzbxhhnx.supabase.co";
const GATEWAY_KEY: &str = "sb_publishable_virtualcardpro_client_key";

/// Local-storage slot holding the bearer token of the signed-in session.
const SESSION_TOKEN_KEY: &str = "vcp_access_token";

/// Failure of a gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never completed (network, CORS, serialization).
    Transport(String),
    /// The gateway answered with a non-success status; carries the body text.
    Status(u16, String),
    /// The response body could not be decoded into the expected row shape.
    Decode(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "{}", msg),
            GatewayError::Status(status, body) if body.is_empty() => {
                write!(f, "HTTP {}", status)
            }
            GatewayError::Status(_, body) => write!(f, "{}", body),
            GatewayError::Decode(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<gloo_net::Error> for GatewayError {
    fn from(err: gloo_net::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", GATEWAY_URL, table)
}

/// Attaches the api key and, when a session exists, the bearer token.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("apikey", GATEWAY_KEY);
    match session_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder.header("Authorization", &format!("Bearer {}", GATEWAY_KEY)),
    }
}

/// Reads the stored session token, if any.
pub fn session_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_TOKEN_KEY).ok()?
}

/// Converts a non-success response into a [`GatewayError::Status`] carrying
/// the body text, the only error detail the gateway reliably provides.
async fn check(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Status(status, body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    response
        .json::<T>()
        .await
        .map_err(|err| GatewayError::Decode(err.to_string()))
}

/// Fetches every row of `table` owned by `user_id`, newest first.
pub async fn select_owned<T: DeserializeOwned>(
    table: &str,
    user_id: &str,
) -> Result<Vec<T>, GatewayError> {
    let url = format!(
        "{}?select=*&user_id=eq.{}&order=created_at.desc",
        rest_url(table),
        user_id
    );
    let response = authorize(Request::get(&url)).send().await?;
    decode(check(response).await?).await
}

/// Fetches at most one row of `table` where `column` equals `value`.
/// An empty result set is `Ok(None)`, not an error.
pub async fn select_one_by<T: DeserializeOwned>(
    table: &str,
    column: &str,
    value: &str,
) -> Result<Option<T>, GatewayError> {
    let url = format!(
        "{}?select=*&{}=eq.{}&limit=1",
        rest_url(table),
        column,
        js_sys::encode_uri_component(value)
    );
    let response = authorize(Request::get(&url)).send().await?;
    let rows: Vec<T> = decode(check(response).await?).await?;
    Ok(rows.into_iter().next())
}

/// Inserts one row and returns the canonical row the gateway stored
/// (server-assigned id and timestamps included).
pub async fn insert<T, P>(table: &str, payload: &P) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let response = authorize(Request::post(&rest_url(table)))
        .header("Prefer", "return=representation")
        .json(payload)?
        .send()
        .await?;
    let mut rows: Vec<T> = decode(check(response).await?).await?;
    match rows.pop() {
        Some(row) => Ok(row),
        None => Err(GatewayError::Decode(
            "resposta vazia do servidor".to_string(),
        )),
    }
}

/// Applies a partial update to the row with the given id and returns the
/// updated canonical row.
pub async fn update<T, P>(table: &str, id: &str, patch: &P) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let url = format!("{}?id=eq.{}", rest_url(table), id);
    let response = authorize(Request::patch(&url))
        .header("Prefer", "return=representation")
        .json(patch)?
        .send()
        .await?;
    let mut rows: Vec<T> = decode(check(response).await?).await?;
    match rows.pop() {
        Some(row) => Ok(row),
        None => Err(GatewayError::Decode(
            "resposta vazia do servidor".to_string(),
        )),
    }
}

/// Deletes the row with the given id.
pub async fn delete(table: &str, id: &str) -> Result<(), GatewayError> {
    let url = format!("{}?id=eq.{}", rest_url(table), id);
    let response = authorize(Request::delete(&url)).send().await?;
    check(response).await?;
    Ok(())
}

/// Invokes a named server-side procedure with a JSON argument object.
pub async fn rpc(name: &str, args: &serde_json::Value) -> Result<(), GatewayError> {
    let url = format!("{}/rest/v1/rpc/{}", GATEWAY_URL, name);
    let response = authorize(Request::post(&url)).json(args)?.send().await?;
    check(response).await?;
    Ok(())
}

/// Uploads a file into object storage under `bucket/path`.
pub async fn upload(bucket: &str, path: &str, file: &web_sys::File) -> Result<(), GatewayError> {
    let url = format!("{}/storage/v1/object/{}/{}", GATEWAY_URL, bucket, path);
    let request = authorize(Request::post(&url))
        .header("Content-Type", &file.type_())
        .body(file.clone())?;
    let response = request.send().await?;
    check(response).await?;
    Ok(())
}

/// Deterministic public URL for an uploaded object.
pub fn public_url(bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        GATEWAY_URL, bucket, path
    )
}

/// Fetches the signed-in account from the identity provider.
///
/// `Ok(None)` when no session token is stored or the token is no longer
/// accepted; owner-scoped callers treat that as "do nothing", never as an
/// error to display.
pub async fn current_user() -> Result<Option<AuthUser>, GatewayError> {
    if session_token().is_none() {
        return Ok(None);
    }
    let url = format!("{}/auth/v1/user", GATEWAY_URL);
    let response = authorize(Request::get(&url)).send().await?;
    if response.status() == 401 || response.status() == 403 {
        return Ok(None);
    }
    let user: AuthUser = decode(check(response).await?).await?;
    Ok(Some(user))
}
