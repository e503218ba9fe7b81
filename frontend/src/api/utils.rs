use gloo_net::http::{Request, RequestBuilder, Response};
use log::debug;
use serde::de::DeserializeOwned;
use shared::ErrorResponse;
use web_sys::RequestCredentials;

/// Creates a GET request that carries the session cookie
pub fn credentialed_get(url: &str) -> RequestBuilder {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Sends a request and decodes a JSON body, turning failures into messages
pub async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, String> {
    let response = req.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    debug!("API request failed with status {}", status);
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.detail,
        Err(_) => format!("HTTP {}", status),
    }
}
