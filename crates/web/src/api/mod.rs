// =============================================================================
// Scenario Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. API Client
// 4. Multipart Helpers
// =============================================================================

pub mod scenarios;

pub use scenario_common::ApiError;

use gloo_net::http::{Request, RequestBuilder, Response};
use scenario_common::ClientConfig;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{Blob, FormData};

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// HTTP methods the scenario API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// HTTP client for API requests.
///
/// Built once by the shell and handed to the store; nothing else talks to
/// the API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Build a request with common headers.
    fn build_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.config.endpoint(endpoint);
        let req = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        req.header("Accept", "application/json")
    }

    /// Map non-2xx statuses to errors.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        match status {
            200..=299 => Ok(response),
            401 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Server { status, message })
            }
        }
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self
            .build_request(Method::Get, endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST request with JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .build_request(Method::Post, endpoint)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self
            .build_request(Method::Post, endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST request with a multipart form body.
    ///
    /// The browser sets the multipart boundary, so no content type is set here.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let response = self
            .build_request(Method::Post, endpoint)
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// PUT request with JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .build_request(Method::Put, endpoint)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// DELETE request. The response body is ignored.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let response = self
            .build_request(Method::Delete, endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check_status(response).await.map(|_| ())
    }
}

// -----------------------------------------------------------------------------
// 4. Multipart Helpers
// -----------------------------------------------------------------------------

/// Wrap raw file contents in a form with a single file field.
pub fn file_form(field: &str, file_name: &str, contents: &[u8]) -> Result<FormData, ApiError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(contents));
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;

    let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(field, &blob, file_name)
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;

    Ok(form)
}
