//! HTTP implementation of [`PetFriendsApi`]
//!
//! A thin request/response shim: no retries, no caching, no validation of
//! field values. Whatever status the service answers with is handed back.

use crate::config::PetFriendsConfig;
use crate::core_types::{ApiResponse, AuthKey, PetFields, PetFilter, PetFriendsApi, ResponseBody};
use crate::error::{PetFriendsError, PetFriendsResult};
use crate::logging::log_debug;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use std::path::Path;
use std::time::Instant;

const AUTH_KEY_HEADER: &str = "auth_key";

/// PetFriends REST client
#[derive(Debug, Clone)]
pub struct PetFriendsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PetFriendsClient {
    /// Create a client for the service at `config.base_url`
    ///
    /// Only the base URL and timeout are used; credentials stay with the
    /// caller and are passed per call.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if the base URL is
    /// empty or the HTTP client cannot be built.
    pub fn new(config: &PetFriendsConfig) -> PetFriendsResult<Self> {
        if config.base_url.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends base URL is required",
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                PetFriendsError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "PetFriends client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from environment configuration
    ///
    /// # Errors
    ///
    /// Propagates [`PetFriendsConfig::from_env`] failures.
    pub fn from_env() -> PetFriendsResult<Self> {
        let config = PetFriendsConfig::from_env()?;
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a header map from `(name, value)` pairs
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::InvalidHeader`] if a value contains bytes
    /// HTTP headers cannot carry.
    pub fn build_headers(pairs: &[(&'static str, &str)]) -> PetFriendsResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        for &(name, value) in pairs {
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| PetFriendsError::invalid_header(name, e.to_string()))?;
            headers.insert(HeaderName::from_static(name), header_value);
        }
        Ok(headers)
    }

    fn auth_headers(auth_key: &AuthKey) -> PetFriendsResult<HeaderMap> {
        Self::build_headers(&[(AUTH_KEY_HEADER, auth_key.as_str())])
    }

    /// Send a request and capture status and body, whatever the status
    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> PetFriendsResult<ApiResponse> {
        let start_time = Instant::now();

        let response = request.send().await.map_err(|e| {
            PetFriendsError::request_failed(
                format!("{operation} request failed: {e}"),
                Some(Box::new(e)),
            )
        })?;

        let status = response.status().as_u16();
        let raw = response.text().await.map_err(|e| {
            PetFriendsError::request_failed(
                format!("{operation} response body could not be read: {e}"),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(
            operation = operation,
            status = status,
            duration_ms = start_time.elapsed().as_millis() as u64,
            body_len = raw.len(),
            "PetFriends call completed"
        );

        Ok(ApiResponse::new(status, ResponseBody::from_text(raw)))
    }

    /// Read a photo from disk into a multipart file part
    async fn photo_part(photo_path: &Path) -> PetFriendsResult<Part> {
        let bytes = tokio::fs::read(photo_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PetFriendsError::fixture_not_found(photo_path)
            } else {
                PetFriendsError::setup_failed(format!(
                    "Could not read photo {}: {e}",
                    photo_path.display()
                ))
            }
        })?;

        let file_name = photo_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(photo_mime_type(photo_path))
            .map_err(|e| PetFriendsError::setup_failed(format!("Invalid photo MIME type: {e}")))
    }

    fn pet_form(pet: &PetFields) -> Form {
        pet.as_form()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value.to_string()))
    }
}

/// MIME type sent for a photo upload, chosen by extension
///
/// Unknown extensions go out as `application/octet-stream` so the service,
/// not the client, decides whether the file is acceptable.
pub fn photo_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl PetFriendsApi for PetFriendsClient {
    async fn get_api_key(&self, email: &str, password: &str) -> PetFriendsResult<ApiResponse> {
        let headers = Self::build_headers(&[("email", email), ("password", password)])?;
        let request = self.http.get(self.url("/api/key")).headers(headers);
        self.execute("get_api_key", request).await
    }

    async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .get(self.url("/api/pets"))
            .headers(Self::auth_headers(auth_key)?)
            .query(&[("filter", filter.as_query_value())]);
        self.execute("get_list_of_pets", request).await
    }

    async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        pet: &PetFields,
        photo_path: &Path,
    ) -> PetFriendsResult<ApiResponse> {
        // Read the photo before building anything: a missing fixture must
        // never turn into a remote call
        let photo = Self::photo_part(photo_path).await?;
        let form = Self::pet_form(pet).part("pet_photo", photo);

        let request = self
            .http
            .post(self.url("/api/pets"))
            .headers(Self::auth_headers(auth_key)?)
            .multipart(form);
        self.execute("add_new_pet", request).await
    }

    async fn add_new_pet_no_photo(
        &self,
        auth_key: &AuthKey,
        pet: &PetFields,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .post(self.url("/api/create_pet_simple"))
            .headers(Self::auth_headers(auth_key)?)
            .multipart(Self::pet_form(pet));
        self.execute("add_new_pet_no_photo", request).await
    }

    async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet: &PetFields,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .put(self.url(&format!("/api/pets/{pet_id}")))
            .headers(Self::auth_headers(auth_key)?)
            .form(&pet.as_form()[..]);
        self.execute("update_pet_info", request).await
    }

    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .delete(self.url(&format!("/api/pets/{pet_id}")))
            .headers(Self::auth_headers(auth_key)?);
        self.execute("delete_pet", request).await
    }

    async fn set_pet_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> PetFriendsResult<ApiResponse> {
        let photo = Self::photo_part(photo_path).await?;
        let form = Form::new().part("pet_photo", photo);

        let request = self
            .http
            .post(self.url(&format!("/api/pets/set_photo/{pet_id}")))
            .headers(Self::auth_headers(auth_key)?)
            .multipart(form);
        self.execute("set_pet_photo", request).await
    }
}
