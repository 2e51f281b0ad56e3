//! Bearer-authenticated client for the user-configuration endpoints.
//!
//! The credential, brand, and intent collections share one wire shape:
//! list (GET), create (POST), delete (DELETE `{path}/{id}`). `ListEndpoint`
//! captures the per-collection differences so the client is written once
//! instead of three times.

use std::marker::PhantomData;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::normalize_base_url;
use crate::error::{ApiError, ApiResult};
use crate::models::{Brand, Intent, StoredCredential};

/// Typed descriptor for one remote list collection.
#[derive(Debug)]
pub struct ListEndpoint<T> {
    path: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> ListEndpoint<T> {
    const fn new(path: &'static str) -> Self {
        Self {
            path,
            _entity: PhantomData,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<T> Clone for ListEndpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListEndpoint<T> {}

/// Stored LLM API credentials.
pub const API_KEYS: ListEndpoint<StoredCredential> = ListEndpoint::new("/auth/api-keys");
/// Tracked brands, mine and competitors.
pub const BRANDS: ListEndpoint<Brand> = ListEndpoint::new("/user/brands");
/// Saved search intents.
pub const INTENTS: ListEndpoint<Intent> = ListEndpoint::new("/user/intents");

/// HTTP client for the Lookout user-configuration API.
#[derive(Debug, Clone)]
pub struct UserConfigClient {
    base_url: String,
    client: Client,
}

impl UserConfigClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())
            .map_err(ApiError::InvalidConfiguration)?;
        Ok(Self {
            base_url,
            client: Client::builder().build()?,
        })
    }

    /// Returns the base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full collection. The server's order is authoritative and
    /// becomes the display order unchanged.
    pub async fn list<T: DeserializeOwned>(
        &self,
        access_token: &str,
        endpoint: ListEndpoint<T>,
    ) -> ApiResult<Vec<T>> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint.path()))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &body));
        }
        Ok(response.json::<Vec<T>>().await?)
    }

    /// Creates one record in the collection.
    ///
    /// The created entity in the response body is deliberately unused: the
    /// caller refetches the whole collection afterwards to resynchronize.
    pub async fn create<T, B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        endpoint: ListEndpoint<T>,
        body: &B,
    ) -> ApiResult<()> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint.path()))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &body));
        }
        Ok(())
    }

    /// Deletes one record by id.
    pub async fn delete<T>(
        &self,
        access_token: &str,
        endpoint: ListEndpoint<T>,
        id: i64,
    ) -> ApiResult<()> {
        let response = self
            .client
            .delete(format!("{}{}/{id}", self.base_url, endpoint.path()))
            .bearer_auth(access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn endpoints_carry_backend_paths() {
        assert_eq!(API_KEYS.path(), "/auth/api-keys");
        assert_eq!(BRANDS.path(), "/user/brands");
        assert_eq!(INTENTS.path(), "/user/intents");
    }

    #[test]
    fn client_rejects_malformed_base_url() {
        assert!(UserConfigClient::new("api.lookout.app").is_err());
    }

    #[test]
    fn client_normalizes_base_url() {
        let client = UserConfigClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
