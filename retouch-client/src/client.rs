use reqwest::StatusCode;
use retouch_catalog::Service;
use uuid::Uuid;

/// Thin wrapper over the backend's service-document endpoints.
///
/// The catalog's generator/resolver never reach the network; this
/// client is how the surrounding application fetches a service document
/// (with its `variationTypes` and `priceCombinations`) and writes an
/// edited one back.
pub struct ServicesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServicesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        let url = self.url("/services");
        tracing::debug!(%url, "listing services");

        let response = self.http.get(&url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_service(&self, id: Uuid) -> Result<Service, ClientError> {
        let url = self.url(&format!("/services/{id}"));
        tracing::debug!(%url, "fetching service");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        Ok(Self::check(response).await?.json().await?)
    }

    /// Create a new service document; returns it as the backend stored it
    pub async fn create_service(&self, service: &Service) -> Result<Service, ClientError> {
        let url = self.url("/services");
        tracing::debug!(%url, service = %service.name, "creating service");

        let response = self.http.post(&url).json(service).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Persist an edited service document, combinations included
    pub async fn update_service(&self, service: &Service) -> Result<(), ClientError> {
        let url = self.url(&format!("/services/{}", service.id));
        tracing::debug!(%url, service = %service.name, "updating service");

        let response = self.http.put(&url).json(service).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(service.id));
        }
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete_service(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.url(&format!("/services/{id}"));
        tracing::debug!(%url, "deleting service");

        let response = self.http.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        Self::check(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }
        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service not found: {0}")]
    NotFound(Uuid),

    #[error("unexpected status from backend: {0}")]
    UnexpectedStatus(StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let client = ServicesClient::new("https://api.example.com/");
        assert_eq!(client.url("/services"), "https://api.example.com/services");

        let client = ServicesClient::new("https://api.example.com");
        assert_eq!(client.url("/services"), "https://api.example.com/services");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_http_error() {
        // Nothing listens on port 1
        let client = ServicesClient::new("http://127.0.0.1:1");
        let err = client.get_service(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
