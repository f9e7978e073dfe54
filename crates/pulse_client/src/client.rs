use std::time::Duration;

use anyhow::{Context as _, Result};
use pulse_domain::{
    ClientCode, ClientList, DashboardService, DiagnoseRequest, DiagnosticReport, ServiceInfo,
};
use reqwest::redirect::Policy;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Error, ErrorResponse};

/// HTTP client for the diagnostics backend.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .read_timeout(Duration::from_secs(60))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(5)
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Self { http, base_url: Self::normalize(base_url)? })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // `Url::join` replaces the last path segment unless the base ends with a slash.
    fn normalize(mut base_url: Url) -> Result<Url, Error> {
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::UnsupportedScheme(scheme.to_string())),
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(base_url)
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path).map_err(Error::from)?)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, endpoint: &str) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {endpoint}"))?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body).ok();
            return Err(Error::InvalidStatusCode { code: status.as_u16(), detail })
                .with_context(|| format!("Request to {endpoint} failed"));
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response from {endpoint}"))
    }
}

#[async_trait::async_trait]
impl DashboardService for Client {
    async fn info(&self) -> Result<ServiceInfo> {
        let url = self.url("")?;
        self.send(self.http.get(url), "GET /").await
    }

    async fn clients(&self) -> Result<ClientList> {
        let url = self.url("api/clients")?;
        let list: ClientList = self.send(self.http.get(url), "GET /api/clients").await?;
        info!(count = list.clients.len(), "Clients loaded");
        Ok(list)
    }

    async fn diagnose(&self, client_code: ClientCode) -> Result<DiagnosticReport> {
        let url = self.url("api/diagnose")?;
        let body = DiagnoseRequest::from(client_code);
        info!(client_code = client_code.value(), "Diagnostics requested");
        let report: DiagnosticReport = self
            .send(self.http.post(url).json(&body), "POST /api/diagnose")
            .await?;
        info!(
            client_code = client_code.value(),
            recommendations = report.len(),
            "Diagnostics completed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use pulse_domain::{ClientStatus, Recommendation};
    use serde_json::json;

    use super::*;

    async fn setup() -> (Client, mockito::ServerGuard) {
        let server = mockito::Server::new_async().await;
        let client = Client::new(Url::parse(&server.url()).unwrap()).unwrap();
        (client, server)
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = Client::new(Url::parse("http://localhost:8000/backend").unwrap()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/backend/");
        assert_eq!(
            client.url("api/clients").unwrap().as_str(),
            "http://localhost:8000/backend/api/clients"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let actual = Client::new(Url::parse("ftp://localhost/").unwrap());
        let error = actual.err().unwrap();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[tokio::test]
    async fn test_clients() {
        let (client, mut server) = setup().await;
        let mock = server
            .mock("GET", "/api/clients")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "clients": [
                        {"client_code": 1, "name": "Алия", "product": "Кредитная карта", "status": "Студент", "city": "Астана"},
                        {"client_code": 2, "name": "Ерлан", "product": "Депозит", "status": "Новый", "city": "Шымкент"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let actual = client.clients().await.unwrap();

        mock.assert_async().await;
        assert_eq!(actual.clients.len(), 2);
        assert_eq!(actual.clients[0].code(), ClientCode::new(1));
        assert_eq!(actual.clients[0].status, ClientStatus::Student);
        assert_eq!(
            actual.clients[1].status,
            ClientStatus::Other("Новый".to_string())
        );
    }

    #[tokio::test]
    async fn test_diagnose_posts_client_code() {
        let (client, mut server) = setup().await;
        let mock = server
            .mock("POST", "/api/diagnose")
            .match_body(Matcher::Json(json!({"client_code": 7})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "client_name": "Алия",
                    "recommendations": [
                        {"product": "Инвестиции", "message": "Попробуйте инвестиции", "confidence": 91.4}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let actual = client.diagnose(ClientCode::new(7)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(actual.client_name, "Алия");
        assert_eq!(
            actual.recommendations,
            vec![Recommendation::new("Инвестиции", "Попробуйте инвестиции", 91.4)]
        );
    }

    #[tokio::test]
    async fn test_diagnose_not_found_carries_detail() {
        let (client, mut server) = setup().await;
        server
            .mock("POST", "/api/diagnose")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(json!({"detail": "Клиент не найден"}).to_string())
            .create_async()
            .await;

        let error = client.diagnose(ClientCode::new(999)).await.unwrap_err();

        let actual = error.downcast_ref::<Error>().unwrap();
        assert_eq!(actual.status_code(), Some(404));
        assert_eq!(
            actual.to_string(),
            "Invalid Status Code: 404 (Клиент не найден)"
        );
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let (client, mut server) = setup().await;
        server
            .mock("GET", "/api/clients")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let error = client.clients().await.unwrap_err();

        let actual = error.downcast_ref::<Error>().unwrap();
        assert_eq!(actual.status_code(), Some(500));
        assert_eq!(actual.to_string(), "Invalid Status Code: 500");
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported_with_endpoint() {
        let (client, mut server) = setup().await;
        server
            .mock("GET", "/api/clients")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"customers": []}"#)
            .create_async()
            .await;

        let error = client.clients().await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Failed to decode response from GET /api/clients"
        );
    }

    #[tokio::test]
    async fn test_info() {
        let (client, mut server) = setup().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"message": "API для диагностики клиентов банка"}).to_string())
            .create_async()
            .await;

        let actual = client.info().await.unwrap();

        assert_eq!(actual.message, "API для диагностики клиентов банка");
    }
}
