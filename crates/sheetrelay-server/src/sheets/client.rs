use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use url::Url;
use yup_oauth2::authenticator::{Authenticator, DefaultHyperClient, HyperClientBuilder};
use yup_oauth2::ServiceAccountAuthenticator;

use super::types::{AppendRequest, Spreadsheet, ValueRange};
use super::{SheetsApi, SheetsConnector, SheetsError, SCOPE_READONLY, SCOPE_READ_WRITE};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

type DefaultConnector = <DefaultHyperClient as HyperClientBuilder>::Connector;

/// Thin reqwest wrapper over the Sheets v4 REST endpoints
pub struct SheetsClient {
    http: reqwest::Client,
    auth: Authenticator<DefaultConnector>,
    scope: &'static str,
}

impl SheetsClient {
    fn new(auth: Authenticator<DefaultConnector>, scope: &'static str) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            scope,
        }
    }

    async fn token(&self) -> Result<String, SheetsError> {
        let token = self.auth.token(&[self.scope]).await?;
        token
            .token()
            .map(str::to_owned)
            .ok_or(SheetsError::MissingToken)
    }

    /// Build an endpoint URL, percent-encoding each path segment (sheet
    /// titles inside A1 ranges may contain spaces)
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SheetsError> {
        let mut url = Url::parse(SHEETS_API_BASE).map_err(|_| SheetsError::InvalidUrl)?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl)?
            .extend(segments);
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SheetsApi for SheetsClient {
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, SheetsError> {
        let url = self.endpoint(&[spreadsheet_id])?;
        let token = self.token().await?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<ValueRange, SheetsError> {
        let url = self.endpoint(&[spreadsheet_id, "values", range])?;
        let token = self.token().await?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn append_row(&self, request: &AppendRequest) -> Result<(), SheetsError> {
        let append = format!("{}:append", request.range);
        let url = self.endpoint(&[request.spreadsheet_id.as_str(), "values", &append])?;
        let token = self.token().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [request.values] }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }
}

/// Connector that authenticates with a service-account key file.
///
/// The key file is read on every connect, matching the per-request client
/// lifecycle of the service.
pub struct ServiceAccountConnector {
    key_path: PathBuf,
    scope: &'static str,
}

impl ServiceAccountConnector {
    /// Read-only connector for the fetch endpoint
    pub fn new(key_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            scope: SCOPE_READONLY,
        }
    }

    /// Read-write connector for callers of the append helper
    pub fn read_write(key_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            scope: SCOPE_READ_WRITE,
        }
    }
}

#[async_trait]
impl SheetsConnector for ServiceAccountConnector {
    async fn connect(&self) -> Result<Arc<dyn SheetsApi>, SheetsError> {
        let key = yup_oauth2::read_service_account_key(&self.key_path).await?;
        let auth = ServiceAccountAuthenticator::builder(key).build().await?;
        Ok(Arc::new(SheetsClient::new(auth, self.scope)))
    }
}
