mod client;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use client::{ServiceAccountConnector, SheetsClient};
pub use types::{AppendRequest, GridProperties, Sheet, SheetProperties, Spreadsheet, ValueRange};

/// OAuth scope for read-only spreadsheet access
pub const SCOPE_READONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
/// OAuth scope for read-write spreadsheet access, needed by the append helper
pub const SCOPE_READ_WRITE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Errors from the Sheets API client
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("unable to read service account key: {0}")]
    Credentials(#[from] std::io::Error),

    #[error("unable to obtain access token: {0}")]
    Auth(#[from] yup_oauth2::Error),

    #[error("auth response carried no access token")]
    MissingToken,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid request url")]
    InvalidUrl,
}

/// Operations this service needs from the spreadsheet API.
///
/// Handlers depend on this trait rather than the concrete client so tests can
/// substitute a fake.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    /// Fetch spreadsheet metadata (sheet list, titles, grid dimensions)
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, SheetsError>;

    /// Fetch the cell values for an A1 range
    async fn get_values(&self, spreadsheet_id: &str, range: &str)
        -> Result<ValueRange, SheetsError>;

    /// Append the given values as a single new row, raw input interpretation
    async fn append_row(&self, request: &AppendRequest) -> Result<(), SheetsError>;
}

/// Builds an authenticated [`SheetsApi`] client.
///
/// A fresh client is constructed per request; the connector is the seam where
/// credential loading happens and where tests inject fakes.
#[async_trait]
pub trait SheetsConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn SheetsApi>, SheetsError>;
}
