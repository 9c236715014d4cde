use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::sheets::SheetsError;

/// Application error type.
///
/// One variant per failure kind so callers can discriminate on the envelope's
/// `kind` field instead of matching message text.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid sheet_id")]
    InvalidSheetId,

    #[error("unable to load service account credentials")]
    Credentials(#[source] SheetsError),

    #[error("unable to retrieve spreadsheet")]
    SpreadsheetFetch(#[source] SheetsError),

    #[error("sheet not found")]
    SheetNotFound,

    #[error("invalid sheet dimensions: {0}")]
    Range(#[from] sheetrelay_core::RangeError),

    #[error("unable to retrieve data from sheet")]
    ValuesFetch(#[source] SheetsError),

    #[error("no data found in sheet")]
    EmptyGrid,
}

impl AppError {
    /// Stable machine-readable code for the response envelope
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidSheetId => "invalid_sheet_id",
            AppError::Credentials(_) => "credentials",
            AppError::SpreadsheetFetch(_) => "spreadsheet_fetch",
            AppError::SheetNotFound => "sheet_not_found",
            AppError::Range(_) => "range",
            AppError::ValuesFetch(_) => "values_fetch",
            AppError::EmptyGrid => "empty_grid",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Credentials(e) => {
                tracing::error!("credential load failed: {:?}", e);
            }
            AppError::SpreadsheetFetch(e) | AppError::ValuesFetch(e) => {
                tracing::error!("sheets api call failed: {:?}", e);
            }
            _ => {}
        }

        // Logical failures keep HTTP 200; the envelope carries the outcome
        let body = Json(json!({
            "message": self.to_string(),
            "status": "error",
            "kind": self.kind(),
            "data": null,
        }));

        (StatusCode::OK, body).into_response()
    }
}
