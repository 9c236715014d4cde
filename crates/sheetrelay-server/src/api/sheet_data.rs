use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use sheetrelay_core::{grid_range, CellGrid};

use crate::error::AppError;
use crate::AppState;

/// Query parameters for the fetch endpoint.
///
/// Both default to empty so an absent parameter behaves like an empty one.
#[derive(Debug, Deserialize)]
pub struct SheetDataParams {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub sheet_id: String,
}

/// Response envelope for the fetch endpoint
#[derive(Debug, Serialize)]
pub struct SheetDataResponse {
    pub message: String,
    pub status: &'static str,
    pub data: Option<CellGrid>,
}

impl SheetDataResponse {
    fn success(data: CellGrid) -> Self {
        Self {
            message: String::new(),
            status: "success",
            data: Some(data),
        }
    }
}

/// Fetch the full used grid of one sheet
async fn sheet_data(
    State(state): State<AppState>,
    Query(params): Query<SheetDataParams>,
) -> Result<Json<SheetDataResponse>, AppError> {
    let grid = fetch_grid(&state, &params).await?;
    Ok(Json(SheetDataResponse::success(grid)))
}

async fn fetch_grid(state: &AppState, params: &SheetDataParams) -> Result<CellGrid, AppError> {
    let sheet_id: i64 = params.sheet_id.parse().map_err(|e| {
        tracing::warn!("sheet_id is not an integer: {}", e);
        AppError::InvalidSheetId
    })?;

    let api = state.sheets.connect().await.map_err(AppError::Credentials)?;

    let doc = api
        .get_spreadsheet(&params.spreadsheet_id)
        .await
        .map_err(AppError::SpreadsheetFetch)?;
    let sheet = doc.sheet_by_id(sheet_id).ok_or(AppError::SheetNotFound)?;

    let grid = &sheet.properties.grid_properties;
    let range = grid_range(&sheet.properties.title, grid.row_count, grid.column_count)?;

    let values = api
        .get_values(&params.spreadsheet_id, &range)
        .await
        .map_err(AppError::ValuesFetch)?;
    if values.values.is_empty() {
        return Err(AppError::EmptyGrid);
    }

    Ok(values.values)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/sheet-data", get(sheet_data))
}
