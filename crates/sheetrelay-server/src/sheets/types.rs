use serde::{Deserialize, Serialize};

use sheetrelay_core::{CellGrid, CellValue};

/// Spreadsheet metadata as returned by the v4 `spreadsheets.get` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Spreadsheet {
    /// Find a sheet by its internal numeric ID, exact match only
    pub fn sheet_by_id(&self, sheet_id: i64) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.properties.sheet_id == sheet_id)
    }
}

/// One sheet (tab) within a spreadsheet
#[derive(Debug, Clone, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Internal numeric ID, distinct from the display title
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub grid_properties: GridProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridProperties {
    pub row_count: u32,
    pub column_count: u32,
}

/// A rectangular block of values from the `values.get` endpoint.
///
/// The API omits `values` entirely when the range holds no data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: Option<String>,
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: CellGrid,
}

/// A single row to append to a sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub values: Vec<CellValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_spreadsheet_metadata() {
        let json = r#"{
            "spreadsheetId": "15bX0S72f3EFJuZz1sGScxp4",
            "sheets": [
                {
                    "properties": {
                        "sheetId": 0,
                        "title": "Sheet1",
                        "index": 0,
                        "sheetType": "GRID",
                        "gridProperties": { "rowCount": 1000, "columnCount": 26 }
                    }
                },
                {
                    "properties": {
                        "sheetId": 1234567,
                        "title": "Budget 2024",
                        "gridProperties": { "rowCount": 5, "columnCount": 3 }
                    }
                }
            ]
        }"#;

        let doc: Spreadsheet = serde_json::from_str(json).unwrap();
        assert_eq!(doc.spreadsheet_id, "15bX0S72f3EFJuZz1sGScxp4");
        assert_eq!(doc.sheets.len(), 2);

        let sheet = doc.sheet_by_id(1234567).unwrap();
        assert_eq!(sheet.properties.title, "Budget 2024");
        assert_eq!(sheet.properties.grid_properties.row_count, 5);
        assert_eq!(sheet.properties.grid_properties.column_count, 3);

        assert!(doc.sheet_by_id(99).is_none());
    }

    #[test]
    fn test_deserialize_value_range() {
        let json = r#"{
            "range": "Sheet1!A1:C5",
            "majorDimension": "ROWS",
            "values": [["name", "count"], ["widget", 3]]
        }"#;

        let vr: ValueRange = serde_json::from_str(json).unwrap();
        assert_eq!(vr.range.as_deref(), Some("Sheet1!A1:C5"));
        assert_eq!(vr.values.len(), 2);
        assert_eq!(vr.values[1][0], CellValue::from("widget"));
        assert_eq!(vr.values[1][1], CellValue::from(3.0));
    }

    #[test]
    fn test_deserialize_value_range_without_values() {
        // The API drops the field entirely for an empty range
        let vr: ValueRange =
            serde_json::from_str(r#"{"range": "Empty!A1:A1", "majorDimension": "ROWS"}"#).unwrap();
        assert!(vr.values.is_empty());
    }
}
