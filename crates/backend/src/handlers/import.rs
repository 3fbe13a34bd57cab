use axum::http::StatusCode;
use axum::Json;

use contracts::usecases::{ImportResult, SheetData};

use crate::usecases::{u101_import_kpi, u102_import_sales};

/// POST /api/import/kpi
pub async fn import_kpi(Json(sheet): Json<SheetData>) -> Result<Json<ImportResult>, StatusCode> {
    match u101_import_kpi::import_kpi_sheet(sheet).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("KPI import failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/import/sales
pub async fn import_sales(Json(sheet): Json<SheetData>) -> Result<Json<ImportResult>, StatusCode> {
    match u102_import_sales::import_sales_sheet(sheet).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("Sales import failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
