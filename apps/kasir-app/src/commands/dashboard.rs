//! # Dashboard Commands

use axum::extract::State;
use axum::Json;
use kasir_core::report::{self, ChartPoint, DashboardStats};
use kasir_core::View;
use serde::Serialize;

use crate::commands::require_view;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub chart: Vec<ChartPoint>,
}

/// Headline numbers, low-stock list and the daily chart (admin).
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    require_view(&state, View::Dashboard).await?;

    let products = state.db.products();
    let transactions = state.db.transactions();
    let (products, transactions) =
        tokio::try_join!(products.get_products(), transactions.get_transactions())?;

    Ok(Json(DashboardResponse {
        stats: report::dashboard_stats(&products, &transactions),
        chart: report::daily_chart(&transactions),
    }))
}
