use crate::controls::Control;
use crate::errors::AppError;
use crate::models::{
    DashboardSnapshot, RangeInfo, RangeRequest, ReportsQuery, Tab, TabRequest,
};
use crate::presets::RangePreset;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let dashboard = state.dashboard.lock().await;
    Ok(Html(render_index(&dashboard)?))
}

/// Renders the page with `months` applied to a copy of the dashboard; only
/// `POST /api/range` changes the shared selection. Without `months` the page
/// shows the shared state as is (the placeholder chart until a range is
/// clicked) rather than forcing the 6-month preset.
pub async fn reports(
    State(state): State<AppState>,
    Query(query): Query<ReportsQuery>,
) -> Result<Html<String>, AppError> {
    let mut view = state.dashboard.lock().await.clone();
    if let Some(months) = query.months {
        let range = RangePreset::from_months(months).inspect_err(|err| warn!("{err}"))?;
        view.select_range(range)?;
        info!("rendering reports for {}", range.label());
    }
    Ok(Html(render_index(&view)?))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.snapshot())
}

pub async fn get_ranges() -> Result<Json<Vec<RangeInfo>>, AppError> {
    let ranges = RangePreset::ALL
        .into_iter()
        .map(|range| {
            Ok(RangeInfo {
                key: range.key(),
                label: range.label(),
                months: range.months(),
                dataset: range.dataset()?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok(Json(ranges))
}

pub async fn select_tab(
    State(state): State<AppState>,
    Json(payload): Json<TabRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let tab: Tab = payload.tab.parse().inspect_err(|err| warn!("{err}"))?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.select_tab(tab)?;
    info!("selected tab: {}", tab.key());

    Ok(Json(dashboard.snapshot()))
}

pub async fn select_range(
    State(state): State<AppState>,
    Json(payload): Json<RangeRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let range: RangePreset = payload.range.parse().inspect_err(|err| warn!("{err}"))?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.select_range(range)?;
    info!(
        "selected date range: {} ({} periods)",
        range.label(),
        dashboard.chart().labels().len()
    );

    Ok(Json(dashboard.snapshot()))
}
