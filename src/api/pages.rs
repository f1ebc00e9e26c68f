use super::AppState;
use crate::domain::ports::AssetStore;
use crate::pages::about::AboutPage;
use crate::pages::academics::AcademicsPage;
use crate::pages::experience::{ExperienceFilter, ExperiencePage};
use crate::pages::profile::ProfileSummary;
use crate::pages;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ExperienceQuery {
    pub filter: Option<String>,
}

/// GET /api/profile
pub async fn profile<S: AssetStore>(State(state): State<AppState<S>>) -> Json<ProfileSummary> {
    Json(pages::profile::build(&state.profile))
}

/// GET /api/experience?filter=all|industry|research|other
pub async fn experience<S: AssetStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ExperienceQuery>,
) -> Result<Json<ExperiencePage>, (StatusCode, Json<Value>)> {
    let filter = match query.filter.as_deref() {
        None | Some("") => ExperienceFilter::All,
        Some(raw) => raw.parse::<ExperienceFilter>().map_err(|e| {
            tracing::debug!("Bad experience filter: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
        })?,
    };

    let page = pages::experience::build(&state.profile, state.assets.as_ref(), filter).await;
    Ok(Json(page))
}

/// GET /api/academics
pub async fn academics<S: AssetStore>(State(state): State<AppState<S>>) -> Json<AcademicsPage> {
    Json(pages::academics::build(&state.profile, state.assets.as_ref()).await)
}

/// GET /api/about
pub async fn about<S: AssetStore>(State(state): State<AppState<S>>) -> Json<AboutPage> {
    Json(pages::about::build(&state.profile, state.assets.as_ref()).await)
}
