//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::TripQuery;
use crate::ehailing::{EstimateResponse, EstimateSource};
use crate::formatter::TripSummary;
use crate::myciti::{TripError, TripErrorKind};
use crate::rides::{RideOption, ride_options};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/trip", get(api_trip))
        .route("/trip", get(trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// 404 page for unknown paths.
async fn not_found() -> impl IntoResponse {
    let page = ErrorTemplate {
        title: "Not found".to_string(),
        message: "There is nothing at this address.".to_string(),
    };
    (StatusCode::NOT_FOUND, page)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Look up and format a trip, pricing e-hailing rides alongside.
async fn lookup(
    state: &AppState,
    req: &TripRequest,
) -> Result<(TripSummary, Vec<RideOption>), TripError> {
    let (start, end) = req.locations(state.truncate_addresses);
    let query = TripQuery::new(&start, &end)?;

    let (trip, estimate) = tokio::join!(
        state.trips.get_trip(query.start(), query.end()),
        estimate(state, &query),
    );
    let trip = trip?;

    info!(
        from = %trip.summary.from,
        to = %trip.summary.to,
        duration = %trip.summary.duration,
        ehailing = estimate.is_some(),
        "Trip looked up"
    );

    let rides = ride_options(&trip, estimate.as_ref());
    Ok((trip, rides))
}

/// E-hailing prices for a trip, or `None` if unavailable.
async fn estimate(state: &AppState, query: &TripQuery) -> Option<EstimateResponse> {
    let estimates = state.estimates.as_ref()?;
    match estimates.estimate(query).await {
        Ok(estimate) => Some(estimate),
        Err(e) => {
            warn!(error = %e, "E-hailing estimate unavailable");
            None
        }
    }
}

/// JSON trip lookup.
async fn api_trip(
    State(state): State<AppState>,
    query: Result<Query<TripRequest>, QueryRejection>,
) -> Result<Json<TripResult>, AppError> {
    let Query(req) = query?;
    let (trip, rides) = lookup(&state, &req).await?;
    Ok(Json(TripResult { trip, rides }))
}

/// Trip lookup for the browser: an HTML fragment or JSON by Accept header.
async fn trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TripRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    if !accepts_html(&headers) {
        return api_trip(State(state), query)
            .await
            .map(IntoResponse::into_response);
    }

    let result = match query {
        Ok(Query(req)) => lookup(&state, &req).await.map_err(AppError::from),
        Err(rejection) => Err(AppError::from(rejection)),
    };

    let (trip, rides) = match result {
        Ok(found) => found,
        Err(err) => {
            let template = TripErrorTemplate {
                message: err.message.clone(),
                retryable: err.retryable,
            };
            let html = template.render().map_err(AppError::template)?;
            err.log();
            return Ok((err.status, Html(html)).into_response());
        }
    };

    let html = TripResultsTemplate { trip, rides }
        .render()
        .map_err(AppError::template)?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    retryable: bool,
}

impl AppError {
    fn template(e: askama::Error) -> Self {
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Template error: {e}"),
            retryable: false,
        }
    }

    fn log(&self) {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, message = %self.message, "Request rejected");
        }
    }
}

/// HTTP status for each kind of lookup failure.
pub fn status_for(kind: TripErrorKind) -> StatusCode {
    match kind {
        TripErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        TripErrorKind::NetworkUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        TripErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        TripErrorKind::Upstream | TripErrorKind::MalformedResponse => StatusCode::BAD_GATEWAY,
        TripErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        AppError {
            status: status_for(e.kind()),
            retryable: e.is_retryable(),
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
            retryable: false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
