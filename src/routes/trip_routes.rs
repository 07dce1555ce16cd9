use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{TripPlanResponse, TripRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/route", post(plan_route))
        .route("/route/", post(plan_route))
}

async fn plan_route(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripPlanResponse>, AppError> {
    let Json(request) = payload?;
    let controller = TripController::new(state.routing.clone(), state.planning.clone());
    let response = controller.plan_trip(request).await?;
    Ok(Json(response))
}
