//! Vehicle query handlers.
//!
//! Each endpoint runs the same sequence: validate raw parameters (400 on
//! failure), call the [`VehicleService`] (404 or 500 on failure, by error
//! kind), and return the payload with 200. Nothing is retried and exactly one
//! response is produced per request.
//!
//! The `*_response` functions hold that logic independent of axum so it can be
//! exercised directly; the async handlers only extract parameters and state.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use vehicles_lib::{Error as LibError, ErrorKind, VehicleMap, VehicleService};
use vehicles_service_shared::{
    extract_or_generate_request_id, from_lib_error, record_vehicle_query,
    record_vehicle_query_failed, record_vehicles_returned, AppState, AverageCapacityResponse,
    AverageSpeedResponse, BrandParams, BrandYearRangeParams, ColorYearParams, ProblemDetails,
    ServiceResponse, Validate, VehiclesResponse, WeightRangeParams,
};

/// Metric label for the color/year lookup.
pub const ENDPOINT_COLOR_YEAR: &str = "color_year";
/// Metric label for the brand/year-range lookup.
pub const ENDPOINT_BRAND_YEAR_RANGE: &str = "brand_year_range";
/// Metric label for the average max speed query.
pub const ENDPOINT_AVERAGE_SPEED: &str = "average_speed";
/// Metric label for the average capacity query.
pub const ENDPOINT_AVERAGE_CAPACITY: &str = "average_capacity";
/// Metric label for the weight-range search.
pub const ENDPOINT_WEIGHT_RANGE: &str = "weight_range";

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T> ApiResponse<T> {
    /// Status code this response will be sent with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Success(_) => StatusCode::OK,
            ApiResponse::Error(problem) => problem.status_code(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiResponse::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

fn rejected<T>(endpoint: &str, request_id: &str, problem: ProblemDetails) -> ApiResponse<T> {
    warn!(
        request_id = %request_id,
        endpoint = endpoint,
        detail = problem.detail.as_deref().unwrap_or(""),
        "invalid request parameters"
    );
    record_vehicle_query_failed(endpoint, "validation_error");
    ApiResponse::Error(problem)
}

fn failed<T>(endpoint: &str, request_id: &str, err: &LibError) -> ApiResponse<T> {
    match err.kind() {
        ErrorKind::NotFound => {
            warn!(request_id = %request_id, endpoint = endpoint, error = %err, "no vehicles found");
            record_vehicle_query_failed(endpoint, "not_found");
        }
        ErrorKind::Generic => {
            error!(request_id = %request_id, endpoint = endpoint, error = %err, "vehicle query failed");
            record_vehicle_query_failed(endpoint, "internal_error");
        }
    }
    ApiResponse::Error(from_lib_error(err, request_id))
}

fn found(endpoint: &str, request_id: &str, vehicles: VehicleMap) -> ApiResponse<VehiclesResponse> {
    record_vehicles_returned(vehicles.len(), endpoint);
    info!(
        request_id = %request_id,
        endpoint = endpoint,
        count = vehicles.len(),
        "vehicle query completed"
    );
    ApiResponse::Success(ServiceResponse::new(VehiclesResponse::from(vehicles)))
}

/// Vehicles of a color built in a given year.
pub fn color_and_year_response(
    service: &dyn VehicleService,
    params: &ColorYearParams,
    request_id: &str,
) -> ApiResponse<VehiclesResponse> {
    record_vehicle_query(ENDPOINT_COLOR_YEAR);
    info!(
        request_id = %request_id,
        color = %params.color,
        year = %params.year,
        "handling color/year lookup"
    );

    let (color, year) = match params.validate(request_id) {
        Ok(parsed) => parsed,
        Err(problem) => return rejected(ENDPOINT_COLOR_YEAR, request_id, *problem),
    };

    match service.find_by_color_and_year(&color, year) {
        Ok(vehicles) => found(ENDPOINT_COLOR_YEAR, request_id, vehicles),
        Err(e) => failed(ENDPOINT_COLOR_YEAR, request_id, &e),
    }
}

/// Vehicles of a brand built within an inclusive year range.
pub fn brand_and_year_range_response(
    service: &dyn VehicleService,
    params: &BrandYearRangeParams,
    request_id: &str,
) -> ApiResponse<VehiclesResponse> {
    record_vehicle_query(ENDPOINT_BRAND_YEAR_RANGE);
    info!(
        request_id = %request_id,
        brand = %params.brand,
        start_year = %params.start_year,
        end_year = %params.end_year,
        "handling brand/year-range lookup"
    );

    let (brand, start_year, end_year) = match params.validate(request_id) {
        Ok(parsed) => parsed,
        Err(problem) => return rejected(ENDPOINT_BRAND_YEAR_RANGE, request_id, *problem),
    };

    match service.find_by_brand_and_year_range(&brand, start_year, end_year) {
        Ok(vehicles) => found(ENDPOINT_BRAND_YEAR_RANGE, request_id, vehicles),
        Err(e) => failed(ENDPOINT_BRAND_YEAR_RANGE, request_id, &e),
    }
}

/// Mean maximum speed for a brand.
pub fn average_speed_response(
    service: &dyn VehicleService,
    params: &BrandParams,
    request_id: &str,
) -> ApiResponse<AverageSpeedResponse> {
    record_vehicle_query(ENDPOINT_AVERAGE_SPEED);
    info!(request_id = %request_id, brand = %params.brand, "handling average speed query");

    let brand = match params.validate(request_id) {
        Ok(brand) => brand,
        Err(problem) => return rejected(ENDPOINT_AVERAGE_SPEED, request_id, *problem),
    };

    match service.average_max_speed_by_brand(&brand) {
        Ok(average_max_speed) => {
            info!(request_id = %request_id, average_max_speed, "average speed computed");
            ApiResponse::Success(ServiceResponse::new(AverageSpeedResponse {
                brand,
                average_max_speed,
            }))
        }
        Err(e) => failed(ENDPOINT_AVERAGE_SPEED, request_id, &e),
    }
}

/// Mean passenger capacity for a brand.
pub fn average_capacity_response(
    service: &dyn VehicleService,
    params: &BrandParams,
    request_id: &str,
) -> ApiResponse<AverageCapacityResponse> {
    record_vehicle_query(ENDPOINT_AVERAGE_CAPACITY);
    info!(request_id = %request_id, brand = %params.brand, "handling average capacity query");

    let brand = match params.validate(request_id) {
        Ok(brand) => brand,
        Err(problem) => return rejected(ENDPOINT_AVERAGE_CAPACITY, request_id, *problem),
    };

    match service.average_capacity_by_brand(&brand) {
        Ok(average_capacity) => {
            info!(request_id = %request_id, average_capacity, "average capacity computed");
            ApiResponse::Success(ServiceResponse::new(AverageCapacityResponse {
                brand,
                average_capacity,
            }))
        }
        Err(e) => failed(ENDPOINT_AVERAGE_CAPACITY, request_id, &e),
    }
}

/// Vehicles whose weight lies within the requested bounds.
pub fn weight_range_response(
    service: &dyn VehicleService,
    params: &WeightRangeParams,
    request_id: &str,
) -> ApiResponse<VehiclesResponse> {
    record_vehicle_query(ENDPOINT_WEIGHT_RANGE);
    info!(
        request_id = %request_id,
        weight_min = %params.weight_min,
        weight_max = %params.weight_max,
        "handling weight-range search"
    );

    let query = match params.validate(request_id) {
        Ok(query) => query,
        Err(problem) => return rejected(ENDPOINT_WEIGHT_RANGE, request_id, *problem),
    };

    match service.search_by_weight_range(query) {
        Ok(vehicles) => found(ENDPOINT_WEIGHT_RANGE, request_id, vehicles),
        Err(e) => failed(ENDPOINT_WEIGHT_RANGE, request_id, &e),
    }
}

/// Handle GET /api/v1/vehicles/color/{color}/year/{year}.
pub async fn find_by_color_and_year(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(params): Path<ColorYearParams>,
) -> ApiResponse<VehiclesResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    color_and_year_response(state.service(), &params, request_id.as_str())
}

/// Handle GET /api/v1/vehicles/brand/{brand}/between/{start_year}/{end_year}.
pub async fn find_by_brand_and_year_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(params): Path<BrandYearRangeParams>,
) -> ApiResponse<VehiclesResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    brand_and_year_range_response(state.service(), &params, request_id.as_str())
}

/// Handle GET /api/v1/vehicles/average_speed/brand/{brand}.
pub async fn average_max_speed_by_brand(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(params): Path<BrandParams>,
) -> ApiResponse<AverageSpeedResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    average_speed_response(state.service(), &params, request_id.as_str())
}

/// Handle GET /api/v1/vehicles/average_capacity/brand/{brand}.
pub async fn average_capacity_by_brand(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(params): Path<BrandParams>,
) -> ApiResponse<AverageCapacityResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    average_capacity_response(state.service(), &params, request_id.as_str())
}

/// Handle GET /api/v1/vehicles/weight?weight_min=..&weight_max=..
pub async fn search_by_weight_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<WeightRangeParams>,
) -> ApiResponse<VehiclesResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    weight_range_response(state.service(), &params, request_id.as_str())
}
