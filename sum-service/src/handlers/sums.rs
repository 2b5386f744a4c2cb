//! The three sum endpoints. Each binds the operands from a different part of
//! the request and answers `{"sum": N}`; binding failures answer 400.

use crate::dtos::{SumParams, SumRequest};
use crate::models::{SumResult, Transport};
use crate::services::metrics::{record_sum, SumOutcome};
use axum::Json;
use service_core::error::AppError;
use service_core::extract::{JsonBody, PathParams, QueryParams};

fn rejected(transport: Transport, err: &AppError) {
    tracing::warn!(%transport, error = %err, "Rejected sum operands");
    record_sum(transport, SumOutcome::Rejected);
}

fn compute(transport: Transport, number_one: i32, number_two: i32) -> Json<SumResult> {
    let result = SumResult::of(number_one, number_two);
    tracing::info!(%transport, number_one, number_two, sum = result.sum, "Computed sum");
    record_sum(transport, SumOutcome::Computed);
    Json(result)
}

/// `POST /sums/requestParam.postSum?numberOne=N1&numberTwo=N2`
pub async fn sum_request_param(
    params: Result<QueryParams<SumParams>, AppError>,
) -> Result<Json<SumResult>, AppError> {
    let QueryParams(params) = params.inspect_err(|e| rejected(Transport::RequestParam, e))?;
    Ok(compute(
        Transport::RequestParam,
        params.number_one,
        params.number_two,
    ))
}

/// `POST /sums/pathVariable.postSum/{numberOne}/{numberTwo}`
pub async fn sum_path_variable(
    params: Result<PathParams<(i32, i32)>, AppError>,
) -> Result<Json<SumResult>, AppError> {
    let PathParams((number_one, number_two)) =
        params.inspect_err(|e| rejected(Transport::PathVariable, e))?;
    Ok(compute(Transport::PathVariable, number_one, number_two))
}

/// `POST /sums/requestBody.postSum` with `{"numberOne": N1, "numberTwo": N2}`
pub async fn sum_request_body(
    body: Result<JsonBody<SumRequest>, AppError>,
) -> Result<Json<SumResult>, AppError> {
    let JsonBody(request) = body.inspect_err(|e| rejected(Transport::RequestBody, e))?;
    Ok(compute(
        Transport::RequestBody,
        request.number_one,
        request.number_two,
    ))
}
