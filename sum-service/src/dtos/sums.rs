use serde::Deserialize;

/// JSON body of `POST /sums/requestBody.postSum`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SumRequest {
    pub number_one: i32,
    pub number_two: i32,
}

/// Query string of `POST /sums/requestParam.postSum`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SumParams {
    pub number_one: i32,
    pub number_two: i32,
}
