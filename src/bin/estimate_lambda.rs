//! AWS Lambda HTTP handler for the savings estimator
//!
//! GET  /?employees=5&hours=11&rate=25
//! POST with a JSON body of the same inputs

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use roi_calculator::api::{estimate, inputs_from_body, inputs_from_query, ErrorResponse};
use roi_calculator::{CalculatorInputs, EstimatorError, SavingsEstimator};

fn json_response<T: serde::Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(body)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload))?;
    Ok(response)
}

fn parse_inputs(event: &Request) -> Result<CalculatorInputs, EstimatorError> {
    if event.method() == Method::POST {
        return inputs_from_body(event.body().as_ref());
    }
    let query = event.query_string_parameters();
    inputs_from_query(query.iter())
}

async fn handler(event: Request, estimator: &SavingsEstimator) -> Result<Response<Body>, Error> {
    match parse_inputs(&event) {
        Ok(inputs) => json_response(200, &estimate(estimator, inputs)),
        Err(err) => {
            log::info!("rejecting request: {}", err);
            json_response(400, &ErrorResponse { error: err.to_string() })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let estimator = &SavingsEstimator::default();
    run(service_fn(move |event: Request| handler(event, estimator))).await
}
