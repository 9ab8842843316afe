//! AWS Lambda HTTP handler serving the dashboard as JSON
//!
//! The request body is a JSON `DashboardRequest`; every field is optional.
//! An empty body returns the default dashboard.

use hotel_projection::{Dashboard, DashboardConfig, DashboardRequest, ProjectionError};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .map_err(Box::new)?;
    Ok(response)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    json_response(400, json!({ "error": message }).to_string())
}

async fn handle(dashboard: &Dashboard, event: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body();
    let request: DashboardRequest = if body.iter().all(u8::is_ascii_whitespace) {
        DashboardRequest::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => return bad_request(format!("invalid request body: {}", e)),
        }
    };

    match dashboard.view(&request) {
        Ok(view) => json_response(200, serde_json::to_string(&view)?),
        Err(e @ ProjectionError::InvalidParameter(_)) => bad_request(e.to_string()),
        Err(e) => {
            log::error!("dashboard failed: {}", e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Built once per cold start; the history never changes within a session
    let dashboard = Dashboard::synthetic(DashboardConfig::default())?;
    let dashboard = &dashboard;

    run(service_fn(move |event: Request| async move { handle(dashboard, event).await })).await
}
