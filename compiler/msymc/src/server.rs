//! HTTP service: `GET /` and `POST /evaluate`.
//!
//! Handlers are thin; the pipeline runs synchronously inside
//! [`evaluate`]. Every response, errors and preflights included, carries
//! permissive CORS headers.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::{evaluate_request, ErrorBody, EvalRequest, EvalResponse, Problem};

const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// The service's routes with CORS applied.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/evaluate", post(evaluate))
        .layer(middleware::from_fn(cors))
}

/// Bind `config.address()` and serve until the process exits.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.address()).await?;
    info!(address = %config, "listening");
    axum::serve(listener, router()).await
}

pub async fn root() -> Json<Value> {
    Json(json!({"ok": true, "message": "Matrix Symbolic API running"}))
}

pub async fn evaluate(Json(request): Json<EvalRequest>) -> Result<Json<EvalResponse>, ApiError> {
    match evaluate_request(&request) {
        Ok(response) => Ok(Json(response)),
        Err(problem) => {
            warn!(
                code = %problem.code(),
                expression = %request.expression,
                "rejected: {problem}"
            );
            Err(ApiError(problem))
        }
    }
}

/// A failed evaluation, answered with 400 `{detail, code}`.
#[derive(Debug)]
pub struct ApiError(pub Problem);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.0.to_string(),
            code: self.0.code().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Allow any origin, method and header, with credentials. The request's
/// `Origin` is echoed back, since `*` is not accepted with credentials.
async fn cors(request: Request, next: Next) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();
    let is_preflight = *request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD);

    let mut response = if is_preflight {
        let mut response = StatusCode::NO_CONTENT.into_response();
        let requested = request.headers().get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();
        let headers = response.headers_mut();
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            requested.unwrap_or_else(|| HeaderValue::from_static("*")),
        );
        response
    } else {
        next.run(request).await
    };

    allow_origin(response.headers_mut(), origin);
    response
}

fn allow_origin(headers: &mut HeaderMap, origin: Option<HeaderValue>) {
    match origin {
        Some(origin) => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.append(VARY, HeaderValue::from_static("Origin"));
        }
        None => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
