//! Daemon library for Vantage
//!
//! A thin HTTP transport over the check-aggregation engine. Every endpoint
//! is read-only and idempotent: a request triggers one fresh aggregation
//! cycle and serializes the outcome. Report endpoints always answer 200,
//! even when every check is DOWN, so monitoring systems can poll a stable
//! endpoint and inspect `overall_status` in the body.
//!
//! Routes:
//! - `GET /`: auto-refreshing HTML dashboard
//! - `GET /summary`: full [`schema::AggregateReport`]
//! - `GET /services`: service check results only
//! - `GET /system/disk`: disk check results only
//! - `GET /health`: daemon self-liveness

#![allow(unused_crate_dependencies)]

pub mod simple_error;

#[cfg(test)]
mod simple_error_tests;

pub use simple_error::{DaemonError, Result};

use hyper::header::CONTENT_TYPE;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use vantage_core::{run_all, run_report, Settings, DEFAULT_TOTAL_TIMEOUT};

static DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// The Vantage HTTP daemon.
///
/// Holds the settings loaded once at startup; they are shared read-only
/// with every request handler for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Daemon {
    settings: Arc<Settings>,
    addr: SocketAddr,
}

impl Daemon {
    /// Create a new daemon instance
    #[must_use]
    pub fn new(settings: Settings, addr: SocketAddr) -> Self {
        Self {
            settings: Arc::new(settings),
            addr,
        }
    }

    /// Serve until the given shutdown future completes.
    ///
    /// # Errors
    /// Returns an error if the listener cannot be bound or the server fails
    /// while running.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let settings = self.settings.clone();
        let make_svc = make_service_fn(move |_conn| {
            let settings = settings.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let settings = settings.clone();
                    async move { Ok::<_, Infallible>(route(req, settings).await) }
                }))
            }
        });

        let server = Server::try_bind(&self.addr)
            .map_err(|e| DaemonError::ServerError(format!("Failed to bind to {}: {}", self.addr, e)))?
            .serve(make_svc);

        info!("Vantage daemon listening on {}", server.local_addr());

        server
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DaemonError::ServerError(e.to_string()))
    }

    /// Bind and serve on a background task, returning the bound address.
    ///
    /// Used by integration tests to serve on an OS-assigned port.
    ///
    /// # Errors
    /// Returns an error if the listener cannot be bound.
    pub fn spawn(self) -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
        let settings = self.settings.clone();
        let make_svc = make_service_fn(move |_conn| {
            let settings = settings.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let settings = settings.clone();
                    async move { Ok::<_, Infallible>(route(req, settings).await) }
                }))
            }
        });

        let server = Server::try_bind(&self.addr)
            .map_err(|e| DaemonError::ServerError(format!("Failed to bind to {}: {}", self.addr, e)))?
            .serve(make_svc);

        let addr = server.local_addr();
        let handle = tokio::spawn(async move {
            if let Err(e) = server.await {
                error!("Server error: {}", e);
            }
        });
        Ok((addr, handle))
    }
}

async fn route(req: Request<Body>, settings: Arc<Settings>) -> Response<Body> {
    if req.method() != Method::GET {
        return status_json(
            StatusCode::METHOD_NOT_ALLOWED,
            &serde_json::json!({"error": "method not allowed"}),
        );
    }

    match req.uri().path() {
        "/" => html(DASHBOARD_HTML),
        "/health" => status_json(
            StatusCode::OK,
            &serde_json::json!({
                "ok": true,
                "service": "vantage",
                "version": env!("CARGO_PKG_VERSION"),
            }),
        ),
        "/summary" => {
            let report = run_report(&settings, DEFAULT_TOTAL_TIMEOUT).await;
            status_json(StatusCode::OK, &report)
        }
        "/services" => {
            let results = run_all(&settings.service_definitions(), DEFAULT_TOTAL_TIMEOUT).await;
            status_json(StatusCode::OK, &serde_json::json!({ "services": results }))
        }
        "/system/disk" => {
            let results = run_all(&settings.disk_definitions(), DEFAULT_TOTAL_TIMEOUT).await;
            status_json(StatusCode::OK, &serde_json::json!({ "disk": results }))
        }
        path => {
            warn!("No route for {}", path);
            status_json(
                StatusCode::NOT_FOUND,
                &serde_json::json!({"error": "not found"}),
            )
        }
    }
}

fn status_json<T: serde::Serialize>(status: StatusCode, value: &T) -> Response<Body> {
    let body = match serde_json::to_vec(value) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            return fallback_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| fallback_response(StatusCode::INTERNAL_SERVER_ERROR))
}

fn html(content: &'static str) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(content))
        .unwrap_or_else(|_| fallback_response(StatusCode::INTERNAL_SERVER_ERROR))
}

fn fallback_response(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}
