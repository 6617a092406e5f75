use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::HeaderName,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use entity::{Employee, Identifiable};
use platform_api::{ApiError, ApiResult};
use platform_db::InMemoryRepository;
use products_hr::EmployeeService;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument};

use crate::{config::AppConfig, views};

pub const LIST_PATH: &str = "/employees";

pub type EmployeeStore = InMemoryRepository<Employee>;

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService<EmployeeStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Empty store whose ids start where the config says.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let store = Arc::new(EmployeeStore::with_first_id(config.first_employee_id));
        Self {
            employees: EmployeeService::new(store),
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let service_name = state.config.service_name.clone();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, service = %service_name, "employee registry listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(LIST_PATH, get(list_handler).post(create_handler))
        .route("/employees/new", get(new_form_handler))
        .route(
            "/employees/edit/{id}",
            get(edit_form_handler).post(update_handler),
        )
        .route("/employees/delete/{id}", post(delete_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

/// Submitted name/role. Absent fields arrive as empty strings and are
/// rejected by validation.
#[derive(Debug, Deserialize)]
struct EmployeeForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: String,
}

async fn index_handler() -> Redirect {
    Redirect::to(LIST_PATH)
}

#[instrument(name = "http.employees.list", skip_all)]
async fn list_handler(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let employees = state.employees.list_all()?;
    Ok(Html(views::employee_list(&employees)))
}

async fn new_form_handler() -> Html<String> {
    Html(views::employee_form(None))
}

#[instrument(name = "http.employees.create", skip_all)]
async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> ApiResult<Redirect> {
    let employee = Employee::new(state.employees.next_id()?, form.name, form.role, 0.0);
    state.employees.add(employee)?;
    Ok(Redirect::to(LIST_PATH))
}

#[instrument(name = "http.employees.edit_form", skip(state))]
async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Html<String>> {
    let employee = state
        .employees
        .find_by_id(id)?
        .ok_or(ApiError::NotFound("employee"))?;
    Ok(Html(views::employee_form(Some(&employee))))
}

#[instrument(name = "http.employees.update", skip(state, form))]
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> ApiResult<Redirect> {
    let current = state
        .employees
        .find_by_id(id)?
        .ok_or(ApiError::NotFound("employee"))?;
    let replacement = Employee::new(current.id(), form.name, form.role, current.salary());
    state.employees.update(replacement)?;
    Ok(Redirect::to(LIST_PATH))
}

#[instrument(name = "http.employees.delete", skip(state))]
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Redirect> {
    state.employees.delete(id)?;
    Ok(Redirect::to(LIST_PATH))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let employees = state.employees.list_all().map(|all| all.len());
    Json(HealthResponse {
        ok: employees.is_ok(),
        employees: employees.unwrap_or_default(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    employees: usize,
    version: &'static str,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
