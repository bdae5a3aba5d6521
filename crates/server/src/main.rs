// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use admin_catalog::{CategoryInMemoryRepository, CategoryRepository};
use admin_catalog_api::{
    ApiError, CategoryOutput, CategoryPayload, CreateCategoryRequest, DeleteCategoryRequest,
    GetCategoryRequest, ListCategoriesRequest, PaginationOutput, UpdateCategoryRequest,
    create_category, delete_category, get_category, list_categories, update_category,
};
use admin_catalog_domain::ErrorFields;
use admin_catalog_persistence::{Persistence, PersistenceError};
use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Admin Catalog Server - HTTP server for the video catalog administration API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Keep categories in process memory without any SQL backend.
    #[arg(long, default_value_t = false)]
    in_memory_store: bool,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// One lock guards the repository for every read and write.
#[derive(Clone)]
struct AppState {
    /// The category store selected at startup.
    repository: Arc<Mutex<Box<dyn CategoryRepository>>>,
}

impl AppState {
    fn new(repository: Box<dyn CategoryRepository>) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }
}

/// Response for the service root.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Response wrapping a single category.
#[derive(Debug, Clone, Serialize)]
struct CategoryResponse {
    success: bool,
    category: CategoryOutput,
}

/// Response wrapping one page of categories.
#[derive(Debug, Clone, Serialize)]
struct CategoryListResponse {
    success: bool,
    #[serde(flatten)]
    page: PaginationOutput<CategoryOutput>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Per-field validation messages, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ErrorFields>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Per-field validation messages.
    errors: Option<ErrorFields>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
                errors: None,
            },
            ApiError::EntityValidation { ref errors, .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                errors: Some(errors.clone()),
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
                errors: None,
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    errors: None,
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
            errors: None,
        }
    }
}

/// Handler for GET `/`.
async fn handle_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: String::from("Admin Catalog API"),
    })
}

/// Handler for POST `/categories`.
async fn handle_create_category(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryResponse>), HttpError> {
    info!("Handling create_category request");

    let Json(payload) = body?;
    let request: CreateCategoryRequest = payload.into_create_request()?;

    let mut repository = app_state.repository.lock().await;
    let category: CategoryOutput = create_category(repository.as_mut(), request)?;
    drop(repository);

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            success: true,
            category,
        }),
    ))
}

/// Handler for GET `/categories`.
async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListCategoriesRequest>,
) -> Result<Json<CategoryListResponse>, HttpError> {
    info!("Handling list_categories request");

    let mut repository = app_state.repository.lock().await;
    let page: PaginationOutput<CategoryOutput> = list_categories(repository.as_mut(), &query)?;
    drop(repository);

    Ok(Json(CategoryListResponse {
        success: true,
        page,
    }))
}

/// Handler for GET `/categories/{id}`.
async fn handle_get_category(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, HttpError> {
    info!(id = %id, "Handling get_category request");

    let mut repository = app_state.repository.lock().await;
    let category: CategoryOutput = get_category(repository.as_mut(), &GetCategoryRequest { id })?;
    drop(repository);

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// Handler for PUT `/categories/{id}`.
async fn handle_update_category(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<Json<CategoryResponse>, HttpError> {
    info!(id = %id, "Handling update_category request");

    let Json(payload) = body?;
    let request: UpdateCategoryRequest = payload.into_update_request(id)?;

    let mut repository = app_state.repository.lock().await;
    let category: CategoryOutput = update_category(repository.as_mut(), request)?;
    drop(repository);

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// Handler for DELETE `/categories/{id}`.
async fn handle_delete_category(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(id = %id, "Handling delete_category request");

    let mut repository = app_state.repository.lock().await;
    delete_category(repository.as_mut(), &DeleteCategoryRequest { id })?;
    drop(repository);

    Ok(StatusCode::NO_CONTENT)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route(
            "/categories",
            get(handle_list_categories).post(handle_create_category),
        )
        .route(
            "/categories/{id}",
            get(handle_get_category)
                .put(handle_update_category)
                .delete(handle_delete_category),
        )
        .with_state(app_state)
}

/// Opens the repository selected on the command line.
fn open_repository(args: &Args) -> Result<Box<dyn CategoryRepository>, PersistenceError> {
    if args.in_memory_store {
        if args.database.is_some() || args.mysql_url.is_some() {
            warn!("--in-memory-store set; ignoring database options");
        }
        info!("Using in-process category store");
        return Ok(Box::new(CategoryInMemoryRepository::default()));
    }

    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    Ok(Box::new(persistence))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Admin Catalog Server");

    let repository: Box<dyn CategoryRepository> = open_repository(&args)?;
    let app: Router = build_router(AppState::new(repository));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
