//! HTTP surface for the user service
//!
//! | Method | Path          | Response            |
//! |--------|---------------|---------------------|
//! | GET    | `/users`      | `Page<UserDto>`     |
//! | POST   | `/users`      | `UserDto`           |
//! | GET    | `/users/{id}` | `UserDto`           |

mod error;
mod request;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::model::UserDto;
use crate::query::Page;
use crate::service::UserService;
use crate::store::UserStore;

pub use error::{ApiError, ApiErrorBody, ApiErrorKind, ApiOperation};
pub use request::{CreateUserRequest, SearchParams};

/// Routes for `/users`, sharing one service instance
pub fn router<S: UserStore + 'static>(service: Arc<UserService<S>>) -> Router {
    Router::new()
        .route("/users", get(search_users::<S>).post(create_user::<S>))
        .route("/users/{id}", get(get_user::<S>))
        .with_state(service)
}

async fn search_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Page<UserDto>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation_failed(e.body_text()))?;
    let criteria = params.criteria()?;
    let page = params.page_request(service.limits())?;

    let page = service.search(&criteria, page).await?;
    Ok(Json(page))
}

async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let during_create = |e: ApiError| e.with_operation(ApiOperation::Create);

    let Json(body) = body.map_err(|e| during_create(ApiError::validation_failed(e.body_text())))?;
    let new_user = body.validate().map_err(|e| during_create(e.into()))?;

    let user = service
        .create(new_user)
        .await
        .map_err(|e| during_create(e.into()))?;
    Ok(Json(user))
}

async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let during_get = |e: ApiError| e.with_operation(ApiOperation::Get);

    let id = Uuid::parse_str(&id).map_err(|e| {
        during_get(ApiError::validation_failed(format!("Invalid UUID string: {}", id)).with_detail(e.to_string()))
    })?;
    let user = service.get_by_id(id).await.map_err(|e| during_get(e.into()))?;
    Ok(Json(user))
}
