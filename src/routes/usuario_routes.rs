use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::usuario_controller::UsuarioController;
use crate::models::usuario::Usuario;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub fn create_usuario_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_usuarios).post(create_usuario))
        .route("/users/", post(create_usuario))
        .route(
            "/users/:id",
            get(get_usuario).put(update_usuario).delete(delete_usuario),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    not_found_error("route")
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn path_id(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn json_body(body: Result<Json<Option<Usuario>>, JsonRejection>) -> AppResult<Option<Usuario>> {
    body.map(|Json(usuario)| usuario)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

async fn list_usuarios(
    State(repository): State<UsuarioRepository>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Usuario>>> {
    let ids: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "ids")
        .map(|(_, value)| value)
        .collect();

    let controller = UsuarioController::new(repository);
    let usuarios = controller.list(&ids).await?;
    Ok(Json(usuarios))
}

async fn get_usuario(
    State(repository): State<UsuarioRepository>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Usuario>> {
    let id = path_id(path)?;
    let controller = UsuarioController::new(repository);
    let usuario = controller.get_by_id(id).await?;
    Ok(Json(usuario))
}

async fn create_usuario(
    State(repository): State<UsuarioRepository>,
    body: Result<Json<Option<Usuario>>, JsonRejection>,
) -> AppResult<Response> {
    let usuario = json_body(body)?;
    let controller = UsuarioController::new(repository);
    let created = controller.create(usuario).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location())],
        Json(created),
    )
        .into_response())
}

async fn update_usuario(
    State(repository): State<UsuarioRepository>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<Option<Usuario>>, JsonRejection>,
) -> AppResult<Json<Usuario>> {
    let id = path_id(path)?;
    let usuario = json_body(body)?;
    let controller = UsuarioController::new(repository);
    let updated = controller.update(id, usuario).await?;
    Ok(Json(updated))
}

async fn delete_usuario(
    State(repository): State<UsuarioRepository>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_id(path)?;
    let controller = UsuarioController::new(repository);
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
