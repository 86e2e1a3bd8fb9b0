use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tictactoe_common::{log, GameId};

use crate::api::{CreateGameRequest, ErrorBody, GameSnapshot, PlaceMarkRequest};
use crate::game_session_manager::{GameSessionManager, SessionError};

#[derive(Clone)]
pub struct WebServerState {
    pub session_manager: GameSessionManager,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match self {
            SessionError::GameNotFound(_) => StatusCode::NOT_FOUND,
            SessionError::InvalidMove(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SessionError::SearchFailed(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub fn build_router(session_manager: GameSessionManager, static_files_path: Option<PathBuf>) -> Router {
    let state = WebServerState { session_manager };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/api/games", post(create_game_handler))
        .route("/api/games/{id}", get(get_game_handler).delete(delete_game_handler))
        .route("/api/games/{id}/moves", post(place_mark_handler))
        .route("/api/games/{id}/reset", post(reset_game_handler));

    if let Some(path) = static_files_path {
        log!("Serving UI from {}", path.display());
        app = app.nest_service("/ui", ServeDir::new(path));
    }

    app.layer(cors).with_state(state)
}

pub async fn run_web_server(
    session_manager: GameSessionManager,
    addr: SocketAddr,
    static_files_path: Option<PathBuf>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(session_manager, static_files_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

async fn create_game_handler(
    State(state): State<WebServerState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<GameSnapshot>, SessionError> {
    let snapshot = state.session_manager.create_game(request.player_name).await?;
    Ok(Json(snapshot))
}

async fn get_game_handler(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> Result<Json<GameSnapshot>, SessionError> {
    let snapshot = state.session_manager.get_game(&GameId::new(id)).await?;
    Ok(Json(snapshot))
}

async fn place_mark_handler(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
    Json(request): Json<PlaceMarkRequest>,
) -> Result<Json<GameSnapshot>, SessionError> {
    let snapshot = state
        .session_manager
        .place_human_mark(&GameId::new(id), request.index)
        .await?;
    Ok(Json(snapshot))
}

async fn reset_game_handler(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> Result<Json<GameSnapshot>, SessionError> {
    let snapshot = state.session_manager.reset_game(&GameId::new(id)).await?;
    Ok(Json(snapshot))
}

async fn delete_game_handler(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, SessionError> {
    state.session_manager.remove_game(&GameId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
