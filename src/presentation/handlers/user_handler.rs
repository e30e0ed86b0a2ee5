use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError, repositories::user_repository::UserRepository,
        services::password_service::PasswordEncoder,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

// Request

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

// Response

/// json for register response, the password is never echoed back
#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub username: String,
    pub email: String,
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<
    R: UserRepository + Send + Sync + 'static + Clone,
    P: PasswordEncoder + Send + Sync + 'static + Clone,
>(
    register_service: RegisterUserUsecase<R, P>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<R, P>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<R: UserRepository, P: PasswordEncoder> {
    pub register_service: Arc<RegisterUserUsecase<R, P>>,
}

// handler function

/// handler function for register
async fn register<R: UserRepository + Send + Sync, P: PasswordEncoder + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let RegisterRequest {
        username,
        password,
        email,
    } = payload;

    match state
        .register_service
        .register(username.clone(), password, email.clone())
        .await
    {
        Ok(()) => {
            let response = RegisterResponse { username, email };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(DomainError::PasswordEncoding(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json("Registration failed"),
        )
            .into_response(),
        Err(DomainError::Repository(_)) => {
            (StatusCode::BAD_REQUEST, Json("Registration failed")).into_response()
        }
    }
}
