//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::habit::dto::ErrorResponse;
use crate::application::handlers::user::{
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::UserError;

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

#[derive(Clone)]
pub struct UserHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginUserHandler>,
}

impl UserHandlers {
    pub fn new(register_handler: Arc<RegisterUserHandler>, login_handler: Arc<LoginUserHandler>) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }
}

/// POST /users/register - create an account
pub async fn register(
    State(handlers): State<UserHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        email: req.email,
        password: req.password,
        chat_id: req.chat_id,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(user) => {
            let response: UserResponse = user.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_user_error(e),
    }
}

/// POST /users/login - verify credentials, issue a token
pub async fn login(
    State(handlers): State<UserHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginUserCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            let response = LoginResponse::bearer(result.access_token, result.user.into());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_user_error(e),
    }
}

fn handle_user_error(error: UserError) -> Response {
    match error {
        UserError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("User", &id.to_string())),
        )
            .into_response(),
        UserError::EmailTaken(email) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(format!(
                "Email already registered: {}",
                email
            ))),
        )
            .into_response(),
        UserError::FieldInvalid(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response(),
        UserError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid credentials")),
        )
            .into_response(),
        UserError::Infrastructure(message) => {
            tracing::error!(error = %message, "user handler infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal error")),
            )
                .into_response()
        }
    }
}
