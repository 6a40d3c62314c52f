//! HTTP handlers for habit endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::habit::{
    CreateHabitCommand, CreateHabitHandler, DeleteHabitCommand, DeleteHabitHandler,
    GetHabitHandler, GetHabitQuery, HabitFields, HabitPatch, ListOwnHabitsHandler,
    ListOwnHabitsQuery, ListPublishedHabitsHandler, ListPublishedHabitsQuery, UpdateHabitCommand,
    UpdateHabitHandler,
};
use crate::domain::foundation::{HabitId, Page};
use crate::domain::habit::HabitError;

use super::dto::{
    CreateHabitRequest, ErrorResponse, HabitResponse, PageParams, PaginatedResponse,
    UpdateHabitRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct HabitHandlers {
    create_handler: Arc<CreateHabitHandler>,
    update_handler: Arc<UpdateHabitHandler>,
    get_handler: Arc<GetHabitHandler>,
    delete_handler: Arc<DeleteHabitHandler>,
    list_published_handler: Arc<ListPublishedHabitsHandler>,
    list_own_handler: Arc<ListOwnHabitsHandler>,
}

impl HabitHandlers {
    pub fn new(
        create_handler: Arc<CreateHabitHandler>,
        update_handler: Arc<UpdateHabitHandler>,
        get_handler: Arc<GetHabitHandler>,
        delete_handler: Arc<DeleteHabitHandler>,
        list_published_handler: Arc<ListPublishedHabitsHandler>,
        list_own_handler: Arc<ListOwnHabitsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            get_handler,
            delete_handler,
            list_published_handler,
            list_own_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - list published habits (public)
pub async fn list_published(
    State(handlers): State<HabitHandlers>,
    Query(params): Query<PageParams>,
) -> Response {
    let query = ListPublishedHabitsQuery {
        page: Page::new(params.page.unwrap_or(1)),
    };

    match handlers.list_published_handler.handle(query).await {
        Ok(slice) => {
            let response: PaginatedResponse<HabitResponse> =
                PaginatedResponse::from_slice(slice, "/");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_habit_error(e),
    }
}

/// GET /habit/list_person/ - list the requester's habits
pub async fn list_person(
    State(handlers): State<HabitHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<PageParams>,
) -> Response {
    let query = ListOwnHabitsQuery {
        actor: user.id,
        page: Page::new(params.page.unwrap_or(1)),
    };

    match handlers.list_own_handler.handle(query).await {
        Ok(slice) => {
            let response: PaginatedResponse<HabitResponse> =
                PaginatedResponse::from_slice(slice, "/habit/list_person/");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_habit_error(e),
    }
}

/// GET /habit/retrieve/:id/ - fetch one habit
pub async fn retrieve_habit(
    State(handlers): State<HabitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(habit_id): Path<String>,
) -> Response {
    let habit_id = match parse_habit_id(&habit_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetHabitQuery {
        actor: user.id,
        habit_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(habit) => {
            let response: HabitResponse = habit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_habit_error(e),
    }
}

/// POST /habit/create/ - create a habit owned by the requester
pub async fn create_habit(
    State(handlers): State<HabitHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateHabitRequest>,
) -> Response {
    let cmd = CreateHabitCommand {
        owner: user.id,
        fields: HabitFields {
            place: req.place,
            time: req.time,
            date: req.date,
            action: req.action,
            is_pleasant: req.is_pleasant,
            related_habit: req.related_habit,
            periodicity: req.periodicity,
            award: req.award,
            complete_time_secs: req.complete_time_secs,
            is_published: req.is_published,
        },
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(habit) => {
            let response: HabitResponse = habit.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_habit_error(e),
    }
}

/// PATCH|PUT /habit/update/:id/ - update a habit (owner only)
pub async fn update_habit(
    State(handlers): State<HabitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(habit_id): Path<String>,
    Json(req): Json<UpdateHabitRequest>,
) -> Response {
    let habit_id = match parse_habit_id(&habit_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateHabitCommand {
        actor: user.id,
        habit_id,
        patch: HabitPatch {
            place: req.place,
            time: req.time,
            date: req.date,
            action: req.action,
            is_pleasant: req.is_pleasant,
            related_habit: req.related_habit,
            periodicity: req.periodicity,
            award: req.award,
            complete_time_secs: req.complete_time_secs,
            is_published: req.is_published,
        },
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(habit) => {
            let response: HabitResponse = habit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_habit_error(e),
    }
}

/// DELETE /habit/delete/:id/ - delete a habit (owner only)
pub async fn delete_habit(
    State(handlers): State<HabitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(habit_id): Path<String>,
) -> Response {
    let habit_id = match parse_habit_id(&habit_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteHabitCommand {
        actor: user.id,
        habit_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_habit_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_habit_id(raw: &str) -> Result<HabitId, Response> {
    raw.parse::<HabitId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid habit ID")),
        )
            .into_response()
    })
}

fn handle_habit_error(error: HabitError) -> Response {
    match error {
        HabitError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Habit", &id.to_string())),
        )
            .into_response(),
        HabitError::RelatedHabitNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Related habit", &id.to_string())),
        )
            .into_response(),
        HabitError::Forbidden => {
            (StatusCode::FORBIDDEN, Json(ErrorResponse::forbidden())).into_response()
        }
        HabitError::Validation(violations) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&violations)),
        )
            .into_response(),
        HabitError::FieldInvalid(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response(),
        HabitError::Infrastructure(message) => {
            tracing::error!(error = %message, "habit handler infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Violation;

    #[test]
    fn habit_error_not_found_maps_to_404() {
        let response = handle_habit_error(HabitError::NotFound(HabitId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn habit_error_forbidden_maps_to_403() {
        let response = handle_habit_error(HabitError::Forbidden);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn habit_error_validation_maps_to_400() {
        let response = handle_habit_error(HabitError::Validation(vec![Violation::new(
            "periodicity_bound",
            "periodicity must be between 1 and 7 days",
        )]));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn habit_error_infrastructure_maps_to_500() {
        let response = handle_habit_error(HabitError::infrastructure("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_habit_id_maps_to_400() {
        let response = parse_habit_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
