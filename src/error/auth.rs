use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID present in the session.
    ///
    /// The request did not carry an authenticated session. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account is deleted while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user is not allowed to perform the operation.
    ///
    /// Results in a 403 Forbidden response. The reason is logged server-side
    /// but not returned to the client.
    #[error("Access denied for user {user_id}: {reason}")]
    AccessDenied {
        /// ID of the user that attempted the operation.
        user_id: i32,
        /// Why the operation was refused.
        reason: String,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For missing or stale sessions
/// - 403 Forbidden - For operations the user may not perform
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { user_id, reason } => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to do that".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
