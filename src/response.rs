use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::routes::params::PageWindow;

/// Pagination block of the product listing.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub previous_page: Option<i64>,
    pub current_page: i64,
    pub next_page: Option<i64>,
    pub total_pages: i64,
    pub page_size: i64,
    pub total_count: i64,
}

impl From<PageWindow> for PaginationMeta {
    fn from(window: PageWindow) -> Self {
        Self {
            previous_page: window.previous_page(),
            current_page: window.current_page,
            next_page: window.next_page(),
            total_pages: window.total_pages,
            page_size: window.page_size,
            total_count: window.total_count,
        }
    }
}

/// Payload of envelopes that only carry a message.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct NoData {}

/// The uniform response envelope: `success`, an optional `message` and the
/// action's own keys flattened next to them. The HTTP status travels with the
/// envelope and is fixed by the constructor that built it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            message: None,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            success: true,
            message: None,
            body,
        }
    }

    pub(crate) fn failure(status: StatusCode, message: impl Into<String>, body: T) -> Self {
        Self {
            status,
            success: false,
            message: Some(message.into()),
            body,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<NoData> {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::ok(NoData {}).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
