use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ShoppingItemError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}

pub fn not_found() -> Json<ErrorResponse> {
    ErrorResponse::new("NotFound", "shopping_item.not_found")
}

pub fn invalid_order() -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", "shopping_item.invalid_order")
}
