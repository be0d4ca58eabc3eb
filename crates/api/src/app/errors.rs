use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

/// JSON body carried by every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            error: code,
            message: message.into(),
        }),
    )
        .into_response()
}

/// Router fallback: every unknown path gets a JSON 404.
pub async fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "no such route")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_code_and_message() {
        let body = ErrorBody {
            error: "not_found",
            message: "no such route".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "not_found", "message": "no such route" })
        );
    }
}
