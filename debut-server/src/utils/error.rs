//! 统一错误处理
//!
//! 请求处理路径只有两类错误：
//!
//! | 错误 | HTTP | 响应体 |
//! |------|------|--------|
//! | Validation | 400 | `{ "error": "Invalid RSVP data", "details": [...] }` |
//! | Database | 500 | `{ "error": "Failed to submit RSVP" }` |
//!
//! 验证错误归因到具体字段返回给调用方；存储错误只记录日志，
//! 不向调用方泄露存储内部信息。两类错误都不自动重试。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::response::RsvpRejected;
use shared::validation::FieldError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed")]
    /// 验证失败 (400)，按字段归因
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)，对调用方不透明
    Database(String),
}

impl AppError {
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation(details)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(RsvpRejected::invalid(details)),
            )
                .into_response(),

            AppError::Database(msg) => {
                // 给运维记录根因，给调用方一个通用消息
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(RsvpRejected::server_error()),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_maps_to_400_with_details() {
        let err = AppError::validation(vec![FieldError::new("email", "bad email")]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid RSVP data");
        assert_eq!(body["details"][0]["field"], "email");
        assert_eq!(body["details"][0]["message"], "bad email");
    }

    #[tokio::test]
    async fn database_error_maps_to_500_without_leaking_cause() {
        let err = AppError::database("connection refused at 10.0.0.5:8000");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to submit RSVP");
        assert!(body.get("details").is_none());
        assert!(!body.to_string().contains("10.0.0.5"));
    }
}
