use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pulling_core::error::{ErrorKind, PullingError};

/// Body sent for every 500. Internals go to the log only.
pub const INTERNAL_MESSAGE: &str = "internal error generating program";

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<PullingError>().map(PullingError::kind) {
            Some(ErrorKind::Validation) => StatusCode::BAD_REQUEST,
            Some(ErrorKind::Configuration) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(ErrorKind::Defect) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn missing_field_maps_to_400() {
        let err = AppError(PullingError::MissingField("well_id").into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_datasheet_maps_to_400() {
        let err = AppError(PullingError::InvalidDatasheet("bad row".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unresolved_anchor_maps_to_422() {
        let err = AppError(PullingError::AnchorDepthUnresolved.into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(PullingError::Io(io_err).into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_pulling_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn defect_body_is_opaque() {
        let err = AppError(PullingError::Defect("table out of order at index 3".into()).into());
        let json = body_json(err.into_response()).await;
        assert_eq!(json["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn configuration_body_carries_the_message() {
        let err = AppError(PullingError::AnchorDepthUnresolved.into());
        let json = body_json(err.into_response()).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("indicate the anchor depth manually"));
    }
}
