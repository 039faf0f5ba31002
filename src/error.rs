use thiserror::Error;

/// Message shown when a request never reached the backend.
pub const SERVER_ERROR: &str = "Error en el servidor";

/// Failures of the reservation backend, as seen from the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },
    #[error("resource not found")]
    NotFound,
    #[error("missing or invalid session")]
    Unauthorized,
    /// Rejected on the client before any request; the message is shown as is.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The backend answered 400 or 422. The body is kept for the logs only.
    #[error("request rejected by the backend: {0}")]
    BadRequest(String),
    #[error("slot already booked")]
    Conflict,
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-2xx HTTP status to the matching error kind.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 | 422 => ApiError::BadRequest(body),
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict,
            _ => ApiError::Server {
                status,
                message: body,
            },
        }
    }

    /// The single user-facing message for a section. Transport failures all
    /// read the same; anything the backend answered uses `fallback`. Only
    /// client-side validation messages reach the user verbatim.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => SERVER_ERROR.to_string(),
            ApiError::Validation(msg) if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_error_kinds() {
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(409, String::new()), ApiError::Conflict);
        assert_eq!(
            ApiError::from_status(422, "fecha requerida".into()),
            ApiError::BadRequest("fecha requerida".into())
        );
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server {
                status: 500,
                message: "boom".into()
            }
        );
    }

    #[test]
    fn network_failures_use_the_generic_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Error al agregar la reserva"), SERVER_ERROR);

        let err = ApiError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            err.user_message("Error al agregar la reserva"),
            "Error al agregar la reserva"
        );
    }

    #[test]
    fn backend_rejections_never_leak_their_body() {
        let err = ApiError::from_status(400, "<html>Bad Request</html>".into());
        assert_eq!(
            err.user_message("Error al agregar la reserva"),
            "Error al agregar la reserva"
        );

        let err = ApiError::Validation("Hora inválida: 25:00".into());
        assert_eq!(err.user_message("Error al agregar la reserva"), "Hora inválida: 25:00");
    }
}
