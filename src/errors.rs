use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::MissingSurface(_) | DashboardError::LengthMismatch { .. } => {
                Self::internal(err)
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures of the dashboard widgets themselves, independent of HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    UnknownRange(String),
    UnknownTab(String),
    /// A control was activated that its group does not contain.
    NotInGroup(String),
    /// The page template has no element with this id to draw the chart on.
    MissingSurface(&'static str),
    LengthMismatch {
        labels: usize,
        comments: usize,
        articles: usize,
    },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRange(value) => write!(f, "unknown range: {value}"),
            Self::UnknownTab(value) => write!(f, "unknown tab: {value}"),
            Self::NotInGroup(value) => write!(f, "control {value} is not part of this group"),
            Self::MissingSurface(id) => write!(f, "rendering surface #{id} not found in page"),
            Self::LengthMismatch {
                labels,
                comments,
                articles,
            } => write!(
                f,
                "series length mismatch: {labels} labels, {comments} comment points, {articles} article points"
            ),
        }
    }
}

impl std::error::Error for DashboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_range_maps_to_bad_request() {
        let err = AppError::from(DashboardError::UnknownRange("5 Weeks".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "unknown range: 5 Weeks");
    }

    #[test]
    fn missing_surface_is_internal() {
        let err = AppError::from(DashboardError::MissingSurface("trendsChart"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
