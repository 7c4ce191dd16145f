//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, html::ErrorPage, period::Period};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The finance document could not be parsed.
    ///
    /// Callers should pass in the original parser error as a string.
    #[error("invalid finance data: {0}")]
    InvalidFinanceData(String),

    /// The finance data file could not be read.
    #[error("could not read finance data file {0}")]
    DataFileError(String),

    /// The string does not name one of the chart periods.
    #[error("\"{0}\" is not a valid period")]
    InvalidPeriod(String),

    /// The period exists but is not offered by the current configuration,
    /// e.g., the month view when it has been disabled.
    #[error("the {0} view is not available")]
    PeriodUnavailable(Period),

    /// The chart could not be drawn on the surface with the given ID.
    #[error("the drawing surface \"{0}\" is unavailable")]
    SurfaceUnavailable(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            error @ (Error::InvalidFinanceData(_) | Error::DataFileError(_)) => {
                tracing::error!("Could not load finance data: {error}");
                ErrorPage {
                    description: "Некорректные данные",
                    fix: "Не удалось загрузить данные о доходах. Проверьте файл данных и журналы сервера.",
                    ..ErrorPage::internal_server_error()
                }
                .into_response()
            }
            Error::InvalidPeriod(period) => ErrorPage {
                status: StatusCode::BAD_REQUEST,
                description: "Неизвестный период",
                fix: &format!("Период «{period}» не существует. Выберите период из списка."),
            }
            .into_response(),
            Error::PeriodUnavailable(period) => ErrorPage {
                status: StatusCode::BAD_REQUEST,
                description: "Период недоступен",
                fix: &format!("Период «{}» нельзя выбрать.", period.label()),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::PeriodUnavailable(period) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Период недоступен".to_owned(),
                    details: format!("Период «{}» нельзя выбрать.", period.label()),
                },
            ),
            Error::InvalidPeriod(period) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Неизвестный период".to_owned(),
                    details: format!("Период «{period}» не существует."),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Что-то пошло не так".to_owned(),
                        details: "Произошла непредвиденная ошибка, подробности в журналах сервера."
                            .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
