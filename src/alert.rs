//! Alerts shown in the page's alert container after an htmx request.

use axum::response::Html;
use maud::{Markup, html};

/// A dismissable message swapped into `#alert-container`.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_markup(self) -> Markup {
        let (message, details, container_style) = match self {
            Alert::Error { message, details } => (
                message,
                details,
                "text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400",
            ),
        };

        html!(
            div
                role="alert"
                class={"flex items-start p-4 mb-4 rounded-lg shadow " (container_style)}
            {
                div class="text-sm"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8"
                    aria-label="Закрыть"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }
}
