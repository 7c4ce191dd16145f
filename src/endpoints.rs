//! The endpoint URIs served by the app.

/// The root route which redirects to the earnings page.
pub const ROOT: &str = "/";
/// The earnings chart page. Returns only the chart section for htmx requests.
pub const EARNINGS_VIEW: &str = "/earnings";
/// Static assets such as stylesheets.
pub const STATIC: &str = "/static";
/// Attempt to get a cup of coffee.
pub const COFFEE: &str = "/coffee";
