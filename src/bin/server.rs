use std::{error::Error, fs::OpenOptions, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use earnings_chart::{
    AppState, DEFAULT_CHART_ID, build_router,
    chart::{BarStyle, ChartStyle},
    finance::FinanceData,
    graceful_shutdown, logging_middleware,
    widget::WidgetConfig,
};

/// The web server for the earnings chart.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a finance JSON document. The built-in mock data is used if
    /// omitted.
    #[arg(long)]
    data_path: Option<PathBuf>,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The HTML ID of the element the chart is drawn on.
    #[arg(long, default_value = DEFAULT_CHART_ID)]
    chart_id: String,

    /// Only offer the year and half-year views.
    #[arg(long)]
    disable_month_view: bool,

    /// Hide the chart axes.
    #[arg(long)]
    hide_axes: bool,

    /// Bar thickness in pixels.
    #[arg(long, default_value_t = 18.0)]
    bar_width: f64,

    /// Bar corner radius in pixels.
    #[arg(long, default_value_t = 6.0)]
    bar_radius: f64,
}

impl Args {
    fn widget_config(&self) -> WidgetConfig {
        let default_style = ChartStyle::default();

        WidgetConfig {
            enable_month_view: !self.disable_month_view,
            style: ChartStyle {
                show_axes: !self.hide_axes,
                bar: BarStyle {
                    width: self.bar_width,
                    border_radius: self.bar_radius,
                    ..default_style.bar
                },
                ..default_style
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging()?;

    let args = Args::parse();

    let data = match &args.data_path {
        Some(path) => {
            tracing::info!("Loading finance data from {}", path.display());
            FinanceData::load(path)?
        }
        None => {
            tracing::info!("No data file given, using the built-in mock data");
            FinanceData::mock()?
        }
    };

    let state = AppState::new(data.finance, args.widget_config(), &args.chart_id);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn setup_logging() -> Result<(), Box<dyn Error>> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
