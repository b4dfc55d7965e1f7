use crate::config::Config;
use clap::Parser;
use common::PointsTable;
use std::convert::Infallible;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warp::{
    http::{header, Method},
    Filter, Rejection, Reply,
};

mod config;
mod handler;

// A full 24-point board is well under this
const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Error, Debug)]
enum StartupError {
    #[error("Failed to install tracing subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::parse();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let points = config.points_table();
    info!(addr = %config.addr(), ?points, "starting server");

    warp::serve(routes(points)).run(config.addr()).await;
    Ok(())
}

fn routes(points: PointsTable) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health")
        .and(warp::get())
        .and_then(handler::health_handler);

    let evaluate_route = warp::path!("evaluate_game")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_points(points))
        .and_then(handler::evaluate_handler);

    health_route
        .or(evaluate_route)
        .recover(handler::handle_rejection)
        .with(
            warp::cors()
                .allow_methods(&[Method::OPTIONS, Method::GET, Method::POST])
                .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                .max_age(300)
                .allow_any_origin(),
        )
        .with(warp::trace::request())
}

fn with_points(
    points: PointsTable,
) -> impl Filter<Extract = (PointsTable,), Error = Infallible> + Clone {
    warp::any().map(move || points)
}
