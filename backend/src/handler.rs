use common::messages::{ErrorResponse, GameResultInput, GameResultOutput};
use common::{evaluate, GameError, PointsTable, ValidGameInput};
use std::convert::Infallible;
use tracing::{error, info, warn};
use uuid::Uuid;
use warp::{
    body::BodyDeserializeError,
    http::StatusCode,
    reject,
    reply::{json, with_status},
    Rejection, Reply,
};

type Result<T> = std::result::Result<T, Rejection>;

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4().as_simple()))]
pub async fn evaluate_handler(body: GameResultInput, points: PointsTable) -> Result<impl Reply> {
    match score_game(body, &points) {
        Ok(output) => {
            info!(
                winner = %output.winner,
                win_type = %output.win_type,
                points = output.points,
                "game evaluated"
            );
            Ok(with_status(json(&output), StatusCode::OK))
        }
        Err(err) => {
            warn!("Rejected game evaluation: {}", err);
            Ok(with_status(
                json(&ErrorResponse::new(&err)),
                error_status(&err),
            ))
        }
    }
}

pub fn score_game(
    body: GameResultInput,
    points: &PointsTable,
) -> std::result::Result<GameResultOutput, GameError> {
    let input = ValidGameInput::new(body)?;
    let evaluation = evaluate(&input)?;
    Ok(GameResultOutput::new(&evaluation, points))
}

// Both kinds are the caller's fault. A board with no winner is well formed
// but unfinished, so it gets a plain 400.
fn error_status(err: &GameError) -> StatusCode {
    match err {
        GameError::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GameError::Evaluation(_) => StatusCode::BAD_REQUEST,
    }
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}

pub async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
    } else if err.find::<reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header is required".to_string())
    } else if err.find::<reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Request body must be JSON".to_string(),
        )
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };
    Ok(with_status(json(&ErrorResponse::new(detail)), status))
}
