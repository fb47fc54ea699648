/// Result type for quiz operations
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while running a quiz.
///
/// Running out of players or songs is not an error: those are reported as
/// `None` by the rotation and the pool.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Song {0} is empty, cannot take its first letter")]
    EmptyField(&'static str),

    #[error("No more guesses available from input")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Digest error: {0}")]
    Digest(String),
}
