use thiserror::Error;

/// Failures produced by user validation, queries and the service layer.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("missing user_id")]
    MissingUserId,
    #[error("missing user_name")]
    MissingUserName,
    #[error("missing first_name")]
    MissingFirstName,
    #[error("missing last_name")]
    MissingLastName,
    #[error("missing email")]
    MissingEmail,
    #[error("user not found")]
    UserNotFound,

    #[error("no values to update")]
    UpdateMissingValues,
    #[error("no rows updated")]
    UpdateNoRows,

    #[error("user_name already exists")]
    UserExists,
    #[error("invalid user_id: must be an integer")]
    InvalidUserId,

    /// Could not borrow a connection from the pool.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
