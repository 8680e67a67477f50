use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Server not configured: missing Supabase keys.")]
    MissingConfig,

    #[error("Supabase error: {0}")]
    Supabase(String),

    #[error("Invalid request.")]
    InvalidBody,
}

pub type AppResult<T> = Result<T, AppError>;
