#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.invalid_credentials")]
    InvalidCredentials,
}
