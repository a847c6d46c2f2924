/// Failures talking to the remote catalog. Callers log and discard these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    #[error("sync.disabled")]
    Disabled,
    #[error("sync.transport")]
    Transport,
    #[error("sync.parse")]
    Parse,
    #[error("sync.rejected: {0}")]
    Rejected(String),
}
