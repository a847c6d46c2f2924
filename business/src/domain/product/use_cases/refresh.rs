use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait RefreshProductsUseCase: Send + Sync {
    /// Replaces the local product set with the remote one.
    ///
    /// Returns the number of mirrored products, or `None` when the remote could
    /// not be used and the local set was left untouched.
    async fn execute(&self) -> Result<Option<usize>, ProductError>;
}
