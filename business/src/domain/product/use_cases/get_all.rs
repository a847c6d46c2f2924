use tokio::sync::watch;

use crate::domain::product::model::Product;

/// Live product list, ordered by name. Never touches the remote catalog.
pub trait GetAllProductsUseCase: Send + Sync {
    fn execute(&self) -> watch::Receiver<Vec<Product>>;
}
