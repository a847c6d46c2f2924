use tokio::sync::watch;

use crate::domain::category::model::Category;

pub trait GetAllCategoriesUseCase: Send + Sync {
    fn execute(&self) -> watch::Receiver<Vec<Category>>;
}
