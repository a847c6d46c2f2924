use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    fn execute(&self) -> watch::Receiver<Vec<Category>> {
        self.logger.debug("Subscribed to category list");
        self.repository.watch_all()
    }
}
