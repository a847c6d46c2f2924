use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    fn execute(&self) -> watch::Receiver<Vec<Product>> {
        let receiver = self.repository.watch_all();
        self.logger.debug(&format!(
            "Subscribed to product list ({} products)",
            receiver.borrow().len()
        ));
        receiver
    }
}
