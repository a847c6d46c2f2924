use std::sync::Arc;

use once_cell::sync::OnceCell;
use tokio::sync::watch;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::category::use_cases::rename::{RenameCategoryParams, RenameCategoryUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::report::{self, InventoryReport};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::refresh::RefreshProductsUseCase;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{ImageRef, parse_price, parse_stock};
use crate::domain::shared::value_objects::ProductId;

/// Raw product form input, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    pub image: Option<String>,
}

/// Use cases the view model dispatches to.
pub struct InventoryUseCases {
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub refresh_products: Arc<dyn RefreshProductsUseCase>,
    pub create_category: Arc<dyn CreateCategoryUseCase>,
    pub rename_category: Arc<dyn RenameCategoryUseCase>,
    pub delete_category: Arc<dyn DeleteCategoryUseCase>,
    pub get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
}

/// State holder behind the inventory screens.
///
/// Product and category lists are subscribed on first observation and kept for
/// as long as the view model lives. Derived views are recomputed from the
/// latest product list on every change. `product` and the `*_stream` methods
/// spawn a task and must be called from inside a tokio runtime.
pub struct InventoryViewModel {
    use_cases: InventoryUseCases,
    logger: Arc<dyn Logger>,
    low_stock_threshold: u32,
    products: OnceCell<watch::Receiver<Vec<Product>>>,
    categories: OnceCell<watch::Receiver<Vec<Category>>>,
}

impl InventoryViewModel {
    pub fn new(use_cases: InventoryUseCases, logger: Arc<dyn Logger>, low_stock_threshold: u32) -> Self {
        Self {
            use_cases,
            logger,
            low_stock_threshold,
            products: OnceCell::new(),
            categories: OnceCell::new(),
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn products(&self) -> watch::Receiver<Vec<Product>> {
        self.products
            .get_or_init(|| self.use_cases.get_all_products.execute())
            .clone()
    }

    pub fn categories(&self) -> watch::Receiver<Vec<Category>> {
        self.categories
            .get_or_init(|| self.use_cases.get_all_categories.execute())
            .clone()
    }

    /// Live view of a single product; `None` once it is gone from the list.
    pub fn product(&self, id: ProductId) -> watch::Receiver<Option<Product>> {
        self.derive(move |products| products.iter().find(|p| p.id == id).cloned())
    }

    pub async fn find_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.use_cases
            .get_product_by_id
            .execute(GetProductByIdParams { id })
            .await
    }

    /// Returns `Ok(None)` without touching storage when the name is blank.
    pub async fn add_product(&self, form: ProductForm) -> Result<Option<Product>, ProductError> {
        if form.name.trim().is_empty() {
            self.logger.debug("Skipping product with blank name");
            return Ok(None);
        }

        let product = self
            .use_cases
            .create_product
            .execute(CreateProductParams {
                stock: parse_stock(&form.stock),
                price: parse_price(&form.price),
                image: form.image.as_deref().and_then(ImageRef::parse),
                name: form.name,
                category: form.category,
            })
            .await?;
        Ok(Some(product))
    }

    /// Returns `Ok(None)` without touching storage when the name is blank.
    pub async fn update_product(
        &self,
        id: ProductId,
        form: ProductForm,
    ) -> Result<Option<Product>, ProductError> {
        if form.name.trim().is_empty() {
            self.logger
                .debug(&format!("Skipping update of {} with blank name", id));
            return Ok(None);
        }

        let product = self
            .use_cases
            .update_product
            .execute(UpdateProductParams {
                id,
                stock: parse_stock(&form.stock),
                price: parse_price(&form.price),
                image: form.image.as_deref().and_then(ImageRef::parse),
                name: form.name,
                category: form.category,
            })
            .await?;
        Ok(Some(product))
    }

    pub async fn delete_product(&self, product: &Product) -> Result<(), ProductError> {
        self.use_cases
            .delete_product
            .execute(DeleteProductParams { id: product.id })
            .await
    }

    pub async fn refresh(&self) -> Result<Option<usize>, ProductError> {
        self.use_cases.refresh_products.execute().await
    }

    pub async fn add_category(&self, name: String) -> Result<Option<Category>, CategoryError> {
        if name.trim().is_empty() {
            self.logger.debug("Skipping category with blank name");
            return Ok(None);
        }

        let category = self
            .use_cases
            .create_category
            .execute(CreateCategoryParams { name })
            .await?;
        Ok(Some(category))
    }

    pub async fn rename_category(
        &self,
        category: &Category,
        new_name: String,
    ) -> Result<Option<Category>, CategoryError> {
        if new_name.trim().is_empty() {
            self.logger
                .debug(&format!("Skipping rename of {} to blank name", category.id));
            return Ok(None);
        }

        let renamed = self
            .use_cases
            .rename_category
            .execute(RenameCategoryParams {
                id: category.id,
                new_name,
            })
            .await?;
        Ok(Some(renamed))
    }

    pub async fn delete_category(&self, category: &Category) -> Result<(), CategoryError> {
        self.use_cases
            .delete_category
            .execute(DeleteCategoryParams { id: category.id })
            .await
    }

    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<Product> {
        report::search(&self.products().borrow(), query, category)
    }

    pub fn report(&self) -> InventoryReport {
        InventoryReport::from_products(&self.products().borrow(), self.low_stock_threshold)
    }

    pub fn search_stream(
        &self,
        query: String,
        category: Option<String>,
    ) -> watch::Receiver<Vec<Product>> {
        self.derive(move |products| report::search(products, &query, category.as_deref()))
    }

    pub fn report_stream(&self) -> watch::Receiver<InventoryReport> {
        let threshold = self.low_stock_threshold;
        self.derive(move |products| InventoryReport::from_products(products, threshold))
    }

    /// Spawns a task recomputing `compute` on every product list change. The task
    /// ends once every receiver is dropped or the source closes.
    fn derive<T, F>(&self, mut compute: F) -> watch::Receiver<T>
    where
        T: Send + Sync + 'static,
        F: FnMut(&[Product]) -> T + Send + 'static,
    {
        let mut source = self.products();
        let initial = compute(source.borrow_and_update().as_slice());
        let (sender, receiver) = watch::channel(initial);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = source.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let next = compute(source.borrow_and_update().as_slice());
                        sender.send_replace(next);
                    }
                    _ = sender.closed() => break,
                }
            }
        });

        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::CategoryId;
    use crate::test_support::{make_product, mock_logger};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Create {}
        #[async_trait]
        impl CreateProductUseCase for Create {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Update {}
        #[async_trait]
        impl UpdateProductUseCase for Update {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Delete {}
        #[async_trait]
        impl DeleteProductUseCase for Delete {
            async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub GetById {}
        #[async_trait]
        impl GetProductByIdUseCase for GetById {
            async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub GetAll {}
        impl GetAllProductsUseCase for GetAll {
            fn execute(&self) -> watch::Receiver<Vec<Product>>;
        }
    }

    mock! {
        pub Refresh {}
        #[async_trait]
        impl RefreshProductsUseCase for Refresh {
            async fn execute(&self) -> Result<Option<usize>, ProductError>;
        }
    }

    mock! {
        pub CreateCat {}
        #[async_trait]
        impl CreateCategoryUseCase for CreateCat {
            async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError>;
        }
    }

    mock! {
        pub RenameCat {}
        #[async_trait]
        impl RenameCategoryUseCase for RenameCat {
            async fn execute(&self, params: RenameCategoryParams) -> Result<Category, CategoryError>;
        }
    }

    mock! {
        pub DeleteCat {}
        #[async_trait]
        impl DeleteCategoryUseCase for DeleteCat {
            async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
        }
    }

    mock! {
        pub GetAllCat {}
        impl GetAllCategoriesUseCase for GetAllCat {
            fn execute(&self) -> watch::Receiver<Vec<Category>>;
        }
    }

    /// Use cases with no expectations; tests swap in the ones they exercise.
    fn use_cases(get_all: MockGetAll) -> InventoryUseCases {
        InventoryUseCases {
            create_product: Arc::new(MockCreate::new()),
            update_product: Arc::new(MockUpdate::new()),
            delete_product: Arc::new(MockDelete::new()),
            get_product_by_id: Arc::new(MockGetById::new()),
            get_all_products: Arc::new(get_all),
            refresh_products: Arc::new(MockRefresh::new()),
            create_category: Arc::new(MockCreateCat::new()),
            rename_category: Arc::new(MockRenameCat::new()),
            delete_category: Arc::new(MockDeleteCat::new()),
            get_all_categories: Arc::new(MockGetAllCat::new()),
        }
    }

    fn live_products(
        initial: Vec<Product>,
    ) -> (watch::Sender<Vec<Product>>, MockGetAll) {
        let (sender, receiver) = watch::channel(initial);
        let mut get_all = MockGetAll::new();
        get_all.expect_execute().times(1).return_once(move || receiver);
        (sender, get_all)
    }

    fn form(name: &str, stock: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: "Sembako".to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
            image: None,
        }
    }

    #[test]
    fn should_subscribe_to_products_once_on_first_observation() {
        let (_sender, get_all) = live_products(vec![make_product(1, "Kopi", "Minuman", 2)]);
        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);

        let first = view_model.products();
        let second = view_model.products();

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn should_not_subscribe_until_observed() {
        let mut get_all = MockGetAll::new();
        get_all.expect_execute().never();

        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);

        assert_eq!(view_model.low_stock_threshold(), 5);
    }

    #[tokio::test]
    async fn should_skip_product_with_blank_name() {
        let mut create = MockCreate::new();
        create.expect_execute().never();
        let mut cases = use_cases(MockGetAll::new());
        cases.create_product = Arc::new(create);

        let view_model = InventoryViewModel::new(cases, mock_logger(), 5);

        let result = view_model.add_product(form("   ", "3", "100")).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_coerce_non_numeric_stock_and_price_to_zero() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .withf(|p| p.name == "Teh" && p.stock == 0 && p.price == 0.0)
            .times(1)
            .returning(|p| {
                Ok(Product::from_repository(
                    ProductId::new(1),
                    p.name,
                    p.category,
                    p.stock,
                    p.price,
                    p.image,
                ))
            });
        let mut cases = use_cases(MockGetAll::new());
        cases.create_product = Arc::new(create);

        let view_model = InventoryViewModel::new(cases, mock_logger(), 5);

        let product = view_model
            .add_product(form("Teh", "banyak", "murah"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.stock, 0);
        assert_eq!(product.price, 0.0);
    }

    #[tokio::test]
    async fn should_pass_parsed_numbers_and_image_on_update() {
        let mut update = MockUpdate::new();
        update
            .expect_execute()
            .withf(|p| {
                p.id == ProductId::new(8)
                    && p.stock == 14
                    && p.price == 3500.5
                    && p.image.as_ref().is_some_and(|i| i.is_remote())
            })
            .times(1)
            .returning(|p| {
                Ok(Product::from_repository(
                    p.id, p.name, p.category, p.stock, p.price, p.image,
                ))
            });
        let mut cases = use_cases(MockGetAll::new());
        cases.update_product = Arc::new(update);

        let view_model = InventoryViewModel::new(cases, mock_logger(), 5);

        let result = view_model
            .update_product(
                ProductId::new(8),
                ProductForm {
                    image: Some("https://img.example.com/8.jpg".to_string()),
                    ..form("Susu", "14", "3500.5")
                },
            )
            .await;

        assert!(result.unwrap().is_some());
    }

    #[tokio::test]
    async fn should_skip_rename_to_blank_name() {
        let mut rename = MockRenameCat::new();
        rename.expect_execute().never();
        let mut cases = use_cases(MockGetAll::new());
        cases.rename_category = Arc::new(rename);

        let view_model = InventoryViewModel::new(cases, mock_logger(), 5);
        let category = Category::from_repository(CategoryId::new(1), "Sembako".to_string());

        let result = view_model.rename_category(&category, "".to_string()).await;

        assert!(result.unwrap().is_none());
    }

    #[test]
    fn should_search_and_report_from_latest_list() {
        let (sender, get_all) = live_products(vec![make_product(1, "Kopi", "Minuman", 2)]);
        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);
        let _live = view_model.products();

        sender.send_replace(vec![
            make_product(1, "Kopi", "Minuman", 2),
            make_product(2, "Kopi Susu", "Minuman", 10),
            make_product(3, "Beras", "Sembako", 3),
        ]);

        assert_eq!(view_model.search("kopi", None).len(), 2);
        let report = view_model.report();
        assert_eq!(report.low_stock.len(), 2);
        assert_eq!(report.asset_by_category.len(), 2);
    }

    #[tokio::test]
    async fn should_recompute_report_stream_on_every_change() {
        let (sender, get_all) = live_products(vec![make_product(1, "Kopi", "Minuman", 10)]);
        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);

        let mut reports = view_model.report_stream();
        assert!(reports.borrow().low_stock.is_empty());

        sender.send_replace(vec![
            make_product(1, "Kopi", "Minuman", 2),
            make_product(2, "Teh", "Minuman", 10),
            make_product(3, "Gula", "Sembako", 3),
        ]);

        reports.changed().await.unwrap();
        let stocks: Vec<u32> = reports
            .borrow_and_update()
            .low_stock
            .iter()
            .map(|p| p.stock)
            .collect();
        assert_eq!(stocks, vec![2, 3]);
    }

    #[tokio::test]
    async fn should_filter_search_stream_by_category() {
        let (sender, get_all) = live_products(vec![]);
        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);

        let mut results = view_model.search_stream(String::new(), Some("Sembako".to_string()));
        assert!(results.borrow().is_empty());

        sender.send_replace(vec![
            make_product(1, "Beras", "Sembako", 4),
            make_product(2, "Teh", "Minuman", 4),
        ]);

        results.changed().await.unwrap();
        let names: Vec<String> = results
            .borrow_and_update()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Beras".to_string()]);
    }

    #[tokio::test]
    async fn should_emit_none_once_product_disappears() {
        let (sender, get_all) = live_products(vec![
            make_product(1, "Kopi", "Minuman", 2),
            make_product(2, "Teh", "Minuman", 9),
        ]);
        let view_model = InventoryViewModel::new(use_cases(get_all), mock_logger(), 5);

        let mut detail = view_model.product(ProductId::new(2));
        assert_eq!(detail.borrow().as_ref().unwrap().name, "Teh");

        sender.send_replace(vec![make_product(1, "Kopi", "Minuman", 2)]);

        detail.changed().await.unwrap();
        assert!(detail.borrow_and_update().is_none());
    }
}
