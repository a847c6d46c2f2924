use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositorySqlite;
use persistence::live::LiveQueries;
use persistence::product::repository::ProductRepositorySqlite;

use sheets::catalog::{DisabledRemoteCatalog, SheetsRemoteCatalog};
use sheets::client::SheetsClient;
use sheets::image_encoder::FileImageEncoder;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::rename::RenameCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::refresh::RefreshProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::view_model::{InventoryUseCases, InventoryViewModel};
use business::domain::session::use_cases::login::LoginUseCase;
use business::domain::sync::services::RemoteCatalogService;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub login: Arc<dyn LoginUseCase>,
    pub view_model: InventoryViewModel,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let live = LiveQueries::load(&pool).await?;
        let product_repository =
            Arc::new(ProductRepositorySqlite::new(pool.clone(), live.clone()));
        let category_repository = Arc::new(CategoryRepositorySqlite::new(pool, live));

        let remote: Arc<dyn RemoteCatalogService> = match &config.sheets.endpoint {
            Some(endpoint) => {
                let client = SheetsClient::shared(endpoint, config.sheets.timeout);
                Arc::new(SheetsRemoteCatalog::new(client))
            }
            None => {
                tracing::info!("SHEETS_ENDPOINT_URL not set, remote sync disabled");
                Arc::new(DisabledRemoteCatalog)
            }
        };
        let image_encoder = Arc::new(FileImageEncoder);

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            remote: remote.clone(),
            image_encoder: image_encoder.clone(),
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            remote: remote.clone(),
            image_encoder,
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            remote: remote.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let refresh_products = Arc::new(RefreshProductsUseCaseImpl {
            repository: product_repository,
            remote: remote.clone(),
            logger: logger.clone(),
        });

        // Category use cases
        let create_category = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let rename_category = Arc::new(RenameCategoryUseCaseImpl {
            repository: category_repository.clone(),
            remote,
            logger: logger.clone(),
        });
        let delete_category = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Session use case
        let login = Arc::new(LoginUseCaseImpl {
            credentials: config.session.expected.clone(),
            logger: logger.clone(),
        });

        let view_model = InventoryViewModel::new(
            InventoryUseCases {
                create_product,
                update_product,
                delete_product,
                get_product_by_id,
                get_all_products,
                refresh_products,
                create_category,
                rename_category,
                delete_category,
                get_all_categories,
            },
            logger,
            config.report.low_stock_threshold,
        );

        Ok(Self { login, view_model })
    }
}
