use std::sync::Arc;

use async_trait::async_trait;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;
use business::domain::sync::errors::SyncError;
use business::domain::sync::model::{RemoteProduct, SyncAck};
use business::domain::sync::services::RemoteCatalogService;

use crate::client::SheetsClient;
use crate::dto::{Action, BasicResponse, ReadResponse, STATUS_SUCCESS};

/// Remote catalog backed by a spreadsheet web app: one endpoint, `action` selects
/// the operation. Reads are query-string GETs, writes are form POSTs.
pub struct SheetsRemoteCatalog {
    client: Arc<SheetsClient>,
}

impl SheetsRemoteCatalog {
    pub fn new(client: Arc<SheetsClient>) -> Self {
        Self { client }
    }

    async fn post(
        &self,
        action: Action,
        fields: Vec<(&'static str, String)>,
    ) -> Result<SyncAck, SyncError> {
        let mut form = vec![("action", action.as_str().to_string())];
        form.extend(fields);

        let response = self
            .client
            .client
            .post(&self.client.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Remote {} not delivered: {}", action.as_str(), e);
                SyncError::Transport
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                "Remote {} answered with HTTP {}",
                action.as_str(),
                response.status()
            );
            return Err(SyncError::Transport);
        }

        let body: BasicResponse = response.json().await.map_err(|e| {
            tracing::warn!("Remote {} answer unreadable: {}", action.as_str(), e);
            SyncError::Parse
        })?;

        if body.status != STATUS_SUCCESS {
            return Err(SyncError::Rejected(body.message));
        }
        Ok(body.into_ack())
    }

    fn product_fields(product: &Product, image_base64: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", product.name.clone()),
            ("category", product.category.clone()),
            ("stock", product.stock.to_string()),
            ("price", product.price.to_string()),
            ("image", image_base64.to_string()),
        ]
    }
}

#[async_trait]
impl RemoteCatalogService for SheetsRemoteCatalog {
    async fn fetch_all(&self) -> Result<Vec<RemoteProduct>, SyncError> {
        let response = self
            .client
            .client
            .get(&self.client.endpoint)
            .query(&[("action", Action::Read.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Remote read not delivered: {}", e);
                SyncError::Transport
            })?;

        if !response.status().is_success() {
            tracing::warn!("Remote read answered with HTTP {}", response.status());
            return Err(SyncError::Transport);
        }

        let body: ReadResponse = response.json().await.map_err(|e| {
            tracing::warn!("Remote read answer unreadable: {}", e);
            SyncError::Parse
        })?;

        if body.status != STATUS_SUCCESS {
            return Err(SyncError::Rejected(body.message));
        }

        tracing::debug!("Remote read returned {} rows", body.data.len());
        Ok(body.data.into_iter().map(|d| d.into_domain()).collect())
    }

    async fn push_insert(
        &self,
        product: &Product,
        image_base64: &str,
    ) -> Result<SyncAck, SyncError> {
        self.post(Action::Insert, Self::product_fields(product, image_base64))
            .await
    }

    async fn push_update(
        &self,
        product: &Product,
        image_base64: &str,
    ) -> Result<SyncAck, SyncError> {
        let mut fields = vec![("id", product.id.to_string())];
        fields.extend(Self::product_fields(product, image_base64));
        self.post(Action::Update, fields).await
    }

    async fn push_delete(&self, id: ProductId) -> Result<SyncAck, SyncError> {
        self.post(Action::Delete, vec![("id", id.to_string())]).await
    }

    async fn push_category_rename(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<SyncAck, SyncError> {
        self.post(
            Action::UpdateCategoryBatch,
            vec![
                ("old_name", old_name.to_string()),
                ("new_name", new_name.to_string()),
            ],
        )
        .await
    }
}

/// Stand-in wired when no endpoint is configured.
pub struct DisabledRemoteCatalog;

#[async_trait]
impl RemoteCatalogService for DisabledRemoteCatalog {
    async fn fetch_all(&self) -> Result<Vec<RemoteProduct>, SyncError> {
        Err(SyncError::Disabled)
    }

    async fn push_insert(&self, _: &Product, _: &str) -> Result<SyncAck, SyncError> {
        Err(SyncError::Disabled)
    }

    async fn push_update(&self, _: &Product, _: &str) -> Result<SyncAck, SyncError> {
        Err(SyncError::Disabled)
    }

    async fn push_delete(&self, _: ProductId) -> Result<SyncAck, SyncError> {
        Err(SyncError::Disabled)
    }

    async fn push_category_rename(&self, _: &str, _: &str) -> Result<SyncAck, SyncError> {
        Err(SyncError::Disabled)
    }
}
