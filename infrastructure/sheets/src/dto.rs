use serde::Deserialize;

use business::domain::sync::model::{RemoteProduct, SyncAck};

pub const STATUS_SUCCESS: &str = "success";

/// Request discriminator understood by the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Insert,
    Update,
    Delete,
    UpdateCategoryBatch,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Insert => "insert",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::UpdateCategoryBatch => "update_category_batch",
        }
    }
}

/// Spreadsheet cells come back as either JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

impl Cell {
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(t) => t.trim().to_string(),
        }
    }

    pub fn as_f64(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(t) => t.trim().parse().unwrap_or(0.0),
        };
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    pub fn as_u32(&self) -> u32 {
        let value = self.as_f64().trunc();
        if value >= u32::MAX as f64 {
            u32::MAX
        } else {
            value as u32
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoteProductDto {
    #[serde(default)]
    pub id: Cell,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: Cell,
    #[serde(default)]
    pub price: Cell,
    #[serde(default)]
    pub image_url: String,
}

impl RemoteProductDto {
    pub fn into_domain(self) -> RemoteProduct {
        RemoteProduct {
            id: self.id.as_text(),
            name: self.name,
            category: self.category,
            stock: self.stock.as_u32(),
            price: self.price.as_f64(),
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReadResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<RemoteProductDto>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BasicResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl BasicResponse {
    pub fn into_ack(self) -> SyncAck {
        SyncAck {
            message: self.message,
        }
    }
}
