/// A product row as reported by the remote catalog's `read` action.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteProduct {
    /// Raw identifier text. May be blank or non-numeric.
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image_url: String,
}

/// Acknowledgement of a write accepted by the remote catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncAck {
    pub message: String,
}
