use serde::{Deserialize, Serialize};
use url::Url;

/// Reference to a product photo. The raw text is kept verbatim; the variant only
/// records whether it points at the network or at something on the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImageRef {
    Local(String),
    Remote(String),
}

impl ImageRef {
    /// Classifies a raw image reference. Blank text means "no image".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Some(ImageRef::Remote(raw.to_string()))
            }
            _ => Some(ImageRef::Local(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Local(raw) | ImageRef::Remote(raw) => raw,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::Local(raw) | ImageRef::Remote(raw) => raw,
        }
    }
}

impl TryFrom<String> for ImageRef {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ImageRef::parse(&raw).ok_or_else(|| "Invalid image reference: blank".to_string())
    }
}

/// Reads a stock count typed by the user. Anything that is not a non-negative
/// integer counts as zero.
pub fn parse_stock(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

/// Reads a price typed by the user. Non-numeric, negative or non-finite input
/// counts as zero.
pub fn parse_price(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => price,
        _ => 0.0,
    }
}
