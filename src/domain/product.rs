//! Product domain model.
//!
//! This module defines the [`Product`] record served by the catalog endpoint,
//! together with its nested label, image and stone records. Field names follow
//! the endpoint's camelCase JSON so records deserialize without a mapping layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named categorical label (`{ "name": "LR" }`).
///
/// Prefix, ornament, purity and stock type are all delivered as sub-objects
/// carrying a single `name` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    /// Creates a label from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Image descriptor; the URL is built from a fixed base plus `file_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockImage {
    pub file_name: String,
}

/// One row of a product's stone table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoneRecord {
    #[serde(rename = "type")]
    pub kind: Label,
    #[serde(default)]
    pub ct_weight: f64,
    #[serde(default)]
    pub sell_rate: f64,
}

/// Free-form product tag.
///
/// The feed carries numeric tags for most records but nothing in it forbids
/// text, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A jewellery item in the catalog.
///
/// # Fields
///
/// - `id`: Stable identifier (`_id` in the feed), used as render key
/// - `index`: Human-facing number, used in product codes and the `product` URL parameter
/// - `prefix`, `ornament`, `purity`, `stock_type`: Categorical labels
/// - `selling_price`: Price in rupees
/// - `gross_wt`, `net_wt`, `stone_wt`: Weights in grams
/// - `is_in_stock`: Availability flag
/// - `stock_image`: Ordered gallery
/// - `stone_table`: Optional stone breakdown
/// - `created_date`: Recency sort key
/// - `remark`, `tag`: Free-text search fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub index: u64,
    pub prefix: Label,
    pub ornament: Label,
    pub purity: Label,
    pub stock_type: Label,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub gross_wt: f64,
    #[serde(default)]
    pub net_wt: f64,
    #[serde(default)]
    pub stone_wt: f64,
    #[serde(default)]
    pub is_in_stock: bool,
    #[serde(default)]
    pub stock_image: Vec<StockImage>,
    #[serde(default)]
    pub stone_table: Option<Vec<StoneRecord>>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub tag: Option<Tag>,
}

impl Product {
    /// Returns the display code shown on cards and in inquiries, e.g. `"DM-1042"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimoss_catalog::domain::{Label, Product};
    ///
    /// let mut product = Product::sample(1042);
    /// product.prefix = Label::new("DM");
    /// assert_eq!(product.code(), "DM-1042");
    /// ```
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}-{}", self.prefix.name, self.index)
    }

    /// Purity label with the karat suffix, e.g. `"22K"`.
    #[must_use]
    pub fn purity_karats(&self) -> String {
        format!("{}K", self.purity.name)
    }

    /// Human-readable category of the ornament code.
    #[must_use]
    pub fn category_name(&self) -> &str {
        category_display_name(&self.ornament.name)
    }

    /// Builds image URLs by joining `base` with each file name.
    ///
    /// No existence check is performed.
    #[must_use]
    pub fn image_urls(&self, base: &str) -> Vec<String> {
        self.stock_image
            .iter()
            .map(|image| format!("{base}{}", image.file_name))
            .collect()
    }

    /// URL of the first gallery image, if the product has one.
    #[must_use]
    pub fn cover_image_url(&self, base: &str) -> Option<String> {
        self.stock_image
            .first()
            .map(|image| format!("{base}{}", image.file_name))
    }

    /// Stone rows, empty when the record has no stone table.
    #[must_use]
    pub fn stones(&self) -> &[StoneRecord] {
        self.stone_table.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the lower-cased search term occurs in the index, tag,
    /// ornament label or remark.
    #[must_use]
    pub fn matches_search(&self, term_lower: &str) -> bool {
        self.index.to_string().contains(term_lower)
            || self
                .tag
                .as_ref()
                .is_some_and(|tag| tag.to_string().to_lowercase().contains(term_lower))
            || self.ornament.name.to_lowercase().contains(term_lower)
            || self
                .remark
                .as_ref()
                .is_some_and(|remark| remark.to_lowercase().contains(term_lower))
    }

    /// Minimal product used by documentation examples and tests.
    #[doc(hidden)]
    #[must_use]
    pub fn sample(index: u64) -> Self {
        Self {
            id: format!("id-{index}"),
            index,
            prefix: Label::new("DM"),
            ornament: Label::new("LR"),
            purity: Label::new("22"),
            stock_type: Label::new("Gold"),
            selling_price: 1000.0,
            gross_wt: 4.2,
            net_wt: 4.0,
            stone_wt: 0.2,
            is_in_stock: true,
            stock_image: vec![StockImage {
                file_name: format!("{index}.jpg"),
            }],
            stone_table: None,
            created_date: None,
            remark: None,
            tag: None,
        }
    }
}

/// Maps an ornament code to the name shown to shoppers.
///
/// Unknown codes are returned unchanged.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::domain::category_display_name;
///
/// assert_eq!(category_display_name("B.BALI"), "Earrings");
/// assert_eq!(category_display_name("XYZ"), "XYZ");
/// ```
#[must_use]
pub fn category_display_name(code: &str) -> &str {
    match code {
        "BCLT" => "Bracelet",
        "B.BALI" => "Earrings",
        "GR" => "Men's Ring",
        "KADE" => "Kangan",
        "LR" => "Women's Ring",
        "NP" => "Nose Pin",
        "PDL" => "Pendant",
        "TOPS" => "Tops",
        "SET" => "Set",
        "CH" => "Chain",
        "TIKA" => "Tika",
        other => other,
    }
}
