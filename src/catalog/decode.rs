//! Lenient decoding of the catalog payload.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Product;
use serde_json::Value;

/// Decodes a catalog body into products.
///
/// The body must be a JSON array. Each element is decoded on its own; records
/// that do not match the product shape are skipped and logged at `warn` level,
/// so one bad record never hides the rest of the catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the body is not valid JSON or not an array.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::catalog::decode_products;
///
/// let products = decode_products("[]").unwrap();
/// assert!(products.is_empty());
/// assert!(decode_products("{}").is_err());
/// ```
pub fn decode_products(body: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::Decode(format!("failed to parse catalog JSON: {e}")))?;

    let Value::Array(records) = value else {
        return Err(CatalogError::Decode(
            "catalog payload is not a JSON array".to_string(),
        ));
    };

    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping malformed product record");
                None
            }
        })
        .collect();

    tracing::debug!(
        total_records = total,
        decoded = products.len(),
        skipped = total - products.len(),
        "catalog decoded"
    );

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u64) -> String {
        format!(
            r#"{{"_id":"p{index}","index":{index},"prefix":{{"name":"DM"}},"ornament":{{"name":"LR"}},
               "purity":{{"name":"22"}},"stockType":{{"name":"Gold"}},"sellingPrice":100,
               "grossWt":1,"netWt":1,"stoneWt":0,"isInStock":true,"stockImage":[]}}"#
        )
    }

    #[test]
    fn skips_records_missing_labels() {
        let body = format!(
            r#"[{}, {{"_id":"broken","index":2}}, {}]"#,
            record(1),
            record(3)
        );

        let products = decode_products(&body).unwrap();
        let indices: Vec<u64> = products.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = decode_products(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            decode_products("not json"),
            Err(CatalogError::Decode(_))
        ));
    }
}
