use serde_json::Value;

use super::error::AnalyzeError;
use crate::domain::SalesData;

/// The three record collections every dataset document must carry
const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Shape gate over a raw dataset document
///
/// Every collection must be present as an array, checked for all three
/// before any emptiness check, so a document that is both misshapen and
/// empty reports the structural problem first.
pub fn validate_shape(raw: &Value) -> Result<(), AnalyzeError> {
    for name in COLLECTIONS {
        if !matches!(raw.get(name), Some(Value::Array(_))) {
            return Err(AnalyzeError::InvalidStructure(name));
        }
    }

    for name in COLLECTIONS {
        if let Some(Value::Array(records)) = raw.get(name)
            && records.is_empty()
        {
            return Err(AnalyzeError::EmptyInput(name));
        }
    }

    Ok(())
}

/// Empty-input gate over the typed dataset
///
/// Structure is unrepresentable once the data is typed, so this is the only
/// check left for callers that construct `SalesData` directly.
pub fn validate(data: &SalesData) -> Result<(), AnalyzeError> {
    if data.sellers.is_empty() {
        return Err(AnalyzeError::EmptyInput("sellers"));
    }
    if data.products.is_empty() {
        return Err(AnalyzeError::EmptyInput("products"));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalyzeError::EmptyInput("purchase_records"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, PurchaseRecord, Seller};
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "sellers": [{ "id": 1, "first_name": "A", "last_name": "B" }],
            "products": [{ "sku": "X", "purchase_price": 10.0 }],
            "purchase_records": [{
                "seller_id": 1,
                "customer_id": 9,
                "date": "2024-01-01",
                "total_amount": 100.0,
                "items": []
            }]
        })
    }

    fn typed_data() -> SalesData {
        SalesData {
            sellers: vec![Seller {
                id: 1,
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                start_date: String::new(),
                position: String::new(),
            }],
            products: vec![Product {
                sku: "X".to_string(),
                name: String::new(),
                purchase_price: 10.0,
            }],
            purchase_records: vec![PurchaseRecord {
                seller_id: 1,
                customer_id: 9,
                date: "2024-01-01".to_string(),
                total_amount: 100.0,
                total_discount: 0.0,
                items: vec![],
            }],
        }
    }

    #[test]
    fn accepts_well_formed_document() {
        assert!(validate_shape(&valid_document()).is_ok());
    }

    #[test]
    fn missing_collection_is_invalid_structure() {
        let mut raw = valid_document();
        raw.as_object_mut().unwrap().remove("products");

        let result = validate_shape(&raw);
        assert!(matches!(
            result,
            Err(AnalyzeError::InvalidStructure("products"))
        ));
    }

    #[test]
    fn non_array_collection_is_invalid_structure() {
        let mut raw = valid_document();
        raw["sellers"] = json!({ "id": 1 });

        let result = validate_shape(&raw);
        assert!(matches!(
            result,
            Err(AnalyzeError::InvalidStructure("sellers"))
        ));
    }

    #[test]
    fn structure_errors_win_over_empty_errors() {
        let mut raw = valid_document();
        raw["sellers"] = json!([]);
        raw["purchase_records"] = json!("nope");

        let result = validate_shape(&raw);
        assert!(matches!(
            result,
            Err(AnalyzeError::InvalidStructure("purchase_records"))
        ));
    }

    #[test]
    fn empty_collection_is_empty_input() {
        let mut raw = valid_document();
        raw["purchase_records"] = json!([]);

        let result = validate_shape(&raw);
        assert!(matches!(
            result,
            Err(AnalyzeError::EmptyInput("purchase_records"))
        ));
    }

    #[test]
    fn typed_validate_accepts_populated_data() {
        assert!(validate(&typed_data()).is_ok());
    }

    #[test]
    fn typed_validate_rejects_empty_sellers() {
        let mut data = typed_data();
        data.sellers.clear();

        assert!(matches!(
            validate(&data),
            Err(AnalyzeError::EmptyInput("sellers"))
        ));
    }

    #[test]
    fn typed_validate_rejects_empty_products() {
        let mut data = typed_data();
        data.products.clear();

        assert!(matches!(
            validate(&data),
            Err(AnalyzeError::EmptyInput("products"))
        ));
    }

    #[test]
    fn typed_validate_rejects_empty_purchase_records() {
        let mut data = typed_data();
        data.purchase_records.clear();

        assert!(matches!(
            validate(&data),
            Err(AnalyzeError::EmptyInput("purchase_records"))
        ));
    }
}
