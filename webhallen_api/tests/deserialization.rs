use webhallen_api::types::{ProductEnvelope, ProductRecord, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_product_envelope() {
    let json = load_fixture("370861.json");
    let record: ProductRecord = serde_json::from_str(&json).unwrap();
    let envelope = ProductEnvelope::from_record(&record).unwrap();

    let product = &envelope.product;
    assert_eq!(product.id, 370861);
    assert_eq!(product.name, "PNY GeForce RTX 4080 SUPER VERTO OC 16GB");

    let price = product.price.as_ref().unwrap();
    assert_eq!(price.price, "13790.00");
    assert_eq!(price.currency.as_deref(), Some("SEK"));
    assert_eq!(price.extra["vat"], 2758);

    assert_eq!(product.extra["manufacturer"]["name"], "PNY");
    assert!(!product.extra.contains_key("id"));
}

#[test]
fn product_without_price_deserializes() {
    let json = r#"{"product": {"id": 1, "name": "Gift card"}}"#;
    let record: ProductRecord = serde_json::from_str(json).unwrap();
    let envelope = ProductEnvelope::from_record(&record).unwrap();
    assert!(envelope.product.price.is_none());
    assert!(envelope.product.extra.is_empty());
}

#[test]
fn record_without_product_key_is_rejected() {
    let json = r#"{"id": 370861, "name": "unwrapped"}"#;
    let record: ProductRecord = serde_json::from_str(json).unwrap();
    assert!(ProductEnvelope::from_record(&record).is_err());
}

#[test]
fn deserialize_search_response() {
    let json = load_fixture("search_rtx.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    let products = resp.into_products();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["price"]["price"], "13790.00");
    assert_eq!(products[1]["id"], 368404);
}

#[test]
fn deserialize_search_response_without_products() {
    let json = load_fixture("search_no_products.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.products.is_none());
    assert!(resp.into_products().is_empty());
}

#[test]
fn deserialize_search_malformed_json_returns_error() {
    let bad_json = r#"{"products": not valid json}"#;
    assert!(serde_json::from_str::<SearchResponse>(bad_json).is_err());
}
