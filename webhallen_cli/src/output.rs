use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

// -- Row builders --

/// Products are opaque JSON objects, so every column tolerates a missing key.
fn build_product_rows(products: &[Value]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.get("id").map(display_scalar).unwrap_or_default(),
            name: p.get("name").map(display_scalar).unwrap_or_default(),
            price: format_price(p.get("price")),
            category: p.get("categoryTree").map(display_scalar).unwrap_or_default(),
        })
        .collect()
}

pub fn print_products_table(products: &[Value]) {
    println!("{}", Table::new(build_product_rows(products)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_price(price: Option<&Value>) -> String {
    let Some(price) = price else {
        return String::new();
    };
    let amount = price.get("price").map(display_scalar).unwrap_or_default();
    match price.get("currency").and_then(Value::as_str) {
        Some(currency) if !amount.is_empty() => format!("{} {}", amount, currency),
        _ => amount,
    }
}
