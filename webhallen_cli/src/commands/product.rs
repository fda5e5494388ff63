use anyhow::Result;
use clap::Args;
use webhallen_api::types::ProductEnvelope;
use webhallen_api::Client;

use crate::output::{print_json, print_products_table, OutputFormat};

#[derive(Args)]
pub struct ProductArgs {
    /// Numeric product ID (e.g. 370861)
    pub id: u64,
}

pub async fn run(args: &ProductArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let record = client.get_product(args.id).await?;

    match format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Table => match ProductEnvelope::from_record(&record) {
            Ok(envelope) => {
                let product = serde_json::to_value(&envelope.product)?;
                print_products_table(std::slice::from_ref(&product));
            }
            // Unknown envelope shape: fall back to the raw record.
            Err(_) => print_json(&record),
        },
    }

    Ok(())
}
