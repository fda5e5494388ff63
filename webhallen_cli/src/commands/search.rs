use anyhow::Result;
use clap::Args;
use serde_json::Value;
use webhallen_api::Client;

use crate::output::{print_json, print_products_table, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Search text, sent as-is (e.g. "rtx 4080")
    pub query: String,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let products = client.search(&args.query).await?;

    eprintln!("{} products matching {:?}", products.len(), args.query);

    match format {
        OutputFormat::Json => print_json(&products),
        OutputFormat::Table => {
            let rows: Vec<Value> = products.into_iter().map(Value::Object).collect();
            print_products_table(&rows);
        }
    }

    Ok(())
}
