//! Inventory Application CLI

use std::{path::PathBuf, process, sync::Arc};

use clap::{Args, Parser, Subcommand};
use inventory_app::{
    domain::{
        products::DEFAULT_LOW_STOCK_THRESHOLD,
        summary::{DocumentSummaryService, SummaryService},
    },
    repository::InventoryRepository,
    store::Store,
};

#[derive(Debug, Parser)]
#[command(name = "inventory-app", about = "Inventory CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the inventory document if it does not exist yet
    Init(DataFileArgs),

    /// Print product and category counts
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
struct DataFileArgs {
    /// Path of the inventory document
    #[arg(long, env = "DATA_FILE", default_value = "data/inventory.json")]
    data_file: PathBuf,
}

#[derive(Debug, Args)]
struct SummaryArgs {
    #[command(flatten)]
    data: DataFileArgs,

    /// Stock level below which a product counts as low stock
    #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    threshold: u32,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Init(args) => init(args).await,
        Commands::Summary(args) => summary(args).await,
    }
}

async fn init(args: DataFileArgs) -> Result<(), String> {
    Store::new(&args.data_file)
        .initialize()
        .await
        .map_err(|error| format!("failed to initialize inventory document: {error}"))?;

    println!("inventory document: {}", args.data_file.display());

    Ok(())
}

async fn summary(args: SummaryArgs) -> Result<(), String> {
    let repository = InventoryRepository::new(Arc::new(Store::new(&args.data.data_file)));

    let summary = DocumentSummaryService::new(repository)
        .summarize(args.threshold)
        .await
        .map_err(|error| format!("failed to read inventory document: {error}"))?;

    println!("total_products: {}", summary.total_products);
    println!("total_categories: {}", summary.total_categories);
    println!("low_stock_products: {}", summary.low_stock_products);
    println!("active_products: {}", summary.active_products);

    Ok(())
}
