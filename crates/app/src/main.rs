//! Vitrine Application CLI

use std::{path::PathBuf, process, time::Duration};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitrine::{
    pricing::{format_amount, parse_amount},
    products::ProductId,
    shipping::{DeliveryMode, ShippingPolicy},
    storefront_currency,
};
use vitrine_app::{
    catalog::{DEFAULT_TIMEOUT, HttpCatalog},
    context::AppContext,
    domain::products::{JsonProductsService, ProductsService, records::ProductRecord},
    storefront::Storefront,
};

#[derive(Debug, Parser)]
#[command(name = "vitrine-app", about = "Vitrine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect or seed the products file
    Products(ProductsCommand),

    /// Price a cart against a running product API
    Quote(QuoteArgs),
}

#[derive(Debug, Args)]
struct ProductsCommand {
    /// Products JSON file
    #[arg(long, env = "PRODUCTS_FILE", default_value = "data/products.json", global = true)]
    products_file: PathBuf,

    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product
    List,

    /// List products whose name contains a query
    Search {
        /// Case-insensitive name fragment
        query: String,
    },

    /// Write the starter catalogue
    Seed {
        /// Overwrite an existing products file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Product API base URL
    #[arg(long, env = "API_URL", default_value = "http://localhost:3000/api")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "API_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_seconds: u64,

    /// Product id to add to the cart; repeat to add more units
    #[arg(long = "add", value_name = "ID", required = true)]
    products: Vec<String>,

    /// `delivery` or `pickup`
    #[arg(long, default_value_t = DeliveryMode::Delivery)]
    delivery_mode: DeliveryMode,

    /// Delivery fee, e.g. `9.00`
    #[arg(long)]
    delivery_fee: Option<String>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Products(args) => products(args).await,
        Commands::Quote(args) => quote(args).await,
    }
}

async fn products(args: ProductsCommand) -> Result<(), String> {
    match args.command {
        ProductsSubcommand::List => {
            let context = open_context(args.products_file).await?;

            let products = context
                .products
                .list_products()
                .await
                .map_err(|error| format!("failed to list products: {error}"))?;

            print_products(&products);
        }
        ProductsSubcommand::Search { query } => {
            let context = open_context(args.products_file).await?;

            let products = context
                .products
                .search_products(&query)
                .await
                .map_err(|error| format!("failed to search products: {error}"))?;

            print_products(&products);
        }
        ProductsSubcommand::Seed { force } => {
            let existed = args.products_file.exists();

            if existed && !force {
                return Err(format!(
                    "{} already exists; pass --force to overwrite it",
                    args.products_file.display()
                ));
            }

            let service = JsonProductsService::open(&args.products_file)
                .await
                .map_err(|error| format!("failed to open products file: {error}"))?;

            let count = if existed {
                service
                    .reset()
                    .await
                    .map_err(|error| format!("failed to seed products: {error}"))?
            } else {
                service
                    .list_products()
                    .await
                    .map_err(|error| format!("failed to seed products: {error}"))?
                    .len()
            };

            println!(
                "seeded {count} products into {}",
                args.products_file.display()
            );
        }
    }

    Ok(())
}

async fn quote(args: QuoteArgs) -> Result<(), String> {
    let policy = match &args.delivery_fee {
        Some(fee) => ShippingPolicy::new(
            parse_amount(fee, storefront_currency())
                .map_err(|error| format!("invalid delivery fee: {error}"))?,
        ),
        None => ShippingPolicy::default(),
    };

    let catalog = HttpCatalog::new(&args.api_url, Duration::from_secs(args.timeout_seconds))
        .map_err(|error| format!("failed to build API client: {error}"))?;

    let mut storefront = Storefront::new(catalog, policy);

    for id in args.products {
        let id = ProductId::new(id);

        storefront
            .add_to_cart(&id)
            .await
            .map_err(|error| format!("failed to add product {id}: {error}"))?;
    }

    for line in storefront.cart().iter() {
        println!(
            "{:>3} x {:<40} {:>8} {:>9}",
            line.quantity(),
            line.name(),
            format_amount(line.price()),
            format_amount(&line.total())
        );
    }

    let totals = storefront.order_total(args.delivery_mode);

    println!("subtotal: {}", format_amount(&totals.subtotal));
    println!(
        "shipping ({}): {}",
        args.delivery_mode,
        format_amount(&totals.shipping_fee)
    );
    println!("total: {}", format_amount(&totals.total));

    Ok(())
}

async fn open_context(path: PathBuf) -> Result<AppContext, String> {
    AppContext::from_products_file(path)
        .await
        .map_err(|error| format!("{error}: {}", error_source(&error)))
}

fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn print_products(products: &[ProductRecord]) {
    for product in products {
        println!(
            "{:<15} {:<40} {:>8.2}",
            product.id.as_str(),
            product.name,
            product.price
        );
    }
}
