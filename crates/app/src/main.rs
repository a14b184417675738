//! Vitrine catalog CLI
//!
//! Operator tool for poking the remote catalog: list, fetch, create, update,
//! and delete products from the terminal.

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitrine::{
    drafts::ProductDraft,
    prices::format_usd,
    products::Product,
};
use vitrine_app::context::AppContext;

#[derive(Debug, Parser)]
#[command(name = "vitrine-app", about = "Vitrine catalog CLI", long_about = None)]
struct Cli {
    /// Catalog service base URL
    #[arg(
        long,
        env = "VITRINE_CATALOG_URL",
        default_value = vitrine_app::catalog::DEFAULT_BASE_URL
    )]
    catalog_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(ProductsCommand),
}

#[derive(Debug, Args)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product in the catalog
    List,

    /// Fetch a single product
    Get(IdArg),

    /// Create a product
    Create(DraftArgs),

    /// Update an existing product
    Update(UpdateArgs),

    /// Delete a product
    Delete(IdArg),
}

#[derive(Debug, Args)]
struct IdArg {
    /// Product id
    #[arg(long)]
    id: u64,
}

#[derive(Debug, Args)]
struct DraftArgs {
    /// Product title
    #[arg(long)]
    title: String,

    /// Price, e.g. 129.99
    #[arg(long)]
    price: String,

    /// Product description
    #[arg(long)]
    description: String,

    /// One of: electronics, jewelery, men's clothing, women's clothing
    #[arg(long)]
    category: String,

    /// Image URL; a placeholder is used when omitted
    #[arg(long, default_value = "")]
    image: String,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Product id
    #[arg(long)]
    id: u64,

    #[command(flatten)]
    draft: DraftArgs,
}

impl DraftArgs {
    fn into_draft(self) -> ProductDraft {
        ProductDraft {
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
        }
    }
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let context = AppContext::from_base_url(&cli.catalog_url);

    match cli.command {
        Commands::Products(ProductsCommand { command }) => match command {
            ProductsSubcommand::List => {
                let products = context
                    .catalog
                    .list_products()
                    .await
                    .map_err(|error| error.to_string())?;

                for product in &products {
                    print_product_line(product);
                }
                println!("{} products", products.len());
            }
            ProductsSubcommand::Get(args) => {
                let product = context
                    .catalog
                    .get_product(args.id)
                    .await
                    .map_err(|error| error.to_string())?;

                print_product(&product);
            }
            ProductsSubcommand::Create(args) => {
                let input = args
                    .into_draft()
                    .validate()
                    .map_err(|errors| errors.to_string())?;

                let created = context
                    .catalog
                    .create_product(input)
                    .await
                    .map_err(|error| error.to_string())?;

                println!("created product {}", created.id);
                print_product(&created);
            }
            ProductsSubcommand::Update(args) => {
                let input = args
                    .draft
                    .into_draft()
                    .validate()
                    .map_err(|errors| errors.to_string())?;

                let updated = context
                    .catalog
                    .update_product(args.id, input)
                    .await
                    .map_err(|error| error.to_string())?;

                println!("updated product {}", updated.id);
                print_product(&updated);
            }
            ProductsSubcommand::Delete(args) => {
                context
                    .catalog
                    .delete_product(args.id)
                    .await
                    .map_err(|error| error.to_string())?;

                println!("deleted product {}", args.id);
            }
        },
    }

    Ok(())
}

fn print_product_line(product: &Product) {
    println!(
        "{:>4}  {:<10}  {:<24}  {}",
        product.id,
        format_usd(product.price),
        product.category,
        product.title
    );
}

fn print_product(product: &Product) {
    println!("id:          {}", product.id);
    println!("title:       {}", product.title);
    println!("price:       {}", format_usd(product.price));
    println!("category:    {}", product.category);
    println!("image:       {}", product.image);
    println!(
        "rating:      {}/5 ({} reviews)",
        product.rating.rate, product.rating.count
    );
    println!("description: {}", product.description);
}
