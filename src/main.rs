//! catsift: Command-line interface for the product catalog query engine

use anyhow::Result;
use catsift::catalog::{Product, CATEGORIES};
use catsift::config::{app_config::AppConfig, path_resolver, QueryConfig, SortMode};
use catsift::engine::query_catalog;
use catsift::loader::JsonLoader;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// catsift: query, filter, and sort a product catalog
#[derive(Parser)]
#[command(name = "catsift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize catsift configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Search the catalog
    Search {
        /// Free-text query over title and description (empty matches all)
        #[arg(default_value = "")]
        query: String,

        /// Path to the catalog JSON file
        #[arg(short = 'f', long)]
        catalog: Option<String>,

        /// Restrict to a category label (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort mode: relevance, price-asc, price-desc, or newest
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Show a single product by id
    Show {
        /// Product id
        id: String,

        /// Path to the catalog JSON file
        #[arg(short = 'f', long)]
        catalog: Option<String>,
    },
    /// List category labels with product counts
    Categories {
        /// Path to the catalog JSON file
        #[arg(short = 'f', long)]
        catalog: Option<String>,
    },
}

/// Load app config: config file overlaid by environment variables
fn load_app_config() -> AppConfig {
    let config_path = path_resolver::get_default_config_path();
    let file_config = if config_path.exists() {
        match AppConfig::from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    };
    file_config.merge_with(&AppConfig::from_env())
}

/// Load the catalog, resolving the path from CLI args or app config
fn load_catalog(cli_path: Option<&str>, app_config: &AppConfig) -> Result<Vec<Product>> {
    let raw_path = cli_path.unwrap_or_else(|| app_config.catalog_path());
    let resolved = path_resolver::resolve_path(raw_path)?;
    tracing::debug!("Loading catalog from {}", resolved.display());
    Ok(JsonLoader::load_from_file(&resolved)?)
}

fn format_price(product: &Product) -> String {
    format!("₹ {}", product.price_or_zero())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr so stdout stays clean for piping
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_dir = path_resolver::get_config_dir();
            let config_path = config_dir.join("config.toml");

            eprintln!("Initializing catsift configuration...");
            eprintln!("Config directory: {}", config_dir.display());

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
                eprintln!("Created config directory");
            }

            if config_path.exists() && !force {
                eprintln!("Configuration file already exists: {}", config_path.display());
                eprintln!("Use --force to overwrite");
                return Ok(());
            }

            let default_config = AppConfig::default();
            let toml_content = default_config.to_toml()?;
            std::fs::write(&config_path, &toml_content)?;

            eprintln!("Created configuration file: {}", config_path.display());
            eprintln!("Edit {} to customize settings.", config_path.display());

            Ok(())
        }
        Commands::Search {
            query,
            catalog,
            category,
            sort,
        } => {
            let app_config = load_app_config();
            let products = load_catalog(catalog.as_deref(), &app_config)?;

            let sort_mode = SortMode::parse_lenient(
                sort.as_deref().unwrap_or_else(|| app_config.default_sort()),
            );
            let config = QueryConfig::new()
                .with_query(query.as_str())
                .with_category(category.clone().filter(|c| !c.is_empty()))
                .with_sort(sort_mode);

            let output = query_catalog(&products, &config);

            let filtered_note = if !query.is_empty() || category.is_some() {
                " (filtered)"
            } else {
                ""
            };
            let noun = if output.count == 1 { "result" } else { "results" };
            println!(
                "Showing {} {}{} • Sorted by {}",
                output.count,
                noun,
                filtered_note,
                sort_mode.label()
            );
            println!();

            if output.items.is_empty() {
                println!("No products match your search.");
            } else {
                for (i, product) in output.items.iter().enumerate() {
                    println!("{}. {} — {}", i + 1, product.title_text(), format_price(product));
                    println!(
                        "   id: {}  Category: {}",
                        product.id,
                        product.category.as_deref().unwrap_or("-")
                    );
                    let description = product.description_text();
                    if !description.is_empty() {
                        let snippet: String = description.chars().take(150).collect();
                        println!("   {}", snippet);
                    }
                    println!();
                }
            }

            Ok(())
        }
        Commands::Show { id, catalog } => {
            let app_config = load_app_config();
            let products = load_catalog(catalog.as_deref(), &app_config)?;

            let product = products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("No product with id '{}'", id))?;

            println!("{}", product.title_text());
            println!("Price: {}", format_price(product));
            println!("Category: {}", product.category.as_deref().unwrap_or("-"));
            if let Some(description) = &product.description {
                println!("\n{}", description);
            }
            if let Some(image) = &product.image {
                println!("\nImage: {}", image);
            }

            Ok(())
        }
        Commands::Categories { catalog } => {
            let app_config = load_app_config();
            let products = load_catalog(catalog.as_deref(), &app_config)?;

            println!("Categories:");
            for label in CATEGORIES {
                let count = products.iter().filter(|p| p.in_category(label)).count();
                println!("- {} ({})", label, count);
            }

            let uncategorized = products.iter().filter(|p| p.category.is_none()).count();
            if uncategorized > 0 {
                println!("- (uncategorized) ({})", uncategorized);
            }

            Ok(())
        }
    }
}
