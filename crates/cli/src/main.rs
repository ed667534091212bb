use anyhow::{Context, Result};
use catalog_loader::{Catalog, Product};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filter_engine::{CatalogSession, CatalogView, Selector, MATCH_ALL};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// PlugFinder - browse a connector product catalog
#[derive(Parser)]
#[command(name = "plug-finder")]
#[command(about = "Filter a connector catalog by type, gender and name", long_about = None)]
struct Cli {
    /// Path to the catalog file (comma or tab separated)
    #[arg(short, long, default_value = "products.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the given filters
    List {
        /// Connector type to keep ("all" for every type)
        #[arg(long = "type", default_value = MATCH_ALL)]
        connector_type: Selector,

        /// Connector gender to keep ("all" for every gender)
        #[arg(long, default_value = MATCH_ALL)]
        gender: Selector,

        /// Case-insensitive substring to look for in product names
        #[arg(long, default_value = "")]
        search: String,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the selectable types and genders
    Facets {
        /// Print facets as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;
    tracing::debug!("Catalog parsed in {:?}", start.elapsed());

    let catalog = match catalog.require_non_empty() {
        Ok(catalog) => catalog,
        Err(err) => {
            print_format_help(&cli.catalog);
            return Err(err.into());
        }
    };

    let mut session = CatalogSession::new(catalog);

    match cli.command {
        Commands::List {
            connector_type,
            gender,
            search,
            json,
        } => {
            session.set_type(connector_type);
            session.set_gender(gender);
            session.set_search(&search);
            handle_list(&session, &cli.catalog, json)?
        }
        Commands::Facets { json } => handle_facets(&session, json)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(session: &CatalogSession, source: &Path, json: bool) -> Result<()> {
    let view = session.view();

    if json {
        println!("{}", serde_json::to_string_pretty(view.products())?);
        return Ok(());
    }

    match view {
        CatalogView::EmptyCatalog => print_format_help(source),
        CatalogView::NoMatches => {
            println!("{}", "No matching products".bold().yellow());
            println!("Try other filters or a different search term.");
            println!("Results: 0");
        }
        CatalogView::Matches(products) => {
            for product in &products {
                print_product(product);
            }
            println!("Results: {}", products.len().to_string().green());
        }
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(session: &CatalogSession, json: bool) -> Result<()> {
    let types = type_selectors(session.type_facets());
    let genders = session.gender_facets();

    if json {
        let value = serde_json::json!({ "types": types, "genders": genders });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Types:".bold().blue());
    for connector_type in &types {
        println!("  - {}", connector_type);
    }
    println!("{}", "Genders:".bold().blue());
    for gender in &genders {
        println!("  - {}", gender);
    }
    Ok(())
}

/// Selector labels for the type picker: "all" first, then each facet
fn type_selectors(facets: Vec<String>) -> Vec<String> {
    std::iter::once(MATCH_ALL.to_string()).chain(facets).collect()
}

fn image_label(product: &Product) -> &str {
    product.image_id().unwrap_or("no image")
}

fn print_product(product: &Product) {
    println!(
        "{} [{}] [{}]",
        product.name.bold(),
        product.connector_type.cyan(),
        product.gender.magenta()
    );
    println!("   Link: {}", product.url);
    println!("   Image: {}", image_label(product));
}

fn print_format_help(source: &Path) {
    println!("{}", "No product data could be loaded".bold().red());
    println!("Check that {} uses this layout:", source.display());
    println!("  - first line is a header: name,url,type,gender,imageId");
    println!("  - one product per line");
    println!("  - fields separated by commas (tabs also work)");
}
