//! Command-line frontend for the storefront library.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront_client::{ClientConfig, NewsletterClient, WooClient, WpClient};
use storefront_core::catalog::CatalogSnapshot;
use storefront_core::filter::{CategoryFilter, FilterEngine};
use storefront_core::types::{ProductId, Slug};
use storefront_core::wishlist::{JsonFileStore, Wishlist};
use storefront_search::{DropdownContent, SearchConfig, SearchController};

#[derive(Parser)]
#[command(name = "storefront", about = "Headless storefront client")]
struct Cli {
    /// Path to the client config (toml).
    #[arg(long, default_value = "storefront.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List products, optionally filtered and sorted.
    Products {
        /// Case-insensitive substring match on the product name.
        #[arg(long)]
        search: Option<String>,
        /// Category slug; omit for all categories.
        #[arg(long)]
        category: Option<String>,
        /// newest, price-asc, or price-desc.
        #[arg(long, default_value = "newest")]
        sort: String,
    },
    /// List product categories.
    Categories,
    /// Run one debounced instant-search lookup.
    Search { term: String },
    /// List recent blog posts.
    Posts,
    /// Toggle a product in the local wishlist.
    Wishlist { id: u64 },
    /// Subscribe an email address to the newsletter.
    Subscribe { email: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_toml_file(&cli.config)?;

    match cli.command {
        Command::Products {
            search,
            category,
            sort,
        } => {
            let woo = WooClient::new(config)?;
            let (products, categories) = tokio::try_join!(woo.products(), woo.categories())?;
            let catalog = Arc::new(CatalogSnapshot::new(products, categories));

            let mut engine = FilterEngine::new(catalog);
            if let Some(term) = search {
                engine.set_search_term(term);
            }
            if let Some(slug) = category {
                engine.set_category(CategoryFilter::Slug(Slug::try_new(slug)?));
            }
            engine.set_sort(sort.parse()?);

            if engine.view().is_empty() {
                println!("no products found matching your criteria");
            } else {
                for product in engine.view() {
                    println!("{:>8}  {:<40}  {}", product.id.0, product.name, product.price);
                }
            }
        }

        Command::Categories => {
            let woo = WooClient::new(config)?;
            for category in woo.categories().await? {
                println!("{:<30}  {}", category.slug, category.name);
            }
        }

        Command::Search { term } => {
            let search_config = SearchConfig::default();
            if term.trim().chars().count() < search_config.min_query_len {
                println!("query too short");
                return Ok(());
            }

            let woo = Arc::new(WooClient::new(config)?);
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            let notify: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
                let _ = tx.send(());
            });

            let controller = SearchController::new(woo, search_config, notify);
            controller.on_focus();
            controller.on_input(&term);

            // Wait for the debounced lookup to land.
            loop {
                match controller.dropdown() {
                    Some(DropdownContent::Results(results)) => {
                        for product in results {
                            println!("{:<40}  /product/{}", product.name, product.slug);
                        }
                        break;
                    }
                    Some(DropdownContent::Empty { term }) => {
                        println!("no products found for \"{term}\"");
                        break;
                    }
                    _ => {
                        if rx.recv().await.is_none() {
                            break;
                        }
                    }
                }
            }
        }

        Command::Posts => {
            let wp = WpClient::new(config)?;
            for post in wp.posts().await? {
                let day = post.date.get(..10).unwrap_or(&post.date);
                println!("{day:<12}  {}", post.title.rendered);
            }
        }

        Command::Wishlist { id } => {
            let path = std::env::var("STOREFRONT_WISHLIST")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("wishlist.json"));
            let mut wishlist = Wishlist::load(Box::new(JsonFileStore::new(path)));
            let added = wishlist.toggle(ProductId(id))?;
            println!(
                "{}",
                if added {
                    "added to wishlist"
                } else {
                    "removed from wishlist"
                }
            );
        }

        Command::Subscribe { email } => {
            NewsletterClient::new(&config)?.subscribe(&email).await?;
            println!("subscribed {email}");
        }
    }

    Ok(())
}
