//! Innkeep - look up a Hearthstone card and print its Discord embed
//!
//! Fetches the collectible catalog (or reads a saved `cards.json`), finds the
//! card by exact name and renders the requested embed.

use clap::Parser;
use innkeep::config::{DEFAULT_API_BASE, DEFAULT_BUILD, DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS};
use innkeep::{CardCache, CatalogFile, CatalogSource, Config, EmbedKind, HearthstoneClient};
use std::path::PathBuf;
use std::time::Duration;

/// Hearthstone card lookup - renders a card as a Discord embed
#[derive(Parser, Debug)]
#[command(name = "innkeep")]
#[command(version, about, long_about = None)]
struct Args {
    /// Exact card name, e.g. "Leeroy Jenkins"
    name: String,

    /// Render the full-size card image instead of the text embed
    #[arg(long, default_value_t = false)]
    image: bool,

    /// Print the embed as Discord JSON instead of a text preview
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Read the catalog from a saved cards.json instead of the API
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Base URI of the HearthstoneJSON API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Game build to request card data for
    #[arg(long, default_value = DEFAULT_BUILD)]
    build: String,

    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Timeout for the catalog request in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            api_base: self.api_base.clone(),
            build: self.build.clone(),
            locale: self.locale.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
    }

    fn kind(&self) -> EmbedKind {
        if self.image {
            EmbedKind::Image
        } else {
            EmbedKind::Text
        }
    }
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = match args.catalog {
        Some(ref path) => run(CardCache::new(CatalogFile::new(path)), &args),
        None => match HearthstoneClient::new(&args.config()) {
            Ok(client) => run(CardCache::new(client), &args),
            Err(e) => Err(format!("Failed to build HTTP client: {e}")),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run<S: CatalogSource>(cache: CardCache<S>, args: &Args) -> Result<(), String> {
    cache
        .refresh()
        .map_err(|e| format!("Could not load card catalog: {e}"))?;

    let card = cache
        .lookup(&args.name)
        .ok_or_else(|| format!("No collectible card named '{}'", args.name))?;

    let embed = args
        .kind()
        .render(card)
        .map_err(|e| format!("Could not render '{}': {e}", args.name))?;

    if args.json {
        let json = serde_json::to_string_pretty(&embed)
            .map_err(|e| format!("Could not serialize embed: {e}"))?;
        println!("{json}");
    } else {
        print!("{}", embed.to_plain_text());
    }

    Ok(())
}
