// src/main.rs

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pokedex::api::{ApiClient, CatalogApi};
use pokedex::catalog::Catalog;
use pokedex::explorer::{Explorer, ViewMode};
use pokedex::inspect::DetailInspector;
use pokedex::ui::card::{card_elements, format_dex_number};
use pokedex::ui::clipboard::copy_json;
use pokedex::ui::colors::type_color;

#[derive(Parser)]
#[command(name = "pokedex", about = "Explore the PokeAPI catalog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse a page of the catalog
    Browse {
        #[arg(default_value_t = 1)]
        page: usize,
    },
    /// Exact-name search
    Search { query: String },
    /// Show the entries of one type (first 50 members)
    Type { name: String },
    /// List the selectable types
    Types,
    /// Render an entry's card and its raw JSON payloads; optionally click a
    /// card path to highlight the field that produced it
    Inspect {
        name: String,
        #[arg(long)]
        click: Option<String>,
        /// Copy the raw entry payload to the system clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let api = Arc::new(ApiClient::new()?);

    match cli.command {
        Command::Browse { page } => {
            let mut explorer = Explorer::new(api);
            explorer.load_index().await;
            if page > 1 {
                explorer.go_to_page(page).await;
            }
            print_state(&explorer);
        }
        Command::Search { query } => {
            let mut explorer = Explorer::new(api);
            explorer.set_query(&query).await;
            print_state(&explorer);
        }
        Command::Type { name } => {
            let mut explorer = Explorer::new(api);
            explorer.select_type(Some(&name)).await;
            print_state(&explorer);
        }
        Command::Types => {
            let catalog = Catalog::new(api);
            for t in catalog.list_types().await? {
                println!("{}", t.name);
            }
        }
        Command::Inspect { name, click, copy } => {
            inspect(api, &name, click.as_deref(), copy).await?;
        }
    }

    Ok(())
}

fn print_state<A: CatalogApi>(explorer: &Explorer<A>) {
    let state = explorer.state();
    if let Some(error) = &state.error {
        println!("! {error}");
    }
    match &state.mode {
        ViewMode::Browsing { page } => {
            println!("page {page} of {}", explorer.total_pages());
        }
        ViewMode::Searching { query } => println!("search: {query}"),
        ViewMode::FilteringByType { type_name } => println!("type: {type_name}"),
    }
    for pokemon in &state.displayed {
        let types: Vec<&str> = pokemon
            .types
            .iter()
            .map(|t| t.type_ref.name.as_str())
            .collect();
        println!(
            "{} {} [{}] {}m {}kg",
            format_dex_number(pokemon.id),
            pokemon.name,
            types.join("/"),
            pokemon.height_m(),
            pokemon.weight_kg(),
        );
    }
    if explorer.pagination_visible() {
        let window: Vec<String> = explorer.page_window().iter().map(|p| p.to_string()).collect();
        println!("pages: {}", window.join(" "));
    }
}

async fn inspect(api: Arc<ApiClient>, name: &str, click: Option<&str>, copy: bool) -> Result<()> {
    let catalog = Catalog::new(Arc::clone(&api));
    let pokemon = api.entry(name).await?;
    let evolutions = catalog.resolve_evolutions(name).await;

    for slot in &pokemon.types {
        let type_name = slot.type_ref.name.as_str();
        println!("{type_name} {}", type_color(type_name));
    }

    let entry_payload = serde_json::to_value(&pokemon)?;
    if copy && copy_json(&entry_payload) {
        println!("payload copied to clipboard");
    }

    let mut inspector = DetailInspector::new(&entry_payload);
    // Species and chain data enrich the view but their absence is not fatal.
    if let Ok(species) = api.species(name).await {
        if let Ok(chain) = api.evolution_chain(&species.evolution_chain.url).await {
            inspector.set_evolution(&serde_json::to_value(&chain)?);
        }
        inspector.set_species(&serde_json::to_value(&species)?);
    }

    println!("card elements:");
    let elements = card_elements(&pokemon, &evolutions);
    for element in &elements {
        println!("  {} -> {}", element.text, element.path);
    }

    if let Some(path) = click {
        let description = elements
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.description.as_str())
            .unwrap_or("manual path");
        inspector.on_element_click(path, description).await;
        if let Some(highlight) = inspector.take_scroll_request().await {
            info!(path = %highlight.path, section = ?highlight.section, "scrolled to highlight");
            println!("\nhighlighting {} in {:?}:", highlight.path, highlight.section);
            if let Some(tree) = inspector.tree(highlight.section) {
                for line in tree.lines(Some(highlight.path.as_str())) {
                    println!("{line}");
                }
            }
        } else {
            println!("\npath {path:?} not present in any payload");
        }
    }

    Ok(())
}
