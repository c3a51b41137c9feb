//! `stockroom` command-line client.

use anyhow::Context;
use clap::{Parser, Subcommand};

use stockroom_client::{table, InventoryClient, DEFAULT_SERVER_URL};

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Inventory manager client")]
struct Cli {
    /// Base URL of the inventory server.
    #[arg(long, env = "STOCKROOM_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every item as a table.
    List,
    /// Add a new item.
    Add {
        name: String,
        #[arg(short, long)]
        quantity: Option<i64>,
    },
    /// Remove an item by name.
    Remove { name: String },
    /// Set the quantity of an existing item.
    Update {
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Check that the server is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let cli = Cli::parse();
    let client = InventoryClient::new(cli.server);

    match cli.command {
        Command::List => {
            let items = client
                .list_inventory()
                .await
                .context("failed to fetch inventory")?;
            print!("{}", table::render_table(&items));
        }
        Command::Add { name, quantity } => {
            let res = client
                .add_item(&name, quantity)
                .await
                .with_context(|| format!("failed to add '{name}'"))?;
            println!("{} ({} x {})", res.message, res.name, res.quantity);
        }
        Command::Remove { name } => {
            let res = client
                .remove_item(&name)
                .await
                .with_context(|| format!("failed to remove '{name}'"))?;
            println!("{}", res.message);
        }
        Command::Update { name, quantity } => {
            let res = client
                .update_quantity(&name, quantity)
                .await
                .with_context(|| format!("failed to update '{name}'"))?;
            println!("{}", res.message);
        }
        Command::Health => {
            if !client.health().await {
                anyhow::bail!("server at {} is unreachable", client.base_url());
            }
            println!("ok");
        }
    }

    Ok(())
}
