//! Inkshelf CLI - catalog administration and reading from the terminal
//!
//! `list`, `info` and `read` are the public surface; `add`, `edit`, `remove`
//! and `sweep` are the admin surface and sit behind the session gate
//! (`login`/`logout`).

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use inkshelf_core::{BookStatus, DirStore};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory the catalog and its blobs are stored under
    #[arg(long, global = true, env = "INKSHELF_ROOT", default_value = ".inkshelf")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the catalog
    List,

    /// Display one book in detail
    Info {
        /// Book id
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the catalog (admin)
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Publication status (active, draft, archived)
        #[arg(long, default_value = "active")]
        status: BookStatus,

        /// Cover image file to upload
        #[arg(long)]
        cover: Option<PathBuf>,

        /// PDF file to upload
        #[arg(long)]
        pdf: Option<PathBuf>,
    },

    /// Edit a book; omitted fields keep their current value (admin)
    Edit {
        /// Book id
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Publication status (active, draft, archived)
        #[arg(long)]
        status: Option<BookStatus>,

        /// Replacement cover image
        #[arg(long)]
        cover: Option<PathBuf>,

        /// Replacement PDF
        #[arg(long)]
        pdf: Option<PathBuf>,
    },

    /// Remove a book from the catalog (admin)
    Remove {
        /// Book id
        id: u64,
    },

    /// Open a book's PDF in the page viewer
    Read {
        /// Book id
        id: u64,
    },

    /// Print a shareable blurb for a book
    Share {
        /// Book id
        id: u64,
    },

    /// Delete blobs no record references anymore (admin)
    Sweep,

    /// Open an admin session
    Login,

    /// Close the admin session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "inkshelf_cli=debug,inkshelf_core=debug"
    } else {
        "inkshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = DirStore::new(&cli.root);

    match cli.command {
        Commands::List => commands::list(store).await,

        Commands::Info { id, json } => commands::info(store, id, json).await,

        Commands::Add {
            title,
            author,
            category,
            description,
            status,
            cover,
            pdf,
        } => {
            commands::add(
                store,
                commands::AddArgs {
                    title,
                    author,
                    category,
                    description,
                    status,
                    cover,
                    pdf,
                },
            )
            .await
        }

        Commands::Edit {
            id,
            title,
            author,
            category,
            description,
            status,
            cover,
            pdf,
        } => {
            commands::edit(
                store,
                id,
                commands::EditArgs {
                    title,
                    author,
                    category,
                    description,
                    status,
                    cover,
                    pdf,
                },
            )
            .await
        }

        Commands::Remove { id } => commands::remove(store, id).await,

        Commands::Read { id } => commands::read(store, id).await,

        Commands::Share { id } => commands::share(store, id).await,

        Commands::Sweep => commands::sweep(store).await,

        Commands::Login => commands::login(store).await,

        Commands::Logout => commands::logout(store).await,
    }
}
