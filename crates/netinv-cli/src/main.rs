//! netinv CLI
//!
//! Command-line interface for the network inventory service

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "netinv")]
#[command(about = "Network device inventory service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server (REST, GraphQL, UI)
    Serve(commands::serve::ServeArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Print inventory records as JSON
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::List(args) => commands::list::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
