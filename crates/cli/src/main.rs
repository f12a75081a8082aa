//! PawMart console - storefront and admin operations from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (token is persisted for later commands)
//! pawmart login -e admin@pawmart.example -p <password>
//!
//! # Browse the catalog
//! pawmart products list --page 2 --price-range 25-50 --species dog
//!
//! # Admin: create a product with images
//! pawmart products create --title "Rope Tug" --slug rope_tug --price 12.50 \
//!     --stock 7 --kind toy --size S --size M --tag chew --image ./rope.jpg
//!
//! # Pets and their histories
//! pawmart pets list
//! pawmart records medical list --pet <uuid>
//! ```
//!
//! # Environment Variables
//!
//! - `PAWMART_API_URL` - Base URL of the backend (required)
//! - `PAWMART_TOKEN_PATH` - Token file location (default: `~/.pawmart/token`)
//! - `RUST_LOG` - Log filter (default: info for the pawmart crates)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::{AppointmentAction, PetAction, ProductAction, RecordAction, ServiceAction};

#[derive(Parser)]
#[command(name = "pawmart")]
#[command(author, version, about = "PawMart storefront and admin console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (a successful registration signs in)
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Sign out and clear the stored token
    Logout,
    /// Silently re-validate the stored session
    Status,
    /// Browse and manage shop products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Browse and manage pet profiles
    Pets {
        #[command(subcommand)]
        action: PetAction,
    },
    /// Pet history records (medical, vaccination, grooming)
    Records {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Browse and manage bookable care services
    Services {
        #[command(subcommand)]
        action: ServiceAction,
    },
    /// Book and manage appointments
    Appointments {
        #[command(subcommand)]
        action: AppointmentAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pawmart=info,pawmart_client=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await,
        Commands::Register {
            email,
            password,
            name,
        } => commands::auth::register(&ctx, &email, &password, &name).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Status => commands::auth::status(&ctx).await,
        Commands::Products { action } => commands::products::run(&ctx, action).await,
        Commands::Pets { action } => commands::pets::run(&ctx, action).await,
        Commands::Records { action } => commands::records::run(&ctx, action).await,
        Commands::Services { action } => commands::services::run(&ctx, action).await,
        Commands::Appointments { action } => commands::appointments::run(&ctx, action).await,
    }
}
