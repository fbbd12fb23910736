//! Jacaré Autopeças CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! jacare cart add "Filtro de Óleo" "R$ 29,90"
//!
//! # Show the cart
//! jacare cart show
//!
//! # Check out (asks for confirmation unless --yes)
//! jacare cart checkout
//!
//! # Simulated search
//! jacare search "pastilha de freio"
//!
//! # Simulated contact form
//! jacare contact -n "Ana Souza" -e ana@exemplo.com.br -p "(21) 99999-0000" -m "Olá!"
//! ```
//!
//! # Environment Variables
//!
//! See [`StorefrontConfig`]. The cart is kept in `JACARE_STORAGE_DIR`, so it
//! survives between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use jacare_storefront::config::StorefrontConfig;
use jacare_storefront::error::Result;
use jacare_storefront::page::ContactForm;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "jacare")]
#[command(author, version, about = "Jacaré Autopeças storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Search the catalog (simulated)
    Search {
        /// Search term
        term: String,
    },
    /// Send the contact form (simulated)
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email address
        #[arg(short, long)]
        email: String,

        /// Your phone number
        #[arg(short, long)]
        phone: String,

        /// Message to the store
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product name as shown on its card
        name: String,

        /// Price as shown on its card, e.g. "R$ 29,90"
        price: String,
    },
    /// Show the itemized cart
    Show,
    /// Finish the purchase (simulated)
    Checkout {
        /// Confirm without asking
        #[arg(short, long)]
        yes: bool,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Failed to load configuration: {e}");
            }
            std::process::exit(1);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so command output stays clean on stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jacare_storefront=info,jacare_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<()> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { name, price } => commands::cart::add(config, name, price),
            CartAction::Show => commands::cart::show(config),
            CartAction::Checkout { yes } => commands::cart::checkout(config, yes),
        },
        Commands::Search { term } => commands::search::run(config, term),
        Commands::Contact {
            name,
            email,
            phone,
            message,
        } => commands::contact::submit(
            config,
            ContactForm {
                name,
                email,
                phone,
                message,
            },
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from(["jacare", "cart", "add", "Filtro de Óleo", "R$ 29,90"]).unwrap();
        match cli.command {
            Commands::Cart {
                action: CartAction::Add { name, price },
            } => {
                assert_eq!(name, "Filtro de Óleo");
                assert_eq!(price, "R$ 29,90");
            }
            _ => panic!("expected cart add"),
        }
    }

    #[test]
    fn test_parse_checkout_yes() {
        let cli = Cli::try_parse_from(["jacare", "cart", "checkout", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cart {
                action: CartAction::Checkout { yes: true }
            }
        ));
    }

    #[test]
    fn test_contact_requires_all_flags() {
        assert!(Cli::try_parse_from(["jacare", "contact", "-n", "Ana"]).is_err());
        assert!(
            Cli::try_parse_from([
                "jacare", "contact", "-n", "Ana", "-e", "ana@exemplo.com.br", "-p", "2199990000",
                "-m", "Olá",
            ])
            .is_ok()
        );
    }
}
