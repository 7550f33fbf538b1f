//! CLI administration tool for login-demo.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for SECRET_KEY
//! cargo run --bin admin -- secret
//!
//! # Check a credential pair against the form rules and the demo account
//! cargo run --bin admin -- check --email rick0142@gmail.com
//!
//! # Validate the configuration in the environment
//! cargo run --bin admin -- config
//! ```

use login_demo::application::services::LoginService;
use login_demo::config;
use login_demo::domain::LoginOutcome;
use login_demo::web::forms::{FormErrors, LoginForm};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

/// CLI tool for login-demo.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random SECRET_KEY value
    Secret {
        /// Number of characters
        #[arg(short, long, default_value_t = 48)]
        length: usize,
    },

    /// Check an email/password pair
    Check {
        /// Email to check (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Load and validate configuration from the environment
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret { length } => print_secret(length)?,
        Commands::Check { email } => check_credentials(email)?,
        Commands::Config => check_config(),
    }

    Ok(())
}

/// Prints a fresh secret on stdout and nothing else, so it can be captured.
fn print_secret(length: usize) -> Result<()> {
    if length < 16 {
        anyhow::bail!("Secret length must be at least 16, got {length}");
    }
    println!("{}", generate_secret(length));
    Ok(())
}

/// Runs the same field rules and credential comparison as `POST /login`.
///
/// CSRF is not involved outside a browser.
fn check_credentials(email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let form = LoginForm {
        email,
        password,
        csrf_token: String::new(),
    };

    match form.validate_fields() {
        Err(errors) => print_form_errors(&errors),
        Ok(credentials) => match LoginService::default().authenticate(&credentials) {
            LoginOutcome::Granted => println!("{}", "✅ Access granted".green().bold()),
            LoginOutcome::Denied => println!("{}", "⛔ Access denied".red().bold()),
        },
    }

    Ok(())
}

fn print_form_errors(errors: &FormErrors) {
    println!("{}", "❌ Form validation failed".yellow().bold());
    for (field, messages) in [("Email", &errors.email), ("Password", &errors.password)] {
        for message in messages {
            println!("  {}: {}", field.bright_white(), message);
        }
    }
}

fn check_config() {
    match config::load_from_env() {
        Ok(config) => {
            println!("{}", "✅ Configuration is valid".green().bold());
            println!();
            println!("  Listen address: {}", config.listen_addr.bright_white());
            println!(
                "  Secret key:     {} characters",
                config.secret_key.chars().count()
            );
            println!("  Log format:     {}", config.log_format);
            println!(
                "  CSRF:           {}",
                if config.csrf_enabled {
                    format!("enabled ({}s)", config.csrf_time_limit).green()
                } else {
                    "disabled".yellow()
                }
            );
            println!("  Static files:   {}", config.static_dir);
        }
        Err(e) => {
            println!("{}", "❌ Configuration error".red().bold());
            println!("  {:#}", e);
        }
    }
}

/// Generates a cryptographically random secret.
///
/// Character set: A-Z, a-z, 0-9.
fn generate_secret(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
