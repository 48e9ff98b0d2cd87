//! # Society Client
//!
//! Command-line front end: restores the stored session, then runs one command.

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use society_client::app::{App, Screen};
use society_client::config::ClientConfig;
use society_client::AppError;

#[derive(Parser)]
#[command(name = "society-client")]
#[command(version)]
#[command(about = "Resident client for the society management backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show who is signed in (default)
    Status,
    /// Sign in and store the session token
    Login {
        email: String,
        password: String,
    },
    /// Sign out and delete the stored token
    Logout,
    /// List pending bills
    Bills,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _log_guard = society_client::debug::init();
    let cli = Cli::parse();

    let config = ClientConfig::from_env().map_err(|e| anyhow!(e))?;
    let (app, _checkouts) = App::new(&config);

    let screen = app
        .restore_session()
        .await
        .context("Failed to restore session")?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => print_status(&app, screen),
        Commands::Login { email, password } => {
            if app.is_authenticated() {
                println!("Already signed in.");
                print_status(&app, app.current_screen());
                return Ok(());
            }
            let user = app.auth.login(&email, &password).await.map_err(alert)?;
            println!("Signed in as {} ({})", user.name, user.flat_label());
            print_bills(&app).await?;
        }
        Commands::Logout => {
            if let Err(e) = app.logout().await {
                eprintln!("Warning: {}", e);
            }
            println!("Signed out.");
        }
        Commands::Bills => {
            if screen != Screen::Dashboard {
                return Err(anyhow!("Not signed in. Run `society-client login <email> <password>` first."));
            }
            print_bills(&app).await?;
        }
    }

    Ok(())
}

fn print_status(app: &App, screen: Screen) {
    let session = app.session();
    let session = session.read();
    match session.user() {
        Some(user) if session.is_authenticated() => {
            println!("Signed in as {} <{}>, flat {}", user.name, user.email, user.flat_label());
        }
        _ => println!("Not signed in ({})", screen.title()),
    }
}

async fn print_bills(app: &App) -> Result<()> {
    let count = app.payments.load_pending_bills().await.map_err(alert)?;
    if count == 0 {
        println!("No pending bills.");
        return Ok(());
    }

    println!("{} pending bill(s):", count);
    for bill in app.payments.bills() {
        println!(
            "  {:<26} {:<32} {:>14}  due {}",
            bill.id,
            bill.description,
            shared::format_inr(bill.amount),
            bill.due_date
        );
    }
    Ok(())
}

/// Turn a controller error into the alert text a resident would see
fn alert(err: AppError) -> anyhow::Error {
    let (title, body) = err.user_message();
    anyhow!("{}: {}", title, body)
}
