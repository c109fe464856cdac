use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};

use bistro_client::logger::init_logger;
use bistro_client::render;
use bistro_client::view::{SharePayload, SharePlatform};
use bistro_client::{
    AdminSession, AdminTab, AdminView, AuthGate, CateringRequest, CateringStatus, ClientConfig,
    ClientResult, GalleryView, Lightbox, Reservation, ReservationStatus, ShareCapability,
    StatusAction,
};
use shared::models::{GalleryCategory, Locale};
use shared::{DateRange, FilterState, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "bistro-admin", author, version, about = "Restaurant back-office client")]
struct Cli {
    /// Log level for this tool (overridden by RUST_LOG)
    #[arg(long, global = true, env = "BISTRO_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the admin token
    Login {
        #[arg(short, long)]
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long, env = "BISTRO_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored admin token
    Logout,
    /// Dashboard stats and today's reservations
    Overview,
    /// List reservations
    Reservations {
        #[arg(long, default_value = "all")]
        status: StatusFilter<ReservationStatus>,
        #[arg(long, default_value = "all")]
        range: DateRange,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List catering requests
    Catering {
        #[arg(long, default_value = "all")]
        status: StatusFilter<CateringStatus>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Confirm, cancel or complete a record
    Act {
        #[arg(value_enum)]
        kind: RecordKind,
        id: i64,
        action: StatusAction,
    },
    /// Browse the public gallery
    Gallery {
        #[arg(long)]
        category: Option<GalleryCategory>,
        #[arg(long, default_value = "en")]
        locale: Locale,
        /// Show one image in detail
        #[arg(long)]
        open: Option<u32>,
        /// Print share links for the opened image
        #[arg(long, requires = "open")]
        share: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RecordKind {
    Reservation,
    Catering,
}

/// Prints a share link per platform
struct LinkPrinter;

impl ShareCapability for LinkPrinter {
    fn share(&self, payload: &SharePayload) -> ClientResult<()> {
        for platform in SharePlatform::ALL {
            println!("{:<10} {}", platform.to_string(), platform.share_url(payload)?);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref());

    let config = ClientConfig::from_env();
    tracing::debug!(base_url = %config.base_url, "Using admin API");

    match cli.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };
            let mut gate = AuthGate::from_config(&config)?;
            gate.login(&username, &password).await?;
            println!("Logged in as {}", username);
        }
        Command::Logout => {
            AuthGate::from_config(&config)?.logout()?;
            println!("Logged out");
        }
        Command::Overview => {
            let session = open_session(&config).await?;
            let view = AdminView::new();
            print!("{}", render::overview_panel(&view.overview(session.data(), now())));
        }
        Command::Reservations { status, range, search } => {
            let session = open_session(&config).await?;
            let mut view = AdminView::new();
            view.set_tab(AdminTab::Reservations);
            view.set_reservation_filters(
                FilterState::new()
                    .with_status(status)
                    .with_date_range(range)
                    .with_search(search),
            );
            let rows = view.reservation_rows(session.data(), now());
            print!("{}", render::reservation_table(&rows));
        }
        Command::Catering { status, search } => {
            let session = open_session(&config).await?;
            let mut view = AdminView::new();
            view.set_tab(AdminTab::Catering);
            view.set_catering_filters(
                FilterState::new()
                    .with_status(status)
                    .with_search(search),
            );
            let rows = view.catering_rows(session.data(), now());
            print!("{}", render::catering_table(&rows));
        }
        Command::Act { kind, id, action } => {
            let mut session = open_session(&config).await?;
            let status = match kind {
                RecordKind::Reservation => session
                    .apply_action::<Reservation>(id, action)
                    .await?
                    .to_string(),
                RecordKind::Catering => session
                    .apply_action::<CateringRequest>(id, action)
                    .await?
                    .to_string(),
            };
            println!("#{} is now {}", id, status);
        }
        Command::Gallery {
            category,
            locale,
            open,
            share,
        } => {
            let mut view = GalleryView::from_catalog();
            view.set_locale(locale);
            view.set_category(category);

            let Some(id) = open else {
                let mut images = view.visible();
                shared::catalog::featured_first(&mut images);
                print!("{}", render::gallery_grid(&view, &images));
                return Ok(());
            };

            if !view.open_by_id(id) {
                bail!("No gallery image with id {}", id);
            }
            if let Lightbox::Open(image) = view.lightbox() {
                print!(
                    "{}",
                    render::lightbox_panel(image, view.locale(), view.like_count(image))
                );
                if share {
                    view.share(image, &config.site_url, Some(&LinkPrinter))?;
                }
            }
        }
    }

    Ok(())
}

/// Verify the stored token and load the dashboard
async fn open_session(config: &ClientConfig) -> anyhow::Result<AdminSession> {
    let mut gate = AuthGate::from_config(config)?;
    if !gate.init().await {
        bail!("Not logged in; run `bistro-admin login` first");
    }
    let mut session = gate.session()?;
    let report = session.refresh().await;
    if !report.is_complete() {
        eprintln!("Some dashboard data could not be loaded; showing what is available");
    }
    Ok(session)
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
