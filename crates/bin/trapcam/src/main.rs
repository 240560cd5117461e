//! # trapcam — station viewer
//!
//! Composition root that wires the HTTP adapter and the terminal host to the
//! application services.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing`
//! - Construct the HTTP backend client (adapter)
//! - Construct application services, injecting the backend and the terminal
//!   host via port traits
//! - Load every gallery, start the status poll and run the command loop
//! - Stop cleanly on `quit`, end of input or Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod command;
mod config;
mod console;

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use trapcam_adapter_http_reqwest::HttpBackend;
use trapcam_app::services::admin_service::AdminService;
use trapcam_app::services::gallery_controller::{GalleryController, GallerySource};
use trapcam_app::services::status_service::StatusService;
use trapcam_domain::error::TrapcamError;

use command::{Command, CommandError, HELP};
use config::Config;
use console::{Console, ConsoleSink, TerminalHost};

type Controller = GalleryController<Arc<HttpBackend>, Arc<ConsoleSink>>;
type Status = StatusService<Arc<HttpBackend>, Arc<ConsoleSink>>;
type Admin = AdminService<Arc<HttpBackend>, Arc<TerminalHost>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    // Adapters
    let backend = Arc::new(
        trapcam_adapter_http_reqwest::Config {
            base_url: config.backend.base_url.clone(),
        }
        .build()?,
    );
    let (stop, shutdown) = watch::channel(false);
    let stop = Arc::new(stop);
    let sink = Arc::new(ConsoleSink);
    let console = Arc::new(Console::stdin(shutdown.clone()));
    let host = Arc::new(TerminalHost::new(Arc::clone(&console)));

    // Services
    let controller = GalleryController::new(config.registry()?, Arc::clone(&backend), Arc::clone(&sink));
    let status = Arc::new(StatusService::new(
        Arc::clone(&backend),
        Arc::clone(&sink),
        config.schedule()?,
    ));
    let admin = AdminService::new(Arc::clone(&backend), Arc::clone(&host));

    let sources = config.gallery_sources();
    tracing::info!(backend = %config.backend.base_url, galleries = sources.len(), "trapcam starting");
    controller.load_all(&sources).await?;

    let interrupt = {
        let stop = Arc::clone(&stop);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted");
                let _ = stop.send(true);
            }
        })
    };
    let poller = {
        let status = Arc::clone(&status);
        let period = config.poll_interval();
        tokio::spawn(async move { status.run(period, shutdown).await })
    };

    println!("{HELP}");
    while let Some(line) = console.read_line().await {
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(err) = run_command(command, &controller, &admin, &host).await {
                    report(&err, &controller);
                }
            }
            Err(CommandError::Empty) => {}
            Err(err) => eprintln!("{err}; type `help` for commands"),
        }

        if host.take_reload_request() {
            reload(&controller, &status, &sources).await?;
        }
    }

    let _ = stop.send(true);
    interrupt.abort();
    poller.await?;
    tracing::info!("trapcam stopped");
    Ok(())
}

async fn run_command(
    command: Command,
    controller: &Controller,
    admin: &Admin,
    host: &TerminalHost,
) -> Result<(), TrapcamError> {
    use trapcam_app::ports::HostUi;

    match command {
        Command::Next(gallery) => {
            controller.navigate(&gallery, 1)?;
        }
        Command::Prev(gallery) => {
            controller.navigate(&gallery, -1)?;
        }
        Command::Show(gallery) => {
            controller.render(&gallery)?;
        }
        Command::Reload => host.reload(),
        Command::Clear => {
            admin.clear_database().await;
        }
        Command::Csv => admin.download_csv(),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

async fn reload(
    controller: &Controller,
    status: &Status,
    sources: &[GallerySource],
) -> Result<(), TrapcamError> {
    tracing::info!("reloading galleries");
    controller.load_all(sources).await?;
    status.refresh().await;
    Ok(())
}

fn report(err: &TrapcamError, controller: &Controller) {
    match err {
        TrapcamError::UnknownGallery(unknown) => {
            eprintln!(
                "{unknown}; known galleries: {}",
                controller.gallery_ids().join(", ")
            );
        }
        other => eprintln!("{other}"),
    }
}
