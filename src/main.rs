//! SafePath Map Client (Headless).
//!
//! Liest Konsolen-Befehle, fragt Routing und Geocoding an und gibt die
//! Kartenanweisungen über das Log aus.

use safepath_client::api::{GeocodingClient, RoutingClient};
use safepath_client::ui::{parse_line, ConsoleInput, HELP_TEXT};
use safepath_client::{AppIntent, ClientOptions, LogMapView, Session};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "SafePath Map Client v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (erstes Argument oder neben der Binary)
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(ClientOptions::config_path);
    let options = ClientOptions::load_from_file(&config_path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(options))
}

async fn run(options: ClientOptions) -> anyhow::Result<()> {
    let routing = RoutingClient::new(&options)?;
    let geocoder = GeocodingClient::new(&options)?;
    let mut session = Session::new(routing, geocoder, LogMapView::new(), options);

    session.dispatch(AppIntent::SessionStarted);
    session.dispatch(AppIntent::LocationUnavailable {
        reason: "no geolocation on the console".to_string(),
    });

    println!("{HELP_TEXT}");

    let lines = BufReader::new(tokio::io::stdin()).lines();
    let inputs = futures::stream::unfold(lines, |mut lines| async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match parse_line(&line) {
                    Ok(Some(ConsoleInput::Intent(intent))) => return Some((intent, lines)),
                    Ok(Some(ConsoleInput::Help)) => println!("{HELP_TEXT}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("{e}"),
                },
                Ok(None) => return None,
                Err(e) => {
                    log::error!("Konsole nicht lesbar: {e}");
                    return None;
                }
            }
        }
    });

    session.run(Box::pin(inputs)).await;
    log::info!("SafePath Map Client beendet");
    Ok(())
}
