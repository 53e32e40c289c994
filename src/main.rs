use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn, Level};

use trick_or_treat::bot::console::{write_loop, ConsoleTransport};
use trick_or_treat::bot::scheduler::{persist, run_cycles, CycleContext};
use trick_or_treat::bot::transport::Outbound;
use trick_or_treat::config::parse_args;
use trick_or_treat::persistence::{load_or_default, JsonFileStore, LedgerRepository};
use trick_or_treat::rules::roll::{RngRoller, Roller};
use trick_or_treat::simulation::treats::TreatGenerator;
use trick_or_treat::Game;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trick_or_treat=info".into()),
        )
        .with_target(false)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cfg = parse_args();

    let transport = ConsoleTransport::connect(cfg.credential.as_deref(), cfg.default_channel.clone())
        .context("connect console transport (set SPOOK)")?;
    let generator = TreatGenerator::new(cfg.tables.clone(), cfg.max_quantity)
        .context("invalid treat configuration")?;
    let roller: Box<dyn Roller> = match cfg.seed {
        Some(seed) => Box::new(RngRoller::seeded(seed)),
        None => Box::new(RngRoller::from_os()),
    };

    let store: Arc<dyn LedgerRepository> = Arc::new(JsonFileStore::new(cfg.save_path.clone()));
    let saved = load_or_default(store.as_ref());
    let game = Arc::new(Game::restore(&saved, generator, roller));
    info!(
        participants = game.participant_count(),
        save_path = %cfg.save_path.display(),
        cycle_s = cfg.cycle_period.as_secs(),
        "started spookyness"
    );

    let (out_tx, out_rx) = mpsc::channel::<Outbound>(256);
    let writer = tokio::spawn(write_loop(tokio::io::stdout(), out_rx));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let cycles = tokio::spawn(run_cycles(
        CycleContext {
            game: game.clone(),
            store: store.clone(),
            names: transport.directory(),
            outbound: out_tx.clone(),
            announce_channel: cfg.announce_channel.clone(),
        },
        cfg.cycle_period,
        shutdown_rx,
    ));

    let stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        res = transport.read_loop(stdin, &game, &cfg.prefix, &out_tx) => {
            if let Err(e) = res {
                warn!(err=%e, "console reader failed");
            }
            info!("console input closed; shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; shutting down");
        }
    }

    // Let an in-flight cycle finish its save before the final one.
    let _ = shutdown_tx.send(true);
    if let Err(e) = cycles.await {
        warn!(err=%e, "cycle task failed");
    }
    persist(store, game.snapshot()).await;

    drop(out_tx);
    if let Ok(Err(e)) = writer.await {
        warn!(err=%e, "console writer failed");
    }
    Ok(())
}
