use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::bot::replies;
use crate::bot::transport::{NameDirectory, Outbound};
use crate::core::serialization::SaveState;
use crate::core::world::Game;
use crate::persistence::LedgerRepository;
use crate::systems::leaderboard::Standings;

/// Everything a cycle tick needs, shared with the rest of the bot.
#[derive(Clone)]
pub struct CycleContext {
    pub game: Arc<Game>,
    pub store: Arc<dyn LedgerRepository>,
    pub names: Arc<dyn NameDirectory>,
    pub outbound: mpsc::Sender<Outbound>,
    pub announce_channel: String,
}

/// Tick until `shutdown` changes or its sender is dropped. The first tick
/// fires immediately. A cycle that has started always runs to completion,
/// save included.
pub async fn run_cycles(ctx: CycleContext, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => run_cycle_once(&ctx).await,
            _ = shutdown.changed() => break,
        }
    }
    info!("cycle loop stopped");
}

/// Reset, announce, persist.
pub async fn run_cycle_once(ctx: &CycleContext) {
    let report = ctx.game.run_cycle();
    info!(
        cycle = report.cycle,
        participants = report.snapshot.len(),
        "cycle reset"
    );

    let text = announcement(&report.standings, ctx.names.as_ref());
    if ctx
        .outbound
        .send(Outbound::new(ctx.announce_channel.clone(), text))
        .await
        .is_err()
    {
        warn!("outbound channel closed; announcement dropped");
    }

    persist(ctx.store.clone(), report.snapshot).await;
}

/// Write a snapshot off the async workers. Failures are logged only.
pub async fn persist(store: Arc<dyn LedgerRepository>, snapshot: SaveState) {
    match tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(err = %err, "failed to save ledger"),
        Err(err) => warn!(err = %err, "ledger save task failed"),
    }
}

/// Reset banner plus one line per board whose leader we can name.
pub fn announcement(standings: &Standings, names: &dyn NameDirectory) -> String {
    let mut out = replies::reset_banner();
    if let Some(leader) = &standings.combo {
        match names.display_name(&leader.identity) {
            Ok(name) => {
                out.push('\n');
                out.push_str(&replies::combo_line(&name, leader));
            }
            Err(err) => warn!(identity = %leader.identity, err = %err, "combo leader lookup failed"),
        }
    }
    if let Some(leader) = &standings.treats {
        match names.display_name(&leader.identity) {
            Ok(name) => {
                out.push('\n');
                out.push_str(&replies::treats_line(&name, leader));
            }
            Err(err) => warn!(identity = %leader.identity, err = %err, "treat leader lookup failed"),
        }
    }
    out
}
