use tracing::debug;

use crate::bot::replies;
use crate::bot::transport::{Inbound, Outbound};
use crate::core::world::Game;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Trick,
    Treat,
    Unknown(String),
}

impl Command {
    /// `None` when the message is not addressed to us at all.
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let body = content.trim().strip_prefix(prefix)?;
        let word = body.trim().to_lowercase();
        Some(match word.as_str() {
            "trick" => Command::Trick,
            "treat" => Command::Treat,
            _ => Command::Unknown(word),
        })
    }
}

/// Run one inbound message through the game and produce the reply, if any.
pub fn handle_inbound(game: &Game, prefix: &str, msg: &Inbound) -> Option<Outbound> {
    if msg.is_bot {
        return None;
    }
    let command = Command::parse(prefix, &msg.content)?;
    debug!(identity = %msg.author_id, command = ?command, "handling command");

    let text = match command {
        Command::Trick => replies::trick_reply(&game.attempt_trick(&msg.author_id)),
        Command::Treat => replies::treats_reply(&game.treats_of(&msg.author_id)),
        Command::Unknown(_) => replies::unknown_command(prefix),
    };
    Some(Outbound::new(msg.channel.clone(), text))
}
