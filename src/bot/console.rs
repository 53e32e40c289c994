//! Line-oriented transport over any async reader/writer pair.
//!
//! Input lines look like `[#channel ]author: message`; an author ending in
//! `[bot]` is treated as a bot. Output is written as `[#channel] text`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::bot::commands::handle_inbound;
use crate::bot::transport::{ConnectError, Inbound, LookupError, NameDirectory, Outbound};
use crate::core::world::Game;

const BOT_SUFFIX: &str = "[bot]";

/// Display names for every author seen on the console so far.
#[derive(Debug, Default)]
pub struct ConsoleDirectory {
    names: RwLock<HashMap<String, String>>,
}

impl ConsoleDirectory {
    pub fn remember(&self, identity: &str, name: &str) {
        let mut names = self.names.write().unwrap_or_else(|e| e.into_inner());
        names
            .entry(identity.to_string())
            .or_insert_with(|| name.to_string());
    }
}

impl NameDirectory for ConsoleDirectory {
    fn display_name(&self, identity: &str) -> Result<String, LookupError> {
        let names = self
            .names
            .read()
            .map_err(|_| LookupError::Unavailable("directory lock poisoned".to_string()))?;
        names
            .get(identity)
            .cloned()
            .ok_or_else(|| LookupError::UnknownMember(identity.to_string()))
    }
}

/// Parse one console line. Blank or malformed lines yield `None`.
pub fn parse_line(line: &str, default_channel: &str) -> Option<Inbound> {
    let line = line.trim();
    let (channel, rest) = match line.strip_prefix('#') {
        Some(tagged) => {
            let (channel, rest) = tagged.split_once(char::is_whitespace)?;
            (channel, rest)
        }
        None => (default_channel, line),
    };
    let (author, content) = rest.split_once(':')?;
    let author = author.trim();
    let (author, is_bot) = match author.strip_suffix(BOT_SUFFIX) {
        Some(name) => (name.trim(), true),
        None => (author, false),
    };
    if author.is_empty() || channel.is_empty() {
        return None;
    }
    Some(Inbound {
        channel: channel.to_string(),
        author_id: author.to_string(),
        author_name: author.to_string(),
        is_bot,
        content: content.trim().to_string(),
    })
}

pub struct ConsoleTransport {
    directory: Arc<ConsoleDirectory>,
    default_channel: String,
}

impl ConsoleTransport {
    /// Refuses to start without a non-blank credential.
    pub fn connect(
        credential: Option<&str>,
        default_channel: impl Into<String>,
    ) -> Result<Self, ConnectError> {
        match credential {
            Some(token) if !token.trim().is_empty() => Ok(Self {
                directory: Arc::new(ConsoleDirectory::default()),
                default_channel: default_channel.into(),
            }),
            _ => Err(ConnectError::MissingCredential),
        }
    }

    pub fn directory(&self) -> Arc<ConsoleDirectory> {
        self.directory.clone()
    }

    /// Feed every input line through the game until the reader hits EOF.
    pub async fn read_loop<R>(
        &self,
        reader: R,
        game: &Game,
        prefix: &str,
        outbound: &mpsc::Sender<Outbound>,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(msg) = parse_line(&line, &self.default_channel) else {
                if !line.trim().is_empty() {
                    debug!(line = %line, "skipping unparseable console line");
                }
                continue;
            };
            self.directory.remember(&msg.author_id, &msg.author_name);
            if let Some(reply) = handle_inbound(game, prefix, &msg) {
                if outbound.send(reply).await.is_err() {
                    warn!("outbound channel closed; stopping console reader");
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Drain outbound messages to the writer until every sender is gone.
pub async fn write_loop<W>(mut writer: W, mut rx: mpsc::Receiver<Outbound>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(msg) = rx.recv().await {
        let line = format!("[#{}] {}\n", msg.channel, msg.text);
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, BufReader};

    use crate::data::treat_tables::TreatTables;
    use crate::rules::roll::ScriptedRoller;
    use crate::simulation::treats::TreatGenerator;

    #[test]
    fn parses_plain_and_tagged_lines() {
        let plain = parse_line("Ghoul: |trick", "general").unwrap();
        assert_eq!(plain.channel, "general");
        assert_eq!(plain.author_id, "Ghoul");
        assert_eq!(plain.content, "|trick");
        assert!(!plain.is_bot);

        let tagged = parse_line("#spooky  Witch: |treat ", "general").unwrap();
        assert_eq!(tagged.channel, "spooky");
        assert_eq!(tagged.author_id, "Witch");
        assert_eq!(tagged.content, "|treat");
    }

    #[test]
    fn marks_bots_and_skips_garbage() {
        assert!(parse_line("Helper [bot]: |trick", "general").unwrap().is_bot);
        assert!(parse_line("no colon here", "general").is_none());
        assert!(parse_line(": |trick", "general").is_none());
        assert!(parse_line("   ", "general").is_none());
    }

    #[test]
    fn connect_requires_credential() {
        assert!(ConsoleTransport::connect(None, "general").is_err());
        assert!(ConsoleTransport::connect(Some("  "), "general").is_err());
        assert!(ConsoleTransport::connect(Some("token"), "general").is_ok());
    }

    #[test]
    fn directory_knows_only_seen_authors() {
        let directory = ConsoleDirectory::default();
        directory.remember("Ghoul", "Ghoul");
        assert_eq!(directory.display_name("Ghoul").unwrap(), "Ghoul");
        assert!(matches!(
            directory.display_name("Witch"),
            Err(LookupError::UnknownMember(_))
        ));
    }

    #[tokio::test]
    async fn replies_flow_from_reader_to_writer() {
        let generator = TreatGenerator::new(TreatTables::default(), 20).unwrap();
        let game = Game::new(generator, Box::new(ScriptedRoller::new(vec![1])));
        let transport = ConsoleTransport::connect(Some("token"), "general").unwrap();

        let (tx, rx) = mpsc::channel(8);
        let (out_a, mut out_b) = tokio::io::duplex(4096);
        let writer = tokio::spawn(write_loop(out_a, rx));

        let input = b"Ghoul: |treat\nnot a command line\n#spooky Ghoul: |trick\nGhoul: hello\n";
        transport
            .read_loop(BufReader::new(&input[..]), &game, "|", &tx)
            .await
            .unwrap();
        drop(tx);
        writer.await.unwrap().unwrap();

        let mut printed = String::new();
        out_b.read_to_string(&mut printed).await.unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "[#general] You have no treats!");
        assert!(lines[1].starts_with("[#spooky] You got: **"));
        assert_eq!(lines.len(), 3);
        assert_eq!(transport.directory().display_name("Ghoul").unwrap(), "Ghoul");
    }
}
