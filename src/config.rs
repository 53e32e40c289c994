use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::data::treat_tables::{load_treat_tables, TreatTables, DEFAULT_MAX_QUANTITY};

pub fn usage_and_exit() -> ! {
    eprintln!(
        "trick-or-treat

USAGE:
  trick-or-treat

Reads chat lines from stdin as `[#channel ]author: message` and prints replies.

ENV:
  SPOOK                      transport credential (required)
  TRICKBOT_PREFIX            default |
  TRICKBOT_ANNOUNCE_CHANNEL  default announcements
  TRICKBOT_CHANNEL           default general (console input without #channel)
  TRICKBOT_CYCLE_S           default 900
  TRICKBOT_SAVE_PATH         default halloween.json
  TRICKBOT_MAX_QUANTITY      default 20
  TRICKBOT_TABLES_PATH       default empty (built-in treat tables)
  TRICKBOT_SEED              default empty (seeded from the OS)
"
    );
    std::process::exit(2);
}

#[derive(Clone, Debug)]
pub struct Config {
    pub credential: Option<String>,
    pub prefix: String,
    pub announce_channel: String,
    pub default_channel: String,
    pub cycle_period: Duration,
    pub save_path: PathBuf,
    pub max_quantity: u32,
    pub tables: TreatTables,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            prefix: "|".to_string(),
            announce_channel: "announcements".to_string(),
            default_channel: "general".to_string(),
            cycle_period: Duration::from_secs(15 * 60),
            save_path: PathBuf::from("halloween.json"),
            max_quantity: DEFAULT_MAX_QUANTITY,
            tables: TreatTables::default(),
            seed: None,
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn parse_args() -> Config {
    let defaults = Config::default();

    let credential = std::env::var("SPOOK").ok();
    let prefix = env_nonempty("TRICKBOT_PREFIX")
        .map(|v| v.trim().to_string())
        .unwrap_or(defaults.prefix);
    let announce_channel =
        env_nonempty("TRICKBOT_ANNOUNCE_CHANNEL").unwrap_or(defaults.announce_channel);
    let default_channel = env_nonempty("TRICKBOT_CHANNEL").unwrap_or(defaults.default_channel);
    let cycle_period = env_nonempty("TRICKBOT_CYCLE_S")
        .and_then(|v| v.parse::<u64>().ok())
        .map(|s| Duration::from_secs(s.max(1)))
        .unwrap_or(defaults.cycle_period);
    let save_path = env_nonempty("TRICKBOT_SAVE_PATH")
        .map(PathBuf::from)
        .unwrap_or(defaults.save_path);
    let max_quantity = env_nonempty("TRICKBOT_MAX_QUANTITY")
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.max_quantity);
    let tables = match env_nonempty("TRICKBOT_TABLES_PATH") {
        Some(p) => match load_treat_tables(&p) {
            Ok(tables) => tables,
            Err(e) => {
                warn!(err=%e, path=%p, "failed to load treat tables; continuing with defaults");
                defaults.tables
            }
        },
        None => defaults.tables,
    };
    let seed = env_nonempty("TRICKBOT_SEED").and_then(|v| v.parse().ok());

    let mut it = std::env::args().skip(1);
    if it.next().is_some() {
        usage_and_exit();
    }

    Config {
        credential,
        prefix,
        announce_channel,
        default_channel,
        cycle_period,
        save_path,
        max_quantity,
        tables,
        seed,
    }
}
