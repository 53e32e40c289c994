use crate::components::treat::Treat;
use crate::core::world::TrickOutcome;
use crate::systems::leaderboard::Leader;

pub const PUMPKIN: &str = "🎃";
pub const LOLLY: &str = "🍬";

pub fn trick_reply(outcome: &TrickOutcome) -> String {
    match outcome {
        TrickOutcome::AlreadyTricked => format!("You have already been tricked! {PUMPKIN}"),
        TrickOutcome::Spared { treat, combo } => {
            let mut out = format!("You got: **{treat}**\n...and have been spared, keep going! {LOLLY}");
            if *combo > 1 {
                out.push_str(&format!(" (combo x{combo})"));
            }
            out
        }
        TrickOutcome::Tricked { treat } => {
            format!("You got: **{treat}**\n...and have been tricked! {PUMPKIN}")
        }
    }
}

pub fn treats_reply(treats: &[Treat]) -> String {
    if treats.is_empty() {
        return "You have no treats!".to_string();
    }
    let mut out = String::from("Your treats:\n");
    for treat in treats {
        out.push_str(&treat.to_string());
        out.push('\n');
    }
    out
}

pub fn unknown_command(prefix: &str) -> String {
    format!("Unknown command! Try {prefix}trick or {prefix}treat.")
}

pub fn reset_banner() -> String {
    format!("{PUMPKIN} Everyone has been untricked! {PUMPKIN}")
}

pub fn combo_line(name: &str, leader: &Leader) -> String {
    format!("Longest combo: {} ({})", name, leader.score)
}

pub fn treats_line(name: &str, leader: &Leader) -> String {
    format!("Most treats: {} ({})", name, leader.score)
}
