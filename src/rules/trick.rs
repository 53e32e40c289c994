/// Size of the trick roll for a participant holding `treat_count` treats.
///
/// The roll is "1 in N" with N = 2 + floor(treat_count / 10).
pub fn trick_odds(treat_count: usize) -> u32 {
    let widen = u32::try_from(treat_count / 10).unwrap_or(u32::MAX - 2);
    2u32.saturating_add(widen)
}

/// A zero draw means the participant got tricked.
pub fn is_tricked(draw: u32) -> bool {
    draw == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_widen_every_ten_treats() {
        assert_eq!(trick_odds(0), 2);
        assert_eq!(trick_odds(1), 2);
        assert_eq!(trick_odds(9), 2);
        assert_eq!(trick_odds(10), 3);
        assert_eq!(trick_odds(19), 3);
        assert_eq!(trick_odds(25), 4);
        assert_eq!(trick_odds(100), 12);
    }

    #[test]
    fn only_zero_tricks() {
        assert!(is_tricked(0));
        assert!(!is_tricked(1));
        assert!(!is_tricked(7));
    }
}
