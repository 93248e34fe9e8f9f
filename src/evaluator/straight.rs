use super::suit_counts::count_suits;
use crate::cards::{Card, Rank};

const ACE_LOW: u8 = 1;

/// Whether `cards` form five consecutive ranks once wildcards fill the gaps.
///
/// Natural cards are sorted by rank and walked pairwise. A gap of `g`
/// consumes `g - 1` wildcards; duplicates or an unfillable gap end the walk.
/// The Ace also plays low (A-2-3-4-5), but a run never wraps past it
/// (K-A-2 is not a straight). With fewer than two natural cards any run is
/// reachable, so the result is true.
pub fn is_straight(cards: &[Card]) -> bool {
    let wildcards = count_suits(cards).wildcards();
    let mut values: Vec<u8> = cards.iter().filter_map(|c| c.rank()).map(Rank::value).collect();
    values.sort_unstable();

    if fills_run(&values, wildcards) {
        return true;
    }

    if values.last() == Some(&Rank::Ace.value()) {
        let mut low: Vec<u8> =
            values.iter().map(|&v| if v == Rank::Ace.value() { ACE_LOW } else { v }).collect();
        low.sort_unstable();
        return fills_run(&low, wildcards);
    }

    false
}

/// Walk ascending `values`, spending wildcards on gaps.
fn fills_run(values: &[u8], mut wildcards: u8) -> bool {
    values.windows(2).all(|w| match w[1] - w[0] {
        1 => true,
        0 => false,
        gap => {
            let needed = gap - 1;
            if needed <= wildcards {
                wildcards -= needed;
                true
            } else {
                false
            }
        }
    })
}
