use serde::{Deserialize, Serialize};

use crate::game::OddChipRule;

/// One layer of the pot and the seat indexes allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

/// Splits hand contributions into a main pot and side pots.
///
/// Layers are cut at every contribution level reached by a seat still in the
/// hand. Chips from folded seats fill the layers they reach but never make a
/// folded seat eligible; anything above the deepest live level joins the last layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

/// Result of paying out every pot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    /// Chips won, indexed like the contributions
    pub payouts: Vec<u32>,
    /// Seat indexes that won at least one pot
    pub winners: Vec<usize>,
    /// Odd chips removed under [`OddChipRule::Discard`]
    pub dropped: u32,
}

impl PotManager {
    pub fn layered(contributions: &[u32], live: &[bool]) -> Self {
        let mut levels: Vec<u32> = contributions
            .iter()
            .zip(live)
            .filter(|(&c, &l)| l && c > 0)
            .map(|(&c, _)| c)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::with_capacity(levels.len());
        let mut prev = 0u32;
        for &level in &levels {
            let amount: u32 = contributions
                .iter()
                .map(|&c| c.min(level) - c.min(prev))
                .sum();
            let eligible = (0..contributions.len())
                .filter(|&i| live[i] && contributions[i] >= level)
                .collect();
            pots.push(Pot { amount, eligible });
            prev = level;
        }
        let leftover: u32 = contributions.iter().map(|&c| c.saturating_sub(prev)).sum();
        if leftover > 0 {
            match pots.last_mut() {
                Some(last) => last.amount += leftover,
                None => pots.push(Pot {
                    amount: leftover,
                    eligible: Vec::new(),
                }),
            }
        }
        Self { pots }
    }

    /// One pot holding everything, contested by every live seat.
    pub fn single(contributions: &[u32], live: &[bool]) -> Self {
        let amount = contributions.iter().sum();
        let eligible = (0..contributions.len()).filter(|&i| live[i]).collect();
        Self {
            pots: vec![Pot { amount, eligible }],
        }
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map(|p| p.amount).unwrap_or(0)
    }

    pub fn side_pots(&self) -> Vec<u32> {
        self.pots.iter().skip(1).map(|p| p.amount).collect()
    }

    /// Pays each pot to its best eligible hands.
    ///
    /// `values[i]` is the hand value of seat `i` (`None` for seats out of the
    /// hand); `order` lists seat indexes clockwise from the dealer's left and
    /// decides who receives odd chips under [`OddChipRule::FirstAfterDealer`].
    pub fn distribute(
        &self,
        values: &[Option<i32>],
        order: &[usize],
        rule: OddChipRule,
    ) -> Distribution {
        let mut out = Distribution {
            payouts: vec![0; values.len()],
            winners: Vec::new(),
            dropped: 0,
        };
        for pot in &self.pots {
            let best = pot.eligible.iter().filter_map(|&i| values[i]).max();
            let Some(best) = best else {
                out.dropped += pot.amount;
                continue;
            };
            let winners: Vec<usize> = order
                .iter()
                .copied()
                .filter(|i| pot.eligible.contains(i) && values[*i] == Some(best))
                .collect();
            let share = pot.amount / winners.len() as u32;
            let remainder = pot.amount % winners.len() as u32;
            for &w in &winners {
                out.payouts[w] += share;
                if !out.winners.contains(&w) {
                    out.winners.push(w);
                }
            }
            match rule {
                OddChipRule::Discard => out.dropped += remainder,
                OddChipRule::FirstAfterDealer => out.payouts[winners[0]] += remainder,
            }
        }
        out.winners.sort_unstable();
        out
    }
}
