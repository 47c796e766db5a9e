use serde::{Deserialize, Serialize};

/// One side of a match. `id` is `None` for the empty side of a bye.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSlot {
    pub id: Option<String>,
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

impl MatchSlot {
    fn seated(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

/// A pairing within a round. `active` stays true until a result is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: String,
    round: u32,
    #[serde(rename = "match")]
    number: u32,
    active: bool,
    bye: bool,
    player1: MatchSlot,
    player2: MatchSlot,
}

impl Match {
    pub(crate) fn paired(id: String, round: u32, number: u32, p1: &str, p2: &str) -> Self {
        Self {
            id,
            round,
            number,
            active: true,
            bye: false,
            player1: MatchSlot::seated(p1),
            player2: MatchSlot::seated(p2),
        }
    }

    pub(crate) fn bye(id: String, round: u32, number: u32, player: &str) -> Self {
        Self {
            id,
            round,
            number,
            active: false,
            bye: true,
            player1: MatchSlot::seated(player),
            player2: MatchSlot::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_bye(&self) -> bool {
        self.bye
    }
    pub fn player1(&self) -> &MatchSlot {
        &self.player1
    }
    pub fn player2(&self) -> &MatchSlot {
        &self.player2
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.player1.id.as_deref() == Some(player_id) || self.player2.id.as_deref() == Some(player_id)
    }

    /// Side `player_id` sits on, as (own slot, opponent slot).
    pub fn slots_for(&self, player_id: &str) -> Option<(&MatchSlot, &MatchSlot)> {
        if self.player1.id.as_deref() == Some(player_id) {
            Some((&self.player1, &self.player2))
        } else if self.player2.id.as_deref() == Some(player_id) {
            Some((&self.player2, &self.player1))
        } else {
            None
        }
    }

    /// Result of a completed, non-bye match.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.active || self.bye {
            return None;
        }
        Some(match self.player1.win.cmp(&self.player2.win) {
            std::cmp::Ordering::Greater => Outcome::Player1,
            std::cmp::Ordering::Less => Outcome::Player2,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Loser of a completed, decided match.
    pub fn loser(&self) -> Option<&str> {
        match self.outcome()? {
            Outcome::Player1 => self.player2.id.as_deref(),
            Outcome::Player2 => self.player1.id.as_deref(),
            Outcome::Draw => None,
        }
    }

    pub(crate) fn record(&mut self, win: u32, loss: u32, draw: u32) {
        self.player1.win = win;
        self.player1.loss = loss;
        self.player1.draw = draw;
        self.player2.win = loss;
        self.player2.loss = win;
        self.player2.draw = draw;
        self.active = false;
    }

    pub(crate) fn clear(&mut self) {
        for slot in [&mut self.player1, &mut self.player2] {
            slot.win = 0;
            slot.loss = 0;
            slot.draw = 0;
        }
        self.active = true;
    }
}
