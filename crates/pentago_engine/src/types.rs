//! Core domain types for scalable Pentago.

use crate::error::{ConfigError, EngineError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Largest number of players and largest board side: one letter each.
pub const MAX_IDENTITIES: usize = 26;

/// A player identity, shown as a capital letter (`A` is the first player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates the identity at zero-based roster position `index`.
    ///
    /// Returns `None` past the 26th letter.
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_IDENTITIES).then_some(Self(index as u8))
    }

    /// Parses a player letter, case-insensitively.
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| Self(upper as u8 - b'A'))
    }

    /// Zero-based roster position.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The player's letter.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// The first `count` identities in turn order.
    #[instrument]
    pub fn roster(count: usize) -> Vec<PlayerId> {
        (0..count.min(MAX_IDENTITIES)).filter_map(PlayerId::new).collect()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PlayerId::new(index.into()).ok_or_else(|| {
            ConfigError::new(format!(
                "player index {index} is past the last of {MAX_IDENTITIES} letters"
            ))
        })
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's marker.
    Owned(PlayerId),
}

impl Cell {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol: `#` when empty, the owner's letter otherwise.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '#',
            Cell::Owned(player) => player.letter(),
        }
    }
}

/// Quarter-turn direction for a sub-board rotation.
///
/// Parses from exactly `clockwise` or `counter-clockwise`, ignoring ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Top edge moves to the right edge.
    Clockwise,
    /// Top edge moves to the left edge.
    CounterClockwise,
}

impl Direction {
    /// Parses a direction token, reporting [`EngineError::InvalidDirection`].
    #[instrument]
    pub fn from_token(token: &str) -> Result<Self, EngineError> {
        token.trim().parse().map_err(|_| EngineError::InvalidDirection {
            token: token.to_string(),
        })
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// One of the eight compass headings a winning run may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Heading {
    /// Up.
    North,
    /// Up and right.
    NorthEast,
    /// Right.
    East,
    /// Down and right.
    SouthEast,
    /// Down.
    South,
    /// Down and left.
    SouthWest,
    /// Left.
    West,
    /// Up and left.
    NorthWest,
}

impl Heading {
    /// Row and column step for one move along this heading.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::NorthEast => (-1, 1),
            Heading::East => (0, 1),
            Heading::SouthEast => (1, 1),
            Heading::South => (1, 0),
            Heading::SouthWest => (1, -1),
            Heading::West => (0, -1),
            Heading::NorthWest => (-1, -1),
        }
    }
}

/// A turn's input: place at (`row`, `col`), then rotate `sub_board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row of the placed marker.
    pub row: usize,
    /// Column of the placed marker.
    pub col: usize,
    /// One-based number of the sub-board to rotate.
    pub sub_board: usize,
    /// Rotation direction.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, sub_board: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            sub_board,
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) then sub-board {} {}",
            self.row, self.col, self.sub_board, self.direction
        )
    }
}

/// Per-player verdict of one win evaluation, indexed by roster position.
///
/// Serializes as a map from player letter to verdict, e.g. `{"A":false,"B":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<char, bool>",
    try_from = "BTreeMap<char, bool>"
)]
pub struct Winners {
    won: Vec<bool>,
}

impl Winners {
    /// No player has won yet.
    pub fn none(player_count: usize) -> Self {
        Self {
            won: vec![false; player_count],
        }
    }

    /// Checks whether `player` has a winning run.
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.won.get(player.index()).copied().unwrap_or(false)
    }

    pub(crate) fn record(&mut self, player: PlayerId) {
        if let Some(slot) = self.won.get_mut(player.index()) {
            *slot = true;
        }
    }

    /// Players that won, in roster order.
    pub fn players(&self) -> Vec<PlayerId> {
        self.iter()
            .filter_map(|(player, won)| won.then_some(player))
            .collect()
    }

    /// Every player with its verdict, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, bool)> + '_ {
        self.won
            .iter()
            .enumerate()
            .filter_map(|(i, &won)| PlayerId::new(i).map(|p| (p, won)))
    }

    /// Checks whether nobody won.
    pub fn is_empty(&self) -> bool {
        !self.won.iter().any(|&won| won)
    }
}

impl From<Winners> for BTreeMap<char, bool> {
    fn from(winners: Winners) -> Self {
        winners
            .iter()
            .map(|(player, won)| (player.letter(), won))
            .collect()
    }
}

impl TryFrom<BTreeMap<char, bool>> for Winners {
    type Error = ConfigError;

    /// Letters must be the opening, gap-free run of the roster: `A`, `B`, ...
    fn try_from(verdicts: BTreeMap<char, bool>) -> Result<Self, Self::Error> {
        let mut won = Vec::with_capacity(verdicts.len());
        for (position, (letter, verdict)) in verdicts.into_iter().enumerate() {
            match PlayerId::from_letter(letter) {
                Some(player) if player.index() == position => won.push(verdict),
                _ => {
                    return Err(ConfigError::new(format!(
                        "winner entry '{letter}' is out of roster order"
                    )));
                }
            }
        }
        Ok(Self { won })
    }
}

/// Result of one applied turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnResult {
    /// Win verdict for every player.
    winners: Winners,
    /// Whether every cell is now filled.
    board_full: bool,
}

impl TurnResult {
    pub(crate) fn new(winners: Winners, board_full: bool) -> Self {
        Self {
            winners,
            board_full,
        }
    }

    /// Checks whether the game ended with this turn.
    pub fn is_terminal(&self) -> bool {
        !self.winners.is_empty() || self.board_full
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with one or more simultaneous winners.
    Won(Vec<PlayerId>),
    /// Board filled up with no winner.
    Drawn,
}

impl GameStatus {
    /// Checks whether no further turns are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_letters() {
        let roster = PlayerId::roster(3);
        let letters: String = roster.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, "ABC");
        assert_eq!(PlayerId::from_letter('c'), roster.get(2).copied());
        assert_eq!(PlayerId::new(26), None);
        assert_eq!(PlayerId::from_letter('1'), None);
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token("clockwise"), Ok(Direction::Clockwise));
        assert_eq!(Direction::from_token("ClockWise"), Ok(Direction::Clockwise));
        assert_eq!(
            Direction::from_token("COUNTER-CLOCKWISE"),
            Ok(Direction::CounterClockwise)
        );
        assert!(matches!(
            Direction::from_token("sideways"),
            Err(EngineError::InvalidDirection { .. })
        ));
        assert_eq!(Direction::CounterClockwise.to_string(), "counter-clockwise");
    }

    #[test]
    fn test_headings_cover_all_neighbours() {
        let mut deltas: Vec<_> = Heading::iter().map(Heading::delta).collect();
        deltas.sort();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
    }

    #[test]
    fn test_winners_record() {
        let a = PlayerId::new(0).unwrap();
        let b = PlayerId::new(1).unwrap();
        let mut winners = Winners::none(2);
        assert!(winners.is_empty());
        winners.record(b);
        assert!(!winners.has_won(a));
        assert!(winners.has_won(b));
        assert_eq!(winners.players(), vec![b]);
    }

    #[test]
    fn test_player_deserialize_checks_range() {
        let c: PlayerId = serde_json::from_str("2").unwrap();
        assert_eq!(c.letter(), 'C');
        assert_eq!(serde_json::to_string(&c).unwrap(), "2");

        let err = serde_json::from_str::<PlayerId>("200").unwrap_err();
        assert!(err.to_string().contains("player index 200"));
        assert!(serde_json::from_str::<Cell>(r#"{"Owned":26}"#).is_err());
    }

    #[test]
    fn test_winners_serialize_by_letter() {
        let mut winners = Winners::none(3);
        winners.record(PlayerId::new(1).unwrap());
        let json = serde_json::to_value(&winners).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"A": false, "B": true, "C": false})
        );
        assert_eq!(serde_json::from_value::<Winners>(json).unwrap(), winners);
    }

    #[test]
    fn test_winners_reject_gaps_in_roster() {
        let json = serde_json::json!({"A": false, "C": true});
        assert!(serde_json::from_value::<Winners>(json).is_err());
        let json = serde_json::json!({"7": true});
        assert!(serde_json::from_value::<Winners>(json).is_err());
    }
}
