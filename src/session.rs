//! A match between two participants
//!
//! [`Match`] owns the authoritative [`Game`]. The UI forwards picks and
//! releases to it and calls [`Match::tick`] on a steady cadence; the tick
//! starts computer turns and applies their moves once ready.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::{Domino, Player, Pos};
use crate::error::{GameError, MoveError, SearchError};
use crate::game::{Game, GameStatus, MoveOutcome};
use crate::participant::Participant;

/// Who plays which colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two humans share the board
    HumanVsHuman,
    /// `human` plays one colour, the computer searches `depth` plies for the other
    HumanVsComputer { human: Player, depth: u32 },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::HumanVsComputer {
            human: Player::Red,
            depth: 3,
        }
    }
}

impl Mode {
    fn participant_for(self, player: Player) -> Participant {
        match self {
            Mode::HumanVsComputer { human, depth } if human != player => {
                Participant::computer(depth)
            }
            _ => Participant::human(),
        }
    }

    fn validate(self) -> Result<(), SearchError> {
        match self {
            Mode::HumanVsComputer { depth: 0, .. } => Err(SearchError::InvalidDepth(0)),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::HumanVsHuman => f.write_str("Human vs Human"),
            Mode::HumanVsComputer { human, depth } => {
                write!(f, "Human ({human}) vs Computer (depth {depth})")
            }
        }
    }
}

/// One game plus the two sides playing it.
pub struct Match {
    game: Game,
    mode: Mode,
    red: Participant,
    blue: Participant,
    last_move: Option<Domino>,
    message: Option<String>,
    paused: bool,
}

impl Match {
    #[instrument]
    pub fn new(size: usize, mode: Mode) -> Result<Self, SearchError> {
        mode.validate()?;
        let game = Game::new(size)?;
        info!(%mode, "match started");
        Ok(Self {
            game,
            mode,
            red: mode.participant_for(Player::Red),
            blue: mode.participant_for(Player::Blue),
            last_move: None,
            message: None,
            paused: false,
        })
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn participant(&self, player: Player) -> &Participant {
        match player {
            Player::Red => &self.red,
            Player::Blue => &self.blue,
        }
    }

    /// Most recently placed domino
    pub fn last_move(&self) -> Option<Domino> {
        self.last_move
    }

    /// Last error or notice for the status bar
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Participant whose turn it is, if the game is still running
    pub fn current(&self) -> Option<&Participant> {
        self.game.to_move().map(|p| self.participant(p))
    }

    pub fn is_human_turn(&self) -> bool {
        self.current().is_some_and(Participant::is_human)
    }

    pub fn is_computer_thinking(&self) -> bool {
        self.current().is_some_and(Participant::is_thinking)
    }

    /// True after [`Match::cancel_turn`] stopped a computer turn, until
    /// [`Match::resume`] or a restart.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Cell where the current human started dragging
    pub fn pending_pick(&self) -> Option<Pos> {
        self.current().and_then(Participant::pending_pick)
    }

    /// Advance computer turns. Call this regularly from the UI loop.
    ///
    /// Starts a search when the computer is to move and none is running,
    /// and applies its move once the search reports. Does nothing while
    /// paused.
    pub fn tick(&mut self) -> Result<Option<MoveOutcome>, SearchError> {
        if self.paused {
            return Ok(None);
        }
        let Some(to_move) = self.game.to_move() else {
            return Ok(None);
        };
        let participant = match to_move {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        };
        if participant.is_human() {
            return Ok(None);
        }
        if !participant.is_thinking() {
            participant.start_turn(&self.game)?;
        }
        let Some(domino) = participant.poll()? else {
            return Ok(None);
        };
        let outcome = self.game.apply(domino).map_err(GameError::from)?;
        self.record(outcome);
        Ok(Some(outcome))
    }

    /// Forward the start of a drag to the human to move.
    pub fn submit_pick(&mut self, pos: Pos) {
        if let Some(participant) = self.current_human_mut() {
            participant.submit_first_pick(pos);
        }
    }

    /// Forward the end of a drag; applies the domino if it is legal.
    ///
    /// Illegal input leaves the game untouched and sets [`Match::message`].
    pub fn submit_release(&mut self, pos: Pos) -> Result<Option<MoveOutcome>, MoveError> {
        let Some(participant) = self.current_human_mut() else {
            return Ok(None);
        };
        let attempt = match participant.submit_release(pos) {
            Ok(Some(domino)) => self.game.apply(domino),
            Ok(None) => return Ok(None),
            Err(err) => Err(err),
        };
        match attempt {
            Ok(outcome) => {
                self.record(outcome);
                Ok(Some(outcome))
            }
            Err(err) => {
                self.message = Some(format!("Invalid move: {err}"));
                Err(err)
            }
        }
    }

    /// Drop the current pick, or stop the computer's search.
    ///
    /// A stopped computer turn stays paused until [`Match::resume`]; the
    /// next tick does not start a new search on its own.
    pub fn cancel_turn(&mut self) {
        let Some(to_move) = self.game.to_move() else {
            return;
        };
        let participant = self.participant_mut(to_move);
        let computer = !participant.is_human();
        participant.request_cancel();
        if computer {
            self.paused = true;
            debug!(%to_move, "computer turn paused");
        }
    }

    /// Let a paused computer turn search again on the next tick.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            debug!("computer turn resumed");
        }
    }

    /// Start over with a new size and mode.
    ///
    /// Any running search is cancelled before the new game is built. On
    /// error the old game stays in place with its computer turn reset.
    #[instrument(skip(self))]
    pub fn restart(&mut self, size: usize, mode: Mode) -> Result<(), SearchError> {
        self.red.request_cancel();
        self.blue.request_cancel();
        *self = Match::new(size, mode)?;
        Ok(())
    }

    /// Human-readable state for the status bar
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::Over { winner } => format!("{winner} wins!"),
            GameStatus::NotOver => match self.game.to_move() {
                Some(player) if self.participant(player).is_human() => {
                    format!("{player} to move")
                }
                Some(player) if self.paused => format!("Computer ({player}) is paused"),
                Some(player) => format!("Computer ({player}) is thinking..."),
                None => String::new(),
            },
        }
    }

    fn current_human_mut(&mut self) -> Option<&mut Participant> {
        let to_move = self.game.to_move()?;
        let participant = self.participant_mut(to_move);
        participant.is_human().then_some(participant)
    }

    fn participant_mut(&mut self, player: Player) -> &mut Participant {
        match player {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        }
    }

    fn record(&mut self, outcome: MoveOutcome) {
        self.last_move = Some(outcome.domino);
        self.message = None;
        debug!(domino = %outcome.domino, mover = %outcome.mover, "move applied");
        if let GameStatus::Over { winner } = outcome.status {
            info!(%winner, moves = self.game.history_len(), "match over");
        }
    }
}
