use alloc::vec::Vec;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the board is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    Loading,
    Playing,
    LoadFailed,
    Over,
}

impl Phase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Waiting
    }
}

/// Identifies one call to [`Board::start_game`]. A load result is only
/// applied if it carries the ticket of the load still in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket(u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartLabel {
    Start,
    Restart,
}

impl fmt::Display for StartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start Game",
            Self::Restart => "Restart Game",
        })
    }
}

/// Enabled state of the start and reset buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub start_enabled: bool,
    pub reset_enabled: bool,
    pub start_label: StartLabel,
}

/// What the active-clue panel says.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prompt<'a> {
    Begin,
    Loading,
    LoadFailed,
    Continue,
    Question(&'a str),
    Answer(&'a str),
    GameOver { score: Score },
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Prompt::*;
        match self {
            Begin => f.write_str("Click on a clue to begin!"),
            Loading => f.write_str("Loading..."),
            LoadFailed => f.write_str("Failed to load game. Try again."),
            Continue => f.write_str("Click on a clue to continue!"),
            Question(text) | Answer(text) => f.write_str(text),
            GameOver { score } => write!(f, "Game Over! Final Score: {}", score),
        }
    }
}

/// Drives a [`Session`] through start, load, play and reset.
///
/// Loading is split in two so a UI can run the fetch on its own executor:
/// [`Board::start_game`] hands out a [`LoadTicket`], [`load_game`] fetches,
/// and [`Board::finish_load`] applies the result in one step.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    session: Session,
    phase: Phase,
    pending: Option<LoadTicket>,
    next_ticket: u32,
    finished_once: bool,
    last_error: Option<FetchError>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            phase: Phase::default(),
            pending: None,
            next_ticket: 0,
            finished_once: false,
            last_error: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn score(&self) -> Score {
        self.session.score()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn controls(&self) -> Controls {
        use Phase::*;
        let start_label = if self.finished_once {
            StartLabel::Restart
        } else {
            StartLabel::Start
        };
        let idle = matches!(self.phase, Waiting | LoadFailed | Over);
        Controls {
            start_enabled: idle,
            reset_enabled: !idle,
            start_label,
        }
    }

    pub fn prompt(&self) -> Prompt<'_> {
        match self.phase {
            Phase::Waiting => Prompt::Begin,
            Phase::Loading => Prompt::Loading,
            Phase::LoadFailed => Prompt::LoadFailed,
            Phase::Over => Prompt::GameOver {
                score: self.session.score(),
            },
            Phase::Playing => match self.session.active_clue() {
                Some(active) if active.stage == Stage::QuestionShown => {
                    Prompt::Question(&active.clue.question)
                }
                Some(active) if active.stage == Stage::AnswerShown => {
                    Prompt::Answer(&active.clue.answer)
                }
                _ if self.any_completed() => Prompt::Continue,
                _ => Prompt::Begin,
            },
        }
    }

    /// Clears the board and enters the loading phase. Rejected while a load
    /// is already running.
    pub fn start_game(&mut self) -> Result<LoadTicket> {
        if self.phase.is_loading() {
            log::warn!("Start requested while a game is loading");
            return Err(GameError::AlreadyLoading);
        }

        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.session.clear();
        self.last_error = None;
        self.pending = Some(ticket);
        self.phase = Phase::Loading;
        log::info!("Loading game {:?}", ticket);
        Ok(ticket)
    }

    /// Applies the outcome of the load started with `ticket`. On failure, or
    /// when the loaded board has no clue to play, the board stays empty and
    /// the error is kept for display.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        loaded: core::result::Result<Vec<Category>, FetchError>,
    ) -> Result<()> {
        if self.pending != Some(ticket) {
            log::debug!("Discarding result of superseded load {:?}", ticket);
            return Err(GameError::StaleLoad);
        }
        self.pending = None;

        let loaded = loaded.and_then(|categories| {
            let session = Session::with_categories(categories);
            if session.categories().iter().all(Category::is_exhausted) {
                Err(FetchError::NoPlayableClues)
            } else {
                Ok(session)
            }
        });

        match loaded {
            Ok(session) => {
                self.session = session;
                self.phase = Phase::Playing;
                log::info!(
                    "Game ready with {} categories",
                    self.session.categories().len()
                );
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load game: {}", err);
                self.session.clear();
                self.phase = Phase::LoadFailed;
                self.last_error = Some(err.clone());
                Err(GameError::Fetch(err))
            }
        }
    }

    /// Starts a game and loads it from `source` in one go.
    pub async fn start_and_load<S, R>(&mut self, source: &S, rng: &mut R) -> Result<()>
    where
        S: TriviaSource + ?Sized,
        R: Rng,
    {
        let ticket = self.start_game()?;
        let loaded = load_game(source, &self.config, rng).await;
        self.finish_load(ticket, loaded)
    }

    /// Back to the pre-game state. A load still in flight is abandoned.
    pub fn reset_game(&mut self) {
        if let Some(ticket) = self.pending.take() {
            log::debug!("Abandoning load {:?}", ticket);
        }
        self.session.clear();
        self.phase = Phase::Waiting;
        self.finished_once = false;
        self.last_error = None;
    }

    pub fn select_clue(&mut self, category_id: CategoryId, clue_id: ClueId) -> ClueOutcome {
        if self.phase != Phase::Playing {
            log::trace!("Ignoring clue selection in phase {:?}", self.phase);
            return ClueOutcome::NoChange;
        }
        self.session.select_clue(category_id, clue_id)
    }

    pub fn advance_active_clue(&mut self) -> ClueOutcome {
        if self.phase != Phase::Playing {
            log::trace!("Ignoring clue advance in phase {:?}", self.phase);
            return ClueOutcome::NoChange;
        }

        let outcome = self.session.advance_active_clue();
        if outcome == ClueOutcome::GameOver {
            self.phase = Phase::Over;
            self.finished_once = true;
            log::info!("Game over, final score {}", self.session.score());
        }
        outcome
    }

    fn any_completed(&self) -> bool {
        self.session
            .categories()
            .iter()
            .flat_map(Category::slots)
            .any(|slot| !slot.is_open())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
