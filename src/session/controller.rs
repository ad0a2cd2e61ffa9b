//! Reading session state machine.
//!
//! ```text
//! Idle --begin--> Drawing --last flip--> (transition armed) --advance--> Displayed
//!   ^                |                                                      |
//!   +----reset-------+------------------------reset-------------------------+
//! ```
//!
//! The session owns the only mutable reading. Every trigger returns
//! immediately; the delay before the results view is a
//! `ScheduledTransition` that `reset` cancels.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cards::Catalog;
use crate::core::{DrawError, ReadingRng};
use crate::draw::{DrawEngine, Reading, ReadingId, RevealOutcome, SpreadKind};

use super::event::ReadingEvent;
use super::prefs::Preferences;
use super::timer::ScheduledTransition;

/// Coarse session phase, for the view to pick a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No reading; landing screen.
    Idle,
    /// Cards on the table, being flipped.
    Drawing,
    /// Results shown. Stays here until reset.
    Displayed,
}

#[derive(Clone, Debug)]
enum State {
    Idle,
    Drawing {
        reading: Reading,
        pending: Option<ScheduledTransition>,
    },
    Displayed {
        reading: Reading,
    },
}

/// Controller for one user's readings.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use rust_tarot::cards::Catalog;
/// use rust_tarot::core::ReadingRng;
/// use rust_tarot::draw::{DrawEngine, SpreadKind};
/// use rust_tarot::session::{Phase, ReadingSession};
///
/// let catalog = Arc::new(Catalog::standard().unwrap());
/// let mut session = ReadingSession::new(catalog, DrawEngine::default(), ReadingRng::new(1));
///
/// let id = session.begin(SpreadKind::Single, false).unwrap();
/// session.flip(id, 0, Duration::ZERO).unwrap();
/// assert_eq!(session.phase(), Phase::Drawing);
///
/// session.advance(Duration::from_millis(1500));
/// assert_eq!(session.phase(), Phase::Displayed);
/// ```
#[derive(Clone, Debug)]
pub struct ReadingSession {
    catalog: Arc<Catalog>,
    engine: DrawEngine,
    rng: ReadingRng,
    state: State,
    next_id: u64,
    events: Vec<ReadingEvent>,
}

impl ReadingSession {
    /// Create an idle session.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, engine: DrawEngine, rng: ReadingRng) -> Self {
        Self {
            catalog,
            engine,
            rng,
            state: State::Idle,
            next_id: 1,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Drawing { .. } => Phase::Drawing,
            State::Displayed { .. } => Phase::Displayed,
        }
    }

    /// The current reading, if any.
    #[must_use]
    pub fn reading(&self) -> Option<&Reading> {
        match &self.state {
            State::Idle => None,
            State::Drawing { reading, .. } | State::Displayed { reading } => Some(reading),
        }
    }

    /// The armed results transition, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<&ScheduledTransition> {
        match &self.state {
            State::Drawing { pending, .. } => pending.as_ref(),
            _ => None,
        }
    }

    /// Take all events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<ReadingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw a new reading, replacing whatever was on the table.
    pub fn begin(&mut self, spread: SpreadKind, reversals: bool) -> Result<ReadingId, DrawError> {
        let id = ReadingId::new(self.next_id);
        let reading = self
            .engine
            .draw_spread_kind(&self.catalog, spread, reversals, &mut self.rng)?
            .with_id(id);
        self.next_id += 1;

        if let State::Drawing { pending: Some(t), .. } = &self.state {
            debug!(reading = %t.reading(), "pending transition cancelled by new reading");
        }

        info!(reading = %id, ?spread, reversals, "reading started");
        self.events.push(ReadingEvent::started(&reading));
        self.state = State::Drawing { reading, pending: None };
        Ok(id)
    }

    /// Draw using the stored spread and reversal preferences.
    pub fn begin_with(&mut self, prefs: &Preferences) -> Result<ReadingId, DrawError> {
        self.begin(prefs.spread, prefs.reversals)
    }

    /// Flip the card at `index` of reading `id`.
    ///
    /// Returns `Ok(None)` when `id` is not the current reading: the flip
    /// arrived after a reset or a new draw and is dropped. When the flip
    /// reveals the last hidden card, the results transition is armed for
    /// `now + reveal_delay`.
    pub fn flip(&mut self, id: ReadingId, index: usize, now: Duration) -> Result<Option<RevealOutcome>, DrawError> {
        let delay = self.engine.config().reveal_delay();

        let (reading, pending) = match &mut self.state {
            State::Drawing { reading, pending } if reading.id() == id => (reading, Some(pending)),
            State::Displayed { reading } if reading.id() == id => (reading, None),
            _ => {
                debug!(reading = %id, index, "ignoring flip for stale reading");
                return Ok(None);
            }
        };

        let outcome = reading.reveal(index)?;
        match outcome {
            RevealOutcome::AlreadyRevealed => {}
            RevealOutcome::Revealed { remaining } => {
                debug!(reading = %id, index, remaining, "position revealed");
                self.events.push(ReadingEvent::PositionRevealed {
                    reading: id,
                    index,
                    fully_revealed: false,
                });
            }
            RevealOutcome::Completed => {
                let transition = ScheduledTransition::after(id, now, delay);
                debug!(reading = %id, index, due = ?transition.due(), "reading fully revealed, transition armed");
                if let Some(pending) = pending {
                    *pending = Some(transition);
                }
                self.events.push(ReadingEvent::PositionRevealed {
                    reading: id,
                    index,
                    fully_revealed: true,
                });
            }
        }

        Ok(Some(outcome))
    }

    /// Report elapsed session time. Fires the results transition if it is
    /// due. Returns whether the session moved to `Displayed`.
    pub fn advance(&mut self, now: Duration) -> bool {
        let State::Drawing { reading, pending } = &mut self.state else {
            return false;
        };

        let Some(transition) = *pending else {
            return false;
        };

        if transition.reading() != reading.id() {
            warn!(
                transition = %transition.reading(),
                reading = %reading.id(),
                "discarding transition for a different reading"
            );
            *pending = None;
            return false;
        }

        if !transition.is_due(now) {
            return false;
        }

        let State::Drawing { reading, .. } = std::mem::replace(&mut self.state, State::Idle) else {
            return false;
        };
        let id = reading.id();
        info!(reading = %id, "reading displayed");
        self.events.push(ReadingEvent::Completed { reading: id });
        self.state = State::Displayed { reading };
        true
    }

    /// Return to idle, discarding the reading and any armed transition.
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.state, State::Idle);
        let discarded = match previous {
            State::Idle => None,
            State::Drawing { reading, pending } => {
                if let Some(t) = pending {
                    debug!(reading = %t.reading(), "pending transition cancelled");
                }
                Some(reading.id())
            }
            State::Displayed { reading } => Some(reading.id()),
        };

        info!(reading = ?discarded, "session reset");
        self.events.push(ReadingEvent::Reset { reading: discarded });
    }

    /// The user left the reading screen. Same as `reset`.
    pub fn navigate_away(&mut self) {
        self.reset();
    }
}
