//! Scripted comment demo that drives the compare preview until the visitor
//! takes over.
//!
//! The machine is pure: it never touches a timer itself. Every delayed action
//! goes through a [`Scheduler`] as a [`Ticket`], and the ticket is handed back
//! to [`Sequencer::fire`] when its timer elapses. Tickets carry the generation
//! they were issued in, so anything issued before a halt is dead on arrival.

use log::{debug, info};

pub const WARM_UP_MS: u32 = 500;
pub const TYPE_INTERVAL_MS: u32 = 40;
pub const LOOP_PERIOD_MS: u32 = 28_000;
pub const MAX_DRAFT_CHARS: usize = 100;

const FIRST_COMMENT: &str = "Love the new headline. Can the logo breathe a little more?";
const SECOND_COMMENT: &str = "The old crop felt warmer, keep this one as the fallback.";
const THIRD_COMMENT: &str = "Maybe swap the CTA colour to the brand orange?";
const FOURTH_COMMENT: &str = "Approved from my side, ship v2 once legal signs off.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    pub active_side: Side,
    pub draft: String,
    pub left_comment: Option<String>,
    pub right_comment: Option<String>,
}

impl DemoState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn comment(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left_comment.as_deref(),
            Side::Right => self.right_comment.as_deref(),
        }
    }

    fn comment_slot(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::Left => &mut self.left_comment,
            Side::Right => &mut self.right_comment,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Reset,
    Focus(Side),
    /// Reveal the text into the draft one character per tick.
    Type(&'static str),
    /// Move the trimmed draft into the active side's comment slot.
    Commit,
    ClearDraft,
    Restart,
}

/// Offsets are milliseconds from the start of a run.
pub const SCRIPT: &[(u32, Step)] = &[
    (0, Step::Reset),
    (1_500, Step::Focus(Side::Right)),
    (3_000, Step::Type(FIRST_COMMENT)),
    (6_500, Step::Commit),
    (8_000, Step::Focus(Side::Left)),
    (9_500, Step::Type(SECOND_COMMENT)),
    (13_000, Step::Commit),
    (14_500, Step::Focus(Side::Right)),
    (16_000, Step::Type(THIRD_COMMENT)),
    (19_500, Step::ClearDraft),
    (21_000, Step::Focus(Side::Left)),
    (22_500, Step::Type(FOURTH_COMMENT)),
    // Overwrites the first left comment; the slot holds one comment per side.
    (26_000, Step::Commit),
    (LOOP_PERIOD_MS, Step::Restart),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ticket {
    WarmUp { generation: u64 },
    Step { generation: u64, index: usize },
    /// Show the first `len` characters of the text typed by `SCRIPT[index]`.
    Reveal { generation: u64, index: usize, len: usize },
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        match *self {
            Ticket::WarmUp { generation }
            | Ticket::Step { generation, .. }
            | Ticket::Reveal { generation, .. } => generation,
        }
    }
}

/// Deferred delivery of tickets. `cancel_all` must drop every ticket that has
/// not been delivered yet.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, ticket: Ticket);
    fn cancel_all(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// Nothing but whitespace in the draft.
    Empty,
    /// The active side already carries the guest's comment; replying needs an
    /// account.
    SignUpRequired,
}

#[derive(Debug)]
pub struct Sequencer {
    state: DemoState,
    autoplay: bool,
    generation: u64,
}

impl Sequencer {
    pub fn new(autoplay_allowed: bool) -> Self {
        Self {
            state: DemoState::initial(),
            autoplay: autoplay_allowed,
            generation: 0,
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn mount(&mut self, sched: &mut impl Scheduler) {
        if self.autoplay {
            debug!("compare preview autoplay starts in {}ms", WARM_UP_MS);
            sched.schedule(
                WARM_UP_MS,
                Ticket::WarmUp {
                    generation: self.generation,
                },
            );
        }
    }

    /// Applies a delivered ticket. Returns whether the state changed.
    pub fn fire(&mut self, ticket: Ticket, sched: &mut impl Scheduler) -> bool {
        if !self.autoplay || ticket.generation() != self.generation {
            return false;
        }

        match ticket {
            Ticket::WarmUp { .. } => {
                info!("compare preview autoplay started");
                self.run(sched);
                true
            }
            Ticket::Step { index, .. } => match SCRIPT.get(index) {
                Some(&(_, step)) => self.apply(index, step, sched),
                None => false,
            },
            Ticket::Reveal { index, len, .. } => match SCRIPT.get(index) {
                Some(&(_, Step::Type(text))) => self.reveal(index, text, len, sched),
                _ => false,
            },
        }
    }

    /// Starts the script from the top, dropping whatever the previous pass
    /// left scheduled.
    pub fn run(&mut self, sched: &mut impl Scheduler) {
        sched.cancel_all();
        self.state = DemoState::initial();
        for (index, &(offset, _)) in SCRIPT.iter().enumerate() {
            sched.schedule(
                offset,
                Ticket::Step {
                    generation: self.generation,
                    index,
                },
            );
        }
    }

    pub fn focus(&mut self, side: Side, sched: &mut impl Scheduler) {
        self.halt(sched);
        self.state.active_side = side;
    }

    pub fn edit_draft(&mut self, text: &str, sched: &mut impl Scheduler) {
        self.halt(sched);
        self.state.draft = text.chars().take(MAX_DRAFT_CHARS).collect();
    }

    pub fn send(&mut self, sched: &mut impl Scheduler) -> SendOutcome {
        self.halt(sched);

        let side = self.state.active_side;
        if self.state.comment(side).is_some() {
            info!("guest reply on {:?} needs an account", side);
            return SendOutcome::SignUpRequired;
        }

        let text = self.state.draft.trim();
        if text.is_empty() {
            return SendOutcome::Empty;
        }

        let text = text.to_string();
        *self.state.comment_slot(side) = Some(text);
        self.state.draft.clear();
        SendOutcome::Sent
    }

    /// Any other interaction inside the widget. Returns true if this is what
    /// stopped autoplay.
    pub fn interrupt(&mut self, sched: &mut impl Scheduler) -> bool {
        let was_playing = self.autoplay;
        self.halt(sched);
        was_playing
    }

    pub fn teardown(&mut self, sched: &mut impl Scheduler) {
        self.halt(sched);
    }

    fn halt(&mut self, sched: &mut impl Scheduler) {
        if self.autoplay {
            info!("compare preview autoplay stopped by visitor");
        }
        self.autoplay = false;
        self.generation = self.generation.wrapping_add(1);
        sched.cancel_all();
    }

    fn apply(&mut self, index: usize, step: Step, sched: &mut impl Scheduler) -> bool {
        match step {
            Step::Reset => {
                self.state = DemoState::initial();
            }
            Step::Focus(side) => {
                self.state.active_side = side;
            }
            Step::Type(text) => return self.reveal(index, text, 1, sched),
            Step::Commit => {
                let text = self.state.draft.trim().to_string();
                if !text.is_empty() {
                    let side = self.state.active_side;
                    *self.state.comment_slot(side) = Some(text);
                }
                self.state.draft.clear();
            }
            Step::ClearDraft => {
                self.state.draft.clear();
            }
            Step::Restart => {
                debug!("compare preview loop restarting");
                self.run(sched);
            }
        }
        true
    }

    fn reveal(
        &mut self,
        index: usize,
        text: &'static str,
        len: usize,
        sched: &mut impl Scheduler,
    ) -> bool {
        let total = text.chars().count();
        let len = len.min(total);
        self.state.draft = text.chars().take(len).collect();

        if len < total {
            sched.schedule(
                TYPE_INTERVAL_MS,
                Ticket::Reveal {
                    generation: self.generation,
                    index,
                    len: len + 1,
                },
            );
        }
        true
    }
}
