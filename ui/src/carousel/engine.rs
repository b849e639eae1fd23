//! State machine for the auto-advancing project carousel.
//!
//! The engine owns the index, the play mode and the ids of the timers that
//! govern it. Time enters only through [`Timers`]: the engine asks for an
//! auto-advance interval and a resume cooldown, and reacts to the
//! [`CarouselEvent`]s those timers deliver.
//!
//! Invariants:
//! - `index < len` at all times (navigation is modular, `jump_to` validates).
//! - At most one auto-advance timer exists, and only while `Autoplaying`.
//! - At most one resume cooldown is pending; a new manual navigation cancels
//!   the previous one and bumps the generation so a resume that was already
//!   queued is recognised as stale.

use thiserror::Error;
use tracing::debug;

use crate::core::scheduler::{TimerId, Timers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    pub resume_cooldown_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4_000,
            resume_cooldown_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Autoplaying,
    Paused,
}

/// Events delivered by the carousel's own timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Advance,
    Resume { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is outside 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What a view needs to render the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub mode: PlayMode,
}

impl CarouselView {
    pub fn initial() -> Self {
        Self {
            index: 0,
            mode: PlayMode::Autoplaying,
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.mode == PlayMode::Autoplaying
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    pub config: CarouselConfig,
    len: usize,
    index: usize,
    mode: PlayMode,
    autoplay_timer: Option<TimerId>,
    resume_timer: Option<TimerId>,
    generation: u64,
}

impl Carousel {
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            config,
            len,
            index: 0,
            mode: PlayMode::Autoplaying,
            autoplay_timer: None,
            resume_timer: None,
            generation: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.index,
            mode: self.mode,
        }
    }

    /// Arm the auto-advance timer. Idempotent.
    pub fn start(&mut self, timers: &mut impl Timers<CarouselEvent>) {
        if self.mode == PlayMode::Autoplaying {
            self.arm_autoplay(timers);
        }
    }

    /// Cancel every timer this carousel owns. Events still in flight are
    /// ignored afterwards because their generation no longer matches.
    pub fn stop(&mut self, timers: &mut impl Timers<CarouselEvent>) {
        if let Some(id) = self.autoplay_timer.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.resume_timer.take() {
            timers.cancel(id);
        }
        self.generation += 1;
    }

    pub fn next(&mut self, timers: &mut impl Timers<CarouselEvent>) {
        let target = (self.index + 1) % self.len;
        self.navigate(target, timers);
    }

    pub fn previous(&mut self, timers: &mut impl Timers<CarouselEvent>) {
        let target = (self.index + self.len - 1) % self.len;
        self.navigate(target, timers);
    }

    /// Jump to an indicator position. Out-of-range indices are rejected and
    /// leave the carousel (and its timers) untouched.
    pub fn jump_to(
        &mut self,
        index: usize,
        timers: &mut impl Timers<CarouselEvent>,
    ) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.navigate(index, timers);
        Ok(())
    }

    /// Apply a timer event. Returns whether the visible state changed.
    pub fn handle(
        &mut self,
        event: CarouselEvent,
        timers: &mut impl Timers<CarouselEvent>,
    ) -> bool {
        match event {
            CarouselEvent::Advance => {
                if self.mode != PlayMode::Autoplaying || self.autoplay_timer.is_none() {
                    debug!(index = self.index, "auto-advance ignored while paused");
                    return false;
                }
                self.index = (self.index + 1) % self.len;
                true
            }
            CarouselEvent::Resume { generation } => {
                if generation != self.generation || self.resume_timer.is_none() {
                    debug!(generation, current = self.generation, "stale resume ignored");
                    return false;
                }
                self.resume_timer = None;
                self.mode = PlayMode::Autoplaying;
                self.arm_autoplay(timers);
                debug!(index = self.index, "autoplay resumed");
                true
            }
        }
    }

    fn navigate(&mut self, target: usize, timers: &mut impl Timers<CarouselEvent>) {
        self.index = target;
        self.mode = PlayMode::Paused;

        if let Some(id) = self.autoplay_timer.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.resume_timer.take() {
            timers.cancel(id);
        }

        self.generation += 1;
        let generation = self.generation;
        self.resume_timer = Some(timers.after(
            self.config.resume_cooldown_ms,
            CarouselEvent::Resume { generation },
        ));
        debug!(index = target, generation, "manual navigation; autoplay paused");
    }

    fn arm_autoplay(&mut self, timers: &mut impl Timers<CarouselEvent>) {
        if self.autoplay_timer.is_none() {
            self.autoplay_timer =
                Some(timers.every(self.config.autoplay_interval_ms, CarouselEvent::Advance));
        }
    }
}
