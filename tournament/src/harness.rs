//! Round-robin evaluation: every unordered pair of entrants plays one match
//! and each side is credited with the paddle hits it made.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use game_core::{Config, Match, MatchInfo, Side};
use log::{debug, info, warn};
use proto::{Frame, Observation, Snapshot};
use serde::{Deserialize, Serialize};

use crate::policy::{Ending, EvalSettings};
use crate::{Agent, EvalError};

/// A roster slot: the agent plus the fitness the harness writes back
#[derive(Debug, Clone)]
pub struct Entrant<A> {
    pub agent: A,
    pub fitness: f64,
}

impl<A> Entrant<A> {
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            fitness: 0.0,
        }
    }
}

/// Shared stop switch, checked once per tick
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Receives the frame stream of every match, e.g. to drive a renderer
pub trait Spectator {
    fn on_frame(&mut self, frame: &Frame);
}

/// Discards every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpectator;

impl Spectator for NullSpectator {
    fn on_frame(&mut self, _frame: &Frame) {}
}

impl Spectator for Vec<Frame> {
    fn on_frame(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}

/// Postcard-encodes frames for a byte-oriented renderer link
#[derive(Debug, Clone, Default)]
pub struct EncodedFrames {
    pub sent: Vec<Vec<u8>>,
}

impl Spectator for EncodedFrames {
    fn on_frame(&mut self, frame: &Frame) {
        match frame.to_bytes() {
            Ok(bytes) => self.sent.push(bytes),
            Err(e) => warn!("Dropping frame that failed to encode: {}", e),
        }
    }
}

/// Outcome of one pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Roster index of the left entrant
    pub left: usize,
    /// Roster index of the right entrant
    pub right: usize,
    pub seed: u64,
    pub ticks: u64,
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    pub ending: Ending,
}

/// Everything one evaluation pass produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    pub matches: Vec<MatchRecord>,
    /// Fitness per roster index after the pass
    pub fitness: Vec<f64>,
    /// Highest fitness, earliest index on ties; `None` for an empty roster
    pub champion: Option<usize>,
}

impl PassReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct Tournament {
    config: Config,
    settings: EvalSettings,
    cancel: CancelFlag,
}

impl Tournament {
    pub fn new(config: Config, settings: EvalSettings) -> Result<Self, EvalError> {
        config.validate()?;
        settings.validate()?;
        Ok(Self {
            config,
            settings,
            cancel: CancelFlag::new(),
        })
    }

    /// Share an existing stop switch instead of the tournament's own
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn settings(&self) -> &EvalSettings {
        &self.settings
    }

    /// Score the roster in place, discarding frames
    pub fn evaluate<A: Agent>(&self, roster: &mut [Entrant<A>]) -> Result<PassReport, EvalError> {
        self.evaluate_with(roster, &mut NullSpectator)
    }

    /// Play every pair `i < j` once with `i` on the left.
    ///
    /// An entrant's fitness is zeroed the first time it appears in this pass
    /// and only accumulates afterwards.
    pub fn evaluate_with<A: Agent>(
        &self,
        roster: &mut [Entrant<A>],
        spectator: &mut dyn Spectator,
    ) -> Result<PassReport, EvalError> {
        let n = roster.len();
        let pairings = n * n.saturating_sub(1) / 2;
        info!("Evaluating {} entrants over {} matches", n, pairings);

        let mut seen = vec![false; n];
        let mut matches = Vec::with_capacity(pairings);

        for i in 0..n {
            for j in (i + 1)..n {
                for k in [i, j] {
                    if !seen[k] {
                        roster[k].fitness = 0.0;
                        seen[k] = true;
                    }
                }

                let (head, tail) = roster.split_at_mut(j);
                let (first, second) = (&mut head[i], &mut tail[0]);

                let seed = self.settings.pair_seed(i, j);
                let record =
                    self.run_match((i, j), &mut first.agent, &mut second.agent, seed, spectator)?;

                first.fitness += f64::from(record.left_hits);
                second.fitness += f64::from(record.right_hits);
                matches.push(record);
            }
        }

        let fitness: Vec<f64> = roster.iter().map(|e| e.fitness).collect();
        let champion = champion(&fitness);
        info!(
            "Pass complete: {} matches, champion {:?}",
            matches.len(),
            champion
        );

        Ok(PassReport {
            matches,
            fitness,
            champion,
        })
    }

    /// One standalone match; the left agent is reported as entrant 0 and
    /// the right as entrant 1
    pub fn play<L, R>(
        &self,
        left: &mut L,
        right: &mut R,
        seed: u64,
        spectator: &mut dyn Spectator,
    ) -> Result<MatchRecord, EvalError>
    where
        L: Agent + ?Sized,
        R: Agent + ?Sized,
    {
        self.run_match((0, 1), left, right, seed, spectator)
    }

    fn run_match<L, R>(
        &self,
        (left_index, right_index): (usize, usize),
        left: &mut L,
        right: &mut R,
        seed: u64,
        spectator: &mut dyn Spectator,
    ) -> Result<MatchRecord, EvalError>
    where
        L: Agent + ?Sized,
        R: Agent + ?Sized,
    {
        left.reset();
        right.reset();

        let mut game = Match::new(self.config.clone(), seed)?;
        let mapping = self.settings.mapping;
        let terminal = self.settings.terminal;

        spectator.on_frame(&Frame::MatchStart {
            left: left_index,
            right: right_index,
        });

        let mut info = game.info();
        let ending = loop {
            if let Some(ending) = terminal.verdict(&info) {
                break ending;
            }
            if self.cancel.is_cancelled() {
                warn!(
                    "Evaluation interrupted: {} vs {} at tick {}",
                    left_index, right_index, info.tick
                );
                return Err(EvalError::Interrupted {
                    left: left_index,
                    right: right_index,
                    tick: info.tick,
                });
            }

            let left_decision = left
                .decide(&observation(&game, Side::Left))
                .map_err(|source| EvalError::Decision {
                    entrant: left_index,
                    source,
                })?;
            let right_decision = right
                .decide(&observation(&game, Side::Right))
                .map_err(|source| EvalError::Decision {
                    entrant: right_index,
                    source,
                })?;

            info = game.step(
                mapping.direction(left_decision),
                mapping.direction(right_decision),
            );
            spectator.on_frame(&Frame::Tick(snapshot(&info)));
        };

        spectator.on_frame(&Frame::MatchOver(snapshot(&info)));
        debug!(
            "{} ({}) vs {} ({}): {:?} after {} ticks, hits {}-{}",
            left_index,
            left.name(),
            right_index,
            right.name(),
            ending,
            info.tick,
            info.left_hits,
            info.right_hits
        );

        Ok(MatchRecord {
            left: left_index,
            right: right_index,
            seed,
            ticks: info.tick,
            left_score: info.left_score,
            right_score: info.right_score,
            left_hits: info.left_hits,
            right_hits: info.right_hits,
            ending,
        })
    }
}

fn observation(game: &Match, side: Side) -> Observation {
    let (own_y, ball_y, distance) = game.observe(side);
    Observation::new(own_y, ball_y, distance)
}

pub fn snapshot(info: &MatchInfo) -> Snapshot {
    Snapshot {
        tick: info.tick,
        ball_x: info.ball.pos.x,
        ball_y: info.ball.pos.y,
        ball_vx: info.ball.vel.x,
        ball_vy: info.ball.vel.y,
        paddle_left_y: info.left_paddle.y,
        paddle_right_y: info.right_paddle.y,
        score_left: info.left_score,
        score_right: info.right_score,
        hits_left: info.left_hits,
        hits_right: info.right_hits,
    }
}

fn champion(fitness: &[f64]) -> Option<usize> {
    fitness
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &f)| match best {
            Some((_, top)) if f <= top => best,
            _ => Some((i, f)),
        })
        .map(|(i, _)| i)
}
