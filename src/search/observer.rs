//! Instrumentation hooks for the recursive strategies.
//!
//! Strategies never print. Anything worth reporting about a search (the
//! value reached at the root, cutoffs, every node entered) goes through a
//! `SearchObserver`, and counters land in `SearchStats`. `Trace` carries both
//! through the recursion; it holds no search state of its own.

use crate::core::{Turn, Value};

use super::stats::SearchStats;

/// Alpha-beta window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Best value the maximizer can already guarantee.
    pub alpha: Value,
    /// Best value the minimizer can already guarantee.
    pub beta: Value,
}

impl Bounds {
    /// The unbounded window used at the root.
    pub const FULL: Bounds = Bounds {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };

    #[must_use]
    pub const fn new(alpha: Value, beta: Value) -> Self {
        Self { alpha, beta }
    }

    /// `alpha <= beta`, which holds at every node entry.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.alpha <= self.beta
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

/// A node as seen on entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVisit {
    /// Agent to move and remaining depth.
    pub turn: Turn,
    /// Window at entry (alpha-beta only).
    pub bounds: Option<Bounds>,
    /// Recursion frame, 1 at the root.
    pub frame: u32,
}

/// Receives search events. All hooks default to doing nothing.
pub trait SearchObserver {
    /// A node was entered.
    fn on_enter(&mut self, _visit: &NodeVisit) {}

    /// A node stopped iterating, leaving `skipped` sibling actions unexplored.
    fn on_cutoff(&mut self, _visit: &NodeVisit, _skipped: usize) {}

    /// A search finished with `value` at the root.
    fn on_root(&mut self, _strategy: &str, _value: Value) {}
}

/// Forwards search events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_cutoff(&mut self, visit: &NodeVisit, skipped: usize) {
        log::trace!(
            "cutoff at {} depth {}: {} actions skipped",
            visit.turn.agent,
            visit.turn.depth,
            skipped
        );
    }

    fn on_root(&mut self, strategy: &str, value: Value) {
        log::info!("{strategy} root value {value}");
    }
}

/// Per-search instrumentation threaded through the recursion.
pub struct Trace<'a> {
    stats: &'a mut SearchStats,
    observer: Option<&'a mut dyn SearchObserver>,
    frame: u32,
}

impl<'a> Trace<'a> {
    pub fn new(stats: &'a mut SearchStats, observer: Option<&'a mut dyn SearchObserver>) -> Self {
        Self {
            stats,
            observer,
            frame: 0,
        }
    }

    /// Run `body` as one recursion frame for the node at `turn`.
    pub fn frame<R>(
        &mut self,
        turn: Turn,
        bounds: Option<Bounds>,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.frame += 1;
        self.stats.nodes_visited += 1;
        self.stats.max_frames = self.stats.max_frames.max(self.frame);

        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_enter(&NodeVisit {
                turn,
                bounds,
                frame: self.frame,
            });
        }

        let result = body(self);
        self.frame -= 1;
        result
    }

    /// Record a leaf evaluation.
    pub fn leaf(&mut self) {
        self.stats.leaves_evaluated += 1;
    }

    /// Record a chance node.
    pub fn chance(&mut self) {
        self.stats.chance_nodes += 1;
    }

    /// Record a cutoff at `turn` with `skipped` actions left unexplored.
    pub fn cutoff(&mut self, turn: Turn, bounds: Bounds, skipped: usize) {
        self.stats.cutoffs += 1;
        self.stats.pruned_actions += skipped as u64;

        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_cutoff(
                &NodeVisit {
                    turn,
                    bounds: Some(bounds),
                    frame: self.frame,
                },
                skipped,
            );
        }
    }

    /// Report the root value.
    pub fn root(&mut self, strategy: &str, value: Value) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_root(strategy, value);
        }
    }
}
