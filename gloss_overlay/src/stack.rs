// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip stack controller: level-indexed open records plus the
//! grace-period reconcile loop.
//!
//! ## Usage
//!
//! 1) The render layer calls [`TooltipStack::open`] when the pointer enters a
//!    term anchor (root prose is level 0; terms inside an open panel are that
//!    panel's level + 1).
//! 2) Raw pointer movement is sampled with [`TooltipStack::set_pointer`], as
//!    often as the host delivers it.
//! 3) On a fixed cadence (a frame callback, or throttled pointer moves) the
//!    host calls [`TooltipStack::reconcile`] with a [`RegionLookup`] and a
//!    monotonic clock reading; the stack prunes itself based on what is under
//!    the pointer, tolerating brief excursions within the grace period.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use gloss_overlay::stack::TooltipStack;
//! use gloss_overlay::types::{NoRegions, OpenOutcome, ReconcileOutcome};
//! use kurbo::{Point, Rect};
//!
//! let mut stack = TooltipStack::new();
//! let outcome = stack.open("Advantage", "Roll twice, keep the higher.", Rect::ZERO, 0);
//! assert!(matches!(outcome, OpenOutcome::Opened(_)));
//!
//! // No regions under the pointer: the stack survives the grace period,
//! // then collapses.
//! stack.set_pointer(Point::new(400.0, 300.0));
//! let t0 = Duration::from_millis(1_000);
//! assert_eq!(stack.reconcile(&NoRegions, t0), ReconcileOutcome::Pruned(1));
//! ```

use alloc::string::ToString;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};

use crate::types::{
    OpenOutcome, ReconcileOutcome, RegionHit, RegionLookup, TooltipId, TooltipRecord,
};

/// Default hysteresis window: how long the pointer may sit outside all active
/// regions before the stack starts pruning.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(100);

/// Controller for a stack of nested tooltips.
///
/// Owns the ordered records and the hysteresis state. Invariant, restored
/// after every mutation: the stack is dense and level-indexed, i.e.
/// `records()[i].level == i` for every `i`. All mutation goes through
/// truncation and a single push, so the invariant holds by construction.
///
/// Without the grace period, any pixel gap between an anchor and its popup
/// (or between nested popups) would collapse the stack the instant the
/// pointer crosses it; the grace period turns instantaneous geometric
/// containment into a debounced containment test.
///
/// ## Threading
///
/// The controller is a single-writer state machine: [`open`](Self::open) and
/// [`reconcile`](Self::reconcile) take `&mut self` and must not interleave.
/// Hosts that deliver hover events and timing callbacks from different
/// threads must serialize entry (an actor or a mutex around the stack).
/// [`set_pointer`](Self::set_pointer) is the one input that may come from a
/// higher-frequency source; it only replaces the sampled point.
///
/// ## Time
///
/// The crate is `no_std`, so [`reconcile`](Self::reconcile) takes the current
/// time as a caller-supplied [`Duration`] from any monotonic clock with an
/// arbitrary epoch. Tests script it; hosts typically pass an
/// `Instant`-since-startup reading.
#[derive(Clone, Debug)]
pub struct TooltipStack {
    records: Vec<TooltipRecord>,
    next_id: u64,
    grace: Duration,
    pointer: Point,
    /// Last instant the pointer was observed on or below the deepest open
    /// content. `None` until the first such observation (and after
    /// [`clear`](Self::clear)), in which case no grace credit exists.
    last_valid: Option<Duration>,
}

impl Default for TooltipStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipStack {
    /// Create an empty stack with the [default grace period](DEFAULT_GRACE_PERIOD).
    pub fn new() -> Self {
        Self::with_grace_period(DEFAULT_GRACE_PERIOD)
    }

    /// Create an empty stack with an explicit grace period.
    pub fn with_grace_period(grace: Duration) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            grace,
            pointer: Point::ZERO,
            last_valid: None,
        }
    }

    /// The configured grace period.
    pub fn grace_period(&self) -> Duration {
        self.grace
    }

    /// Open a tooltip at the given nesting level.
    ///
    /// Called when the pointer enters a term anchor. `anchor` is the
    /// triggering element's rectangle, forwarded opaquely for placement.
    ///
    /// Semantics, in order:
    /// - If `level` already holds a record for the same term, nothing changes
    ///   and the existing record (same id) stays: re-hovering the anchor that
    ///   spawned an open tooltip must not flicker it.
    /// - Otherwise the stack is truncated to `level`, dropping any deeper
    ///   branch and any sibling previously at `level` itself.
    /// - A `level` beyond the stack's length is clamped onto the end rather
    ///   than leaving a gap; skipping ahead is a caller contract violation
    ///   and clamping is cheaper and safer than breaking the invariant.
    /// - If the parent record (at `level - 1`) has the same term, the open is
    ///   refused: a definition must not spawn itself as its immediate child.
    ///   Note the truncation above has already happened at this point.
    ///
    /// The same term may still be open at a *different* level than the one
    /// checked; only the exact slot is deduplicated.
    pub fn open(&mut self, term: &str, definition: &str, anchor: Rect, level: usize) -> OpenOutcome {
        if let Some(existing) = self.records.get(level)
            && existing.term == term
        {
            return OpenOutcome::AlreadyOpen;
        }
        self.records.truncate(level);
        let level = level.min(self.records.len());
        if level > 0 && self.records[level - 1].term == term {
            return OpenOutcome::SelfReference;
        }
        let id = TooltipId(self.next_id);
        self.next_id += 1;
        self.records.push(TooltipRecord {
            id,
            term: term.to_string(),
            definition: definition.to_string(),
            anchor,
            level,
        });
        OpenOutcome::Opened(id)
    }

    /// Sample the latest pointer position.
    ///
    /// May be called at raw pointer-move frequency; [`reconcile`](Self::reconcile)
    /// reads the most recent sample instead of being driven per move, which
    /// bounds the pruning work to the reconcile cadence.
    pub fn set_pointer(&mut self, pt: Point) {
        self.pointer = pt;
    }

    /// The most recently sampled pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Prune the stack against what is currently under the pointer.
    ///
    /// Invoke on a fixed cadence with a monotonic `now`. The target level —
    /// the depth to be preserved — is derived from `regions`:
    ///
    /// - anchor at level `L`: target `L`, bumped to `L + 1` when the record
    ///   at `L` holds the anchor's own term (hovering the anchor that spawned
    ///   a tooltip keeps that tooltip alive too);
    /// - panel of the record at index `I`: target `I + 1` (being inside a
    ///   panel keeps it and everything below it alive); a panel id no longer
    ///   on the stack counts as a miss;
    /// - no region: target 0.
    ///
    /// A target covering the whole stack refreshes the hysteresis timestamp.
    /// A shallower target only truncates once the grace period has lapsed
    /// since the last covered observation, so brief excursions across visual
    /// gaps do not collapse the chain. Never fails; a lookup miss is a normal
    /// input.
    pub fn reconcile<R: RegionLookup + ?Sized>(
        &mut self,
        regions: &R,
        now: Duration,
    ) -> ReconcileOutcome {
        let target = self.target_level(regions);
        if target >= self.records.len() {
            self.last_valid = Some(now);
            return ReconcileOutcome::Covered;
        }
        let within_grace = self
            .last_valid
            .is_some_and(|t| now.saturating_sub(t) < self.grace);
        if within_grace {
            return ReconcileOutcome::Tolerated;
        }
        let dropped = self.records.len() - target;
        self.records.truncate(target);
        ReconcileOutcome::Pruned(dropped)
    }

    fn target_level<R: RegionLookup + ?Sized>(&self, regions: &R) -> usize {
        match regions.hit(self.pointer) {
            Some(RegionHit::Anchor { term, level }) => {
                match self.records.get(level) {
                    // The anchor's tooltip is the next record up: keep it.
                    Some(next) if next.term == term => level + 1,
                    _ => level,
                }
            }
            Some(RegionHit::Panel { id }) => {
                match self.records.iter().position(|r| r.id == id) {
                    Some(index) => index + 1,
                    // Stale panel (already pruned): same as hitting nothing.
                    None => 0,
                }
            }
            None => 0,
        }
    }

    /// The open records, shallowest first. Read-only view for the render
    /// layer; `records()[i].level == i` always holds.
    pub fn records(&self) -> &[TooltipRecord] {
        &self.records
    }

    /// The record at `level`, if open.
    pub fn get(&self, level: usize) -> Option<&TooltipRecord> {
        self.records.get(level)
    }

    /// The deepest open record, if any.
    pub fn top(&self) -> Option<&TooltipRecord> {
        self.records.last()
    }

    /// Number of open tooltips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no tooltips are open.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record and the hysteresis timestamp. Ids keep counting up,
    /// so records opened after a clear never reuse old ids.
    pub fn clear(&mut self) {
        self.records.clear();
        self.last_valid = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoRegions;
    use alloc::string::String;

    const MS: Duration = Duration::from_millis(1);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 40.0, 16.0)
    }

    fn assert_level_indexed(stack: &TooltipStack) {
        for (i, r) in stack.records().iter().enumerate() {
            assert_eq!(r.level, i, "record at index {i} has level {}", r.level);
        }
    }

    /// A lookup that always reports the same region.
    enum Held {
        Anchor(String, usize),
        Panel(TooltipId),
    }

    struct OneRegion(Held);

    impl RegionLookup for OneRegion {
        fn hit(&self, _pt: Point) -> Option<RegionHit<'_>> {
            match &self.0 {
                Held::Anchor(term, level) => Some(RegionHit::Anchor {
                    term,
                    level: *level,
                }),
                Held::Panel(id) => Some(RegionHit::Panel { id: *id }),
            }
        }
    }

    fn open_chain(stack: &mut TooltipStack, terms: &[&str]) {
        for (level, term) in terms.iter().enumerate() {
            let outcome = stack.open(term, "def", rect(), level);
            assert!(matches!(outcome, OpenOutcome::Opened(_)), "{outcome:?}");
        }
    }

    #[test]
    fn open_assigns_dense_levels_and_fresh_ids() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A", "B", "C"]);
        assert_eq!(stack.len(), 3);
        assert_level_indexed(&stack);
        let ids: Vec<_> = stack.records().iter().map(|r| r.id).collect();
        assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
    }

    #[test]
    fn duplicate_open_is_noop_with_same_id() {
        let mut stack = TooltipStack::new();
        let OpenOutcome::Opened(first) = stack.open("Advantage", "def", rect(), 0) else {
            panic!("first open must succeed");
        };
        assert_eq!(stack.open("Advantage", "def", rect(), 0), OpenOutcome::AlreadyOpen);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.get(0).map(|r| r.id), Some(first));
    }

    #[test]
    fn duplicate_open_leaves_deeper_levels_alone() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A", "B", "C"]);
        // Re-hovering the anchor that spawned B must not tear down C.
        assert_eq!(stack.open("B", "def", rect(), 1), OpenOutcome::AlreadyOpen);
        assert_eq!(stack.len(), 3);
        assert_level_indexed(&stack);
    }

    #[test]
    fn self_recursion_is_refused() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["Advantage"]);
        assert_eq!(
            stack.open("Advantage", "def", rect(), 1),
            OpenOutcome::SelfReference
        );
        assert_eq!(stack.len(), 1);
        assert_level_indexed(&stack);
    }

    #[test]
    fn same_term_at_nonadjacent_level_is_allowed() {
        // Only the exact slot and the immediate parent are checked; A may
        // recur deeper in the chain.
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A", "B"]);
        assert!(matches!(
            stack.open("A", "def", rect(), 2),
            OpenOutcome::Opened(_)
        ));
        assert_eq!(stack.len(), 3);
        assert_level_indexed(&stack);
    }

    #[test]
    fn opening_truncates_deeper_branch() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A", "B", "C"]);
        assert!(matches!(
            stack.open("D", "def", rect(), 1),
            OpenOutcome::Opened(_)
        ));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(1).map(|r| r.term.as_str()), Some("D"));
        assert_level_indexed(&stack);
    }

    #[test]
    fn opening_replaces_sibling_at_same_level() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A", "B"]);
        assert!(matches!(
            stack.open("E", "def", rect(), 1),
            OpenOutcome::Opened(_)
        ));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(1).map(|r| r.term.as_str()), Some("E"));
        assert_level_indexed(&stack);
    }

    #[test]
    fn skipped_level_is_clamped() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A"]);
        // Caller skips ahead to level 5; the record lands at level 1 so the
        // stack stays dense.
        assert!(matches!(
            stack.open("B", "def", rect(), 5),
            OpenOutcome::Opened(_)
        ));
        assert_eq!(stack.len(), 2);
        assert_level_indexed(&stack);
    }

    #[test]
    fn covered_refreshes_and_keeps_stack() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A"]);
        let panel = stack.get(0).map(|r| r.id);
        let regions = OneRegion(Held::Panel(panel.expect("record exists")));
        assert_eq!(stack.reconcile(&regions, ms(10)), ReconcileOutcome::Covered);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn grace_period_holds_then_prunes() {
        let mut stack = TooltipStack::with_grace_period(ms(100));
        open_chain(&mut stack, &["A", "B"]);
        let panel = stack.get(1).map(|r| r.id).expect("record exists");
        let inside = OneRegion(Held::Panel(panel));
        assert_eq!(stack.reconcile(&inside, ms(1_000)), ReconcileOutcome::Covered);

        // Pointer leaves everything: within the grace period the stack holds.
        assert_eq!(
            stack.reconcile(&NoRegions, ms(1_050)),
            ReconcileOutcome::Tolerated
        );
        assert_eq!(stack.len(), 2);
        assert_eq!(
            stack.reconcile(&NoRegions, ms(1_099)),
            ReconcileOutcome::Tolerated
        );

        // At exactly the grace period the excursion stops being tolerated.
        assert_eq!(
            stack.reconcile(&NoRegions, ms(1_100)),
            ReconcileOutcome::Pruned(2)
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn returning_within_grace_restores_credit() {
        let mut stack = TooltipStack::with_grace_period(ms(100));
        open_chain(&mut stack, &["A"]);
        let panel = stack.get(0).map(|r| r.id).expect("record exists");
        let inside = OneRegion(Held::Panel(panel));
        assert_eq!(stack.reconcile(&inside, ms(0)), ReconcileOutcome::Covered);
        assert_eq!(stack.reconcile(&NoRegions, ms(60)), ReconcileOutcome::Tolerated);
        // Back inside before the period lapses: timestamp refreshes.
        assert_eq!(stack.reconcile(&inside, ms(90)), ReconcileOutcome::Covered);
        assert_eq!(stack.reconcile(&NoRegions, ms(150)), ReconcileOutcome::Tolerated);
        assert_eq!(stack.reconcile(&NoRegions, ms(190)), ReconcileOutcome::Pruned(1));
    }

    #[test]
    fn no_grace_credit_prunes_immediately() {
        // No covered observation has ever happened, so the first miss prunes.
        let mut stack = TooltipStack::with_grace_period(ms(100));
        open_chain(&mut stack, &["A"]);
        assert_eq!(stack.reconcile(&NoRegions, ms(5)), ReconcileOutcome::Pruned(1));
    }

    #[test]
    fn anchor_hit_preserves_its_level() {
        let mut stack = TooltipStack::with_grace_period(MS);
        open_chain(&mut stack, &["A", "B"]);
        // Hovering an unrelated anchor at level 1 keeps level 0 but prunes
        // level 1 once grace lapses.
        let regions = OneRegion(Held::Anchor(String::from("other"), 1));
        assert_eq!(stack.reconcile(&regions, ms(100)), ReconcileOutcome::Pruned(1));
        assert_eq!(stack.len(), 1);
        assert_level_indexed(&stack);
    }

    #[test]
    fn anchor_matching_next_record_is_bumped() {
        let mut stack = TooltipStack::with_grace_period(MS);
        open_chain(&mut stack, &["A", "B"]);
        // The anchor at level 1 is the one that spawned B: target covers the
        // whole stack, nothing is pruned.
        let regions = OneRegion(Held::Anchor(String::from("B"), 1));
        assert_eq!(stack.reconcile(&regions, ms(100)), ReconcileOutcome::Covered);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn panel_hit_keeps_chain_through_it() {
        let mut stack = TooltipStack::with_grace_period(MS);
        open_chain(&mut stack, &["A", "B", "C"]);
        let middle = stack.get(1).map(|r| r.id).expect("record exists");
        let regions = OneRegion(Held::Panel(middle));
        // Inside panel 1: keep 0..=1, prune 2 once grace lapses.
        assert_eq!(stack.reconcile(&regions, ms(100)), ReconcileOutcome::Pruned(1));
        assert_eq!(stack.len(), 2);
        assert_level_indexed(&stack);
    }

    #[test]
    fn stale_panel_id_counts_as_miss() {
        let mut stack = TooltipStack::with_grace_period(MS);
        open_chain(&mut stack, &["A"]);
        let stale = TooltipId::from_raw(u64::MAX);
        let regions = OneRegion(Held::Panel(stale));
        assert_eq!(stack.reconcile(&regions, ms(100)), ReconcileOutcome::Pruned(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_reconcile_is_covered() {
        let mut stack = TooltipStack::new();
        assert_eq!(stack.reconcile(&NoRegions, ms(7)), ReconcileOutcome::Covered);
    }

    #[test]
    fn clear_resets_records_and_hysteresis() {
        let mut stack = TooltipStack::new();
        open_chain(&mut stack, &["A"]);
        let _ = stack.reconcile(&OneRegion(Held::Anchor(String::from("A"), 0)), ms(50));
        stack.clear();
        assert!(stack.is_empty());
        // No grace credit survives a clear.
        open_chain(&mut stack, &["B"]);
        assert_eq!(stack.reconcile(&NoRegions, ms(51)), ReconcileOutcome::Pruned(1));
    }

    #[test]
    fn invariant_holds_across_interleaved_operations() {
        let mut stack = TooltipStack::with_grace_period(ms(10));
        open_chain(&mut stack, &["A", "B", "C"]);
        assert_level_indexed(&stack);
        let _ = stack.open("X", "def", rect(), 1);
        assert_level_indexed(&stack);
        let _ = stack.reconcile(&OneRegion(Held::Anchor(String::from("A"), 0)), ms(0));
        assert_level_indexed(&stack);
        let _ = stack.reconcile(&NoRegions, ms(100));
        assert_level_indexed(&stack);
        let _ = stack.open("Y", "def", rect(), 9);
        assert_level_indexed(&stack);
    }
}
