// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the overlay: tooltip records, region hits, lookups, and
//! operation outcomes.
//!
//! ## Overview
//!
//! These types describe the controller protocol and its inputs/outputs.
//! They are referenced by the [`stack`](crate::stack) and implemented or
//! consumed by the host UI layer.

use alloc::string::String;

use kurbo::{Point, Rect};

/// Identifier for an open tooltip.
///
/// Assigned by [`TooltipStack::open`](crate::stack::TooltipStack::open) from a
/// monotonic counter, so ids are unique for the lifetime of the stack and are
/// never reused after a record is pruned. A stale id therefore never aliases a
/// later tooltip.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipId(pub(crate) u64);

impl TooltipId {
    /// The raw id value, e.g. for embedding in host-side element metadata.
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Rebuild an id from a raw value previously obtained via
    /// [`to_raw`](Self::to_raw).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// One open tooltip on the stack.
///
/// Created by [`TooltipStack::open`](crate::stack::TooltipStack::open) and
/// destroyed by pruning; owned exclusively by the stack and exposed to the
/// render layer read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRecord {
    /// Unique identifier, stable for the record's lifetime.
    pub id: TooltipId,
    /// The defined term this tooltip explains.
    pub term: String,
    /// The definition text shown in the panel. May itself contain further
    /// recognized terms, which spawn tooltips at the next level.
    pub definition: String,
    /// Bounding rectangle of the triggering anchor, as supplied by the
    /// caller. Forwarded for the render layer's placement logic; the
    /// controller does not interpret it.
    pub anchor: Rect,
    /// Nesting depth. Invariant: equals the record's index on the stack.
    pub level: usize,
}

/// What the host's hit testing found under a point.
///
/// Returned by [`RegionLookup::hit`] and consumed by
/// [`TooltipStack::reconcile`](crate::stack::TooltipStack::reconcile).
/// Borrows from the lookup so a query allocates nothing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegionHit<'a> {
    /// An inline term anchor: either in root prose (level 0) or inside an
    /// open tooltip panel (that panel's level + 1).
    Anchor {
        /// The term the anchor would open.
        term: &'a str,
        /// The level a tooltip opened from this anchor would occupy.
        level: usize,
    },
    /// The interactive surface of an open tooltip panel.
    Panel {
        /// Id of the tooltip record whose panel this is.
        id: TooltipId,
    },
}

/// Resolve the topmost interactive region under a point.
///
/// This is the overlay's only view of the host's spatial state: any UI
/// toolkit's own hit-testing mechanism can implement it, and the crate ships
/// [`RegionMap`](crate::regions::RegionMap) as a ready-made implementation
/// for hosts without one.
///
/// Returning `None` is a normal answer ("pointer is over nothing
/// interactive"), not a failure.
pub trait RegionLookup {
    /// Returns the topmost region containing `pt`, if any.
    fn hit(&self, pt: Point) -> Option<RegionHit<'_>>;
}

/// A no-op region source used where no hit testing is wired up yet.
///
/// All queries return `None`, so every reconcile computes a target level of
/// zero and the stack collapses once the grace period lapses.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRegions;

impl RegionLookup for NoRegions {
    #[inline]
    fn hit(&self, _pt: Point) -> Option<RegionHit<'_>> {
        None
    }
}

/// Result of [`TooltipStack::open`](crate::stack::TooltipStack::open).
///
/// The declined variants are expected, frequent interaction patterns rather
/// than faults, which is why they are outcomes and not errors; callers that
/// only care about side effects can ignore the value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use = "open reports whether a record was actually added"]
pub enum OpenOutcome {
    /// A fresh record was pushed; its id is returned.
    Opened(TooltipId),
    /// The same term was already open at this level; nothing changed.
    AlreadyOpen,
    /// The parent record has the same term; opening was refused to avoid an
    /// immediately self-referential nested popup.
    SelfReference,
}

/// Result of [`TooltipStack::reconcile`](crate::stack::TooltipStack::reconcile).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReconcileOutcome {
    /// The pointer rests on or below the deepest open content; the hysteresis
    /// timestamp was refreshed and nothing was pruned.
    Covered,
    /// The pointer is outside the open chain, but still within the grace
    /// period; the stack was left alone.
    Tolerated,
    /// The grace period had lapsed; the stack was truncated. Carries the
    /// number of records dropped.
    Pruned(usize),
}
