// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gloss Overlay: a nested-tooltip stack controller with grace-period
//! hysteresis.
//!
//! ## Overview
//!
//! This crate keeps the ordered stack of currently open tooltips correct
//! under continuous, asynchronous pointer movement. It does not render
//! anchors or popups and it does not own hit testing; it consumes hit
//! answers through the [`RegionLookup`](crate::types::RegionLookup) contract
//! and exposes the stack read-only for a render layer to project into
//! visible popups.
//!
//! - [`TooltipStack`](crate::stack::TooltipStack) — the controller. Hover
//!   triggers call [`open`](crate::stack::TooltipStack::open); a periodic
//!   callback drives [`reconcile`](crate::stack::TooltipStack::reconcile),
//!   which prunes the stack against what is under the pointer. A fixed grace
//!   period tolerates brief excursions, such as crossing the visual gap
//!   between an anchor and its popup, so nested chains do not collapse
//!   mid-flight.
//! - [`RegionMap`](crate::regions::RegionMap) — a ready-made
//!   `RegionLookup` for hosts without their own hit testing: registered
//!   rectangles with z-order and generational keys.
//! - `adapters::lexicon` (feature `lexicon_adapter`) — helpers that
//!   tokenize an open tooltip's definition into render-ready nested-anchor
//!   spans using `gloss_lexicon`.
//!
//! ## Invariant
//!
//! After every operation the stack is dense and level-indexed:
//! `records()[i].level == i`. Level 0 tooltips come from inline anchors;
//! a level N + 1 tooltip comes from a term inside the level N panel.
//!
//! ## Cadence
//!
//! Pointer samples ([`set_pointer`](crate::stack::TooltipStack::set_pointer))
//! may arrive at raw movement frequency; reconcile is meant to run on the
//! host's preferred low-latency timer (typically once per display refresh)
//! so pruning work is bounded regardless of pointer event rate. Time is
//! caller-supplied, so any monotonic clock works and tests can script it.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use gloss_overlay::regions::{RegionKind, RegionMap};
//! use gloss_overlay::stack::TooltipStack;
//! use gloss_overlay::types::{OpenOutcome, ReconcileOutcome};
//! use kurbo::{Point, Rect};
//!
//! let mut regions = RegionMap::new();
//! let anchor_rect = Rect::new(10.0, 10.0, 80.0, 26.0);
//! regions.insert(
//!     anchor_rect,
//!     0,
//!     RegionKind::Anchor { term: "Advantage".to_string(), level: 0 },
//! );
//!
//! let mut stack = TooltipStack::new();
//! let OpenOutcome::Opened(id) = stack.open("Advantage", "Roll twice.", anchor_rect, 0)
//! else {
//!     unreachable!()
//! };
//! // The render layer shows the panel below the anchor and registers it.
//! regions.insert(
//!     Rect::new(10.0, 30.0, 200.0, 90.0),
//!     100,
//!     RegionKind::Panel { id },
//! );
//!
//! // Over the anchor: the whole chain is covered.
//! stack.set_pointer(Point::new(40.0, 20.0));
//! assert_eq!(
//!     stack.reconcile(&regions, Duration::from_millis(16)),
//!     ReconcileOutcome::Covered,
//! );
//!
//! // Crossing the 4px gap between anchor and panel: tolerated by the
//! // grace period, then covered again inside the panel.
//! stack.set_pointer(Point::new(40.0, 28.0));
//! assert_eq!(
//!     stack.reconcile(&regions, Duration::from_millis(32)),
//!     ReconcileOutcome::Tolerated,
//! );
//! stack.set_pointer(Point::new(40.0, 50.0));
//! assert_eq!(
//!     stack.reconcile(&regions, Duration::from_millis(48)),
//!     ReconcileOutcome::Covered,
//! );
//! assert_eq!(stack.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod regions;
pub mod stack;
pub mod types;

pub use regions::{RegionFlags, RegionKey, RegionKind, RegionMap};
pub use stack::{DEFAULT_GRACE_PERIOD, TooltipStack};
pub use types::{
    NoRegions, OpenOutcome, ReconcileOutcome, RegionHit, RegionLookup, TooltipId, TooltipRecord,
};
