// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grace-period hysteresis on a scripted pointer trace.
//!
//! Register an anchor and its panel with a pixel gap between them, then walk
//! the pointer across the gap and away, reconciling on a fixed cadence.
//!
//! Run:
//! - `cargo run -p gloss_demos --example overlay_hover`

use core::time::Duration;

use gloss_overlay::{OpenOutcome, RegionKind, RegionMap, TooltipStack};
use kurbo::{Point, Rect};

fn main() {
    let mut regions = RegionMap::new();
    let anchor_rect = Rect::new(100.0, 100.0, 180.0, 118.0);
    regions.insert(
        anchor_rect,
        0,
        RegionKind::Anchor {
            term: "Advantage".to_string(),
            level: 0,
        },
    );

    let mut stack = TooltipStack::new();
    let OpenOutcome::Opened(id) = stack.open(
        "Advantage",
        "Roll two d20 and use the higher roll.",
        anchor_rect,
        0,
    ) else {
        unreachable!("nothing is open yet");
    };
    // The render layer places the panel 6px below the anchor and registers it.
    regions.insert(
        Rect::new(100.0, 124.0, 360.0, 220.0),
        100,
        RegionKind::Panel { id },
    );

    // 60Hz reconcile cadence; pointer trace: anchor → gap → panel → far away.
    let frames: &[(u64, Point)] = &[
        (0, Point::new(140.0, 110.0)),   // on the anchor
        (16, Point::new(140.0, 120.0)),  // in the gap
        (32, Point::new(140.0, 121.0)),  // still in the gap
        (48, Point::new(140.0, 160.0)),  // inside the panel
        (64, Point::new(600.0, 400.0)),  // gone
        (80, Point::new(600.0, 400.0)),
        (160, Point::new(600.0, 400.0)), // grace period lapsed
    ];

    for &(ms, pt) in frames {
        stack.set_pointer(pt);
        let outcome = stack.reconcile(&regions, Duration::from_millis(ms));
        println!("t={ms:>3}ms pointer={pt:?} -> {outcome:?} (open: {})", stack.len());
    }

    // The gap crossing was tolerated, leaving the panel reachable; only the
    // final departure pruned the stack.
    assert!(stack.is_empty());
}
