// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full wiring: glossary, region map, controller, and the lexicon adapter.
//!
//! Hover a term in root prose, open its tooltip, then hover a term inside
//! that tooltip's definition to nest a second one; finally switch branches at
//! level 0 and watch the deeper chain drop.
//!
//! Run:
//! - `cargo run -p gloss_demos --example overlay_nested`

use core::time::Duration;

use gloss_lexicon::Glossary;
use gloss_overlay::adapters::lexicon::{NestedSpan, nested_spans};
use gloss_overlay::{OpenOutcome, RegionKind, RegionMap, TooltipStack};
use kurbo::{Point, Rect};

fn open_and_register(
    stack: &mut TooltipStack,
    regions: &mut RegionMap,
    glossary: &Glossary,
    term: &str,
    anchor: Rect,
    level: usize,
) {
    let definition = glossary.definition(term).expect("term is defined");
    let OpenOutcome::Opened(id) = stack.open(term, definition, anchor, level) else {
        panic!("open declined for {term}");
    };
    // Panel drawn below its anchor; panels stack above prose in z.
    let panel = Rect::new(anchor.x0, anchor.y1 + 6.0, anchor.x0 + 260.0, anchor.y1 + 90.0);
    regions.insert(panel, 100 + level as i32, RegionKind::Panel { id });
    // Register an anchor region for every nested term the panel will render.
    let mut x = panel.x0 + 8.0;
    for span in nested_spans(glossary, &stack.records()[level]) {
        if let NestedSpan::Anchor { term, level } = span {
            let w = 9.0 * term.len() as f64;
            regions.insert(
                Rect::new(x, panel.y0 + 8.0, x + w, panel.y0 + 24.0),
                200 + level as i32,
                RegionKind::Anchor { term, level },
            );
            x += w + 12.0;
        }
    }
}

fn main() {
    let glossary = Glossary::from_entries([
        (
            "Opportunity Attack".to_string(),
            "A reaction Attack Roll provoked by movement.".to_string(),
        ),
        (
            "Attack Roll".to_string(),
            "Roll a d20 and add your attack modifier.".to_string(),
        ),
        ("d20".to_string(), "A twenty-sided die.".to_string()),
        ("reaction".to_string(), "One instant action per round.".to_string()),
    ]);

    let mut stack = TooltipStack::new();
    let mut regions = RegionMap::new();

    // Level 0: hover "Opportunity Attack" in root prose.
    open_and_register(
        &mut stack,
        &mut regions,
        &glossary,
        "Opportunity Attack",
        Rect::new(40.0, 40.0, 200.0, 58.0),
        0,
    );
    // Its definition nests further terms one level deeper.
    let spans = nested_spans(&glossary, &stack.records()[0]);
    println!("level-0 panel spans: {spans:?}");
    assert!(spans.contains(&NestedSpan::Anchor {
        term: "Attack Roll".to_string(),
        level: 1
    }));

    // Level 1: hover "Attack Roll" inside the level-0 panel.
    open_and_register(
        &mut stack,
        &mut regions,
        &glossary,
        "Attack Roll",
        Rect::new(120.0, 72.0, 219.0, 88.0),
        1,
    );
    // Level 2: hover "d20" inside the level-1 panel.
    open_and_register(
        &mut stack,
        &mut regions,
        &glossary,
        "d20",
        Rect::new(130.0, 140.0, 160.0, 156.0),
        2,
    );

    println!("open chain:");
    for r in stack.records() {
        println!("  level {} -> {} (id {:?})", r.level, r.term, r.id);
    }
    assert_eq!(stack.len(), 3);

    // Settle inside the level-2 panel to establish grace credit.
    stack.set_pointer(Point::new(200.0, 200.0));
    let covered = stack.reconcile(&regions, Duration::from_millis(0));
    println!("on level-2 panel: {covered:?}");

    // Move up into the level-1 panel: level 2 survives the grace period,
    // then drops.
    stack.set_pointer(Point::new(130.0, 100.0));
    let tolerated = stack.reconcile(&regions, Duration::from_millis(50));
    let pruned = stack.reconcile(&regions, Duration::from_millis(200));
    println!("on level-1 panel: {tolerated:?} then {pruned:?}, open: {}", stack.len());
    assert_eq!(stack.len(), 2);

    // Branch switch: opening "reaction" at level 1 replaces the old branch.
    open_and_register(
        &mut stack,
        &mut regions,
        &glossary,
        "reaction",
        Rect::new(200.0, 72.0, 270.0, 88.0),
        1,
    );
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.records()[1].term, "reaction");
    println!("after branch switch: {:?}", stack.top().map(|r| r.term.as_str()));
}
