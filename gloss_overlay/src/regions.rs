// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made region registry: flat store of screen rectangles with
//! z-ordered point hit testing.
//!
//! Hosts with their own hit-testing machinery implement
//! [`RegionLookup`](crate::types::RegionLookup) directly; this registry is
//! for hosts without one. The render layer registers each visible term
//! anchor and each open panel surface, updates rectangles as layout changes,
//! and removes entries when the corresponding element goes away.
//!
//! The store is a linear scan. Tooltip overlays involve a handful of regions
//! at a time, so a spatial index would be overhead without payoff.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::{RegionHit, RegionLookup, TooltipId};

/// Generational handle for registered regions.
///
/// Slots are reused after removal; the generation distinguishes a reused slot
/// from the entry a stale key referred to, so stale keys are ignored rather
/// than aliasing a different region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionKey(u32, u32);

impl RegionKey {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Region keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Flags controlling whether a region participates in hit testing.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct RegionFlags: u8 {
        /// The region is currently shown.
        const VISIBLE = 0b01;
        /// The region answers point queries.
        const PICKABLE = 0b10;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// What a registered region represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// An inline term anchor that opens a tooltip at `level`.
    Anchor {
        /// The term the anchor would open.
        term: String,
        /// The level a tooltip opened from this anchor would occupy.
        level: usize,
    },
    /// The interactive surface of the open tooltip with this id.
    Panel {
        /// Id of the tooltip record whose panel this is.
        id: TooltipId,
    },
}

#[derive(Clone, Debug)]
struct Entry {
    rect: Rect,
    z: i32,
    flags: RegionFlags,
    kind: RegionKind,
}

/// One slot. The generation outlives the entry so a reused slot never hands
/// out a key that aliases a stale one.
#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Flat registry of interactive regions with z-ordered point lookup.
///
/// # Example
///
/// ```rust
/// use gloss_overlay::regions::{RegionKind, RegionMap};
/// use gloss_overlay::types::{RegionHit, RegionLookup};
/// use kurbo::{Point, Rect};
///
/// let mut map = RegionMap::new();
/// map.insert(
///     Rect::new(10.0, 10.0, 90.0, 26.0),
///     0,
///     RegionKind::Anchor { term: "Advantage".to_string(), level: 0 },
/// );
/// assert_eq!(
///     map.hit(Point::new(20.0, 20.0)),
///     Some(RegionHit::Anchor { term: "Advantage", level: 0 }),
/// );
/// assert_eq!(map.hit(Point::new(200.0, 20.0)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegionMap {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
}

impl RegionMap {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region with default flags. Returns a stable handle.
    ///
    /// Higher `z` is nearer to the user; panels are typically registered with
    /// a `z` above the prose anchors they cover.
    pub fn insert(&mut self, rect: Rect, z: i32, kind: RegionKind) -> RegionKey {
        self.insert_with_flags(rect, z, RegionFlags::default(), kind)
    }

    /// Register a region with explicit flags.
    pub fn insert_with_flags(
        &mut self,
        rect: Rect,
        z: i32,
        flags: RegionFlags,
        kind: RegionKind,
    ) -> RegionKey {
        let entry = Entry {
            rect,
            z,
            flags,
            kind,
        };
        if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation += 1;
            slot.entry = Some(entry);
            RegionKey::new(idx, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 1,
                entry: Some(entry),
            });
            RegionKey::new(self.slots.len() - 1, 1)
        }
    }

    /// Move or resize a region. Stale keys are ignored.
    pub fn update_rect(&mut self, key: RegionKey, rect: Rect) {
        if let Some(e) = self.entry_mut(key) {
            e.rect = rect;
        }
    }

    /// Replace a region's flags. Stale keys are ignored.
    pub fn set_flags(&mut self, key: RegionKey, flags: RegionFlags) {
        if let Some(e) = self.entry_mut(key) {
            e.flags = flags;
        }
    }

    /// Unregister a region. Stale keys are ignored.
    pub fn remove(&mut self, key: RegionKey) {
        if self.entry_mut(key).is_some() {
            self.slots[key.idx()].entry = None;
            self.free_list.push(key.idx());
        }
    }

    /// Drop every region.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.entry.is_some()).count()
    }

    /// True if no regions are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry_mut(&mut self, key: RegionKey) -> Option<&mut Entry> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.entry.as_mut()
    }
}

impl RegionLookup for RegionMap {
    /// Returns the topmost visible, pickable region containing `pt`.
    ///
    /// Higher `z` wins; among equal `z`, the more recently inserted entry
    /// wins, so a panel drawn over an anchor shadows it deterministically.
    fn hit(&self, pt: Point) -> Option<RegionHit<'_>> {
        let mut best: Option<(usize, i32)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(e) = slot.entry.as_ref() else {
                continue;
            };
            if !e.flags.contains(RegionFlags::VISIBLE | RegionFlags::PICKABLE) {
                continue;
            }
            if !e.rect.contains(pt) {
                continue;
            }
            match best {
                Some((_, z_best)) if e.z < z_best => {}
                // Equal z: the newer entry wins. Slot order alone is not
                // insertion order once slots get reused, so compare the
                // generation first and fall back to the slot index.
                Some((best_idx, z_best)) if e.z == z_best => {
                    let b = &self.slots[best_idx];
                    let newer = slot.generation > b.generation
                        || (slot.generation == b.generation && idx > best_idx);
                    if newer {
                        best = Some((idx, e.z));
                    }
                }
                _ => best = Some((idx, e.z)),
            }
        }
        let (idx, _) = best?;
        match &self.slots[idx].entry.as_ref()?.kind {
            RegionKind::Anchor { term, level } => Some(RegionHit::Anchor {
                term,
                level: *level,
            }),
            RegionKind::Panel { id } => Some(RegionHit::Panel { id: *id }),
        }
    }
}
