//! Viewport geometry for scroll-driven behavior, split so the decisions
//! are plain arithmetic over synthetic rectangles and the hooks only
//! glue them to window scroll events.
//!
//! Two trackers live here: a one-shot "has this section ever been seen"
//! latch that drives entrance animations, and the navigation highlighter
//! that follows whichever section currently crosses a band near the
//! middle of the viewport.

use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;

/// Default lead distance: a section counts as visible once its top edge
/// is this many pixels inside the viewport.
pub const REVEAL_MARGIN: f64 = 100.0;

/// Horizontal band expressed as fractions of viewport height. Keeping it
/// near the center avoids highlight flicker from sections that merely
/// graze the top or bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

pub const NAV_BAND: Band = Band {
    top: 0.40,
    bottom: 0.45,
};

pub fn entered_view(rect_top: f64, viewport_height: f64, margin: f64) -> bool {
    viewport_height > 0.0 && rect_top <= viewport_height - margin
}

pub fn intersects_band(rect_top: f64, rect_bottom: f64, viewport_height: f64, band: Band) -> bool {
    let band_top = viewport_height * band.top;
    let band_bottom = viewport_height * band.bottom;
    rect_top < band_bottom && rect_bottom > band_top
}

pub fn in_viewport(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_bottom > 0.0 && rect_top < viewport_height
}

/// Decides which navigation section is highlighted. Fed one scan of
/// per-section band flags per scroll event; the section that entered the
/// band most recently wins, and the answer never goes back to "none"
/// once set.
pub struct SectionTracker {
    was_inside: Vec<bool>,
    active: Option<usize>,
}

impl SectionTracker {
    pub fn new(len: usize) -> Self {
        Self {
            was_inside: vec![false; len],
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Returns the new active index when the scan changed it.
    pub fn update(&mut self, inside: &[bool]) -> Option<usize> {
        debug_assert_eq!(inside.len(), self.was_inside.len());
        let previous = self.active;

        for (idx, (&now, &before)) in inside.iter().zip(&self.was_inside).enumerate() {
            if now && !before {
                self.active = Some(idx);
            }
        }

        // The holder left the band: hand over to any section still inside
        // it, otherwise keep the last answer.
        if let Some(current) = self.active {
            if !inside.get(current).copied().unwrap_or(false) {
                if let Some(still_inside) = inside.iter().rposition(|&flag| flag) {
                    self.active = Some(still_inside);
                }
            }
        }

        self.was_inside.clear();
        self.was_inside.extend_from_slice(inside);

        if self.active == previous {
            None
        } else {
            self.active
        }
    }
}

/// One-shot visibility latch for a section id. Once true it stays true
/// for the rest of the session, so entrance animations play exactly
/// once. A missing element simply never latches.
#[hook]
pub fn use_section_reveal(id: &'static str, margin: f64) -> bool {
    let revealed = use_state(|| false);
    let latched = use_mut_ref(|| false);

    let check: Rc<dyn Fn()> = {
        let revealed = revealed.clone();
        let latched = latched.clone();
        Rc::new(move || {
            if *latched.borrow() {
                return;
            }
            if let Some(rect) = dom::section_rect(id) {
                if entered_view(rect.top(), dom::viewport_height(), margin) {
                    *latched.borrow_mut() = true;
                    revealed.set(true);
                }
            }
        })
    };

    {
        // Sections already on screen at mount should not wait for the
        // first scroll event.
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: web_sys::Event| check());

    *revealed
}

/// Navigation highlighter over a fixed ordered id list.
#[hook]
pub fn use_active_section(ids: &'static [&'static str]) -> Option<&'static str> {
    let active = use_state(|| None::<&'static str>);
    let tracker = use_mut_ref(|| SectionTracker::new(ids.len()));

    {
        let active = active.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            let viewport_height = dom::viewport_height();
            let inside: Vec<bool> = ids
                .iter()
                .map(|id| {
                    dom::section_rect(id)
                        .map(|rect| {
                            intersects_band(rect.top(), rect.bottom(), viewport_height, NAV_BAND)
                        })
                        .unwrap_or(false)
                })
                .collect();
            if let Some(idx) = tracker.borrow_mut().update(&inside) {
                active.set(Some(ids[idx]));
            }
        });
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 900.0;

    #[test]
    fn entered_view_respects_margin() {
        assert!(entered_view(700.0, VIEWPORT, 100.0));
        assert!(entered_view(800.0, VIEWPORT, 100.0));
        assert!(!entered_view(801.0, VIEWPORT, 100.0));
        assert!(!entered_view(100.0, 0.0, 100.0));
    }

    #[test]
    fn band_intersection_is_strict_overlap() {
        // Band spans 360..405 at a 900px viewport.
        assert!(intersects_band(300.0, 400.0, VIEWPORT, NAV_BAND));
        assert!(intersects_band(404.0, 1200.0, VIEWPORT, NAV_BAND));
        assert!(!intersects_band(0.0, 360.0, VIEWPORT, NAV_BAND));
        assert!(!intersects_band(405.0, 1200.0, VIEWPORT, NAV_BAND));
    }

    #[test]
    fn in_viewport_excludes_fully_off_screen() {
        assert!(in_viewport(-50.0, 200.0, VIEWPORT));
        assert!(!in_viewport(-400.0, -1.0, VIEWPORT));
        assert!(!in_viewport(901.0, 1500.0, VIEWPORT));
    }

    #[test]
    fn tracker_reports_sections_in_scroll_order() {
        let mut tracker = SectionTracker::new(3);
        let mut reported = Vec::new();

        // Synthetic pass over A, B, C with gaps where nothing crosses
        // the band.
        let scans: &[[bool; 3]] = &[
            [true, false, false],
            [true, false, false],
            [false, false, false],
            [false, true, false],
            [false, false, false],
            [false, false, true],
        ];
        for scan in scans {
            if let Some(idx) = tracker.update(scan) {
                reported.push(idx);
            }
        }

        assert_eq!(reported, vec![0, 1, 2]);
        assert_eq!(tracker.active(), Some(2));
    }

    #[test]
    fn tracker_prefers_most_recent_entrant() {
        let mut tracker = SectionTracker::new(2);
        assert_eq!(tracker.update(&[true, false]), Some(0));
        // B enters while A is still inside the band: last write wins.
        assert_eq!(tracker.update(&[true, true]), Some(1));
        // B leaves; A is still there and takes the highlight back.
        assert_eq!(tracker.update(&[true, false]), Some(0));
    }

    #[test]
    fn tracker_keeps_answer_when_band_is_empty() {
        let mut tracker = SectionTracker::new(2);
        assert_eq!(tracker.update(&[false, true]), Some(1));
        assert_eq!(tracker.update(&[false, false]), None);
        assert_eq!(tracker.active(), Some(1));
    }

    #[test]
    fn tracker_starts_silent() {
        let mut tracker = SectionTracker::new(2);
        assert_eq!(tracker.update(&[false, false]), None);
        assert_eq!(tracker.active(), None);
    }
}
