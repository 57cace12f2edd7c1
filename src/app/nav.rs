use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::config::ScrollTuning;
use crate::content::SectionId;

/// Viewports at or under this width get the narrow extra offset and the
/// compact header layout.
pub const NARROW_BREAKPOINT: u16 = 80;

const DEFAULT_NARROW_EXTRA_OFFSET: u16 = 8;
const DEFAULT_WIDE_EXTRA_OFFSET: u16 = 16;
const DEFAULT_CORRECTION_DELAY: Duration = Duration::from_millis(380);

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn is_narrow(self) -> bool {
        self.width <= NARROW_BREAKPOINT
    }
}

/// Navigator tunables. The correction delay is an empirical constant tuned
/// against re-flow timing; override it through the `[scroll]` config table
/// rather than editing it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub narrow_extra_offset: u16,
    pub wide_extra_offset: u16,
    pub correction_delay: Duration,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            narrow_extra_offset: DEFAULT_NARROW_EXTRA_OFFSET,
            wide_extra_offset: DEFAULT_WIDE_EXTRA_OFFSET,
            correction_delay: DEFAULT_CORRECTION_DELAY,
        }
    }
}

impl ScrollOptions {
    pub fn from_config(tuning: Option<&ScrollTuning>) -> Self {
        let defaults = Self::default();
        let Some(tuning) = tuning else {
            return defaults;
        };
        Self {
            behavior: tuning.behavior.unwrap_or(defaults.behavior),
            narrow_extra_offset: tuning
                .narrow_extra_offset
                .unwrap_or(defaults.narrow_extra_offset),
            wide_extra_offset: tuning
                .wide_extra_offset
                .unwrap_or(defaults.wide_extra_offset),
            correction_delay: tuning
                .correction_delay_ms
                .map_or(defaults.correction_delay, Duration::from_millis),
        }
    }

    pub fn extra_offset(&self, narrow: bool) -> u16 {
        if narrow {
            self.narrow_extra_offset
        } else {
            self.wide_extra_offset
        }
    }
}

/// Scroll-top target for a section whose top sits `element_top_in_viewport`
/// rows from the top of the viewport: the section lands just below the
/// sticky header, never above row zero.
pub fn compute_target_top(
    scroll_y: usize,
    element_top_in_viewport: isize,
    nav_height: u16,
    extra_offset: u16,
) -> usize {
    let raw = scroll_y as isize + element_top_in_viewport
        - nav_height as isize
        - extra_offset as isize;
    usize::try_from(raw.max(0)).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCorrection {
    section: SectionId,
    due: Instant,
}

/// Scroll position of the virtual page, including the in-flight animation
/// and the deferred corrective snap. All waits are deadlines checked on
/// Tick; superseding input clears them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    behavior: ScrollBehavior,
    animation: Option<usize>,
    correction: Option<PendingCorrection>,
}

impl ScrollState {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self {
            offset: 0,
            behavior,
            animation: None,
            correction: None,
        }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_pending_correction(&self) -> bool {
        self.correction.is_some()
    }

    /// Scrolls to `target` honoring the current behavior: smooth arms the
    /// animation, instant lands immediately and drops any animation.
    pub fn scroll_to(&mut self, target: usize) {
        match self.behavior {
            ScrollBehavior::Smooth => self.animation = Some(target),
            ScrollBehavior::Instant => {
                self.offset = target;
                self.animation = None;
            }
        }
    }

    /// Clears the in-flight animation and the pending corrective snap.
    /// Manual scrolling supersedes programmatic navigation.
    pub fn cancel_pending(&mut self) {
        self.animation = None;
        self.correction = None;
    }

    pub fn scroll_by(&mut self, delta: isize, max_offset: usize) {
        self.cancel_pending();
        let next = if delta > 0 {
            self.offset.saturating_add(delta.unsigned_abs())
        } else {
            self.offset.saturating_sub(delta.unsigned_abs())
        };
        self.offset = next.min(max_offset);
    }

    pub fn jump_to(&mut self, offset: usize, max_offset: usize) {
        self.cancel_pending();
        self.offset = offset.min(max_offset);
    }

    /// One animation step per tick, easing out toward the target.
    pub fn advance_animation(&mut self) {
        let Some(target) = self.animation else {
            return;
        };
        let remaining = target as isize - self.offset as isize;
        if remaining == 0 {
            self.animation = None;
            return;
        }
        let step = (remaining.abs() / 3).max(1);
        if remaining > 0 {
            self.offset = self.offset.saturating_add(step.unsigned_abs());
        } else {
            self.offset = self.offset.saturating_sub(step.unsigned_abs());
        }
        if self.offset == target {
            self.animation = None;
        }
    }

    pub fn clamp(&mut self, max_offset: usize) {
        self.offset = self.offset.min(max_offset);
    }
}

/// Scrolls the page so `section` lands below the sticky header.
///
/// Returns `false` with no side effect when the section is absent from the
/// current document; the caller is expected to fall back to a full page
/// load of `/<locale>#<section>`. On success the animated scroll starts and
/// a corrective snap is armed `options.correction_delay` later, because the
/// document can re-flow while the animation is still in flight.
pub fn navigate<F>(
    scroll: &mut ScrollState,
    section: SectionId,
    section_top: F,
    viewport: Viewport,
    nav_height: u16,
    options: &ScrollOptions,
    now: Instant,
) -> bool
where
    F: Fn(SectionId) -> Option<usize>,
{
    let Some(top) = section_top(section) else {
        return false;
    };

    let element_top_in_viewport = top as isize - scroll.offset as isize;
    let target = compute_target_top(
        scroll.offset,
        element_top_in_viewport,
        nav_height,
        options.extra_offset(viewport.is_narrow()),
    );

    scroll.behavior = options.behavior;
    scroll.scroll_to(target);
    scroll.correction = Some(PendingCorrection {
        section,
        due: now + options.correction_delay,
    });
    true
}

/// Runs the corrective snap once its deadline has passed. Geometry is read
/// freshly through `section_top` and the viewport, never reused from the
/// original navigation; the snap itself is forced instantaneous and the
/// prior behavior restored afterward so it can never animate.
pub fn process_correction<F>(
    scroll: &mut ScrollState,
    section_top: F,
    viewport: Viewport,
    nav_height: u16,
    options: &ScrollOptions,
    now: Instant,
) where
    F: Fn(SectionId) -> Option<usize>,
{
    let Some(pending) = scroll.correction else {
        return;
    };
    if now < pending.due {
        return;
    }
    scroll.correction = None;

    let Some(top) = section_top(pending.section) else {
        return;
    };
    let element_top_in_viewport = top as isize - scroll.offset as isize;
    let target = compute_target_top(
        scroll.offset,
        element_top_in_viewport,
        nav_height,
        options.extra_offset(viewport.is_narrow()),
    );

    let previous = scroll.behavior;
    scroll.behavior = ScrollBehavior::Instant;
    scroll.scroll_to(target);
    scroll.behavior = previous;
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Viewport = Viewport {
        width: 120,
        height: 40,
    };
    const NARROW: Viewport = Viewport {
        width: 60,
        height: 30,
    };

    #[test]
    fn target_math_narrow_viewport() {
        // scroll_y 100, element 500 below the viewport top, header 64,
        // narrow extra offset 8
        assert_eq!(compute_target_top(100, 500, 64, 8), 528);
    }

    #[test]
    fn target_math_wide_viewport() {
        assert_eq!(compute_target_top(100, 500, 64, 16), 520);
    }

    #[test]
    fn target_never_negative() {
        assert_eq!(compute_target_top(0, 4, 64, 16), 0);
        assert_eq!(compute_target_top(2, -30, 0, 0), 0);
    }

    #[test]
    fn navigate_missing_section_is_a_no_op() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        scroll.offset = 42;
        let before = scroll.clone();

        let found = navigate(
            &mut scroll,
            SectionId::Contact,
            |_| None,
            WIDE,
            2,
            &ScrollOptions::default(),
            Instant::now(),
        );

        assert!(!found);
        assert_eq!(scroll, before);
    }

    #[test]
    fn navigate_arms_animation_and_correction() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        let found = navigate(
            &mut scroll,
            SectionId::Skills,
            |_| Some(200),
            WIDE,
            2,
            &ScrollOptions::default(),
            Instant::now(),
        );

        assert!(found);
        assert!(scroll.is_animating());
        assert!(scroll.has_pending_correction());
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn instant_behavior_lands_immediately() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        let options = ScrollOptions {
            behavior: ScrollBehavior::Instant,
            ..ScrollOptions::default()
        };
        navigate(
            &mut scroll,
            SectionId::Skills,
            |_| Some(200),
            NARROW,
            3,
            &options,
            Instant::now(),
        );

        // 200 - 3 (header) - 8 (narrow extra offset)
        assert_eq!(scroll.offset, 189);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn animation_converges_on_target() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        navigate(
            &mut scroll,
            SectionId::Metrics,
            |_| Some(100),
            WIDE,
            2,
            &ScrollOptions::default(),
            Instant::now(),
        );

        for _ in 0..200 {
            scroll.advance_animation();
        }
        assert_eq!(scroll.offset, 100 - 2 - 16);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn correction_waits_for_its_deadline() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        let start = Instant::now();
        let options = ScrollOptions::default();
        navigate(&mut scroll, SectionId::Skills, |_| Some(200), WIDE, 2, &options, start);

        process_correction(&mut scroll, |_| Some(200), WIDE, 2, &options, start);
        assert!(scroll.has_pending_correction());
    }

    #[test]
    fn correction_reads_fresh_geometry_and_restores_behavior() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        let start = Instant::now();
        let options = ScrollOptions::default();
        navigate(&mut scroll, SectionId::Skills, |_| Some(200), WIDE, 2, &options, start);

        // The document re-flowed mid-animation: the section now sits at 260.
        let after = start + options.correction_delay;
        process_correction(&mut scroll, |_| Some(260), WIDE, 2, &options, after);

        assert_eq!(scroll.offset, 260 - 2 - 16);
        assert!(!scroll.is_animating());
        assert!(!scroll.has_pending_correction());
        assert_eq!(scroll.behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn correction_skips_sections_that_disappeared() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        let start = Instant::now();
        let options = ScrollOptions::default();
        navigate(&mut scroll, SectionId::Skills, |_| Some(200), WIDE, 2, &options, start);
        let offset_before = scroll.offset;

        let after = start + options.correction_delay;
        process_correction(&mut scroll, |_| None, WIDE, 2, &options, after);

        assert_eq!(scroll.offset, offset_before);
        assert!(!scroll.has_pending_correction());
    }

    #[test]
    fn manual_scroll_cancels_animation_and_correction() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        navigate(
            &mut scroll,
            SectionId::Skills,
            |_| Some(200),
            WIDE,
            2,
            &ScrollOptions::default(),
            Instant::now(),
        );

        scroll.scroll_by(1, 500);
        assert!(!scroll.is_animating());
        assert!(!scroll.has_pending_correction());
        assert_eq!(scroll.offset, 1);
    }

    #[test]
    fn scroll_by_clamps_at_both_ends() {
        let mut scroll = ScrollState::new(ScrollBehavior::Smooth);
        scroll.scroll_by(-5, 100);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_by(500, 100);
        assert_eq!(scroll.offset, 100);
    }

    #[test]
    fn options_merge_config_overrides() {
        let tuning = ScrollTuning {
            narrow_extra_offset: Some(2),
            wide_extra_offset: None,
            correction_delay_ms: Some(500),
            behavior: Some(ScrollBehavior::Instant),
        };
        let options = ScrollOptions::from_config(Some(&tuning));
        assert_eq!(options.narrow_extra_offset, 2);
        assert_eq!(options.wide_extra_offset, 16);
        assert_eq!(options.correction_delay, Duration::from_millis(500));
        assert_eq!(options.behavior, ScrollBehavior::Instant);
    }
}
