//! Deterministic animation math shared with the embedded runtime script.
//!
//! The generated site animates two things: stat counters that count up from
//! zero when they scroll into view, and carousels that advance on a timer.
//! Both are progressive enhancements — the HTML always contains the final
//! values and every slide — but the math that drives them lives here as pure
//! functions so it can be tested, and `static/site.js` implements the exact
//! same formulas.
//!
//! ## Count-up
//!
//! [`count_up_value`] is a monotonic function of elapsed time using an
//! ease-out cubic curve. Given the same `(target, duration, elapsed)` triple
//! it always produces the same displayed value: `0` at `t = 0`, exactly
//! `target` at `t >= duration`, floor-quantized in between.
//!
//! ## Carousels
//!
//! [`Carousel`] is the index state machine behind testimonial and image
//! carousels. Next/prev wrap modulo the item count; an autoplay tick is the
//! same transition as "next". A single-item carousel stays at index 0 and
//! reports its controls as disabled. Manual navigation does not pause
//! autoplay — the timer keeps ticking from the new position.

/// Displayed counter value after `elapsed_ms` of a count-up animation.
///
/// Ease-out cubic: `1 - (1 - p)^3` over normalized progress `p`. Intermediate
/// values are floored to whole display steps; the final frame is exactly
/// `target`. A zero duration snaps straight to the target.
pub fn count_up_value(target: f64, duration_ms: u32, elapsed_ms: u32) -> f64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (eased * target).floor()
}

/// Carousel index state: a current position into a fixed-length item list.
///
/// Constructed per rendered carousel to decide the initial slide, indicator
/// markup and whether controls are enabled. The same arithmetic runs in the
/// browser for live advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// A carousel over `len` items, starting at index 0.
    ///
    /// Returns `None` for an empty item list — callers guard on the
    /// collection before constructing (an empty section renders nothing).
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether prev/next controls should be shown. A one-item carousel has
    /// nowhere to go, so its controls are disabled rather than rendered as
    /// visible no-ops.
    pub fn controls_enabled(&self) -> bool {
        self.len > 1
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Step back one slide, wrapping past the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to a slide (indicator click). Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// One autoplay interval elapsing — identical to [`Self::next`].
    pub fn tick(&mut self) {
        self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_starts_at_zero() {
        assert_eq!(count_up_value(5000.0, 2000, 0), 0.0);
    }

    #[test]
    fn count_up_ends_exactly_at_target() {
        assert_eq!(count_up_value(5000.0, 2000, 2000), 5000.0);
        assert_eq!(count_up_value(5000.0, 2000, 9999), 5000.0);
    }

    #[test]
    fn count_up_is_monotonic() {
        let mut last = -1.0;
        for t in (0..=2000).step_by(16) {
            let v = count_up_value(5000.0, 2000, t);
            assert!(v >= last, "value decreased at t={t}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn count_up_is_reproducible() {
        let a = count_up_value(1234.0, 1500, 700);
        let b = count_up_value(1234.0, 1500, 700);
        assert_eq!(a, b);
    }

    #[test]
    fn count_up_ease_out_front_loads_progress() {
        // Ease-out covers more than half the distance by the halfway point.
        let halfway = count_up_value(1000.0, 2000, 1000);
        assert!(halfway > 500.0, "halfway value {halfway} not front-loaded");
    }

    #[test]
    fn count_up_zero_duration_snaps_to_target() {
        assert_eq!(count_up_value(42.0, 0, 0), 42.0);
    }

    #[test]
    fn carousel_rejects_empty() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn carousel_reports_its_length() {
        let c = Carousel::new(3).unwrap();
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
    }

    #[test]
    fn carousel_next_wraps() {
        let mut c = Carousel::new(3).unwrap();
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn carousel_prev_wraps_backwards() {
        let mut c = Carousel::new(3).unwrap();
        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn carousel_autoplay_lands_on_n_mod_k() {
        // After n full intervals the index is (initial + n) mod k.
        for k in 1..=5 {
            let mut c = Carousel::new(k).unwrap();
            for _ in 0..7 {
                c.tick();
            }
            assert_eq!(c.index(), 7 % k, "k={k}");
        }
    }

    #[test]
    fn single_item_carousel_stays_put_with_disabled_controls() {
        let mut c = Carousel::new(1).unwrap();
        assert!(!c.controls_enabled());
        c.next();
        c.prev();
        c.tick();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(4).unwrap();
        c.go_to(2);
        assert_eq!(c.index(), 2);
        c.go_to(9);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn manual_navigation_then_tick_continues_from_new_position() {
        let mut c = Carousel::new(5).unwrap();
        c.go_to(3);
        c.tick();
        assert_eq!(c.index(), 4);
    }
}
