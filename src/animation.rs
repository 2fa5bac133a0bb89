//! Entrance animations for page sections.
//!
//! A [`Variants`] table describes what an element looks like while it is
//! still waiting to be scrolled into view (`hidden`) and once it has been
//! revealed (`visible`), together with the timing of the transition between
//! the two. [`Reveal`] tracks which of those two states an element is in as
//! viewport observations arrive.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Visual properties of one named state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in pixels, positive is further down.
    pub y: f64,
    pub scale: Option<f64>,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, y: 0.0, scale: None };

    pub const fn faded(y: f64) -> Self {
        Pose { opacity: 0.0, y, scale: None }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Pose { scale: Some(scale), ..self }
    }

    fn transform(&self) -> String {
        match self.scale {
            Some(scale) => format!("translateY({}px) scale({})", self.y, scale),
            None => format!("translateY({}px)", self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds before the transition starts, before any stagger is added.
    pub delay: f64,
    /// `None` leaves the browser's default timing function in place.
    pub ease: Option<Ease>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presence {
    Hidden,
    Visible,
}

/// A two-state variant table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
    /// Extra delay per ordinal, in seconds.
    pub stagger: f64,
}

impl Variants {
    /// Fade in while sliding up by `y` pixels.
    pub const fn fade_up(y: f64, duration: f64) -> Self {
        Variants {
            hidden: Pose::faded(y),
            visible: Pose::REST,
            transition: Transition { duration, delay: 0.0, ease: Some(Ease::EaseOut) },
            stagger: 0.0,
        }
    }

    pub const fn staggered(self, stagger: f64) -> Self {
        Variants { stagger, ..self }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Variants {
            transition: Transition { delay, ..self.transition },
            ..self
        }
    }

    pub const fn scaled_from(self, scale: f64) -> Self {
        Variants {
            hidden: self.hidden.with_scale(scale),
            visible: self.visible.with_scale(1.0),
            ..self
        }
    }

    pub const fn eased(self, ease: Option<Ease>) -> Self {
        Variants {
            transition: Transition { ease, ..self.transition },
            ..self
        }
    }

    pub fn pose(&self, presence: Presence) -> &Pose {
        match presence {
            Presence::Hidden => &self.hidden,
            Presence::Visible => &self.visible,
        }
    }

    /// Timing for the element at position `custom` in a staggered group.
    pub fn transition_for(&self, custom: u32) -> Transition {
        Transition {
            delay: self.transition.delay + f64::from(custom) * self.stagger,
            ..self.transition
        }
    }

    /// Inline CSS for an element in `presence`.
    ///
    /// The transition is emitted in both states, so the first style change
    /// after mount always animates from the hidden baseline.
    pub fn style(&self, presence: Presence, custom: u32) -> String {
        let pose = self.pose(presence);
        let timing = self.transition_for(custom);
        let ease = timing.ease.map(Ease::css).unwrap_or("ease");

        let timed = |property: &str| {
            format!("{} {}s {} {}s", property, timing.duration, ease, timing.delay)
        };

        format!(
            "opacity: {}; transform: {}; transition: {}, {};",
            pose.opacity,
            pose.transform(),
            timed("opacity"),
            timed("transform"),
        )
    }
}

/// When an element counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Latch on the first reveal and ignore everything afterwards.
    pub once: bool,
    /// Fraction of the element that must be visible. Zero means any pixel.
    pub amount: f64,
}

impl Viewport {
    pub const fn once(amount: f64) -> Self {
        Viewport { once: true, amount }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::once(0.2)
    }
}

/// Hidden/visible state of one element, driven by viewport observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    viewport: Viewport,
    presence: Presence,
}

impl Reveal {
    pub fn new(viewport: Viewport) -> Self {
        Reveal { viewport, presence: Presence::Hidden }
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// True once a `once` element has been revealed; no further
    /// observations can change it.
    pub fn is_settled(&self) -> bool {
        self.viewport.once && self.presence == Presence::Visible
    }

    /// Feed one observation. Returns whether the presence changed.
    ///
    /// The observer's threshold already equals `amount`, but browsers also
    /// deliver an initial entry on `observe()` and entries for every
    /// threshold crossing, some of which report `is_intersecting` with a
    /// ratio below `amount`. Checking the ratio here keeps those from
    /// revealing the element early.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.is_settled() {
            return false;
        }

        let in_view = intersecting && ratio >= self.viewport.amount;
        let next = match (in_view, self.viewport.once) {
            (true, _) => Presence::Visible,
            (false, true) => self.presence,
            (false, false) => Presence::Hidden,
        };

        let changed = next != self.presence;
        self.presence = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: Variants = Variants::fade_up(40.0, 0.6).staggered(0.2);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stagger_delay_is_ordinal_times_step() {
        for i in 0..6u32 {
            let delay = CARDS.transition_for(i).delay;
            assert!(approx(delay, f64::from(i) * 0.2), "ordinal {i} got {delay}");
        }
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let v = Variants::fade_up(20.0, 0.7).delayed(0.2).staggered(0.1);
        assert!(approx(v.transition_for(0).delay, 0.2));
        assert!(approx(v.transition_for(3).delay, 0.5));
    }

    #[test]
    fn hidden_style_starts_transparent_and_offset() {
        let css = CARDS.style(Presence::Hidden, 0);
        assert!(css.starts_with("opacity: 0; transform: translateY(40px);"));
    }

    #[test]
    fn visible_style_rests_with_staggered_timing() {
        let css = CARDS.style(Presence::Visible, 2);
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("translateY(0px)"));
        assert!(css.contains("opacity 0.6s ease-out 0.4"));
    }

    #[test]
    fn scaled_variants_carry_scale_in_both_states() {
        let v = Variants::fade_up(20.0, 0.6).scaled_from(0.9);
        assert!(v.style(Presence::Hidden, 0).contains("scale(0.9)"));
        assert!(v.style(Presence::Visible, 0).contains("scale(1)"));
    }

    #[test]
    fn missing_ease_falls_back_to_browser_default() {
        let v = Variants::fade_up(0.0, 0.6).eased(None);
        assert!(v.style(Presence::Visible, 0).contains("opacity 0.6s ease 0s"));
    }

    #[test]
    fn reveal_starts_hidden() {
        assert_eq!(Reveal::new(Viewport::default()).presence(), Presence::Hidden);
    }

    #[test]
    fn reveal_waits_for_threshold() {
        let mut reveal = Reveal::new(Viewport::once(0.2));
        assert!(!reveal.observe(0.1, true));
        assert_eq!(reveal.presence(), Presence::Hidden);
        assert!(reveal.observe(0.25, true));
        assert_eq!(reveal.presence(), Presence::Visible);
    }

    #[test]
    fn once_reveal_stays_visible_after_leaving() {
        let mut reveal = Reveal::new(Viewport::once(0.2));
        reveal.observe(0.5, true);
        assert!(reveal.is_settled());
        assert!(!reveal.observe(0.0, false));
        assert_eq!(reveal.presence(), Presence::Visible);
    }

    #[test]
    fn repeating_reveal_hides_again() {
        let mut reveal = Reveal::new(Viewport { once: false, amount: 0.2 });
        reveal.observe(0.5, true);
        assert!(reveal.observe(0.0, false));
        assert_eq!(reveal.presence(), Presence::Hidden);
        assert!(!reveal.is_settled());
    }

    #[test]
    fn zero_amount_reveals_on_any_intersection() {
        let mut reveal = Reveal::new(Viewport::once(0.0));
        assert!(!reveal.observe(0.0, false));
        assert!(reveal.observe(0.0, true));
    }
}
