//! Entrance timing. Every animated list staggers its children by a fixed
//! step after a base delay; the CSS keyframes live in `input.css`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base: f32,
    pub step: f32,
}

impl Stagger {
    pub const fn new(base: f32, step: f32) -> Self {
        Self { base, step }
    }

    /// Delay in seconds for the `index`th child.
    pub fn delay(&self, index: usize) -> f32 {
        self.base + self.step * index as f32
    }

    /// Same stagger, pushed back by the `outer`th step of another one.
    pub fn after(&self, outer: Stagger, index: usize) -> Stagger {
        Stagger::new(self.base + outer.delay(index), self.step)
    }

    pub fn style(&self, index: usize) -> String {
        delay_style(self.delay(index))
    }
}

pub fn delay_style(seconds: f32) -> String {
    format!("animation-delay: {seconds:.2}s;")
}

pub const EXPERIENCE_CARDS: Stagger = Stagger::new(0.0, 0.3);
pub const SKILL_PILLS: Stagger = Stagger::new(0.0, 0.1);
pub const CONTACT_CARDS: Stagger = Stagger::new(0.0, 0.2);
pub const BALLOON_BULLETS: Stagger = Stagger::new(0.5, 0.1);
pub const BALLOON_SKILLS: Stagger = Stagger::new(0.7, 0.05);
pub const HERO_ITEMS: Stagger = Stagger::new(0.2, 0.2);

pub const ROADMAP_STEPS: Stagger = Stagger::new(0.0, 0.2);
/// Chips of a step, offset by that step's own delay.
pub const ROADMAP_CHIPS: Stagger = Stagger::new(0.5, 0.1);
pub const ROADMAP_BADGE: Stagger = Stagger::new(0.8, 0.2);
pub const ROADMAP_CONNECTOR: Stagger = Stagger::new(1.0, 0.2);

/// Floating controls fade in one after another once the page settles.
pub const THEME_TOGGLE_DELAY: f32 = 1.0;
pub const EASTER_EGG_DELAY: f32 = 2.0;
pub const SCROLL_TOP_DELAY: f32 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_linear_delay() {
        assert!(close(EXPERIENCE_CARDS.delay(0), 0.0));
        assert!(close(EXPERIENCE_CARDS.delay(3), 0.9));
        assert!(close(BALLOON_BULLETS.delay(2), 0.7));
        assert!(close(BALLOON_SKILLS.delay(4), 0.9));
    }

    #[test]
    fn test_nested_delay() {
        // second chip of the third step
        let chips = ROADMAP_CHIPS.after(ROADMAP_STEPS, 2);
        assert!(close(chips.delay(1), 0.4 + 0.1 + 0.5));
        assert!(close(ROADMAP_BADGE.delay(2), 1.2));
        assert!(close(ROADMAP_CONNECTOR.delay(0), 1.0));
    }

    #[test]
    fn test_style() {
        assert_eq!(SKILL_PILLS.style(3), "animation-delay: 0.30s;");
        assert_eq!(delay_style(2.0), "animation-delay: 2.00s;");
    }
}
