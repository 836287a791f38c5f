//! Landing-page sections and wheel-driven navigation between them.

/// Minimum delay between two wheel-driven section moves.
pub const WHEEL_THROTTLE_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// One full-height landing-page section.
pub enum Section {
    /// Presentation, contact, and skills.
    #[default]
    Introduction,
    /// Career timeline.
    Parcours,
    /// Project gallery.
    Projects,
}

impl Section {
    /// Sections in display order.
    pub const ALL: [Section; 3] = [Section::Introduction, Section::Parcours, Section::Projects];

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Parcours => "Career",
            Self::Projects => "Projects",
        }
    }

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Parcours => "parcours",
            Self::Projects => "projects",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    /// Following section, clamped at the last one.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Preceding section, clamped at the first one.
    pub fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Current section plus the wheel throttle.
pub struct SectionNavigator {
    current: Section,
    last_wheel_move_ms: Option<f64>,
}

impl SectionNavigator {
    /// Returns the active section.
    pub fn current(&self) -> Section {
        self.current
    }

    /// Jumps to `section` directly (navbar). Does not touch the wheel throttle.
    pub fn select(&mut self, section: Section) {
        self.current = section;
    }

    /// Applies one wheel event at `now_ms`.
    ///
    /// Returns the new section when the event moved the view. Events inside the throttle window,
    /// with zero delta, or pushing past either end are ignored and do not restart the window.
    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<Section> {
        if let Some(last) = self.last_wheel_move_ms {
            if now_ms - last < WHEEL_THROTTLE_MS {
                return None;
            }
        }

        let target = if delta_y > 0.0 {
            self.current.next()
        } else if delta_y < 0.0 {
            self.current.previous()
        } else {
            return None;
        };
        if target == self.current {
            return None;
        }

        self.current = target;
        self.last_wheel_move_ms = Some(now_ms);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn next_and_previous_clamp_at_the_ends() {
        assert_eq!(Section::Introduction.previous(), Section::Introduction);
        assert_eq!(Section::Introduction.next(), Section::Parcours);
        assert_eq!(Section::Parcours.next(), Section::Projects);
        assert_eq!(Section::Projects.next(), Section::Projects);
        assert_eq!(Section::Projects.previous(), Section::Parcours);
    }

    #[test]
    fn wheel_moves_are_throttled() {
        let mut nav = SectionNavigator::default();
        assert_eq!(nav.wheel(120.0, 0.0), Some(Section::Parcours));
        assert_eq!(nav.wheel(120.0, 400.0), None);
        assert_eq!(nav.current(), Section::Parcours);
        assert_eq!(nav.wheel(120.0, 1000.0), Some(Section::Projects));
        assert_eq!(nav.wheel(-50.0, 2500.0), Some(Section::Parcours));
    }

    #[test]
    fn ignored_wheel_events_do_not_restart_the_window() {
        let mut nav = SectionNavigator::default();
        assert_eq!(nav.wheel(-10.0, 0.0), None);
        assert_eq!(nav.wheel(0.0, 10.0), None);
        assert_eq!(nav.wheel(10.0, 20.0), Some(Section::Parcours));
    }

    #[test]
    fn navbar_selection_bypasses_the_throttle() {
        let mut nav = SectionNavigator::default();
        nav.wheel(1.0, 0.0);
        nav.select(Section::Projects);
        assert_eq!(nav.current(), Section::Projects);
        assert_eq!(nav.wheel(-1.0, 100.0), None);
        assert_eq!(nav.wheel(-1.0, 1200.0), Some(Section::Parcours));
    }
}
