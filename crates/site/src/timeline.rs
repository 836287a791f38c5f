//! Career timeline ordering and small text helpers for the landing page.

use portfolio_host::Parcours;

const PERIOD_SEPARATOR: char = '⟶';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Calendar date, ordered chronologically.
pub struct StartDate {
    year: u32,
    month: u32,
    day: u32,
}

/// Parses the `DD/MM/YYYY` start of a period label such as `01/09/2021 ⟶ 30/06/2023`.
pub fn start_date(period: &str) -> Option<StartDate> {
    let start = period.split(PERIOD_SEPARATOR).next()?.trim();
    let mut parts = start.split('/').map(|part| part.trim().parse::<u32>().ok());
    let (day, month, year) = (parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(StartDate { year, month, day })
}

/// Orders entries oldest first; undated entries follow in backend order.
pub fn sort_timeline(entries: &[Parcours]) -> Vec<Parcours> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| match start_date(&entry.period) {
        Some(date) => (false, Some(date)),
        None => (true, None),
    });
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon family for a timeline entry.
pub enum TimelineKind {
    /// Studies or training.
    Education,
    /// Employment.
    Work,
}

impl TimelineKind {
    /// Classifies an entry by its position label.
    pub fn of(entry: &Parcours) -> Self {
        let position = entry.position.to_lowercase();
        if position.contains("etudiant") || position.contains("formation") {
            Self::Education
        } else {
            Self::Work
        }
    }

    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Work => "work",
        }
    }
}

/// Truncates `text` to `max_chars` characters, appending `...` when anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: u64, position: &str, period: &str) -> Parcours {
        Parcours {
            id,
            position: position.to_string(),
            description: String::new(),
            period: period.to_string(),
        }
    }

    fn ids(entries: &[Parcours]) -> Vec<u64> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn parses_the_start_of_a_period() {
        assert_eq!(
            start_date("01/09/2021 ⟶ 30/06/2023"),
            Some(StartDate {
                year: 2021,
                month: 9,
                day: 1
            })
        );
        assert!(start_date("15/03/2020").is_some());
        assert_eq!(start_date("Since 2020"), None);
        assert_eq!(start_date("2020/01/01 ⟶ today"), None);
        assert_eq!(start_date(""), None);
    }

    #[test]
    fn timeline_is_oldest_first_with_undated_entries_last() {
        let entries = vec![
            entry(1, "Developer", "01/02/2023 ⟶ Today"),
            entry(2, "Intern", "sometime"),
            entry(3, "Etudiant", "01/09/2019 ⟶ 30/06/2022"),
            entry(4, "Freelance", "15/01/2023 ⟶ 31/01/2023"),
            entry(5, "Volunteer", "n/a"),
        ];
        assert_eq!(ids(&sort_timeline(&entries)), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn classifies_education_and_work() {
        assert_eq!(
            TimelineKind::of(&entry(1, "Étudiant en Master", "")),
            TimelineKind::Work
        );
        assert_eq!(
            TimelineKind::of(&entry(1, "Etudiant en Master", "")),
            TimelineKind::Education
        );
        assert_eq!(
            TimelineKind::of(&entry(1, "Formation Rust", "")),
            TimelineKind::Education
        );
        assert_eq!(TimelineKind::of(&entry(1, "Backend engineer", "")), TimelineKind::Work);
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("éèàù", 2), "éè...");
        assert_eq!(excerpt("abc", 3), "abc");
    }
}
