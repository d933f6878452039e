//! Resume records.
//!
//! The data is compiled in (see [`resume`]) and never mutated. Items carry a
//! stable id where the page needs to address them individually.

mod data;

use serde::Serialize;

pub use data::RESUME;

/// Shown when the profile has no location note.
pub const DEFAULT_LOCATION: &str = "Bangkok";

/// Shown when a project has no badges.
pub const DEFAULT_BADGE: &str = "Project";

/// The compiled-in resume.
#[must_use]
pub fn resume() -> &'static Resume {
    &RESUME
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resume {
    pub profile: Profile,
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub skills: Skills,
    pub timeline: &'static [TimelineEntry],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location_note: Option<&'static str>,
    pub summary: &'static str,
    pub current: CurrentRole,
    pub contacts: Contacts,
    pub quick_stats: &'static [QuickStat],
}

impl Profile {
    #[must_use]
    pub fn location(&self) -> &'static str {
        self.location_note.unwrap_or(DEFAULT_LOCATION)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentRole {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contacts {
    pub phone: &'static str,
    pub email: &'static str,
    pub line: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub projects: &'static [ExperienceProject],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceProject {
    pub name: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub theme: ProjectTheme,
    pub stack: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub badges: &'static [&'static str],
}

impl Project {
    #[must_use]
    pub fn primary_badge(&self) -> &'static str {
        self.badges.first().copied().unwrap_or(DEFAULT_BADGE)
    }
}

/// Hex colors for a project card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectTheme {
    pub bg: &'static str,
    pub fg: &'static str,
    pub accent: &'static str,
    pub accent2: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub role: &'static str,
    pub theme: TimelineTheme,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineTheme {
    pub name: &'static str,
    pub bg: &'static str,
    pub fg: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skills {
    pub programming: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub databases: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Database,
    Tools,
}

impl SkillCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frameworks => "Frameworks",
            Self::Database => "Database",
            Self::Tools => "Tools",
        }
    }

    /// Level of the first item and the step subtracted per following item.
    fn level_curve(self) -> (u8, u8) {
        match self {
            Self::Languages | Self::Tools => (85, 3),
            Self::Frameworks => (90, 4),
            Self::Database => (80, 5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub name: &'static str,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub items: Vec<SkillLevel>,
}

impl Skills {
    /// Skills grouped for display, with levels descending by list position.
    #[must_use]
    pub fn groups(&self) -> Vec<SkillGroup> {
        [
            (SkillCategory::Languages, self.programming),
            (SkillCategory::Frameworks, self.frameworks),
            (SkillCategory::Database, self.databases),
            (SkillCategory::Tools, self.tools),
        ]
        .into_iter()
        .map(|(category, names)| {
            let (start, step) = category.level_curve();
            let items = names
                .iter()
                .copied()
                .enumerate()
                .map(|(i, name)| SkillLevel {
                    name,
                    level: start.saturating_sub(step.saturating_mul(i.min(255) as u8)),
                })
                .collect();
            SkillGroup { category, items }
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Email,
    Phone,
    Line,
    GitHub,
    LinkedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    pub href: String,
    /// Text placed on the clipboard by the copy action. Links have none.
    pub copy: Option<&'static str>,
}

impl Contacts {
    #[must_use]
    pub fn items(&self) -> Vec<ContactItem> {
        let phone_href: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        vec![
            ContactItem {
                kind: ContactKind::Email,
                label: "Email",
                value: self.email,
                href: format!("mailto:{}", self.email),
                copy: Some(self.email),
            },
            ContactItem {
                kind: ContactKind::Phone,
                label: "Phone",
                value: self.phone,
                href: format!("tel:{phone_href}"),
                copy: Some(self.phone),
            },
            ContactItem {
                kind: ContactKind::Line,
                label: "LINE",
                value: self.line,
                href: "#".to_string(),
                copy: Some(self.line),
            },
            ContactItem {
                kind: ContactKind::GitHub,
                label: "GitHub",
                value: handle_from_url(self.github),
                href: self.github.to_string(),
                copy: None,
            },
            ContactItem {
                kind: ContactKind::LinkedIn,
                label: "LinkedIn",
                value: handle_from_url(self.linkedin),
                href: self.linkedin.to_string(),
                copy: None,
            },
        ]
    }

    #[must_use]
    pub fn item(&self, kind: ContactKind) -> Option<ContactItem> {
        self.items().into_iter().find(|item| item.kind == kind)
    }
}

fn handle_from_url(url: &'static str) -> &'static str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}
