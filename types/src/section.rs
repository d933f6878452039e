//! Identity of the page sections, in scroll order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Projects => 1,
            Self::Experience => 2,
            Self::Skills => 3,
            Self::Contact => 4,
        }
    }

    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "top",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Percentage the viewport is shrunk by on each edge before testing
    /// whether the section is in view.
    #[must_use]
    pub fn root_margin_percent(self) -> u16 {
        match self {
            Self::Hero => 0,
            Self::Projects => 15,
            Self::Experience | Self::Skills | Self::Contact => 10,
        }
    }

    /// Only the hero waits for the intro before its entrance.
    #[must_use]
    pub fn waits_for_intro(self) -> bool {
        matches!(self, Self::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_scroll_order() {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn anchors_are_unique() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
    }
}
