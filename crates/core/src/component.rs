use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// One reusable building block of the design system.
///
/// The set is closed: every variant has exactly one snippet template in the
/// component catalog, and no other names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    // Form
    Input,
    PasswordInput,
    EmailInput,
    SearchInput,
    Textarea,
    Button,
    SecondaryButton,
    SubmitButton,
    Checkbox,
    Radio,
    Select,
    // Layout
    ContentCard,
    Panel,
    Divider,
    // Navigation
    Breadcrumbs,
    Tabs,
    // Feedback
    Banner,
    SectionMessage,
    Badge,
    // User interface
    Avatar,
    Tooltip,
    Dialog,
    // Interactive
    Accordion,
    Switch,
    Slider,
    // Data display
    Table,
    Progress,
    Pagination,
}

impl ComponentId {
    /// Number of known components.
    pub const COUNT: usize = 28;

    /// Every component, in catalog definition order.
    pub const ALL: [ComponentId; Self::COUNT] = [
        ComponentId::Input,
        ComponentId::PasswordInput,
        ComponentId::EmailInput,
        ComponentId::SearchInput,
        ComponentId::Textarea,
        ComponentId::Button,
        ComponentId::SecondaryButton,
        ComponentId::SubmitButton,
        ComponentId::Checkbox,
        ComponentId::Radio,
        ComponentId::Select,
        ComponentId::ContentCard,
        ComponentId::Panel,
        ComponentId::Divider,
        ComponentId::Breadcrumbs,
        ComponentId::Tabs,
        ComponentId::Banner,
        ComponentId::SectionMessage,
        ComponentId::Badge,
        ComponentId::Avatar,
        ComponentId::Tooltip,
        ComponentId::Dialog,
        ComponentId::Accordion,
        ComponentId::Switch,
        ComponentId::Slider,
        ComponentId::Table,
        ComponentId::Progress,
        ComponentId::Pagination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentId::Input => "Input",
            ComponentId::PasswordInput => "PasswordInput",
            ComponentId::EmailInput => "EmailInput",
            ComponentId::SearchInput => "SearchInput",
            ComponentId::Textarea => "Textarea",
            ComponentId::Button => "Button",
            ComponentId::SecondaryButton => "SecondaryButton",
            ComponentId::SubmitButton => "SubmitButton",
            ComponentId::Checkbox => "Checkbox",
            ComponentId::Radio => "Radio",
            ComponentId::Select => "Select",
            ComponentId::ContentCard => "ContentCard",
            ComponentId::Panel => "Panel",
            ComponentId::Divider => "Divider",
            ComponentId::Breadcrumbs => "Breadcrumbs",
            ComponentId::Tabs => "Tabs",
            ComponentId::Banner => "Banner",
            ComponentId::SectionMessage => "SectionMessage",
            ComponentId::Badge => "Badge",
            ComponentId::Avatar => "Avatar",
            ComponentId::Tooltip => "Tooltip",
            ComponentId::Dialog => "Dialog",
            ComponentId::Accordion => "Accordion",
            ComponentId::Switch => "Switch",
            ComponentId::Slider => "Slider",
            ComponentId::Table => "Table",
            ComponentId::Progress => "Progress",
            ComponentId::Pagination => "Pagination",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentId {
    type Err = SuggestError;

    /// Exact, case-sensitive match against the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentId::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SuggestError::UnknownComponent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_unique_and_complete() {
        let mut seen = std::collections::HashSet::new();
        for c in ComponentId::ALL {
            assert!(seen.insert(c), "duplicate {c}");
        }
        assert_eq!(seen.len(), ComponentId::COUNT);
    }

    #[test]
    fn from_str_round_trips_every_name() {
        for c in ComponentId::ALL {
            assert_eq!(c.as_str().parse::<ComponentId>().unwrap(), c);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("input".parse::<ComponentId>().is_err());
        assert!("Carousel".parse::<ComponentId>().is_err());
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&ComponentId::PasswordInput).unwrap();
        assert_eq!(json, "\"PasswordInput\"");
        let parsed: ComponentId = serde_json::from_str("\"SubmitButton\"").unwrap();
        assert_eq!(parsed, ComponentId::SubmitButton);
    }
}
