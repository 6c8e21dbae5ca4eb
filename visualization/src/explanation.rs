//! Problem explanation panel
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::Serialize;

use dsaviz_core::trace::source::Explanation;

/// Collapsible section identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    SimpleExplanation,
    CoreIdea,
    Walkthrough,
    PseudoCode,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::SimpleExplanation,
        SectionId::CoreIdea,
        SectionId::Walkthrough,
        SectionId::PseudoCode,
    ];

    /// Section by its 1-based display number
    pub fn from_number(number: usize) -> Option<SectionId> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::SimpleExplanation => "Simple Explanation",
            SectionId::CoreIdea => "Core Idea",
            SectionId::Walkthrough => "Step-by-Step Walkthrough",
            SectionId::PseudoCode => "Pseudo-code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub body: String,
    pub open: bool,
}

/// Explanation view model; only open/closed state changes after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationPanel {
    pub category: String,
    pub sections: Vec<Section>,
}

impl ExplanationPanel {
    pub fn new(explanation: &Explanation) -> Self {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| Section {
                id,
                title: id.title(),
                body: Self::body(explanation, id),
                open: id == SectionId::SimpleExplanation,
            })
            .collect();
        Self {
            category: explanation.problem_category.clone(),
            sections,
        }
    }

    fn body(explanation: &Explanation, id: SectionId) -> String {
        match id {
            SectionId::SimpleExplanation => explanation.simple_explanation.clone(),
            SectionId::CoreIdea => explanation.core_idea.clone(),
            SectionId::Walkthrough => explanation
                .step_by_step_walkthrough
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{}. {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n"),
            SectionId::PseudoCode => explanation.pseudo_code.clone(),
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn is_open(&self, id: SectionId) -> bool {
        self.section(id).map_or(false, |s| s.open)
    }

    /// Flips a section; returns its new state
    pub fn toggle(&mut self, id: SectionId) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.open = !section.open;
                section.open
            }
            None => false,
        }
    }

    pub fn open_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Catalogue, TraceSource};

    fn panel() -> ExplanationPanel {
        let problem = Catalogue::builtin().unwrap().load("climbing-stairs").unwrap();
        ExplanationPanel::new(&problem.explanation)
    }

    #[test]
    fn test_simple_explanation_open_by_default() {
        let panel = panel();
        assert!(panel.is_open(SectionId::SimpleExplanation));
        assert!(!panel.is_open(SectionId::PseudoCode));
        assert_eq!(panel.open_sections().count(), 1);
        assert!(!panel.category.is_empty());
    }

    #[test]
    fn test_toggle_is_pure_view_state() {
        let mut panel = panel();
        let before = panel.section(SectionId::CoreIdea).unwrap().body.clone();
        assert!(panel.toggle(SectionId::CoreIdea));
        assert!(!panel.toggle(SectionId::CoreIdea));
        assert_eq!(panel.section(SectionId::CoreIdea).unwrap().body, before);
    }

    #[test]
    fn test_sections_by_number() {
        assert_eq!(SectionId::from_number(1), Some(SectionId::SimpleExplanation));
        assert_eq!(SectionId::from_number(4), Some(SectionId::PseudoCode));
        assert_eq!(SectionId::from_number(0), None);
        assert_eq!(SectionId::from_number(5), None);
    }

    #[test]
    fn test_walkthrough_is_numbered() {
        let panel = panel();
        let body = &panel.section(SectionId::Walkthrough).unwrap().body;
        assert!(body.starts_with("1. "));
        assert!(body.lines().all(|line| line.split(". ").next().unwrap().parse::<usize>().is_ok()));
    }
}
