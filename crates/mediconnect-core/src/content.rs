//! Fixed page copy shared by every front end.

/// Example queries offered as one-click drafts
pub const PROMPT_IDEAS: [&str; 5] = [
    "I have a cold with sneezing and sore throat.",
    "I feel acidity and stomach bloating after food.",
    "I am stressed and cannot sleep at night.",
    "There is a rash with itching on my hand.",
    "I have fever with body ache since last night.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub note: &'static str,
}

pub const BANNER: Banner = Banner {
    eyebrow: "MediConnect",
    title: "Homeopathic Query Agent",
    subtitle: "Friendly answers in simple language for common homeopathic care.",
    note: "Not for emergencies. Visit a doctor for serious or lasting symptoms.",
};

pub const HOW_IT_WORKS: [&str; 4] = [
    "Type your concern in simple words.",
    "Get 3–5 clear steps you can follow.",
    "See when you should meet a doctor.",
    "Easy language, homeopathic-focused guidance.",
];

pub const CARE_REMINDERS: [&str; 4] = [
    "Keep a note of symptom start time and severity.",
    "Do not stop prescribed medicines without medical advice.",
    "Drink enough water unless your doctor advised otherwise.",
    "For chest pain, breathing trouble, or fainting, seek emergency care.",
];

pub const INPUT_PLACEHOLDER: &str = "Describe your symptom or question in simple words";

pub const MICRO_NOTE: &str =
    "Informational use only. For severe or lasting problems, please contact a qualified doctor.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChatSession, KnowledgeBase};

    #[test]
    fn test_every_prompt_idea_gets_a_care_plan() {
        let kb = KnowledgeBase::builtin();
        for idea in PROMPT_IDEAS {
            assert!(
                crate::match_category(&kb, idea).is_some(),
                "prompt idea has no category: {idea}"
            );
        }
    }

    #[test]
    fn test_prompt_idea_only_fills_draft() {
        let mut session = ChatSession::default();
        session.set_draft(PROMPT_IDEAS[1]);
        assert_eq!(session.draft(), "I feel acidity and stomach bloating after food.");
        assert_eq!(session.messages().len(), 1);
    }
}
