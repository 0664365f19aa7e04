//! Turns a free-text query into reply lines.
//!
//! Matching is a literal substring scan over the lowercased query. It is not
//! word-boundary aware, so `rash` hits inside `crashed`.

use crate::knowledge::{Category, KnowledgeBase};

pub const FALLBACK_REPLY: [&str; 3] = [
    "Thanks for sharing. Tell me your main symptom, how long it's been there, and any current medicines.",
    "I will share simple care steps and when you should meet a doctor.",
    "For safety, get urgent help for chest pain, breath trouble, or very high fever.",
];

pub const DISCLAIMER: &str =
    "These are general tips. If symptoms worsen, please see a nearby doctor.";

/// First category, in declaration order, with a keyword inside the query
pub fn match_category<'a>(knowledge: &'a KnowledgeBase, query: &str) -> Option<&'a Category> {
    let lowered = query.to_lowercase();
    knowledge
        .categories()
        .iter()
        .find(|category| category.matches(&lowered))
}

/// Build the reply for a query. Never empty.
pub fn resolve(knowledge: &KnowledgeBase, query: &str) -> Vec<String> {
    reply_for(match_category(knowledge, query))
}

/// Reply for an already matched category, or the fallback for `None`
pub fn reply_for(category: Option<&Category>) -> Vec<String> {
    match category {
        Some(category) => care_plan(category),
        None => FALLBACK_REPLY.iter().map(|line| line.to_string()).collect(),
    }
}

fn care_plan(category: &Category) -> Vec<String> {
    let mut lines = Vec::with_capacity(category.tips.len() + 3);
    lines.push(format!("{} - here is a simple care plan:", category.title));
    lines.extend(category.tips.iter().cloned());
    lines.push(format!("When to seek medical help: {}", category.watch));
    lines.push(DISCLAIMER.to_string());
    lines
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn first_line(query: &str) -> String {
        resolve(&KnowledgeBase::builtin(), query).remove(0)
    }

    #[test]
    fn test_cold_care_plan() {
        let lines = resolve(&KnowledgeBase::builtin(), "I have a cold with sneezing");
        assert_eq!(
            lines,
            vec![
                "Cold & Cough - here is a simple care plan:",
                "Sip warm water or ginger-honey tea every few hours.",
                "Do gentle steam inhalation for 5–7 minutes to ease a blocked nose.",
                "Avoid cold drinks and get good rest.",
                "Homeopathic options often used: Aconite 30 for sudden chills, Bryonia 30 for dry cough, Arsenicum Album 30 for runny nose. Follow pack guidance.",
                "When to seek medical help: See a doctor if fever is above 101°F, breathing is hard, or symptoms last more than 4–5 days.",
                "These are general tips. If symptoms worsen, please see a nearby doctor.",
            ]
        );
    }

    #[test]
    fn test_reply_for_agrees_with_resolve() {
        let kb = KnowledgeBase::builtin();
        for query in ["runny nose", "GAS after lunch", "itchy skin", "headache", ""] {
            assert_eq!(reply_for(match_category(&kb, query)), resolve(&kb, query));
        }
    }

    #[test]
    fn test_each_category_reachable() {
        assert_eq!(first_line("bad cough"), "Cold & Cough - here is a simple care plan:");
        assert_eq!(first_line("high fever"), "Fever & Body Ache - here is a simple care plan:");
        assert_eq!(first_line("nausea"), "Stomach Upset & Acidity - here is a simple care plan:");
        assert_eq!(first_line("insomnia"), "Stress, Sleep & Anxiety - here is a simple care plan:");
        assert_eq!(first_line("hives"), "Skin & Allergies - here is a simple care plan:");
    }

    #[test]
    fn test_query_is_lowercased() {
        assert_eq!(first_line("COUGH!!"), "Cold & Cough - here is a simple care plan:");
    }

    #[test]
    fn test_first_declared_category_wins() {
        // "rash" appears first in the text but Fever is declared earlier
        assert_eq!(
            first_line("rash and then a fever"),
            "Fever & Body Ache - here is a simple care plan:"
        );
        // "chills" (Fever) inside a Cold query: Cold is declared first
        assert_eq!(first_line("chills and cough"), "Cold & Cough - here is a simple care plan:");
    }

    #[test]
    fn test_substring_false_positive_preserved() {
        assert_eq!(
            first_line("I crashed my bike yesterday"),
            "Skin & Allergies - here is a simple care plan:"
        );
    }

    #[test]
    fn test_fallback() {
        let lines = resolve(&KnowledgeBase::builtin(), "my knee hurts");
        assert_eq!(lines, FALLBACK_REPLY.to_vec());
    }

    #[test]
    fn test_empty_query_falls_back() {
        assert_eq!(resolve(&KnowledgeBase::builtin(), ""), FALLBACK_REPLY.to_vec());
        assert!(match_category(&KnowledgeBase::builtin(), "").is_none());
    }

    #[test]
    fn test_no_normalization_beyond_case() {
        // Keyword spans whitespace exactly; doubled space breaks the match
        assert!(match_category(&KnowledgeBase::builtin(), "sore  throat").is_none());
        assert_eq!(
            match_category(&KnowledgeBase::builtin(), "Sore Throat").map(|c| c.title.as_str()),
            Some("Cold & Cough")
        );
    }
}
