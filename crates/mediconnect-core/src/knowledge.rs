//! Symptom categories the agent knows how to answer.
//!
//! Categories are kept in declaration order. Matching picks the first category
//! with a keyword hit, so the order of this list decides ties.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One symptom cluster with its trigger keywords and canned advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// Lowercase substrings that select this category
    pub keywords: Vec<String>,
    pub tips: Vec<String>,
    /// When-to-seek-help guidance
    pub watch: String,
}

impl Category {
    fn new(title: &str, keywords: &[&str], tips: &[&str], watch: &str) -> Self {
        Self {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
            watch: watch.to_string(),
        }
    }

    /// True if any keyword occurs in the already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidCategory {
            index,
            reason: reason.to_string(),
        };

        if self.title.trim().is_empty() {
            return Err(invalid("title is blank"));
        }
        if self.keywords.is_empty() {
            return Err(invalid("no keywords"));
        }
        if self.tips.is_empty() {
            return Err(invalid("no tips"));
        }
        for keyword in &self.keywords {
            if keyword.trim().is_empty() {
                return Err(invalid("blank keyword"));
            }
            // Queries are lowercased before matching, so an uppercase keyword can never hit
            if keyword.to_lowercase() != *keyword {
                return Err(Error::InvalidCategory {
                    index,
                    reason: format!("keyword '{}' is not lowercase", keyword),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, immutable list of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Build from a category list, rejecting anything that could never match
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyKnowledgeBase);
        }
        for (index, category) in categories.iter().enumerate() {
            category.validate(index)?;
        }
        Ok(Self { categories })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let kb = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = kb.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The five categories the agent ships with
    pub fn builtin() -> Self {
        let categories = vec![
            Category::new(
                "Cold & Cough",
                &["cold", "cough", "sore throat", "runny nose", "sneezing"],
                &[
                    "Sip warm water or ginger-honey tea every few hours.",
                    "Do gentle steam inhalation for 5–7 minutes to ease a blocked nose.",
                    "Avoid cold drinks and get good rest.",
                    "Homeopathic options often used: Aconite 30 for sudden chills, Bryonia 30 for dry cough, Arsenicum Album 30 for runny nose. Follow pack guidance.",
                ],
                "See a doctor if fever is above 101°F, breathing is hard, or symptoms last more than 4–5 days.",
            ),
            Category::new(
                "Fever & Body Ache",
                &["fever", "body ache", "chills", "weakness"],
                &[
                    "Keep yourself hydrated with water or light soups.",
                    "Rest in a cool, quiet room and use a light blanket.",
                    "You may sponge with lukewarm water to feel comfortable.",
                    "Homeopathic options often used: Ferrum Phos 6X for mild fever, Gelsemium 30 for dull ache and weakness.",
                ],
                "Seek urgent care if fever crosses 102°F, there is chest pain, or continuous vomiting.",
            ),
            Category::new(
                "Stomach Upset & Acidity",
                &["stomach", "acidity", "gas", "nausea", "vomit", "diarrhea"],
                &[
                    "Take small, bland meals like toast, rice, or bananas.",
                    "Sip oral rehydration salts to prevent dehydration.",
                    "Avoid spicy, oily, or very sweet foods for now.",
                    "Homeopathic options often used: Nux Vomica 30 for acidity after heavy food, Carbo Veg 30 for gas and bloating.",
                ],
                "Get medical help if there is blood in stool, severe pain, or no urine for 8 hours.",
            ),
            Category::new(
                "Stress, Sleep & Anxiety",
                &["stress", "anxiety", "sleep", "insomnia", "tension"],
                &[
                    "Take slow deep breaths for 5 minutes to calm your body.",
                    "Keep gadgets away 30 minutes before sleep; dim the lights.",
                    "Have warm milk or herbal tea; avoid caffeine in the evening.",
                    "Homeopathic options often used: Kali Phos 6X for mental fatigue, Coffea 30 for racing thoughts at night.",
                ],
                "Talk to a doctor if you feel panic, chest tightness, or sadness that stays for weeks.",
            ),
            Category::new(
                "Skin & Allergies",
                &["rash", "itch", "allergy", "hives", "eczema", "redness"],
                &[
                    "Wash gently with cool water and keep the area clean and dry.",
                    "Apply a light aloe vera gel; avoid scratching.",
                    "Identify and avoid the trigger (new soap, food, or dust).",
                    "Homeopathic options often used: Apis 30 for sudden itchy swelling, Rhus Tox 30 for itchy rashes that get better with warmth.",
                ],
                "Meet a doctor if swelling is on lips/eyes, breathing is hard, or rash spreads fast.",
            ),
        ];

        Self { categories }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 5);
        assert_eq!(KnowledgeBase::new(kb.categories().to_vec()).unwrap(), kb);
    }

    #[test]
    fn test_builtin_order() {
        let kb = KnowledgeBase::builtin();
        let titles: Vec<&str> = kb
            .categories()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Cold & Cough",
                "Fever & Body Ache",
                "Stomach Upset & Acidity",
                "Stress, Sleep & Anxiety",
                "Skin & Allergies",
            ]
        );
    }

    #[test]
    fn test_category_matches_substring() {
        let kb = KnowledgeBase::builtin();
        let stomach = &kb.categories()[2];
        assert!(stomach.matches("i gasped for air"));
        assert!(!stomach.matches("headache"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"title": "Headache", "keywords": ["headache", "migraine"],
             "tips": ["Rest in a dark room."], "watch": "See a doctor if it is sudden and severe."}
        ]"#;
        let kb = KnowledgeBase::from_json_str(json).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.categories()[0].title, "Headache");
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = KnowledgeBase::from_json_str("[]").unwrap_err();
        assert!(matches!(err, Error::EmptyKnowledgeBase));
    }

    #[test]
    fn test_rejects_uppercase_keyword() {
        let json = r#"[{"title": "Headache", "keywords": ["Migraine"], "tips": ["Rest."], "watch": "x"}]"#;
        let err = KnowledgeBase::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidCategory { index: 0, .. }));
    }

    #[test]
    fn test_rejects_missing_tips() {
        let json = r#"[
            {"title": "A", "keywords": ["a"], "tips": ["t"], "watch": "w"},
            {"title": "B", "keywords": ["b"], "tips": [], "watch": "w"}
        ]"#;
        let err = KnowledgeBase::from_json_str(json).unwrap_err();
        match err {
            Error::InvalidCategory { index, reason } => {
                assert_eq!(index, 1);
                assert_eq!(reason, "no tips");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = KnowledgeBase::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        let json = serde_json::to_string(KnowledgeBase::builtin().categories()).unwrap();
        std::fs::write(&path, json).unwrap();

        let kb = KnowledgeBase::load(&path).unwrap();
        assert_eq!(kb, KnowledgeBase::builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnowledgeBase::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
