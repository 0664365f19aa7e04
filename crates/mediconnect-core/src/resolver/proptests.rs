//! Property-based tests for reply resolution
//!
//! Filler text is drawn from characters no built-in keyword can be assembled
//! from, so every keyword hit comes from the inserted keywords alone.

use super::*;
use proptest::prelude::*;

fn kb() -> KnowledgeBase {
    KnowledgeBase::builtin()
}

fn header(category: &Category) -> String {
    format!("{} - here is a simple care plan:", category.title)
}

// None of these characters can spell a built-in keyword
fn arb_filler() -> impl Strategy<Value = String> {
    "[xyzqjkwXYZ0-9 .,!?]{0,20}"
}

fn arb_keyword() -> impl Strategy<Value = (usize, String)> {
    let kb = kb();
    let pairs: Vec<(usize, String)> = kb
        .categories()
        .iter()
        .enumerate()
        .flat_map(|(i, c)| c.keywords.iter().map(move |k| (i, k.clone())))
        .collect();
    prop::sample::select(pairs)
}

proptest! {
    #[test]
    fn single_keyword_selects_its_category(
        (index, keyword) in arb_keyword(),
        before in arb_filler(),
        after in arb_filler(),
    ) {
        let kb = kb();
        let query = format!("{before} {keyword} {after}");
        let lines = resolve(&kb, &query);
        prop_assert_eq!(&lines[0], &header(&kb.categories()[index]));
        let expected_len = kb.categories()[index].tips.len() + 3;
        prop_assert_eq!(lines.len(), expected_len);
    }

    #[test]
    fn earlier_category_wins_regardless_of_position(
        (i, first) in arb_keyword(),
        (j, second) in arb_keyword(),
        filler in arb_filler(),
    ) {
        prop_assume!(i != j);
        let kb = kb();
        let winner = &kb.categories()[i.min(j)].title;
        for query in [
            format!("{first} {filler} {second}"),
            format!("{second} {filler} {first}"),
        ] {
            let matched = match_category(&kb, &query).map(|c| &c.title);
            prop_assert_eq!(matched, Some(winner), "query {:?}", query);
        }
    }

    #[test]
    fn keyword_free_query_gets_fallback(query in arb_filler()) {
        let lines = resolve(&kb(), &query);
        let expected: Vec<String> = FALLBACK_REPLY.iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(lines, expected);
    }

    #[test]
    fn matching_ignores_query_case(
        (index, keyword) in arb_keyword(),
        upper in any::<bool>(),
    ) {
        let kb = kb();
        let query = if upper { keyword.to_uppercase() } else { keyword };
        let matched = match_category(&kb, &query).map(|c| c.title.as_str());
        prop_assert_eq!(matched, Some(kb.categories()[index].title.as_str()));
    }

    #[test]
    fn reply_is_never_empty(query in ".{0,60}") {
        prop_assert!(!resolve(&kb(), &query).is_empty());
    }
}
