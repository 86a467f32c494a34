//! Property-based tests for post search matching

use chrono::Utc;
use inkpost::backend::store::memory::matches_search;
use inkpost::shared::Post;
use proptest::prelude::*;
use uuid::Uuid;

fn post(title: &str, content: &str, description: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        description: description.to_string(),
        image_url: None,
        author_id: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

proptest! {
    #[test]
    fn test_term_inside_any_field_matches(
        prefix in "[a-z ]{0,10}",
        term in "[a-z]{1,6}",
        suffix in "[a-z ]{0,10}",
        field in 0usize..3,
    ) {
        let text = format!("{}{}{}", prefix, term.to_uppercase(), suffix);
        let fields = match field {
            0 => post(&text, "", ""),
            1 => post("", &text, ""),
            _ => post("", "", &text),
        };

        prop_assert!(matches_search(&fields, &term));
    }

    #[test]
    fn test_absent_term_does_not_match(text in "[a-m]{0,20}", term in "[n-z]{1,5}") {
        prop_assert!(!matches_search(&post(&text, &text, &text), &term));
    }
}
