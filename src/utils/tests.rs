use super::*;
use proptest::prelude::*;

#[test]
fn truncate_short_string_unchanged() {
    assert_eq!(truncate_chars("hello", 10), "hello");
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn truncate_cuts_at_char_count() {
    assert_eq!(truncate_chars("hello world", 5), "hello");
    assert_eq!(truncate_chars("abc", 0), "");
}

#[test]
fn truncate_counts_chars_not_bytes() {
    assert_eq!(truncate_chars("héllo wörld", 4), "héll");
    assert_eq!(truncate_chars("🦀🦀🦀", 2), "🦀🦀");
}

#[test]
fn moderator_home_ends_with_dir_name() {
    if std::env::var_os("SLACK_MODERATOR_HOME").is_none() {
        let home = get_moderator_home().unwrap();
        assert!(home.ends_with(".slack-moderator"));
    }
}

proptest! {
    #[test]
    fn truncate_never_exceeds_limit(s in "\\PC{0,64}", max in 0usize..80) {
        let out = truncate_chars(&s, max);
        prop_assert!(out.chars().count() <= max);
        prop_assert!(s.starts_with(out));
        if s.chars().count() <= max {
            prop_assert_eq!(out, s.as_str());
        } else {
            prop_assert_eq!(out.chars().count(), max);
        }
    }
}
