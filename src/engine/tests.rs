use super::*;
use crate::api::{Options, Stage};
use crate::dictionary::Dictionaries;
use crate::normalize::normalize;
use crate::rule::{Rule, Verb};
use proptest::prelude::*;

const LEXICON: &[&str] = &["پدر", "زیبا", "کتاب", "درخت", "خانه", "رو", "خورنده", "دفتر", "کتابخانه"];

fn dictionaries() -> Dictionaries {
    Dictionaries::from_entries(
        LEXICON.iter().copied(),
        vec![("کتب", "کتاب".to_string())],
        vec![("رفتم", Verb::new("رفت", "رو")), ("دیدم", Verb::new("دید", "بین"))],
    )
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("^(?<stem>.+?)ان$", "${stem}", 'N', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)ست$", "${stem}", 'N', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)ها$", "${stem}", 'K', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)دم$", "${stem}", 'V', 2, false).unwrap(),
    ]
}

fn lexicon_only(words: &[&str]) -> Dictionaries {
    Dictionaries::from_entries(words.iter().copied(), Vec::<(&str, String)>::new(), Vec::<(&str, Verb)>::new())
}

#[test]
fn stems_examples() {
    let dicts = dictionaries();
    let rules = rules();
    let mut stemmer = Stemmer::new(&dicts, &rules);

    // (input, expected stem, deciding stage)
    let cases: Vec<(&str, &str, Stage)> = vec![
        ("", "", Stage::Empty),
        ("  \u{200C} ", "", Stage::Empty),
        ("123", "123", Stage::Passthrough),
        ("۱۲۳", "۱۲۳", Stage::Passthrough),
        ("hello", "hello", Stage::Passthrough),
        ("کت", "کت", Stage::Passthrough),
        ("کتاب", "کتاب", Stage::Lexicon),
        ("كتاب", "کتاب", Stage::Lexicon),
        ("کتب", "کتاب", Stage::BrokenPlural),
        ("کتبم", "کتاب", Stage::BrokenPlural),
        ("پدران", "پدر", Stage::Rules),
        ("زیباست", "زیبا", Stage::Rules),
        ("کتابها", "کتاب", Stage::Rules),
        ("درخت\u{200C}ها", "درخت", Stage::Rules),
        ("خوردم", "خور", Stage::Rules),
        ("رفتم", "رو", Stage::Verb),
        ("دیدم", "دید", Stage::Verb),
        ("کتاب\u{200C}خانه", "کتاب خانه", Stage::Fallback),
        ("ماشین", "ماشین", Stage::Unresolved),
    ];

    for (input, stem, stage) in cases {
        let trace = stemmer.run_with_trace(input);
        assert_eq!(trace.stem, stem, "stem of {input:?}");
        assert_eq!(trace.stage, stage, "stage of {input:?}");
    }
}

#[test]
fn lexicon_words_are_their_own_stems() {
    let dicts = dictionaries();
    let rules = rules();
    let mut stemmer = Stemmer::with_cache(&dicts, &rules, NoCache, Options::default());
    for word in LEXICON {
        assert_eq!(stemmer.run(word), normalize(word));
    }
}

#[test]
fn second_run_is_served_from_cache() {
    let dicts = dictionaries();
    let rules = rules();
    let mut stemmer = Stemmer::new(&dicts, &rules);

    let first = stemmer.run_with_trace("پدران");
    let second = stemmer.run_with_trace("پدران");
    assert_eq!(first.stage, Stage::Rules);
    assert_eq!(second.stage, Stage::Cache);
    assert_eq!(first.stem, second.stem);

    // Passthrough words are never cached.
    stemmer.run("123");
    assert_eq!(stemmer.cache().len(), 1);
}

#[test]
fn cache_is_keyed_by_normalized_word() {
    let dicts = dictionaries();
    let rules = rules();
    let mut stemmer = Stemmer::new(&dicts, &rules);

    stemmer.run("درخت\u{200C}ها");
    let trace = stemmer.run_with_trace("درخت ها");
    assert_eq!(trace.stage, Stage::Cache);
    assert_eq!(trace.stem, "درخت");
}

#[test]
fn verbs_can_be_disabled() {
    let dicts = dictionaries();
    let rules = rules();
    let options = Options { enable_verbs: false, ..Options::default() };
    let mut stemmer = Stemmer::with_cache(&dicts, &rules, TrieCache::new(), options);

    let trace = stemmer.run_with_trace("رفتم");
    assert_eq!(trace.stem, "رفتم");
    assert_eq!(trace.stage, Stage::Unresolved);
    assert_eq!(trace.candidates, ["رفتم"]);
}

#[test]
fn verb_override_replaces_rule_candidates() {
    let dicts = Dictionaries::from_entries(
        ["خور", "خورنده"],
        Vec::<(&str, String)>::new(),
        vec![("خوردم", Verb::new("خورد", "خور"))],
    );
    let rules = rules();
    let mut stemmer = Stemmer::new(&dicts, &rules);

    let trace = stemmer.run_with_trace("خوردم");
    assert_eq!(trace.stage, Stage::Verb);
    assert_eq!(trace.candidates, ["خور"]);
    assert_eq!(trace.metrics.rules_matched, 1);
}

#[test]
fn terminal_rule_triggers_noun_disambiguation() {
    let rules = vec![
        Rule::new("^(?<stem>.+)ش$", "${stem}", 'N', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)مش$", "${stem}", 'N', 2, true).unwrap(),
    ];

    // The possessive form defers to its base.
    let dicts = lexicon_only(&["کتاب", "کتابم"]);
    let mut stemmer = Stemmer::new(&dicts, &rules);
    let trace = stemmer.run_with_trace("کتابمش");
    assert_eq!(trace.candidates, ["کتابم", "کتاب"]);
    assert!(trace.terminated);
    assert_eq!(trace.stage, Stage::Disambiguated);
    assert_eq!(trace.stem, "کتاب");

    // A plural in ان wins outright.
    let rules = vec![
        Rule::new("^(?<stem>.+)ش$", "${stem}", 'N', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)انش$", "${stem}", 'N', 2, true).unwrap(),
    ];
    let dicts = lexicon_only(&["درخت", "درختان"]);
    let mut stemmer = Stemmer::new(&dicts, &rules);
    assert_eq!(stemmer.run("درختانش"), "درختان");
}

#[test]
fn pattern_count_orders_candidates() {
    let rules = vec![
        Rule::new("^(?<stem>.+)اش$", "${stem}", 'N', 2, false).unwrap(),
        Rule::new("^(?<stem>.+)ش$", "${stem}", 'N', 2, false).unwrap(),
    ];
    let dicts = lexicon_only(&["کتاب", "کتابا"]);

    // (pattern_count, expected stem); discovery order is [کتاب, کتابا].
    let cases: Vec<(i32, &str)> = vec![(1, "کتابا"), (2, "کتاب"), (-1, "کتاب"), (-2, "کتابا"), (0, "کتاب")];
    for (pattern_count, expected) in cases {
        let options = Options { pattern_count, ..Options::default() };
        let mut stemmer = Stemmer::with_cache(&dicts, &rules, NoCache, options);
        let trace = stemmer.run_with_trace("کتاباش");
        assert_eq!(trace.candidates, ["کتاب", "کتابا"]);
        assert_eq!(trace.stem, expected, "pattern_count = {pattern_count}");
    }
}

#[test]
fn bounded_cache_stays_bounded() {
    let dicts = dictionaries();
    let rules = rules();
    let mut stemmer = Stemmer::with_cache(&dicts, &rules, LruCache::new(1), Options::default());

    assert_eq!(stemmer.run("پدران"), "پدر");
    assert_eq!(stemmer.run("زیباست"), "زیبا");
    assert_eq!(stemmer.cache().len(), 1);
    assert_eq!(stemmer.run_with_trace("پدران").stage, Stage::Rules);
    assert_eq!(stemmer.run_with_trace("پدران").stage, Stage::Cache);
}

#[test]
fn boxed_cache_policy() {
    let dicts = dictionaries();
    let rules = rules();
    let cache: Box<dyn StemCache> = Box::new(TrieCache::new());
    let mut stemmer = Stemmer::with_cache(&dicts, &rules, cache, Options::default());
    assert_eq!(stemmer.run("کتابها"), "کتاب");
    assert_eq!(stemmer.cache().len(), 1);
}

#[test]
fn shared_resources_are_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<Dictionaries>();
    assert_sync::<Rule>();
}

#[test]
fn very_long_word_is_memoized_and_dropped() {
    let dicts = dictionaries();
    let rules = rules();
    let word = "ب".repeat(100_000);
    let mut stemmer = Stemmer::new(&dicts, &rules);

    assert_eq!(stemmer.run(&word), word);
    let again = stemmer.run_with_trace(&word);
    assert_eq!(again.stage, Stage::Cache);
    assert_eq!(again.stem, word);
    assert_eq!(stemmer.cache().len(), 1);
    drop(stemmer);
}

proptest! {
    #[test]
    fn short_words_are_returned_unchanged(word in "[ابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی]{1,2}") {
        let dicts = dictionaries();
        let rules = rules();
        let mut stemmer = Stemmer::new(&dicts, &rules);
        prop_assert_eq!(stemmer.run(&word), word);
    }

    #[test]
    fn cached_and_uncached_stemmers_agree(words in prop::collection::vec("[ابپتدرزسشکگمنوهی]{3,7}", 1..12)) {
        let dicts = dictionaries();
        let rules = rules();
        let mut cached = Stemmer::new(&dicts, &rules);
        let mut uncached = Stemmer::with_cache(&dicts, &rules, NoCache, Options::default());
        for word in words.iter().chain(words.iter()) {
            prop_assert_eq!(cached.run(word), uncached.run(word));
        }
    }
}
