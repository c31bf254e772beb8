//! Rule-driven candidate generation.
//!
//! Rules are scanned in table order. For each rule whose pattern matches the
//! word, the substitution alternatives are tried in order and the first one
//! that is *accepted* contributes a candidate stem:
//!
//! ```text
//! tag      accepted when                                    notes
//! K        broken-plural hit, else lexicon validation       only while no candidate exists
//! V        a verb affix template validates                  stems with spaces rejected
//! Default  lexicon validation (space repair allowed)        terminal rule ends the scan
//! ```
//!
//! Alternatives shorter than the rule's minimum length are skipped.

use tracing::trace;

use super::metrics::RunMetrics;
use super::plural::broken_plural_stem;
use super::validate::Validator;
use super::verb::matching_affix;
use crate::dictionary::Dictionaries;
use crate::rule::{Rule, Tag};

/// Stems proposed by the rule table, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Candidates {
    pub stems: Vec<String>,
    /// A terminal rule produced a candidate.
    pub terminated: bool,
}

pub(crate) fn generate(
    rules: &[Rule],
    dictionaries: &Dictionaries,
    word: &str,
    metrics: &mut RunMetrics,
) -> Candidates {
    let validator = Validator::new(dictionaries);
    let mut out = Candidates::default();

    for (index, rule) in rules.iter().enumerate() {
        metrics.rules_considered += 1;
        if !rule.is_match(word) {
            continue;
        }
        metrics.rules_matched += 1;

        for alternative in rule.substitutions() {
            let stem = rule.substitute(word, alternative);
            metrics.alternatives_tried += 1;
            if stem.chars().count() < rule.min_length() {
                continue;
            }

            let accepted = match rule.tag() {
                Tag::Ezafe => {
                    if !out.stems.is_empty() {
                        None
                    } else if let Some(singular) = broken_plural_stem(dictionaries, &stem) {
                        Some(singular)
                    } else {
                        validator.is_valid(&stem, true).then_some(stem)
                    }
                }
                Tag::Verb => matching_affix(&validator, &stem).map(|_| stem),
                Tag::Default => validator.is_valid(&stem, true).then_some(stem),
            };

            if let Some(stem) = accepted {
                trace!(rule = index, pattern = rule.pattern(), %stem, "candidate accepted");
                out.stems.push(stem);
                if rule.tag() == Tag::Default && rule.is_terminal() {
                    out.terminated = true;
                    return out;
                }
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Verb;

    fn run(rules: &[Rule], dicts: &Dictionaries, word: &str) -> Candidates {
        generate(rules, dicts, word, &mut RunMetrics::default())
    }

    fn lexicon(words: &[&str]) -> Dictionaries {
        Dictionaries::from_entries(words.iter().copied(), Vec::<(&str, String)>::new(), Vec::<(&str, Verb)>::new())
    }

    #[test]
    fn first_accepted_alternative_wins() {
        let rules = [Rule::new("^(?<stem>.+)ها$", "${stem}x;${stem};${stem}ه", 'N', 2, false).unwrap()];
        let dicts = lexicon(&["کتاب", "کتابه"]);
        let out = run(&rules, &dicts, "کتابها");
        assert_eq!(out.stems, ["کتاب"]);
        assert!(!out.terminated);
    }

    #[test]
    fn short_alternatives_are_skipped() {
        let rules = [Rule::new("^(?<stem>.+)ها$", "${stem}", 'N', 4, false).unwrap()];
        let dicts = lexicon(&["گل"]);
        assert!(run(&rules, &dicts, "گلها").stems.is_empty());
    }

    #[test]
    fn terminal_rule_stops_scan() {
        let rules = [
            Rule::new("^(?<stem>.+)م$", "${stem}", 'N', 2, true).unwrap(),
            Rule::new("^(?<stem>.+)ام$", "${stem}", 'N', 2, false).unwrap(),
        ];
        let dicts = lexicon(&["خانه", "خان"]);
        let out = run(&rules, &dicts, "خانهم");
        assert_eq!(out.stems, ["خانه"]);
        assert!(out.terminated);
    }

    #[test]
    fn non_terminal_rules_accumulate() {
        let rules = [
            Rule::new("^(?<stem>.+)ش$", "${stem}", 'N', 2, false).unwrap(),
            Rule::new("^(?<stem>.+)اش$", "${stem}", 'N', 2, false).unwrap(),
        ];
        let dicts = lexicon(&["کتابا", "کتاب"]);
        assert_eq!(run(&rules, &dicts, "کتاباش").stems, ["کتابا", "کتاب"]);
    }

    #[test]
    fn ezafe_rules_resolve_broken_plurals_only_first() {
        let dicts = Dictionaries::from_entries(
            ["دفتر"],
            vec![("کتب", "کتاب".to_string())],
            Vec::<(&str, Verb)>::new(),
        );
        let rules = [Rule::new("^(?<stem>.+)ی$", "${stem}", 'K', 2, false).unwrap()];
        assert_eq!(run(&rules, &dicts, "کتبی").stems, ["کتاب"]);
        assert_eq!(run(&rules, &dicts, "دفتری").stems, ["دفتر"]);

        // Once a candidate exists, K rules are skipped.
        let rules = [
            Rule::new("^(?<stem>.+)ی$", "${stem}", 'N', 2, false).unwrap(),
            Rule::new("^(?<stem>.+)ی$", "${stem}", 'K', 2, false).unwrap(),
        ];
        assert_eq!(run(&rules, &dicts, "دفتری").stems, ["دفتر"]);
    }

    #[test]
    fn verb_rules_need_an_affix() {
        let dicts = lexicon(&["خورنده"]);
        let rules = [Rule::new("^(?<stem>.+)دم$", "${stem}", 'V', 2, false).unwrap()];
        assert_eq!(run(&rules, &dicts, "خوردم").stems, ["خور"]);
        assert!(run(&rules, &dicts, "بردم").stems.is_empty());
    }

    #[test]
    fn counts_rule_activity() {
        let rules = [
            Rule::new("^(?<stem>.+)ها$", "${stem};${stem}ه", 'N', 2, false).unwrap(),
            Rule::new("^(?<stem>.+)ان$", "${stem}", 'N', 2, false).unwrap(),
        ];
        let dicts = lexicon(&[]);
        let mut metrics = RunMetrics::default();
        generate(&rules, &dicts, "کتابها", &mut metrics);
        assert_eq!(metrics.rules_considered, 2);
        assert_eq!(metrics.rules_matched, 1);
        assert_eq!(metrics.alternatives_tried, 2);
    }
}
