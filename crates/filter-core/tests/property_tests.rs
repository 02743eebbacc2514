use filter_core::{LabelMap, Rule, compile, decompile};
use filter_test_utils::FakeMailbox;
use proptest::prelude::*;

const LABELS: &[&str] = &["Lists/x", "Receipts", "GitHub/Reviews"];

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        "[a-z]{1,8}:[a-z]{1,8}(@[a-z]{1,6}\\.com)?",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(prop::sample::select(LABELS)),
    )
        .prop_map(|(query, archive, read, delete, to_me, unless, label)| {
            let mut rule = Rule::with_query(query);
            rule.read = read;
            rule.label = label.map(str::to_string);
            rule.archive_unless_to_me = unless;
            // The merged pair clears these, so they only survive without it.
            rule.archive = archive && !unless;
            rule.delete = delete && !unless;
            rule.to_me = to_me && !unless;
            rule
        })
}

proptest! {
    #[test]
    fn test_decompile_inverts_compile(rule in rule_strategy()) {
        let mailbox = FakeMailbox::new().with_label("Lists/x", "Label_lists");
        let mut labels = LabelMap::load(&mailbox).unwrap();

        let compiled = compile(&rule, &mut labels, &mailbox).unwrap();
        let expected_rules = if rule.archive_unless_to_me { 2 } else { 1 };
        prop_assert_eq!(compiled.len(), expected_rules);

        let rules = decompile(&compiled, &labels);
        prop_assert_eq!(rules, vec![rule]);
    }

    #[test]
    fn test_query_or_joins_in_order(parts in prop::collection::vec("[a-z]{1,6}:[a-z]{1,6}", 1..5)) {
        let rule = Rule::with_query_or(parts.clone());
        let mut labels = LabelMap::new();

        let compiled = compile(&rule, &mut labels, &FakeMailbox::new()).unwrap();
        prop_assert_eq!(&compiled[0].criteria.query, &parts.join(" OR "));
    }

    #[test]
    fn test_both_queries_always_conflict(query in "[a-z]{1,6}", parts in prop::collection::vec("[a-z]{1,6}", 1..3)) {
        let mut rule = Rule::with_query(query);
        rule.query_or = parts;
        let mut labels = LabelMap::new();

        prop_assert!(compile(&rule, &mut labels, &FakeMailbox::new()).is_err());
    }
}
