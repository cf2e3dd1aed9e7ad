use speculate2::speculate;
use stylebook::error::{EntryKind, GuideError};
use stylebook::models::*;
use stylebook::validate;
use stylebook::Registry;

fn inline_block_rule() -> Rule {
    Rule {
        id: "inline_block_usage".to_string(),
        summary: "Inline blocks should be preferred for simple code that fits one line".to_string(),
        rationale: "Short bodies read better on one line.".to_string(),
        examples: vec![Example::preferred("def add_two(number), do: number + 2")],
    }
}

fn single_rule_guide() -> Guide {
    Guide {
        title: "Tiny Guide".to_string(),
        version: "1.0.0".to_string(),
        categories: vec![Category {
            id: "CodeStyle".to_string(),
            name: "Code Style".to_string(),
            description: "Layout".to_string(),
            rules: vec![inline_block_rule()],
        }],
    }
}

speculate! {
    describe "builtin registry" {
        before {
            let registry = Registry::builtin();
        }

        describe "list_categories" {
            it "returns categories in authored order" {
                let ids: Vec<&str> = registry
                    .list_categories()
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect();
                assert_eq!(ids, vec!["CodeStyle", "SoftwareDesign"]);
            }

            it "is stable across calls" {
                assert_eq!(registry.list_categories(), registry.list_categories());
            }
        }

        describe "list_rules" {
            it "returns a non-empty, order-stable list for every category" {
                for category in registry.list_categories() {
                    let first = registry.list_rules(&category.id).expect("Category exists");
                    let second = registry.list_rules(&category.id).expect("Category exists");
                    assert!(!first.is_empty(), "{} has no rules", category.id);
                    assert_eq!(first, second);
                }
            }

            it "fails with NotFound for an unknown category" {
                let err = registry.list_rules("NonExistent").unwrap_err();
                assert!(matches!(
                    err,
                    GuideError::NotFound { kind: EntryKind::Category, ref id } if id == "NonExistent"
                ));
            }
        }

        describe "content invariants" {
            it "keeps every summary within 100 characters without a trailing period" {
                for category in registry.list_categories() {
                    for rule in &category.rules {
                        let summary = registry.get_summary(rule);
                        assert!(summary.chars().count() <= 100, "{} is too long", rule.id);
                        assert!(!summary.ends_with('.'), "{} ends with a period", rule.id);
                    }
                }
            }

            it "gives every rule at least one preferred example" {
                for category in registry.list_categories() {
                    for rule in &category.rules {
                        assert!(rule.preferred().next().is_some(), "{} has no preferred example", rule.id);
                    }
                }
            }

            it "passes validation" {
                let issues = validate::validate(registry.guide());
                assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
            }

            it "uses unique rule ids across the guide" {
                let mut ids: Vec<&str> = registry
                    .list_categories()
                    .iter()
                    .flat_map(|c| c.rules.iter().map(|r| r.id.as_str()))
                    .collect();
                let total = ids.len();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), total);
            }
        }

        describe "get_rule" {
            it "returns a rule by category and id" {
                let rule = registry.get_rule("CodeStyle", "inline_block_usage").expect("Rule exists");
                assert_eq!(rule.summary(), "Inline blocks should be preferred for simple code that fits one line");
            }

            it "fails with NotFound for an unknown rule" {
                let err = registry.get_rule("CodeStyle", "no_such_rule").unwrap_err();
                assert!(matches!(err, GuideError::NotFound { kind: EntryKind::Rule, .. }));
            }

            it "fails with NotFound for an unknown category" {
                let err = registry.get_rule("Nope", "inline_block_usage").unwrap_err();
                assert!(matches!(err, GuideError::NotFound { kind: EntryKind::Category, .. }));
            }
        }

        describe "find_rule" {
            it "returns the owning category" {
                let (category, rule) = registry.find_rule("tagged_result_tuples").expect("Rule exists");
                assert_eq!(category.id, "SoftwareDesign");
                assert_eq!(rule.id, "tagged_result_tuples");
            }
        }

        describe "search" {
            it "matches case-insensitively in guide order" {
                let results = registry.search("PIPE");
                let ids: Vec<&str> = results.iter().map(|r| r.rule.as_str()).collect();
                assert_eq!(ids[0], "pipe_operator_chains");
                assert!(ids.contains(&"avoid_single_pipe"));
            }

            it "returns nothing for a blank query" {
                assert!(registry.search("  ").is_empty());
            }
        }

        describe "version" {
            it "is a semantic version" {
                let parts: Vec<&str> = registry.version().split('.').collect();
                assert_eq!(parts.len(), 3);
            }
        }
    }

    describe "single rule guide" {
        before {
            let registry = Registry::new(single_rule_guide());
        }

        it "lists exactly the authored category and rule" {
            let categories: Vec<&str> = registry.list_categories().iter().map(|c| c.id.as_str()).collect();
            assert_eq!(categories, vec!["CodeStyle"]);

            let rules: Vec<&str> = registry
                .list_rules("CodeStyle")
                .expect("Category exists")
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            assert_eq!(rules, vec!["inline_block_usage"]);
        }

        it "exposes the example labeled preferred" {
            let rule = registry.get_rule("CodeStyle", "inline_block_usage").expect("Rule exists");
            assert_eq!(rule.examples.len(), 1);
            assert_eq!(rule.examples[0].label, ExampleLabel::Preferred);
            assert_eq!(rule.examples[0].code, "def add_two(number), do: number + 2");
            assert_eq!(rule.discouraged().count(), 0);
        }

        it "fails with NotFound for NonExistent" {
            assert!(registry.list_rules("NonExistent").unwrap_err().is_not_found());
        }
    }

    describe "serialization" {
        it "round-trips the builtin guide through JSON" {
            let registry = Registry::builtin();
            let json = serde_json::to_string(registry.guide()).expect("Serialize failed");
            let restored: Guide = serde_json::from_str(&json).expect("Deserialize failed");
            assert_eq!(&restored, registry.guide());
        }

        it "serializes labels in snake case" {
            let json = serde_json::to_value(Example::discouraged("x")).expect("Serialize failed");
            assert_eq!(json["label"], "discouraged");
            assert!(json.get("caption").is_none());
        }

        it "parses labels from strings" {
            assert_eq!("preferred".parse::<ExampleLabel>(), Ok(ExampleLabel::Preferred));
            assert!("good".parse::<ExampleLabel>().is_err());
        }
    }

    describe "validation" {
        it "reports a summary with a trailing period" {
            let mut guide = single_rule_guide();
            guide.categories[0].rules[0].summary = "Prefer inline blocks.".to_string();
            let issues = validate::validate(&guide);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].location, "CodeStyle/inline_block_usage");
        }

        it "reports a rule without a preferred example" {
            let mut guide = single_rule_guide();
            guide.categories[0].rules[0].examples = vec![Example::discouraged("def x() do\nend")];
            let issues = validate::validate(&guide);
            assert!(issues.iter().any(|i| i.reason.contains("preferred")));
        }

        it "reports duplicate rule ids" {
            let mut guide = single_rule_guide();
            guide.categories[0].rules.push(inline_block_rule());
            let issues = validate::validate(&guide);
            assert!(issues.iter().any(|i| i.reason.contains("duplicate rule")));
        }

        it "reports an empty category" {
            let mut guide = single_rule_guide();
            guide.categories[0].rules.clear();
            let issues = validate::validate(&guide);
            assert_eq!(issues[0].reason, "category has no rules");
        }

        it "reports a malformed version" {
            let mut guide = single_rule_guide();
            guide.version = "latest".to_string();
            assert_eq!(validate::validate(&guide)[0].location, "guide");
        }

        it "reports versions with leading zeros or empty pre-release" {
            for version in ["01.0.0", "1.0.0-", "1.0.0+"] {
                let mut guide = single_rule_guide();
                guide.version = version.to_string();
                assert_eq!(validate::validate(&guide)[0].location, "guide", "{} accepted", version);
            }
        }

        it "turns the first issue into MalformedContent" {
            let mut guide = single_rule_guide();
            guide.categories[0].rules[0].rationale = String::new();
            let err = validate::ensure_valid(&guide).unwrap_err();
            assert!(matches!(err, GuideError::MalformedContent { .. }));
        }
    }
}
