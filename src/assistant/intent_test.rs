use super::*;

fn response_for(intent: Intent) -> &'static str {
    INTENT_RULES
        .iter()
        .find(|rule| rule.intent == intent)
        .map(|rule| rule.response)
        .unwrap()
}

// =============================================================================
// Rule table
// =============================================================================

#[test]
fn rule_table_order_is_fixed() {
    let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
    assert_eq!(order, vec![Intent::License, Intent::Selling, Intent::Pricing, Intent::Security]);
}

#[test]
fn rule_keywords_are_lowercase() {
    for rule in INTENT_RULES {
        for kw in rule.keywords {
            assert_eq!(*kw, kw.to_lowercase(), "keyword {kw} must be lowercase");
        }
    }
}

// =============================================================================
// first_match
// =============================================================================

#[test]
fn first_match_returns_earliest_hit() {
    let rules = [1, 2, 3, 4];
    assert_eq!(first_match(&rules, |n| n % 2 == 0), Some(&2));
}

#[test]
fn first_match_none_when_nothing_matches() {
    let rules = ["a", "b"];
    assert_eq!(first_match(&rules, |s| s.is_empty()), None);
}

#[test]
fn first_match_on_empty_table() {
    let rules: [u8; 0] = [];
    assert_eq!(first_match(&rules, |_| true), None);
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_license() {
    let c = Classifier::default();
    assert_eq!(c.classify("What license types?"), response_for(Intent::License));
}

#[test]
fn classify_sell() {
    let c = Classifier::default();
    assert_eq!(c.classify("how can I sell stuff"), response_for(Intent::Selling));
}

#[test]
fn classify_price_and_cost_share_reply() {
    let c = Classifier::default();
    assert_eq!(c.classify("what is the price"), response_for(Intent::Pricing));
    assert_eq!(c.classify("what does it cost"), response_for(Intent::Pricing));
}

#[test]
fn classify_security_and_safe_share_reply() {
    let c = Classifier::default();
    assert_eq!(c.classify("tell me about security"), response_for(Intent::Security));
    assert_eq!(c.classify("is this safe"), response_for(Intent::Security));
}

#[test]
fn classify_fallback() {
    let c = Classifier::default();
    assert_eq!(c.classify("hello"), FALLBACK_RESPONSE);
    assert_eq!(c.resolve("hello"), None);
}

#[test]
fn classify_is_case_insensitive() {
    let c = Classifier::default();
    assert_eq!(c.classify("LICENSE"), c.classify("license"));
    assert_eq!(c.resolve("SeCuRiTy"), Some(Intent::Security));
}

#[test]
fn classify_ignores_surrounding_whitespace() {
    let c = Classifier::default();
    assert_eq!(c.classify("   price\n"), c.classify("price"));
}

#[test]
fn classify_is_deterministic() {
    let c = Classifier::default();
    for input in ["sell", "random words", "COST?", "safe"] {
        assert_eq!(c.classify(input), c.classify(input));
    }
}

#[test]
fn license_rule_beats_sell_rule() {
    let c = Classifier::default();
    assert_eq!(c.resolve("I want to sell a license"), Some(Intent::License));
}

#[test]
fn sell_rule_beats_price_rule() {
    let c = Classifier::default();
    assert_eq!(c.resolve("sell at what price"), Some(Intent::Selling));
}

#[test]
fn price_rule_beats_security_rule() {
    let c = Classifier::default();
    assert_eq!(c.resolve("is the cost safe"), Some(Intent::Pricing));
}

#[test]
fn substring_match_inside_words() {
    let c = Classifier::default();
    // "unsafe" contains "safe"; "licenses" contains "license".
    assert_eq!(c.resolve("unsafe"), Some(Intent::Security));
    assert_eq!(c.resolve("licenses"), Some(Intent::License));
}

#[test]
fn custom_table_uses_its_own_fallback() {
    static RULES: &[IntentRule] = &[IntentRule { intent: Intent::Pricing, keywords: &["fee"], response: "fees!" }];
    let c = Classifier::new(RULES, "nope");
    assert_eq!(c.classify("any fee?"), "fees!");
    assert_eq!(c.classify("license"), "nope");
}
