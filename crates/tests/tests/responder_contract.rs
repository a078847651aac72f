use nuvemite_core::{match_rule, respond, rules, Topic, FALLBACK_RESPONSE};

fn response_for(keyword: &str) -> &'static str {
    rules()
        .iter()
        .find(|rule| rule.keywords.contains(&keyword))
        .map(|rule| rule.response)
        .expect("keyword present in table")
}

#[test]
fn known_keywords_hit_their_rule_regardless_of_case_or_context() {
    for (input, keyword) in [
        ("ceo", "ceo"),
        ("Who is the CEO?", "ceo"),
        ("tell me about LIMS", "lims"),
        ("What SERVICES do you have", "service"),
        ("I need a hospital system", "hospital"),
        ("send me an Email", "email"),
        ("what is your mission", "mission"),
    ] {
        assert_eq!(respond(input), response_for(keyword), "input: {input}");
    }
}

#[test]
fn scenario_answers() {
    assert!(respond("Who is the CEO?").contains("Colman Mwakio"));
    assert!(respond("tell me about LIMS").starts_with("Imara LIMS"));
    assert_eq!(match_rule("thanks!").topic, Topic::SmallTalk);
    assert!(respond("thanks!").starts_with("You're very welcome"));
}

#[test]
fn unknown_and_empty_inputs_get_the_fallback() {
    for input in ["xyzzy123", "", "    ", "???"] {
        assert_eq!(respond(input), FALLBACK_RESPONSE, "input: {input:?}");
    }
}

#[test]
fn same_input_same_answer() {
    let inputs = ["Who is the CTO", "data", "branding", "qwerty"];
    for input in inputs {
        assert_eq!(respond(input), respond(input));
    }
}

#[test]
fn table_order_decides_overlaps() {
    // leadership before products
    assert_eq!(match_rule("the team behind lims").topic, Topic::Leadership);
    // products before services
    assert_eq!(match_rule("school software").topic, Topic::Product);
    // services before company
    assert_eq!(match_rule("api vision").topic, Topic::Service);
    // company before contact
    assert_eq!(match_rule("contact about values").topic, Topic::Company);
    // contact before greeting
    assert_eq!(match_rule("hi, phone number?").topic, Topic::Contact);
}

#[test]
fn trailing_rows_never_shadow_earlier_answers() {
    assert_eq!(respond("hospital inventory"), response_for("hospital"));
    assert_eq!(respond("software delivery"), response_for("software"));
    assert_eq!(match_rule("thank you for the sms").topic, Topic::SmallTalk);
    assert_eq!(respond("warehouse stock"), response_for("inventory"));
    assert_eq!(respond("need an ict solution"), response_for("consult"));
}
