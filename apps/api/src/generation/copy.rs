//! Deterministic copy templates: headline, hook, talking points, body, call to action.
//!
//! Template selection indexes on UTF-16 lengths and code units so a browser
//! client computing the same post lands on the same template.

use crate::generation::tone::Tone;

const OPENING_VERBS: [&str; 8] = [
    "Unlock",
    "Reimagine",
    "Transform",
    "Deliver",
    "Accelerate",
    "Amplify",
    "Scale",
    "Elevate",
];

const HOOK_TEMPLATE_COUNT: usize = 4;

/// Length in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// First UTF-16 code unit, or 0 for an empty string.
pub fn first_code_unit(s: &str) -> usize {
    s.encode_utf16().next().map_or(0, usize::from)
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn headline(topic: &str, outcome: &str) -> String {
    format!("{} that {}", capitalize(topic), capitalize(outcome))
}

pub fn hook_index(topic: &str, target: &str) -> usize {
    (utf16_len(topic) + utf16_len(target) + first_code_unit(topic)) % HOOK_TEMPLATE_COUNT
}

pub fn select_hook(topic: &str, target: &str) -> String {
    let topic_lc = topic.to_lowercase();
    match hook_index(topic, target) {
        0 => format!("If you're {target}, this is how {topic_lc} becomes your superpower."),
        1 => format!("{target} teams keep asking me how to nail {topic_lc} — here’s the playbook."),
        2 => format!("Three shifts we made to make {topic_lc} actually work for {target}."),
        _ => format!(
            "Stop treating {topic_lc} as a side project. It’s now the core engine for {target}."
        ),
    }
}

pub fn opening_verb(topic: &str, outcome: &str) -> &'static str {
    OPENING_VERBS[(utf16_len(topic) + utf16_len(outcome)) % OPENING_VERBS.len()]
}

pub fn build_talking_points(topic: &str, outcome: &str, target: &str) -> Vec<String> {
    let verb = opening_verb(topic, outcome);
    vec![
        format!(
            "{verb} {} with a repeatable, data-informed approach.",
            outcome.to_lowercase()
        ),
        format!(
            "Remove the guesswork for {target} by operationalizing {}.",
            topic.to_lowercase()
        ),
        "Measure impact in weeks, not quarters, by aligning on the success signal from day one."
            .to_string(),
    ]
}

pub fn compose_body(topic: &str, target: &str, outcome: &str, tone: Tone) -> Vec<String> {
    let topic_lc = topic.to_lowercase();
    let outcome_lc = outcome.to_lowercase();
    vec![
        format!(
            "{} is no longer a nice-to-have. For {target}, it's the lever that unlocks meaningful {outcome_lc}.",
            capitalize(topic)
        ),
        format!("{}. Here’s how we approach it:", tone.lead()),
        format!(
            "1️⃣ Frame the opportunity: anchor {topic_lc} around a tangible problem {target} feels every day."
        ),
        "2️⃣ Co-create the workflow: embed cross-functional rituals that keep momentum visible."
            .to_string(),
        format!(
            "3️⃣ Instrument the win: define the one metric that proves the {outcome_lc} is real, then celebrate relentlessly."
        ),
        format!(
            "This playbook keeps the team aligned, stakeholders engaged, and {target} confident that the investment in {topic_lc} keeps compounding."
        ),
    ]
}

pub fn call_to_action(target: &str) -> String {
    format!(
        "Curious how this could power your {} team? Let’s unpack it in the comments.",
        target.to_lowercase()
    )
}
