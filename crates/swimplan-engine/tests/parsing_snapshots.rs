use pretty_assertions::assert_eq;
use swimplan_engine::models::{Equipment, Intensity, RestType, Stroke};
use swimplan_engine::parsing::{parse_swim_text, snapshot};

#[test]
fn fixture_warmup() {
    assert_fixture("warmup");
}

#[test]
fn fixture_inline_block() {
    assert_fixture("inline_block");
}

#[test]
fn fixture_notes_only() {
    assert_fixture("notes_only");
}

fn assert_fixture(name: &str) {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse_swim_text(&text);
    snapshot::invariants(&blocks);

    let snap = snapshot::normalize(&blocks);
    insta::assert_debug_snapshot!(name, snap);
}

/// A `D` inside a drill code never reads as backstroke
#[test]
fn drill_codes_are_protected() {
    let blocks = parse_swim_text("4x50 D2B");
    assert_eq!(blocks[0].exercises[0].stroke, Stroke::Crawl);
}

/// `@` departure wins over `r:` rest wherever they appear
#[test]
fn departure_wins_over_rest() {
    let blocks = parse_swim_text("Série\n4x100 @1'00 V2 r:30''");
    let exercise = &blocks[0].exercises[0];
    assert_eq!(exercise.rest_type, RestType::Departure);
    assert_eq!(exercise.rest, Some(60));
    assert_eq!(exercise.intensity, Intensity::V2);
}

/// Windows line endings and smart quotes do not change the result
#[test]
fn normalization_is_transparent() {
    let plain = parse_swim_text("Série\n4x50 V2 r:20''\n\n8x25 Max\n");
    let messy = parse_swim_text("Série\r\n4x50 V2 r:20\u{2019}\u{2019}\r\n\r\n8x25\u{00A0}Max\r\n");
    assert_eq!(plain, messy);
}

#[test]
fn block_totals_include_block_repetitions() {
    let blocks = parse_swim_text("x2\n\n4x50 Cr\n200 dos palmes\n+ 100 souple");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].total_distance(), 1000);
    assert_eq!(blocks[0].equipment, vec![Equipment::Palmes]);
}

#[test]
fn output_serializes_with_camel_case_fields() {
    let blocks = parse_swim_text("4x50 Br jambes r:15");
    let json = serde_json::to_value(&blocks).unwrap();
    assert_eq!(json[0]["exercises"][0]["strokeType"], "jambes");
    assert_eq!(json[0]["exercises"][0]["rest"], 15);
    assert_eq!(json[0]["repetitions"], serde_json::Value::Null);
}
