//! Whole-pipeline tests for the parsing module.

use pretty_assertions::assert_eq;

use crate::models::{Equipment, Intensity, RestType, Stroke, SwimExercise};
use crate::parsing::{ParseOptions, SwimParser, parse_swim_text, snapshot};

fn parse_checked(text: &str) -> Vec<crate::models::SwimBlock> {
    let blocks = parse_swim_text(text);
    snapshot::invariants(&blocks);
    blocks
}

#[test]
fn empty_input() {
    assert!(parse_checked("").is_empty());
    assert!(parse_checked("   \n\n  ").is_empty());
}

#[test]
fn standalone_repetitions_apply_to_the_next_block() {
    let blocks = parse_checked("x3\n\n4x50 Cr V1");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].repetitions, Some(3));
    assert_eq!(blocks[0].title, "Bloc 2");
}

#[test]
fn standalone_repetitions_replace_the_next_block_count() {
    let blocks = parse_checked("x3\n\nx2\n4x50 Cr");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].repetitions, Some(3));
}

#[test]
fn standalone_refinement_takes_its_leading_integer_as_distance() {
    let blocks = parse_checked("#2x25 educ");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].exercises.len(), 1);
    assert_eq!(blocks[0].exercises[0].repetitions, 2);
    assert_eq!(blocks[0].exercises[0].distance, Some(2));
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let blocks = parse_checked("\u{feff}4x50 Cr");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].title, "Bloc 1");
    assert_eq!(blocks[0].exercises.len(), 1);
}

#[test]
fn distance_refinement_stays_with_its_exercise() {
    let blocks = parse_checked("4x100 Cr V1\n#50 Educ");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].exercises.len(), 1);

    let exercise = &blocks[0].exercises[0];
    assert_eq!(exercise.repetitions, 4);
    assert_eq!(exercise.distance, Some(100));
    assert_eq!(exercise.stroke, Stroke::Crawl);
    assert_eq!(exercise.intensity, Intensity::V1);
    assert!(exercise.modalities.contains("50 Educ"));
}

#[test]
fn block_equipment_has_no_duplicates() {
    let blocks = parse_checked("4x100 palmes\n200 dos palmes");
    assert_eq!(blocks[0].equipment, vec![Equipment::Palmes]);
}

#[test]
fn departure_precedence_survives_the_pipeline() {
    let blocks = parse_checked("5x100 r:30'' @1'00");
    let exercise = &blocks[0].exercises[0];
    assert_eq!(exercise.rest_type, RestType::Departure);
    assert_eq!(exercise.rest, Some(60));
}

#[test]
fn smart_quotes_and_crlf_are_normalized() {
    let blocks = parse_checked("Série\r\n4x50 V2 r:20\u{2019}\u{2019}\r\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].title, "Série");
    assert_eq!(blocks[0].exercises[0].rest, Some(20));
}

#[test]
fn total_lines_are_discarded() {
    let blocks = parse_checked("Echauffement\n400 souple\nTotal : 400m\n\nTotal : 2400m");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].description.is_empty());
}

#[test]
fn annotation_only_block_is_kept() {
    let blocks = parse_checked("S1 : travail de coulées\nB2 : départs plongés");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].exercises.is_empty());
    assert_eq!(
        blocks[0].description,
        "S1 : travail de coulées\nB2 : départs plongés"
    );
}

#[test]
fn title_only_block_is_dropped() {
    let blocks = parse_checked("Echauffement\n\n200 souple");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].title, "Bloc 2");
}

#[test]
fn default_titles_count_blocks_after_total_filtering() {
    let blocks = parse_checked("Total : 1200\n\n4x50 V2\n\n8x25 Max");
    let titles: Vec<&str> = blocks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Bloc 1", "Bloc 2"]);
}

#[test]
fn custom_options() {
    let parser = SwimParser::new(ParseOptions {
        block_title_prefix: "Set".to_string(),
        extra_modality_tokens: vec!["tempo".to_string()],
    });
    let blocks = parser.parse("4x100 Cr tempo");
    assert_eq!(blocks[0].title, "Set 1");
    assert_eq!(blocks[0].exercises[0].modalities, "tempo");
    assert_eq!(parser.options().block_title_prefix, "Set");
}

#[test]
fn unknown_text_never_fails() {
    let blocks = parse_checked("???\n§§ 12x\n#\n+\nx");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].title, "???");
}

#[test]
fn exercises_round_trip_through_json() {
    let blocks = parse_checked("Série\n4x50 Pap V3 d:1' palmes");
    let json = serde_json::to_string(&blocks).unwrap();
    assert!(json.contains("\"restType\":\"departure\""));
    let back: Vec<crate::models::SwimBlock> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, blocks);
    assert_eq!(
        back[0].exercises[0],
        SwimExercise {
            repetitions: 4,
            distance: Some(50),
            stroke: Stroke::Pap,
            intensity: Intensity::V3,
            rest: Some(60),
            rest_type: RestType::Departure,
            equipment: vec![Equipment::Palmes],
            ..SwimExercise::default()
        }
    );
}
