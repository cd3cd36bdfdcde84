use serde::Serialize;

use crate::models::{Equipment, SwimBlock, SwimExercise};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub title: String,
    pub repetitions: String,
    pub description: String,
    pub modalities: String,
    pub equipment: String,
    pub exercises: Vec<String>,
}

pub fn normalize(blocks: &[SwimBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            title: b.title.clone(),
            repetitions: b
                .repetitions
                .map_or_else(|| "-".to_string(), |n| format!("x{n}")),
            description: b.description.clone(),
            modalities: b.modalities.clone(),
            equipment: join_equipment(&b.equipment),
            exercises: b.exercises.iter().map(exercise_line).collect(),
        })
        .collect();

    Snap { blocks }
}

/// One line per exercise: `4x50 crawl/nc V2 rest:20 [palmes] | CB`.
fn exercise_line(e: &SwimExercise) -> String {
    let distance = e
        .distance
        .map_or_else(|| "?".to_string(), |d| d.to_string());
    let rest = e
        .rest
        .map_or_else(|| "-".to_string(), |s| format!("{}:{s}", e.rest_type));

    let mut line = format!(
        "{}x{distance} {}/{} {} {rest}",
        e.repetitions, e.stroke, e.stroke_type, e.intensity
    );
    if !e.equipment.is_empty() {
        line.push_str(&format!(" [{}]", join_equipment(&e.equipment)));
    }
    if !e.modalities.is_empty() {
        line.push_str(" | ");
        line.push_str(&e.modalities.replace('\n', " ; "));
    }
    line
}

fn join_equipment(equipment: &[Equipment]) -> String {
    equipment
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
