use log::debug;

use crate::models::{Equipment, SwimBlock, SwimExercise};

/// Union of the exercises' equipment, in first-seen order.
pub fn union_equipment(exercises: &[SwimExercise]) -> Vec<Equipment> {
    let mut equipment: Vec<Equipment> = Vec::new();
    for item in exercises.iter().flat_map(|e| e.equipment.iter()) {
        if !equipment.contains(item) {
            equipment.push(*item);
        }
    }
    equipment
}

/// Folds standalone `xN` blocks into the block that follows them and drops
/// blocks with neither exercises nor description.
///
/// The carried count replaces the repetitions of the next kept block, whatever
/// that block had, and is then forgotten.
pub fn merge_standalone_repetitions(blocks: Vec<SwimBlock>) -> Vec<SwimBlock> {
    let mut merged = Vec::with_capacity(blocks.len());
    let mut carried: Option<u32> = None;

    for mut block in blocks {
        if block.exercises.is_empty() && block.description.is_empty() {
            match block.repetitions {
                Some(count) if count > 1 => {
                    debug!("carrying x{count} from {:?} to the next block", block.title);
                    carried = Some(count);
                }
                _ => debug!("dropping empty block {:?}", block.title),
            }
            continue;
        }

        if let Some(count) = carried.take() {
            if let Some(own) = block.repetitions {
                debug!("x{count} replaces x{own} on block {:?}", block.title);
            }
            block.repetitions = Some(count);
        }
        merged.push(block);
    }

    merged
}
