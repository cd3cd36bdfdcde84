use crate::models::SwimBlock;
use crate::parsing::blocks::post::union_equipment;

pub fn check(blocks: &[SwimBlock]) {
    for b in blocks {
        assert!(
            !b.exercises.is_empty() || !b.description.is_empty(),
            "block kept without exercises or description: {:?}",
            b.title
        );
        assert!(
            b.repetitions.is_none_or(|n| n >= 1),
            "block repetitions below one: {:?} ({:?})",
            b.repetitions,
            b.title
        );
        assert_eq!(
            b.equipment,
            union_equipment(&b.exercises),
            "block equipment is not the union of its exercises: {:?}",
            b.title
        );

        for e in &b.exercises {
            assert!(
                e.repetitions >= 1,
                "exercise repetitions below one in {:?}: {e:?}",
                b.title
            );
            assert!(
                !e.intensity.as_str().is_empty(),
                "empty intensity in {:?}: {e:?}",
                b.title
            );
            for (i, item) in e.equipment.iter().enumerate() {
                assert!(
                    !e.equipment[..i].contains(item),
                    "duplicate equipment {item:?} in {:?}",
                    b.title
                );
            }
        }
    }
}
