//! Integration test: element placement through a user-defined array type.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use structa::{gate, instantiate, ArrayModel, CtorAndArgs, LayoutError, StructuredArrayBase};
use structa_test_utils::{counted_point, failing_point, FixtureError, Grid, Point};

#[test]
fn placement_invokes_descriptor_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut grid = Grid::new("counted", 4).unwrap();
    for i in 0..4 {
        grid.points
            .construct_element_at(i, CtorAndArgs::new(counted_point, (Arc::clone(&counter), i as i64)))
            .unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 4);
    assert_eq!(grid.get(3).unwrap(), Some(&Point { x: 3, y: 0 }));
}

#[test]
fn failed_placement_leaves_slot_empty_and_gate_idle() {
    let mut grid = Grid::new("failing", 3).unwrap();
    let err: FixtureError = grid
        .points
        .construct_element_at(1, CtorAndArgs::new(failing_point, (8, 9)))
        .unwrap_err();
    assert!(err.constructor_error().is_some());
    assert_eq!(grid.get(1).unwrap(), None);
    assert!(!gate::is_armed());

    let next = Grid::new("after", 2).unwrap();
    assert_eq!(next.points.len(), 2);
}

#[test]
fn placement_out_of_range_is_a_layout_error() {
    let mut grid = Grid::new("small", 2).unwrap();
    let err = grid.place(2, 0, 0).unwrap_err();
    assert_eq!(
        err.layout_error(),
        Some(&LayoutError::IndexOutOfBounds {
            index: 2,
            length: 2
        })
    );
}

#[test]
fn grid_with_wrong_element_model_is_refused() {
    fn grid_ctor(label: String) -> Result<Grid, FixtureError> {
        Grid::gated(label)
    }
    let result = instantiate(
        &ArrayModel::new::<u64>(4),
        CtorAndArgs::new(grid_ctor, "wrong".to_string()),
    );
    match result {
        Err(e) => assert!(matches!(
            e.layout_error(),
            Some(LayoutError::ElementTypeMismatch { .. })
        )),
        Ok(_) => panic!("expected element type mismatch"),
    }
    assert!(!gate::is_armed());
}

proptest! {
    #[test]
    fn direct_instantiation_fails_for_every_length(length in -1_000i64..1_000) {
        // Whether the factory call succeeded or not, it leaves nothing armed.
        let _ = Grid::new("probe", length);
        prop_assert_eq!(
            StructuredArrayBase::<Point>::from_gate().err(),
            Some(LayoutError::DirectInstantiation)
        );
        prop_assert_eq!(
            Grid::gated(format!("len {length}")).err().and_then(|e| e.layout_error().cloned()),
            Some(LayoutError::DirectInstantiation)
        );
    }

    #[test]
    fn factory_builds_declared_length(length in 0i64..2_000) {
        let grid = Grid::new("sized", length).unwrap();
        prop_assert_eq!(grid.points.len(), length as u64);
        prop_assert_eq!(grid.get(length as u64).err(), Some(LayoutError::IndexOutOfBounds {
            index: length as u64,
            length: length as u64,
        }));
        prop_assert!(!gate::is_armed());
    }
}
