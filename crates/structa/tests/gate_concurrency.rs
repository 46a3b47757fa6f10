//! Integration test: concurrent factory calls on independent threads.
//!
//! Each worker builds arrays with its own element type and length on every
//! round, with a barrier forcing the rounds to overlap. No worker may ever
//! observe another worker's gate parameters.

use std::sync::{Arc, Barrier};
use std::thread;

use crossbeam_channel::unbounded;
use structa::{gate, ArrayModel, CtorAndArgs, LayoutError, StructuredArray};

const WORKERS: usize = 8;
const ROUNDS: usize = 50;

struct Built {
    worker: usize,
    round: usize,
    expected_len: u64,
    actual_len: u64,
    type_matches: bool,
}

fn label(index: u64) -> Result<String, LayoutError> {
    Ok(index.to_string())
}

fn doubled(index: u64) -> Result<u32, LayoutError> {
    Ok(index as u32 * 2)
}

#[test]
fn concurrent_factory_calls_keep_their_own_params() {
    let barrier = Arc::new(Barrier::new(WORKERS));
    let (tx, rx) = unbounded();

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let barrier = Arc::clone(&barrier);
            let tx = tx.clone();
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    let length = (worker * 7 + round) as i64;
                    barrier.wait();
                    let built = if worker % 2 == 0 {
                        let model = ArrayModel::new::<String>(length);
                        let a = StructuredArray::new_instance(&model, |i| CtorAndArgs::new(label, i))
                            .unwrap();
                        Built {
                            worker,
                            round,
                            expected_len: length as u64,
                            actual_len: a.len(),
                            type_matches: a.element_type().is::<String>(),
                        }
                    } else {
                        let model = ArrayModel::new::<u32>(length);
                        let a = StructuredArray::new_instance(&model, |i| CtorAndArgs::new(doubled, i))
                            .unwrap();
                        Built {
                            worker,
                            round,
                            expected_len: length as u64,
                            actual_len: a.len(),
                            type_matches: a.element_type().is::<u32>(),
                        }
                    };
                    assert!(!gate::is_armed());
                    tx.send(built).unwrap();
                }
            })
        })
        .collect();
    drop(tx);

    let mut received = 0;
    for built in rx.iter() {
        assert_eq!(
            built.actual_len, built.expected_len,
            "worker {} round {} got another call's length",
            built.worker, built.round
        );
        assert!(
            built.type_matches,
            "worker {} round {} got another call's element type",
            built.worker, built.round
        );
        received += 1;
    }
    assert_eq!(received, WORKERS * ROUNDS);

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn failure_on_one_thread_does_not_arm_another() {
    let (tx, rx) = unbounded();
    let failing = {
        let tx = tx.clone();
        thread::spawn(move || {
            let result = StructuredArray::<u32>::new_default(&ArrayModel::new::<u32>(-1));
            tx.send(("failing", result.is_err(), gate::is_armed())).unwrap();
        })
    };
    let healthy = thread::spawn(move || {
        let result = StructuredArray::<u32>::new_default(&ArrayModel::new::<u32>(16));
        tx.send(("healthy", result.is_ok(), gate::is_armed())).unwrap();
    });
    failing.join().unwrap();
    healthy.join().unwrap();

    let mut outcomes: Vec<_> = rx.iter().collect();
    outcomes.sort();
    assert_eq!(outcomes, vec![("failing", true, false), ("healthy", true, false)]);
}
