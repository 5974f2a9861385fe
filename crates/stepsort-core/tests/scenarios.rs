//! End-to-end scenarios driven through the controller's public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use stepsort_core::algorithm::AlgorithmKind;
use stepsort_core::config::EngineConfig;
use stepsort_core::controller::{Phase, SortController};
use stepsort_core::mailbox::{SILENCE, tone_frequency};
use stepsort_core::stepper::AlgorithmState;

fn empty_controller() -> SortController {
    SortController::new(EngineConfig::default().with_len(0)).unwrap()
}

#[test]
fn bubble_sort_five_elements() {
    let mut ctl = empty_controller();
    ctl.load(AlgorithmKind::BubbleSort, vec![5, 3, 4, 1, 2]);

    let expected_first_pass = [
        [3, 5, 4, 1, 2],
        [3, 4, 5, 1, 2],
        [3, 4, 1, 5, 2],
        [3, 4, 1, 2, 5],
    ];
    for expected in expected_first_pass {
        let snap = ctl.tick();
        assert_eq!(snap.data, &expected);
        assert!(!snap.sorted);
    }
    assert_eq!(ctl.state().outer_index(), Some(1));

    let mut ticks = 4;
    while !ctl.tick().sorted {
        ticks += 1;
    }
    ticks += 1;

    assert_eq!(ctl.data(), &[1, 2, 3, 4, 5]);
    assert_eq!(ticks, 10);
    assert_eq!(ctl.metrics().comparisons, 10);
    // One swap per inversion: (5,3) (5,4) (5,1) (5,2) (3,1) (3,2) (4,1) (4,2).
    assert_eq!(ctl.metrics().swaps, 8);
}

#[test]
fn merge_sort_four_elements() {
    let mut ctl = empty_controller();
    ctl.load(AlgorithmKind::MergeSort, vec![4, 1, 3, 2]);

    let run_size = |ctl: &SortController| match ctl.state() {
        AlgorithmState::Merge(m) => m.run_size(),
        other => panic!("unexpected state {other:?}"),
    };

    while run_size(&ctl) == 1 {
        ctl.tick();
    }
    assert_eq!(ctl.data(), &[1, 4, 2, 3]);

    while run_size(&ctl) == 2 {
        ctl.tick();
    }
    assert_eq!(ctl.data(), &[1, 2, 3, 4]);
    assert_eq!(run_size(&ctl), 4);

    assert!(ctl.tick().sorted);
}

#[test]
fn reshuffle_then_sort_each_algorithm() {
    let config = EngineConfig::default().with_len(40).with_seed(2024);
    let mut ctl = SortController::new(config).unwrap();
    for kind in AlgorithmKind::ALL {
        ctl.reset(kind, false);
        assert!(matches!(ctl.phase(), Phase::Shuffling { .. }));
        let mut ticks = 0;
        while !ctl.tick().sorted {
            ticks += 1;
            assert!(ticks < 100_000);
        }
        assert!(ctl.data().windows(2).all(|w| w[0] <= w[1]), "{kind}");
        assert!(ctl.metrics().comparisons > 0, "{kind}");
    }
}

#[test]
fn same_seed_reproduces_the_same_run() {
    let run = || {
        let config = EngineConfig::default().with_len(30).with_seed(99);
        let mut ctl = SortController::new(config).unwrap();
        ctl.reset(AlgorithmKind::QuickSort, true);
        let initial = ctl.data().to_vec();
        while !ctl.tick().sorted {}
        (initial, ctl.metrics().comparisons, ctl.metrics().swaps)
    };
    assert_eq!(run(), run());
}

#[test]
fn audio_thread_reads_published_values() {
    let config = EngineConfig::default().with_len(64).with_seed(5);
    let mut ctl = SortController::new(config).unwrap();
    ctl.reset(AlgorithmKind::InsertionSort, true);

    let mailbox = ctl.mailbox();
    let done = Arc::new(AtomicBool::new(false));
    let reader = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut heard = Vec::new();
            while !done.load(Ordering::Acquire) {
                let value = mailbox.latest();
                if value != SILENCE {
                    heard.push(value);
                }
                thread::yield_now();
            }
            heard
        })
    };

    while !ctl.tick().sorted {}
    done.store(true, Ordering::Release);

    let heard = reader.join().unwrap();
    assert!(heard.iter().all(|v| (5..=104).contains(v)));
    assert!(heard.iter().all(|&v| tone_frequency(v).is_some()));
    assert!(ctl.tick().sorted);
    assert_eq!(ctl.latest_sonification_value(), SILENCE);
}
