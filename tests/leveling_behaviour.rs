use waveplan::schedule::assign_waves;
use waveplan::schedule::wave::Schedule;
use waveplan::tasks::parse_records;
use waveplan_test_utils::builders::{graph_from_records, RecordBuilder};

fn wave_ids(schedule: &Schedule) -> Vec<Vec<String>> {
    schedule
        .waves()
        .iter()
        .map(|wave| wave.ids().to_vec())
        .collect()
}

#[test]
fn chain_gets_one_wave_per_task() {
    let graph = graph_from_records(&[
        RecordBuilder::new("A").build(),
        RecordBuilder::new("B").predecessor("A").build(),
        RecordBuilder::new("C").predecessor("B").build(),
    ]);

    let schedule = assign_waves(&graph);
    assert_eq!(wave_ids(&schedule), vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn diamond_joins_in_a_single_wave() {
    let graph = graph_from_records(&[
        RecordBuilder::new("A").build(),
        RecordBuilder::new("B").predecessor("A").build(),
        RecordBuilder::new("C").predecessor("A").build(),
        RecordBuilder::new("D").predecessors(&["B", "C"]).build(),
    ]);

    let schedule = assign_waves(&graph);
    assert_eq!(
        wave_ids(&schedule),
        vec![vec!["A"], vec!["B", "C"], vec!["D"]]
    );
}

#[test]
fn roots_keep_input_order_in_wave_zero() {
    let graph = graph_from_records(&[
        RecordBuilder::new("Y").build(),
        RecordBuilder::new("X").build(),
    ]);

    let schedule = assign_waves(&graph);
    assert_eq!(wave_ids(&schedule), vec![vec!["Y", "X"]]);
}

#[test]
fn successor_waves_follow_predecessor_waves() {
    let graph = graph_from_records(&[
        RecordBuilder::new("A").build(),
        RecordBuilder::new("B").predecessor("A").build(),
        RecordBuilder::new("C").predecessor("B").build(),
        RecordBuilder::new("D").predecessor("A").build(),
    ]);

    let schedule = assign_waves(&graph);
    let find_wave = |id: &str| {
        schedule
            .waves()
            .iter()
            .position(|wave| wave.contains(id))
            .unwrap()
    };

    for task in graph.tasks() {
        for predecessor in &task.predecessors {
            assert!(find_wave(&task.id) >= find_wave(predecessor) + 1);
        }
    }
}

// A task reachable through paths of very different depths keeps its early
// placement and is placed again when the deep path reaches it: only the
// frontier wave is checked on re-encounter, never earlier waves.
#[test]
fn shallow_and_deep_paths_keep_both_placements() {
    let graph = graph_from_records(&[
        RecordBuilder::new("X").build(),
        RecordBuilder::new("Y").build(),
        RecordBuilder::new("W1").predecessor("Y").build(),
        RecordBuilder::new("W2").predecessor("W1").build(),
        RecordBuilder::new("Z").predecessors(&["X", "W2"]).build(),
    ]);

    let schedule = assign_waves(&graph);
    assert_eq!(
        wave_ids(&schedule),
        vec![
            vec!["X", "Y"],
            vec!["Z", "W1"],
            vec!["W2"],
            vec!["Z"],
        ]
    );
}

#[test]
fn empty_input_yields_a_single_empty_wave() {
    let graph = parse_records("").unwrap();
    let schedule = assign_waves(&graph);

    assert_eq!(schedule.len(), 1);
    assert!(schedule.wave(0).is_empty());
}
