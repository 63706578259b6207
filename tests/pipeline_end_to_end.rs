use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use waveplan::cli::CliArgs;
use waveplan::errors::WaveplanError;
use waveplan::run;

type TestResult = Result<(), Box<dyn Error>>;

const FAN_OUT: &str = "id=\"1\" predecessors=\"\" instance=\"srv1\" process=\"P1\"\n\
                       id=\"2\" predecessors=\"1\" instance=\"srv1\" process=\"P2\"\n\
                       id=\"3\" predecessors=\"1\" instance=\"srv1\" process=\"P3\"\n";

const FAN_OUT_SCHEDULED: &str = "instance=\"srv1\" process=\"P1\"\n\
                                 wait\n\
                                 instance=\"srv1\" process=\"P2\"\n\
                                 instance=\"srv1\" process=\"P3\"\n";

fn args(input: &Path, workers: usize, output: &Path) -> CliArgs {
    CliArgs {
        input: input.to_path_buf(),
        max_workers: NonZeroUsize::new(workers).unwrap(),
        output: output.to_path_buf(),
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn fan_out_schedules_into_two_waves() -> TestResult {
    waveplan_test_utils::init_tracing();
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, FAN_OUT)?;

    let waves = run(&args(&input, 2, &output))?;

    assert_eq!(waves, 2);
    assert_eq!(fs::read_to_string(&output)?, FAN_OUT_SCHEDULED);
    Ok(())
}

#[test]
fn worker_budget_one_cannot_split_the_full_wave() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, FAN_OUT)?;

    let waves = run(&args(&input, 1, &output))?;

    assert_eq!(waves, 2);
    assert_eq!(fs::read_to_string(&output)?, FAN_OUT_SCHEDULED);
    Ok(())
}

#[test]
fn repeated_runs_are_byte_identical() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, FAN_OUT)?;

    run(&args(&input, 2, &output))?;
    let first = fs::read(&output)?;
    run(&args(&input, 2, &output))?;
    let second = fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn output_records_never_carry_reserved_keys() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, FAN_OUT)?;

    run(&args(&input, 2, &output))?;

    for line in fs::read_to_string(&output)?.lines() {
        assert!(!line.contains("id="));
        assert!(!line.contains("predecessors="));
        assert!(!line.contains("successors="));
    }
    Ok(())
}

#[test]
fn dangling_reference_fails_and_writes_nothing() -> TestResult {
    waveplan_test_utils::init_tracing();
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, "id=\"2\" predecessors=\"1\" process=\"P2\"\n")?;

    let err = run(&args(&input, 2, &output)).unwrap_err();

    assert!(matches!(
        err,
        WaveplanError::DanglingReferenceError { .. }
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn unreadable_input_is_an_io_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("no-such-file.txt");
    let output = dir.path().join("schedule.txt");

    let err = run(&args(&input, 2, &output)).unwrap_err();

    assert!(matches!(err, WaveplanError::IoError(_)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn dry_run_writes_no_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tasks.txt");
    let output = dir.path().join("schedule.txt");
    fs::write(&input, FAN_OUT)?;

    let mut dry = args(&input, 2, &output);
    dry.dry_run = true;
    let waves = run(&dry)?;

    assert_eq!(waves, 2);
    assert!(!output.exists());
    Ok(())
}
