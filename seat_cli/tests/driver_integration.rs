//! Integration tests for the seating driver: scripts in, rendered venue out.

use seat_cli::{
    commands::{Command, parse_script},
    config::OutputFormat,
    driver::{Driver, DriverReport, REFERENCE_SCRIPT, simulate},
};
use seating::{GroupId, SeatingManager, TableId};
use std::process;

/// Run a script on a fresh venue; returns the text output, the final venue
/// rendering and the report.
fn run_text(capacities: &[usize], script: &str) -> (String, String, DriverReport) {
    let commands = parse_script(script).expect("script parses");
    let manager = SeatingManager::new(capacities).unwrap();

    let mut out = Vec::new();
    let (final_state, report) = {
        let mut driver = Driver::new(manager, OutputFormat::Text, &mut out);
        driver.run(commands).unwrap();
        (driver.manager().to_string(), driver.into_report())
    };

    (String::from_utf8(out).unwrap(), final_state, report)
}

#[test]
fn test_reference_script_final_state() {
    let (text, final_state, _) = run_text(&[2, 2, 3, 4, 5, 6, 6], REFERENCE_SCRIPT);

    assert_eq!(
        final_state,
        "[(!)table 0/2, (!)table 0/2, (!)table 0/3, (!)table 1/4, (!)table 0/5, (!)table 1/6, (!)table 0/6]\n\
         [client 4, client 6]"
    );
    assert!(text.ends_with(&format!("{final_state}\n")));
}

#[test]
fn test_reference_script_promotion_step() {
    let (text, _, _) = run_text(&[2, 2, 3, 4, 5, 6, 6], REFERENCE_SCRIPT);
    let lines: Vec<_> = text.lines().collect();

    let out_step = lines
        .iter()
        .position(|line| *line == "out 2")
        .expect("departure is echoed");
    // #5 (party of 3) took the freed table of 4, leaving one seat.
    assert!(lines[out_step + 1].contains("(!)table 1/4"));
    assert_eq!(lines[out_step + 2], "[client 4, client 3, client 6]");
}

#[test]
fn test_fifo_promotion_over_tighter_fit() {
    let script = "\
in 4
in 2
in 4
out 0
";
    let (_, final_state, report) = run_text(&[4], script);

    assert_eq!(final_state, "[(!)table 2/4]\n[client 4]");
    assert_eq!(report.promotions, 1);
}

#[test]
fn test_rejected_departures_do_not_stop_the_run() {
    let script = "\
in 2
out 5
out 0
out 0
in 1
";
    let (text, final_state, report) = run_text(&[2], script);

    assert_eq!(report.rejected, 2);
    assert_eq!(report.departures, 1);
    assert_eq!(report.arrivals, 2);
    assert_eq!(final_state, "[(!)table 1/2]\n[]");
    assert_eq!(text.matches("! Unknown group").count(), 2);
}

#[test]
fn test_simulation_keeps_venue_consistent() {
    let commands = simulate(500, 2024, 7);
    let manager = SeatingManager::new(&[2, 2, 3, 4, 5, 6, 6]).unwrap();
    let mut driver = Driver::new(manager, OutputFormat::Json, std::io::sink());
    driver.run(commands.clone()).unwrap();

    let manager = driver.manager();
    for table in manager.tables() {
        assert!(table.free_seats() <= table.capacity());
    }
    for group in manager.waitlist() {
        assert!(!group.is_seated());
    }
    assert_eq!(driver.report().rejected, 0);
}

#[test]
fn test_driver_lookup_after_commands() {
    let mut driver = Driver::new(
        SeatingManager::new(&[3, 5]).unwrap(),
        OutputFormat::Text,
        std::io::sink(),
    );
    driver.execute(Command::Arrive(4)).unwrap();
    driver.execute(Command::Arrive(3)).unwrap();

    let manager = driver.manager();
    assert_eq!(manager.lookup(GroupId(0)).map(|t| t.id()), Some(TableId(1)));
    assert_eq!(manager.lookup(GroupId(1)).map(|t| t.id()), Some(TableId(0)));
}

#[test]
fn test_binary_replays_script_file() {
    let path = std::env::temp_dir().join(format!("seat_cli_script_{}.txt", process::id()));
    std::fs::write(&path, "in 3\nin 3\nout 0\n").unwrap();

    let output = process::Command::new(env!("CARGO_BIN_EXE_seat_cli"))
        .args(["--tables", "3", "--script"])
        .arg(&path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("out 0\n[(!)table 0/3]\n[]\n"));
}

#[test]
fn test_binary_rejects_bad_tables() {
    let output = process::Command::new(env!("CARGO_BIN_EXE_seat_cli"))
        .args(["--tables", "2,0"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
