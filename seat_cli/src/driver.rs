//! Replays commands against a seating manager and renders every step.

use rand::{Rng, SeedableRng, rngs::StdRng};
use seating::{
    Arrival, ClientGroup, Departure, GroupId, SeatingEvent, SeatingManager, VenueView,
};
use serde::Serialize;
use std::{
    fmt,
    io::{self, Write},
};

use crate::{commands::Command, config::OutputFormat, logging};

/// The opening night of the reference venue (tables of 2, 2, 3, 4, 5, 6, 6).
pub const REFERENCE_SCRIPT: &str = "\
# ten parties walk in
in 3
in 5
in 3
in 5
in 6
in 3
in 2
in 4
in 3
in 6
# a seated party of 3 leaves, a waiting party of 3 gives up
out 2
out 8
# a late couple
in 2
";

/// Counters kept over a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DriverReport {
    pub arrivals: usize,
    pub seated_on_arrival: usize,
    pub waitlisted: usize,
    pub departures: usize,
    pub abandoned: usize,
    pub promotions: usize,
    pub rejected: usize,
}

impl fmt::Display for DriverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} arrivals ({} seated, {} waitlisted), {} departures ({} from the waitlist), {} promotions, {} rejected",
            self.arrivals,
            self.seated_on_arrival,
            self.waitlisted,
            self.departures,
            self.abandoned,
            self.promotions,
            self.rejected
        )
    }
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    command: Option<Command>,
    events: &'a [SeatingEvent],
    error: Option<&'a str>,
    venue: VenueView,
}

/// Feeds commands to one venue and writes its state after each of them.
pub struct Driver<W> {
    manager: SeatingManager,
    format: OutputFormat,
    out: W,
    report: DriverReport,
    step: usize,
}

impl<W: Write> Driver<W> {
    pub fn new(manager: SeatingManager, format: OutputFormat, out: W) -> Self {
        Self {
            manager,
            format,
            out,
            report: DriverReport::default(),
            step: 0,
        }
    }

    pub fn manager(&self) -> &SeatingManager {
        &self.manager
    }

    pub fn report(&self) -> &DriverReport {
        &self.report
    }

    pub fn into_report(self) -> DriverReport {
        self.report
    }

    /// Render the opening state, then every command in order.
    ///
    /// A departure the venue refuses is reported and counted; the run goes on.
    pub fn run(&mut self, commands: impl IntoIterator<Item = Command>) -> io::Result<()> {
        self.render(None, &[], None)?;
        for command in commands {
            self.execute(command)?;
        }
        self.out.flush()
    }

    /// Apply one command and render the result.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        self.step += 1;
        let mut error = None;

        match command {
            Command::Arrive(size) => match ClientGroup::new(size) {
                Ok(group) => {
                    self.report.arrivals += 1;
                    match self.manager.arrive(group) {
                        Arrival::Seated { .. } => self.report.seated_on_arrival += 1,
                        Arrival::Waitlisted { .. } => self.report.waitlisted += 1,
                    }
                }
                Err(err) => error = Some(err.to_string()),
            },
            Command::Leave(group) => match self.manager.leave(group) {
                Ok(departure) => {
                    self.report.departures += 1;
                    if let Departure::Abandoned { .. } = departure {
                        self.report.abandoned += 1;
                    }
                    if departure.promoted().is_some() {
                        self.report.promotions += 1;
                    }
                }
                Err(err) => error = Some(err.to_string()),
            },
            Command::Show => {}
        }

        if let Some(reason) = &error {
            self.report.rejected += 1;
            logging::log_rejected_command(self.step, &command.to_string(), reason);
        }

        let events = self.manager.drain_events();
        for event in &events {
            logging::log_seating_event(self.step, event);
        }

        self.render(Some(command), &events, error.as_deref())
    }

    fn render(
        &mut self,
        command: Option<Command>,
        events: &[SeatingEvent],
        error: Option<&str>,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                match command {
                    Some(command) => writeln!(self.out, "{command}")?,
                    None => writeln!(self.out, "open")?,
                }
                if let Some(reason) = error {
                    writeln!(self.out, "! {reason}")?;
                }
                writeln!(self.out, "{}", self.manager)
            }
            OutputFormat::Json => {
                let record = StepRecord {
                    step: self.step,
                    command,
                    events,
                    error,
                    venue: self.manager.view(),
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)
            }
        }
    }
}

/// Generate `events` random commands from a seed.
///
/// Departures only ever name groups that are still in the venue, so every
/// generated command is accepted.
pub fn simulate(events: usize, seed: u64, max_party: usize) -> Vec<Command> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut live: Vec<u64> = Vec::new();
    let mut next_id = 0u64;
    let max_party = max_party.max(1);

    (0..events)
        .map(|_| {
            if !live.is_empty() && rng.random_bool(0.4) {
                let index = rng.random_range(0..live.len());
                Command::Leave(GroupId(live.swap_remove(index)))
            } else {
                live.push(next_id);
                next_id += 1;
                Command::Arrive(rng.random_range(1..=max_party))
            }
        })
        .collect()
}
