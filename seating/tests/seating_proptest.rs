/// Property-based tests for the seating manager using proptest
///
/// Random venues receive random sequences of arrivals and departures; the
/// capacity and exclusivity invariants must hold after every step.
use proptest::prelude::*;
use seating::{ClientGroup, Departure, GroupId, SeatingError, SeatingManager, Table};
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Step {
    Arrive(usize),
    // Index into the groups that have arrived so far (modulo their count).
    Leave(usize),
}

fn capacities_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=8, 1..=8)
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (1usize..=9).prop_map(Step::Arrive),
        2 => any::<usize>().prop_map(Step::Leave),
    ]
}

fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(step_strategy(), 1..=60)
}

fn check_invariants(manager: &SeatingManager, live: &[GroupId]) -> Result<(), TestCaseError> {
    for table in manager.tables() {
        prop_assert!(table.free_seats() <= table.capacity());
    }

    for &id in live {
        let group = manager.group(id).expect("live group is tracked");
        let seated = manager.lookup(id).is_some();
        let waiting = manager.is_waiting(id);
        prop_assert!(seated != waiting, "{} seated={} waiting={}", id, seated, waiting);
        prop_assert_eq!(group.is_seated(), seated);
    }

    prop_assert_eq!(
        manager.seated_count() + manager.waiting_count(),
        live.len()
    );
    Ok(())
}

fn run(manager: &mut SeatingManager, steps: &[Step]) -> Result<Vec<GroupId>, TestCaseError> {
    let mut arrived: Vec<GroupId> = Vec::new();
    let mut live: Vec<GroupId> = Vec::new();

    for step in steps {
        match step {
            Step::Arrive(size) => {
                let id = manager.arrive(ClientGroup::new(*size).unwrap()).group();
                arrived.push(id);
                live.push(id);
            }
            Step::Leave(pick) => {
                if arrived.is_empty() {
                    continue;
                }
                let id = arrived[pick % arrived.len()];
                match manager.leave(id) {
                    Ok(_) => live.retain(|g| *g != id),
                    Err(err) => {
                        prop_assert_eq!(err, SeatingError::UnknownGroup(id));
                        prop_assert!(!live.contains(&id));
                    }
                }
            }
        }
        check_invariants(manager, &live)?;
    }

    Ok(live)
}

proptest! {
    #[test]
    fn test_invariants_hold_for_any_sequence(
        capacities in capacities_strategy(),
        steps in steps_strategy(),
    ) {
        let mut manager = SeatingManager::new(&capacities).unwrap();
        run(&mut manager, &steps)?;
    }

    #[test]
    fn test_best_fit_is_minimal(
        capacities in capacities_strategy(),
        size in 1usize..=8,
    ) {
        let manager = SeatingManager::new(&capacities).unwrap();
        let choice = manager.select_best_table(size);
        let fitting: Vec<&Table> = manager.tables().iter().filter(|t| t.can_fit(size)).collect();

        match choice {
            None => prop_assert!(fitting.is_empty()),
            Some(id) => {
                let chosen = manager.table(id).unwrap();
                prop_assert!(chosen.can_fit(size));
                // On an empty venue free seats equal capacity, so the chosen
                // table is the first among the smallest fitting tables.
                let smallest = fitting.iter().map(|t| t.capacity()).min().unwrap();
                let first_smallest = fitting.iter().find(|t| t.capacity() == smallest).unwrap();
                prop_assert_eq!(chosen.id(), first_smallest.id());
            }
        }
    }

    #[test]
    fn test_best_fit_on_partly_seated_venue(
        capacities in capacities_strategy(),
        seated in prop::collection::vec(1usize..=8, 0..=10),
        size in 1usize..=8,
    ) {
        let mut manager = SeatingManager::new(&capacities).unwrap();
        for party in seated {
            manager.arrive(ClientGroup::new(party).unwrap());
        }

        // Exact fits on free seats first, then smaller capacity, then table order.
        let mut fitting: Vec<&Table> = manager.tables().iter().filter(|t| t.can_fit(size)).collect();
        fitting.sort_by_key(|t| (t.free_seats() != size, t.capacity(), t.id().0));

        prop_assert_eq!(manager.select_best_table(size), fitting.first().map(|t| t.id()));
    }

    #[test]
    fn test_release_restores_capacity(
        capacities in capacities_strategy(),
        sizes in prop::collection::vec(1usize..=8, 1..=20),
    ) {
        let mut manager = SeatingManager::new(&capacities).unwrap();
        let ids: Vec<_> = sizes
            .iter()
            .map(|&s| manager.arrive(ClientGroup::new(s).unwrap()))
            .collect();

        for arrival in ids {
            let Some(table) = arrival.table() else { continue };
            if manager.lookup(arrival.group()).map(Table::id) != Some(table) {
                continue;
            }
            if let Departure::Served { promoted: None, .. } = manager.leave(arrival.group()).unwrap() {
                let table = manager.table(table).unwrap();
                prop_assert_eq!(table.free_seats(), table.capacity());
            }
        }
    }

    #[test]
    fn test_lookup_never_mutates(
        capacities in capacities_strategy(),
        steps in steps_strategy(),
    ) {
        let mut manager = SeatingManager::new(&capacities).unwrap();
        let live = run(&mut manager, &steps)?;
        let before = manager.view();

        let first: HashMap<GroupId, _> = live.iter().map(|&id| (id, manager.lookup(id).map(Table::id))).collect();
        let second: HashMap<GroupId, _> = live.iter().map(|&id| (id, manager.lookup(id).map(Table::id))).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(manager.view(), before);
    }
}
