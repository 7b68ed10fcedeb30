mod common;

use common::{add_unnamed_instance, contend_lock, register_instance, scan, uuid, ENDPOINTS, ROOT};
use std::collections::BTreeSet;
use tabulor::coordination::InMemoryCoordinationStore;
use tabulor::discovery::{
    unregistered_ids, DiscoveryError, DiscoveryOrchestrator, InstanceRegistry, ScanErrorTracker,
    ScanOptions,
};
use uuid::Uuid;

const PROD_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
const DEV_ID: &str = "223e4567-e89b-12d3-a456-426614174000";
const STRAY_ID: &str = "323e4567-e89b-12d3-a456-426614174000";

fn worked_example_store() -> InMemoryCoordinationStore {
    let store = InMemoryCoordinationStore::new();
    register_instance(&store, "prod", &uuid(PROD_ID));
    register_instance(&store, "dev", &uuid(DEV_ID));
    add_unnamed_instance(&store, &uuid(STRAY_ID));
    store
}

#[test]
fn discovery_checkpoint_renders_named_rows_sorted_then_summary() {
    let store = worked_example_store();
    let (report, summary) = scan(&store, ScanOptions::default());

    assert_eq!(summary.named, 2);
    assert_eq!(summary.unnamed, 1);
    assert_eq!(summary.errors, 0);

    let rows: Vec<&str> = report
        .lines()
        .filter(|line| line.contains('"'))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("\"dev\"") && rows[0].contains(DEV_ID));
    assert!(rows[1].contains("\"prod\"") && rows[1].contains(PROD_ID));
    assert!(report
        .contains("INFO : 1 unnamed instance was not printed, run with --print-all to see all instances"));
    assert!(!report.contains(STRAY_ID));
}

#[test]
fn discovery_checkpoint_print_all_renders_unregistered_rows_in_uuid_order() {
    let store = worked_example_store();
    let early_stray = uuid("023e4567-e89b-12d3-a456-426614174000");
    add_unnamed_instance(&store, &early_stray);
    contend_lock(&store, &uuid(STRAY_ID), 1, "server-c:9999");

    let options = ScanOptions {
        show_all_instances: true,
        ..ScanOptions::default()
    };
    let (report, summary) = scan(&store, options);

    assert_eq!(summary.unnamed, 2);
    assert!(!report.contains("not printed"));

    // Unnamed rows follow the named ones, in natural UUID order, with the
    // resolved lock holder attached.
    let stray_rows: Vec<usize> = report
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(&early_stray.to_string()) || line.contains(STRAY_ID))
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(stray_rows.len(), 2);
    assert!(stray_rows[0] < stray_rows[1]);
    assert!(report.lines().any(|line| {
        line.contains(STRAY_ID) && line.contains("server-c:9999") && line.contains("\"\"")
    }));
}

#[test]
fn discovery_checkpoint_scan_is_idempotent_over_a_fixed_snapshot() {
    let store = worked_example_store();
    contend_lock(&store, &uuid(PROD_ID), 3, "server-a:9999");

    let options = ScanOptions {
        show_all_instances: true,
        ..ScanOptions::default()
    };
    let (first, _) = scan(&store, options);
    let (second, _) = scan(&store, options);
    assert_eq!(first, second);
}

#[test]
fn discovery_checkpoint_partial_failure_keeps_every_row() {
    let store = InMemoryCoordinationStore::new();
    register_instance(&store, "alpha", &uuid(PROD_ID));
    register_instance(&store, "beta", &uuid(DEV_ID));
    store.put_str("/tabulor/instances/gamma", "not-a-uuid");

    let (report, summary) = scan(&store, ScanOptions::default());

    assert_eq!(summary.named, 3);
    assert_eq!(summary.errors, 1);
    let gamma = report
        .lines()
        .find(|line| line.contains("\"gamma\""))
        .expect("corrupt registration still renders");
    let fields: Vec<&str> = gamma.split('|').map(str::trim).collect();
    assert_eq!(fields[1], "");
    assert!(report.contains("WARN : There were 1 errors, run with --print-errors to see more info"));
}

#[test]
fn discovery_checkpoint_verbose_scan_omits_the_hint_line() {
    let store = InMemoryCoordinationStore::new();
    register_instance(&store, "alpha", &uuid(PROD_ID));
    store.put_str("/tabulor/instances/gamma", "not-a-uuid");

    let options = ScanOptions {
        show_error_detail: true,
        ..ScanOptions::default()
    };
    let (report, summary) = scan(&store, options);
    assert_eq!(summary.errors, 1);
    assert!(!report.contains("WARN"));
}

#[test]
fn discovery_checkpoint_lowest_sequence_contender_is_the_manager() {
    let store = worked_example_store();
    contend_lock(&store, &uuid(PROD_ID), 5, "server-b:9999");
    contend_lock(&store, &uuid(PROD_ID), 3, "server-a:9999");

    let (report, _) = scan(&store, ScanOptions::default());
    let prod = report
        .lines()
        .find(|line| line.contains("\"prod\""))
        .unwrap();
    assert!(prod.contains("server-a:9999"));
    assert!(!prod.contains("server-b:9999"));
}

#[test]
fn discovery_checkpoint_missing_lock_renders_blank_without_error() {
    let store = worked_example_store();
    let (report, summary) = scan(&store, ScanOptions::default());
    assert_eq!(summary.errors, 0);
    let dev = report.lines().find(|line| line.contains("\"dev\"")).unwrap();
    let fields: Vec<&str> = dev.split('|').map(str::trim).collect();
    assert_eq!(fields[2], "");
}

#[test]
fn discovery_checkpoint_names_outage_aborts_with_no_table_output() {
    let store = worked_example_store();
    store.fail_path("/tabulor/instances");

    let orchestrator = DiscoveryOrchestrator::new(ENDPOINTS, ROOT, ScanOptions::default());
    let mut out = Vec::new();
    let err = orchestrator.run(&store, &mut out).unwrap_err();
    assert!(matches!(err, DiscoveryError::NamesUnavailable(_)));
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Instance Name"));
    assert!(!text.contains('"'));
}

#[test]
fn discovery_checkpoint_registry_partitions_the_identifier_universe() {
    let store = worked_example_store();
    let tracker = ScanErrorTracker::new(false);
    let instances = InstanceRegistry::new(&store, ROOT);
    let registry = instances.load_names(&tracker).unwrap();
    let universe = instances.load_identifier_universe(&tracker);
    let leftover = unregistered_ids(&registry, &universe);

    let named: BTreeSet<Uuid> = registry.values().flatten().copied().collect();
    assert!(named.is_disjoint(&leftover));
    let union: BTreeSet<Uuid> = named.union(&leftover).copied().collect();
    assert_eq!(union, universe);
}

#[test]
fn discovery_checkpoint_empty_leftover_set_prints_a_blank_separator() {
    let store = InMemoryCoordinationStore::new();
    register_instance(&store, "only", &uuid(PROD_ID));

    let (report, summary) = scan(&store, ScanOptions::default());
    assert_eq!(summary.unnamed, 0);
    assert!(!report.contains("not printed"));
    assert!(report.ends_with("\n\n"));
}
