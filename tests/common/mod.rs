use tabulor::coordination::InMemoryCoordinationStore;
use tabulor::discovery::{DiscoveryOrchestrator, ScanOptions, ScanSummary};
use uuid::Uuid;

pub const ROOT: &str = "/tabulor";
pub const ENDPOINTS: &str = "zk-a:2181,zk-b:2181";

pub fn uuid(text: &str) -> Uuid {
    Uuid::parse_str(text).expect("fixture UUID")
}

/// Registers `name -> id` in the names namespace and creates the identifier
/// folder under the root.
pub fn register_instance(store: &InMemoryCoordinationStore, name: &str, id: &Uuid) {
    store.put_str(&format!("{ROOT}/instances/{name}"), &id.to_string());
    store.put_str(&format!("{ROOT}/{id}"), "");
}

/// Creates an identifier folder with no name registration.
pub fn add_unnamed_instance(store: &InMemoryCoordinationStore, id: &Uuid) {
    store.put_str(&format!("{ROOT}/{id}"), "");
}

/// Adds one leadership-lock contender with the given sequence number.
pub fn contend_lock(store: &InMemoryCoordinationStore, id: &Uuid, seq: u64, holder: &str) {
    store.put_str(&format!("{ROOT}/{id}/leader-lock/lock-{seq:010}"), holder);
}

/// Runs one scan and returns the rendered report plus its summary.
pub fn scan(
    store: &InMemoryCoordinationStore,
    options: ScanOptions,
) -> (String, ScanSummary) {
    let orchestrator = DiscoveryOrchestrator::new(ENDPOINTS, ROOT, options);
    let mut out = Vec::new();
    let summary = orchestrator.run(store, &mut out).expect("scan completes");
    (String::from_utf8(out).expect("report is UTF-8"), summary)
}
