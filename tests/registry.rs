use commonlog::{Level, Logger, Registry};

#[test]
fn lookup_is_idempotent_by_name() {
    let registry = Registry::new();
    let a = registry.logger("svc");
    let b = registry.logger("svc");
    let other = registry.logger("other");

    assert!(a.same_logger(&b));
    assert!(!a.same_logger(&other));
    assert_eq!(registry.len(), 2);
    assert!(registry.contains("svc"));
    assert!(!registry.contains("missing"));
}

#[test]
fn registries_are_isolated() {
    let first = Registry::new();
    let second = Registry::new();
    let a = first.logger("same");
    let b = second.logger("same");

    assert!(!a.same_logger(&b));
    a.add_console_sink_default();
    assert_eq!(b.sink_count(), 0);
}

#[test]
fn threshold_is_shared_by_handles() {
    let registry = Registry::new();
    let a = registry.logger("shared_threshold");
    let b = registry.logger("shared_threshold");

    a.set_threshold(Level::Error);
    assert_eq!(b.threshold(), Level::Error);
}

#[test]
fn create_uses_global_registry() {
    let a = Logger::create("global_create_test");
    let b = Logger::create("global_create_test");
    assert!(a.same_logger(&b));
    assert!(Registry::global().contains("global_create_test"));
}

#[test]
fn empty_registry() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    let _ = registry.logger("x");
    assert!(!registry.is_empty());
}
