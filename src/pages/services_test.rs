use super::*;

#[test]
fn fallback_catalog_has_stable_unique_ids() {
    let catalog = fallback_services();
    assert_eq!(catalog.len(), 4);
    let mut ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn fallback_catalog_includes_soc_monitoring() {
    assert!(fallback_services().iter().any(|s| s.id == "soc-monitoring"));
}
