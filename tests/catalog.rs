// Catalog content and query guard rails.

use safe_code_resources::{
    CATALOG_LEN, get_resource, list_resources, search_resources,
};

#[test]
fn catalog_holds_twenty_records_in_stable_order() {
    let first = list_resources();
    let second = list_resources();
    assert_eq!(first.len(), 20);
    assert_eq!(CATALOG_LEN, first.len());
    assert_eq!(first, second);
}

#[test]
fn every_record_is_fully_populated() {
    for record in list_resources() {
        assert!(!record.name.is_empty());
        assert!(!record.description.is_empty());
        assert!(!record.language.is_empty());
        assert!(!record.stars.is_empty());
        assert!(!record.link.is_empty());
    }
}

#[test]
fn names_are_unique() {
    let catalog = list_resources();
    for (i, a) in catalog.iter().enumerate() {
        for b in &catalog[i + 1..] {
            assert_ne!(a.name, b.name, "duplicate catalog name");
        }
    }
}

#[test]
fn get_round_trips_every_valid_index() {
    let catalog = list_resources();
    for i in 0..catalog.len() {
        assert_eq!(get_resource(i), Some(&catalog[i]));
    }
    assert_eq!(get_resource(catalog.len()), None);
}

#[test]
fn semgrep_search_is_deterministic_and_case_insensitive() {
    let hits = search_resources("semgrep");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Semgrep");
    assert_eq!(search_resources("SEMGREP"), hits);
    assert_eq!(search_resources("SemGrep"), hits);
}

#[test]
fn trivy_search_finds_the_aqua_scanner() {
    let hits = search_resources("Trivy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].link, "https://github.com/aquasecurity/trivy");
}

#[test]
fn empty_whitespace_and_unmatched_keywords_yield_nothing() {
    assert!(search_resources("").is_empty());
    assert!(search_resources("   ").is_empty());
    assert!(search_resources("nonexistent-xyz-term").is_empty());
}

#[test]
fn language_sentinels_cover_cross_ecosystem_records() {
    let sentinels = list_resources()
        .iter()
        .filter(|r| r.language == "Multi" || r.language == "All")
        .count();
    assert!(sentinels >= 2, "expected cross-ecosystem sentinel tags");
}
