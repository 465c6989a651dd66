//! Integration tests for tessera-cities
//!
//! Loads a city file from disk through the cache and plans budgets with the
//! overrides it carries.

use std::io::Write;
use tempfile::NamedTempFile;
use tessera_budget::{BudgetPlanner, BudgetSource};
use tessera_cities::{CityCache, CityError, TomlCitySource};
use tessera_domain::traits::CitySource;

const CITIES: &str = r#"
[[cities]]
slug = "lisbon"
name = "Lisbon"
population = 545000
radius_meters = 9000
grid_rows = 4
grid_cols = 4

[[cities]]
slug = "tokyo"
name = "Tokyo"
population = 14000000
radius_meters = 15000
grid_rows = 6
grid_cols = 6

[cities.overrides]
max_count = 20000
min_rating = 4.3
"#;

fn city_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = city_file(CITIES);
    let source = TomlCitySource::new(file.path());

    let cities = source.load_cities().unwrap();
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[1].overrides.max_count, Some(20000));
    assert_eq!(source.path(), file.path());
}

#[test]
fn test_cache_serves_stale_file_until_invalidated() {
    let mut file = city_file(CITIES);
    let source = TomlCitySource::new(file.path());
    let mut cache = CityCache::per_run();

    assert_eq!(cache.get_or_load(&source).unwrap().len(), 2);

    // Append a city; the per-run cache keeps serving the old list.
    writeln!(file, "\n[[cities]]\nslug = \"porto\"\nname = \"Porto\"").unwrap();
    assert_eq!(cache.get_or_load(&source).unwrap().len(), 2);

    cache.invalidate();
    let cities = cache.get_or_load(&source).unwrap();
    assert_eq!(cities.len(), 3);
    assert!(cache.find("porto").is_some());
}

#[test]
fn test_bad_file_keeps_error_kind_through_cache() {
    let file = city_file("[[cities]]\nslug = \"a\"\n[[cities]]\nslug = \"a\"\n");
    let source = TomlCitySource::new(file.path());
    let mut cache = CityCache::per_run();

    assert!(matches!(
        source.load_cities(),
        Err(CityError::DuplicateSlug(_))
    ));
    assert!(matches!(
        cache.get_or_load(&source),
        Err(CityError::DuplicateSlug(slug)) if slug == "a"
    ));
    assert!(cache.get().is_none());
}

#[test]
fn test_missing_file_through_cache() {
    let source = TomlCitySource::new("/nonexistent/cities.toml");
    let mut cache = CityCache::per_run();

    assert!(matches!(
        cache.get_or_load(&source),
        Err(CityError::FileRead(_))
    ));
}

#[test]
fn test_malformed_file_through_cache() {
    let file = city_file("[[cities]\nslug = \"broken\"\n");
    let source = TomlCitySource::new(file.path());
    let mut cache = CityCache::per_run();

    assert!(matches!(
        cache.get_or_load(&source),
        Err(CityError::TomlParse(_))
    ));
}

#[test]
fn test_plan_cached_cities() {
    let file = city_file(CITIES);
    let source = TomlCitySource::new(file.path());
    let mut cache = CityCache::per_run();
    let planner = BudgetPlanner::default_config();

    cache.get_or_load(&source).unwrap();

    let lisbon = planner.plan_city(cache.find("lisbon").unwrap());
    assert_eq!(lisbon.caps.max_count, 5089);
    assert_eq!(lisbon.gates.min_reviews, 2);
    assert_eq!(lisbon.caps_source, BudgetSource::Computed);

    let tokyo = planner.plan_city(cache.find("tokyo").unwrap());
    assert_eq!(tokyo.caps.max_count, 20000);
    // 40 * pi * 15^2 = 28274 / 36 * 2.5 = 1963 -> 120
    assert_eq!(tokyo.caps.per_tile_max, 120);
    assert_eq!(tokyo.caps_source, BudgetSource::Mixed);
    assert_eq!(tokyo.gates.min_rating, 4.3);
    assert_eq!(tokyo.gates.min_reviews, 6);
    assert_eq!(tokyo.gates_source, BudgetSource::Mixed);
}
