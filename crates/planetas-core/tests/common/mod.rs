use planetas_core::{PlanetStore, PlanetStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store
pub fn create_test_store() -> (TempDir, PlanetStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PlanetStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}
