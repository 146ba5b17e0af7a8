mod common;

use common::create_test_store;
use planetas_core::{Planet, PlanetStoreBuilder};

#[tokio::test]
async fn test_fresh_store_is_empty() {
    let (_temp_dir, store) = create_test_store();

    let planets = store.fetch_all().await.expect("Failed to fetch planets");
    assert!(planets.is_empty());
}

#[tokio::test]
async fn test_insert_round_trip() {
    let (_temp_dir, store) = create_test_store();
    let planet = Planet::new("Jupiter", 5.2, 139820.0, Some("Gas Giant".to_string()));

    let existing = store.insert(&Planet::new("Io", 5.2, 3643.0, None)).await.unwrap();
    let id = store.insert(&planet).await.expect("Failed to insert planet");
    assert_ne!(id, existing);

    let planets = store.fetch_all().await.unwrap();
    let stored = planets
        .iter()
        .find(|p| p.id == Some(id))
        .expect("inserted planet should be fetched");
    assert_eq!(stored, &planet.with_id(id));
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (_temp_dir, store) = create_test_store();
    let id = store
        .insert(&Planet::new("Mars", 1.52, 6779.0, None))
        .await
        .unwrap();
    let updated = Planet::new("Mars", 1.52, 6779.0, Some("Red Planet".to_string())).with_id(id);

    assert_eq!(store.update(&updated).await.unwrap(), 1);
    let once = store.fetch_all().await.unwrap();
    assert_eq!(store.update(&updated).await.unwrap(), 1);
    let twice = store.fetch_all().await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice, vec![updated]);
}

#[tokio::test]
async fn test_delete_is_final() {
    let (_temp_dir, store) = create_test_store();
    let id = store
        .insert(&Planet::new("Pluto", 39.5, 2377.0, None))
        .await
        .unwrap();

    assert_eq!(store.delete(id).await.unwrap(), 1);
    assert!(store.fetch_all().await.unwrap().iter().all(|p| p.id != Some(id)));

    assert_eq!(store.delete(id).await.unwrap(), 0);
    let ghost = Planet::new("Pluto", 39.5, 2377.0, None).with_id(id);
    assert_eq!(store.update(&ghost).await.unwrap(), 0);
}

#[tokio::test]
async fn test_mars_scenario() {
    let (_temp_dir, store) = create_test_store();
    let mars = Planet::new("Mars", 1.52, 6779.0, None);

    let id = store.insert(&mars).await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(store.fetch_all().await.unwrap(), vec![mars.clone().with_id(1)]);

    let nicknamed = Planet::new("Mars", 1.52, 6779.0, Some("Red Planet".to_string())).with_id(1);
    assert_eq!(store.update(&nicknamed).await.unwrap(), 1);
    let planets = store.fetch_all().await.unwrap();
    assert_eq!(planets[0].nickname.as_deref(), Some("Red Planet"));

    assert_eq!(store.delete(1).await.unwrap(), 1);
    assert!(store.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_second_store_sees_persisted_rows() {
    let (temp_dir, store) = create_test_store();
    store
        .insert(&Planet::new("Neptune", 30.07, 49244.0, None))
        .await
        .unwrap();
    drop(store);

    let reopened = PlanetStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .unwrap();
    let planets = reopened.fetch_all().await.unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Neptune");
}
