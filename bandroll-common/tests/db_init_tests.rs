//! Database initialization and seeding against on-disk databases

use bandroll_common::db::init::init_database;
use bandroll_common::db::musicians::{insert_musician, load_all_musicians};
use bandroll_common::db::{seed_database, seed_with};
use bandroll_common::NewMusician;
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("bandroll.db");

    let pool = init_database(&db_path, 2)
        .await
        .expect("Database initialization failed");

    assert!(db_path.exists(), "Database file was not created");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM musicians")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    pool.close().await;
}

#[tokio::test]
async fn test_database_opens_existing_and_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("bandroll.db");

    let pool = init_database(&db_path, 2).await.unwrap();
    insert_musician(&pool, &NewMusician::new("Nina Simone", "Piano"))
        .await
        .unwrap();
    pool.close().await;

    let reopened = init_database(&db_path, 2)
        .await
        .expect("Failed to open existing database");
    let musicians = load_all_musicians(&reopened).await.unwrap();

    assert_eq!(musicians.len(), 1);
    assert_eq!(musicians[0].name, "Nina Simone");

    reopened.close().await;
}

#[tokio::test]
async fn test_seed_replaces_existing_rows_on_disk() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("bandroll.db");
    let pool = init_database(&db_path, 2).await.unwrap();

    insert_musician(&pool, &NewMusician::new("Stray Row", "Kazoo"))
        .await
        .unwrap();

    seed_database(&pool).await.expect("Seeding failed");

    let musicians = load_all_musicians(&pool).await.unwrap();
    assert_eq!(musicians.len(), 3);
    assert!(musicians.iter().all(|m| m.name != "Stray Row"));

    pool.close().await;
}

#[tokio::test]
async fn test_seed_with_custom_list() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("bandroll.db");
    let pool = init_database(&db_path, 2).await.unwrap();

    let summary = seed_with(
        &pool,
        &[
            NewMusician::new("Mick Jagger", "Voice"),
            NewMusician::new("Jimi Hendrix", "Guitar"),
        ],
        &[],
    )
    .await
    .unwrap();

    assert_eq!(summary.musicians, 2);
    assert_eq!(summary.bands, 0);

    let musicians = load_all_musicians(&pool).await.unwrap();
    assert_eq!(musicians[1].name, "Jimi Hendrix");
    assert_eq!(musicians[1].instrument, "Guitar");

    pool.close().await;
}
