mod common;

use chrono::{TimeDelta, Utc};
use common::TempDb;
use snippetbox::SnippetboxError;
use snippetbox::db::{LATEST_LIMIT, NewSnippet};

fn new_snippet(title: &str, content: &str, expires_in_days: u32) -> NewSnippet {
    NewSnippet {
        title: title.to_string(),
        content: content.to_string(),
        expires_in_days,
    }
}

#[tokio::test]
async fn insert_then_get_round_trips_and_unknown_ids_have_no_record() {
    let tmp = TempDb::new("db-basic");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    let before = Utc::now();
    let id = db
        .insert(new_snippet("Title A", "Body A", 7))
        .await
        .unwrap();
    let after = Utc::now();
    assert_eq!(id, 1, "first snippet in a fresh table gets id 1");

    let snippet = db.get(id).await.unwrap();
    assert_eq!(snippet.id, 1);
    assert_eq!(snippet.title, "Title A");
    assert_eq!(snippet.content, "Body A");
    assert!(snippet.created >= before && snippet.created <= after);
    assert_eq!(snippet.expires - snippet.created, TimeDelta::days(7));
    assert!(snippet.is_live_at(Utc::now()));

    assert!(matches!(db.get(2).await, Err(SnippetboxError::NoRecord)));
    assert!(matches!(db.get(-1).await, Err(SnippetboxError::NoRecord)));
}

#[tokio::test]
async fn expired_rows_stay_stored_but_are_not_returned() {
    let tmp = TempDb::new("db-expired");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    let now = Utc::now();
    let expired_id = tmp
        .insert_raw("old news", now - TimeDelta::days(3), now - TimeDelta::seconds(1))
        .await;
    let live_id = db.insert(new_snippet("fresh", "still here", 1)).await.unwrap();

    assert!(matches!(
        db.get(expired_id).await,
        Err(SnippetboxError::NoRecord)
    ));
    assert_eq!(db.get(live_id).await.unwrap().title, "fresh");

    let latest = db.latest().await.unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id, live_id);

    let pool = tmp.raw_pool().await;
    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM snippets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 2, "expiry filters rows at query time without deleting them");
    pool.close().await;
}

#[tokio::test]
async fn latest_is_newest_first() {
    let tmp = TempDb::new("db-order");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    assert!(db.latest().await.unwrap().is_empty());

    for n in 1..=3 {
        let id = db
            .insert(new_snippet(&format!("snippet {n}"), "body", 1))
            .await
            .unwrap();
        assert_eq!(id, n);
    }

    let ids: Vec<i64> = db.latest().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn latest_caps_at_ten_live_rows() {
    let tmp = TempDb::new("db-limit");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    for n in 0..12 {
        db.insert(new_snippet(&format!("snippet {n}"), "body", 1))
            .await
            .unwrap();
    }
    // Newest row is already expired; it must not displace a live one.
    let now = Utc::now();
    tmp.insert_raw("expired", now - TimeDelta::days(2), now - TimeDelta::days(1))
        .await;

    let started = Utc::now();
    let latest = db.latest().await.unwrap();
    assert_eq!(latest.len(), usize::try_from(LATEST_LIMIT).unwrap());
    assert!(latest.iter().all(|s| s.expires > started));
    assert!(latest.windows(2).all(|w| w[0].id > w[1].id));
    assert_eq!(latest.first().map(|s| s.id), Some(12));
    assert_eq!(latest.last().map(|s| s.id), Some(3));
}

#[tokio::test]
async fn concurrent_inserts_get_distinct_ids() {
    let tmp = TempDb::new("db-concurrent");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|n| {
            let db = db.clone();
            tokio::spawn(async move { db.insert(new_snippet(&format!("t{n}"), "c", 1)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
}

#[tokio::test]
async fn unrepresentable_expiry_is_rejected_without_writing() {
    let tmp = TempDb::new("db-overflow");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    let res = db.insert(new_snippet("forever", "body", u32::MAX)).await;
    assert!(matches!(res, Err(SnippetboxError::ExpiryOutOfRange(u32::MAX))));
    assert!(db.latest().await.unwrap().is_empty());
}

#[tokio::test]
async fn storage_failures_surface_as_database_errors() {
    let tmp = TempDb::new("db-broken");
    let db = snippetbox::db::spawn(&tmp.url).await.unwrap();

    let pool = tmp.raw_pool().await;
    sqlx::query("DROP TABLE snippets").execute(&pool).await.unwrap();
    pool.close().await;

    assert!(matches!(
        db.latest().await,
        Err(SnippetboxError::DatabaseError(_))
    ));
    assert!(matches!(
        db.get(1).await,
        Err(SnippetboxError::DatabaseError(_))
    ));
}

#[tokio::test]
async fn spawn_fails_for_unusable_database_url() {
    let missing_dir = std::env::temp_dir().join(format!(
        "snippetbox-missing-{}-{}",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let url = format!("sqlite:{}", missing_dir.join("snippetbox.sqlite").display());

    let res = snippetbox::db::spawn(&url).await;
    assert!(matches!(res, Err(SnippetboxError::RactorError(_))));
}
