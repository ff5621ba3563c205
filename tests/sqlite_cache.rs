use std::sync::Arc;

use ant_hub::domain::sync::{ArticleCache, ArticleStatusRepository, PageKey};
use ant_hub::infrastructure::cache::{SqliteArticleCache, SqliteArticleStatusRepository};
use chrono::NaiveDate;

mod support;

use support::{SyncedArticleBuilder, memory_cache_pool};

#[tokio::test]
async fn replace_page_keeps_server_order_and_other_pages() {
    let pool = memory_cache_pool().await;
    let cache = SqliteArticleCache::new(Arc::clone(&pool));
    let first = PageKey::new(2, 1).unwrap();
    let second = PageKey::new(2, 2).unwrap();

    cache
        .replace_page(second, &[SyncedArticleBuilder::new(50).build()])
        .await
        .unwrap();
    cache
        .replace_page(
            first,
            &[
                SyncedArticleBuilder::new(9).content(&["x", "y"]).build(),
                SyncedArticleBuilder::new(3).build(),
            ],
        )
        .await
        .unwrap();

    let page = cache.list_page(first).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|article| article.id).collect();
    assert_eq!(ids, [9, 3]);
    assert_eq!(page[0].content, ["x", "y"]);
    assert_eq!(cache.count_all().await.unwrap(), 3);

    cache
        .replace_page(first, &[SyncedArticleBuilder::new(4).build()])
        .await
        .unwrap();
    assert_eq!(cache.list_page(first).await.unwrap().len(), 1);
    assert_eq!(cache.list_page(second).await.unwrap()[0].id, 50);
    assert_eq!(cache.count_all().await.unwrap(), 2);
}

#[tokio::test]
async fn aggregate_page_keeps_the_source_catalog() {
    let pool = memory_cache_pool().await;
    let cache = SqliteArticleCache::new(pool);
    let home = PageKey::new(1, 1).unwrap();

    cache
        .replace_page(
            home,
            &[SyncedArticleBuilder::new(7).catalog(3, "News").build()],
        )
        .await
        .unwrap();

    let page = cache.list_page(home).await.unwrap();
    assert_eq!(page[0].catalog_id, 3);
    assert_eq!(page[0].catalog_name, "News");
}

#[tokio::test]
async fn status_upsert_keeps_one_row_per_page() {
    let pool = memory_cache_pool().await;
    let statuses = SqliteArticleStatusRepository::new(Arc::clone(&pool));
    let key = PageKey::new(4, 1).unwrap();
    let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    let tuesday = monday.succ_opt().unwrap();

    assert!(statuses.find(key).await.unwrap().is_none());

    let created = statuses.upsert(key, monday).await.unwrap();
    let updated = statuses.upsert(key, tuesday).await.unwrap();
    assert_eq!(created.id, updated.id);
    assert_eq!(updated.current_date, tuesday);

    let found = statuses.find(key).await.unwrap().unwrap();
    assert_eq!(found.key, key);
    assert!(found.is_current(tuesday));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM article_status")
        .fetch_one(&*pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let stored: String = sqlx::query_scalar("SELECT synced_on FROM article_status")
        .fetch_one(&*pool)
        .await
        .unwrap();
    assert_eq!(stored, "2024-03-12");
}
