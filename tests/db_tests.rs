//! Unit tests for the SQLite bootstrap helpers.

use homekeeper::db::{ensure_table, init_db, DbPool};
use homekeeper::AppError;

fn table_exists(pool: &DbPool, name: &str) -> bool {
    let mut stmt = pool
        .conn
        .prepare("SELECT tbl_name FROM sqlite_master WHERE type='table' AND name = ?1")
        .expect("prepare");
    stmt.exists([name]).expect("query")
}

#[test]
fn test_ensure_table_creates_when_missing() {
    let pool = DbPool::in_memory().expect("open db");
    ensure_table(
        &pool.conn,
        "chores",
        Some("CREATE TABLE chores (id INTEGER PRIMARY KEY, name TEXT)"),
    )
    .expect("create works");
    assert!(table_exists(&pool, "chores"));
}

#[test]
fn test_ensure_table_is_idempotent() {
    let pool = DbPool::in_memory().expect("open db");
    let sql = "CREATE TABLE chores (id INTEGER PRIMARY KEY)";
    ensure_table(&pool.conn, "chores", Some(sql)).expect("first call creates");
    // second call must be a no-op even without a statement
    ensure_table(&pool.conn, "chores", None).expect("existing table is fine");
    ensure_table(&pool.conn, "chores", Some(sql)).expect("re-running is harmless");
}

#[test]
fn test_ensure_table_requires_sql_when_missing() {
    let pool = DbPool::in_memory().expect("open db");

    let err = ensure_table(&pool.conn, "missing", None).expect_err("no sql");
    assert!(matches!(err, AppError::SqlDefinition(name) if name == "missing"));

    let err = ensure_table(&pool.conn, "missing", Some("   ")).expect_err("blank sql");
    assert!(matches!(err, AppError::SqlDefinition(_)));
    assert!(!table_exists(&pool, "missing"));
}

#[test]
fn test_ensure_table_surfaces_invalid_sql() {
    let pool = DbPool::in_memory().expect("open db");
    let err = ensure_table(&pool.conn, "broken", Some("CREATE TABEL broken (id)"))
        .expect_err("syntax error");
    assert!(matches!(err, AppError::Db(_)));
}

#[test]
fn test_init_db_bootstraps_events_table() {
    let pool = DbPool::in_memory().expect("open db");
    init_db(&pool.conn).expect("bootstrap");
    assert!(table_exists(&pool, "events"));
    // schema is stable across reruns
    init_db(&pool.conn).expect("rerun is a no-op");
}

#[test]
fn test_init_db_on_file_backed_pool() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("homekeeper_test.sqlite");
    let pool = DbPool::new(path.to_str().expect("utf-8 path")).expect("open db");
    init_db(&pool.conn).expect("bootstrap");
    assert!(table_exists(&pool, "events"));
}

#[test]
fn test_with_conn_helper() {
    let mut pool = DbPool::in_memory().expect("open db");
    init_db(&pool.conn).expect("bootstrap");
    let count: i64 = pool
        .with_conn(|conn| conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0)))
        .expect("query");
    assert_eq!(count, 0);
}
