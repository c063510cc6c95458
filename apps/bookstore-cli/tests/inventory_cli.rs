//! End-to-end runs against a database file, one `execute` per invocation.

use std::path::Path;

use bookstore_cli::cli::Cli;
use bookstore_cli::config::AppConfig;
use bookstore_cli::error::{CommandError, ErrorKind};
use bookstore_cli::execute;
use clap::Parser;

fn config_for(path: &Path) -> AppConfig {
    let path = path.to_string_lossy().to_string();
    AppConfig::from_lookup(move |key: &str| (key == "BOOKSTORE_DB_PATH").then(|| path.clone()))
        .unwrap()
}

async fn invoke(config: &AppConfig, args: &[&str]) -> Result<String, CommandError> {
    let argv = std::iter::once("bookstore").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    execute(config, &cli.command).await
}

#[tokio::test]
async fn test_fresh_database_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    let out = invoke(&config, &["get"]).await.unwrap();

    assert_eq!(
        out,
        "1 | Book 1 | Author 1 | 2020-01-01 | 10\n2 | Book 2 | Author 2 | 2021-05-10 | 5"
    );
    assert!(dir.path().join("shop.db").exists());
}

#[tokio::test]
async fn test_changes_persist_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    let out = invoke(&config, &["buy", "--id=1"]).await.unwrap();
    assert_eq!(out, "Book 'Book 1' bought successfully.");

    let out = invoke(&config, &["restock", "--id=2", "--count=3"]).await.unwrap();
    assert_eq!(out, "Book 'Book 2' restocked successfully.");

    let out = invoke(&config, &["get", "--order-by=count"]).await.unwrap();
    assert_eq!(
        out,
        "2 | Book 2 | Author 2 | 2021-05-10 | 8\n1 | Book 1 | Author 1 | 2020-01-01 | 9"
    );
}

#[tokio::test]
async fn test_filters_from_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    let out = invoke(&config, &["get", "--date=2020-01-01"]).await.unwrap();
    assert_eq!(out, "1 | Book 1 | Author 1 | 2020-01-01 | 10");

    let out = invoke(&config, &["get", "--title=BOOK", "--author=2"]).await.unwrap();
    assert_eq!(out, "2 | Book 2 | Author 2 | 2021-05-10 | 5");

    let out = invoke(&config, &["get", "--title=missing"]).await.unwrap();
    assert_eq!(out, "No books found matching the criteria.");
}

#[tokio::test]
async fn test_refusals_do_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    let err = invoke(&config, &["buy", "--id=999"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Book not found.");

    let err = invoke(&config, &["get", "--order-by=bogus"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);

    let err = invoke(&config, &["get", "--date=2020-1-1x"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid date format. Use yyyy-MM-dd.");

    let err = invoke(&config, &["restock", "--id=1", "--count=0"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    let out = invoke(&config, &["get"]).await.unwrap();
    assert_eq!(
        out,
        "1 | Book 1 | Author 1 | 2020-01-01 | 10\n2 | Book 2 | Author 2 | 2021-05-10 | 5"
    );
}

#[tokio::test]
async fn test_buying_out_the_stock() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    for _ in 0..5 {
        invoke(&config, &["buy", "--id=2"]).await.unwrap();
    }

    let err = invoke(&config, &["buy", "--id=2"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Book is out of stock.");

    let out = invoke(&config, &["get", "--title=book 2"]).await.unwrap();
    assert_eq!(out, "2 | Book 2 | Author 2 | 2021-05-10 | 0");
}

#[tokio::test]
async fn test_random_restock_adds_one_to_nine() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("shop.db"));

    let out = invoke(&config, &["restock"]).await.unwrap();
    assert!(out.ends_with("restocked successfully."), "{out}");

    let out = invoke(&config, &["get", "--json"]).await.unwrap();
    let books: serde_json::Value = serde_json::from_str(&out).unwrap();
    let total: i64 = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_i64().unwrap())
        .sum();
    assert!((16..=24).contains(&total), "total {total}");
}
