//! # Command-Line Surface
//!
//! ```text
//! bookstore [--db=PATH] [-v] get     [--title=S] [--author=S] [--date=yyyy-MM-dd] [--order-by=KEY] [--json]
//! bookstore [--db=PATH] [-v] buy     --id=N
//! bookstore [--db=PATH] [-v] restock [--id=N] [--count=N]
//! ```
//!
//! Flag values are kept as raw strings; `bookstore-core` validates them so
//! every malformed value gets the same message as a missing one.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookstore")]
#[command(version, about = "Bookstore inventory: list, buy and restock books")]
pub struct Cli {
    /// SQLite database file (overrides BOOKSTORE_DB_PATH).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List books, optionally filtered and ordered.
    Get(GetArgs),
    /// Buy one copy of a book.
    Buy(BuyArgs),
    /// Add copies to a book. Without --id a random book gets a random amount.
    Restock(RestockArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct GetArgs {
    /// Case-insensitive title substring.
    #[arg(long)]
    pub title: Option<String>,
    /// Case-insensitive author substring.
    #[arg(long)]
    pub author: Option<String>,
    /// Exact publication date (yyyy-MM-dd).
    #[arg(long)]
    pub date: Option<String>,
    /// Sort ascending by title, author, date or count.
    #[arg(long = "order-by", value_name = "KEY")]
    pub order_by: Option<String>,
    /// Print the listing as a JSON array.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct BuyArgs {
    /// Book id.
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RestockArgs {
    /// Book id. Omit to restock a random book.
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,
    /// Copies to add (positive). Omit for a random amount from 1 to 9.
    #[arg(long, allow_hyphen_values = true)]
    pub count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_with_key_value_flags() {
        let cli = parse(&[
            "bookstore",
            "get",
            "--title=Book",
            "--author=author 1",
            "--date=2020-01-01",
            "--order-by=count",
        ]);

        let Command::Get(args) = cli.command else {
            panic!("expected get");
        };
        assert_eq!(args.title.as_deref(), Some("Book"));
        assert_eq!(args.author.as_deref(), Some("author 1"));
        assert_eq!(args.date.as_deref(), Some("2020-01-01"));
        assert_eq!(args.order_by.as_deref(), Some("count"));
        assert!(!args.json);
    }

    #[test]
    fn test_buy_keeps_raw_id() {
        let cli = parse(&["bookstore", "buy", "--id=abc"]);
        let Command::Buy(args) = cli.command else {
            panic!("expected buy");
        };
        assert_eq!(args.id.as_deref(), Some("abc"));

        let cli = parse(&["bookstore", "buy"]);
        let Command::Buy(args) = cli.command else {
            panic!("expected buy");
        };
        assert!(args.id.is_none());
    }

    #[test]
    fn test_restock_accepts_negative_values() {
        let cli = parse(&["bookstore", "restock", "--id", "2", "--count", "-3"]);
        let Command::Restock(args) = cli.command else {
            panic!("expected restock");
        };
        assert_eq!(args.id.as_deref(), Some("2"));
        assert_eq!(args.count.as_deref(), Some("-3"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["bookstore", "restock", "--db=/tmp/shop.db", "-v"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/shop.db")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["bookstore", "sell"]).is_err());
    }
}
