//! JSON-lines driver for an in-memory catalog.
//!
//! Each input line is one [`CatalogCommand`]; each output line is the JSON
//! [`CatalogReply`] or an `{"error": ...}` object for a line that failed to decode.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use prodcat_catalog::{Catalog, CatalogCommand, Product};

#[derive(Debug, Parser)]
#[command(
    name = "prodcat",
    about = "In-memory product catalog driven by JSON commands on stdin",
    after_help = "Examples:\n  echo '{\"op\":\"list_products_by_name\",\"search\":\"Some\"}' | prodcat --seed-demo"
)]
pub struct Cli {
    #[arg(long, help = "Preload the eleven demo products (ids \"1\" to \"11\")")]
    pub seed_demo: bool,
}

/// Counters for one session, logged when input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub executed: usize,
    pub rejected: usize,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut catalog = if cli.seed_demo { demo_catalog() } else { Catalog::new() };
    tracing::info!(products = catalog.len(), "catalog ready");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stats = run_session(&mut catalog, stdin.lock(), stdout.lock())?;

    tracing::info!(
        executed = stats.executed,
        rejected = stats.rejected,
        products = catalog.len(),
        "input exhausted"
    );
    Ok(())
}

/// Execute every command line from `input`, writing one reply line per command.
///
/// Blank lines are skipped. Decode failures are reported inline and do not stop
/// the session; IO failures do.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: R,
    mut output: W,
) -> anyhow::Result<SessionStats> {
    let mut stats = SessionStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match CatalogCommand::parse(&line) {
            Ok(command) => {
                tracing::debug!(line = index + 1, op = command.name(), "executing command");
                stats.executed += 1;
                serde_json::to_value(catalog.execute(&command))?
            }
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "rejected command");
                stats.rejected += 1;
                json!({ "error": err.to_string() })
            }
        };

        serde_json::to_writer(&mut output, &reply).context("failed to write reply")?;
        output.write_all(b"\n").context("failed to write reply")?;
    }

    output.flush().context("failed to flush output")?;
    Ok(stats)
}

/// The reference data set: "Some Product1..3" (Product1 under two producers)
/// and "Other Product5..11".
pub fn demo_catalog() -> Catalog {
    let some = [
        ("1", "Some Product1", "Some Producer1"),
        ("2", "Some Product2", "Some Producer2"),
        ("3", "Some Product3", "Some Producer2"),
        ("4", "Some Product1", "Some Producer3"),
    ]
    .into_iter()
    .map(|(id, name, producer)| Product::new(id, name, producer));

    let other = (5..=11).map(|i| {
        Product::new(
            i.to_string(),
            format!("Other Product{i}"),
            format!("Other Producer{i}"),
        )
    });

    some.chain(other).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn replies(output: &[u8]) -> Vec<Value> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn demo_catalog_has_eleven_products() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.list_products_by_name("Some Product").len(), 4);
    }

    #[test]
    fn session_answers_each_command_in_order() {
        let mut catalog = demo_catalog();
        let input = concat!(
            r#"{"op":"list_products_by_producer","search":"Some Producer"}"#,
            "\n\n",
            r#"{"op":"delete_product","id":"4"}"#,
            "\n",
            r#"{"op":"list_products_by_name","search":"Some Product1"}"#,
            "\n",
        );
        let mut output = Vec::new();

        let stats = run_session(&mut catalog, input.as_bytes(), &mut output).unwrap();

        assert_eq!(stats, SessionStats { executed: 3, rejected: 0 });
        assert_eq!(
            replies(&output),
            vec![
                json!({"names": ["Some Product1", "Some Product2", "Some Product3", "Some Product1"]}),
                json!({"deleted": true}),
                json!({"names": ["Some Product1"]}),
            ]
        );
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let mut catalog = Catalog::new();
        let input = concat!(
            "not json\n",
            r#"{"op":"add_new_product","id":"1","name":"Widget","producer":"Acme"}"#,
            "\n",
        );
        let mut output = Vec::new();

        let stats = run_session(&mut catalog, input.as_bytes(), &mut output).unwrap();

        assert_eq!(stats, SessionStats { executed: 1, rejected: 1 });
        let replies = replies(&output);
        assert!(replies[0]["error"].as_str().unwrap().starts_with("invalid command"));
        assert_eq!(replies[1], json!({"added": true}));
        assert!(catalog.contains("1"));
    }

    #[test]
    fn cli_parses_seed_flag() {
        let cli = Cli::try_parse_from(["prodcat", "--seed-demo"]).unwrap();
        assert!(cli.seed_demo);
        let cli = Cli::try_parse_from(["prodcat"]).unwrap();
        assert!(!cli.seed_demo);
    }
}
