use anyhow::{Context, Result};
use std::path::Path;

use crate::audit::AuditClient;
use crate::history::HistoryStore;
use crate::import::CsvFeed;
use crate::models::{AuditReport, Transaction};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], history: &mut HistoryStore) -> Result<()> {
    match args[1].as_str() {
        "audit" => cli_audit(&args[2..], history),
        "parse" => cli_parse(&args[2..]),
        "history" => cli_history(&args[2..], history),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("volatui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("VolaTUI — AI-powered personal finance auditor");
    println!();
    println!("Usage: volatui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  audit <file.csv>              Run one audit over a CSV feed and print the report");
    println!("  parse <file.csv>              Parse a CSV feed and print the transactions");
    println!("  history                       List recorded audits");
    println!("  history clear                 Delete all recorded audits");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("The audit credential is read from GEMINI_API_KEY (or API_KEY).");
}

fn read_feed(args: &[String], usage: &str) -> Result<String> {
    let Some(file_path) = args.first() else {
        anyhow::bail!("Usage: {usage}");
    };
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the file: {file_path}"))?;
    if raw.trim().is_empty() {
        anyhow::bail!("Data feed is empty. Provide CSV transactions first.");
    }
    Ok(raw)
}

fn cli_audit(args: &[String], history: &mut HistoryStore) -> Result<()> {
    let raw = read_feed(args, "volatui audit <file.csv>")?;

    let transactions = CsvFeed::parse(&raw)?;
    println!("Parsed {} transactions", transactions.len());
    println!("Running audit sequence...");

    let client = AuditClient::from_env();
    let report = client.audit(&raw)?;
    history.record(report.clone(), &raw)?;

    print_report(&report);
    Ok(())
}

fn cli_parse(args: &[String]) -> Result<()> {
    let raw = read_feed(args, "volatui parse <file.csv>")?;
    let transactions = CsvFeed::parse(&raw)?;
    if transactions.is_empty() {
        println!("No transactions parsed");
        return Ok(());
    }
    print_transactions(&transactions);
    Ok(())
}

fn cli_history(args: &[String], history: &mut HistoryStore) -> Result<()> {
    if args.first().map(String::as_str) == Some("clear") {
        history.clear()?;
        println!("History cleared");
        return Ok(());
    }

    if history.is_empty() {
        println!("No audit history");
        return Ok(());
    }

    println!("{:<4} {:<18} {:<10} Burn", "#", "Recorded", "Verdict");
    println!("{}", "─".repeat(48));
    for (i, entry) in history.entries().iter().enumerate() {
        println!(
            "{:<4} {:<18} {:<10.0} {:.1}%",
            i + 1,
            entry.short_timestamp(),
            entry.report.vola_verdict_score,
            entry.report.burn_rate_percentage,
        );
    }
    Ok(())
}

fn print_transactions(transactions: &[Transaction]) {
    println!("{:<12} {:<32} {:<18} Amount", "Date", "Description", "Category");
    println!("{}", "─".repeat(76));
    for txn in transactions {
        println!(
            "{:<12} {:<32} {:<18} {}",
            txn.date,
            txn.description,
            txn.category,
            format_amount(txn.amount),
        );
    }
}

fn print_report(report: &AuditReport) {
    let burn_label = if report.burn_is_critical() {
        "CRITICAL"
    } else {
        "EFFICIENT"
    };

    println!();
    println!("Vola Verdict");
    println!("{}", "─".repeat(48));
    println!("  Score:      {:.0}/100", report.vola_verdict_score);
    println!(
        "  Burn Rate:  {:.1}% ({burn_label})",
        report.burn_rate_percentage
    );
    println!("  Assets:     {}", report.asset_accumulation_summary);

    if !report.leakage_items.is_empty() {
        println!();
        println!("Efficiency Leakage:");
        for leak in &report.leakage_items {
            println!("  - {}: {}", leak.item, leak.reason);
            println!("    → {}", leak.alternative);
        }
    }

    if !report.category_spending.is_empty() {
        println!();
        println!("Category Spending:");
        for entry in &report.category_spending {
            println!("  {:<24} ${:.2}", entry.category, entry.total);
        }
    }

    println!();
    println!("{}", report.detailed_reasoning);
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
