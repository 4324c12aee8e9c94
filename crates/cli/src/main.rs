// ABOUTME: CLI for decoding, reformatting, and checking RSS 2.0 documents with rsskit.
// ABOUTME: Reads files or stdin and prints JSON summaries, re-encoded XML, or conformance reports.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rsskit_feed::{decode, encode_to_writer, EncodeOptions, Item, Rss};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rsskit")]
#[command(about = "Decode, reformat and check RSS 2.0 documents", long_about = None)]
struct Args {
    /// Log decoding details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode documents and print a JSON summary of each.
    Decode {
        /// Local file paths. Use "-" to read one document from stdin.
        #[arg(required = true)]
        targets: Vec<String>,

        /// Output compact JSON instead of pretty.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Decode a document and write it back out as normalized XML.
    Fmt {
        /// Local file path, or "-" for stdin.
        target: String,

        /// Spaces per nesting level; 0 writes a single line.
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Omit the leading XML declaration.
        #[arg(long, default_value_t = false)]
        no_declaration: bool,
    },
    /// Decode documents and report RSS 2.0 conformance problems.
    Check {
        /// Local file paths. Use "-" to read one document from stdin.
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Command::Decode { targets, compact } => run_decode(&targets, compact),
        Command::Fmt {
            target,
            indent,
            no_declaration,
        } => run_fmt(&target, indent, !no_declaration),
        Command::Check { targets } => run_check(&targets),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Output format:
/// - Single target that decodes => emit its summary object
/// - Otherwise emit an envelope with a documents array and counts
fn run_decode(targets: &[String], compact: bool) -> Result<bool> {
    let mut results = Vec::new();

    for target in targets {
        match load_document(target) {
            Ok(rss) => results.push(json!({
                "target": target,
                "ok": true,
                "document": summarize(&rss),
                "error": null
            })),
            Err(err) => results.push(json!({
                "target": target,
                "ok": false,
                "document": null,
                "error": format!("{:#}", err)
            })),
        }
    }

    let decoded = results
        .iter()
        .filter(|r| r.get("ok").and_then(Value::as_bool) == Some(true))
        .count();
    let failed = results.len() - decoded;

    let output = match results.as_slice() {
        [only] if decoded == 1 => only.get("document").cloned().unwrap_or_else(|| json!({})),
        _ => json!({
            "documents": results,
            "total": results.len(),
            "decoded": decoded,
            "failed": failed
        }),
    };

    if compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(failed == 0)
}

fn run_fmt(target: &str, indent: usize, declaration: bool) -> Result<bool> {
    let rss = load_document(target)?;
    let opts = EncodeOptions::new().indent(indent).declaration(declaration);

    let mut stdout = io::stdout().lock();
    encode_to_writer(&rss, &opts, &mut stdout).context("writing document")?;
    println!();
    Ok(true)
}

fn run_check(targets: &[String]) -> Result<bool> {
    let mut all_ok = true;

    for target in targets {
        let rss = match load_document(target) {
            Ok(rss) => rss,
            Err(err) => {
                println!("{}: error: {:#}", target, err);
                all_ok = false;
                continue;
            }
        };

        match rss.validate() {
            Ok(()) => println!("{}: ok", target),
            Err(invalid) => {
                all_ok = false;
                for violation in &invalid.violations {
                    println!("{}: {}", target, violation);
                }
            }
        }
    }

    Ok(all_ok)
}

fn summarize(rss: &Rss) -> Value {
    let ch = &rss.channel;
    json!({
        "version": rss.version,
        "title": ch.title,
        "link": ch.link,
        "description": ch.description,
        "language": non_empty(&ch.language),
        "pub_date": non_empty(&ch.pub_date),
        "ttl": ch.ttl,
        "image_url": ch.image.as_ref().map(|i| i.url.as_str()),
        "skip_days": ch.skip_days.as_ref().map(|s| &s.days),
        "skip_hours": ch.skip_hours.as_ref().map(|s| &s.hours),
        "item_count": ch.items.len(),
        "items": ch.items.iter().map(summarize_item).collect::<Vec<_>>()
    })
}

fn summarize_item(item: &Item) -> Value {
    json!({
        "title": non_empty(&item.title),
        "link": non_empty(&item.link),
        "guid": item.guid.as_ref().map(|g| g.value.as_str()),
        "pub_date": non_empty(&item.pub_date),
        "category": item.category.as_ref().map(|c| c.value.as_str()),
        "enclosure": item.enclosure.as_ref().map(|e| json!({
            "url": e.url,
            "type": e.mime_type,
            "length": e.length
        }))
    })
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_document(target: &str) -> Result<Rss> {
    let bytes = load_bytes(target)?;
    debug!(input = %target, bytes = bytes.len(), "loaded input");
    decode(&bytes).with_context(|| format!("decoding {}", target))
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
