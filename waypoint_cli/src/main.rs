// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line front end: load points, build the forest, run queries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use waypoint_index::{BkdForest, BoxQuery, GeoRecord, KdbTree};

mod input;

/// Index geographic points in memory and answer bounding-box queries.
#[derive(Parser)]
#[command(name = "waypoint", version, about, long_about = None)]
struct Cli {
    /// Points file: one `id latitude longitude` record per line.
    points: PathBuf,

    /// Queries file: one `minLat maxLat minLon maxLon` box per line.
    queries: PathBuf,

    /// Maximum number of records per leaf node (at least 2).
    #[arg(default_value_t = KdbTree::DEFAULT_RECORDS_PER_LEAF)]
    records_per_leaf: usize,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// Running totals across the whole queries file.
#[derive(Default)]
struct QueryTotals {
    queries: usize,
    hits: usize,
    elapsed: Duration,
}

/// Matching ids printed per query before the output is truncated.
const MAX_PRINTED_HITS: usize = 25;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ensure!(
        cli.records_per_leaf >= 2,
        "records per leaf must be at least 2, got {}",
        cli.records_per_leaf
    );

    println!("Loading points into memory...");
    let load_started = Instant::now();
    let mut records = input::read_points(&cli.points)?;
    let load_elapsed = load_started.elapsed();
    ensure!(
        !records.is_empty(),
        "points file {} holds no records",
        cli.points.display()
    );
    println!(
        "A total of {} points have been loaded in {:.3} seconds",
        records.len(),
        load_elapsed.as_secs_f64()
    );
    println!();

    println!("Building the index...");
    let build_started = Instant::now();
    let forest = BkdForest::new(&mut records, cli.records_per_leaf);
    let build_elapsed = build_started.elapsed();
    println!("Index built in {:.3} seconds", build_elapsed.as_secs_f64());
    for tree in forest.trees() {
        debug!(?tree, "forest member");
    }
    println!();

    println!("Executing queries...");
    println!();
    let totals = run_queries(&cli.queries, &forest, &records)?;

    let query_seconds = totals.elapsed.as_secs_f64();
    let per_second = if query_seconds > 0.0 {
        totals.queries as f64 / query_seconds
    } else {
        0.0
    };
    println!("Summary");
    println!("--------");
    println!(
        "Time spent loading {} points into memory: {:.3}",
        records.len(),
        load_elapsed.as_secs_f64()
    );
    println!(
        "Time spent indexing the points: {:.3}",
        build_elapsed.as_secs_f64()
    );
    println!(
        "{} queries have been executed in {:.3} seconds ({:.3} queries per second)",
        totals.queries, query_seconds, per_second
    );
    println!("Total number of hits: {}", totals.hits);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run every well-formed query in the file, skipping malformed lines with a
/// warning; the collector is reused across queries.
fn run_queries(path: &Path, forest: &BkdForest, records: &[GeoRecord]) -> Result<QueryTotals> {
    let file = File::open(path)
        .with_context(|| format!("cannot open queries file {}", path.display()))?;
    let mut totals = QueryTotals::default();
    let mut hits: Vec<usize> = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("cannot read queries file {}", path.display()))?;
        let bounds = match input::parse_query(&line) {
            Ok(bounds) => bounds,
            Err(err) => {
                warn!("skipping query: {err}");
                continue;
            }
        };

        println!(
            "Executing query: {} {} {} {}",
            bounds.lower.lat, bounds.upper.lat, bounds.lower.lon, bounds.upper.lon
        );
        let started = Instant::now();
        forest.query(records, &bounds, &mut hits);
        let elapsed = started.elapsed();

        println!();
        println!("Hits: {}", hits.len());
        println!("Query took {:.3} seconds", elapsed.as_secs_f64());
        print_hits(&hits, records);
        println!();

        totals.queries += 1;
        totals.hits += hits.len();
        totals.elapsed += elapsed;
        hits.clear();
    }
    Ok(totals)
}

fn print_hits(hits: &[usize], records: &[GeoRecord]) {
    println!(" Results");
    println!(" --------------------------");
    if hits.is_empty() {
        println!(" no results for this query!");
        return;
    }
    let mut line = String::new();
    for &index in hits.iter().take(MAX_PRINTED_HITS) {
        line.push(' ');
        line.push_str(&records[index].id);
    }
    if hits.len() > MAX_PRINTED_HITS {
        line.push_str(" ......");
    }
    println!("{line}");
}
