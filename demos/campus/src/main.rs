//! campus — timetables for every tenant of a small embedded catalog.
//!
//! Usage: `campus [config.json]`
//!
//! The optional JSON file overrides [`EngineConfig`] fields (camelCase keys,
//! e.g. `{ "seed": 7, "relaxTeacherLock": true }`).  Tenants are scheduled in
//! parallel, one independent engine run each, and written to
//! `output/campus` as CSV and JSON.  Set `RUST_LOG=debug` to see every
//! lesson that could not be placed.

mod catalog;

use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tt_catalog::{ResourceSource, load_catalog_reader};
use tt_core::TenantId;
use tt_engine::{EngineConfig, ProgressEvent, ProgressSink, TimetableEngine, TimetableResult};
use tt_output::{CsvWriter, JsonWriter, TimetableWriter};

use catalog::CATALOG_JSON;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/campus";

// ── Progress ──────────────────────────────────────────────────────────────────

/// Forwards engine progress to the log, tagged with the tenant.
struct LogProgress<'a> {
    tenant: &'a TenantId,
}

impl ProgressSink for LogProgress<'_> {
    fn notify(&mut self, event: ProgressEvent) {
        info!(tenant = %self.tenant, percent = event.percent, "{}", event.message);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    let mut config: EngineConfig = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {p}"))?
        }
        None => EngineConfig::default(),
    };
    config.seed = config.seed.or(Some(SEED));
    Ok(config)
}

struct TenantRun {
    tenant:  TenantId,
    result:  TimetableResult,
    elapsed: Duration,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== campus — timetable synthesis ===");

    // 1. Configuration.
    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    let engine = TimetableEngine::new(config)?;
    println!(
        "Seed: {:?}  |  lunch slots: {:?}  |  relax teacher lock: {}",
        engine.config().seed,
        engine.config().lunch_slots,
        engine.config().relax_teacher_lock,
    );

    // 2. Catalog.
    let catalog = load_catalog_reader(Cursor::new(CATALOG_JSON))?;
    let tenants: Vec<TenantId> = catalog.tenants().into_iter().cloned().collect();
    println!("Loaded catalog with {} tenants", tenants.len());
    println!();

    // 3. One independent run per tenant.
    let runs: Vec<TenantRun> = tenants
        .par_iter()
        .map(|tenant| -> Result<TenantRun> {
            let sections = catalog.sections(tenant)?;
            let t0 = Instant::now();
            let result = engine
                .generate(tenant, &sections, &catalog, &mut LogProgress { tenant })
                .with_context(|| format!("scheduling {tenant}"))?;
            Ok(TenantRun { tenant: tenant.clone(), result, elapsed: t0.elapsed() })
        })
        .collect::<Result<_>>()?;

    // 4. Persist.
    let out = Path::new(OUTPUT_DIR);
    let mut csv = CsvWriter::new(out)?;
    let mut json = JsonWriter::new(out)?;
    for run in &runs {
        csv.write_timetable(&run.tenant, &run.result)?;
        json.write_timetable(&run.tenant, &run.result)?;
    }
    csv.finish()?;
    json.finish()?;

    // 5. Summary.
    println!();
    println!("{:<10} {:>8} {:>8} {:>10} {:>10}", "Tenant", "Lessons", "Placed", "Conflicts", "Time (ms)");
    println!("{}", "-".repeat(50));
    for run in &runs {
        let stats = run.result.stats;
        println!(
            "{:<10} {:>8} {:>8} {:>10} {:>10.2}",
            run.tenant,
            stats.lessons,
            stats.placed,
            stats.conflicts,
            run.elapsed.as_secs_f64() * 1_000.0,
        );
    }

    for run in &runs {
        let Some(alert) = &run.result.alert else { continue };
        println!();
        println!("Shortage alert for {} ({} lessons unplaced):", run.tenant, alert.count);
        for (subject, count) in &alert.details.teachers {
            println!("  teacher for {subject:<24} {count}");
        }
        let rooms = &alert.details.rooms;
        if rooms.lecture_hall > 0 {
            println!("  room LectureHall{:>21}", rooms.lecture_hall);
        }
        if rooms.lab > 0 {
            println!("  room Lab{:>29}", rooms.lab);
        }
    }

    println!();
    println!("Output written to {OUTPUT_DIR}");
    Ok(())
}
