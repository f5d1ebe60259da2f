use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use epp_scheduling::{Picker, PickerRegistry, SchedulerConfig, SchedulingContext, ScoredPod};

/// Outcome of a simulation run.
#[derive(Debug, Serialize)]
pub struct SimReport {
    pub picker: String,
    pub rounds: usize,
    /// Selections in call order; only recorded for a single caller.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sequence: Vec<String>,
    /// `namespace/name` → number of selections.
    pub tally: BTreeMap<String, usize>,
    /// Picks that returned no selection.
    pub empty: usize,
}

pub fn run(
    candidates: &Path,
    config: Option<&Path>,
    rounds: usize,
    threads: usize,
    format: &str,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => SchedulerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    let content = std::fs::read_to_string(candidates)
        .with_context(|| format!("reading candidates {}", candidates.display()))?;
    let pods: Vec<ScoredPod> = serde_json::from_str(&content)?;

    let registry = PickerRegistry::with_defaults();
    let picker = config.resolve_picker(&registry)?;
    info!(
        picker = picker.name(),
        candidates = pods.len(),
        rounds,
        threads,
        "starting simulation"
    );

    let report = simulate(picker, &pods, rounds, threads);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", format_report(&report)),
    }
    Ok(())
}

/// Run `rounds` picks on each of `threads` callers sharing `picker`.
pub fn simulate(
    picker: Arc<dyn Picker>,
    pods: &[ScoredPod],
    rounds: usize,
    threads: usize,
) -> SimReport {
    let threads = threads.max(1);
    let record_sequence = threads == 1;

    let per_thread: Vec<(Vec<String>, usize)> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let picker = picker.clone();
                s.spawn(move || {
                    let mut selected = Vec::with_capacity(rounds);
                    let mut empty = 0;
                    for round in 0..rounds {
                        let ctx = SchedulingContext::new(format!("sim-{t}-{round}"));
                        match picker.pick(&ctx, pods).target_pod {
                            Some(sp) => selected.push(sp.pod.namespaced_name()),
                            None => empty += 1,
                        }
                    }
                    (selected, empty)
                })
            })
            .collect();
        handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .collect()
    });

    let mut tally = BTreeMap::new();
    let mut sequence = Vec::new();
    let mut empty = 0;
    for (selected, skipped) in per_thread {
        empty += skipped;
        for name in &selected {
            *tally.entry(name.clone()).or_insert(0) += 1;
        }
        if record_sequence {
            sequence = selected;
        }
    }

    SimReport {
        picker: picker.name().to_string(),
        rounds: rounds * threads,
        sequence,
        tally,
        empty,
    }
}

pub fn format_report(report: &SimReport) -> String {
    let mut out = format!("Picker: {} ({} picks)\n", report.picker, report.rounds);
    for (i, name) in report.sequence.iter().enumerate() {
        out.push_str(&format!("  {:>4} -> {name}\n", i + 1));
    }
    out.push_str("Tally:\n");
    for (name, count) in &report.tally {
        out.push_str(&format!("  {name}: {count}\n"));
    }
    if report.empty > 0 {
        out.push_str(&format!("  (no selection: {})\n", report.empty));
    }
    out
}
