//! Integration tests for picker dispatch through the registry.
//!
//! These tests prove that:
//! 1. A config-selected picker rotates through candidates in order
//! 2. Concurrent requests through one registry share a single rotation
//! 3. Each non-empty pick emits one DEBUG event with index and count
//! 4. Empty candidate lists produce no selection and no event

use std::io;
use std::sync::{Arc, Mutex, Once};
use std::thread;

use tracing_subscriber::fmt::MakeWriter;

use epp_scheduling::{PickerRegistry, Pod, SchedulerConfig, SchedulingContext, ScoredPod};

// ── Tracing setup ────────────────────────────────────────────────

static TRACING_INIT: Once = Once::new();

/// Controlled by `RUST_LOG` (e.g. `RUST_LOG=epp_scheduling=debug`).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn candidates(n: usize) -> Vec<ScoredPod> {
    (0..n)
        .map(|i| {
            ScoredPod::new(
                Pod::new(&format!("vllm-{i}"), "inference", &format!("10.1.0.{i}")),
                1.0 / (i as f64 + 1.0),
            )
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────

#[test]
fn config_selected_picker_rotates_in_order() {
    init_tracing();

    let config = SchedulerConfig::from_toml_str("[picker]\nname = \"roundrobin\"\n").unwrap();
    let registry = PickerRegistry::with_defaults();
    let picker = config.resolve_picker(&registry).unwrap();

    let list = candidates(3);
    let ctx = SchedulingContext::new("req-1").with_target_model("llama-3-8b");
    let order: Vec<String> = (0..6)
        .map(|_| picker.pick(&ctx, &list).target_pod.unwrap().pod.name.clone())
        .collect();

    assert_eq!(
        order,
        vec!["vllm-0", "vllm-1", "vllm-2", "vllm-0", "vllm-1", "vllm-2"]
    );
}

#[test]
fn concurrent_requests_distribute_evenly() {
    init_tracing();

    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;
    const PODS: usize = 5;

    let registry = Arc::new(PickerRegistry::with_defaults());
    let list = Arc::new(candidates(PODS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = registry.clone();
            let list = list.clone();
            thread::spawn(move || {
                let picker = registry.get("roundrobin").unwrap();
                let mut counts = [0usize; PODS];
                for i in 0..PER_THREAD {
                    let ctx = SchedulingContext::new(format!("req-{t}-{i}"));
                    let selected = picker.pick(&ctx, &list).target_pod.unwrap();
                    let idx = list.iter().position(|p| p == selected).unwrap();
                    counts[idx] += 1;
                }
                counts
            })
        })
        .collect();

    let mut totals = [0usize; PODS];
    for h in handles {
        for (total, n) in totals.iter_mut().zip(h.join().unwrap()) {
            *total += n;
        }
    }

    // 2000 distinct counter values over 5 pods: exactly 400 each.
    assert!(totals.iter().all(|&n| n == THREADS * PER_THREAD / PODS));
}

#[test]
fn each_pick_emits_one_debug_event() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();

    let registry = PickerRegistry::with_defaults();
    let picker = registry.get("roundrobin").unwrap();
    let list = candidates(2);

    tracing::subscriber::with_default(subscriber, || {
        picker.pick(&SchedulingContext::new("req-7"), &list);
        picker.pick(&SchedulingContext::new("req-8"), &list);
    });

    let out = capture.contents();
    assert_eq!(out.matches("selecting pod in round-robin fashion").count(), 2);
    assert!(out.contains("request_id=req-7"));
    assert!(out.contains("index=0"));
    assert!(out.contains("index=1"));
    assert!(out.contains("candidates=2"));
    assert!(out.contains("vllm-1"));
}

#[test]
fn empty_candidates_select_nothing_silently() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();

    let registry = PickerRegistry::with_defaults();
    let picker = registry.get("roundrobin").unwrap();

    tracing::subscriber::with_default(subscriber, || {
        let result = picker.pick(&SchedulingContext::new("req-empty"), &[]);
        assert!(result.is_empty());
    });

    assert!(capture.contents().is_empty());

    // The skipped call did not advance the rotation.
    let list = candidates(4);
    let selected = picker.pick(&SchedulingContext::default(), &list).target_pod.unwrap();
    assert_eq!(selected.pod.name, "vllm-0");
}
