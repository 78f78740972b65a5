//! smallnet — smallest demo for the rust_ec framework.
//!
//! Runs the reference interactive scenario headless: 50 agents with 3
//! expected connections each, stepped through three phases (a baseline,
//! an engagement-cranked phase seeded with a viral doom post, and a
//! chronological recovery phase).  Tick summaries and mood snapshots land
//! in `output/smallnet/` as CSV; final agent states as JSON.
//!
//! An interactive frontend would drive the same engine with
//! `Driver::tick_interval(Duration::from_millis(500))` and read
//! `snapshots()` between batches; everything below works identically.

use std::path::Path;

use anyhow::Result;

use ec_core::{AgentId, ConfigPatch, SimulationConfig};
use ec_engine::{Driver, Engine, EngineObserver, MoodHistory, TickSummary};
use ec_output::{CsvWriter, EngineOutputObserver, OutputWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:         usize = 50;
const AVERAGE_CONNECTIONS: usize = 3;
const SEED:                u64   = 42;
const PHASE_TICKS:         u64   = 100; // per phase, 3 phases
const SNAPSHOT_EVERY:      u64   = 10;
const PROGRESS_EVERY:      u64   = 25;

// ── Observer: progress printing + CSV + mood history ──────────────────────────

struct ProgressObserver<W: OutputWriter> {
    output:  EngineOutputObserver<W>,
    history: MoodHistory,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(output: EngineOutputObserver<W>) -> Self {
        Self { output, history: MoodHistory::new() }
    }
}

impl<W: OutputWriter> EngineObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.history.on_tick_end(summary);
        self.output.on_tick_end(summary);
        if summary.tick.0 % PROGRESS_EVERY == 0 {
            println!(
                "  {}: {} new posts, mean happiness {:.3}",
                summary.tick,
                summary.new_post_count(),
                summary.average_happiness
            );
        }
    }

    fn on_snapshot(&mut self, tick: ec_core::Tick, agents: &ec_agent::AgentStore) {
        self.output.on_snapshot(tick, agents);
    }

    fn on_run_end(&mut self, final_tick: ec_core::Tick) {
        self.output.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallnet — rust_ec emotional contagion ===");
    println!("Agents: {AGENT_COUNT}  |  Avg connections: {AVERAGE_CONNECTIONS}  |  Seed: {SEED}");
    println!();

    // 1. Build and populate the engine.
    let mut engine = Engine::with_seed(SimulationConfig::default(), SEED);
    engine.initialize(AGENT_COUNT, AVERAGE_CONNECTIONS);
    println!(
        "Population: {} agents, {} follow edges",
        engine.agent_count(),
        engine.graph.edge_count()
    );

    // 2. Find the most-followed agent — the injection target.
    let influencer = engine
        .snapshots()
        .into_iter()
        .max_by_key(|s| s.followers.len())
        .map(|s| s.id)
        .unwrap_or(AgentId(0));
    println!(
        "Influencer: {influencer} with {} followers",
        engine.graph.in_degree(influencer)
    );
    println!();

    // 3. Set up CSV output.
    let out_dir = Path::new("output/smallnet");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir)?;
    let mut obs = ProgressObserver::new(EngineOutputObserver::new(writer));

    let mut driver = Driver::new(engine).snapshot_every(SNAPSHOT_EVERY);

    // 4. Phase one: baseline at the default half-engagement bias.
    println!("Phase 1/3 — baseline (bias 0.5)");
    driver.run_ticks(PHASE_TICKS, &mut obs);

    // 5. Phase two: crank the ranking toward extremes and drop a viral
    //    doom post from the influencer.
    println!("Phase 2/3 — engagement-driven (bias 2.0) + viral doom post");
    driver.engine.set_config(ConfigPatch::bias(2.0));
    if let Some(post) = driver.engine.inject_post(influencer, 0.02) {
        println!("  injected {} (sentiment {:.2})", post.id, post.sentiment);
    }
    driver.run_ticks(PHASE_TICKS, &mut obs);

    // 6. Phase three: back to chronological feeds, influencer cheered up.
    println!("Phase 3/3 — chronological recovery (bias 0.0)");
    driver.engine.set_config(ConfigPatch::bias(0.0));
    driver.engine.set_agent_happiness(influencer, 1.0);
    driver.run_ticks(PHASE_TICKS, &mut obs);

    driver.finish(&mut obs);
    if let Some(e) = obs.output.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Report and dump final state.
    if let Some((tick, mean)) = obs.history.latest() {
        println!();
        println!("Final ({tick}): mean happiness {mean:.3}, {} stored posts", driver.engine.posts.len());
    }
    for post in driver.engine.posts.recent(3) {
        println!("  recent: {} by {} (sentiment {:.2})", post.id, post.author, post.sentiment);
    }
    if let Some(feed) = driver.engine.feed_for_agent(influencer) {
        println!("  {influencer} would see {} posts in its next feed", feed.len());
    }
    let snapshots = driver.engine.snapshots();
    std::fs::write(
        out_dir.join("agents_final.json"),
        serde_json::to_string_pretty(&snapshots)?,
    )?;
    println!("Wrote CSV + agents_final.json to {}", out_dir.display());

    Ok(())
}
