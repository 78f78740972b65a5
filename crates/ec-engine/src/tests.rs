//! Integration tests for ec-engine.

use ec_core::{AgentId, ConfigPatch, SimulationConfig, Tick};

use crate::{Driver, Engine, MoodHistory, NoopObserver, FEED_CAPACITY, RETENTION_CAP};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded() -> Engine {
    Engine::with_seed(SimulationConfig::default(), 42)
}

/// Engine whose autonomous posting pass is silenced, so tests control the
/// post log exclusively through `inject_post`.
fn silenced(agent_count: usize) -> Engine {
    let mut engine = seeded();
    engine.initialize(agent_count, 0);
    engine.set_config(ConfigPatch::post_rate(0.0));
    engine
}

// ── initialize ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod init_tests {
    use super::*;

    #[test]
    fn creates_requested_population() {
        let mut engine = seeded();
        engine.initialize(10, 2);
        assert_eq!(engine.agent_count(), 10);
        assert_eq!(engine.snapshots().len(), 10);
        for snapshot in engine.snapshots() {
            assert!(snapshot.following.len() <= 9, "out-degree bounded by population");
        }
    }

    #[test]
    fn traits_drawn_within_bands() {
        let mut engine = seeded();
        engine.initialize(50, 3);
        for snapshot in engine.snapshots() {
            assert!((0.4..=0.6).contains(&snapshot.happiness), "happiness near neutral");
            assert!((0.0..=1.0).contains(&snapshot.susceptibility));
            assert!((0.1..0.3).contains(&snapshot.post_frequency));
        }
    }

    #[test]
    fn follow_graph_mirrored() {
        let mut engine = seeded();
        engine.initialize(20, 3);
        for snapshot in engine.snapshots() {
            for &target in &snapshot.following {
                assert!(
                    engine.graph.followers(target).contains(&snapshot.id),
                    "{} follows {target} but the mirror entry is missing",
                    snapshot.id
                );
            }
            for &fan in &snapshot.followers {
                assert!(engine.graph.follows(fan, snapshot.id));
            }
        }
    }

    #[test]
    fn reinitialize_clears_prior_state() {
        let mut engine = seeded();
        engine.initialize(5, 2);
        engine.step();
        engine.inject_post(AgentId(0), 0.9);
        assert!(engine.tick > Tick::ZERO);

        engine.initialize(3, 1);
        assert_eq!(engine.tick, Tick::ZERO);
        assert_eq!(engine.agent_count(), 3);
        assert!(engine.posts.is_empty());
    }

    #[test]
    fn same_seed_same_population() {
        let mut a = seeded();
        let mut b = seeded();
        a.initialize(10, 3);
        b.initialize(10, 3);
        assert_eq!(a.agents.happiness, b.agents.happiness);
        assert_eq!(a.agents.susceptibility, b.agents.susceptibility);
        for agent in a.agents.agent_ids() {
            assert_eq!(a.graph.following(agent), b.graph.following(agent));
        }
    }

    #[test]
    fn empty_population_is_legal() {
        let mut engine = seeded();
        engine.initialize(0, 0);
        let summary = engine.step();
        assert_eq!(summary.tick, Tick(1));
        assert_eq!(summary.new_post_count(), 0);
        assert_eq!(summary.average_happiness, 0.0, "defined empty-population fallback");
    }
}

// ── step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn tick_increments_per_step() {
        let mut engine = seeded();
        engine.initialize(5, 2);
        assert_eq!(engine.step().tick, Tick(1));
        assert_eq!(engine.step().tick, Tick(2));
        assert_eq!(engine.tick, Tick(2));
    }

    #[test]
    fn invariants_hold_over_many_ticks() {
        let mut engine = seeded();
        engine.initialize(20, 3);
        for _ in 0..50 {
            let summary = engine.step();
            assert!((0.0..=1.0).contains(&summary.average_happiness));
        }
        for &h in &engine.agents.happiness {
            assert!((0.0..=1.0).contains(&h));
        }
        for post in engine.posts.iter() {
            assert!((0.0..=1.0).contains(&post.sentiment));
        }
    }

    #[test]
    fn guaranteed_posting_when_probability_saturated() {
        let mut engine = seeded();
        engine.initialize(20, 3);
        // Effective probability = 1.0 × (1 + arousal) ≥ 1, so every draw
        // in [0, 1) succeeds.
        for f in &mut engine.agents.post_frequency {
            *f = 1.0;
        }
        let summary = engine.step();
        assert_eq!(summary.new_post_count(), 20);
        assert_eq!(engine.posts.len(), 20);
        assert_eq!(summary.new_posts.len(), 20);
    }

    #[test]
    fn zero_multiplier_silences_population() {
        let mut engine = seeded();
        engine.initialize(20, 3);
        engine.set_config(ConfigPatch::post_rate(0.0));
        for _ in 0..10 {
            assert_eq!(engine.step().new_post_count(), 0);
        }
        assert!(engine.posts.is_empty());
    }

    #[test]
    fn readers_react_to_posts_from_the_same_tick() {
        let mut engine = seeded();
        engine.initialize(2, 0);
        engine.graph.add_follow(AgentId(1), AgentId(0));
        // Agent 0: maximally happy and guaranteed to post.
        engine.agents.happiness[0] = 1.0;
        engine.agents.post_frequency[0] = 1.0;
        // Agent 1: neutral and fully susceptible.
        engine.agents.happiness[1] = 0.5;
        engine.agents.susceptibility[1] = 1.0;

        let summary = engine.step();
        assert!(summary.new_post_count() >= 1);
        // Sentiment ≥ 0.9 ⇒ post-consumption happiness ≥ 0.9, ≥ 0.88 after decay.
        assert!(
            engine.agents.happiness[1] > 0.8,
            "follower should absorb the same-tick post, got {}",
            engine.agents.happiness[1]
        );
    }

    #[test]
    fn empty_feed_still_decays() {
        let mut engine = silenced(1);
        engine.set_agent_happiness(AgentId(0), 1.0);
        engine.step();
        let h = engine.agents.happiness[0];
        assert!((h - 0.975).abs() < 1e-12, "one decay step from 1.0, got {h}");
    }

    #[test]
    fn decay_converges_to_neutral() {
        let mut engine = silenced(1);
        engine.set_agent_happiness(AgentId(0), 1.0);
        for _ in 0..200 {
            engine.step();
        }
        let h = engine.agents.happiness[0];
        assert!((h - 0.5).abs() < 1e-3, "expected convergence to neutral, got {h}");
    }
}

// ── Feed ranking ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod feed_tests {
    use super::*;

    /// Reader 0 follows author 1; `sentiments` become author 1's posts in
    /// chronological order.
    fn feed_fixture(sentiments: &[f64]) -> Engine {
        let mut engine = silenced(3);
        engine.graph.add_follow(AgentId(0), AgentId(1));
        for &s in sentiments {
            engine.inject_post(AgentId(1), s);
        }
        engine
    }

    #[test]
    fn chronological_at_zero_bias() {
        let mut engine = feed_fixture(&[0.9, 0.1, 0.5, 0.51, 0.49, 0.5, 0.5]);
        engine.set_config(ConfigPatch::bias(0.0));
        let feed = engine.feed_for_agent(AgentId(0)).unwrap();
        let all = engine.posts_by(AgentId(1));
        assert_eq!(feed, all[all.len() - FEED_CAPACITY..].to_vec(), "last 5, sentiment ignored");
    }

    #[test]
    fn capped_at_five() {
        let engine = feed_fixture(&[0.5; 9]);
        assert_eq!(engine.feed_for_agent(AgentId(0)).unwrap().len(), FEED_CAPACITY);
    }

    #[test]
    fn short_candidate_set_returned_whole() {
        let mut engine = feed_fixture(&[0.2, 0.8]);
        engine.set_config(ConfigPatch::bias(0.0));
        assert_eq!(engine.feed_for_agent(AgentId(0)).unwrap().len(), 2);
    }

    #[test]
    fn bias_prefers_extreme_content() {
        let mut engine = feed_fixture(&[0.5, 0.9, 0.48, 0.1, 0.52, 0.55, 0.45]);
        engine.set_config(ConfigPatch::bias(1.0));
        let feed = engine.feed_for_agent(AgentId(0)).unwrap();
        assert_eq!(feed.len(), FEED_CAPACITY);

        let in_feed: Vec<_> = feed.iter().map(|p| p.id).collect();
        let excluded: Vec<_> = engine
            .posts_by(AgentId(1))
            .into_iter()
            .filter(|p| !in_feed.contains(&p.id))
            .collect();
        let feed_min = feed.iter().map(|p| p.engagement()).fold(f64::INFINITY, f64::min);
        for post in excluded {
            assert!(
                feed_min >= post.engagement(),
                "excluded post {} outranks a feed member",
                post.id
            );
        }
    }

    #[test]
    fn equal_scores_keep_chronological_order() {
        let mut engine = feed_fixture(&[0.8; 7]);
        engine.set_config(ConfigPatch::bias(1.0));
        let feed = engine.feed_for_agent(AgentId(0)).unwrap();
        let all = engine.posts_by(AgentId(1));
        assert_eq!(feed, all[2..].to_vec(), "stable tie-break: the 5 most recent");
    }

    #[test]
    fn tie_break_stable_across_calls() {
        let mut engine = feed_fixture(&[0.8; 7]);
        engine.set_config(ConfigPatch::bias(1.5));
        let first = engine.feed_for_agent(AgentId(0)).unwrap();
        let second = engine.feed_for_agent(AgentId(0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn only_followed_authors_appear() {
        let mut engine = silenced(3);
        engine.graph.add_follow(AgentId(0), AgentId(1));
        engine.inject_post(AgentId(1), 0.9);
        engine.inject_post(AgentId(2), 0.1);
        let feed = engine.feed_for_agent(AgentId(0)).unwrap();
        assert!(feed.iter().all(|p| p.author == AgentId(1)));
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn isolated_agent_gets_empty_feed() {
        let engine = silenced(2);
        assert_eq!(engine.feed_for_agent(AgentId(0)), Some(vec![]));
    }

    #[test]
    fn unknown_agent_gets_none() {
        let engine = silenced(2);
        assert_eq!(engine.feed_for_agent(AgentId(99)), None);
    }
}

// ── Direct mutation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod mutation_tests {
    use super::*;

    #[test]
    fn set_happiness_clamps_and_reports_success() {
        let mut engine = silenced(5);
        assert!(engine.set_agent_happiness(AgentId(3), 1.5));
        assert_eq!(engine.agents.happiness[3], 1.0);
        assert!(engine.set_agent_happiness(AgentId(3), -0.2));
        assert_eq!(engine.agents.happiness[3], 0.0);
    }

    #[test]
    fn set_happiness_unknown_agent_is_noop() {
        let mut engine = silenced(5);
        let before = engine.agents.happiness.clone();
        assert!(!engine.set_agent_happiness(AgentId(42), 0.9));
        assert_eq!(engine.agents.happiness, before);
    }

    #[test]
    fn injected_post_visible_to_author_query_and_followers() {
        let mut engine = silenced(3);
        engine.graph.add_follow(AgentId(1), AgentId(0));
        let post = engine.inject_post(AgentId(0), 0.9).unwrap();

        assert_eq!(engine.posts_by(AgentId(0)), vec![post]);
        let feed = engine.feed_for_agent(AgentId(1)).unwrap();
        assert!(feed.contains(&post), "follower's next feed carries the injection");
    }

    #[test]
    fn injected_post_clamped_and_stamped() {
        let mut engine = silenced(2);
        engine.step();
        engine.step();
        let post = engine.inject_post(AgentId(0), 1.7).unwrap();
        assert_eq!(post.sentiment, 1.0);
        assert_eq!(post.timestamp, Tick(2));
    }

    #[test]
    fn inject_unknown_agent_returns_none() {
        let mut engine = silenced(2);
        assert_eq!(engine.inject_post(AgentId(9), 0.5), None);
        assert!(engine.posts.is_empty());
    }

    #[test]
    fn same_tick_injections_get_distinct_ids() {
        let mut engine = silenced(2);
        let a = engine.inject_post(AgentId(0), 0.9).unwrap();
        let b = engine.inject_post(AgentId(0), 0.1).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.seq, 0);
        assert_eq!(b.id.seq, 1);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn partial_patch_leaves_other_fields() {
        let mut engine = seeded();
        engine.set_config(ConfigPatch::bias(2.0));
        assert_eq!(engine.config.algorithm_bias, 2.0);
        assert_eq!(engine.config.post_rate_multiplier, 1.0);
    }

    #[test]
    fn construction_sanitizes() {
        let engine = Engine::with_seed(
            SimulationConfig { algorithm_bias: -3.0, post_rate_multiplier: 1.0 },
            1,
        );
        assert_eq!(engine.config.algorithm_bias, 0.0);
    }
}

// ── Retention ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod retention_tests {
    use super::*;

    #[test]
    fn log_bounded_after_step() {
        let mut engine = silenced(1);
        for _ in 0..(RETENTION_CAP + 100) {
            engine.inject_post(AgentId(0), 0.5);
        }
        engine.step();
        assert_eq!(engine.posts.len(), RETENTION_CAP);
        // The oldest 100 were evicted; the survivor front is injection #100.
        assert_eq!(engine.posts.iter().next().unwrap().id.seq, 100);
    }

    #[test]
    fn log_stays_bounded_over_long_runs() {
        let mut engine = seeded();
        engine.initialize(30, 3);
        for f in &mut engine.agents.post_frequency {
            *f = 1.0; // 30 posts per tick
        }
        for _ in 0..100 {
            engine.step();
            assert!(engine.posts.len() <= RETENTION_CAP);
        }
        assert_eq!(engine.posts.len(), RETENTION_CAP);
    }
}

// ── Post log ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod log_tests {
    use super::*;
    use crate::PostLog;

    #[test]
    fn append_assigns_sequential_ids_within_tick() {
        let mut log = PostLog::new();
        let a = log.append(Tick(1), AgentId(0), 0.5);
        let b = log.append(Tick(1), AgentId(0), 0.6);
        let c = log.append(Tick(1), AgentId(1), 0.7);
        assert_eq!(a.id.seq, 0);
        assert_eq!(b.id.seq, 1);
        assert_eq!(c.id.seq, 0, "sequence is per author");
        let d = log.append(Tick(2), AgentId(0), 0.5);
        assert_eq!(d.id.seq, 0, "sequence restarts each tick");
    }

    #[test]
    fn append_clamps_sentiment() {
        let mut log = PostLog::new();
        assert_eq!(log.append(Tick(1), AgentId(0), 2.0).sentiment, 1.0);
        assert_eq!(log.append(Tick(1), AgentId(0), -1.0).sentiment, 0.0);
    }

    #[test]
    fn recent_returns_newest_in_order() {
        let mut log = PostLog::new();
        for i in 0..10u64 {
            log.append(Tick(i), AgentId(0), 0.5);
        }
        let recent = log.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].timestamp, Tick(7));
        assert_eq!(recent[2].timestamp, Tick(9));
        assert_eq!(log.recent(50).len(), 10, "window larger than log");
    }

    #[test]
    fn by_author_filters_and_preserves_order() {
        let mut log = PostLog::new();
        log.append(Tick(1), AgentId(0), 0.1);
        log.append(Tick(1), AgentId(1), 0.2);
        log.append(Tick(2), AgentId(0), 0.3);
        let posts = log.by_author(AgentId(0));
        assert_eq!(posts.len(), 2);
        assert!(posts[0].timestamp < posts[1].timestamp);
        assert!(log.by_author(AgentId(9)).is_empty());
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn same_seed_same_run() {
        let mut a = seeded();
        let mut b = seeded();
        a.initialize(15, 3);
        b.initialize(15, 3);
        for _ in 0..20 {
            let sa = a.step();
            let sb = b.step();
            assert_eq!(sa.tick, sb.tick);
            assert_eq!(sa.average_happiness, sb.average_happiness);
            assert_eq!(sa.new_posts, sb.new_posts);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Engine::with_seed(SimulationConfig::default(), 1);
        let mut b = Engine::with_seed(SimulationConfig::default(), 2);
        a.initialize(15, 3);
        b.initialize(15, 3);
        assert_ne!(a.agents.happiness, b.agents.happiness);
    }
}

// ── Driver & observers ────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;
    use crate::{EngineObserver, TickSummary};
    use ec_agent::AgentStore;

    struct Counter {
        ticks:     usize,
        snapshots: usize,
        run_ends:  usize,
    }

    impl Counter {
        fn new() -> Self {
            Self { ticks: 0, snapshots: 0, run_ends: 0 }
        }
    }

    impl EngineObserver for Counter {
        fn on_tick_end(&mut self, _summary: &TickSummary) {
            self.ticks += 1;
        }
        fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {
            self.snapshots += 1;
        }
        fn on_run_end(&mut self, _final_tick: Tick) {
            self.run_ends += 1;
        }
    }

    fn driver() -> Driver {
        let mut engine = seeded();
        engine.initialize(5, 2);
        Driver::new(engine)
    }

    #[test]
    fn run_ticks_advances_engine() {
        let mut driver = driver();
        driver.run_ticks(10, &mut NoopObserver);
        assert_eq!(driver.engine.tick, Tick(10));
        driver.run_ticks(3, &mut NoopObserver);
        assert_eq!(driver.engine.tick, Tick(13));
    }

    #[test]
    fn observer_fired_once_per_tick() {
        let mut driver = driver();
        let mut counter = Counter::new();
        driver.run_ticks(7, &mut counter);
        assert_eq!(counter.ticks, 7);
        assert_eq!(counter.snapshots, 0, "snapshots disabled by default");
    }

    #[test]
    fn snapshot_cadence_respected() {
        let mut driver = driver().snapshot_every(2);
        let mut counter = Counter::new();
        driver.run_ticks(6, &mut counter);
        assert_eq!(counter.snapshots, 3, "ticks 2, 4, 6");
    }

    #[test]
    fn finish_fires_run_end() {
        let mut driver = driver();
        let mut counter = Counter::new();
        driver.run_ticks(2, &mut counter);
        driver.finish(&mut counter);
        assert_eq!(counter.run_ends, 1);
    }

    #[test]
    fn tick_interval_paces_without_affecting_results() {
        use std::time::{Duration, Instant};

        let mut paced = driver().tick_interval(Duration::from_millis(2));
        let mut unpaced = driver();
        let started = Instant::now();
        paced.run_ticks(3, &mut NoopObserver);
        assert!(started.elapsed() >= Duration::from_millis(6));

        unpaced.run_ticks(3, &mut NoopObserver);
        assert_eq!(paced.engine.agents.happiness, unpaced.engine.agents.happiness);
    }

    #[test]
    fn mood_history_keeps_bounded_window() {
        let mut driver = driver();
        let mut history = MoodHistory::with_capacity(5);
        driver.run_ticks(10, &mut history);
        assert_eq!(history.len(), 5);
        let (latest_tick, latest_mean) = history.latest().unwrap();
        assert_eq!(latest_tick, Tick(10));
        assert!((0.0..=1.0).contains(&latest_mean));
        let first = history.entries().next().unwrap();
        assert_eq!(first.0, Tick(6), "oldest surviving entry");
    }
}
