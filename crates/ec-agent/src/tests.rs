//! Unit tests for ec-agent.

#[cfg(test)]
mod store {
    use ec_core::{AgentId, NEUTRAL};

    use crate::AgentStore;

    #[test]
    fn arrays_allocated_to_count() {
        let store = AgentStore::new(10);
        assert_eq!(store.count, 10);
        assert_eq!(store.happiness.len(), 10);
        assert_eq!(store.susceptibility.len(), 10);
        assert_eq!(store.post_frequency.len(), 10);
    }

    #[test]
    fn starts_at_neutral() {
        let store = AgentStore::new(3);
        assert!(store.happiness.iter().all(|&h| h == NEUTRAL));
    }

    #[test]
    fn contains_checks_bounds() {
        let store = AgentStore::new(3);
        assert!(store.contains(AgentId(0)));
        assert!(store.contains(AgentId(2)));
        assert!(!store.contains(AgentId(3)));
        assert!(!store.contains(AgentId::INVALID));
    }

    #[test]
    fn agent_ids_ascending() {
        let store = AgentStore::new(4);
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn mean_happiness_averages() {
        let mut store = AgentStore::new(2);
        store.happiness[0] = 0.2;
        store.happiness[1] = 0.8;
        assert!((store.mean_happiness() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mean_happiness_empty_population_fallback() {
        let store = AgentStore::new(0);
        assert_eq!(store.mean_happiness(), 0.0);
    }
}

#[cfg(test)]
mod rngs {
    use ec_core::AgentId;

    use crate::AgentRngs;

    #[test]
    fn one_rng_per_agent() {
        let rngs = AgentRngs::new(5, 42);
        assert_eq!(rngs.len(), 5);
        assert!(!rngs.is_empty());
    }

    #[test]
    fn same_seed_reproduces_streams() {
        let mut a = AgentRngs::new(3, 42);
        let mut b = AgentRngs::new(3, 42);
        for i in 0..3 {
            let x: f64 = a.get_mut(AgentId(i)).random();
            let y: f64 = b.get_mut(AgentId(i)).random();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn agents_draw_independently() {
        // Rolling agent 0 many times must not perturb agent 1's stream.
        let mut a = AgentRngs::new(2, 7);
        let mut b = AgentRngs::new(2, 7);
        for _ in 0..100 {
            let _: f64 = a.get_mut(AgentId(0)).random();
        }
        let x: f64 = a.get_mut(AgentId(1)).random();
        let y: f64 = b.get_mut(AgentId(1)).random();
        assert_eq!(x, y);
    }
}
