// Pattern: Singleton
// One process-wide repository, built lazily on first access.
//
// `OnceLock` does the check / lock / check-again dance for us: racing
// first callers block until the single initializer finishes, and every
// caller gets the same `&'static` reference.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use rayon::prelude::*;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::CatalogConfig;

static INSTANCE: OnceLock<Repository> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Repository {
    id: Uuid,
}

impl Repository {
    fn new(id: Uuid) -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        debug!(%id, "constructing repository");
        Self { id }
    }

    pub fn instance() -> &'static Repository {
        INSTANCE.get_or_init(|| Repository::new(Uuid::new_v4()))
    }

    /// How many times the constructor has run in this process. Never above 1.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

// ============================================================================
// Usage
// ============================================================================

/// Calls the accessor sequentially, then from the rayon pool, and returns
/// every id observed.
pub fn demo(config: &CatalogConfig) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(config.singleton.iterations + config.singleton.threads);

    let mut repository = Repository::instance();
    for _ in 0..config.singleton.iterations {
        info!(id = %repository.id(), "repository");
        ids.push(repository.id());
        repository = Repository::instance();
    }

    let raced: Vec<Uuid> = (0..config.singleton.threads)
        .into_par_iter()
        .map(|_| Repository::instance().id())
        .collect();
    ids.extend(raced);

    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Repository::instance();
        let second = Repository::instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_concurrent_access_shares_instance() {
        const THREADS: usize = 16;
        let barrier = Barrier::new(THREADS);

        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        Repository::instance() as *const Repository as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(Repository::constructions(), 1);
    }

    #[test]
    fn test_rayon_race_sees_one_id() {
        let ids: Vec<Uuid> = (0..64)
            .into_par_iter()
            .map(|_| Repository::instance().id())
            .collect();

        assert!(ids.iter().all(|id| *id == ids[0]));
        assert_eq!(Repository::constructions(), 1);
    }

    #[test]
    fn test_demo_reports_one_id() {
        let mut config = CatalogConfig::default();
        config.singleton.iterations = 3;
        config.singleton.threads = 4;

        let ids = demo(&config);
        assert_eq!(ids.len(), 7);
        assert!(ids.iter().all(|id| *id == Repository::instance().id()));
    }
}
