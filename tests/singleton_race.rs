// Runs in its own test binary, so the barrier race below is the first
// access to the repository in this process.

use std::sync::Barrier;
use std::thread;

use design_patterns::creational::singleton::Repository;

const THREADS: usize = 32;

#[test]
fn test_racing_first_access_constructs_once() {
    assert_eq!(Repository::constructions(), 0);

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

    assert_eq!(addresses.len(), THREADS);
    assert!(addresses.iter().all(|addr| *addr == addresses[0]));
    assert_eq!(Repository::constructions(), 1);
    assert!(std::ptr::eq(Repository::instance(), addresses[0] as *const Repository));
}
