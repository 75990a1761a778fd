//! The output lock: a test-and-set flag acquired by spinning with short sleeps.
//!
//! Critical sections are one render plus one write, so a blocking primitive buys
//! nothing over a flag and a sleep. There is no fairness and no queue: whichever
//! waiter wakes first after a release wins.
//!
//! # Re-entrancy
//!
//! The lock is not re-entrant. A thread that logs while it already holds the lock
//! (for example from a `Display` impl that itself logs) would wait forever. Builds
//! with debug assertions detect this and panic instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Sleep between failed acquire attempts.
pub const DEFAULT_SPIN_INTERVAL: Duration = Duration::from_micros(10);

#[cfg(debug_assertions)]
thread_local! {
    /// Address of the innermost lock held by this thread, 0 when none.
    static HELD: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[derive(Debug)]
pub struct OutputLock {
    locked: AtomicBool,
    spin_interval: Duration,
}

impl Default for OutputLock {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputLock {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_spin_interval(DEFAULT_SPIN_INTERVAL)
    }

    #[must_use]
    pub const fn with_spin_interval(spin_interval: Duration) -> Self {
        Self {
            locked: AtomicBool::new(false),
            spin_interval,
        }
    }

    #[must_use]
    pub const fn spin_interval(&self) -> Duration {
        self.spin_interval
    }

    /// Spins until the flag is ours. Never times out.
    ///
    /// # Panics
    /// With debug assertions, if the calling thread already holds this lock.
    pub fn acquire(&self) -> OutputGuard<'_> {
        self.check_reentry();
        while self.locked.swap(true, Ordering::Acquire) {
            thread::sleep(self.spin_interval);
        }
        OutputGuard::new(self)
    }

    /// Single non-blocking attempt.
    #[must_use]
    pub fn try_acquire(&self) -> Option<OutputGuard<'_>> {
        if self.locked.swap(true, Ordering::Acquire) {
            None
        } else {
            Some(OutputGuard::new(self))
        }
    }

    /// Snapshot only; another thread may take or release the lock right after.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    #[cfg(debug_assertions)]
    fn address(&self) -> usize {
        std::ptr::from_ref(self) as usize
    }

    #[cfg(debug_assertions)]
    fn check_reentry(&self) {
        let address = self.address();
        if HELD.with(std::cell::Cell::get) == address {
            panic!("re-entrant logging call: this thread already holds the output lock");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    const fn check_reentry(&self) {}
}

/// Releases the lock when dropped, including during unwinding.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct OutputGuard<'a> {
    lock: &'a OutputLock,
    #[cfg(debug_assertions)]
    previous: usize,
}

impl<'a> OutputGuard<'a> {
    fn new(lock: &'a OutputLock) -> Self {
        #[cfg(debug_assertions)]
        {
            let previous = HELD.with(|held| held.replace(lock.address()));
            Self { lock, previous }
        }
        #[cfg(not(debug_assertions))]
        {
            Self { lock }
        }
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let previous = self.previous;
            // try_with: the guard may outlive the thread-local during thread teardown.
            let _ = HELD.try_with(|held| held.set(previous));
        }
        self.lock.locked.store(false, Ordering::Release);
    }
}
