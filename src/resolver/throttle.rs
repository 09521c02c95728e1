// Tue Jan 13 2026 - Alex

use super::error::LookupResult;
use super::NameResolver;
use crate::names::{QueryName, ResolvedName};
use governor::state::NotKeyed;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

type DirectLimiter =
    RateLimiter<NotKeyed, governor::state::InMemoryState, governor::clock::DefaultClock>;

/// Caps the request rate of a wrapped resolver across all worker threads.
pub struct ThrottledResolver<R> {
    inner: R,
    limiter: DirectLimiter,
    poll_interval: Duration,
}

impl<R: NameResolver> ThrottledResolver<R> {
    pub fn new(inner: R, per_second: NonZeroU32) -> Self {
        let poll_interval = Duration::from_millis((1000 / u64::from(per_second.get())).clamp(1, 100));

        Self {
            inner,
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
            poll_interval,
        }
    }

    fn wait_for_permit(&self) {
        while self.limiter.check().is_err() {
            thread::sleep(self.poll_interval);
        }
    }
}

impl<R: NameResolver> NameResolver for ThrottledResolver<R> {
    fn lookup(&self, query: &QueryName) -> LookupResult<ResolvedName> {
        self.wait_for_permit();
        self.inner.lookup(query)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::normalize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    struct Counting(AtomicUsize);

    impl NameResolver for Counting {
        fn lookup(&self, query: &QueryName) -> LookupResult<ResolvedName> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ResolvedName::fallback(query))
        }
    }

    #[test]
    fn test_throttle_delays_past_burst() {
        let throttled = ThrottledResolver::new(Counting(AtomicUsize::new(0)), NonZeroU32::new(10).unwrap());
        let query = normalize("Escherichia coli");

        let started = Instant::now();
        for _ in 0..15 {
            throttled.lookup(&query).unwrap();
        }

        assert_eq!(throttled.inner.0.load(Ordering::SeqCst), 15);
        // burst of 10, the remaining 5 arrive at 100ms intervals
        assert!(started.elapsed() >= Duration::from_millis(400));
    }
}
