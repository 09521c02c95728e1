// Tue Jan 13 2026 - Alex

pub mod error;
pub mod extract;
pub mod taxonomy;
pub mod throttle;
pub mod client;

pub use error::{LookupError, LookupErrorKind, LookupResult};
pub use taxonomy::TaxonomyBrowserClient;
pub use throttle::ThrottledResolver;
pub use client::{ResolutionOutcome, ResolutionRecord, ResolverClient};

use crate::names::{QueryName, ResolvedName};

/// One lookup against a naming authority.
///
/// Implementations may fail in any way they like; [`ResolverClient`] turns
/// every error into the fallback name, so nothing here needs to retry.
pub trait NameResolver: Send + Sync {
    fn lookup(&self, query: &QueryName) -> LookupResult<ResolvedName>;

    fn name(&self) -> &str {
        "resolver"
    }
}

/// Resolver that never reaches the network. Every lookup reports `NotFound`.
pub struct OfflineResolver;

impl NameResolver for OfflineResolver {
    fn lookup(&self, _query: &QueryName) -> LookupResult<ResolvedName> {
        Err(LookupError::NotFound)
    }

    fn name(&self) -> &str {
        "offline"
    }
}
