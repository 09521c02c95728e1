// Tue Jan 13 2026 - Alex

use super::error::LookupErrorKind;
use super::NameResolver;
use crate::names::{RawName, ResolvedName};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Resolved,
    Fallback(LookupErrorKind),
}

impl ResolutionOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolutionOutcome::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub raw: RawName,
    pub resolved: ResolvedName,
    pub outcome: ResolutionOutcome,
}

/// Resolves one raw name, falling back locally on any lookup failure.
#[derive(Clone)]
pub struct ResolverClient {
    resolver: Arc<dyn NameResolver>,
}

impl ResolverClient {
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver_name(&self) -> &str {
        self.resolver.name()
    }

    /// Never fails: errors are logged and replaced by the fallback name.
    pub fn resolve(&self, raw: &RawName) -> ResolutionRecord {
        let query = raw.to_query();

        match self.resolver.lookup(&query) {
            Ok(resolved) => {
                debug!("{:?} -> {}", raw.as_str(), resolved);
                ResolutionRecord {
                    raw: raw.clone(),
                    resolved,
                    outcome: ResolutionOutcome::Resolved,
                }
            }
            Err(error) => {
                let resolved = ResolvedName::fallback(&query);
                warn!(
                    "Lookup failed for {:?} (query {}): {} [{}], using {}",
                    raw.as_str(),
                    query,
                    error,
                    error.kind(),
                    resolved
                );
                ResolutionRecord {
                    raw: raw.clone(),
                    resolved,
                    outcome: ResolutionOutcome::Fallback(error.kind()),
                }
            }
        }
    }
}
