// Tue Jan 13 2026 - Alex

use super::aggregator::{ResolutionAggregator, ResolutionBatch};
use super::scheduler::DispatchPool;
use super::PipelineError;
use crate::config::Config;
use crate::names::{Deduplicator, RawName};
use crate::resolver::{NameResolver, ResolverClient, TaxonomyBrowserClient, ThrottledResolver};
use indicatif::ProgressBar;
use log::info;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

/// Deduplicate, dispatch, aggregate.
pub struct ResolutionPipeline {
    client: ResolverClient,
    pool: DispatchPool,
    progress: Option<ProgressBar>,
}

impl ResolutionPipeline {
    pub fn new(config: &Config, resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            client: ResolverClient::new(resolver),
            pool: DispatchPool::new(config.workers),
            progress: None,
        }
    }

    /// Pipeline backed by the taxonomy browser, throttled when a rate limit is set.
    pub fn from_config(config: &Config) -> Self {
        let browser = TaxonomyBrowserClient::new(config);

        let resolver: Arc<dyn NameResolver> =
            match config.rate_limit_per_second.and_then(NonZeroU32::new) {
                Some(per_second) => Arc::new(ThrottledResolver::new(browser, per_second)),
                None => Arc::new(browser),
            };

        Self::new(config, resolver)
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn resolver_name(&self) -> &str {
        self.client.resolver_name()
    }

    pub fn run(&self, input: &[RawName]) -> Result<ResolutionBatch, PipelineError> {
        let started = Instant::now();
        let distinct = Deduplicator::distinct(input);

        info!(
            "Resolving {} distinct names ({} input lines) with {} workers via {}",
            distinct.len(),
            distinct.input_lines,
            self.pool.worker_count(),
            self.client.resolver_name()
        );

        if let Some(ref pb) = self.progress {
            pb.set_length(distinct.len() as u64);
            pb.set_position(0);
        }

        let mut aggregator = ResolutionAggregator::new(&distinct);
        let summary = self.pool.dispatch(distinct.names.clone(), &self.client, |record| {
            if let Some(ref pb) = self.progress {
                pb.set_message(record.raw.to_string());
                pb.inc(1);
            }
            aggregator.accept(record);
        })?;

        if let Some(ref pb) = self.progress {
            pb.finish_with_message("Done");
        }

        let batch = aggregator.finish()?;

        info!(
            "Resolved {} names in {:.2}s ({} canonical, {} fallback, {} workers used)",
            summary.completed,
            started.elapsed().as_secs_f64(),
            batch.stats().resolved,
            batch.stats().fallback,
            summary.workers_used
        );

        Ok(batch)
    }
}
