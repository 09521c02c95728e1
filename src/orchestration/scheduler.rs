// Tue Jan 13 2026 - Alex

use super::PipelineError;
use crate::names::RawName;
use crate::resolver::{ResolutionRecord, ResolverClient};
use log::{debug, error};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Sender};
use std::thread;
use std::time::Instant;

/// Fixed-size worker pool for resolver calls.
///
/// Workers drain a shared queue and publish each record on a channel. The
/// calling thread is the only consumer, so the aggregate needs no lock.
pub struct DispatchPool {
    worker_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub submitted: usize,
    pub completed: usize,
    pub workers_used: usize,
}

impl DispatchPool {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Runs one resolution per name and hands every record to `on_complete`
    /// on the calling thread, in completion order. Returns once all workers
    /// have exited.
    pub fn dispatch<F>(
        &self,
        names: Vec<RawName>,
        client: &ResolverClient,
        mut on_complete: F,
    ) -> Result<DispatchSummary, PipelineError>
    where
        F: FnMut(ResolutionRecord),
    {
        let submitted = names.len();
        let workers_used = self.worker_count.min(submitted);
        let queue = Mutex::new(VecDeque::from(names));
        let (sender, receiver) = channel::<ResolutionRecord>();

        debug!("Dispatching {} tasks on {} workers", submitted, workers_used);

        let (completed, panicked) = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers_used)
                .map(|id| {
                    let sender = sender.clone();
                    let queue = &queue;
                    scope.spawn(move || worker_loop(id, queue, client, sender))
                })
                .collect();

            // Workers hold the only senders now, so the loop below ends at the join point.
            drop(sender);

            let mut completed = 0;
            for record in receiver {
                completed += 1;
                on_complete(record);
            }

            let panicked = handles
                .into_iter()
                .map(|handle| handle.join())
                .filter(|joined| joined.is_err())
                .count();

            (completed, panicked)
        });

        if panicked > 0 {
            error!("{} dispatch workers panicked", panicked);
            return Err(PipelineError::WorkerPanicked(panicked));
        }

        Ok(DispatchSummary {
            submitted,
            completed,
            workers_used,
        })
    }
}

fn worker_loop(
    id: usize,
    queue: &Mutex<VecDeque<RawName>>,
    client: &ResolverClient,
    sender: Sender<ResolutionRecord>,
) {
    let mut handled = 0usize;

    loop {
        let task = queue.lock().pop_front();

        let Some(raw) = task else {
            break;
        };

        let start_time = Instant::now();
        let record = client.resolve(&raw);
        debug!("worker {} resolved {:?} in {:?}", id, raw.as_str(), start_time.elapsed());
        handled += 1;

        if sender.send(record).is_err() {
            break;
        }
    }

    debug!("worker {} finished after {} tasks", id, handled);
}
