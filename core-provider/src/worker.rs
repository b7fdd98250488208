//! Dedicated Background Worker
//!
//! One named OS thread draining an unbounded FIFO queue. Resolver jobs are
//! blocking filesystem calls, so they get their own thread instead of a
//! runtime worker; the single-threaded queue gives strict submission-order
//! execution for free.

use std::io;
use std::sync::mpsc;
use std::thread;
use tracing::debug;

pub(crate) type WorkerJob = Box<dyn FnOnce() + Send + 'static>;

/// Process-wide worker for offloaded resolution.
///
/// Created once when the offload strategy is selected and torn down with it:
/// dropping the worker closes the queue and joins the thread after in-flight
/// jobs finish.
pub(crate) struct ResolverWorker {
    queue: Option<mpsc::Sender<WorkerJob>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ResolverWorker {
    /// Spawn the worker thread under `name` (visible in thread listings).
    pub(crate) fn spawn(name: &str) -> io::Result<Self> {
        let (queue, jobs) = mpsc::channel::<WorkerJob>();
        let thread = thread::Builder::new().name(name.to_owned()).spawn(move || {
            while let Ok(job) = jobs.recv() {
                job();
            }
        })?;
        debug!(worker = name, "spawned resolver worker");
        Ok(Self {
            queue: Some(queue),
            thread: Some(thread),
        })
    }

    /// Enqueue a job. Returns `false` once the worker has shut down.
    pub(crate) fn submit(&self, job: WorkerJob) -> bool {
        match &self.queue {
            Some(queue) => queue.send(job).is_ok(),
            None => false,
        }
    }
}

impl Drop for ResolverWorker {
    fn drop(&mut self) {
        // Closing the queue ends the drain loop; join so no job outlives us.
        self.queue.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
