use std::path::{Path, PathBuf};

use crate::storage::{self, StorageError, StorageResult};
use crate::worker::{spawn_worker_action, PendingAction, Poll};

/// Identifies one triggered file import. Later triggers get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportTicket(pub u64);

#[derive(Debug)]
struct InFlightImport {
    ticket: ImportTicket,
    path: PathBuf,
    pending: PendingAction<StorageResult<String>>,
}

/// A finished read, tagged with whether a newer import has been triggered
/// since.
#[derive(Debug)]
pub(super) struct CompletedRead {
    pub(super) ticket: ImportTicket,
    pub(super) path: PathBuf,
    pub(super) contents: StorageResult<String>,
    pub(super) superseded: bool,
}

/// File reads in flight. Only the most recently triggered import may commit,
/// regardless of the order in which reads finish.
#[derive(Debug, Default)]
pub(super) struct ImportQueue {
    last_ticket: u64,
    in_flight: Vec<InFlightImport>,
}

impl ImportQueue {
    pub(super) fn spawn(&mut self, path: &Path) -> ImportTicket {
        let read_path = path.to_path_buf();
        self.spawn_with(path, move || storage::read_document(&read_path))
    }

    pub(super) fn spawn_with<F>(&mut self, path: &Path, read: F) -> ImportTicket
    where
        F: FnOnce() -> StorageResult<String> + Send + 'static,
    {
        self.last_ticket += 1;
        let ticket = ImportTicket(self.last_ticket);
        let pending = spawn_worker_action(read);

        tracing::debug!(ticket = ticket.0, path = %path.display(), "import read started");
        self.in_flight.push(InFlightImport {
            ticket,
            path: path.to_path_buf(),
            pending,
        });
        ticket
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Collects reads that have finished, oldest ticket first.
    pub(super) fn poll(&mut self) -> Vec<CompletedRead> {
        let mut completed = Vec::new();
        let mut still_running = Vec::new();

        for import in self.in_flight.drain(..) {
            match import.pending.try_take() {
                Poll::Ready(contents) => completed.push((import.ticket, import.path, contents)),
                Poll::Pending => still_running.push(import),
                Poll::Lost => {
                    let contents = interrupted(import.ticket, &import.path);
                    completed.push((import.ticket, import.path, contents));
                }
            }
        }
        self.in_flight = still_running;
        self.finish(completed)
    }

    /// Blocks until every in-flight read has finished.
    pub(super) fn wait_all(&mut self) -> Vec<CompletedRead> {
        let completed = self
            .in_flight
            .drain(..)
            .map(|import| {
                let contents = import
                    .pending
                    .wait()
                    .unwrap_or_else(|| interrupted(import.ticket, &import.path));
                (import.ticket, import.path, contents)
            })
            .collect();
        self.finish(completed)
    }

    fn finish(
        &self,
        mut completed: Vec<(ImportTicket, PathBuf, StorageResult<String>)>,
    ) -> Vec<CompletedRead> {
        completed.sort_by_key(|(ticket, _, _)| *ticket);
        let latest = ImportTicket(self.last_ticket);
        completed
            .into_iter()
            .map(|(ticket, path, contents)| CompletedRead {
                ticket,
                path,
                contents,
                superseded: ticket < latest,
            })
            .collect()
    }
}

fn interrupted(ticket: ImportTicket, path: &Path) -> StorageResult<String> {
    tracing::error!(
        ticket = ticket.0,
        path = %path.display(),
        "import worker ended without a result"
    );
    Err(StorageError::ReadInterrupted {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panicking_read() -> StorageResult<String> {
        panic!("reader thread dies before sending");
    }

    #[test]
    fn interrupted_read_is_reported_as_failure() {
        let mut queue = ImportQueue::default();
        let ticket = queue.spawn_with(Path::new("/tmp/lost.json"), panicking_read);

        let completed = queue.wait_all();

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].ticket, ticket);
        assert!(!completed[0].superseded);
        assert!(matches!(
            &completed[0].contents,
            Err(StorageError::ReadInterrupted { path }) if path == Path::new("/tmp/lost.json")
        ));
        assert_eq!(queue.in_flight(), 0);
    }

    #[test]
    fn polling_reports_interrupted_read_once_worker_is_gone() {
        let mut queue = ImportQueue::default();
        queue.spawn_with(Path::new("/tmp/lost.json"), panicking_read);

        let mut completed = Vec::new();
        for _ in 0..500 {
            completed.extend(queue.poll());
            if queue.in_flight() == 0 {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert_eq!(completed.len(), 1);
        assert!(matches!(
            completed[0].contents,
            Err(StorageError::ReadInterrupted { .. })
        ));
    }

    #[test]
    fn only_the_newest_ticket_is_current() {
        let mut queue = ImportQueue::default();
        let older = queue.spawn_with(Path::new("/tmp/a.json"), || Ok("a".to_string()));
        let newer = queue.spawn_with(Path::new("/tmp/b.json"), || Ok("b".to_string()));

        let completed = queue.wait_all();
        let flags: Vec<_> = completed
            .iter()
            .map(|read| (read.ticket, read.superseded))
            .collect();

        assert_eq!(flags, vec![(older, true), (newer, false)]);
    }
}
