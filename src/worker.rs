use std::sync::mpsc;

/// Result of a job spawned with [`spawn_worker_action`], collected by polling.
#[derive(Debug)]
pub struct PendingAction<T> {
    rx: mpsc::Receiver<T>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Poll<T> {
    Ready(T),
    Pending,
    /// The worker ended without sending a result.
    Lost,
}

impl<T> PendingAction<T> {
    pub fn try_take(&self) -> Poll<T> {
        match self.rx.try_recv() {
            Ok(result) => Poll::Ready(result),
            Err(mpsc::TryRecvError::Empty) => Poll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => Poll::Lost,
        }
    }

    /// Blocks until the worker finishes.
    pub fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }
}

pub fn spawn_worker_action<T, W>(work: W) -> PendingAction<T>
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    std::thread::spawn(move || {
        let result = work();
        let _ = tx.send(result);
    });
    PendingAction { rx }
}
