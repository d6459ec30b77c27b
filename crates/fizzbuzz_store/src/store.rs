use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use service_logging::{service_debug, service_info, service_warn};

use crate::persist::{load_snapshot, write_snapshot_atomic};
use crate::StorageError;

const DEFAULT_STORE_FILE: &str = "mostUsedParameters.json";
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub path: PathBuf,
    /// Bound on how long a caller waits for the worker's reply.
    pub io_timeout: Duration,
}

impl StoreSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

enum StoreCommand {
    RecordUse {
        key: String,
        reply: mpsc::Sender<Result<u64, StorageError>>,
    },
    MostUsed {
        reply: mpsc::Sender<Result<Option<String>, StorageError>>,
    },
}

/// Handle to the usage counter.
///
/// All access funnels through one worker thread that processes commands
/// strictly one at a time, so no two read-modify-write cycles on the counter
/// file are ever in flight together. Dropping the handle closes the queue
/// and joins the worker.
pub struct CounterStore {
    cmd_tx: Option<mpsc::Sender<StoreCommand>>,
    worker: Option<thread::JoinHandle<()>>,
    io_timeout: Duration,
}

impl CounterStore {
    /// Opens the store. The counter file does not need to exist yet; the
    /// first recorded use creates it.
    pub fn open(settings: StoreSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let path = settings.path.clone();
        service_info!("Counter store opened at {:?}", path);
        let worker = thread::spawn(move || run_worker(&path, cmd_rx));

        Self {
            cmd_tx: Some(cmd_tx),
            worker: Some(worker),
            io_timeout: settings.io_timeout,
        }
    }

    /// Records one use of `key` and returns its new count. The increment is
    /// on disk when this returns.
    pub fn record_use(&self, key: &str) -> Result<u64, StorageError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.send(StoreCommand::RecordUse {
            key: key.to_string(),
            reply: reply_tx,
        })?;
        self.wait(reply_rx)
    }

    /// Key with the highest recorded count, `None` when the store is empty.
    /// Ties go to the earliest-recorded key.
    pub fn most_used(&self) -> Result<Option<String>, StorageError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.send(StoreCommand::MostUsed { reply: reply_tx })?;
        self.wait(reply_rx)
    }

    fn send(&self, command: StoreCommand) -> Result<(), StorageError> {
        self.cmd_tx
            .as_ref()
            .ok_or(StorageError::Closed)?
            .send(command)
            .map_err(|_| StorageError::Closed)
    }

    fn wait<T>(&self, reply_rx: mpsc::Receiver<Result<T, StorageError>>) -> Result<T, StorageError> {
        match reply_rx.recv_timeout(self.io_timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(StorageError::Timeout(self.io_timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(StorageError::Closed),
        }
    }
}

impl Drop for CounterStore {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop after any queued work.
        drop(self.cmd_tx.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker(path: &Path, cmd_rx: mpsc::Receiver<StoreCommand>) {
    // One command at a time: the full load-increment-persist cycle finishes
    // before the next command is looked at.
    while let Ok(command) = cmd_rx.recv() {
        match command {
            StoreCommand::RecordUse { key, reply } => {
                let result = record_use_on_disk(path, &key);
                match &result {
                    Ok(count) => service_debug!("Recorded use #{count} of {key}"),
                    Err(err) => service_warn!("Failed to record use of {key}: {err}"),
                }
                let _ = reply.send(result);
            }
            StoreCommand::MostUsed { reply } => {
                let result = load_snapshot(path)
                    .map(|snapshot| snapshot.most_used().map(str::to_string));
                if let Err(err) = &result {
                    service_warn!("Failed to read counter file {:?}: {err}", path);
                }
                let _ = reply.send(result);
            }
        }
    }
}

fn record_use_on_disk(path: &Path, key: &str) -> Result<u64, StorageError> {
    let mut snapshot = load_snapshot(path)?;
    let count = snapshot.add_entry(key);
    write_snapshot_atomic(path, &snapshot)?;
    Ok(count)
}
