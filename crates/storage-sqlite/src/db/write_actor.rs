use super::{DbConnection, DbPool};
use crate::errors::StorageError;
use diesel::SqliteConnection;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};
use tradejournal_core::errors::{Error, Result};

// A write job runs against the actor's connection and yields a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
///
/// Every write in the application goes through one actor, so jobs never
/// interleave: a job's reads and writes form one serialized unit.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes `job` inside an IMMEDIATE transaction on the writer
    /// connection. Any error rolls the whole job back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::from(StorageError::WriterUnavailable(
                    "writer actor stopped".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::from(StorageError::WriterUnavailable(
                "writer actor dropped the reply".to_string(),
            ))
        })??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("writer actor returned an unexpected type".to_string()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor owns one pooled connection for its whole lifetime and
/// processes jobs in arrival order.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle> {
    let conn = super::get_connection(pool)?;
    let (tx, rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);
    tokio::spawn(run_writer(conn, rx));
    Ok(WriteHandle { tx })
}

async fn run_writer(
    mut conn: DbConnection,
    mut rx: mpsc::Receiver<(ErasedJob, ErasedReply)>,
) {
    while let Some((job, reply_tx)) = rx.recv().await {
        let result: Result<Box<dyn Any + Send + 'static>> = conn
            .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
            .map_err(Error::from);

        // The requester may have gone away (timeout, cancelled request).
        let _ = reply_tx.send(result);
    }
    log::debug!("Writer actor stopped: all handles dropped");
}
