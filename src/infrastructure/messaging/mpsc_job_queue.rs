use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, mpsc};
use uuid::Uuid;

use crate::application::ports::job_queue::{JobQueue, JobQueueError};

/// In-process job queue over an unbounded tokio channel. The sending half
/// implements [`JobQueue`] for the upload path; the receiving half is held by
/// the background processor's workers.
pub struct MpscJobQueue {
    sender: mpsc::UnboundedSender<Uuid>,
    depth: Arc<AtomicUsize>,
}

pub struct MpscJobQueueReceiver {
    receiver: Mutex<mpsc::UnboundedReceiver<Uuid>>,
    depth: Arc<AtomicUsize>,
}

impl MpscJobQueue {
    pub fn create_pair() -> (Self, MpscJobQueueReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let depth = Arc::new(AtomicUsize::new(0));

        (
            Self {
                sender,
                depth: depth.clone(),
            },
            MpscJobQueueReceiver {
                receiver: Mutex::new(receiver),
                depth,
            },
        )
    }
}

#[async_trait]
impl JobQueue for MpscJobQueue {
    async fn enqueue(&self, file_id: Uuid) -> Result<(), JobQueueError> {
        self.depth.fetch_add(1, Ordering::SeqCst);
        self.sender.send(file_id).map_err(|_| {
            self.depth.fetch_sub(1, Ordering::SeqCst);
            JobQueueError::QueueClosed("receiver dropped".to_string())
        })
    }

    fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }
}

impl MpscJobQueueReceiver {
    /// Wait for the next job. Returns `None` once every sender is gone and
    /// the channel drained, which is the workers' shutdown signal.
    pub async fn recv(&self) -> Option<Uuid> {
        let file_id = {
            let mut receiver = self.receiver.lock().await;
            receiver.recv().await
        };
        if file_id.is_some() {
            self.depth.fetch_sub(1, Ordering::SeqCst);
        }
        file_id
    }
}
