use leibniz_pi_core::{RoundRobin, RouterCommand, WorkerCommand};
use tokio::sync::mpsc;

use crate::worker::{ResultSender, WorkSender};

/// Sending side of the router's mailbox
pub type RouterSender = mpsc::Sender<RouterCommand<ResultSender>>;

/// Load-balancing forwarder over a fixed worker pool
///
/// Processes one command at a time, so dispatch order matches submission
/// order and the n-th dispatched unit goes to pool member n mod size.
pub struct Router {
    mailbox: mpsc::Receiver<RouterCommand<ResultSender>>,
    pool: Vec<WorkSender>,
    cursor: RoundRobin,
}

impl Router {
    /// `pool` must not be empty
    pub fn new(
        mailbox: mpsc::Receiver<RouterCommand<ResultSender>>,
        pool: Vec<WorkSender>,
    ) -> Self {
        let cursor = RoundRobin::new(pool.len());
        Self {
            mailbox,
            pool,
            cursor,
        }
    }

    pub async fn run(mut self) {
        while let Some(command) = self.mailbox.recv().await {
            match command {
                RouterCommand::Dispatch { unit, reply } => {
                    let member = &self.pool[self.cursor.select()];
                    // Fails only if the worker already exited; the unit
                    // cannot be recovered, matching the no-reassignment model
                    let _ = member.send(WorkerCommand::Work { unit, reply }).await;
                }
                RouterCommand::Broadcast(command) => {
                    for member in &self.pool {
                        let _ = member.send(command.clone()).await;
                    }
                }
                RouterCommand::Shutdown => break,
            }
        }
    }
}
