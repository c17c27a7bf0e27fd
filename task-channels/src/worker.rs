use leibniz_pi_core::{leibniz_partial_sum, MasterMessage, WorkerCommand};
use tokio::sync::mpsc;

/// Reply handle a worker reports partial sums through
pub type ResultSender = mpsc::UnboundedSender<MasterMessage>;

/// Sending side of one worker's mailbox
pub type WorkSender = mpsc::Sender<WorkerCommand<ResultSender>>;

/// Pure computation actor: one work unit per message, no other state
pub struct Worker {
    mailbox: mpsc::Receiver<WorkerCommand<ResultSender>>,
}

impl Worker {
    pub fn new(mailbox: mpsc::Receiver<WorkerCommand<ResultSender>>) -> Self {
        Self { mailbox }
    }

    /// Receive loop; exits on the shutdown command or when the router
    /// side of the mailbox goes away
    pub async fn run(mut self) {
        while let Some(command) = self.mailbox.recv().await {
            match command {
                WorkerCommand::Work { unit, reply } => {
                    let result = leibniz_partial_sum(unit);
                    // A master that already stopped no longer listens
                    let _ = reply.send(MasterMessage::Result(result));
                }
                WorkerCommand::Shutdown => break,
            }
        }
    }
}
