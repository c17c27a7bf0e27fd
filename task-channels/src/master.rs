use std::time::Instant;

use leibniz_pi_core::{
    Aggregation, CompletionSignaling, JobParameters, MasterMessage, PiEstimate, RouterCommand,
    WorkerCommand,
};
use tokio::sync::{mpsc, oneshot};

use crate::router::RouterSender;
use crate::worker::ResultSender;

/// The coordinator's lifecycle: Running is the span of the Calculate
/// handler, Stopped is reached by leaving the receive loop.
#[derive(Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Draining,
}

/// Coordinator actor: emits the full work batch, accumulates partial
/// sums, detects completion and triggers shutdown of the pipeline
pub struct Master<G: CompletionSignaling> {
    parameters: JobParameters,
    mailbox: mpsc::UnboundedReceiver<MasterMessage>,
    reply: ResultSender,
    router: RouterSender,
    report: Option<oneshot::Sender<PiEstimate>>,
    gate: G,
}

impl<G: CompletionSignaling> Master<G> {
    pub fn new(
        parameters: JobParameters,
        mailbox: mpsc::UnboundedReceiver<MasterMessage>,
        reply: ResultSender,
        router: RouterSender,
        report: oneshot::Sender<PiEstimate>,
        gate: G,
    ) -> Self {
        Self {
            parameters,
            mailbox,
            reply,
            router,
            report: Some(report),
            gate,
        }
    }

    pub async fn run(mut self) {
        let mut phase = Phase::Idle;
        let mut aggregation = Aggregation::new(self.parameters.message_count);
        let mut started = None;

        while let Some(message) = self.mailbox.recv().await {
            match message {
                MasterMessage::Calculate if phase == Phase::Idle => {
                    started = Some(Instant::now());

                    for unit in self.parameters.work_units() {
                        let dispatch = RouterCommand::Dispatch {
                            unit,
                            reply: self.reply.clone(),
                        };
                        if self.router.send(dispatch).await.is_err() {
                            // Router gone; nothing left to coordinate
                            return;
                        }
                    }

                    // The router's mailbox is FIFO, so every unit above is
                    // forwarded before any worker sees its shutdown command
                    let _ = self
                        .router
                        .send(RouterCommand::Broadcast(WorkerCommand::Shutdown))
                        .await;
                    let _ = self.router.send(RouterCommand::Shutdown).await;

                    phase = Phase::Draining;
                }
                MasterMessage::Result(result) if phase == Phase::Draining => {
                    if aggregation.record(result) {
                        let elapsed = started.map(|at| at.elapsed()).unwrap_or_default();
                        let estimate = PiEstimate {
                            value: aggregation.sum(),
                            elapsed,
                        };

                        println!("Pi approximation: {}", estimate.value);
                        println!("Calculation time: {} ms", estimate.elapsed.as_millis());

                        if let Some(report) = self.report.take() {
                            let _ = report.send(estimate);
                        }
                        self.gate.count_down();
                        break;
                    }
                }
                // A duplicate start or an out-of-phase result is dropped
                _ => {}
            }
        }
    }
}
