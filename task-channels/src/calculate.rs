use std::error::Error;

use leibniz_pi_core::{CompletionSignaling, JobParameters, MasterMessage, PiEstimate};
use tokio::sync::{mpsc, oneshot};

use crate::channel_gate::ChannelCompletionGate;
use crate::master::Master;
use crate::router::Router;
use crate::system::{ActorSystem, TokioRuntime};
use crate::worker::Worker;

/// Mailbox capacity for the router and each worker. The master's own
/// mailbox is unbounded, so result replies can never form a full-channel
/// cycle with the dispatch path.
const MAILBOX_CAPACITY: usize = 64;

/// Runs one full calculation: spawns the worker pool, the router and the
/// master, submits the start command, blocks on the completion gate and
/// joins every actor before returning the recorded estimate.
pub async fn calculate(parameters: JobParameters) -> Result<PiEstimate, Box<dyn Error>> {
    let mut system = ActorSystem::<TokioRuntime>::new();

    let (master_tx, master_rx) = mpsc::unbounded_channel();
    let (router_tx, router_rx) = mpsc::channel(MAILBOX_CAPACITY);
    let (report_tx, report_rx) = oneshot::channel();
    let gate = ChannelCompletionGate::with_count(1);

    let mut pool = Vec::with_capacity(parameters.worker_count);
    for _ in 0..parameters.worker_count {
        let (work_tx, work_rx) = mpsc::channel(MAILBOX_CAPACITY);
        pool.push(work_tx);
        let worker = Worker::new(work_rx);
        system.spawn(move || worker.run());
    }

    let router = Router::new(router_rx, pool);
    system.spawn(move || router.run());

    let master = Master::new(
        parameters,
        master_rx,
        master_tx.clone(),
        router_tx,
        report_tx,
        gate.clone(),
    );
    system.spawn(move || master.run());

    master_tx.send(MasterMessage::Calculate)?;
    gate.wait().await;
    system.join_all().await;

    Ok(report_rx.await?)
}
