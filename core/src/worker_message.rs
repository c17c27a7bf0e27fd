use crate::work_unit::{PartialResult, WorkUnit};

/// Message types received by workers
///
/// Generic over the reply handle `C` so this crate stays runtime-agnostic;
/// channel implementations instantiate it with their sender type. Shutdown
/// is a variant alongside the data message, so it queues behind work in
/// the same FIFO mailbox.
#[derive(Debug, Clone)]
pub enum WorkerCommand<C> {
    /// Work assignment carrying the handle the result is reported through
    Work { unit: WorkUnit, reply: C },
    /// Poison pill; the worker stops after processing it
    Shutdown,
}

/// Message types received by the router
#[derive(Debug, Clone)]
pub enum RouterCommand<C> {
    /// Forward one work unit to the next pool member in round-robin order
    Dispatch { unit: WorkUnit, reply: C },
    /// Deliver a copy of the command to every pool member
    Broadcast(WorkerCommand<C>),
    /// Stop the router itself
    Shutdown,
}

/// Message types received by the master
#[derive(Debug)]
pub enum MasterMessage {
    /// Start a calculation run
    Calculate,
    /// A worker's partial sum
    Result(PartialResult),
}
