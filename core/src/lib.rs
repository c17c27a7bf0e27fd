mod work_unit;
pub use work_unit::{PartialResult, WorkUnit};

mod worker_message;
pub use worker_message::{MasterMessage, RouterCommand, WorkerCommand};

mod job_parameters;
pub use job_parameters::{JobParameters, ParameterError};

mod estimate;
pub use estimate::PiEstimate;

mod series;
pub use series::leibniz_partial_sum;

mod round_robin;
pub use round_robin::RoundRobin;

mod aggregation;
pub use aggregation::Aggregation;

mod completion_signaling;
pub use completion_signaling::CompletionSignaling;

mod actor_runtime;
pub use actor_runtime::ActorRuntime;
