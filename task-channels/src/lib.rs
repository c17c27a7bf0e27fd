mod worker;
pub use worker::{ResultSender, WorkSender, Worker};

mod router;
pub use router::{Router, RouterSender};

mod master;
pub use master::Master;

mod channel_gate;
pub use channel_gate::ChannelCompletionGate;

mod system;
pub use system::{ActorSystem, TokioRuntime};

mod calculate;
pub use calculate::calculate;
