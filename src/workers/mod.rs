pub mod core;
pub mod flow_runner;

pub use self::core::EventSender;
pub use flow_runner::FlowRunner;
