//! API Gateway entry points that start and poll workflow runs. Pure
//! pass-through to the workflow engine; every response goes through
//! [`response::json_response`].

pub mod engine;
pub mod invoke;
pub mod response;
pub mod status;

pub use engine::{StepFunctionsEngine, WorkflowEngine};
pub use invoke::{handle_invoke, start_run};
pub use status::{handle_status, query_status};
