mod envelope;
mod ops;

pub use envelope::{CallRequest, CallResponse, DEFAULT_ENDPOINT};
pub use ops::{Addition, BinaryArgs, Division, Operation, Uppercase};
