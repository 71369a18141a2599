//! Request-side domain types

mod descriptor;
mod method;
mod param;

pub use descriptor::{ParameterSet, RequestDescriptor};
pub use method::HttpMethod;
pub use param::{ParameterRow, ParameterRows};
