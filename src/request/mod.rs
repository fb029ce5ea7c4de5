//! Turning caller options into validated requests.

pub mod builder;
pub mod call;
pub mod options;


pub use builder::{build, BuiltRequest, ValidationError, ValidationErrors};
pub use call::EndpointCall;
pub use options::{CallerOptions, OptionValue};
