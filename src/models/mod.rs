pub mod request;
pub mod resource;
pub mod sample_row;

pub use request::{QueryParam, RequestSpec};
pub use resource::{OperationMode, ResourceKind, ResourceSelector};
pub use sample_row::SampleRow;
