pub mod convert;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ConversionReport, Document, Record, SourceTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
