pub mod etl;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{RawRow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
