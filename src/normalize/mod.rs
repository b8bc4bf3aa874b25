//! Turns the raw string document into typed settings through a fixed
//! sequence of stages.

pub mod context;
pub mod pipeline;
pub mod stages;
pub mod types;

pub use context::{NormalizeContext, NormalizeEvent, NormalizeRun};
pub use pipeline::{NormalizationPipeline, PipelineBuilder};
pub use stages::{
    BooleanStage, IntegerStage, NamingRuleStage, NormalizeStage, ProxyFreeStage, ProxyStage,
    TupleStage,
};
pub use types::StageKind;
