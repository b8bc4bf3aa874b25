use tracing::{debug, error};

use crate::config::{ConfigError, RawConfigStore};

use super::context::{NormalizeContext, NormalizeRun};
use super::stages::{
    BooleanStage, IntegerStage, NamingRuleStage, NormalizeStage, ProxyFreeStage, ProxyStage,
    TupleStage,
};

pub struct NormalizationPipeline {
    stages: Vec<Box<dyn NormalizeStage>>,
}

impl NormalizationPipeline {
    pub fn new(stages: Vec<Box<dyn NormalizeStage>>) -> Self {
        Self { stages }
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Runs every stage in order. The store is consumed, so a document can
    /// only be normalized once.
    pub fn run(&self, store: RawConfigStore) -> Result<NormalizeRun, ConfigError> {
        let mut context = NormalizeContext::new(store);

        for stage in &self.stages {
            let kind = stage.kind();
            context.record_stage_start(kind);
            if let Err(err) = stage.execute(&mut context) {
                error!(stage = %kind, error = %err, "configuration normalization failed");
                context.record_stage_failure(kind, err.to_string());
                return Err(err);
            }
            debug!(stage = %kind, "normalization stage completed");
            context.record_stage_end(kind);
        }

        Ok(context.into_run())
    }
}

impl Default for NormalizationPipeline {
    fn default() -> Self {
        PipelineBuilder::new().with_default_stages().build()
    }
}

pub struct PipelineBuilder {
    stages: Vec<Box<dyn NormalizeStage>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add_stage<S>(mut self, stage: S) -> Self
    where
        S: NormalizeStage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Integers, tuples, booleans, proxy, naming rule, proxy-free URLs.
    pub fn with_default_stages(self) -> Self {
        self.add_stage(IntegerStage)
            .add_stage(TupleStage)
            .add_stage(BooleanStage)
            .add_stage(ProxyStage)
            .add_stage(NamingRuleStage)
            .add_stage(ProxyFreeStage)
    }

    pub fn build(self) -> NormalizationPipeline {
        NormalizationPipeline::new(self.stages)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
