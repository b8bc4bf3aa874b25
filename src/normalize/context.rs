use tracing::warn;

use crate::config::{Config, ConfigBuilder, ConfigWarning, RawConfigStore};

use super::types::StageKind;

/// State threaded through the stages: the raw document being read and the
/// typed settings being filled in.
#[derive(Debug)]
pub struct NormalizeContext {
    pub store: RawConfigStore,
    pub builder: ConfigBuilder,
    warnings: Vec<ConfigWarning>,
    events: Vec<NormalizeEvent>,
}

impl NormalizeContext {
    pub fn new(store: RawConfigStore) -> Self {
        Self {
            store,
            builder: ConfigBuilder::new(),
            warnings: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Records a degraded setting and logs it once.
    pub fn record_warning(&mut self, stage: StageKind, warning: ConfigWarning) {
        warn!(stage = %stage, "{warning}");
        self.events.push(NormalizeEvent::Degraded {
            stage,
            message: warning.to_string(),
        });
        self.warnings.push(warning);
    }

    pub fn record_stage_start(&mut self, stage: StageKind) {
        self.events.push(NormalizeEvent::StageStarted(stage));
    }

    pub fn record_stage_end(&mut self, stage: StageKind) {
        self.events.push(NormalizeEvent::StageCompleted(stage));
    }

    pub fn record_stage_failure(&mut self, stage: StageKind, error: impl Into<String>) {
        self.events.push(NormalizeEvent::StageFailed {
            stage,
            error: error.into(),
        });
    }

    pub fn into_run(self) -> NormalizeRun {
        let NormalizeContext {
            store,
            builder,
            warnings,
            events,
        } = self;

        NormalizeRun {
            config: builder.with_raw(store).build(),
            warnings,
            events,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NormalizeRun {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub events: Vec<NormalizeEvent>,
}

/// Audit trail of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeEvent {
    StageStarted(StageKind),
    StageCompleted(StageKind),
    StageFailed { stage: StageKind, error: String },
    Degraded { stage: StageKind, message: String },
}
