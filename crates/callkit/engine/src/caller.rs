use callkit_types::{Attributes, CallConfig};

use crate::call::Call;
use crate::error::CallResult;
use crate::instance::CallInstance;

/// Builds call instances under one shared configuration.
#[derive(Clone, Debug, Default)]
pub struct Caller {
    config: CallConfig,
}

impl Caller {
    /// A caller applying `config` to every instance it builds.
    pub fn new(config: CallConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CallConfig {
        &self.config
    }

    /// Build an instance of `C`, running it unless the configuration asks for
    /// explicit invocation.
    pub fn call<C: Call>(&self, attributes: Attributes) -> CallResult<CallInstance<C>> {
        CallInstance::build(attributes, self.config.clone())
    }
}
