//! Run-time configuration object + fluent builder.

use crate::core::{
    error::{ConfigError, UnknownScale},
    scale::Scale,
};

/// Immutable parameters handed to the stream processor.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: Scale,
    pub target: Scale,
    /// Treat every input item as a delimited list of values.
    pub array: bool,
    /// Characters that split an array line; `None` means whitespace.
    pub in_sep: Option<String>,
    /// Printed between values; `None` means newline-terminated output.
    pub out_sep: Option<String>,
    pub debug: bool,
}

impl RunConfig {
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

/// Collects raw command-line tokens; scale validation happens in `build`.
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    source: Option<String>,
    target: Option<String>,
    array: bool,
    in_sep: Option<String>,
    out_sep: Option<String>,
    debug: bool,
}

impl RunConfigBuilder {
    #[inline]
    pub fn source_opt(mut self, s: Option<&str>) -> Self {
        if let Some(t) = s {
            self.source = Some(t.to_owned());
        }
        self
    }
    #[inline]
    pub fn target_opt(mut self, t: Option<&str>) -> Self {
        if let Some(s) = t {
            self.target = Some(s.to_owned());
        }
        self
    }
    #[inline]
    pub fn array(mut self, on: bool) -> Self {
        self.array = on;
        self
    }
    #[inline]
    pub fn in_sep(mut self, sep: Option<String>) -> Self {
        self.in_sep = sep;
        self
    }
    #[inline]
    pub fn out_sep(mut self, sep: Option<String>) -> Self {
        self.out_sep = sep;
        self
    }
    #[inline]
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let (Some(source), Some(target)) = (self.source, self.target) else {
            return Err(ConfigError::MissingScales);
        };
        let source = source
            .parse::<Scale>()
            .map_err(|UnknownScale(s)| ConfigError::InvalidSource(s))?;
        let target = target
            .parse::<Scale>()
            .map_err(|UnknownScale(t)| ConfigError::InvalidTarget(t))?;
        Ok(RunConfig {
            source,
            target,
            array: self.array,
            in_sep: self.in_sep,
            out_sep: self.out_sep,
            debug: self.debug,
        })
    }
}
