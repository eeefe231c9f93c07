//! # Process Environment Accessor
//!
//! The `/config` endpoint is the only place that reads live process state.
//! That read goes through [`ProcessEnvironment`] so the rest of the crate
//! works from the startup configuration snapshot, and tests can supply a
//! fixed environment.

use std::collections::BTreeMap;

/// Source of environment variables and the invocation command line
pub trait ProcessEnvironment: Send + Sync + std::fmt::Debug {
    /// All environment variables visible at call time
    fn vars(&self) -> BTreeMap<String, String>;

    /// Invocation arguments, program name first
    fn args(&self) -> Vec<String>;
}

/// Reads the real environment of the running process on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveProcessEnvironment;

impl ProcessEnvironment for LiveProcessEnvironment {
    fn vars(&self) -> BTreeMap<String, String> {
        // vars_os so a non-UTF-8 entry cannot panic the handler
        std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn args(&self) -> Vec<String> {
        std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Fixed environment, for embedding hosts that curate what is reported
#[derive(Debug, Default, Clone)]
pub struct StaticProcessEnvironment {
    pub vars: BTreeMap<String, String>,
    pub args: Vec<String>,
}

impl StaticProcessEnvironment {
    pub fn new<K, V, A>(
        vars: impl IntoIterator<Item = (K, V)>,
        args: impl IntoIterator<Item = A>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        A: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProcessEnvironment for StaticProcessEnvironment {
    fn vars(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    fn args(&self) -> Vec<String> {
        self.args.clone()
    }
}
