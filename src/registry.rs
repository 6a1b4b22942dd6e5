//! Name-based lookup of contender families.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::contenders;
use crate::runner::Runner;

/// A family runs one or more parameterizations of the same algorithm
/// through the given runner.
pub type ContenderFamily = fn(&Runner);

/// Requested contender name is not registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown contender {name:?}, available: {available}")]
pub struct UnknownContender {
    /// The name that failed to resolve.
    pub name: String,
    /// Comma-separated list of registered names.
    pub available: String,
}

/// Registry mapping contender names to their family runners, so the
/// command line selects algorithms by name instead of compiled-in
/// branches.
pub struct Registry {
    families: FxHashMap<&'static str, ContenderFamily>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry {
            families: FxHashMap::default(),
        }
    }

    /// A registry pre-populated with the built-in contender families.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("rank", contenders::rank::run_family);
        registry.register("fmph", contenders::fmph::run_family);
        registry.register("fmph-go", contenders::fmph::run_go_family);
        registry
    }

    /// Registers `family` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, family: ContenderFamily) {
        self.families.insert(name, family);
    }

    /// The registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.families.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Runs the family registered under `name`.
    pub fn run(&self, name: &str, runner: &Runner) -> Result<(), UnknownContender> {
        let Some(family) = self.families.get(name) else {
            return Err(UnknownContender {
                name: name.to_string(),
                available: self.names().join(", "),
            });
        };
        family(runner);
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
