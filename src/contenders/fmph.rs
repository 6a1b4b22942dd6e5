//! Adapters for the `ph` crate's fingerprint-based minimal perfect hash
//! functions (fmph and the group-optimized fmph-GO).

use ph::fmph::{BuildConf, GOBuildConf};
use ph::{fmph, GetSize};

use crate::contender::Contender;
use crate::executor::sweep_queries;
use crate::runner::Runner;
use crate::verify::{self, VerifyError};

/// Level sizes benchmarked per family, in percent of the key count
/// (100 = gamma 1.0).
const LEVEL_SIZES: [u16; 3] = [100, 150, 200];

/// Contender wrapping [`fmph::Function`].
pub struct FmphContender {
    num_keys: usize,
    relative_level_size: u16,
    use_multiple_threads: bool,
    function: Option<fmph::Function>,
}

impl FmphContender {
    /// A contender building with the given relative level size (percent).
    pub fn new(num_keys: usize, relative_level_size: u16, use_multiple_threads: bool) -> Self {
        FmphContender {
            num_keys,
            relative_level_size,
            use_multiple_threads,
            function: None,
        }
    }

    fn function(&self) -> &fmph::Function {
        self.function
            .as_ref()
            .expect("construct() completes before evaluation")
    }
}

impl Contender for FmphContender {
    fn name(&self) -> String {
        format!("RustFmph gamma={}", self.relative_level_size as f64 / 100.0)
    }

    fn construct(&mut self, keys: &[String]) -> anyhow::Result<()> {
        let mut conf = BuildConf::default();
        conf.use_multiple_threads = self.use_multiple_threads;
        conf.relative_level_size = self.relative_level_size;
        self.function = Some(fmph::Function::from_slice_with_conf(keys, conf));
        Ok(())
    }

    fn size_bits(&self) -> u64 {
        (self.function().size_bytes() * 8) as u64
    }

    fn perform_queries(&self, keys: &[String]) {
        let function = self.function();
        sweep_queries(keys, |key| function.get(key).unwrap_or(u64::MAX));
    }

    fn perform_test(&self, keys: &[String]) -> Result<(), VerifyError> {
        let function = self.function();
        verify::verify_injection(keys, self.num_keys, |key| {
            function.get(key).unwrap_or(u64::MAX)
        })
    }
}

/// Contender wrapping [`fmph::GOFunction`].
pub struct FmphGoContender {
    num_keys: usize,
    relative_level_size: u16,
    use_multiple_threads: bool,
    function: Option<fmph::GOFunction>,
}

impl FmphGoContender {
    /// A contender building with the given relative level size (percent).
    pub fn new(num_keys: usize, relative_level_size: u16, use_multiple_threads: bool) -> Self {
        FmphGoContender {
            num_keys,
            relative_level_size,
            use_multiple_threads,
            function: None,
        }
    }

    fn function(&self) -> &fmph::GOFunction {
        self.function
            .as_ref()
            .expect("construct() completes before evaluation")
    }
}

impl Contender for FmphGoContender {
    fn name(&self) -> String {
        format!(
            "RustFmphGO gamma={}",
            self.relative_level_size as f64 / 100.0
        )
    }

    fn construct(&mut self, keys: &[String]) -> anyhow::Result<()> {
        let mut conf = GOBuildConf::default();
        conf.use_multiple_threads = self.use_multiple_threads;
        conf.relative_level_size = self.relative_level_size;
        self.function = Some(fmph::GOFunction::from_slice_with_conf(keys, conf));
        Ok(())
    }

    fn size_bits(&self) -> u64 {
        (self.function().size_bytes() * 8) as u64
    }

    fn perform_queries(&self, keys: &[String]) {
        let function = self.function();
        sweep_queries(keys, |key| function.get(key).unwrap_or(u64::MAX));
    }

    fn perform_test(&self, keys: &[String]) -> Result<(), VerifyError> {
        let function = self.function();
        verify::verify_injection(keys, self.num_keys, |key| {
            function.get(key).unwrap_or(u64::MAX)
        })
    }
}

/// Runs the fmph family over the configured level sizes.
pub fn run_family(runner: &Runner) {
    let config = runner.config();
    for relative_level_size in LEVEL_SIZES {
        runner.run(&mut FmphContender::new(
            config.num_keys,
            relative_level_size,
            config.num_threads > 1,
        ));
    }
}

/// Runs the fmph-GO family over the configured level sizes.
pub fn run_go_family(runner: &Runner) {
    let config = runner.config();
    for relative_level_size in LEVEL_SIZES {
        runner.run(&mut FmphGoContender::new(
            config.num_keys,
            relative_level_size,
            config.num_threads > 1,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_keys;

    #[test]
    fn fmph_is_a_minimal_perfect_hash() {
        let keys = generate_keys(2000, 13);
        let mut contender = FmphContender::new(2000, 100, false);
        contender.construct(&keys).expect("construction succeeds");
        assert_eq!(contender.perform_test(&keys), Ok(()));
        assert!(contender.size_bits() > 0);
    }

    #[test]
    fn fmph_go_is_a_minimal_perfect_hash() {
        let keys = generate_keys(2000, 13);
        let mut contender = FmphGoContender::new(2000, 200, false);
        contender.construct(&keys).expect("construction succeeds");
        assert_eq!(contender.perform_test(&keys), Ok(()));
    }

    #[test]
    fn names_carry_the_gamma_parameter() {
        assert_eq!(
            FmphContender::new(10, 150, false).name(),
            "RustFmph gamma=1.5"
        );
        assert_eq!(
            FmphGoContender::new(10, 100, false).name(),
            "RustFmphGO gamma=1"
        );
    }
}
