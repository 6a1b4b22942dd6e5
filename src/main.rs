use mphf_bench::config;
use mphf_bench::registry::Registry;
use mphf_bench::runner::Runner;
use mphf_bench::{PeakMemAlloc, INSTRUMENTED_SYSTEM};

#[global_allocator]
static GLOBAL: &PeakMemAlloc<std::alloc::System> = &INSTRUMENTED_SYSTEM;

fn main() {
    let (config, contenders) = config::parse_args();

    let registry = Registry::with_builtins();
    if contenders.is_empty() {
        println!(
            "No contenders selected. Available: {}",
            registry.names().join(", ")
        );
        return;
    }

    if config.num_threads > 1 {
        // Adapters that construct in parallel draw workers from the global
        // pool.
        if let Err(error) = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build_global()
        {
            println!("Error: {error}");
        }
    }

    let mut runner = Runner::new(config);
    runner.set_alloc(GLOBAL);
    for name in &contenders {
        // A bad name or failing run never stops the batch.
        if let Err(error) = registry.run(name, &runner) {
            println!("Error: {error}");
        }
    }
}
