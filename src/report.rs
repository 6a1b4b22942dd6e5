//! Measurement records and result reporting.
//!
//! A completed run produces exactly one [`Measurement`], rendered by the
//! active [`Reporter`] as a single whitespace-separated `key=value` line
//! starting with the marker `RESULT`. That line is the entire persisted
//! artifact of a run.

/// The immutable outcome of one completed benchmark run.
pub struct Measurement {
    /// Full contender name, including algorithm parameters.
    pub name: String,
    /// Number of keys the function was built over.
    pub num_keys: usize,
    /// Configured load factor (keys per output slot).
    pub load_factor: f64,
    /// Serialized size of the constructed function in bits.
    pub size_bits: u64,
    /// Wall-clock construction time in microseconds.
    pub construction_time_micros: u64,
    /// Wall-clock query phase time in milliseconds (0 when no queries ran).
    pub query_time_millis: u64,
    /// Number of queries each worker performed.
    pub queries_per_thread: usize,
    /// Construction thread count the adapter was allowed to use.
    pub num_threads: usize,
    /// Worker thread count of the query phase.
    pub num_query_threads: usize,
    /// Peak heap use during construction, when an instrumented allocator
    /// was installed on the runner.
    pub peak_memory_bytes: Option<usize>,
    /// Contender-specific trailing `key=value` tokens, leading space
    /// included.
    pub extra_fields: String,
}

impl Measurement {
    /// The primary space-efficiency metric: size in bits divided by the
    /// number of keys.
    pub fn bits_per_key(&self) -> f64 {
        self.size_bits as f64 / self.num_keys as f64
    }

    /// Renders the `RESULT` line for this measurement.
    pub fn result_line(&self) -> String {
        format!(
            "RESULT name={} bitsPerElement={} constructionTimeMilliseconds={} queryTimeMilliseconds={} numQueries={} numQueriesTotal={} N={} loadFactor={} threads={} queryThreads={}{}{}",
            self.name,
            self.bits_per_key(),
            format_construction_millis(self.construction_time_micros),
            self.query_time_millis,
            self.queries_per_thread,
            self.queries_per_thread * self.num_query_threads,
            self.num_keys,
            self.load_factor,
            self.num_threads,
            self.num_query_threads,
            self.peak_memory_bytes
                .map(|bytes| format!(" peakMemoryBytes={bytes}"))
                .unwrap_or_default(),
            self.extra_fields,
        )
    }
}

/// Receives the measurement of each completed run.
pub trait Reporter {
    /// Report one finished run.
    fn report(&self, measurement: &Measurement);
}

/// The default reporter: one `RESULT` line per run on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultLineReporter;

impl Reporter for ResultLineReporter {
    fn report(&self, measurement: &Measurement) {
        println!("{}", measurement.result_line());
    }
}

/// Construction times under 10 ms keep their fractional part; slower ones
/// are reported as whole milliseconds.
fn format_construction_millis(micros: u64) -> String {
    if micros < 10_000 {
        (micros as f64 / 1000.0).to_string()
    } else {
        (micros / 1000).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement() -> Measurement {
        Measurement {
            name: "RustFmph gamma=2".to_string(),
            num_keys: 1000,
            load_factor: 0.8,
            size_bits: 2800,
            construction_time_micros: 1_500_000,
            query_time_millis: 25,
            queries_per_thread: 10,
            num_threads: 1,
            num_query_threads: 4,
            peak_memory_bytes: None,
            extra_fields: String::new(),
        }
    }

    #[test]
    fn result_line_tokens() {
        let line = measurement().result_line();
        assert!(line.starts_with("RESULT name=RustFmph gamma=2 "));
        assert!(line.contains(" bitsPerElement=2.8 "));
        assert!(line.contains(" constructionTimeMilliseconds=1500 "));
        assert!(line.contains(" queryTimeMilliseconds=25 "));
        assert!(line.contains(" numQueries=10 "));
        assert!(line.contains(" numQueriesTotal=40 "));
        assert!(line.contains(" N=1000 "));
        assert!(line.contains(" loadFactor=0.8 "));
        assert!(line.contains(" threads=1 "));
        assert!(line.ends_with(" queryThreads=4"));
    }

    #[test]
    fn optional_and_extra_fields_trail_the_line() {
        let mut m = measurement();
        m.peak_memory_bytes = Some(4096);
        m.extra_fields = " variant=spread".to_string();
        let line = m.result_line();
        assert!(line.ends_with(" queryThreads=4 peakMemoryBytes=4096 variant=spread"));
    }

    #[test]
    fn sub_10ms_construction_keeps_fractional_precision() {
        assert_eq!(format_construction_millis(9_231), "9.231");
        assert_eq!(format_construction_millis(40), "0.04");
        assert_eq!(format_construction_millis(0), "0");
        assert_eq!(format_construction_millis(10_000), "10");
        assert_eq!(format_construction_millis(1_500_999), "1500");
    }

    #[test]
    fn bits_per_key() {
        assert_eq!(measurement().bits_per_key(), 2.8);
    }
}
