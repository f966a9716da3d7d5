//! Configuration for correction searches

/// How the substitution search is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Positions are searched one after another on the calling thread
    Sequential,
    /// Positions are spread over rayon's global pool
    GlobalPool,
    /// Positions are spread over a pool of this many threads, built once per corrector
    DedicatedPool(usize),
}

/// Configuration for the correction search
#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    /// Threads for the substitution search (0 = rayon's global pool)
    pub threads: usize,
    /// Whether to search substitution positions in parallel
    pub parallel: bool,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel: true,
        }
    }
}

impl CorrectionConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    /// Read `--threads` and `--no-parallel`; clap has already validated `--threads`
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);
        let parallel = !matches.get_flag("no-parallel");
        Self::new(threads, parallel)
    }

    pub fn search_mode(&self) -> SearchMode {
        match (self.parallel, self.threads) {
            (false, _) | (true, 1) => SearchMode::Sequential,
            (true, 0) => SearchMode::GlobalPool,
            (true, n) => SearchMode::DedicatedPool(n),
        }
    }
}
