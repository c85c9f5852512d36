use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub pattern_compilations: Counter,
    pub pattern_compilation_errors: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            pattern_compilations: counter!("pattern.compilations"),
            pattern_compilation_errors: counter!("pattern.compilation_errors"),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
