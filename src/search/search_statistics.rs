use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Name of the engine, used to tag log lines
    engine: &'static str,
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes pushed onto the frontier, including the root
    generated_nodes: usize,
    /// Number of popped nodes discarded because their state was already
    /// explored at no greater cost
    stale_nodes: usize,
    /// Largest frontier size observed
    max_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new(engine: &'static str) -> Self {
        info!(engine, "starting search");
        Self {
            engine,
            expanded_nodes: 0,
            generated_nodes: 0,
            stale_nodes: 0,
            max_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_stale_nodes(&mut self) {
        self.stale_nodes += 1;
        self.log_if_needed();
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn stale_nodes(&self) -> usize {
        self.stale_nodes
    }

    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            engine = self.engine,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            stale_nodes = self.stale_nodes,
            max_frontier_size = self.max_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        info!(engine = self.engine, "finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
