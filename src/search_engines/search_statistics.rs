use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Nodes removed from the frontier
    popped: usize,
    /// Nodes added to the frontier
    pushed: usize,
    /// Open nodes replaced by a cheaper path (decrease-key)
    decreased: usize,
    /// Generated nodes thrown away in favour of an open duplicate
    discarded: usize,
    /// Nodes whose successors were generated
    expanded: usize,
    /// Successor nodes generated
    generated: usize,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            popped: 0,
            pushed: 0,
            decreased: 0,
            discarded: 0,
            expanded: 0,
            generated: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_popped(&mut self) {
        self.popped += 1;
        self.log_if_needed();
    }

    pub fn increment_pushed(&mut self) {
        self.pushed += 1;
        self.log_if_needed();
    }

    pub fn increment_decreased(&mut self) {
        self.decreased += 1;
        self.log_if_needed();
    }

    pub fn increment_discarded(&mut self) {
        self.discarded += 1;
        self.log_if_needed();
    }

    pub fn increment_expanded(&mut self) {
        self.expanded += 1;
        self.log_if_needed();
    }

    pub fn increment_generated(&mut self, num_nodes: usize) {
        self.generated += num_nodes;
        self.log_if_needed();
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            popped = self.popped,
            pushed = self.pushed,
            decreased = self.decreased,
            discarded = self.discarded,
            expanded = self.expanded,
            generated = self.generated
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
