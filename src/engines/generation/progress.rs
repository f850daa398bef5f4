use super::stats::GenerationStats;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        (**self).on_generation_complete(stats);
    }

    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize) {
        (**self).on_candidate_evaluated(candidate_num, total);
    }
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {}: best = {:.4} {}, mean = {:.4}, worst = {:.4}",
            stats.generation + 1,
            stats.best_fitness,
            stats.best_candidate,
            stats.mean_fitness,
            stats.worst_fitness
        );
    }

    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize) {
        if candidate_num % 10 == 0 || candidate_num == total {
            log::trace!("  Evaluated {}/{} candidates", candidate_num, total);
        }
    }
}

#[derive(Debug, Default)]
pub struct NoopProgressCallback;

impl ProgressCallback for NoopProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}

    fn on_candidate_evaluated(&mut self, _candidate_num: usize, _total: usize) {}
}
