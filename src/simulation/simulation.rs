use super::tally::Tally;
use crate::cards::deck::Deck;
use crate::evaluation::classifier::Classifier;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// N independent deal-and-classify trials over one deck configuration.
///
/// The seed is injected rather than read from global state, so a run is
/// reproducible for a fixed seed and worker count. Each worker derives its
/// own SmallRng stream and accumulates into a private Tally; the tallies
/// are merged once at the end, so nothing is shared while trials run.
pub struct Simulation {
    deck: Deck,
    trials: u64,
    seed: u64,
}

impl Simulation {
    pub fn new(deck: Deck, trials: u64, seed: u64) -> Self {
        Self { deck, trials, seed }
    }

    pub fn run(&self) -> Tally {
        let workers = rayon::current_num_threads() as u64;
        log::info!(
            "simulating {} trials over {} cards across {} workers",
            self.trials,
            self.deck.size(),
            workers
        );
        (0..workers)
            .into_par_iter()
            .map(|worker| self.chunk(worker, self.share(worker, workers)))
            .reduce(Tally::default, Tally::absorb)
    }

    /// trials assigned to one worker, remainder spread over the low ids
    fn share(&self, worker: u64, workers: u64) -> u64 {
        self.trials / workers + u64::from(worker < self.trials % workers)
    }

    fn chunk(&self, worker: u64, trials: u64) -> Tally {
        let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(worker));
        let mut tally = Tally::default();
        for _ in 0..trials {
            let hand = self.deck.deal(&mut rng);
            tally.record(&Classifier::from(hand).labels());
        }
        log::debug!("worker {} finished {} trials", worker, trials);
        tally
    }
}
