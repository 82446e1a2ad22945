use clap::Parser;
use handfreq::cards::deck::Deck;
use handfreq::simulation::simulation::Simulation;

/// Estimate the empirical frequency of every 5-card hand category by
/// dealing from a configurable deck.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// lowest absolute rank in the deck (2 is the standard 52-card deck)
    #[arg(long, default_value_t = 2)]
    lowest: u8,
    /// number of independent deal-and-classify trials
    #[arg(long, default_value_t = 100_000)]
    trials: u64,
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// worker thread count; rayon's default when omitted
    #[arg(long)]
    workers: Option<usize>,
}

fn main() {
    logging();
    let args = Args::parse();
    if let Some(workers) = args.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .expect("configure worker pool");
    }
    let deck = Deck::new(args.lowest);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "deck of {} cards, lowest rank {}, seed {}",
        deck.size(),
        deck.lowest(),
        seed
    );
    let clock = std::time::Instant::now();
    let tally = Simulation::new(deck, args.trials, seed).run();
    log::info!("finished {} trials in {:.2?}", tally.trials(), clock.elapsed());
    print!("{}", tally);
}

fn logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
