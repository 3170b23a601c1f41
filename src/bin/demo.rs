use log::{debug, info};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::{process, time};

use rbt::RBTree;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "30")]
    loads: usize,

    #[structopt(long = "random")] // default sequential keys 0..loads
    random: bool,

    #[structopt(long = "quiet")] // skip rendering the tree
    quiet: bool,

    #[structopt(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let opts = Opt::from_args();

    let mode = TerminalMode::Stderr;
    if let Err(err) = TermLogger::init(opts.log_level, Config::default(), mode, ColorChoice::Auto) {
        eprintln!("logger: {}", err);
    }

    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = SmallRng::seed_from_u64(seed);
    info!("seed {}", seed);

    let mut index: RBTree<u64> = RBTree::with_capacity(opts.loads);

    let start = time::Instant::now();
    for i in 0..opts.loads {
        let key = if opts.random {
            rng.gen::<u64>() % key_space(opts.loads)
        } else {
            i as u64
        };
        let id = index.insert(key);
        debug!("insert {} -> {}", key, id);
    }
    println!("loaded {} items in {:?}", index.len(), start.elapsed());

    match index.validate() {
        Ok(stats) => println!("{:?}", stats),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }

    if !opts.quiet {
        println!("{}", index);
    }
}

// random keys are drawn from 0..loads*10, saturating for huge loads.
fn key_space(loads: usize) -> u64 {
    (loads as u64).saturating_mul(10).max(1)
}
