use billiards_engine::*;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use std::error::Error;
use std::process;

const USAGE: &str = "usage: table_sim [CONFIG.json] [--ticks N] [--seed SEED] [--scatter SPEED] [--verbose]";

struct Args {
    config_path: Option<String>,
    ticks: u64,
    seed: Option<u64>,
    scatter_speed: f64,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        ticks: 3600,
        seed: None,
        scatter_speed: 6.0,
        verbose: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--ticks" => args.ticks = next_value(&mut iter, "--ticks")?,
            "--seed" => args.seed = Some(next_value(&mut iter, "--seed")?),
            "--scatter" => args.scatter_speed = next_value(&mut iter, "--scatter")?,
            "--help" | "-h" => return Err(USAGE.to_string()),
            flag if flag.starts_with('-') => return Err(format!("unknown flag {}\n{}", flag, USAGE)),
            path => args.config_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

fn next_value<T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let raw = iter.next().ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map_err(|_| format!("invalid value {:?} for {}", raw, flag))
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let mut sim = Simulation::new(config)?;

    match args.seed {
        Some(seed) => sim.scatter(seed, args.scatter_speed),
        None => {
            // Break straight at the apex of the rack
            let aim = sim.config().balls.rack_spot;
            let speed = sim.config().shot.max_speed;
            log::info!("break shot: {:?}", sim.shoot(aim, speed));
        }
    }

    // Drive the engine the way a render loop would, one frame at a time
    let frame_dt = sim.tick_dt();
    while sim.tick_count() < args.ticks {
        for report in sim.advance(frame_dt) {
            for id in &report.pocketed {
                log::info!("tick {}: ball {} pocketed", sim.tick_count(), id);
            }
            if report.cue_ball_pocketed {
                log::info!("tick {}: cue ball pocketed", sim.tick_count());
            }
            if report.cue_ball_returned_home {
                log::info!("tick {}: cue ball re-spotted", sim.tick_count());
            }
        }
        if sim.is_shootable() {
            log::info!("table at rest after {} ticks", sim.tick_count());
            break;
        }
    }

    log::info!(
        "{} object balls left on the table",
        sim.balls().object_count()
    );
    println!("{}", serde_json::to_string_pretty(&sim.ball_states())?);
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error setting up logging: {}", e);
        process::exit(1);
    }
    if let Err(e) = run(args) {
        log::error!("{}", e);
        process::exit(1);
    }
}
