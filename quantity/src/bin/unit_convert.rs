/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use quantity::{
    Dimension, Engine, EngineConfig, Notation, Quantity, Unit, UnitError,
    UnitSystem,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit converter
///
/// Converts decimal quantities between units by exact symbol.
struct Args {
    /// Engine configuration (JSON).
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Output JSON instead of text.
    #[clap(long)]
    json: bool,
    /// Increase verbosity; messages are sent to stderr.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Convert a value from one unit to another.
    Convert {
        value: String,
        from: String,
        to: String,
    },
    /// Express a value in the most readable unit.
    Autoscale {
        value: String,
        unit: String,
        /// Only consider units of this system.
        #[clap(long, short, value_enum)]
        system: Option<System>,
    },
    /// List the known units.
    List {
        /// Only list units of this dimension (e.g. "length").
        #[clap(long, short)]
        dimension: Option<String>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum System {
    Metric,
    Imperial,
    UsCustomary,
    Digital,
}

impl From<System> for UnitSystem {
    fn from(system: System) -> Self {
        match system {
            System::Metric => UnitSystem::Metric,
            System::Imperial => UnitSystem::Imperial,
            System::UsCustomary => UnitSystem::UsCustomary,
            System::Digital => UnitSystem::Digital,
        }
    }
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Debug,
                2.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    fn engine(&self) -> Result<Engine, UnitError> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        Engine::from_config(&config)
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), UnitError> {
    let engine = args.engine()?;
    match &args.command {
        Command::Convert { value, from, to } => {
            let quantity = engine.quantity(value, from)?;
            let context = engine.context();
            let result = engine.converter().convert_quantity(
                &quantity,
                Unit::from_symbol(to)?,
                context.scale,
                context.rounding,
            )?;
            print_quantity(&result, args.json);
        }
        Command::Autoscale {
            value,
            unit,
            system,
        } => {
            let quantity = engine.quantity(value, unit)?;
            let result = engine
                .autoscaler()
                .autoscale(&quantity, system.map(UnitSystem::from))?;
            print_quantity(&result, args.json);
        }
        Command::List { dimension } => {
            let dimension = match dimension {
                Some(name) => Some(parse_dimension(name)?),
                None => None,
            };
            for unit in engine.conversions().units() {
                if dimension.map_or(false, |d| unit.dimension() != d) {
                    continue;
                }
                match args.json {
                    true => println!("{}", to_json(&unit)),
                    false => println!(
                        "{}\t{}\t{}",
                        unit.symbol(Notation::Unicode),
                        unit.name(),
                        unit.dimension()
                    ),
                }
            }
        }
    }
    Ok(())
}

fn parse_dimension(name: &str) -> Result<Dimension, UnitError> {
    Dimension::LIST
        .iter()
        .find(|d| d.name() == name)
        .copied()
        .ok_or_else(|| UnitError::Config(format!("unknown dimension: {name}")))
}

fn print_quantity(quantity: &Quantity, json: bool) {
    match json {
        true => println!("{}", to_json(quantity)),
        false => println!("{}", quantity),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("serialization failed!?")
}
