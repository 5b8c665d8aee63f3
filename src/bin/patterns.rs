// Runs every pattern demonstration and prints the results.
//
// Config: set PATTERNS_CONFIG to a .toml or .json file (see DemoConfig).
// Logging: RUST_LOG overrides the config's log_filter; logs go to stderr.

use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use js_patterns::factory::CarMaker;
use js_patterns::newspaper::{Paper, Reader, Transcript};
use js_patterns::singleton::{Singleton, Singleton2};
use js_patterns::validator::Validator;
use js_patterns::{attach, Attached, DemoConfig, Handler, HandlerError, PatternError, Publish};

// ============================================================================
// Singleton
// ============================================================================

fn singleton_example() {
    let single = Singleton::instance();
    let single2 = Singleton::instance();
    println!("{}", std::ptr::eq(single, single2));

    let single3 = Singleton2::instance();
    single3.set_bag("bag");
    let single4 = Singleton2::instance();
    single4.set_bag("bag2");

    println!("{}", std::ptr::eq(single3, single4));
    println!("{} bag={}", single3.name(), single3.bag());
}

// ============================================================================
// Factory
// ============================================================================

fn factory_example() -> Result<(), PatternError> {
    for kind in ["Compact", "Convertible", "SUV"] {
        let car = CarMaker::factory(kind)?;
        println!("{}", car.drive());
    }

    if let Err(err) = CarMaker::factory("Tank") {
        println!("{err}");
    }
    Ok(())
}

// ============================================================================
// Strategy
// ============================================================================

fn strategy_example(config: &DemoConfig) -> Result<(), PatternError> {
    let data = [
        ("first_name", "Super"),
        ("last_name", "Man"),
        ("age", "unknown"),
        ("username", "o_0"),
    ];

    let mut validator = Validator::with_builtin_checks().with_config(&config.validator);
    if validator.validate(data)? {
        println!("{}", validator.messages().join("\n"));
    } else {
        println!("{}", "all fields valid".green());
    }
    Ok(())
}

// ============================================================================
// Observer
// ============================================================================

fn observer_example() -> Result<(), PatternError> {
    let transcript = Transcript::new();
    let mut paper = Paper::new();
    let joe = Reader::new(&transcript);
    joe.subscribe_to(&mut paper);

    paper.daily()?;
    paper.monthly()?;

    for line in transcript.drain() {
        println!("{line}");
    }
    Ok(())
}

fn observer_attach_example() {
    struct Kettle {
        litres: f32,
    }

    let mut kettle: Attached<Kettle, u8> = attach(Kettle { litres: 1.5 });
    kettle.subscribe_to(
        Handler::new(|temp: &u8| println!("kettle at {temp}°C")),
        "temperature",
    );
    kettle.subscribe_to(
        Handler::fallible(|temp: &u8| {
            if *temp >= 100 {
                Err(HandlerError::new("boiling over"))
            } else {
                Ok(())
            }
        }),
        "temperature",
    );

    println!("kettle holds {} litres", kettle.litres);
    for temp in [80u8, 100] {
        let report = kettle.publisher().publish_isolated(&temp, "temperature");
        for failure in &report.failures {
            println!("{}", failure.to_string().red());
        }
    }
}

fn heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold().cyan());
}

fn main() -> Result<(), PatternError> {
    let config = DemoConfig::discover()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !config.use_color() {
        colored::control::set_override(false);
    }
    info!(log_filter = %config.log_filter, color = config.use_color(), "starting demos");

    heading("Singleton Pattern");
    singleton_example();
    println!();

    heading("Factory Pattern");
    factory_example()?;
    println!();

    heading("Strategy Pattern (Validator)");
    strategy_example(&config)?;
    println!();

    heading("Observer Pattern (Paper)");
    observer_example()?;
    println!();

    heading("Observer Pattern (attach)");
    observer_attach_example();

    Ok(())
}
