mod cli;

use anyhow::{bail, Context, Result};
use chrono::Timelike;
use clap::Parser;
use cli::{Cli, Commands, DecideArgs, Et0Args};
use irrigops::config::Config;
use irrigops::{
    Et0Estimate, Et0Estimator, IrrigationDecision, IrrigationDecisionEngine, IrrigationMode,
    SystemConditions,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging on stderr so stdout stays parseable
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init = cli.command {
        Config::setup_interactive().context("interactive setup failed")?;
        return Ok(());
    }

    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run `irrigops init` or pass --config <path>");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Et0(args) => run_et0(&config, args),
        Commands::Decide(args) => run_decide(&config, args),
        Commands::Demo => {
            run_demo();
            Ok(())
        }
        Commands::Check => {
            run_check(&config);
            Ok(())
        }
        Commands::Init => Ok(()),
    }
}

fn run_et0(config: &Config, args: Et0Args) -> Result<()> {
    let Some(radiation) = args.weather.radiation else {
        bail!("--radiation is required to estimate ET0");
    };

    let estimator = Et0Estimator::new(
        args.wind_speed.unwrap_or(config.estimator.wind_speed),
        args.altitude.unwrap_or(config.estimator.altitude),
    );
    let estimate = estimator.calculate(args.weather.temperature, args.weather.humidity, radiation);

    if args.json {
        let out = json!({
            "et0": estimate.sentinel(),
            "valid": estimate.is_valid(),
            "reason": estimate.reason().map(|r| r.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "Temp: {:.1}°C, Humidity: {:.1}%, Radiation: {:.2} -> ET0: {}",
            args.weather.temperature, args.weather.humidity, radiation, estimate
        );
    }

    Ok(())
}

fn run_decide(config: &Config, args: DecideArgs) -> Result<()> {
    let estimate = match (args.et0, args.weather.radiation) {
        (Some(et0), _) => Et0Estimate::Valid(et0),
        (None, Some(radiation)) => config.estimator.build().calculate(
            args.weather.temperature,
            args.weather.humidity,
            radiation,
        ),
        // clap's "demand" group guarantees one of the two
        (None, None) => bail!("either --et0 or --radiation is required"),
    };

    let hour = args
        .hour
        .unwrap_or_else(|| chrono::Local::now().hour() as i32);

    let engine = config.engine.build();

    // An unusable estimate means no watering this cycle
    let Some(et0) = estimate.value() else {
        let reason = estimate.reason().map(|r| r.to_string());
        tracing::warn!(?reason, "ET0 estimate invalid, skipping irrigation");
        let decision = IrrigationDecision::skip();
        if args.json {
            let out = json!({
                "et0": estimate.sentinel(),
                "rule_id": "invalid_et0",
                "reason": reason,
                "decision": decision,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("ET0: {}", estimate);
            println!("Decision: {}", decision);
        }
        return Ok(());
    };

    let conditions = SystemConditions::new(
        et0,
        args.weather.temperature,
        args.weather.humidity,
        hour,
        !args.no_power && config.site.power_available,
        args.water_level.unwrap_or(config.site.water_level),
    )
    .with_mode(args.mode.unwrap_or(config.site.mode));

    let verdict = engine.explain(&conditions);

    if args.json {
        let out = json!({
            "conditions": conditions,
            "rule_id": verdict.rule_id,
            "rule_name": verdict.rule_name,
            "decision": verdict.decision,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_conditions(&conditions);
        println!(
            "  Decision: {} (rule: {})",
            verdict.decision, verdict.rule_name
        );
    }

    Ok(())
}

fn print_conditions(conditions: &SystemConditions) {
    println!(
        "  ET0: {:.1} mm/day, Temp: {:.0}°C, Hour: {}:00",
        conditions.et0, conditions.temperature, conditions.hour
    );
    println!(
        "  Mode: {}, Power: {}, Water: {}ml",
        conditions.mode, conditions.power_available, conditions.water_level
    );
}

fn demo_scenarios() -> Vec<SystemConditions> {
    vec![
        SystemConditions::new(4.5, 28.0, 60.0, 8, true, 3000),
        SystemConditions::new(6.0, 35.0, 45.0, 14, true, 2000),
        SystemConditions::new(3.0, 25.0, 70.0, 18, false, 1500),
        SystemConditions::new(7.5, 38.0, 40.0, 12, true, 4000).with_mode(IrrigationMode::Extreme),
    ]
}

fn run_demo() {
    let estimator = Et0Estimator::new(1.5, 15.0);
    let samples = [
        (25.0, 60.0, 8.0),
        (30.0, 50.0, 10.0),
        (35.0, 40.0, 12.0),
        (20.0, 70.0, 6.0),
    ];

    println!("ET0 Calculation Examples");
    println!("{}", "-".repeat(50));
    for (temperature, humidity, radiation) in samples {
        let estimate = estimator.calculate(temperature, humidity, radiation);
        println!(
            "Temp: {:.1}C, Humidity: {:.1}%, Radiation: {:.1} -> ET0: {}",
            temperature, humidity, radiation, estimate
        );
    }

    println!();
    println!("Irrigation Decision Examples");
    println!("{}", "-".repeat(70));

    let engine = IrrigationDecisionEngine::default();
    for (i, scenario) in demo_scenarios().iter().enumerate() {
        let verdict = engine.explain(scenario);
        println!();
        println!("Scenario {}:", i + 1);
        print_conditions(scenario);
        println!(
            "  Decision: {} (rule: {})",
            verdict.decision, verdict.rule_name
        );
    }
}

fn run_check(config: &Config) {
    let estimator = config.estimator.build();
    let engine = config.engine.build();
    let constants = estimator.constants();

    println!("Configuration OK");
    println!();
    println!("Estimator");
    println!("  Wind speed:           {:.2} m/s", estimator.wind_speed());
    println!("  Altitude:             {:.1} m", estimator.altitude());
    println!("  Barometric pressure:  {:.3} kPa", constants.pressure_kpa);
    println!("  Psychrometric const.: {:.6} kPa/°C", constants.gamma);
    println!();
    println!("Decision engine");
    println!(
        "  Duration bounds:      {}-{} s",
        engine.min_duration(),
        engine.max_duration()
    );
    for (id, name) in engine.rules().list_rules() {
        println!("  Rule {:<18} {}", id, name);
    }
    println!();
    println!("Site defaults");
    println!("  Water level:          {} mL", config.site.water_level);
    println!("  Power available:      {}", config.site.power_available);
    println!("  Mode:                 {}", config.site.mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenarios_match_reference_outputs() {
        let engine = IrrigationDecisionEngine::default();
        let results: Vec<_> = demo_scenarios()
            .iter()
            .map(|c| engine.make_decision(c).as_tuple())
            .collect();
        assert_eq!(results, vec![(true, 27), (true, 40), (false, 0), (true, 35)]);
    }
}
