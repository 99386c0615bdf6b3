use clap::Parser;
use coop_admin::config::cli::{load_product_snapshot, JsonLinesOutput};
use coop_admin::config::settings::LogFormat;
use coop_admin::config::Command;
use coop_admin::utils::logger;
use coop_admin::{
    format_brl_input, parse_brl, submit, validate_form, CliConfig, CycleRules,
    CycleValidationReport, Settings,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.settings_file.as_deref().map(Settings::from_file).transpose() {
        Ok(settings) => settings.unwrap_or_default(),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    match settings.log_format() {
        LogFormat::Json if !config.verbose => logger::init_json_logger(settings.log_level()),
        _ => logger::init_cli_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    let valid = match &config.command {
        Command::Cycle {
            start,
            end,
            cycle_type,
        } => run_cycle(start.as_deref(), end.as_deref(), cycle_type.as_deref())?,
        Command::Mask { raw } => {
            println!("{}", format_brl_input(raw));
            true
        }
        Command::Parse { text } => {
            println!("{}", parse_brl(text).as_f64());
            true
        }
        Command::Product {
            json,
            file,
            submit: submit_payload,
        } => run_product(json.as_deref(), file.as_deref(), *submit_payload)?,
    };

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}

fn run_cycle(
    start: Option<&str>,
    end: Option<&str>,
    cycle_type: Option<&str>,
) -> anyhow::Result<bool> {
    let report = CycleValidationReport::from(CycleRules.check_input(start, end, cycle_type));
    println!("{}", serde_json::to_string_pretty(&report)?);
    if report.is_valid() {
        tracing::info!("✅ cycle is valid");
    } else {
        tracing::info!("❌ cycle has {} problem(s)", report.errors.len());
    }
    Ok(report.is_valid())
}

fn run_product(json: Option<&str>, file: Option<&str>, submit_payload: bool) -> anyhow::Result<bool> {
    let snapshot = match load_product_snapshot(json, file) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let outcome = if submit_payload {
        submit(&snapshot, &JsonLinesOutput::new(std::io::stdout()))
    } else {
        validate_form(&snapshot)
    };

    match outcome {
        Ok(()) => {
            if !submit_payload {
                println!("valid");
            }
            Ok(true)
        }
        Err(e) if e.is_input_error() => {
            println!("invalid");
            eprintln!("❌ {}", e.user_friendly_message());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
