use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use datepicker_components::{
    CallbackWith, DatePicker, DatePickerArgs, DatePickerMode, DispatchOutcome, PickerLocale,
    RangeValue,
};
use datepicker_foundation::{CalendarDate, parse_calendar_date};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

mod output;
mod step;

use step::Step;

#[derive(Parser)]
#[command(name = "datepicker-demo")]
#[command(version, about = "Drive a date picker through scripted interactions", long_about = None)]
struct Cli {
    /// Picker mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::SingleDay)]
    mode: ModeArg,
    /// Current value (range start in range modes)
    #[arg(long)]
    value: Option<String>,
    /// Range end in range modes
    #[arg(long = "end-value", requires = "value")]
    end_value: Option<String>,
    /// Show and emit a time in single-day mode
    #[arg(long)]
    include_time: bool,
    /// Reference today, `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm` (defaults to the clock)
    #[arg(long)]
    today: Option<String>,
    /// Label language
    #[arg(long, value_enum, default_value_t = LocaleArg::PtBr)]
    locale: LocaleArg,
    /// Trigger text while no value is set
    #[arg(long)]
    placeholder: Option<String>,
    /// Open the popover before the first step
    #[arg(long)]
    open: bool,
    /// Interaction to perform, repeatable (e.g. `click:10`, `apply`)
    #[arg(short, long = "step")]
    steps: Vec<Step>,
    /// Print the popover after every step
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    SingleDay,
    SingleMonth,
    DateRange,
    Full,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    PtBr,
    EnUs,
}

impl From<LocaleArg> for PickerLocale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::PtBr => PickerLocale::PtBr,
            LocaleArg::EnUs => PickerLocale::EnUs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Emitted {
    Single(String),
    Range(RangeValue),
}

type Emissions = Arc<Mutex<Vec<Emitted>>>;

fn build_mode(cli: &Cli, emissions: &Emissions) -> DatePickerMode {
    let single = {
        let sink = Arc::clone(emissions);
        CallbackWith::new(move |value: String| sink.lock().push(Emitted::Single(value)))
    };
    let range = {
        let sink = Arc::clone(emissions);
        CallbackWith::new(move |value: RangeValue| sink.lock().push(Emitted::Range(value)))
    };
    let seeded_range = || {
        let seed = range_value(cli.value.as_deref(), cli.end_value.as_deref());
        if seed.is_none() && cli.value.is_some() {
            output::note("--value is ignored in range modes without --end-value");
        }
        seed
    };

    match cli.mode {
        ModeArg::SingleDay => DatePickerMode::SingleDay {
            value: cli.value.clone(),
            include_time: cli.include_time,
            on_change: single,
        },
        ModeArg::SingleMonth => DatePickerMode::SingleMonth {
            value: cli.value.clone(),
            on_change: single,
        },
        ModeArg::DateRange => DatePickerMode::DateRange {
            value: seeded_range(),
            on_change: range,
        },
        ModeArg::Full => DatePickerMode::Full {
            value: seeded_range(),
            on_change: range,
        },
    }
}

/// Pairs `--value` and `--end-value` into a range; both edges are needed.
fn range_value(start: Option<&str>, end: Option<&str>) -> Option<RangeValue> {
    match (start, end) {
        (Some(start), Some(end)) => Some(RangeValue::new(start, end)),
        _ => None,
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_emissions(emissions: &Emissions) -> Result<()> {
    for emitted in emissions.lock().drain(..) {
        let json = serde_json::to_string(&emitted).context("failed to serialize emitted value")?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let now = match &cli.today {
        Some(today) => parse_calendar_date(today)
            .with_context(|| format!("invalid --today value `{today}`"))?,
        None => CalendarDate::now(),
    };
    debug!("reference today is {now:?}");

    let emissions: Emissions = Arc::default();
    let mut args = DatePickerArgs::default()
        .mode(build_mode(&cli, &emissions))
        .locale(PickerLocale::from(cli.locale))
        .default_open(cli.open)
        .now(now);
    args.placeholder = cli.placeholder.clone();
    let mut picker = DatePicker::new(args);

    output::status("Showing", picker.display_text());
    for step in &cli.steps {
        match step {
            Step::Trigger => {
                let open = picker.click_trigger();
                output::status("Trigger", if open { "opened" } else { "closed" });
            }
            Step::Msg(msg) => {
                let outcome = picker.dispatch(msg.clone());
                if outcome == DispatchOutcome::Ignored {
                    output::note(format!("{msg:?} ignored, the popover is closed"));
                } else {
                    output::status("Dispatched", format!("{msg:?} -> {outcome:?}"));
                }
            }
        }
        print_emissions(&emissions)?;
        if cli.verbose
            && let Some(view) = picker.view().popover
        {
            output::popover(&view);
        }
    }

    if let Some(view) = picker.view().popover {
        output::status("Open", "popover still mounted");
        output::popover(&view);
    }
    output::status("Showing", picker.display_text());
    Ok(())
}
