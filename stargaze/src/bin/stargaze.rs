use anyhow::Context as _;
use clap::{Parser, Subcommand};
use stargaze::i18n::{system_locale_tag, Locale, LocaleConfig};
use stargaze::report::{Context, Output, OutputFormat, Report};
use stargaze::{Error, LocaleStore, Observer, ObservingConfig};
use stargaze_coords::DEFAULT_MIN_ALTITUDE_DEG;
use stargaze_time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stargaze", version)]
#[command(about = "Which stars can you see tonight?")]
struct Cli {
    /// Display language (en, zh, zh-CN, ...). Overrides the saved preference.
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Minimum altitude in degrees for a star to count as visible
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_ALTITUDE_DEG, allow_negative_numbers = true)]
    min_alt: f64,

    /// Observation time as ISO 8601, e.g. 2024-03-21T04:00:00Z (default: now)
    #[arg(long, global = true)]
    at: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Position and visibility of one star
    Star {
        /// City name or alias, e.g. "New York", NYC, 北京
        city: String,
        /// Star id or Chinese name, e.g. Vega, 织女一
        star: String,
    },
    /// Every catalog star as seen from a city
    Sky {
        city: String,
        /// Only the N brightest visible stars
        #[arg(long)]
        brightest: Option<usize>,
    },
    /// Which members of an asterism are up
    Asterism {
        city: String,
        /// Asterism id or Chinese name, e.g. SummerTriangle, 夏季大三角
        asterism: String,
    },
    /// List catalog cities
    Cities,
    /// List catalog stars
    Stars,
    /// Show or change the saved display language
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the active language
    Show,
    /// Save a language preference for future runs
    Set { tag: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stargaze=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_locale(explicit: Option<&str>, store: Option<&LocaleStore>) -> anyhow::Result<LocaleConfig> {
    if let Some(tag) = explicit {
        return Ok(LocaleConfig::new(tag.parse::<Locale>()?));
    }
    let persisted = store.and_then(|store| {
        store.load().unwrap_or_else(|err| {
            warn!(path = %store.path().display(), %err, "ignoring unreadable locale preference");
            None
        })
    });
    let system = system_locale_tag();
    let config = LocaleConfig::resolve(persisted, system.as_deref());
    debug!(?persisted, ?system, locale = %config.current, "resolved locale");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let issues = stargaze_catalog::validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!(%issue, "catalog issue");
        }
        return Err(Error::InvalidCatalog(issues).into());
    }

    let store = LocaleStore::default_location();
    let locale = resolve_locale(cli.lang.as_deref(), store.as_ref())?;
    let report = Report::new(&locale, cli.format);
    let observing = ObservingConfig::with_min_altitude(cli.min_alt);
    let instant = match cli.at.as_deref() {
        Some(at) => at.parse::<Instant>().map_err(Error::from)?,
        None => Instant::now(),
    };
    debug!(%instant, min_alt = cli.min_alt, "observing conditions");

    let output: Output = match &cli.command {
        Commands::Star { city, star } => {
            let observer = Observer::for_city(city)?;
            let result = observer.star(star, &instant, &observing)?;
            report.star(&context(&observer, &instant, &observing), &result)?
        }
        Commands::Sky { city, brightest } => {
            let observer = Observer::for_city(city)?;
            let ctx = context(&observer, &instant, &observing);
            match brightest {
                Some(limit) => {
                    let results = observer.brightest_visible(&instant, &observing, *limit);
                    report.brightest(&ctx, &results)?
                }
                None => report.sky(&ctx, &observer.sky(&instant, &observing))?,
            }
        }
        Commands::Asterism { city, asterism } => {
            let observer = Observer::for_city(city)?;
            let result = observer.asterism(asterism, &instant, &observing)?;
            report.asterism(&context(&observer, &instant, &observing), &result)?
        }
        Commands::Cities => report.cities()?,
        Commands::Stars => report.stars()?,
        Commands::Lang { action } => match action {
            LangAction::Show => report.message("lang.current", locale.current),
            LangAction::Set { tag } => {
                let chosen: Locale = tag.parse()?;
                let store = store.context("no per-user configuration directory on this platform")?;
                store.save(chosen)?;
                let confirmed = LocaleConfig::new(chosen);
                Report::new(&confirmed, cli.format).message("lang.saved", chosen)
            }
        },
    };

    println!("{output}");
    Ok(())
}

fn context<'a>(observer: &'a Observer, instant: &'a Instant, config: &'a ObservingConfig) -> Context<'a> {
    Context {
        observer,
        instant,
        config,
    }
}
