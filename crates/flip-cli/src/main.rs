mod presenter;
mod shell;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use flip_spec::{
    Page, PagePolicy, UnitSelector, UnitStore, ValidationResult, content_schema, render_json_ui,
    render_text, validate,
};
use log::debug;
use presenter::{StudyPresenter, Verbosity};
use shell::{Reply, StudySession, parse_command};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Environment variable consulted when `--units` is not given.
const UNITS_ENV: &str = "FLIPSTUDY_UNITS";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Study lecture flip-cards in the terminal",
    long_about = "Shows a video unit's flip-cards, lets you answer them interactively, and checks unit content files"
)]
struct Cli {
    /// Default log filter; RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Open an interactive study session for one unit.
    Study {
        /// Unit content JSON (defaults to FLIPSTUDY_UNITS, then the built-in unit).
        #[arg(long, value_name = "FILE")]
        units: Option<PathBuf>,
        /// Unit position or id to study; use `id:<ID>` for numeric ids.
        #[arg(long, value_name = "UNIT", default_value = "0")]
        unit: UnitSelector,
        /// Print card state after every command.
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
    /// Print the page for a unit once and exit.
    Render {
        /// Unit content JSON (defaults to FLIPSTUDY_UNITS, then the built-in unit).
        #[arg(long, value_name = "FILE")]
        units: Option<PathBuf>,
        /// Unit position or id to render; use `id:<ID>` for numeric ids.
        #[arg(long, value_name = "UNIT", default_value = "0")]
        unit: UnitSelector,
        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
    },
    /// Check unit content for authoring mistakes.
    Validate {
        /// Unit content JSON (defaults to FLIPSTUDY_UNITS, then the built-in unit).
        #[arg(long, value_name = "FILE")]
        units: Option<PathBuf>,
    },
    /// Print the JSON schema for unit content files.
    Schema,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str()))
        .init();
    match cli.command {
        Command::Study {
            units,
            unit,
            verbose,
        } => run_study(units, unit, verbose),
        Command::Render {
            units,
            unit,
            format,
        } => run_render(units, unit, format),
        Command::Validate { units } => run_validate(units),
        Command::Schema => run_schema(),
    }
}

fn resolve_units_path(units: Option<PathBuf>) -> Option<PathBuf> {
    units.or_else(|| {
        env::var_os(UNITS_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn load_store(units: Option<PathBuf>) -> CliResult<UnitStore> {
    let store = match resolve_units_path(units) {
        Some(path) => {
            debug!("[Setup] Loading units from {}", path.display());
            UnitStore::from_path(&path)?
        }
        None => {
            debug!("[Setup] Using built-in units");
            UnitStore::builtin()?
        }
    };
    Ok(store)
}

fn mount_page(units: Option<PathBuf>, unit: UnitSelector) -> CliResult<Page> {
    let store = load_store(units)?;
    let policy = PagePolicy {
        unit,
        ..PagePolicy::default()
    };
    Ok(Page::mount(&store, policy))
}

fn run_study(units: Option<PathBuf>, unit: UnitSelector, verbose: bool) -> CliResult<()> {
    let page = mount_page(units, unit)?;
    let presenter = StudyPresenter::new(Verbosity::from_verbose(verbose));
    presenter.show_header(&page.view());

    let mut session = StudySession::new(page);
    show_current(&presenter, &session);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(err) => {
                presenter.show_parse_error(&err);
                continue;
            }
        };
        debug!("[Shell] {:?}", command);

        match session.execute(command) {
            Reply::Card => show_current(&presenter, &session),
            Reply::List => presenter.show_list(session.page().cards(), session.cursor()),
            Reply::Help => presenter.show_help(),
            Reply::Unchanged(message) => presenter.show_unchanged(&message),
            Reply::NoCards => presenter.show_no_cards(),
            Reply::Quit => break,
        }
    }

    presenter.show_summary(session.page().cards());
    Ok(())
}

fn show_current(presenter: &StudyPresenter, session: &StudySession) {
    let cards = session.page().cards();
    if let Some(card) = cards.get(session.cursor()) {
        presenter.show_card(card, session.cursor(), cards.len());
    }
}

fn run_render(units: Option<PathBuf>, unit: UnitSelector, format: RenderFormat) -> CliResult<()> {
    let view = mount_page(units, unit)?.view();
    match format {
        RenderFormat::Text => println!("{}", render_text(&view)),
        RenderFormat::Json => println!("{}", serde_json::to_string_pretty(&render_json_ui(&view))?),
    }
    Ok(())
}

fn run_validate(units: Option<PathBuf>) -> CliResult<()> {
    let store = load_store(units)?;
    let result = validate(&store);
    describe_validation(&store, &result);
    if result.valid {
        Ok(())
    } else {
        Err(format!("{} problem(s) found in unit content", result.issues.len()).into())
    }
}

fn describe_validation(store: &UnitStore, result: &ValidationResult) {
    if result.valid {
        let questions: usize = store.units().iter().map(|unit| unit.questions.len()).sum();
        println!(
            "Content is valid: {} unit(s), {} question(s).",
            store.len(),
            questions
        );
        return;
    }
    println!("Content has problems:");
    for issue in &result.issues {
        println!(
            " - {} [{}] {} ({})",
            issue.path, issue.code, issue.message, issue.unit_id
        );
    }
}

fn run_schema() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&content_schema()?)?);
    Ok(())
}
