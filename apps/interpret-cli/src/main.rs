use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

use intent_interpreter as interp;
use interp::{Command, Intent, Interpreter, InterpreterConfig, Session, SessionEvent};

#[derive(Parser, Debug)]
#[command(
    name = "interpret",
    version,
    about = "Interpret robot command sentences into intents",
    disable_help_subcommand = true
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a single sentence
    Parse {
        /// Sentence words
        #[arg(required = true)]
        text: Vec<String>,
        /// Also print the dispatch command
        #[arg(long, action = ArgAction::SetTrue)]
        command: bool,
    },
    /// Read utterances from stdin, one per line
    Repl {
        /// Interpret every line without waiting for the wake word
        #[arg(long, action = ArgAction::SetTrue)]
        no_wake: bool,
    },
    /// Print the action catalogue
    Catalogue,
}

#[derive(Serialize)]
struct Report<'a> {
    intent: &'a Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    media: Vec<PathBuf>,
}

impl<'a> Report<'a> {
    fn new(intent: &'a Intent, config: &InterpreterConfig) -> Self {
        let command = Command::from_intent(intent);
        let master_message = command.as_ref().and_then(Command::master_message);
        let media = command
            .as_ref()
            .map(|c| c.media_candidates(&config.media))
            .unwrap_or_default();
        Self {
            intent,
            command,
            master_message,
            media,
        }
    }
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => interp::load_config(path)?,
        None => InterpreterConfig::default(),
    };
    interp::init()?;
    let interpreter = interp::build_interpreter(&config)?;

    match cli.command {
        Commands::Parse { text, command } => parse_once(&interpreter, &config, &text.join(" "), command),
        Commands::Repl { no_wake } => repl(&interpreter, &config, no_wake),
        Commands::Catalogue => print_catalogue(&interpreter),
    }
}

fn setup_tracing() {
    // Best-effort; stdout is reserved for JSON output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_once(
    interpreter: &Interpreter,
    config: &InterpreterConfig,
    sentence: &str,
    with_command: bool,
) -> Result<()> {
    let intent = interpreter.interpret(sentence);
    if with_command {
        let report = Report::new(&intent, config);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", intent.to_json()?);
    }
    Ok(())
}

fn repl(interpreter: &Interpreter, config: &InterpreterConfig, no_wake: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut session = Session::new(config.session.clone());
    if !session.is_started() {
        info!("waiting for start signal");
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !session.is_started() {
            // stdin doubles as the master controller channel until started
            session.handle_master_message(&line);
            continue;
        }
        let sentence = if no_wake {
            line
        } else {
            match session.feed(&line) {
                SessionEvent::Command(text) => text,
                SessionEvent::Ended => break,
                SessionEvent::Awake | SessionEvent::Dismissed | SessionEvent::Ignored => continue,
            }
        };

        let intent = interpreter.interpret(&sentence);
        if let Intent::Error { error } = &intent {
            error!(%sentence, %error, "sentence could not be interpreted");
        }
        let report = Report::new(&intent, config);
        if let Some(command) = &report.command {
            info!(%command, "dispatching");
        }
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        out.flush()?;
    }
    Ok(())
}

fn print_catalogue(interpreter: &Interpreter) -> Result<()> {
    let actions = interpreter.actions();
    for (idx, name) in actions.canonical_names().iter().enumerate() {
        let rule = actions
            .rule_for(idx)
            .map(|r| r.name())
            .unwrap_or("?");
        println!("{name} [{rule}]: {}", actions.synonyms(idx).join(", "));
    }
    for skipped in actions.skipped() {
        println!("skipped line {}: {}", skipped.line_number, skipped.reason);
    }
    Ok(())
}
