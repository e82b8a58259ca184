use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use spend_core::{parse_occurred_at, Currency, ScriptedTranscript, Window};
use spend_ledger::settings::{load_categories, load_settings, set_main_currency};
use spend_ledger::{summarize, DebugEntry, DebugLog, Draft, ExpenseBook, KvStore, QuickAdd};
use spend_parse::parse_spend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod display;
mod logging;
mod state;

#[derive(Parser, Debug)]
#[command(name = "spends", version, about = "Smart Spends: say or type an expense, confirm, done")]
struct Cli {
    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a phrase and print the draft (nothing is saved)
    Parse {
        text: Vec<String>,

        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a phrase, review it and save it as an expense
    Add {
        text: Vec<String>,

        #[arg(long)]
        amount: Option<f64>,

        /// THB or EUR
        #[arg(long)]
        currency: Option<Currency>,

        #[arg(long)]
        merchant: Option<String>,

        #[arg(long)]
        note: Option<String>,

        /// Category key (food, fun, bills)
        #[arg(long)]
        category: Option<String>,

        /// When it happened: YYYY-MM-DD or RFC3339 (default: now)
        #[arg(long)]
        date: Option<String>,

        /// Save without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Saved expenses, newest first
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Totals for the last 7 or 30 days in the main currency
    Summary {
        #[arg(long, default_value = "7d")]
        window: Window,
    },

    /// Main currency and categories
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Parser feedback log for offline review
    Debug {
        #[command(subcommand)]
        command: DebugCommand,
    },

    /// Read one utterance per stdin line, as a transcript source, and print drafts
    Listen,

    /// Delete every stored expense, setting and debug entry
    Reset {
        /// Delete without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    SetCurrency { currency: Currency },
}

#[derive(Subcommand, Debug)]
enum DebugCommand {
    /// Record what the parser made of a phrase and what was meant
    Log {
        text: Vec<String>,

        /// What you meant to say
        #[arg(long)]
        meant: String,
    },
    List,
    /// Write all entries to a JSON file
    Export { path: PathBuf },
    Clear,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let home = state::ensure_spends_home()?;
    let cfg = config::load_config(&home)?;
    logging::init(logging::resolve_level(cli.verbose, &cfg.log.level));

    let data_dir = state::data_dir(&home, cfg.storage.data_dir.as_deref());
    debug!(home = %home.display(), data = %data_dir.display(), "starting");

    match cli.command {
        Command::Parse { text, json } => {
            let parsed = parse_spend(&text.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("{}", display::parsed_lines(&parsed));
            }
        }

        Command::Add {
            text,
            amount,
            currency,
            merchant,
            note,
            category,
            date,
            yes,
        } => {
            let store = KvStore::open(&data_dir)?;
            let mut draft = Draft::from_parsed(&parse_spend(&text.join(" ")));

            if amount.is_some() {
                draft.amount = amount;
            }
            if currency.is_some() {
                draft.currency = currency;
            }
            if let Some(m) = merchant {
                draft.merchant = m;
            }
            if let Some(n) = note {
                draft.note = n;
            }
            if let Some(c) = category {
                draft.category_key = Some(c);
            }
            if let Some(d) = date {
                draft.occurred_at = Some(parse_occurred_at(&d)?);
            }

            println!("{}", display::draft_line(&draft));

            let categories = load_categories(&store);
            let input = draft.confirm(&categories).context("draft needs editing")?;

            if !yes && !confirm("Save this expense?")? {
                println!("Discarded.");
                return Ok(());
            }

            let settings = load_settings(&store);
            let mut book = ExpenseBook::open(store);
            let expense = book.add(input, settings.main_currency, Utc::now())?;
            println!("Saved {}", display::expense_line(&expense, &categories));
        }

        Command::History { limit } => {
            let store = KvStore::open(&data_dir)?;
            let categories = load_categories(&store);
            let book = ExpenseBook::open(store);
            if book.is_empty() {
                println!("No spends yet. Add your first expense to see it here.");
            }
            for e in book.all().iter().take(limit) {
                println!("{}", display::expense_line(e, &categories));
            }
        }

        Command::Summary { window } => {
            let store = KvStore::open(&data_dir)?;
            let settings = load_settings(&store);
            let categories = load_categories(&store);
            let book = ExpenseBook::open(store);
            let s = summarize(book.all(), &categories, settings.main_currency, window, Utc::now());
            print!("{}", display::summary_lines(&s));
        }

        Command::Settings { command } => {
            let store = KvStore::open(&data_dir)?;
            match command {
                SettingsCommand::Show => {
                    let settings = load_settings(&store);
                    println!("main currency: {}", settings.main_currency);
                    for c in load_categories(&store) {
                        println!("category: {} ({}) {}", c.label, c.key, c.id);
                    }
                }
                SettingsCommand::SetCurrency { currency } => {
                    set_main_currency(&store, currency)?;
                    println!("Main currency set to {currency}");
                }
            }
        }

        Command::Debug { command } => {
            let log = DebugLog::new(KvStore::open(&data_dir)?);
            match command {
                DebugCommand::Log { text, meant } => {
                    let phrase = text.join(" ");
                    let parsed = parse_spend(&phrase);
                    let entry = DebugEntry::from_parse(&meant, &phrase, Some(&parsed), Utc::now());
                    let count = log.record(entry)?;
                    println!("Recorded debug entry #{count}");
                }
                DebugCommand::List => {
                    for e in log.entries() {
                        println!(
                            "{} | heard: {} | meant: {} | confidence: {}",
                            e.timestamp.to_rfc3339(),
                            e.recognized_phrase,
                            e.user_prompt,
                            e.confidence.map(|c| format!("{:.0}%", c * 100.0)).unwrap_or_else(|| "-".to_string())
                        );
                    }
                }
                DebugCommand::Export { path } => {
                    let n = log.export(&path)?;
                    println!("Wrote {n} entries to {}", path.display());
                }
                DebugCommand::Clear => {
                    log.clear()?;
                    println!("Debug log cleared.");
                }
            }
        }

        Command::Listen => listen(io::stdin().lock(), &mut io::stdout())?,

        Command::Reset { yes } => {
            let store = KvStore::open(&data_dir)?;
            if !yes && !confirm(&format!("Delete all data in {}?", store.dir().display()))? {
                println!("Kept.");
                return Ok(());
            }
            store.clear();
            println!("Cleared {}", store.dir().display());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                if config::init_config(&home)? {
                    println!("Wrote {}", config::config_path(&home).display());
                } else {
                    println!("Config already exists: {}", config::config_path(&home).display());
                }
            }
            ConfigCommand::Show => {
                println!("# {}", config::config_path(&home).display());
                print!("{}", toml::to_string_pretty(&cfg)?);
                println!("# data dir: {}", data_dir.display());
            }
        },
    }

    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes is no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).context("read answer")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn listen(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut qa = QuickAdd::new(ScriptedTranscript::new());

    for line in input.lines() {
        let line = line.context("read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        qa.source_mut().push_utterance(line);
        qa.start_listening()?;
        qa.stop_listening();
        qa.drain();

        if let Some(err) = qa.error() {
            bail!("capture failed: {err}");
        }
        match qa.current_draft() {
            Some(d) if d.is_valid() => writeln!(out, "{}", display::draft_line(&d))?,
            Some(d) => writeln!(out, "{} (needs editing)", display::draft_line(&d))?,
            None => writeln!(out, "(nothing recognised in \"{}\")", qa.text())?,
        }
    }

    Ok(())
}
