use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aido_cli::commands::{
    ask_ops, clipboard_ops, config_ops, default_data_dir, preprompt_ops, prompt_ops, shortcut_ops,
};
use aido_cli::provider::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "aidotool", about = "AI keyboard data and prompt tool")]
struct Cli {
    /// Data directory (default: ~/.local/share/aido)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a line of input is parsed and classified
    Parse {
        /// Text as typed in the field
        input: String,
        /// Enable every optional special command
        #[arg(long)]
        all_commands: bool,
    },
    /// Complete a word prefix
    Suggest {
        prefix: String,
        #[arg(short, long, default_value = "6")]
        n: usize,
        /// Alphabetical order instead of tiered
        #[arg(long)]
        plain: bool,
    },
    /// Manage the preprompt library
    Preprompts {
        #[command(subcommand)]
        action: PrepromptAction,
    },
    /// Manage clipboard history
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },
    /// Manage text shortcuts
    Shortcuts {
        #[command(subcommand)]
        action: ShortcutAction,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
    /// Resolve a trigger and send the prompt to a chat completion API
    Ask {
        input: String,
        /// API key (default: $AIDO_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        /// Print the prompt without sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum PrepromptAction {
    /// List all preprompts
    List {
        /// Show instructions and examples
        #[arg(short, long)]
        verbose: bool,
    },
    /// Add a preprompt
    Add {
        trigger: String,
        instruction: String,
        #[arg(long, default_value = "")]
        example: String,
    },
    /// Edit an existing preprompt
    Update {
        trigger: String,
        #[arg(long)]
        new_trigger: Option<String>,
        #[arg(long)]
        instruction: Option<String>,
        #[arg(long)]
        example: Option<String>,
    },
    /// Delete a preprompt
    Delete { trigger: String },
    /// Move a preprompt from one position to another
    Move { from: usize, to: usize },
    /// Replace the library with a JSON export
    Import { file: String },
    /// Write the library as JSON (stdout if no file)
    Export { file: Option<String> },
    /// Restore the built-in preprompts
    Reset,
    /// Show the trigger menu order
    Menu {
        /// Custom order to save (triggers, in order)
        order: Vec<String>,
        /// Include special command triggers
        #[arg(long)]
        specials: bool,
    },
}

#[derive(Subcommand)]
enum ClipboardAction {
    /// List saved clips
    List,
    /// Add a clip
    Add { text: String },
    /// Delete a clip by index
    Delete { index: usize },
    /// Remove all clips
    Clear,
}

#[derive(Subcommand)]
enum ShortcutAction {
    /// List shortcuts
    List,
    /// Add a shortcut
    Add { trigger: String, replacement: String },
    /// Remove a shortcut by id
    Remove { id: u64 },
    /// Show the expansion of a text
    Expand { text: String },
}

fn main() {
    let cli = Cli::parse();
    let dir = cli.dir.unwrap_or_else(|| PathBuf::from(default_data_dir()));

    match cli.command {
        Command::Parse {
            input,
            all_commands,
        } => prompt_ops::parse(&dir, &input, all_commands),
        Command::Suggest { prefix, n, plain } => prompt_ops::suggest(&prefix, n, plain),
        Command::Preprompts { action } => match action {
            PrepromptAction::List { verbose } => preprompt_ops::list(&dir, verbose),
            PrepromptAction::Add {
                trigger,
                instruction,
                example,
            } => preprompt_ops::add(&dir, &trigger, &instruction, &example),
            PrepromptAction::Update {
                trigger,
                new_trigger,
                instruction,
                example,
            } => preprompt_ops::update(
                &dir,
                &trigger,
                new_trigger.as_deref(),
                instruction.as_deref(),
                example.as_deref(),
            ),
            PrepromptAction::Delete { trigger } => preprompt_ops::delete(&dir, &trigger),
            PrepromptAction::Move { from, to } => preprompt_ops::reorder(&dir, from, to),
            PrepromptAction::Import { file } => preprompt_ops::import(&dir, &file),
            PrepromptAction::Export { file } => preprompt_ops::export(&dir, file.as_deref()),
            PrepromptAction::Reset => preprompt_ops::reset(&dir),
            PrepromptAction::Menu { order, specials } => {
                preprompt_ops::menu(&dir, &order, specials)
            }
        },
        Command::Clipboard { action } => match action {
            ClipboardAction::List => clipboard_ops::list(&dir),
            ClipboardAction::Add { text } => clipboard_ops::add(&dir, &text),
            ClipboardAction::Delete { index } => clipboard_ops::delete(&dir, index),
            ClipboardAction::Clear => clipboard_ops::clear(&dir),
        },
        Command::Shortcuts { action } => match action {
            ShortcutAction::List => shortcut_ops::list(&dir),
            ShortcutAction::Add {
                trigger,
                replacement,
            } => shortcut_ops::add(&dir, &trigger, &replacement),
            ShortcutAction::Remove { id } => shortcut_ops::remove(&dir, id),
            ShortcutAction::Expand { text } => shortcut_ops::expand(&dir, &text),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Ask {
            input,
            api_key,
            base_url,
            model,
            dry_run,
        } => {
            let api_key = api_key
                .or_else(|| std::env::var("AIDO_API_KEY").ok())
                .unwrap_or_default();
            let opts = ask_ops::AskOptions {
                base_url: &base_url,
                model: &model,
                api_key: &api_key,
                dry_run,
            };
            ask_ops::ask(&dir, &input, &opts);
        }
    }
}
