use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use examark::{AppError, AskOptions, MarkTier, SavedAnswer, StoredDocument};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "examark")]
#[command(version)]
#[command(
    about = "Generate mark-weighted exam answers from your own syllabus material",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with the mock authentication flow
    Login {
        /// Email address (prompted interactively when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Generate an exam-style answer for a question
    #[clap(visible_alias = "a")]
    Ask {
        /// The question to answer
        question: String,
        /// Mark weight of the question: 2, 5, or 8
        #[arg(short, long, default_value = "2")]
        marks: MarkTier,
        /// Use a stored document (by id or name) as context
        #[arg(long, conflicts_with = "context_file")]
        doc: Option<String>,
        /// Read context text from a file
        #[arg(long)]
        context_file: Option<PathBuf>,
        /// Save the generated answer
        #[arg(short, long)]
        save: bool,
        /// Show the composed prompt without calling the API
        #[arg(long)]
        prompt_preview: bool,
        /// Use the offline mock client instead of the API
        #[arg(long)]
        mock: bool,
    },
    /// Upload syllabus material as a stored document
    #[clap(visible_alias = "u")]
    Upload {
        /// File to read (plain text is extracted verbatim)
        file: PathBuf,
    },
    /// Manage stored documents
    #[clap(visible_alias = "d")]
    Docs {
        #[command(subcommand)]
        command: DocsCommands,
    },
    /// Manage saved answers
    Answers {
        #[command(subcommand)]
        command: AnswersCommands,
    },
}

#[derive(Subcommand)]
enum DocsCommands {
    /// List stored documents
    List,
    /// Print a stored document's extracted text
    Show {
        /// Document id or name
        reference: String,
    },
    /// Delete a stored document
    Delete {
        /// Document id
        id: String,
    },
}

#[derive(Subcommand)]
enum AnswersCommands {
    /// List saved answers, most recent first
    List {
        /// Show at most this many answers
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Remove all saved answers
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Login { email, password } => {
            let email = match email {
                Some(value) => value,
                None => prompt_input("Email")?,
            };
            let password = match password {
                Some(value) => value,
                None => prompt_password("Password")?,
            };
            let user = examark::login(&email, &password)?;
            println!("✅ Logged in as {} <{}>", user.name, user.email);
            Ok(())
        }
        Commands::Logout => {
            examark::logout()?;
            println!("✅ Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let user = examark::whoami()?;
            println!("{} <{}>", user.name, user.email);
            println!("Subscription valid until {}", user.valid_until);
            Ok(())
        }
        Commands::Ask { question, marks, doc, context_file, save, prompt_preview, mock } => {
            let outcome = examark::ask(AskOptions {
                question,
                marks,
                doc,
                context_file,
                save,
                prompt_preview,
                mock,
            })?;

            if outcome.preview {
                println!("=== Prompt Preview ===");
                println!("{}", outcome.display);
                return Ok(());
            }

            println!("{}", outcome.display);
            if let Some(saved) = &outcome.saved {
                println!();
                println!("✅ Saved answer {}", saved.id);
            } else if save && !outcome.generated {
                println!();
                println!("(not saved: generation failed)");
            }
            Ok(())
        }
        Commands::Upload { file } => {
            let document = examark::upload(&file)?;
            println!("Extraction preview:");
            println!("{}", preview(&document.content));
            println!();
            println!("✅ Saved document {} ({}, {})", document.id, document.name, document.size);
            Ok(())
        }
        Commands::Docs { command } => match command {
            DocsCommands::List => {
                let documents = examark::documents_list()?;
                if documents.is_empty() {
                    println!("No stored documents yet. Upload one with 'examark upload'.");
                } else {
                    for doc in documents {
                        print_document_line(&doc);
                    }
                }
                Ok(())
            }
            DocsCommands::Show { reference } => {
                let document = examark::document_show(&reference)?;
                print_document_line(&document);
                println!();
                println!("{}", document.content);
                Ok(())
            }
            DocsCommands::Delete { id } => {
                examark::document_delete(&id)?;
                println!("✅ Deleted document {}", id);
                Ok(())
            }
        },
        Commands::Answers { command } => match command {
            AnswersCommands::List { limit } => {
                let answers = examark::answers_list(limit)?;
                if answers.is_empty() {
                    println!("No saved answers yet. Start by asking a question!");
                } else {
                    for answer in answers {
                        print_answer_entry(&answer);
                    }
                }
                Ok(())
            }
            AnswersCommands::Clear => {
                examark::answers_clear()?;
                println!("✅ Cleared saved answers");
                Ok(())
            }
        },
    }
}

fn print_document_line(doc: &StoredDocument) {
    println!("{}  {}  ({}, uploaded {})", doc.id, doc.name, doc.size, doc.upload_date);
}

fn print_answer_entry(answer: &SavedAnswer) {
    println!("[{} marks] {}  ({})", answer.marks, answer.question, answer.date);
    println!("  context: {}", answer.context_source.as_deref().unwrap_or("General Knowledge"));
    println!("  {}", preview(&answer.answer));
}

/// First line of markdown text with emphasis characters stripped.
fn preview(text: &str) -> String {
    let flat: String = text.replace(['#', '*'], "");
    let line = flat.lines().find(|line| !line.trim().is_empty()).unwrap_or("").trim();
    let mut shortened: String = line.chars().take(80).collect();
    if line.chars().count() > 80 {
        shortened.push('…');
    }
    shortened
}

fn prompt_input(label: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|dialoguer::Error::IO(err)| AppError::Io(err))
}

fn prompt_password(label: &str) -> Result<String, AppError> {
    Password::new()
        .with_prompt(label)
        .interact()
        .map_err(|dialoguer::Error::IO(err)| AppError::Io(err))
}
