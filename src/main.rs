use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lore::ideation::{self, Audience, ContentType, OutlineLength, OutlineRequest, Tone};
use lore::outreach::{ContactMessage, GoogleFormSinkBuilder, MessageSink};
use lore::summarizer::{self, SummaryLength, SummaryStyle};
use lore::{KeywordAnswerEngine, KnowledgeBase, utils};

/// lore - knowledge-base Q&A and writing-assistant CLI
#[derive(Parser)]
#[command(name = "lore")]
#[command(about = "Deterministic knowledge-base Q&A and content drafting tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Ask a question against the knowledge base
    Ask(AskCommand),
    /// Summarize note text into key points or action items
    Summarize(SummarizeCommand),
    /// Draft a content plan for a topic
    Outline(OutlineCommand),
    /// Deliver a contact-form message
    Contact(ContactCommand),
    /// Subscribe an email address to the newsletter
    Subscribe(SubscribeCommand),
    /// Print the presentation preview link
    Presentation(PresentationCommand),
}

/// Ask a question
#[derive(Parser)]
struct AskCommand {
    /// The question to answer
    #[arg(value_name = "QUESTION")]
    question: String,

    /// Knowledge file to load instead of the default
    #[arg(short, long, value_name = "FILE")]
    knowledge: Option<PathBuf>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

/// Summarize notes
#[derive(Parser)]
struct SummarizeCommand {
    /// The note text to summarize
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the note text from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Summary shape
    #[arg(long, value_enum, default_value = "bullet")]
    style: SummaryStyle,

    /// Summary length
    #[arg(long, value_enum, default_value = "medium")]
    length: SummaryLength,
}

/// Draft a content plan
#[derive(Parser)]
struct OutlineCommand {
    /// The content topic
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Kind of content to plan
    #[arg(long, value_enum, default_value = "blog")]
    content_type: ContentType,

    /// Target audience
    #[arg(long, value_enum, default_value = "mixed")]
    audience: Audience,

    /// Target length
    #[arg(long, value_enum, default_value = "medium")]
    length: OutlineLength,

    /// Voice of the piece
    #[arg(long, value_enum, default_value = "professional")]
    tone: Tone,

    /// Extra requirements to weave into the suggestions
    #[arg(long)]
    notes: Option<String>,
}

/// Send a contact message
#[derive(Parser)]
struct ContactCommand {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Sender email address
    #[arg(long)]
    email: String,

    /// Message body
    #[arg(long)]
    message: String,

    /// Optional phone number
    #[arg(long)]
    phone: Option<String>,

    /// Optional LinkedIn URL
    #[arg(long)]
    linkedin: Option<String>,
}

/// Subscribe to the newsletter
#[derive(Parser)]
struct SubscribeCommand {
    /// Email address to subscribe
    #[arg(value_name = "EMAIL")]
    email: String,
}

/// Print the presentation preview link
#[derive(Parser)]
struct PresentationCommand {
    /// Presentation URL; falls back to the PRESENTATION_URL variable
    #[arg(value_name = "URL")]
    url: Option<String>,
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Ask(cmd) => handle_ask(cmd),
        Commands::Summarize(cmd) => handle_summarize(cmd),
        Commands::Outline(cmd) => handle_outline(cmd),
        Commands::Contact(cmd) => handle_contact(cmd),
        Commands::Subscribe(cmd) => handle_subscribe(cmd),
        Commands::Presentation(cmd) => handle_presentation(cmd),
    };

    if let Err(e) = result {
        // Determine exit code based on error type
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e}");
        std::process::exit(exit_code);
    }
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors include validation failures like empty input or missing
/// delivery configuration. Internal errors include I/O and network failures.
fn is_user_error(error: &anyhow::Error) -> bool {
    let error_msg = error.to_string();
    error_msg.contains("cannot be empty")
        || error_msg.contains("Missing required field")
        || error_msg.contains("not configured")
}

/// Handles the ask command: load the knowledge base and run the engine.
fn handle_ask(cmd: &AskCommand) -> Result<()> {
    let knowledge = load_knowledge(cmd.knowledge.as_deref())?;
    let engine = KeywordAnswerEngine::new(&knowledge);
    let result = engine.answer(&cmd.question);

    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
        return Ok(());
    }

    println!("{}", result.answer());
    if !result.citations().is_empty() {
        println!();
        println!("Sources:");
        for (index, citation) in result.citations().iter().enumerate() {
            println!("[{}] {}", index + 1, citation.source());
            println!("    {}", citation.excerpt());
        }
    }

    Ok(())
}

/// Loads the knowledge base: an explicit file, then the default file if one
/// exists, then the built-in document set.
fn load_knowledge(explicit: Option<&Path>) -> Result<KnowledgeBase> {
    if let Some(path) = explicit {
        return KnowledgeBase::from_file(path).context("Failed to load knowledge file");
    }

    let default_path = utils::knowledge_path()?;
    if default_path.exists() {
        return KnowledgeBase::from_file(&default_path).context("Failed to load knowledge file");
    }

    Ok(KnowledgeBase::builtin())
}

/// Handles the summarize command.
fn handle_summarize(cmd: &SummarizeCommand) -> Result<()> {
    let text = resolve_text(cmd.text.as_deref(), cmd.file.as_deref())?;
    println!("{}", summarizer::summarize(&text, cmd.style, cmd.length));
    Ok(())
}

/// Resolves the note text from the argument or a file, rejecting blank input.
fn resolve_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    let text = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read note file: {}", path.display()))?,
        (None, None) => anyhow::bail!("Note text cannot be empty; pass TEXT or --file"),
    };

    if text.trim().is_empty() {
        anyhow::bail!("Note text cannot be empty");
    }
    Ok(text)
}

/// Handles the outline command.
fn handle_outline(cmd: &OutlineCommand) -> Result<()> {
    if cmd.topic.trim().is_empty() {
        anyhow::bail!("Topic cannot be empty");
    }

    let plan = ideation::plan(&OutlineRequest {
        topic: cmd.topic.clone(),
        content_type: cmd.content_type,
        audience: cmd.audience,
        length: cmd.length,
        tone: cmd.tone,
        notes: cmd.notes.clone(),
    });

    println!("Title Suggestions:");
    for title in &plan.titles {
        println!("  - {title}");
    }

    println!();
    println!("Content Outline:");
    println!("  1. {}", plan.outline.introduction);
    for (index, section) in plan.outline.main_sections.iter().enumerate() {
        println!("  {}. {section}", index + 2);
    }
    println!(
        "  {}. {}",
        plan.outline.main_sections.len() + 2,
        plan.outline.conclusion
    );

    println!();
    println!("Key Points to Cover:");
    for point in &plan.key_points {
        println!("  - {point}");
    }

    if !plan.engagement.is_empty() {
        println!();
        println!("Engagement Strategies:");
        for strategy in &plan.engagement {
            println!("  - {strategy}");
        }
    }

    println!();
    println!("Additional Suggestions:");
    for suggestion in &plan.suggestions {
        println!("  - {suggestion}");
    }

    Ok(())
}

/// Handles the contact command by delivering through the configured sink.
fn handle_contact(cmd: &ContactCommand) -> Result<()> {
    let mut message = ContactMessage::new(&cmd.name, &cmd.email, &cmd.message);
    if let Some(phone) = &cmd.phone {
        message = message.with_phone(phone);
    }
    if let Some(linkedin) = &cmd.linkedin {
        message = message.with_linkedin(linkedin);
    }
    message.validate()?;

    let sink = GoogleFormSinkBuilder::new().build()?;
    sink.submit_contact(&message)
        .context("Failed to deliver contact message")?;

    println!("Message delivered.");
    Ok(())
}

/// Handles the subscribe command.
fn handle_subscribe(cmd: &SubscribeCommand) -> Result<()> {
    let sink = GoogleFormSinkBuilder::new().build()?;
    sink.subscribe(&cmd.email)
        .context("Failed to record subscription")?;

    println!("Subscribed {}.", cmd.email);
    Ok(())
}

/// Handles the presentation command.
fn handle_presentation(cmd: &PresentationCommand) -> Result<()> {
    let url = match &cmd.url {
        Some(url) => url.clone(),
        None => std::env::var("PRESENTATION_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Presentation is not configured; pass URL or set PRESENTATION_URL"))?,
    };

    println!("{}", utils::slides_preview_url(&url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_parses_ask_with_defaults() {
        let cli = Cli::try_parse_from(["lore", "ask", "what is machine learning"]).unwrap();
        match cli.command {
            Commands::Ask(cmd) => {
                assert_eq!(cmd.question, "what is machine learning");
                assert!(cmd.knowledge.is_none());
                assert!(!cmd.json);
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn cli_parses_outline_enums() {
        let cli = Cli::try_parse_from([
            "lore",
            "outline",
            "Neural Networks",
            "--content-type",
            "tutorial",
            "--audience",
            "beginner",
            "--tone",
            "casual",
        ])
        .unwrap();
        match cli.command {
            Commands::Outline(cmd) => {
                assert_eq!(cmd.content_type, ContentType::Tutorial);
                assert_eq!(cmd.audience, Audience::Beginner);
                assert_eq!(cmd.tone, Tone::Casual);
                assert_eq!(cmd.length, OutlineLength::Medium);
            }
            _ => panic!("expected outline command"),
        }
    }

    #[test]
    fn cli_rejects_summarize_with_both_text_and_file() {
        let result = Cli::try_parse_from(["lore", "summarize", "some text", "--file", "notes.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn resolve_text_rejects_blank_input() {
        let result = resolve_text(Some("   "), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));

        let result = resolve_text(None, None);
        assert!(result.is_err());
    }

    #[test]
    fn resolve_text_reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Notes from the planning meeting.").unwrap();

        let text = resolve_text(None, Some(file.path())).unwrap();
        assert_eq!(text, "Notes from the planning meeting.");
    }

    #[test]
    fn user_errors_are_classified_for_exit_codes() {
        assert!(is_user_error(&anyhow::anyhow!("Note text cannot be empty")));
        assert!(is_user_error(&anyhow::anyhow!(
            "Missing required field: name"
        )));
        assert!(!is_user_error(&anyhow::anyhow!("connection reset")));
    }
}
