//! bookclub CLI
//!
//! Thin local dispatcher for the club engine: parses arguments (including
//! the DD/MM/YYYY HH:MM meeting date format), resolves the acting member
//! from flags, executes one command and renders the reply as plain text.
//! Admin gating is left to whoever wires this into a chat surface.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bookclub::ops::Confirmation;
use bookclub::{Actor, ClubEngine, ClubError, Command, Config, Reply};

/// bookclub CLI
#[derive(Parser, Debug)]
#[command(name = "bookclub-cli")]
#[command(about = "Reading-club state store: suggestions, votes, meetings, discussion")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./club_data")]
    data_dir: String,

    /// Acting member's stable id
    #[arg(short = 'u', long)]
    member_id: String,

    /// Acting member's display name
    #[arg(short, long)]
    name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register with the club
    Start,

    /// Suggest a book ("Title - Author")
    Suggest { text: Vec<String> },

    /// Vote for a suggestion by its position in the suggestion list (0-based)
    Vote { index: usize },

    /// Show the current vote ranking
    Tally,

    /// Show the leading suggestion
    Winner,

    /// Make the voting winner the current book (admin)
    SelectBook,

    /// Finish the current book (admin)
    FinishBook,

    /// Show the current book
    CurrentBook,

    /// Show the reading history
    History,

    /// Schedule the club meeting (admin)
    ScheduleMeeting {
        /// Date as DD/MM/YYYY
        date: String,

        /// Time as HH:MM
        time: String,
    },

    /// Confirm attendance for the scheduled meeting
    Confirm,

    /// Show the scheduled meeting
    NextMeeting,

    /// Add a discussion question
    Question { text: Vec<String> },

    /// Show unresolved questions
    Questions,

    /// Mark a question as resolved by its position (0-based)
    Resolve { index: usize },

    /// Share a quote from the book
    Quote { text: Vec<String> },

    /// Show the latest quotes
    Quotes {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show your statistics
    Stats,

    /// Show the club ranking
    Ranking {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookclub=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();
    let engine = match ClubEngine::open(config) {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to open club data: {}", err);
            std::process::exit(1);
        }
    };

    let actor = Actor::new(&args.member_id, &args.name);
    let command = match to_command(args.command) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    };

    match engine.execute(&actor, command) {
        Ok(reply) => println!("{}", render(&reply)),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Translate CLI subcommands into engine commands
///
/// Free-text arguments arrive as word lists and are joined here; the
/// meeting date is parsed from the club's DD/MM/YYYY HH:MM convention.
fn to_command(command: Commands) -> Result<Command, ClubError> {
    let command = match command {
        Commands::Start => Command::Start,
        Commands::Suggest { text } => Command::Propose {
            text: text.join(" "),
        },
        Commands::Vote { index } => Command::CastVote { index },
        Commands::Tally => Command::Tally,
        Commands::Winner => Command::Winner,
        Commands::SelectBook => Command::SelectCurrent,
        Commands::FinishBook => Command::FinishBook,
        Commands::CurrentBook => Command::CurrentBook,
        Commands::History => Command::History,
        Commands::ScheduleMeeting { date, time } => {
            let when = NaiveDateTime::parse_from_str(
                &format!("{} {}", date, time),
                "%d/%m/%Y %H:%M",
            )
            .map_err(|_| {
                ClubError::Validation("meeting date must be DD/MM/YYYY HH:MM".to_string())
            })?;
            Command::ScheduleMeeting {
                when: when.and_utc(),
            }
        }
        Commands::Confirm => Command::Confirm,
        Commands::NextMeeting => Command::NextMeeting,
        Commands::Question { text } => Command::AddQuestion {
            text: text.join(" "),
        },
        Commands::Questions => Command::PendingQuestions,
        Commands::Resolve { index } => Command::ResolveQuestion { index },
        Commands::Quote { text } => Command::AddQuote {
            text: text.join(" "),
        },
        Commands::Quotes { limit } => Command::RecentQuotes { limit },
        Commands::Stats => Command::Stats,
        Commands::Ranking { limit } => Command::Ranking { limit },
    };
    Ok(command)
}

/// Render a reply as plain text
fn render(reply: &Reply) -> String {
    match reply {
        Reply::Registered(member) => {
            format!("Welcome to the reading club, {}!", member.name)
        }
        Reply::Suggested { suggestion, total } => format!(
            "Suggestion saved: {} (by {})\nTotal suggestions: {}",
            suggestion.title_author, suggestion.suggested_by, total
        ),
        Reply::VoteCast(suggestion) => format!(
            "Vote registered for {} — now at {} votes",
            suggestion.title_author, suggestion.votes
        ),
        Reply::Tally(ranked) => {
            if ranked.is_empty() {
                return "No suggestions yet.".to_string();
            }
            let mut out = String::from("Vote standings:\n");
            for (position, suggestion) in ranked.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} — {} {} votes (by {})\n",
                    position + 1,
                    suggestion.title_author,
                    vote_bar(suggestion.votes),
                    suggestion.votes,
                    suggestion.suggested_by
                ));
            }
            out
        }
        Reply::Winner(suggestion) => format!(
            "Leading suggestion: {} with {} votes (by {})",
            suggestion.title_author, suggestion.votes, suggestion.suggested_by
        ),
        Reply::BookSelected(book) => format!(
            "New club book: {} (suggested by {}). Happy reading!",
            book.title_author, book.suggested_by
        ),
        Reply::BookFinished { book, total_read } => format!(
            "Finished {}! Books read so far: {}",
            book.book.title_author, total_read
        ),
        Reply::CurrentBook(view) => format!(
            "Current book: {}\nSuggested by: {}\nStarted: {}\nDays reading: {}",
            view.book.title_author,
            view.book.suggested_by,
            view.book.started_at.format("%d/%m/%Y"),
            view.days_reading
        ),
        Reply::History(finished) => {
            if finished.is_empty() {
                return "No books finished yet.".to_string();
            }
            let mut out = String::from("Reading history (latest first):\n");
            for (position, entry) in finished.iter().rev().enumerate() {
                out.push_str(&format!(
                    "{}. {} — finished {} (by {})\n",
                    position + 1,
                    entry.book.title_author,
                    entry.finished_at.format("%B %Y"),
                    entry.book.suggested_by
                ));
            }
            out.push_str(&format!("Total: {} books", finished.len()));
            out
        }
        Reply::MeetingScheduled(meeting) => format!(
            "Meeting scheduled for {}. Use confirm to confirm attendance.",
            meeting.scheduled_for.format("%d/%m/%Y %H:%M")
        ),
        Reply::Confirmed(outcome) => match outcome {
            Confirmation::New { total } => {
                format!("Attendance confirmed! Total confirmed: {}", total)
            }
            Confirmation::AlreadyConfirmed { .. } => {
                "You had already confirmed your attendance.".to_string()
            }
        },
        Reply::NextMeeting(view) => {
            let mut out = format!(
                "Next meeting: {}\nDays until: {}\n",
                view.meeting.scheduled_for.format("%d/%m/%Y %H:%M"),
                view.days_until
            );
            if !view.meeting.confirmations.is_empty() {
                out.push_str(&format!(
                    "Confirmed ({}): {}",
                    view.meeting.confirmations.len(),
                    view.meeting.confirmations.join(", ")
                ));
            }
            out
        }
        Reply::QuestionAdded(question) => {
            format!("Question added: {} (by {})", question.text, question.author)
        }
        Reply::QuestionResolved(question) => {
            format!("Question resolved: {}", question.text)
        }
        Reply::PendingQuestions(questions) => {
            if questions.is_empty() {
                return "No pending questions.".to_string();
            }
            let mut out = String::from("Questions to discuss:\n");
            for (position, question) in questions.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} (by {})\n",
                    position + 1,
                    question.text,
                    question.author
                ));
            }
            out
        }
        Reply::QuoteAdded(quote) => {
            format!("\"{}\"\n— shared by {}", quote.text, quote.shared_by)
        }
        Reply::RecentQuotes { quotes, total } => {
            if quotes.is_empty() {
                return "No quotes shared yet.".to_string();
            }
            let mut out = String::from("Shared quotes:\n");
            for quote in quotes {
                out.push_str(&format!("\"{}\" — {}\n", quote.text, quote.shared_by));
            }
            out.push_str(&format!("Total quotes: {}", total));
            out
        }
        Reply::Stats(stats) => format!(
            "{}\nMember since: {}\nDays in the club: {}\nBooks read: {}\nParticipations: {}",
            stats.member.name,
            stats.member.joined_at.format("%d/%m/%Y"),
            stats.days_member,
            stats.member.books_read,
            stats.member.participations
        ),
        Reply::Ranking(members) => {
            if members.is_empty() {
                return "No members registered.".to_string();
            }
            let mut out = String::from("Club ranking:\n");
            for (position, member) in members.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} — {} books\n",
                    position + 1,
                    member.name,
                    member.books_read
                ));
            }
            out
        }
    }
}

/// Ten-slot vote bar, filled one slot per vote
fn vote_bar(votes: u64) -> String {
    let filled = votes.min(10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
