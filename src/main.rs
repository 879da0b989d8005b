use anyhow::Result;
use clap::{Parser, Subcommand};
use mentor::course::{BuiltinCatalog, CourseProvider};
use mentor::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mentor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled courses and decks
    Courses,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Courses) => {
            let catalog = BuiltinCatalog;

            let quiz = catalog.quiz_course();
            println!("Quiz: {} ({} questions)", quiz.title, quiz.leaf_count());
            for chapter in &quiz.chapters {
                println!("  {} ({} questions)", chapter.title, chapter.leaf_count());
            }

            let deck = catalog.flashcard_deck();
            println!("Deck: {} ({} cards)", deck.title, deck.leaf_count());
            for chapter in &deck.chapters {
                println!("  {} ({} cards)", chapter.title, chapter.leaf_count());
            }
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            tracing::info!("starting mentor");
            let mut app = App::new(config)?;
            app.run()?;
        }
    }

    Ok(())
}
