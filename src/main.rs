use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scripture_quiz::{Question, QuestionRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long, env = "SCRIPTURE_QUIZ_QUESTIONS", global = true)]
    questions: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List questions in source order
    List {
        /// Only questions in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show each category with its question count
    Categories,
    /// Draw a random round of questions
    Sample {
        /// Number of questions to draw
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Seed for a reproducible draw
        #[arg(short, long, env = "SCRIPTURE_QUIZ_SEED")]
        seed: Option<u64>,
        /// Only draw from this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Check the question set and report its size
    Validate,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let owned;
    let repository: &QuestionRepository = match &args.questions {
        Some(path) => {
            owned = QuestionRepository::from_json_path(path)
                .with_context(|| format!("loading {}", path.display()))?;
            &owned
        }
        None => QuestionRepository::load_all().context("loading built-in questions")?,
    };

    match args.command {
        Command::List { category } => {
            let questions = match category.as_deref() {
                Some(category) => repository.by_category(category),
                None => repository.questions().iter().collect(),
            };
            print_questions(&questions, args.json)?;
        }
        Command::Categories => {
            let counts = repository.count_by_category();
            if args.json {
                let map: serde_json::Map<String, serde_json::Value> = counts
                    .iter()
                    .map(|(category, n)| (category.to_string(), (*n).into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (category, n) in counts {
                    println!("{:<10} {}", category, n);
                }
            }
        }
        Command::Sample {
            count,
            seed,
            category,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, count, "drawing sample");
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = match category.as_deref() {
                Some(category) => repository.random_sample_in(category, count, &mut rng)?,
                None => repository.random_sample(count, &mut rng)?,
            };
            print_questions(&questions, args.json)?;
        }
        Command::Validate => {
            println!("{} questions OK", repository.len());
        }
    }

    Ok(())
}

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

fn print_questions(questions: &[&Question], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }

    for (number, question) in questions.iter().enumerate() {
        println!("{:2}. [{}] {}", number + 1, question.category(), question.text());
        for (index, option) in question.options().iter().enumerate() {
            let marker = if question.is_correct(index) { "*" } else { " " };
            println!("    {} {}. {}", marker, OPTION_LABELS[index], option);
        }
        if !question.reference().is_empty() {
            println!("      ({})", question.reference());
        }
        println!();
    }

    Ok(())
}
