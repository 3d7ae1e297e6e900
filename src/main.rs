use std::path::PathBuf;

use clap::Parser;
use deepfake_quiz::{load_bank_from_json, Quiz, QuizError, DEFAULT_QUESTION_COUNT};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// Number of questions to draw per attempt
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUESTION_COUNT)]
    count: usize,

    /// Seed the RNG for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let bank = load_bank_from_json(&args.questions)?;
    let quiz = Quiz::new(bank, args.count, args.seed)?;
    quiz.run()
}
