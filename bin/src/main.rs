use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead, Write};
use wordle_game::*;

/// Simple program to play a Wordle game in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long, default_value = "data/words.txt")]
    words_file: String,

    /// The number of guesses allowed per game.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_attempts: usize,

    /// Seed for choosing the objective word, to make games reproducible.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactive games, guessing a word chosen from the words file.
    Play {
        /// Play against this word instead of a random one.
        #[arg(long)]
        word: Option<String>,
    },
    /// Score a single guess against the given word.
    Score { word: String, guess: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = GameConfig {
        max_attempts: args.max_attempts,
        ..GameConfig::default()
    };

    match args.command {
        Command::Score { word, guess } => {
            let attempt = evaluate(&word, &guess);
            println!("{}", format_attempt(&attempt));
            if is_complete(&word, &guess) {
                println!("That's the word!");
            }
        }
        Command::Play { word } => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let word_bank = match word {
                Some(word) => WordBank::from_iterator([word])?,
                None => load_word_bank(&args.words_file)?,
            };
            play_interactive_games(config, &word_bank, &mut rng)?;
        }
    }

    Ok(())
}

fn load_word_bank(path: &str) -> anyhow::Result<WordBank> {
    let words_reader = io::BufReader::new(
        File::open(path).with_context(|| format!("Failed to open words file {}", path))?,
    );
    let word_bank = WordBank::from_reader(words_reader)
        .with_context(|| format!("Failed to read words from {}", path))?;
    log::info!("There are {} possible words.", word_bank.len());
    Ok(word_bank)
}

fn play_interactive_games(
    config: GameConfig,
    word_bank: &WordBank,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut game = GameState::from_bank(config, word_bank, rng)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Guess the {}-letter word. You have {} tries.\n\n\
         After each guess, every letter is marked as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n",
        game.word_length(),
        game.max_attempts()
    );

    loop {
        print!("Guess {}/{}: ", game.attempt_count() + 1, game.max_attempts());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let guess = line?;
        let guess = guess.trim();

        if let Err(error) = game.check_guess(guess) {
            println!("{}. Try again.", error);
            continue;
        }

        match game.record_attempt(guess) {
            GameStatus::InProgress => {
                print_board(&game);
                continue;
            }
            GameStatus::Won => {
                print_board(&game);
                println!("You got it in {} guesses!", game.attempt_count());
            }
            GameStatus::Lost => {
                print_board(&game);
                println!("Out of guesses. The word was \"{}\".", game.secret_word());
            }
        }

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        let answer = match lines.next() {
            Some(answer) => answer?,
            None => return Ok(()),
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        game.reset_from(word_bank, rng)?;
    }
}

fn print_board(game: &GameState) {
    for row in game.rows() {
        match row {
            Some(attempt) => println!("\t{}", format_attempt(attempt)),
            None => println!("\t{}", "_".repeat(game.word_length())),
        }
    }
}

fn format_attempt(attempt: &Attempt) -> String {
    let marks: String = attempt
        .iter()
        .map(|lr| match (lr.in_correct_position, lr.in_word) {
            (true, _) => 'g',
            (false, true) => 'y',
            (false, false) => '.',
        })
        .collect();
    format!("{} {}", attempt.guess().to_uppercase(), marks)
}
