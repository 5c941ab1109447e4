//! CLI higher-or-lower example.
//!
//! Set `RUST_LOG=hogerlager=trace` to watch every guess being resolved.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hogerlager::{Card, LAST_INDEX, Locale, Press, Response, Round, RoundOptions, Suit, View};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Higher or lower (type 'q' to quit)");
    println!("[u]p scores when the next card is lower, [d]own when it is higher.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default().with_locale(Locale::English);
    let mut round = Round::new(options, seed);

    loop {
        print_view(&round);

        let press = match prompt_line("> ").as_str() {
            "u" | "up" => Press::Up,
            "d" | "down" => Press::Down,
            "r" | "restart" => {
                round.restart();
                println!("New deck shuffled.");
                continue;
            }
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ if round.is_finished() => Press::Elsewhere,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match round.press(press) {
            Response::Guessed(outcome) => {
                let verdict = if outcome.correct {
                    colorize("right", "32")
                } else {
                    colorize("wrong", "31")
                };
                println!(
                    "{} -> {}: {verdict}",
                    format_card(outcome.previous),
                    format_card(outcome.revealed)
                );
            }
            Response::Restarted => println!("New deck shuffled."),
            Response::Ignored => {}
        }
    }
}

fn print_view(round: &Round) {
    match round.view() {
        View::Playing { card, score } => {
            println!(
                "\nCard {}/{}: {} | score {score}",
                round.cursor() + 1,
                LAST_INDEX + 1,
                format_card(card)
            );
            println!("Actions: [u]p [d]own [r]estart [q]uit");
        }
        View::Finished { text, .. } => {
            println!("\n{text}");
            println!("Press enter to play again or [q]uit.");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits.
        Ok(0) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
        Err(_) => String::new(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
