//! CLI memory game example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use memrs::{Card, MemoryGame, MemoryOptions, Slot};

const MATCH_POINTS: i64 = 10;
const MISS_PENALTY: i64 = 2;

fn main() {
    env_logger::init();
    println!("Memory CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = MemoryGame::new(MemoryOptions::default(), seed);

    let Some(pairs) = prompt_usize("Number of pairs (1-52): ") else {
        return;
    };
    if let Err(err) = game.request_deck(pairs) {
        println!("Deal error: {err}");
        return;
    }

    while game.remaining_cards() > 0 {
        print_board(game.deck(), &[]);
        println!("Score: {}", game.score());

        let Some(first) = prompt_slot(&game, "First slot: ") else {
            break;
        };
        let Some(second) = prompt_slot(&game, "Second slot: ") else {
            break;
        };
        if first == second {
            println!("Pick two different slots.");
            continue;
        }

        print_board(game.deck(), &[first, second]);

        let score = i64::try_from(game.score()).unwrap_or(i64::MAX);
        if game.deck()[first] == game.deck()[second] {
            println!("Match!");
            let _ = game.clear_slot(first);
            let _ = game.clear_slot(second);
            game.set_score(score.saturating_add(MATCH_POINTS));
        } else {
            println!("No match.");
            game.set_score(score - MISS_PENALTY);
        }
    }

    println!("Final score: {}", game.score());
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_slot(game: &MemoryGame, prompt: &str) -> Option<usize> {
    loop {
        let index = prompt_usize(prompt)?;
        match game.deck().get(index) {
            Some(Some(_)) => return Some(index),
            Some(None) => println!("That slot is already cleared."),
            None => println!("No such slot."),
        }
    }
}

fn print_board(deck: &[Slot], revealed: &[usize]) {
    println!();
    for (index, slot) in deck.iter().enumerate() {
        let face = match slot {
            None => "--".to_string(),
            Some(name) if revealed.contains(&index) => format_card(name),
            Some(_) => format!("{index:>2}"),
        };
        print!("[{face:>6}] ");
        if index % 8 == 7 {
            println!();
        }
    }
    println!();
}

fn format_card(name: &str) -> String {
    name.parse::<Card>().map_or_else(
        |_| name.to_string(),
        |card| {
            let suit = match card.suit {
                memrs::Suit::Clubs => "C",
                memrs::Suit::Diamonds => "D",
                memrs::Suit::Hearts => "H",
                memrs::Suit::Spades => "S",
            };
            format!("{}{suit}", card.rank.label())
        },
    )
}
