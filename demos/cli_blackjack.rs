//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Round, RoundOptions, RoundState, Snapshot, Suit};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default();
    let mut round = Round::new(options, seed);

    loop {
        let balance = round.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        println!("\nBalance: {balance}");

        let Some(wager) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if wager == 0 {
            println!("Goodbye.");
            break;
        }

        let snapshot = match round.start(wager) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };
        print_table(&snapshot);

        while round.state() == RoundState::Playing {
            let action = prompt_line("Action: [h]it, [s]tand: ");

            let result = match action.as_str() {
                "h" | "hit" => round.hit(),
                "s" | "stand" => round.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(snapshot) => print_table(&snapshot),
                Err(err) => println!("Action error: {err}"),
            }
        }

        let snapshot = round.snapshot();
        println!("{}", snapshot.message);

        if round.next_round().is_err() {
            break;
        }

        let answer = prompt_line("Play another round? (y/n): ");
        if answer == "n" || answer == "no" {
            println!("Final balance: {}", round.balance());
            break;
        }
    }
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

fn print_table(snapshot: &Snapshot) {
    let dealer_cards = snapshot
        .dealer_cards
        .iter()
        .map(|view| view.card().map_or_else(|| "??".to_string(), |c| format_card(&c)))
        .collect::<Vec<_>>()
        .join(" ");
    let dealer_value = snapshot
        .dealer_value
        .map_or_else(|| "?".to_string(), |v| v.to_string());
    println!("\nDealer: {dealer_cards} (value {dealer_value})");

    let player_cards = snapshot
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "Player: {} (value {}) | bet {}",
        player_cards, snapshot.player_value, snapshot.current_bet
    );
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    format!(
        "{}{}",
        colorize(card.rank.symbol(), color_code),
        colorize(card.suit.symbol(), color_code)
    )
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
