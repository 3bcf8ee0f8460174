//! CLI advisor example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use bjadvisor::{Action, Advisor, AdvisorOptions, Recommendation, Rules};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack advisor (Hi-Lo)");
    println!("\nTable configuration");

    let decks = prompt_u8("  Number of decks in shoe (default 6): ", 6);
    let rules = Rules::default()
        .with_stand_on_soft_17(!prompt_yes("  Dealer hits soft 17? (y/N): ", false))
        .with_double_after_split(prompt_yes("  Double after split allowed? (Y/n): ", true))
        .with_surrender(prompt_yes("  Surrender allowed? (Y/n): ", true));

    let mut advisor = Advisor::new(AdvisorOptions::default().with_decks(decks).with_rules(rules));

    println!("\nEnter seen cards (e.g. '10 A 5') to update the count.");
    println!("Commands: [r]ec for a recommendation, [u]ndo, reset, [q]uit.");

    loop {
        print_status(&advisor);

        let input = prompt_line("\nCards / command: ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "reset" => {
                advisor.reset_count();
                println!("Shoe reset. Count cleared.");
            }
            "u" | "undo" => match advisor.undo_last_card() {
                Ok(_) => println!("Last card removed."),
                Err(err) => println!("Undo error: {err}"),
            },
            "r" | "rec" => recommend(&advisor),
            "" => {}
            _ => {
                let parsed = advisor.observe(&input);
                if !parsed.rejected.is_empty() {
                    println!("Ignored: {}", parsed.rejected.join(" "));
                }
                println!("Processed {} card(s).", parsed.cards.len());
            }
        }
    }
}

fn recommend(advisor: &Advisor) {
    let hand = prompt_line("  Your hand (e.g. 'A 6' or 'A 6 2'): ");
    let upcard = prompt_line("  Dealer upcard (e.g. '10'): ");

    match advisor.recommend(&hand, &upcard) {
        Ok(recommendation) => print_recommendation(&recommendation),
        Err(err) => println!("  Input error: {err}"),
    }
}

fn print_recommendation(recommendation: &Recommendation) {
    let action = recommendation.action.to_string();
    println!(
        "\n  Recommendation: {}",
        colorize(&action, action_color(recommendation.action))
    );
    if recommendation.insurance {
        println!("  {}", colorize("Take insurance", "33"));
    }
    println!("  Reason: {}", recommendation.explanation);
}

fn print_status(advisor: &Advisor) {
    let status = advisor.status();
    println!("\n{}", "=".repeat(40));
    println!(" {:<20}: {}", "Running count", status.running_count);
    println!(" {:<20}: {:.1}", "True count", status.true_count);
    println!(" {:<20}: {}", "Cards seen", status.cards_seen);
    println!(" {:<20}: {:.2}", "Decks remaining", status.decks_remaining);
    println!(" {:<20}: {} unit(s)", "Recommended bet", status.bet_units);
    println!("{}", "=".repeat(40));
}

const fn action_color(action: Action) -> &'static str {
    match action {
        Action::Stand => "31",
        Action::Double => "34",
        Action::Split => "33",
        Action::Hit | Action::Surrender => "32",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
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

fn prompt_yes(prompt: &str, default: bool) -> bool {
    match prompt_line(prompt).as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn prompt_u8(prompt: &str, default: u8) -> u8 {
    let input = prompt_line(prompt);
    if input.is_empty() {
        return default;
    }
    input.parse::<u8>().unwrap_or_else(|_| {
        println!("  Invalid input, using {default}.");
        default
    })
}
