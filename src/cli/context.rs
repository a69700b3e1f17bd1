use std::io::{self, Write};

use crate::db::ParticipantStore;
use crate::error::RosterError;
use crate::model::Participant;
use crate::queries::participant_queries;

pub struct CLIContext {
    pub store: ParticipantStore,
}

impl CLIContext {
    pub fn new(store: ParticipantStore) -> Self {
        Self { store }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Show a numbered menu and return the chosen option. Blank input or EOF
    /// cancels.
    pub fn choose<T: Clone>(&self, title: &str, options: &[T], label: impl Fn(&T) -> String) -> Option<T> {
        if options.is_empty() {
            return None;
        }
        println!("{}", title);
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, label(option));
        }
        loop {
            let input = self.prompt("Choose a number (Enter to cancel): ")?;
            if input.is_empty() {
                return None;
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(options[n - 1].clone()),
                _ => println!("Please enter a number between 1 and {}.", options.len()),
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` is a no.
    pub fn confirm(&self, question: &str) -> bool {
        self.prompt(&format!("{} (y/n): ", question))
            .map(|s| s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }

    /// Resolve a typed name to a single participant name. Partial,
    /// case-insensitive matches are accepted when unambiguous; an exact
    /// match wins over partial ones. Prints why when nothing resolves.
    pub fn find_participant_name(&self, table: &[Participant], args: &str) -> Option<String> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = participant_queries::names(&participant_queries::search_by_name(table, query));
        match matches.len() {
            0 => {
                println!("No participant found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|n| n.eq_ignore_ascii_case(query)) {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for name in &matches {
                    println!("  {}", name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    pub fn print_error(&self, e: &RosterError) {
        println!("Error: {}", e);
    }
}
