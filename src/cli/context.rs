use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use rand::rngs::ThreadRng;

use crate::model::{Intern, Placement};
use crate::queries::view_queries::{InternViewState, PlacementViewState};
use crate::seed::RandomInternFactory;
use crate::store::RosterStore;

/// Long-lived session state behind the REPL: the record store, the two
/// tables' view selections, and the batch factory.
pub struct CLIContext {
    pub store: RosterStore,
    pub intern_view: InternViewState,
    pub placement_view: PlacementViewState,
    pub factory: RandomInternFactory<ThreadRng>,
}

impl CLIContext {
    pub fn new(store: RosterStore) -> Self {
        Self {
            store,
            intern_view: InternViewState::default(),
            placement_view: PlacementViewState::default(),
            factory: RandomInternFactory::new(rand::thread_rng()),
        }
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

    /// Find an intern by name or email query. Prints an error when nothing
    /// matches or the query is ambiguous.
    pub fn find_intern(&self, args: &str) -> Option<Intern> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let lower = query.to_lowercase();
        let matches: Vec<&Intern> = self
            .store
            .interns()
            .iter()
            .filter(|i| {
                i.name.to_lowercase().contains(&lower) || i.email.to_lowercase().contains(&lower)
            })
            .collect();

        match matches.len() {
            0 => {
                println!("No intern found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                // Check for exact match
                if let Some(exact) = matches.iter().find(|i| i.name.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for intern in &matches {
                    println!("  {} ({})", intern.name, intern.id);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Find a placement by name, email, or mentor query.
    pub fn find_placement(&self, args: &str) -> Option<Placement> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let lower = query.to_lowercase();
        let matches: Vec<&Placement> = self
            .store
            .placements()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&lower)
                    || p.email.to_lowercase().contains(&lower)
                    || p.mentor.to_lowercase().contains(&lower)
            })
            .collect();

        match matches.len() {
            0 => {
                println!("No placement found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|p| p.name.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for placement in &matches {
                    println!("  {} ({})", placement.name, placement.id);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::RosterError) {
        println!("Error: {}", e);
    }
}
