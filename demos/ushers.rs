//! Example: a small keyword finder on top of the automaton.
//!
//! Builds an automaton for the classic {he, she, his, hers} keyword set and
//! prints where each keyword starts in a few texts. Keywords can also be given
//! on the command line.
//!
//! Run with: cargo run --example ushers [keyword...]

use libacm::automaton::owned::build_automaton;
use libacm::automaton::Automaton;

/// A thin wrapper that renders match results as text.
struct KeywordFinder {
    automaton: Automaton<char>,
}

impl KeywordFinder {
    fn new(automaton: Automaton<char>) -> Self {
        KeywordFinder { automaton }
    }

    /// Returns one line per keyword found in `text`, in lexicographic order.
    fn report(&self, text: &str) -> Vec<String> {
        self.automaton
            .find_locations(text.chars())
            .iter()
            .map(|(keyword, starts)| {
                let keyword: String = keyword.iter().collect();
                format!("{keyword} at {starts:?}")
            })
            .collect()
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let automaton = if args.is_empty() {
        build_automaton(["he", "she", "his", "hers"])
    } else {
        build_automaton(&args)
    };
    let automaton = match automaton {
        Ok(automaton) => automaton,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    println!("{automaton:?}");

    let finder = KeywordFinder::new(automaton);
    for text in ["ushers", "his sheep hers", "nothing to see"] {
        println!("\n{text:?}:");
        let lines = finder.report(text);
        if lines.is_empty() {
            println!("  (no keywords)");
        }
        for line in lines {
            println!("  {line}");
        }
    }
}
