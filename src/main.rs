use customer_name_matcher::{fuzzy_search, read_candidate_name_list_from_path, NOT_FOUND_INDEX};
use log::{error, info};
use std::io::{self, BufRead};
use std::path::Path;

fn print_usage() {
    eprintln!("Usage: customer-name-matcher-cli <roster.csv[.gz]> [query]");
    eprintln!("Without a query, one query per line is read from stdin.");
}

fn print_match(candidate_names: &[String], query: &str) {
    let candidate_index = fuzzy_search(query, candidate_names);

    if candidate_index == NOT_FOUND_INDEX {
        println!("{}", NOT_FOUND_INDEX);
    } else {
        println!(
            "{}\t{}",
            candidate_index, candidate_names[candidate_index as usize]
        );
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let roster_path = match args.first() {
        Some(roster_path) => roster_path,
        None => {
            print_usage();
            std::process::exit(1);
        }
    };

    let candidate_names = match read_candidate_name_list_from_path(Path::new(roster_path)) {
        Ok(candidate_names) => candidate_names,
        Err(e) => {
            error!("Failed to read roster {}: {}", roster_path, e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded {} candidate names from {}",
        candidate_names.len(),
        roster_path
    );

    // A query given on the command line may span several arguments
    if args.len() > 1 {
        print_match(&candidate_names, &args[1..].join(" "));
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(query) => print_match(&candidate_names, &query),
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        }
    }
}
