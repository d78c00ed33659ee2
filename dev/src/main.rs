//! Prints every candidate's scores for a query, best first.
//!
//! Used to calibrate `min_similarity_threshold` against real rosters:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p dev --bin calibrate -- roster.csv "JB Hunt"
//! ```

use customer_name_matcher::{
    read_candidate_name_list_from_path, FuzzyMatcher, DEFAULT_FUZZY_MATCHER_CONFIG,
};
use log::error;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: calibrate <roster.csv[.gz]> <query>");
        std::process::exit(1);
    }

    let candidate_names = match read_candidate_name_list_from_path(Path::new(&args[0])) {
        Ok(candidate_names) => candidate_names,
        Err(e) => {
            error!("Failed to read roster {}: {}", args[0], e);
            std::process::exit(1);
        }
    };

    let query = args[1..].join(" ");
    let fuzzy_matcher = FuzzyMatcher::new(DEFAULT_FUZZY_MATCHER_CONFIG);

    println!("Query: {:?} -> {:?}", query, fuzzy_matcher.normalize(&query));
    println!(
        "Threshold: {:.3}",
        DEFAULT_FUZZY_MATCHER_CONFIG.min_similarity_threshold
    );

    for ranked_candidate in fuzzy_matcher.rank(&query, &candidate_names) {
        let candidate_name = &candidate_names[ranked_candidate.candidate_index];

        println!(
            "{:>4}  {:.3}  {:.3}  {:<40} {:?}",
            ranked_candidate.candidate_index,
            ranked_candidate.similarity_score,
            ranked_candidate.tie_break_score,
            candidate_name,
            fuzzy_matcher.normalize(candidate_name)
        );
    }

    match fuzzy_matcher.find_best_match(&query, &candidate_names) {
        Some(candidate_index) => println!("Match: {}", candidate_index),
        None => println!("Match: none"),
    }
}
