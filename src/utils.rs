pub mod acronym;
pub mod fold_name;
pub mod read_candidate_name_list;
pub mod sort_ranked_candidates;
pub mod substring_edit_distance;

pub use acronym::acronym;
pub use fold_name::fold_name;
pub use read_candidate_name_list::{
    read_candidate_name_list_from_path, read_candidate_name_list_from_reader,
    read_candidate_name_list_from_string,
};
pub use sort_ranked_candidates::sort_ranked_candidates;
pub use substring_edit_distance::substring_edit_distance;
