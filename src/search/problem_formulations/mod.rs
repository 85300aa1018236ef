mod search_problem;
mod treasure_hunt_problem;

pub use search_problem::SearchProblem;
