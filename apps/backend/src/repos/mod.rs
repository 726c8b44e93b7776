pub mod game_results;
