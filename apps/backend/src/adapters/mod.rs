pub mod game_results_sea;
