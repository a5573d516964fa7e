use clap::Parser;

use maze_search::config::Config;
use maze_search::runner;

fn main() {
    let env = env_logger::Env::new()
        .filter_or("MAZE_LOG", "warn")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let config = Config::parse();

    if let Err(e) = runner::run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
