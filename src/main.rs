use log::debug;
use std::env;
use std::fs;
use std::io::Read;

use mood_to_meal::{config::load_config, Interpreter, InterpreterError};

/// Reads generated recipe text from a file argument (or stdin when no
/// argument is given) and prints the interpreted recipe as JSON.
fn main() -> Result<(), InterpreterError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let text = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = load_config()?;
    debug!("loaded config: {config:?}");

    let recipe = Interpreter::from_config(&config).interpret(&text);
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
