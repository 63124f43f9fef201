//! Convert ingredient lines from the command line
//! Usage: cargo run --bin convert_ingredient -- <metric|standard> "<ingredient>" ["<ingredient>" ...]

use ladle::conversion::{convert_ingredient_list, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some((system, lines)) = args.split_first() else {
        eprintln!("Usage: convert_ingredient <metric|standard> <ingredient>...");
        std::process::exit(2);
    };

    let to_system: UnitSystem = system.parse()?;

    for line in convert_ingredient_list(lines, to_system) {
        println!("{}", line);
    }

    Ok(())
}
