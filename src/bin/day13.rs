use std::env;
use std::path::PathBuf;

use tracing_subscriber::prelude::*;

use origami::input::{default_input_path, read_input};
use origami::parser::parse_input;
use origami::render::render;
use origami::solve::{part1, part2};
use origami::OrigamiError;

fn run() -> Result<(), OrigamiError> {
    let path: PathBuf = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_input_path);
    let input = read_input(&path)?;
    let (dots, folds) = parse_input(&input)?;

    println!("part1: {}", part1(&dots, &folds)?);
    let folded = part2(&dots, &folds)?;
    print!("{}", render(&folded));
    println!("part2: 0");
    Ok(())
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    if let Err(e) = run() {
        eprintln!("fail: {}", e);
        std::process::exit(1);
    }
}
