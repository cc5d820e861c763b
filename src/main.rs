use std::{env, process, time::Instant};

use imwc::{compiler::compiler::Compiler, display_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: imwc <source-file> [results-file]");
        process::exit(2);
    }

    let source_path = &args[1];
    let results_path = args.get(2).map(String::as_str).unwrap_or("result.txt");

    let start = Instant::now();
    let compiler = Compiler::new(source_path, results_path);

    match compiler.compile() {
        Ok(clean) => {
            println!("Compiled in {:?}", start.elapsed());
            process::exit(if clean { 0 } else { 1 });
        }
        Err(error) => {
            display_error(&error);
            process::exit(2);
        }
    }
}
