use std::process;

fn main() {
    if let Err(e) = gmake::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
