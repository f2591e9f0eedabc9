//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = wardrobe_cli::run() {
        eprintln!("wardrobe: {err}");
        std::process::exit(1);
    }
}
