use clap::Parser;

use owgen::{Cli, TerminalPrompter};

fn main() {
    let action = Cli::parse().into_action();
    let mut prompter = TerminalPrompter::stdio();

    match owgen::run(&action, &mut prompter) {
        Ok(outcome) => println!("{outcome}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
