use clap::Parser;

use oddsconv::cli::{run, Args};

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        if atty::is(atty::Stream::Stderr) {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
        } else {
            eprintln!("error: {:#}", err);
        }
        std::process::exit(1);
    }
}
