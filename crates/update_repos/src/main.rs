// crates/update_repos/src/main.rs

use clap::Parser;

use status_report::{die, init_logging, FAILURE_EXIT_CODE};
use update_repos::{run, Args, UpdateOptions};

fn main() {
    let options = UpdateOptions::from(Args::parse());
    init_logging(options.verbose);

    match run(&options) {
        Ok(summary) if summary.all_succeeded() => {}
        Ok(_) => std::process::exit(FAILURE_EXIT_CODE),
        Err(err) => die(&format!("{:#}", err)),
    }
}
