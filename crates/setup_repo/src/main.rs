// crates/setup_repo/src/main.rs

use clap::Parser;

use setup_repo::{read_config, run, Args, Options};
use status_report::{die, init_logging};

fn main() {
    let args = Args::parse();
    // A `verbose: true` config entry enables status lines; debug logging needs `-v` or RUST_LOG.
    init_logging(args.verbose);

    let mut options = Options::from(args);
    if let Err(err) = read_config(&mut options) {
        die(&format!("{:#}", err));
    }

    match run(&options) {
        Ok(repo_dir) => println!("Success: check {}", repo_dir.display()),
        Err(err) => die(&format!("{:#}", err)),
    }
}
