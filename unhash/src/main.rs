// src/main.rs
use anyhow::Result;
use clap::Parser;
use unhash::{Args, init_logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
