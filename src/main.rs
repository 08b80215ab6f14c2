use std::{io, process};

use clap::Parser;
use colored::Colorize;

use repscan::{cli::Args, input::Input, run};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let input = Input::from_option(args.path.as_deref());

    if !args.quiet {
        println!(
            "{}: {}",
            "window length".bold(),
            args.length.to_string().blue().bold()
        );
        println!(
            "{}: {}",
            "data".bold(),
            input.to_string().underline().bold().blue()
        );
        println!("{}: {}", "sort".bold(), args.sort.to_string().blue().bold());
        println!();
    }

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());

    if let Err(e) = run::run(
        &input,
        args.length,
        args.threshold,
        args.sort,
        args.format,
        out,
    ) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
