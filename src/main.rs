use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;
use std::process;

use re2nfa::{compile, to_postfix_string, FiveTuple};

#[derive(Debug, Parser)]
#[clap(name = "re2nfa")]
#[clap(version, about = "Builds an NFA from a regular expression by Thompson's construction")]
struct CliArgs {
    /// Expression over alphanumerics, `ε`, `| , . * + ? ^` and parentheses.
    regex: String,

    /// Only print the postfix form.
    #[clap(long)]
    postfix: bool,

    /// Print the final automaton as a Graphviz digraph.
    #[clap(long)]
    dot: bool,

    /// Print a Graphviz digraph for every construction step.
    #[clap(long)]
    steps: bool,
}

fn init_logger() {
    let env = Env::default()
        .filter_or("RE2NFA_LOG", "warn")
        .write_style("RE2NFA_LOG_STYLE");
    Builder::from_env(env).init();
}

fn run(args: &CliArgs) -> Result<()> {
    if args.postfix {
        let postfix = to_postfix_string(&args.regex)
            .with_context(|| format!("cannot translate {:?}", args.regex))?;
        println!("{}", postfix);
        return Ok(());
    }

    let compiled =
        compile(&args.regex).with_context(|| format!("cannot compile {:?}", args.regex))?;
    println!(
        "normalized: {}",
        re2nfa::token::tokens_to_string(&compiled.normalized)
    );
    println!(
        "postfix: {}",
        re2nfa::token::tokens_to_string(&compiled.postfix)
    );
    print!("{}", FiveTuple::from(&compiled.nfa));

    if args.steps {
        for snapshot in compiled.snapshots.iter() {
            println!();
            println!("// step {:02}: {}", snapshot.step, snapshot.token);
            print!("{}", snapshot.dot(&compiled.nfa));
        }
    }
    if args.dot {
        println!();
        print!("{}", compiled.nfa.dot());
    }
    Ok(())
}

pub fn main() {
    init_logger();
    let args = CliArgs::parse();
    debug!("{:?}", args);
    process::exit(match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {:#}", e);
            1
        }
    });
}
