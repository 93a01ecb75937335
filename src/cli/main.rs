use std::{io::BufReader, path::PathBuf, str::FromStr};

use stoat_kb::{config::Config, context::Context, structures::expression::Expression};

mod parse_args;
use parse_args::parse_args;

#[derive(Default)]
struct CliOptions {
    chain: bool,
}

fn main() {
    let mut cli_options = CliOptions::default();

    let mut ctx: Context = Context::from_config(Config::default());

    let mut args: Vec<String> = std::env::args().collect();

    parse_args(&mut ctx, &mut args, &mut cli_options);

    if args.len() < 2 {
        println!("c Path to clause file required");
        std::process::exit(1);
    }

    let path = match PathBuf::from_str(args.last().expect("path argument checked")) {
        Ok(path) => path,
        Err(_) => {
            println!("c Path to clause file required");
            std::process::exit(1);
        }
    };

    let goals: Vec<Expression> = args[1..args.len() - 1]
        .iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(name) => Expression::not_of(Expression::symbol(name)),
            None => Expression::symbol(arg.as_str()),
        })
        .collect();

    println!("c Reading clause file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open clause file");
            std::process::exit(1);
        }
    };

    match ctx.read_dimacs(BufReader::new(&file)) {
        Ok(info) => {
            println!(
                "c {} clauses over {} symbols",
                info.clauses_added,
                info.symbols.len()
            );
        }

        Err(e) => {
            println!("c Parse error: {e:?}");
            std::process::exit(2);
        }
    }

    if cli_options.chain {
        let mut facts = ctx.forward_chaining().into_iter().collect::<Vec<_>>();
        facts.sort();
        for fact in &facts {
            println!("v {fact}");
        }
    }

    let result = match ctx.entails(&goals) {
        Ok(report) => report,

        Err(e) => {
            println!("c Entailment error: {e:?}");
            std::process::exit(2);
        }
    };

    println!("s {result}");
}
