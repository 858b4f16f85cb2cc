//! Command-line front end: parse a pattern and print its syntax tree.

use clap::Parser;
use regex_tree_rs::render;

#[derive(Debug, Parser)]
#[command(
    name = "regex-tree",
    version,
    about = "Parse a regular-expression pattern and print its syntax tree"
)]
struct Args {
    /// Pattern to parse.
    #[arg(default_value = "c|d(f?|g)")]
    pattern: String,

    /// Fail when the pattern is not consumed in full.
    #[arg(long)]
    strict: bool,
}

fn main() {
    let args = Args::parse();

    let result = if args.strict {
        regex_tree_rs::Parser::parse(&args.pattern).map(|root| (root, ""))
    } else {
        regex_tree_rs::Parser::parse_prefix(&args.pattern)
    };

    match result {
        Ok((root, rest)) => {
            print!("{}", render(&root));
            if !rest.is_empty() {
                eprintln!("note: trailing input left unparsed: {:?}", rest);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
