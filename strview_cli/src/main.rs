mod inspect_cli;
mod lines;
mod search_cli;

use crate::inspect_cli::inspect_main;
use crate::search_cli::search_main;
use clap::{App, Arg};

fn main() {
    let matches = App::new("StrView CLI")
        .version("1.0")
        .about("Search and inspect files through non-owning byte views")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("FILE")
                .help("The file to read")
                .required(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("needle")
                .short("n")
                .long("needle")
                .value_name("TEXT")
                .help("The literal byte sequence to search for")
                .required_unless("inspect")
                .conflicts_with("inspect")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("inspect")
                .short("i")
                .long("inspect")
                .help("Print per-line statistics instead of searching")
                .takes_value(false)
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .get_matches();

    if matches.is_present("inspect") {
        inspect_main(matches);
    } else {
        search_main(matches);
    }
}
