use crate::lines::Lines;
use clap::ArgMatches;
use log::{debug, info, LevelFilter};
use std::fs;
use strview_lib::constants::NPOS;
use strview_lib::view::StrView;

pub fn search_main(matches: ArgMatches) {
    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    let path = matches.value_of("file").expect("file not specified");
    let needle_text = matches
        .value_of("needle")
        .expect("needle not specified")
        .to_string();

    let content = fs::read(path).expect("could not read file");
    let haystack = StrView::from(&content);
    let needle = StrView::from(needle_text.as_bytes());

    info!("searching {} bytes from {}", haystack.len(), path);

    let mut found = 0u64;
    for (number, line) in Lines::over(haystack).enumerate() {
        debug!("line {}: {} bytes", number + 1, line.len());
        let mut pos = line.find(needle, 0);
        while pos != NPOS {
            found += 1;
            println!("{}:{}: {}", number + 1, pos + 1, line);
            pos = line.find(needle, pos + 1);
        }
    }

    info!("{} match(es) for {}", found, needle);
}
