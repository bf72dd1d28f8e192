extern crate clap;
use std::fs::File;

use anyhow::{bail, Context};
use clap::{App, Arg, ArgMatches};
use rustc_hash::FxHashSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordcube::{
    dictionary::{banned_set, load_banned},
    search, Ascending, Dictionaries, FrequencyTable, Grid, GridConfig, Shuffled, WordList,
};

fn parse_number<T: std::str::FromStr>(
    matches: &ArgMatches,
    name: &str,
    default: T,
) -> anyhow::Result<T> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .map_err(|_| anyhow::anyhow!("--{} expects a number, got {:?}", name, value)),
        None => Ok(default),
    }
}

fn app() -> App<'static, 'static> {
    App::new("wordcube")
        .about("Finds word squares and word cubes")
        .arg(
            Arg::with_name("dict")
                .short("d")
                .long("dict")
                .value_name("FILE")
                .help("Word list: one word per line, or a JSON array of words")
                .required(true),
        )
        .arg(
            Arg::with_name("freq")
                .short("f")
                .long("freq")
                .value_name("FILE")
                .help("CSV of words sorted by frequency, with a header line"),
        )
        .arg(
            Arg::with_name("width")
                .short("x")
                .long("width")
                .value_name("WIDTH")
                .help("Grid width [default: 4]"),
        )
        .arg(
            Arg::with_name("height")
                .short("y")
                .long("height")
                .value_name("HEIGHT")
                .help("Grid height [default: 4]"),
        )
        .arg(
            Arg::with_name("depth")
                .short("z")
                .long("depth")
                .value_name("DEPTH")
                .help("Grid depth; 0 searches a flat grid [default: 0]"),
        )
        .arg(
            Arg::with_name("min-freq-rows")
                .long("min-freq-rows")
                .value_name("RANK")
                .help("Keep only row words within this frequency rank; 0 keeps all"),
        )
        .arg(
            Arg::with_name("min-freq-columns")
                .long("min-freq-columns")
                .value_name("RANK")
                .help("Keep only column, depth and diagonal words within this rank; 0 keeps all"),
        )
        .arg(
            Arg::with_name("no-unique")
                .long("no-unique")
                .takes_value(false)
                .help("Also emit solutions whose lines repeat (square and cubic grids only)"),
        )
        .arg(
            Arg::with_name("diagonals")
                .long("diagonals")
                .takes_value(false)
                .help("Require both diagonals to be words (square grids only)"),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .takes_value(false)
                .help("Try letters in a random order"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .requires("random")
                .help("Seed for --random"),
        )
        .arg(
            Arg::with_name("ban")
                .long("ban")
                .value_name("WORD")
                .multiple(true)
                .number_of_values(1)
                .help("Never use this word"),
        )
        .arg(
            Arg::with_name("banned")
                .long("banned")
                .value_name("FILE")
                .help("File of words never to use, one per line"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false),
        )
}

fn grid_config(matches: &ArgMatches) -> anyhow::Result<GridConfig> {
    let defaults = GridConfig::default();
    let config = GridConfig {
        width: parse_number(&matches, "width", defaults.width)?,
        height: parse_number(&matches, "height", defaults.height)?,
        depth: parse_number(&matches, "depth", defaults.depth)?,
        min_freq_rows: parse_number(&matches, "min-freq-rows", defaults.min_freq_rows)?,
        min_freq_columns: parse_number(&matches, "min-freq-columns", defaults.min_freq_columns)?,
        unique_lines_only: !matches.is_present("no-unique"),
        require_diagonal_words: matches.is_present("diagonals"),
    };
    config.validate()?;

    if config.require_diagonal_words && !config.diagonals_active() {
        bail!("--diagonals needs a square, flat grid");
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = app().get_matches();
    let config = grid_config(&matches)?;

    if matches.is_present("profile") {
        let guard = pprof::ProfilerGuard::new(100).context("failed to start profiler")?;
        std::thread::spawn(move || loop {
            if let Ok(report) = guard.report().build() {
                if let Ok(file) = File::create("flamegraph.svg") {
                    if let Err(err) = report.flamegraph(file) {
                        tracing::warn!("Failed to write flamegraph: {}", err);
                    }
                }
            }
            std::thread::sleep(std::time::Duration::from_secs(5))
        });
    }

    let frequencies = match matches.value_of("freq") {
        Some(path) => FrequencyTable::load(path)?,
        None => FrequencyTable::default(),
    };

    let mut banned: FxHashSet<String> = match matches.value_of("banned") {
        Some(path) => load_banned(path)?,
        None => FxHashSet::default(),
    };
    if let Some(words) = matches.values_of("ban") {
        banned.extend(banned_set(words));
    }

    let dict = matches.value_of("dict").context("--dict is required")?;
    let words = WordList::load(dict)?;
    let dictionaries = Dictionaries::for_config(&config, &words, &frequencies, &banned);

    let mut print = |grid: &Grid| println!("{}", grid);

    let stats = if matches.is_present("random") {
        let mut order = match matches.value_of("seed") {
            Some(_) => Shuffled::seeded(parse_number(&matches, "seed", 0)?),
            None => Shuffled::from_entropy(),
        };
        search(&config, &dictionaries, &mut order, &mut print)?
    } else {
        search(&config, &dictionaries, &mut Ascending, &mut print)?
    };

    tracing::info!("Done. {} solutions.", stats.solutions);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{app, grid_config};

    #[test]
    fn unique_lines_are_on_by_default() {
        let matches = app().get_matches_from(vec!["wordcube", "-d", "words.txt"]);
        let config = grid_config(&matches).unwrap();

        assert!(config.unique_lines_only);
        assert_eq!(4, config.width);
        assert_eq!(4, config.height);
    }

    #[test]
    fn no_unique_keeps_repeated_lines() {
        let matches = app().get_matches_from(vec!["wordcube", "-d", "words.txt", "--no-unique"]);
        let config = grid_config(&matches).unwrap();

        assert!(!config.unique_lines_only);
    }

    #[test]
    fn diagonals_need_a_square() {
        let matches =
            app().get_matches_from(vec!["wordcube", "-d", "words.txt", "-x", "3", "--diagonals"]);

        assert!(grid_config(&matches).is_err());
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let matches = app().get_matches_from(vec!["wordcube", "-d", "words.txt", "-x", "wide"]);

        assert!(grid_config(&matches).is_err());
    }
}
