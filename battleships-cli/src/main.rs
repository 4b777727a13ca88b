// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use battleships::{random::random_fleet, LogObserver, OverlapCheck, PlayError, Resolver, Rules};
use clap::{App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

fn main() {
    env_logger::init();
    let matches = app().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

/// Build the command line interface.
fn app() -> App<'static, 'static> {
    App::new("Battleships")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Counts the ships sunk by a sequence of guesses.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("ROW:COL,ROW:COL")
                .help("place a ship from its anchor to its end, lowest coordinate first")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("guess")
                .short("g")
                .long("guess")
                .value_name("ROW:COL")
                .help("fire at a cell; guesses are fired in the order given")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("read 'ship' and 'guess' commands from a file, or '-' for stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .value_name("COUNT")
                .help("add COUNT randomly placed ships")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for random ship placement")
                .takes_value(true)
                .requires("random"),
        )
        .arg(
            Arg::with_name("anchor_only")
                .long("anchor-only")
                .help("only check a new ship's anchor against ships already placed"),
        )
        .arg(
            Arg::with_name("bounded")
                .long("bounded")
                .help("require ships to stay on the 10x10 board"),
        )
        .arg(
            Arg::with_name("tally")
                .short("t")
                .long("tally")
                .help("print hits and misses as well as ships sunk"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log every placement, hit, miss and sinking"),
        )
}

/// Resolve the round described by the command line and print the result.
fn run(matches: &ArgMatches) -> io::Result<()> {
    let rules = rules(matches);
    let mut round = Round::default();
    if let Some(path) = matches.value_of("input") {
        if path == "-" {
            let stdin = io::stdin();
            round.read_commands(stdin.lock())?;
        } else {
            round.read_commands(BufReader::new(File::open(path)?))?;
        }
    }
    if let Some(ships) = matches.values_of("ship") {
        round.ships.extend(ships.map(str::to_owned));
    }
    if let Some(guesses) = matches.values_of("guess") {
        round.guesses.extend(guesses.map(str::to_owned));
    }
    if let Some(count) = matches.value_of("random") {
        let count = parse_arg::<usize>("random", count)?;
        let seed = matches
            .value_of("seed")
            .map(|seed| parse_arg::<u64>("seed", seed))
            .transpose()?;
        round.add_random_ships(&rules, count, seed)?;
    }

    let observer = if matches.is_present("verbose") {
        LogObserver::all()
    } else {
        LogObserver::default()
    };
    let mut resolver = Resolver::new(rules).with_observer(observer);
    let tally = resolver
        .resolve(&round.ships, &round.guesses)
        .map_err(invalid_input)?;
    if matches.is_present("tally") {
        println!("hits: {}", tally.hits);
        println!("misses: {}", tally.misses);
        println!("sunk: {}", tally.sunk);
    } else {
        println!("{}", tally.sunk);
    }
    Ok(())
}

/// Build the placement rules selected by flags.
fn rules(matches: &ArgMatches) -> Rules {
    let mut rules = Rules::standard();
    if matches.is_present("anchor_only") {
        rules = rules.with_overlap(OverlapCheck::AnchorOnly);
    }
    if matches.is_present("bounded") {
        rules = rules.bounded(Rules::STANDARD_SIZE, Rules::STANDARD_SIZE);
    }
    rules
}

/// Ship descriptors and guesses collected from every source, in order.
#[derive(Debug, Default)]
struct Round {
    ships: Vec<String>,
    guesses: Vec<String>,
}

/// A single line of a command file.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    Ship(String),
    Guess(String),
}

impl Round {
    /// Read commands, one per line. Blank lines and `#` comments are skipped.
    fn read_commands<B: BufRead>(&mut self, read: B) -> io::Result<()> {
        for (number, line) in read.lines().enumerate() {
            match parse_command(&line?) {
                Ok(None) => {}
                Ok(Some(Command::Ship(ship))) => self.ships.push(ship),
                Ok(Some(Command::Guess(guess))) => self.guesses.push(guess),
                Err(line) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "line {}: expected 'ship ROW:COL,ROW:COL' or 'guess ROW:COL', got {:?}",
                            number + 1,
                            line
                        ),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Add `count` random ships, with lengths cycling from 2 to 4, that do not overlap each
    /// other or any ship already listed.
    fn add_random_ships(&mut self, rules: &Rules, count: usize, seed: Option<u64>) -> io::Result<()> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let lengths: Vec<_> = (rules.min_len()..=rules.max_len())
            .cycle()
            .take(count)
            .collect();
        // Regenerate until the random ships also avoid the listed ones.
        for _ in 0..100 {
            let fleet = random_fleet(&mut rng, rules, &lengths)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            let ships: Vec<_> = self
                .ships
                .iter()
                .cloned()
                .chain(fleet.iter().map(ToString::to_string))
                .collect();
            if Resolver::new(*rules).setup(&ships).is_ok() {
                for ship in &fleet {
                    debug!("random ship {}", ship);
                }
                self.ships = ships;
                return Ok(());
            }
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "could not fit the random ships around the listed ones",
        ))
    }
}

/// Parse one line of a command file. Returns `Ok(None)` for lines with no command and
/// `Err` with the trimmed line if it is not a command.
fn parse_command(line: &str) -> Result<Option<Command>, &str> {
    static COMMAND: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?P<cmd>ship|guess)\s+
        (?P<arg>\S+)$",
        )
        .unwrap()
    });

    let line = match line.find('#') {
        Some(comment) => &line[..comment],
        None => line,
    }
    .trim();
    if line.is_empty() {
        return Ok(None);
    }
    let captures = COMMAND.captures(line).ok_or(line)?;
    let arg = captures["arg"].to_owned();
    Ok(Some(match &captures["cmd"] {
        "ship" => Command::Ship(arg),
        _ => Command::Guess(arg),
    }))
}

/// Parse a numeric argument.
fn parse_arg<T: std::str::FromStr>(name: &str, value: &str) -> io::Result<T> {
    value.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid value for --{}: {:?}", name, value),
        )
    })
}

fn invalid_input(err: PlayError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_commands_and_skips_comments() {
        assert_eq!(
            parse_command("ship 3:2,3:5"),
            Ok(Some(Command::Ship("3:2,3:5".into())))
        );
        assert_eq!(
            parse_command("  guess   7:0  # opening shot"),
            Ok(Some(Command::Guess("7:0".into())))
        );
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("# just a comment"), Ok(None));
        assert_eq!(parse_command("fire 7:0"), Err("fire 7:0"));
        assert_eq!(parse_command("guess 7:0 3:3"), Err("guess 7:0 3:3"));
    }

    #[test]
    fn reads_a_round_from_lines() {
        let input = "ship 3:2,3:5\nguess 7:0\n\nguess 3:3\nship 2:3,5:3 # vertical\n";
        let mut round = Round::default();
        round.read_commands(Cursor::new(input)).unwrap();
        assert_eq!(round.ships, vec!["3:2,3:5", "2:3,5:3"]);
        assert_eq!(round.guesses, vec!["7:0", "3:3"]);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let mut round = Round::default();
        let err = round
            .read_commands(Cursor::new("ship 3:2,3:5\nshoot 3:3\n"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn random_ships_avoid_listed_ones() {
        let mut round = Round::default();
        round.ships.push("0:0,0:3".into());
        round
            .add_random_ships(&Rules::standard(), 5, Some(42))
            .unwrap();
        assert_eq!(round.ships.len(), 6);
        assert_eq!(round.ships[0], "0:0,0:3");
        assert!(Resolver::new(Rules::standard()).setup(&round.ships).is_ok());
    }

    #[test]
    fn flags_select_rules() {
        let matches = app().get_matches_from(vec!["battleships", "--anchor-only", "--bounded"]);
        let rules = rules(&matches);
        assert_eq!(rules.overlap(), OverlapCheck::AnchorOnly);
        assert_eq!(rules.bounds(), Some((10, 10)));
    }

    #[test]
    fn repeated_flags_keep_their_order() {
        let matches = app().get_matches_from(vec![
            "battleships",
            "--ship",
            "3:2,3:5",
            "-g",
            "3:3",
            "-g",
            "7:0",
        ]);
        let guesses: Vec<_> = matches.values_of("guess").unwrap().collect();
        assert_eq!(guesses, vec!["3:3", "7:0"]);
        assert_eq!(matches.value_of("ship"), Some("3:2,3:5"));
    }
}
