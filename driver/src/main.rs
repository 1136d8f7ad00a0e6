use clap::Parser;
use env_logger::Env;
use log::*;
use std::error::Error;
use std::io;

mod default;
mod report;
mod words;

use default::RANDOM_WORD_LEN;
use report::DrainReport;

/// Load words into a min-heap, show the smallest, then drain it in order.
#[derive(Parser, Debug)]
struct Cli {
    /// Words to load. Read from stdin when none are given.
    words: Vec<String>,

    /// Load the built-in fruit list.
    #[arg(short, long, conflicts_with_all = ["words", "random"])]
    sample: bool,

    /// Load N random lowercase words.
    #[arg(short, long, value_name = "N", conflicts_with = "words")]
    random: Option<usize>,

    #[arg(short = 'l', long, default_value_t = RANDOM_WORD_LEN, requires = "random")]
    word_len: usize,

    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print a JSON report.
    #[arg(short, long)]
    json: bool,

    /// Also print the backing array before draining.
    #[arg(long)]
    layout: bool,
}

fn collect_words(cli: &Cli) -> Result<Vec<String>, Box<dyn Error>> {
    if cli.sample {
        debug!("-> using sample words");
        return Ok(words::sample_words());
    }
    if let Some(n) = cli.random {
        debug!("-> generating {} random words, seed {:?}", n, cli.seed);
        return Ok(words::random_words(n, cli.word_len, cli.seed));
    }
    if !cli.words.is_empty() {
        return Ok(cli.words.clone());
    }
    info!("-> reading words from stdin..");
    Ok(words::read_words(io::stdin().lock())?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    debug!("Args {:?}", cli);

    let words = collect_words(&cli)?;
    info!("-> loading {} words", words.len());
    let report = DrainReport::build(words, cli.layout);
    report.verify_sorted()?;
    info!("-> drained {} words in order", report.drained.len());

    let mut out = io::stdout().lock();
    if cli.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_words() {
        let cli = Cli::try_parse_from(["minheap-driver", "b", "a"]).unwrap();
        assert_eq!(collect_words(&cli).unwrap(), vec!["b", "a"]);
        assert!(!cli.json);
        assert_eq!(cli.word_len, RANDOM_WORD_LEN);
    }

    #[test]
    fn test_cli_sample() {
        let cli = Cli::try_parse_from(["minheap-driver", "--sample", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(collect_words(&cli).unwrap().len(), 7);
    }

    #[test]
    fn test_cli_random() {
        let cli = Cli::try_parse_from([
            "minheap-driver",
            "--random",
            "12",
            "-l",
            "3",
            "--seed",
            "1",
        ])
        .unwrap();
        let words = collect_words(&cli).unwrap();
        assert_eq!(words.len(), 12);
        assert!(words.iter().all(|w| w.len() == 3));
    }

    #[test]
    fn test_cli_conflicts() {
        assert!(Cli::try_parse_from(["minheap-driver", "--sample", "x"]).is_err());
        assert!(Cli::try_parse_from(["minheap-driver", "--sample", "-r", "3"]).is_err());
        // word length and seed only shape random words
        assert!(Cli::try_parse_from(["minheap-driver", "--seed", "1", "a"]).is_err());
        assert!(Cli::try_parse_from(["minheap-driver", "--sample", "-l", "3"]).is_err());
        assert!(Cli::try_parse_from(["minheap-driver", "-r", "2", "-l", "3", "--seed", "1"]).is_ok());
    }
}
