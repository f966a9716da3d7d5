//! dammsum - generate, verify and correct checksummed word sequences
//!
//! Exit status:
//! - 0: success (`verify` found a valid sequence, `correct` found candidates)
//! - 1: `verify` found an invalid sequence, or `correct` found no candidates
//! - 2: bad input (unknown word, wrong length, already valid, unreadable word list)

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use dammsum::wordlist::{infer_field_exponent, load_word_list};
use dammsum::{ChecksumEngine, CorrectionConfig, Corrector};

const DEFAULT_PAYLOAD_LEN: &str = "12";

const EXIT_OK: i32 = 0;
const EXIT_NEGATIVE: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let code = match run(cli().get_matches()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn cli() -> Command {
    let sequence_arg = || {
        Arg::new("sequence")
            .help("Words of the sequence (a quoted, space separated seed also works)")
            .required(true)
            .num_args(1..)
    };

    Command::new("dammsum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quasigroup checksums for mnemonic word sequences")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .help("Word list file, one word per line")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            Arg::new("bits")
                .short('k')
                .long("bits")
                .help("Field exponent k (word list has 2^k words; inferred when omitted)")
                .value_name("K")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("length")
                .short('m')
                .long("length")
                .help("Payload length in words, excluding the checksum word")
                .value_name("M")
                .value_parser(clap::value_parser!(usize))
                .default_value(DEFAULT_PAYLOAD_LEN),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for correction (0 = shared pool)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("generate")
                .visible_alias("g")
                .about("Generate random sequences with a checksum word")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .help("Number of sequences to generate")
                        .value_name("COUNT")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("checksum")
                .visible_alias("c")
                .about("Print the checksum word for a payload")
                .arg(sequence_arg()),
        )
        .subcommand(
            Command::new("verify")
                .visible_alias("v")
                .about("Verify a sequence that ends with its checksum word")
                .arg(sequence_arg()),
        )
        .subcommand(
            Command::new("correct")
                .visible_alias("r")
                .about("Search for single substitution or transposition repairs")
                .arg(sequence_arg()),
        )
}

fn run(matches: ArgMatches) -> Result<i32> {
    let engine = build_engine(&matches)?;

    match matches.subcommand() {
        Some(("generate", sub_matches)) => handle_generate(&engine, sub_matches),
        Some(("checksum", sub_matches)) => handle_checksum(&engine, sub_matches),
        Some(("verify", sub_matches)) => handle_verify(&engine, sub_matches),
        Some(("correct", sub_matches)) => {
            handle_correct(&engine, sub_matches, CorrectionConfig::from_args(&matches))
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified\n\nUse 'dammsum --help' for usage information"),
    }
}

fn build_engine(matches: &ArgMatches) -> Result<ChecksumEngine> {
    let path = matches
        .get_one::<String>("words")
        .context("A word list is required")?;
    let words = load_word_list(path)?;

    let k = match matches.get_one::<u32>("bits") {
        Some(&k) => k,
        None => infer_field_exponent(words.len()).with_context(|| {
            format!(
                "Word list {} has {} words, which is not a power of two",
                path,
                words.len()
            )
        })?,
    };
    let m = matches.get_one::<usize>("length").copied().unwrap_or(12);

    ChecksumEngine::new(k, m, words)
        .with_context(|| format!("Failed to build checksum engine from {}", path))
}

/// Positional words, splitting any argument that holds a whole quoted seed
fn sequence_from(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("sequence")
        .into_iter()
        .flatten()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect()
}

fn handle_generate(engine: &ChecksumEngine, matches: &ArgMatches) -> Result<i32> {
    let count = matches.get_one::<usize>("count").copied().unwrap_or(1);
    for _ in 0..count {
        println!("{}", engine.generate().join(" "));
    }
    Ok(EXIT_OK)
}

fn handle_checksum(engine: &ChecksumEngine, matches: &ArgMatches) -> Result<i32> {
    let payload = sequence_from(matches);
    let checksum = engine
        .checksum(&payload, false)
        .context("Failed to compute checksum")?;
    println!("{}", checksum);
    Ok(EXIT_OK)
}

fn handle_verify(engine: &ChecksumEngine, matches: &ArgMatches) -> Result<i32> {
    let sequence = sequence_from(matches);
    if engine.verify(&sequence).context("Failed to verify")? {
        println!("Sequence is valid.");
        Ok(EXIT_OK)
    } else {
        println!("Sequence is NOT valid.");
        Ok(EXIT_NEGATIVE)
    }
}

fn handle_correct(
    engine: &ChecksumEngine,
    matches: &ArgMatches,
    config: CorrectionConfig,
) -> Result<i32> {
    let sequence = sequence_from(matches);
    let candidates = Corrector::with_config(engine, config)
        .correct(&sequence)
        .context("Failed to correct")?;

    if candidates.is_empty() {
        println!("No single-error repair found.");
        return Ok(EXIT_NEGATIVE);
    }

    println!("Found {} candidate(s):\n", candidates.len());
    for candidate in &candidates {
        println!("  {}", candidate.words.join(" "));
        println!("    ({})", candidate.repair);
    }
    Ok(EXIT_OK)
}
