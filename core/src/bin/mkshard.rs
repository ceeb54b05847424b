use std::io::{self, BufRead, Read};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use protoseed_core::params::{DEFAULT_SHARE_COUNT, DEFAULT_THRESHOLD};
use protoseed_core::uri::{encode_payload, is_payload, parse_payload};
use protoseed_core::{ShamirShareSet, SplitParams};

#[derive(Parser)]
#[command(about = "Split secrets into protoseed shards and recover them")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a payload URI or plain text into shard URIs.
    Split {
        /// Shares required to recover.
        #[arg(short = 'k', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
        /// Shares to produce.
        #[arg(short = 'n', long, default_value_t = DEFAULT_SHARE_COUNT)]
        shares: usize,
        /// Field label; the smallest fitting field when omitted.
        #[arg(long)]
        modulus: Option<u32>,
        /// Recover from the first k shards and compare with the input.
        #[arg(long)]
        verify: bool,
        /// Read from stdin when omitted.
        input: Option<String>,
    },
    /// Recover the payload URI from shard URIs.
    Recover {
        /// Read one shard per line from stdin when omitted.
        shards: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Args::parse().command {
        Command::Split {
            threshold,
            shares,
            modulus,
            verify,
            input,
        } => {
            let input = match input {
                Some(input) => input,
                None => read_stdin()?,
            };
            let params = SplitParams {
                threshold,
                share_count: shares,
                modulus,
            };
            split(&input, &params, verify)
        }
        Command::Recover { shards } => {
            let shards = if shards.is_empty() {
                io::stdin()
                    .lock()
                    .lines()
                    .collect::<io::Result<Vec<_>>>()
                    .context("reading shards from stdin")?
                    .into_iter()
                    .filter(|line| !line.trim().is_empty())
                    .collect()
            } else {
                shards
            };
            recover(&shards)
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading input from stdin")?;
    Ok(input)
}

fn split(input: &str, params: &SplitParams, verify: bool) -> anyhow::Result<()> {
    let payload = if is_payload(input) {
        parse_payload(input)?
    } else {
        input.as_bytes().to_vec()
    };

    let set = ShamirShareSet::split(&payload, params)?;
    let shards = set.to_uris();
    for shard in &shards {
        println!("{shard}");
    }

    if verify {
        let recovered =
            ShamirShareSet::from_uris(&shards[..params.threshold])?.recover()?;
        if recovered != payload {
            bail!("recovered payload does not match the input");
        }
        eprintln!("verified: {}", encode_payload(&recovered));
    }

    Ok(())
}

fn recover(shards: &[String]) -> anyhow::Result<()> {
    if shards.is_empty() {
        bail!("no shards given");
    }
    let set = ShamirShareSet::from_uris(shards)?;
    let secret = set.recover()?;
    println!("{}", encode_payload(&secret));
    Ok(())
}
