// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{bail, Context, Result};
use pcset::config::{validate, AnalysisFile};
use pcset::query::QueryEngine;
use pcset::relation::classify;
use pcset::set::{normal_order, PitchClassSet};
use pcset::StaticRegistry;
use std::env;
use tracing::debug;

fn print_usage() {
    println!("pcset - Pitch-Class Set Analysis");
    println!();
    println!("Usage: pcset [--config FILE] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --prime <PCS>           Normal order and prime form of a set");
    println!("  --vector <PCS>          Interval-class vector of a set");
    println!("  --profile <PCS>         Catalogue profile of a set's class");
    println!("  --classify <PCS> <PCS>  Relation between two set classes");
    println!("  --z-pairs <K>           Z-related pairs of cardinality K");
    println!("  --catalog <K>           Every set class of cardinality K");
    println!("  --help                  Show this help message");
    println!();
    println!("PCS is a comma-separated list of integers, e.g. 0,4,7");
}

fn parse_pcs(arg: &str) -> Result<PitchClassSet> {
    let pcs = arg
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| anyhow::anyhow!("Invalid pitch class: {}", s))
        })
        .collect::<Result<Vec<i64>>>()?;
    Ok(PitchClassSet::new(pcs))
}

fn parse_cardinality(arg: &str) -> Result<usize> {
    arg.parse()
        .map_err(|_| anyhow::anyhow!("Invalid cardinality: {}", arg))
}

fn required<'a>(args: &'a [String], index: usize, command: &str) -> Result<&'a str> {
    match args.get(index) {
        Some(arg) => Ok(arg.as_str()),
        None => bail!("{} requires an argument (see --help)", command),
    }
}

fn init_logging(config: &AnalysisFile) -> Result<()> {
    let level = config.logging.level()?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn init_threads(config: &AnalysisFile) -> Result<()> {
    if let Some(threads) = config.query.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
        debug!(threads, "configured worker pool");
    }
    Ok(())
}

fn run(command: &str, args: &[String], config: &AnalysisFile) -> Result<()> {
    let engine = || {
        QueryEngine::with_options(
            StaticRegistry::from(&config.registry),
            (&config.query).into(),
        )
    };

    match command {
        "--prime" => {
            let set = parse_pcs(required(args, 1, command)?)?;
            let class = engine().lookup(set);
            println!("Set:          {}", set);
            println!("Normal order: {}", normal_order(set));
            println!("Prime form:   {}", class.prime_form());
            if let Some(name) = class.name() {
                println!("Name:         {}", name);
            }
        }
        "--vector" => {
            let set = parse_pcs(required(args, 1, command)?)?;
            println!("{}", set.interval_class_vector());
        }
        "--profile" => {
            let set = parse_pcs(required(args, 1, command)?)?;
            let engine = engine();
            let profile = engine.profile(&engine.lookup(set));
            let attributes: Vec<String> =
                profile.modal_attributes.iter().map(|a| a.to_string()).collect();
            println!("Name:          {}", profile.name.as_deref().unwrap_or("-"));
            println!("Prime form:    {}", profile.prime_form);
            println!("ICV:           {}", profile.vector);
            println!(
                "Z-correspondent: {}",
                profile.z_correspondent.map(|z| z.label()).unwrap_or_else(|| "-".to_string())
            );
            println!("Symmetry:      T {} / I {}", profile.symmetry.0, profile.symmetry.1);
            println!("Modal:         {}", attributes.join(" "));
            println!("Nexus sets:    {}", profile.nexus_memberships.join(" "));
        }
        "--classify" => {
            let left = parse_pcs(required(args, 1, command)?)?;
            let right = parse_pcs(required(args, 2, command)?)?;
            let engine = engine();
            let result = classify(&engine.lookup(left), &engine.lookup(right));
            println!("{}", result);
        }
        "--z-pairs" => {
            let k = parse_cardinality(required(args, 1, command)?)?;
            for pair in engine().z_pairs(k)? {
                println!("{}  {}", pair.left, pair.right);
            }
        }
        "--catalog" => {
            let k = parse_cardinality(required(args, 1, command)?)?;
            let engine = engine();
            for class in engine.set_classes(k)? {
                println!("{}", class);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = if args.first().map(String::as_str) == Some("--config") {
        let path = required(&args, 1, "--config")?.to_string();
        args.drain(..2);
        AnalysisFile::load(&path)?
    } else {
        AnalysisFile::default()
    };
    validate(&config)?;
    init_logging(&config)?;
    init_threads(&config)?;

    let Some(command) = args.first().cloned() else {
        println!("pcset - Pitch-Class Set Analysis");
        println!("Run with --help for usage information");
        return Ok(());
    };

    run(&command, &args, &config)
}
