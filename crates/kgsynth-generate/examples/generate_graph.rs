use std::env;
use std::fs::File;
use std::path::PathBuf;

use kgsynth_config::load_config;
use kgsynth_generate::{GenerateOptions, GenerationEngine, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;
    let mut format = OutputFormat::default();
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = args.next().map(PathBuf::from),
            "--out" => out_path = args.next().map(PathBuf::from),
            "--format" => format = args.next().ok_or("missing --format value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            _ => {
                if config_path.is_none() {
                    config_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let config_path = config_path.ok_or("missing --config path")?;
    let validated = load_config(&config_path)?;

    let engine = GenerationEngine::new(GenerateOptions { seed });
    let result = engine.run(&validated.config)?;

    let out_path = out_path
        .unwrap_or_else(|| PathBuf::from(format!("graph.{}", format.extension())));
    let bytes = format.write(&result.store, File::create(&out_path)?)?;

    println!("{}", result.summary);
    println!("seed={} bytes={} out={}", result.seed, bytes, out_path.display());
    Ok(())
}
