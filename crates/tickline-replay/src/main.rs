//! Tickline Replay - drive the timeline engine from a recorded input script
//!
//! Replays a YAML list of pointer/wheel/keyboard frames through
//! [`TimelineEngine`] and prints the resulting view. Useful for reproducing
//! interaction bugs without a GUI.
//!
//! ## Command line
//!
//! ```text
//! tickline-replay <script.yaml> [--config <path>]
//! ```
//!
//! Without `--config` the user config at the default location is used (or
//! built-in defaults when it does not exist). Set `RUST_LOG=debug` for a
//! per-frame trace.

mod script;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use tickline_core::config::{default_config_path, load_config, try_load_config, TimelineConfig};
use tickline_core::TimelineEngine;

const USAGE: &str = "usage: tickline-replay <script.yaml> [--config <path>]";

#[derive(Debug, PartialEq)]
struct ReplayArgs {
    script_path: PathBuf,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<ReplayArgs> {
    let mut script_path = None;
    let mut config_path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            path => {
                if script_path.is_some() {
                    bail!("more than one script given\n{}", USAGE);
                }
                script_path = Some(PathBuf::from(path));
            }
        }
    }

    let script_path = script_path.with_context(|| format!("missing script path\n{}", USAGE))?;
    Ok(ReplayArgs {
        script_path,
        config_path,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    // An explicit config must be valid; the default one falls back quietly
    let config: TimelineConfig = match &args.config_path {
        Some(path) => try_load_config(path)?,
        None => load_config(&default_config_path()),
    };

    let script = script::load_script(&args.script_path)?;
    log::info!(
        "Replaying {} frame entries from {:?} ({} ms/frame)",
        script.frames.len(),
        args.script_path,
        script.frame_ms
    );

    let mut engine = TimelineEngine::new(config);
    let summary = script::replay(&mut engine, &script, Instant::now());
    log::info!(
        "Replay finished: {} frames, {} consumed, {} rejected commands",
        summary.frames,
        summary.consumed,
        summary.rejected.len()
    );
    for error in &summary.rejected {
        log::warn!("Rejected: {}", error);
    }

    let view = engine.view();
    println!("{}", view);
    println!("Playhead: {}", view.playhead_tick);
    println!("{}", script::describe_selection(&view));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_script_only() {
        let parsed = parse_args(&args(&["drag.yaml"])).unwrap();
        assert_eq!(parsed.script_path, PathBuf::from("drag.yaml"));
        assert_eq!(parsed.config_path, None);
    }

    #[test]
    fn test_parse_config_flag_any_position() {
        let parsed = parse_args(&args(&["--config", "c.yaml", "drag.yaml"])).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("c.yaml")));
        assert_eq!(parsed.script_path, PathBuf::from("drag.yaml"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a.yaml", "--config"])).is_err());
        assert!(parse_args(&args(&["a.yaml", "b.yaml"])).is_err());
        assert!(parse_args(&args(&["a.yaml", "--verbose"])).is_err());
    }
}
