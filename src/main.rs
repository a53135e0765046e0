// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use section_debugger::config::{load_config, DebuggerConfig};
use section_debugger::observability::init_tracing;
use section_debugger::sinks::TracingSink;
use section_debugger::{Debugger, DividerStyle};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(args.get(1).map(String::as_str)) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path))?,
        None => DebuggerConfig::default(),
    };

    let mut debugger = Debugger::with_config(TracingSink::new(), config);

    debugger.info("Section debugger walkthrough");
    debugger.blank();

    let startup = debugger.create_default("startup");
    startup.info("reading environment");
    startup.info("environment ok");
    drop(startup);

    let plugins = debugger.create("plugins", DividerStyle::Thin);
    plugins.info("scanning plugin directory");
    plugins.warning("plugin 'legacy' is deprecated");
    drop(plugins);

    let network = debugger.create("network", DividerStyle::Star);
    network.error("connection refused, retrying later");
    network.finish();

    debugger.finish("plugins");
    if let Some(startup) = debugger.section_mut("startup") {
        startup.info("all stages visited");
    }
    debugger.finish("startup");

    // no-op
    debugger.finish("never_created");

    debugger.divider(DividerStyle::Underscore);
    debugger.info("Walkthrough complete");
    Ok(())
}
