//! Smoke test binary for the shortcut registry and command resolver
//!
//! Run with: cargo run --bin smoke-test
//! Resolve for another OS: cargo run --bin smoke-test -- --os darwin
//! Use an alternate implementation: cargo run --bin smoke-test -- --impl GioOpenCommandImpl
//! Load a specific config strictly: cargo run --bin smoke-test -- --config ./config.json
//!
//! This tests:
//! 1. Config loading and logging setup
//! 2. Building and mutating a shortcut registry
//! 3. Resolving a command for the host (or `--os`) platform, twice
//! 4. Printing the argv the implementation would launch

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use launch_kit::commands::{ImplementationTable, Resolver};
use launch_kit::error::ResultExt;
use launch_kit::shortcuts::{ShortcutRecord, ShortcutRegistry};
use launch_kit::{config, logging, LaunchKitError};

#[derive(Parser, Debug)]
#[command(name = "smoke-test", about = "Exercise the launch-kit core")]
struct Args {
    /// Config file to load; unlike the default location, errors in it are fatal
    #[arg(long)]
    config: Option<PathBuf>,

    /// OS identifier to resolve for (defaults to the host)
    #[arg(long)]
    os: Option<String>,

    /// Logical command to resolve
    #[arg(long, default_value = "open")]
    command: String,

    /// Implementation name (defaults to the configured override or <Command>CommandImpl)
    #[arg(long = "impl")]
    impl_name: Option<String>,

    /// Shortcut to launch from the sample registry
    #[arg(long, default_value = "launch kit docs")]
    target: String,
}

/// (name, kind code, target, shortcut file)
const SAMPLE_SHORTCUTS: &[(&str, char, &str, &str)] = &[
    ("launch kit docs", 'u', "https://example.com/docs", "docs.url"),
    ("downloads", 'f', "~/Downloads", ""),
    ("terminal", 'x', "/usr/bin/gnome-terminal", "terminal.desktop"),
    ("display settings", 'c', "", ""),
    ("broken", 'u', "", "broken.url"),
];

fn sample_registry() -> ShortcutRegistry {
    let records = SAMPLE_SHORTCUTS
        .iter()
        .filter_map(|&(name, code, target, file)| {
            ShortcutRecord::from_code(name, code, Some(target.into()), Some(file.into()))
                .warn_on_err()
        })
        .map(|record| (record.name().to_string(), record));
    ShortcutRegistry::from_entries(records)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("=== Launch Kit Smoke Test ===\n");

    // Test 1: Config + logging
    println!("1. Loading config...");
    let (config_path, config) = match &args.config {
        Some(path) => match config::try_load_config_from(path) {
            Ok(config) => (path.clone(), config),
            Err(err) => {
                println!("   ✗ {:?}: {}", err.severity(), err.user_message());
                bail!(err);
            }
        },
        None => (config::config_path(), config::load_config()),
    };
    let _guard = logging::init(&config.logging);
    println!("   config -> {}", config_path.display());
    println!("   log    -> {}", logging::log_path(&config.logging).display());
    println!();

    // Test 2: Shortcut registry
    println!("2. Building shortcut registry...");
    let mut registry = sample_registry();
    let created = registry.updated_at();
    for (key, record) in registry.iter() {
        let lock = if record.can_unlearn() { "" } else { " (locked)" };
        println!("   [{}] {}{}", record.kind().code(), key, lock);
    }
    registry
        .delete("downloads")
        .context("sample registry should contain 'downloads'")?;
    println!(
        "   deleted 'downloads', {} left, changed since build: {}",
        registry.len(),
        registry.is_updated_since(created)
    );
    println!();

    // Test 3: Command resolution
    println!("3. Resolving '{}'...", args.command);
    let table = ImplementationTable::builtin();
    let resolver = match &args.os {
        Some(os) => Resolver::for_os(table, os),
        None => Resolver::new(table),
    }
    .with_config(&config.commands);

    let resolved = match &args.impl_name {
        Some(name) => resolver.resolve(&args.command, Some(name.as_str())),
        None => resolver.resolve_command(&args.command),
    };
    let handle = match resolved {
        Ok(handle) => handle,
        Err(e) => {
            let err = LaunchKitError::from(e);
            println!("   ✗ {:?}: {}", err.severity(), err.user_message());
            bail!(err);
        }
    };
    println!("   ✓ {}", handle.key());

    let again = resolver.resolve(&args.command, Some(handle.impl_name()))?;
    println!(
        "   second resolve cached: {} (lookups: {})",
        std::sync::Arc::ptr_eq(&handle, &again),
        resolver.lookup_count()
    );
    println!();

    // Test 4: Launch argv
    println!("4. Launching '{}'...", args.target);
    let Some(record) = registry.get(&args.target) else {
        bail!("no shortcut named '{}' in the sample registry", args.target);
    };
    let target = record.target().unwrap_or(record.name());
    let argv = handle.instantiate().launch_argv(target);
    println!("   argv -> {:?}", argv);
    println!();

    println!("=== Smoke Test Complete ===");
    Ok(())
}
