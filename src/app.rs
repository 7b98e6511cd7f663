//! Application orchestrator.
//! Loads config, initializes logging, installs the Ctrl-C handler and runs the
//! selected subcommand.

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use pw_io::access::{AccessOutcome, CreationDisposition, FileAccess, FileShare, OpenRequest, wait_for_access};
use pw_io::cli::{Args, Command};
use pw_io::config::{CONFIG_ENV, create_template_config, default_config_path, load_config};
use pw_io::output as out;
use pw_io::{
    Config, DirectoryPath, FileName, FilePath, PathError, SortOrder, create_directory, enumerate_directories,
    enumerate_files, move_file, natural_cmp_with, recycle_directory, recycle_file, rename_file, shutdown,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }
    if args.init_config {
        let path = default_config_path().context("no config location on this platform")?;
        create_template_config(&path)?;
        out::print_success(&format!("A template pw-io config was written to: {}", path.display()));
        return Ok(());
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
    })?;

    // Dropping the guard on interrupt flushes the file writer.
    let guard_slot = Arc::new(Mutex::new(guard));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install signal handler")?;
    }

    debug!(?command, "starting pw-io");
    let result = dispatch(&args, &cfg, command);

    if let Err(e) = &result {
        match e.downcast_ref::<PathError>() {
            Some(pe) => error!(code = pe.code(), kind = pe.kind(), error = %pe, "command failed"),
            None => error!(error = %e, "command failed"),
        }
    }

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn print_config_location() {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {explicit}"));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default pw-io config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet; built-in defaults are used (--init-config writes one).");
            }
        }
        None => out::print_error("Could not determine a default config path on this platform."),
    }
}

fn dispatch(args: &Args, cfg: &Config, command: Command) -> Result<()> {
    match command {
        Command::Info { path, dir } => info_cmd(&path, dir),
        Command::Sort { mut names, descending } => {
            let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
            let cmp = natural_cmp_with(order);
            names.sort_by(|a, b| cmp(a.as_str(), b.as_str()));
            names.iter().for_each(|n| out::print_user(n));
            Ok(())
        }
        Command::Ls { dir, pattern, recursive, dirs } => {
            let dir = DirectoryPath::new(&dir)?;
            if dirs {
                for d in enumerate_directories(&dir, pattern.as_deref(), recursive)? {
                    out::print_user(d?.as_str());
                }
            } else {
                for f in enumerate_files(&dir, pattern.as_deref(), recursive)? {
                    out::print_user(f?.as_str());
                }
            }
            Ok(())
        }
        Command::Wait { file, write, .. } => {
            let file = FilePath::new(&file)?;
            let request = if write {
                OpenRequest::new(FileAccess::ReadWrite, FileShare::NONE, CreationDisposition::OpenExisting)
            } else {
                OpenRequest::shared_read()
            };
            let policy = args.retry_policy(cfg);
            match wait_for_access(&file, &request, policy)? {
                AccessOutcome::Opened(_) => {
                    out::print_success(&format!("{file} is accessible"));
                    Ok(())
                }
                AccessOutcome::TimedOut => bail!("timed out after {:?} waiting for {file}", policy.timeout),
                AccessOutcome::Cancelled => {
                    out::print_warn("wait cancelled");
                    Ok(())
                }
            }
        }
        Command::Mv { file, dir } => {
            let moved = move_file(&FilePath::new(&file)?, &DirectoryPath::new(&dir)?)?;
            info!(dest = %moved, "move completed");
            out::print_user(moved.as_str());
            Ok(())
        }
        Command::Rename { file, name } => {
            let renamed = rename_file(&FilePath::new(&file)?, &FileName::new(&name)?)?;
            out::print_user(renamed.as_str());
            Ok(())
        }
        Command::Mkdir { dir } => {
            let created = create_directory(&DirectoryPath::new(&dir)?)?;
            out::print_user(created.as_str());
            Ok(())
        }
        Command::Recycle { path } => {
            let as_dir = DirectoryPath::new(&path)?;
            if as_dir.exists() {
                recycle_directory(&as_dir)?;
            } else {
                recycle_file(&FilePath::new(&path)?)?;
            }
            out::print_success(&format!("recycled {path}"));
            Ok(())
        }
    }
}

fn info_cmd(raw: &str, force_dir: bool) -> Result<()> {
    let as_dir = DirectoryPath::new(raw)?;
    if force_dir || as_dir.exists() || raw.ends_with(std::path::is_separator) {
        out::print_field("directory", as_dir.as_str());
        out::print_field("name", as_dir.name().map(|n| n.as_str()).unwrap_or(""));
        out::print_field("parent", as_dir.parent().map(DirectoryPath::as_str).unwrap_or(""));
        out::print_field("exists", &as_dir.exists().to_string());
        return Ok(());
    }
    let file = FilePath::new(raw)?;
    out::print_field("file", file.as_str());
    out::print_field("directory", file.directory().as_str());
    out::print_field("directory name", file.directory_name().map(|n| n.as_str()).unwrap_or(""));
    out::print_field("name", file.name().as_str());
    out::print_field("stem", file.name_without_extension().as_str());
    out::print_field("extension", file.extension().as_str());
    out::print_field("exists", &file.exists().to_string());
    Ok(())
}
