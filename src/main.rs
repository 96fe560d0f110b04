// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod format;
mod git;
mod publish;
mod render;
mod sort;
mod table;
mod types;
mod ui;

use config::{PublishConfig, RunConfig};
use error::Result;
use format::CellFormatter;
use git::{GitCli, VersionControl};
use log::info;
use sort::SortOutcome;
use std::path::Path;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if args.push_without_publish() {
        ui::warning("--push has no effect without --publish");
    }

    // Resolve settings file + CLI into one immutable config
    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Read, sort, render, then either print or publish
fn run(config: &RunConfig) -> Result<()> {
    let mut table = table::read_table(&config.input)?;
    info!("Read {} rows from {}", table.rows.len(), config.input.display());

    let column = config.sort_column.as_deref();
    if sort::sort_rows(&mut table, column, config.order) == SortOutcome::Sorted {
        info!("Sorted by {} ({})", column.unwrap_or_default(), config.order.as_str());
    }

    let formatter = CellFormatter::new(&config.large_number_columns);
    let html = render::render_table(&table, &formatter);

    match config.publish {
        Some(ref publish) => publish_scan(publish, &html),
        None => {
            println!("{}", html);
            Ok(())
        }
    }
}

fn publish_scan(config: &PublishConfig, html: &str) -> Result<()> {
    let receipt = publish::publish(&config.scans_dir, html, &config.meta)?;
    ui::status(&format!("Saved: {}", receipt.html_path.display()));
    ui::status(&format!("Updated manifest: {}", receipt.manifest_path.display()));

    if config.push {
        let git = GitCli::new(&config.site_root);
        push_scan(&git, &receipt.scan_id, &config.commit_prefix)?;
        match git.head_hash() {
            Some(hash) => ui::status(&format!("Pushed to git ({})", hash)),
            None => ui::status("Pushed to git"),
        }
    }

    ui::status(&format!("\nScan published: {}", receipt.scan_id));
    if let Some(ref url) = config.site_url {
        ui::status(&format!("View at: {}", url));
    }
    Ok(())
}

/// Stage the scans directory (relative to the site root), commit, push
fn push_scan(vcs: &dyn VersionControl, scan_id: &str, commit_prefix: &str) -> Result<()> {
    let message = git::commit_message(commit_prefix, scan_id);
    git::notify(vcs, Path::new(config::SCANS_DIR_NAME), &message)
}
