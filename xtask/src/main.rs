//! xtask - Build tasks for pitchpx
//!
//! Run with: cargo run -p xtask -- <command>
//!
//! Commands:
//! - gen-docs: man pages and COMMANDS.md from the clap definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use pitchpx::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for pitchpx")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only generate man pages
        #[arg(long, conflicts_with = "markdown")]
        man: bool,

        /// Only generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            if !markdown {
                generate_man_pages(&output)?;
            }
            if !man {
                generate_markdown(&output)?;
            }
        }
    }
    Ok(())
}

/// One man page per command, named `pitchpx[-sub[-nested]].1`.
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, "pitchpx", &cmd)?;
    for sub in visible(&cmd) {
        let name = format!("pitchpx-{}", sub.get_name());
        write_man_page(&man_dir, &name, sub)?;
        for nested in visible(sub) {
            write_man_page(&man_dir, &format!("{}-{}", name, nested.get_name()), nested)?;
        }
    }
    Ok(())
}

fn write_man_page(dir: &Path, name: &str, cmd: &Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// COMMANDS.md: one section per subcommand with its arguments and long help.
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut md = String::from("# pitchpx Command Reference\n\n");
    md.push_str("This document is auto-generated from the CLI definitions.\n\n");
    for sub in visible(&cmd) {
        md.push_str(&format!("- [{0}](#pitchpx-{0})\n", sub.get_name()));
    }
    md.push_str("\n---\n\n## pitchpx\n\n");
    push_long_about(&mut md, &cmd);
    push_arguments(&mut md, &cmd);

    for sub in visible(&cmd) {
        md.push_str(&format!("## pitchpx {}\n\n", sub.get_name()));
        if let Some(about) = sub.get_about() {
            md.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut md, sub);
        push_long_about(&mut md, sub);

        for nested in visible(sub) {
            md.push_str(&format!("### pitchpx {} {}\n\n", sub.get_name(), nested.get_name()));
            if let Some(about) = nested.get_about() {
                md.push_str(&format!("{}\n\n", about));
            }
            push_arguments(&mut md, nested);
            push_long_about(&mut md, nested);
        }
        md.push_str("---\n\n");
    }
    md.push_str("*Generated by `cargo run -p xtask -- gen-docs`*\n");

    let path = output.join("COMMANDS.md");
    fs::write(&path, md)?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn visible(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

fn push_long_about(md: &mut String, cmd: &Command) {
    if let Some(long_about) = cmd.get_long_about() {
        md.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
}

fn push_arguments(md: &mut String, cmd: &Command) {
    let args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    if args.is_empty() {
        return;
    }
    for arg in args {
        let flag = if arg.is_positional() {
            format!("<{}>", arg.get_id().as_str().to_uppercase())
        } else {
            match (arg.get_short(), arg.get_long()) {
                (Some(s), Some(l)) => format!("-{}, --{}", s, l),
                (None, Some(l)) => format!("--{}", l),
                (Some(s), None) => format!("-{}", s),
                (None, None) => continue,
            }
        };
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        md.push_str(&format!("- `{}`: {}\n", flag, help));
    }
    md.push('\n');
}
