use crate::cli::commands::load_context;
use crate::config::CandidateList;
use crate::core::error::{PipNodesError, Result};
use crate::node::{Node, NodeFlags, NodeKind, NodeResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub async fn execute(
    kind: NodeKind,
    selection: String,
    flags: NodeFlags,
    json: bool,
    node_dir: Option<&Path>,
) -> Result<()> {
    let ctx = load_context(node_dir).await?;
    let node = Node::from_config(kind, &ctx.config, &ctx.nodes_dir);

    let selection = match parse_index(&selection) {
        Some(index) => resolve_index(&node.candidates().await, index, kind)?,
        None => selection,
    };

    let progress = if json {
        None
    } else {
        let request = node.request(&selection, flags);
        if let Some(command) = node.installer().command_line(&request) {
            println!("{} {}", "→".blue().bold(), command.dimmed());
        }
        Some(spinner(&format!("Installing {} {}", kind, selection)))
    };

    let result = node.execute(&selection, flags).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    report(&result, json)?;

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn report(result: &NodeResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.success {
        println!("{} {}", "✓".green().bold(), result.status_message);
    } else {
        println!("{} {}", "✗".red().bold(), result.status_message);
    }
    Ok(())
}

/// `#N` selects the Nth configured candidate. Comment lines never become
/// candidates, so this cannot shadow a real entry.
fn parse_index(selection: &str) -> Option<usize> {
    selection.strip_prefix('#')?.trim().parse().ok()
}

fn resolve_index(list: &CandidateList, index: usize, kind: NodeKind) -> Result<String> {
    if !list.is_configured() {
        return Ok(list.options(kind).remove(0));
    }

    index
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .map(str::to_string)
        .ok_or_else(|| {
            PipNodesError::InvalidSelection(format!(
                "#{} is out of range; {} {}(s) configured",
                index,
                list.len(),
                kind
            ))
        })
}
