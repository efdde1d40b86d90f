use crate::cli::commands::load_context;
use crate::core::error::Result;
use crate::node::{Node, NodeKind};
use colored::Colorize;
use std::path::Path;

pub async fn execute(node_dir: Option<&Path>) -> Result<()> {
    let ctx = load_context(node_dir).await?;

    if ctx.manager.ensure_initialized().await? {
        println!(
            "{} Wrote default config to {}",
            "✓".green().bold(),
            ctx.manager.config_path().display().to_string().yellow()
        );
    } else {
        println!(
            "{} Config already exists at {}",
            "ℹ".blue().bold(),
            ctx.manager.config_path().display()
        );
    }

    for kind in NodeKind::ALL {
        let node = Node::from_config(kind, &ctx.config, &ctx.nodes_dir);
        let existed = node.candidates_path().exists();
        let list = node.candidates().await;

        if existed {
            println!(
                "{} {} list already exists at {} ({} entr{})",
                "ℹ".blue().bold(),
                kind,
                node.candidates_path().display(),
                list.len(),
                if list.len() == 1 { "y" } else { "ies" }
            );
        } else if node.candidates_path().exists() {
            println!(
                "{} Created {} list at {}",
                "✓".green().bold(),
                kind,
                node.candidates_path().display().to_string().yellow()
            );
        } else {
            println!(
                "{} Could not create {} list at {}",
                "⚠".yellow().bold(),
                kind,
                node.candidates_path().display()
            );
        }
    }

    Ok(())
}
