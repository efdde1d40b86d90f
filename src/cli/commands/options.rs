use crate::cli::commands::load_context;
use crate::config::CandidateList;
use crate::core::error::Result;
use crate::node::{InputField, Node, NodeKind};
use colored::Colorize;
use std::path::Path;

pub async fn execute(kind: NodeKind, json: bool, node_dir: Option<&Path>) -> Result<()> {
    let ctx = load_context(node_dir).await?;
    let node = Node::from_config(kind, &ctx.config, &ctx.nodes_dir);

    if json {
        let schema = node.describe().await;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let list = node.candidates().await;
    println!(
        "{} ({})",
        format!("Configured {} candidates", kind).bold(),
        node.candidates_path().display().to_string().dimmed()
    );
    println!();

    match &list {
        CandidateList::Candidates(items) => {
            for (i, item) in items.iter().enumerate() {
                println!("  {:>2}. {}", (i + 1).to_string().cyan(), item);
            }
        }
        CandidateList::Empty => {
            println!("  {}", kind.empty_sentinel().yellow());
            println!(
                "  Add one entry per line to {}",
                node.candidates_path().display().to_string().cyan()
            );
        }
        CandidateList::ConfigError(_) => {
            println!("  {}", list.options(kind)[0].red());
        }
    }

    println!();
    let flags: Vec<&str> = crate::node::NodeSchema::new(kind, Vec::new())
        .required
        .iter()
        .filter(|field| matches!(field, InputField::Boolean { .. }))
        .map(InputField::name)
        .collect();
    println!("Flags: {}", flags.join(", ").yellow());
    println!(
        "Use {} to install the first entry",
        format!("pip-nodes {} '#1'", kind).cyan()
    );

    Ok(())
}
