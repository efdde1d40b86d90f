use crate::cli::commands::load_context;
use crate::config::CandidateList;
use crate::core::{error::Result, ProcessExecutor};
use crate::node::{Node, NodeKind};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

const PIP_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn execute(node_dir: Option<&Path>) -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let ctx = load_context(node_dir).await?;
    let interpreter = ctx.config.python.interpreter.as_str();
    let mut all_ok = true;

    print!("Checking config... ");
    if ctx.manager.config_path().exists() {
        println!("{} ({})", "✓".green(), ctx.manager.config_path().display());
    } else {
        println!("{}", "○ Using defaults".yellow());
        println!("  Run {} to write one", "pip-nodes init".cyan());
    }

    print!("Checking {}... ", interpreter);
    let found =
        Path::new(interpreter).is_file() || ProcessExecutor::check_command_exists(interpreter);
    if found {
        let version =
            ProcessExecutor::execute_with_timeout(interpreter, &["--version"], PIP_PROBE_TIMEOUT)
                .await;
        match version {
            Ok(out) if out.success() => {
                // Python 2 prints its version on stderr
                let text = if out.stdout.trim().is_empty() {
                    &out.stderr
                } else {
                    &out.stdout
                };
                println!("{} ({})", "✓".green(), text.trim().yellow())
            }
            _ => println!("{}", "✓".green()),
        }
    } else {
        println!("{}", "✗ Not found".red());
        println!(
            "  Set {} in the config or the PIP_NODES_PYTHON variable",
            "python.interpreter".cyan()
        );
        all_ok = false;
    }

    print!("Checking pip... ");
    match ProcessExecutor::execute_with_timeout(
        interpreter,
        &["-m", "pip", "--version"],
        PIP_PROBE_TIMEOUT,
    )
    .await
    {
        Ok(out) if out.success() => println!("{} ({})", "✓".green(), out.stdout.trim().yellow()),
        Ok(out) => {
            println!("{}", "✗ Not available".red());
            if !out.stderr.trim().is_empty() {
                println!("  {}", out.stderr.trim());
            }
            all_ok = false;
        }
        Err(e) => {
            println!("{}", "✗ Failed to run".red());
            println!("  {}", e);
            all_ok = false;
        }
    }

    for kind in NodeKind::ALL {
        let node = Node::from_config(kind, &ctx.config, &ctx.nodes_dir);
        print!("Checking {} list... ", kind);
        match node.candidates().await {
            CandidateList::Candidates(items) => println!(
                "{} {} entr{} ({})",
                "✓".green(),
                items.len(),
                if items.len() == 1 { "y" } else { "ies" },
                node.candidates_path().display()
            ),
            CandidateList::Empty => {
                println!("{}", format!("○ {}", kind.empty_sentinel()).yellow());
                println!("  Edit {}", node.candidates_path().display().to_string().cyan());
            }
            CandidateList::ConfigError(e) => {
                println!("{}", "✗ Unreadable".red());
                println!("  {}", e);
                all_ok = false;
            }
        }
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}
