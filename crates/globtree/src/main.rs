use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use globtree::app::explorer::FileExplorer;
use globtree::domain::model::FileCount;
use globtree::infra::config::Config;

#[derive(Parser)]
#[command(
    name = "globtree",
    version,
    about = "List files under a root as a tree and resolve selections back to paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree of matching paths as JSON
    Ls {
        /// Root directory to list from
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Glob selecting which paths to list, e.g. "**/*.{py,js}"
        #[arg(long)]
        glob: Option<String>,
        /// Glob excluding paths from the listing
        #[arg(long)]
        ignore_glob: Option<String>,
    },
    /// Resolve selections to absolute paths under the root
    Resolve {
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Selection mode: single, multiple, or directory
        #[arg(long)]
        file_count: Option<String>,
        /// One selection per argument, segments joined with '/'
        #[arg(required = true)]
        selections: Vec<String>,
    },
    /// Convert paths back to root-relative segment lists, as JSON
    Segments {
        #[arg(long, default_value = ".")]
        root: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

fn main() -> Result<()> {
    globtree::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ls {
            root,
            glob,
            ignore_glob,
        } => {
            let config = Config::load()?;
            let explorer = FileExplorer::new(root)?
                .with_glob(glob.unwrap_or(config.defaults.glob))
                .with_ignore_glob(ignore_glob.or(config.defaults.ignore_glob));
            let tree = explorer.list_tree()?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Commands::Resolve {
            root,
            file_count,
            selections,
        } => {
            let config = Config::load()?;
            let file_count: FileCount = file_count
                .unwrap_or(config.defaults.file_count)
                .parse()?;
            let explorer = FileExplorer::new(root)?.with_file_count(file_count);

            let selections: Vec<Vec<String>> = selections
                .iter()
                .map(|selection| selection.split('/').map(str::to_owned).collect())
                .collect();
            let resolved = explorer.resolve_selection(&selections)?;
            for path in resolved.into_paths() {
                println!("{}", path.display());
            }
        }
        Commands::Segments { root, paths } => {
            let explorer = FileExplorer::new(root)?;
            let segments = explorer.to_display_segments(&paths);
            println!("{}", serde_json::to_string_pretty(&segments)?);
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }
    Ok(())
}
