use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use safeincloud2pass::safeincloud::pass::PassCli;
use safeincloud2pass::safeincloud::service::ImportService;
use safeincloud2pass::safeincloud::types::ImportOptions;
use safeincloud2pass::safeincloud::xml_parser;

/// Import a SafeInCloud XML export into pass, the standard unix password manager.
#[derive(Parser, Debug)]
#[command(name = "safeincloud2pass", version, about)]
struct Cli {
    /// Path to the SafeInCloud .xml export file.
    xmlfile: PathBuf,

    /// Include sample cards (default: excluded).
    #[arg(long)]
    samples: bool,

    /// Include template cards (default: excluded).
    #[arg(long)]
    templates: bool,

    /// Include deleted cards (default: excluded).
    #[arg(long)]
    deleted: bool,

    /// Resolve and report every card but never invoke pass.
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON.
    #[arg(long)]
    json: bool,

    /// Path to the pass binary (default: found in PATH).
    #[arg(long, value_name = "PATH")]
    pass_bin: Option<String>,

    /// Password store directory (sets PASSWORD_STORE_DIR for pass).
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    println!("loading: {}", cli.xmlfile.display());
    let content = match fs::read_to_string(&cli.xmlfile) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: could not read {}: {}", cli.xmlfile.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let db = match xml_parser::parse_database(&content) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("OK");

    let options = ImportOptions {
        include_samples: cli.samples,
        include_templates: cli.templates,
        include_deleted: cli.deleted,
        dry_run: cli.dry_run,
    };

    let mut store = PassCli::new();
    if let Some(ref bin) = cli.pass_bin {
        store = store.with_cli_path(bin);
    }
    if let Some(dir) = cli.store_dir {
        store = store.with_store_dir(dir);
    }

    let summary = ImportService::new(store, options).run(&db);

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: {}", e),
        }
    } else if cli.dry_run {
        println!(
            "done (dry run): {} would import, {} skipped (of {})",
            summary.planned, summary.skipped, summary.total
        );
    } else {
        println!(
            "done: {} imported, {} skipped, {} failed (of {})",
            summary.imported, summary.skipped, summary.failed, summary.total
        );
    }

    // Skips never affect the exit code; failed hand-offs do.
    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
