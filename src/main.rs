use clap::{ArgAction, Parser, Subcommand};
use roomcount::classifier;
use roomcount::config::Config;
use roomcount::dataset;
use roomcount::grouping;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomcount")]
#[command(about = "Infer room counts from unit type labels and group them by project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./roomcount.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a CSV file by project and print each project's unit types
    Group {
        /// CSV file with 'Project' and 'Unit Type' columns
        path: PathBuf,

        /// Also write the JSON export; `--export=PATH` picks the file
        /// (default: grouped_projects.json)
        #[arg(long, value_name = "PATH", require_equals = true)]
        export: Option<Option<PathBuf>>,
    },

    /// Print or write the grouped result as JSON
    Export {
        /// CSV file with 'Project' and 'Unit Type' columns
        path: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify unit type labels
    Classify {
        /// Unit type labels (e.g., "2BR Deluxe")
        #[arg(required = true)]
        unit_types: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Group { path, export } => {
            group_file(&path, export.as_ref().map(|p| p.as_deref()), cli.config.as_deref())
        }
        Commands::Export { path, output } => {
            export_file(&path, output.as_deref(), cli.config.as_deref())
        }
        Commands::Classify { unit_types } => {
            classify_labels(&unit_types);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_groups(
    path: &Path,
    config: &Config,
) -> Result<grouping::ProjectGroups, Box<dyn std::error::Error>> {
    let dataset = dataset::load_dataset_from_file(path, config.delimiter()?)?;
    let groups = grouping::group_by_project(&dataset)?;
    Ok(groups)
}

fn group_file(
    path: &Path,
    export: Option<Option<&Path>>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve(config_path)?;
    let groups = load_groups(path, &config)?;

    print!("{}", grouping::format_display(&groups));

    if let Some(output) = export {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.export.file_name));
        grouping::write_export(&groups, &output, config.export.indent)?;
        println!("Exported to {}", output.display());
    }

    Ok(())
}

fn export_file(
    path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve(config_path)?;
    let groups = load_groups(path, &config)?;

    if let Some(output_path) = output {
        grouping::write_export(&groups, output_path, config.export.indent)?;
        println!("Exported to {}", output_path.display());
    } else {
        println!("{}", grouping::to_export_json(&groups, config.export.indent)?);
    }

    Ok(())
}

fn classify_labels(unit_types: &[String]) {
    for (unit_type, room_count) in classifier::classify_all(unit_types) {
        println!("\"{}\" -> {}", unit_type, room_count);
    }
}
