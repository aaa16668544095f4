mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "extcalc",
    version,
    about = "Fire extinguisher quantity calculator (MChS RK fire safety norms)"
)]
struct Cli {
    /// Custom reference tables JSON (default: built-in MChS RK tables)
    #[arg(long, global = true, value_name = "FILE", env = "EXTCALC_TABLES")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the extinguisher requirement for one object
    Calc {
        /// Object type: production, service, petroleum or construction
        #[arg(long = "object", default_value = "production")]
        object_type: String,

        /// Protected floor area in m² ("1200", "350,5")
        #[arg(short, long, default_value = "")]
        area: String,

        /// Hazard category for production objects: A, B, V_GAS, V_SOLID, G, D, PUBLIC, FIRE_WORKS
        #[arg(short, long, default_value = "")]
        category: String,

        /// Facility key for service, petroleum and construction objects
        #[arg(short, long = "sub", default_value = "")]
        sub_category: String,

        /// Number of floors
        #[arg(short, long, default_value = "1")]
        floors: String,

        /// Automatic fire suppression (AUPT) is installed
        #[arg(long)]
        aupt: bool,

        /// Live electrical equipment is present
        #[arg(long)]
        electrical: bool,

        /// Fire hose cabinets are present
        #[arg(long)]
        cabinets: bool,

        /// Reserve of spare units, percent of the portable total
        #[arg(short, long, default_value = "10")]
        reserve: String,

        /// Read raw form values from a JSON file instead of the flags above
        #[arg(long, value_name = "FILE")]
        form: Option<PathBuf>,

        /// Output format: table (default), json, csv or text
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also write the result to a file (plain text for .txt, CSV otherwise)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show the reasoning behind every count
        #[arg(long)]
        verbose: bool,
    },
    /// Inspect reference tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// List object types and their facility keys
    List,
    /// Explain the norms of one object type
    Explain {
        /// Object type (e.g., "production", "petroleum")
        object_type: String,
    },
    /// Validate a custom reference tables file
    Validate {
        /// Path to JSON tables file
        file: PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc {
            object_type,
            area,
            category,
            sub_category,
            floors,
            aupt,
            electrical,
            cabinets,
            reserve,
            form,
            output,
            out,
            verbose,
        } => {
            let raw = extcalc_core::parsing::FormInput {
                object_type,
                area,
                category,
                sub_category,
                floors,
                has_aupt: aupt,
                has_electrical: electrical,
                has_cabinets: cabinets,
                reserve_percent: reserve,
            };
            commands::calc::run(
                raw,
                form,
                cli.tables.as_deref(),
                &output,
                out,
                verbose,
            )
        }
        Commands::Tables { action } => match action {
            TablesAction::List => commands::tables::list(cli.tables.as_deref()),
            TablesAction::Explain { object_type } => {
                commands::tables::explain(cli.tables.as_deref(), &object_type)
            }
            TablesAction::Validate { file } => commands::tables::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
