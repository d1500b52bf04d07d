mod commands;
mod logging;
mod output;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use saag_core::model::LabPanel;
use saag_core::parsing::values;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "saag",
    version,
    about = "Ascitic fluid interpretation: SAAG, Light criteria and SBP alerts"
)]
struct Cli {
    /// Increase log detail on stderr (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret ascitic fluid results from a file and/or command-line values
    Interpret {
        /// Lab sheet (text), xlsx workbook or JSON panel
        input_file: Option<PathBuf>,

        #[command(flatten)]
        values: PanelArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Narrative language: en (default) or id
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Accept values outside the usual entry ranges
        #[arg(long)]
        no_range_check: bool,
    },
    /// Parse a lab sheet or workbook into a JSON panel (without interpreting)
    Parse {
        /// Path to a text sheet or xlsx workbook
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed panel to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the interpretation algorithm and its thresholds
    Reference {
        /// Narrative language: en (default) or id
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// List accepted input fields with units and entry ranges
    Fields,
}

/// Lab values given directly on the command line. These override file values.
#[derive(Args)]
struct PanelArgs {
    /// Serum albumin (g/dL)
    #[arg(long, value_parser = parse_decimal_arg)]
    serum_albumin: Option<Decimal>,
    /// Serum total protein (g/dL)
    #[arg(long, value_parser = parse_decimal_arg)]
    serum_protein: Option<Decimal>,
    /// Ascitic total protein (g/dL)
    #[arg(long, value_parser = parse_decimal_arg)]
    ascites_protein: Option<Decimal>,
    /// Measured ascitic albumin (g/dL); replaces the estimate
    #[arg(long, value_parser = parse_decimal_arg)]
    ascites_albumin: Option<Decimal>,
    /// PMN count (cells/µL)
    #[arg(long, value_parser = parse_decimal_arg)]
    pmn: Option<Decimal>,
    /// Serum LDH (U/L)
    #[arg(long, value_parser = parse_decimal_arg)]
    serum_ldh: Option<Decimal>,
    /// Upper limit of normal for serum LDH (U/L)
    #[arg(long, value_parser = parse_decimal_arg)]
    ldh_uln: Option<Decimal>,
    /// Ascitic LDH (U/L)
    #[arg(long, value_parser = parse_decimal_arg)]
    ascites_ldh: Option<Decimal>,
    /// Serum glucose (mg/dL)
    #[arg(long, value_parser = parse_decimal_arg)]
    serum_glucose: Option<Decimal>,
    /// Ascitic glucose (mg/dL)
    #[arg(long, value_parser = parse_decimal_arg)]
    ascites_glucose: Option<Decimal>,
    /// Rivalta test result: positive or negative
    #[arg(long, value_name = "RESULT", value_parser = parse_rivalta_arg)]
    rivalta: Option<bool>,
    /// Fluid color, free text (e.g. "straw", "milky", "bloody")
    #[arg(long)]
    color: Option<String>,
    /// Turbidity, free text (e.g. "clear", "cloudy", "chylous")
    #[arg(long)]
    turbidity: Option<String>,
    /// Mononuclear cell count (cells/µL)
    #[arg(long, value_parser = parse_decimal_arg)]
    mn_count: Option<Decimal>,
    /// Red blood cell count (cells/µL)
    #[arg(long, value_parser = parse_decimal_arg)]
    rbc_count: Option<Decimal>,
}

impl PanelArgs {
    fn into_panel(self) -> LabPanel {
        LabPanel {
            serum_albumin: self.serum_albumin,
            serum_protein: self.serum_protein,
            ascites_protein: self.ascites_protein,
            ascites_albumin_override: self.ascites_albumin,
            pmn: self.pmn,
            serum_ldh: self.serum_ldh,
            ldh_uln: self.ldh_uln,
            ascites_ldh: self.ascites_ldh,
            serum_glucose: self.serum_glucose,
            ascites_glucose: self.ascites_glucose,
            rivalta_positive: self.rivalta,
            color: self.color,
            turbidity: self.turbidity,
            mn_count: self.mn_count,
            rbc_count: self.rbc_count,
        }
    }
}

fn parse_decimal_arg(s: &str) -> Result<Decimal, String> {
    values::parse_decimal(s).map_err(|e| e.to_string())
}

fn parse_rivalta_arg(s: &str) -> Result<bool, String> {
    match values::parse_flag(s) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Err("expected positive or negative".into()),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Interpret {
            input_file,
            values,
            output,
            lang,
            no_range_check,
        } => commands::interpret::run(
            input_file,
            values.into_panel(),
            &output,
            &lang,
            !no_range_check,
        ),
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Reference { lang } => commands::reference::run(&lang),
        Commands::Fields => commands::reference::fields(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
