use clap::Parser;
use ridership_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Ridership Processor - Bike Share Trip Counter");
    println!("=============================================");
    println!();
    println!("Count bike share trips from monthly CSV ridership exports and");
    println!("derive simple per-station statistics.");
    println!();
    println!("USAGE:");
    println!("    ridership-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    monthly     Aggregate per-month trip counts for a year");
    println!("    count       Count the trips of one explicit export file");
    println!("    station     Analyze start/end trips and top destinations for one station");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Aggregate monthly trip counts for 2024:");
    println!("    ridership-processor monthly --year 2024");
    println!();
    println!("    # Aggregate every year under a custom data root:");
    println!("    ridership-processor monthly --all-years --data-root /path/to/data");
    println!();
    println!("    # Analyze a station within one monthly export:");
    println!("    ridership-processor station --station 7041 \\");
    println!("                                --file \"./data/2024/Bike share ridership 2024-09.csv\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ridership-processor <COMMAND> --help");
}
