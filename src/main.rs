use clap::{Parser, Subcommand};

mod cmd;
mod employees;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian Income Tax Calculator for salaried employees (Old vs New regime)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-employee tax report under both regimes
    Report(cmd::report::ReportCommand),
    /// Aggregated batch totals and regime comparison
    Summary(cmd::summary::SummaryCommand),
    /// Check input rows without generating a report
    Validate(cmd::validate::ValidateCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
    /// Self-contained HTML report with comparison chart
    Html(cmd::html::HtmlCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Report(cmd) => cmd.exec(),
        Command::Summary(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
        Command::Html(cmd) => cmd.exec(),
    }
}
