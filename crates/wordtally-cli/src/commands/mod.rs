mod count;
mod plan;

/// Subcommands for wtally
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Count word frequencies in a text.
    Count(count::CountArgs),

    /// Show how tokens would be split among segments.
    Plan(plan::PlanArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Count(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
        }
    }
}
