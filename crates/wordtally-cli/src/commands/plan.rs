use std::io::Write;

use wordtally::SegmentPlan;

use crate::input_output::OutputArgs;

/// Args for the plan command.
#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Number of tokens (N).
    #[arg(long, short = 'n')]
    tokens: usize,

    /// Number of segments (K).
    #[arg(long, short = 'k')]
    segments: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl PlanArgs {
    /// Run the plan command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let plan = SegmentPlan::new(self.tokens, self.segments)?;

        let mut writer = self.output.open_writer()?;
        write_plan(&mut writer, &plan)?;
        Ok(())
    }
}

fn write_plan(
    writer: &mut dyn Write,
    plan: &SegmentPlan,
) -> std::io::Result<()> {
    for (idx, range) in plan.ranges().iter().enumerate() {
        writeln!(writer, "{idx}\t{range}\t{}", range.len())?;
    }
    writer.flush()
}
