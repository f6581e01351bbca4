use std::num::NonZeroUsize;

use wordtally::{
    FrequencyTable,
    ReducerOptions,
    SegmentPlan,
    TokenizerOptions,
    concurrency::threads::est_max_parallelism,
    tokenize::ASCII_WORD_PATTERN,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    render::{RenderFormat, SortOrder, render_table},
    timers::timeit,
};

/// Args for the count command.
#[derive(clap::Args, Debug)]
pub struct CountArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Number of segments (and counting tasks).
    ///
    /// Defaults to the available parallelism.
    #[arg(long, short = 'k')]
    segments: Option<usize>,

    /// Cap on concurrent worker threads.
    #[arg(long)]
    max_pool: Option<NonZeroUsize>,

    /// Run counting tasks one after another on the main thread.
    #[arg(long)]
    sequential: bool,

    /// Keep the original letter case of words.
    #[arg(long)]
    no_lowercase: bool,

    /// Only treat ASCII letters, digits, and '_' as word characters.
    #[arg(long)]
    ascii: bool,

    /// Output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,

    /// Display order.
    #[arg(long, default_value = "count")]
    sort: SortOrder,
}

impl CountArgs {
    fn tokenizer_options(&self) -> TokenizerOptions {
        let options = TokenizerOptions::default().with_lowercase(!self.no_lowercase);
        if self.ascii {
            options.with_pattern(ASCII_WORD_PATTERN)
        } else {
            options
        }
    }

    fn reducer_options(&self) -> ReducerOptions {
        let mut options = ReducerOptions::default().with_parallel(!self.sequential);
        if let Some(max_pool) = self.max_pool {
            options.set_max_pool(max_pool);
        }
        options
    }

    /// Run the count command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let text = self.input.read_all()?;
        let tokenizer = self.tokenizer_options().init()?;
        let tokens: Vec<String> = tokenizer.tokenize(&text);

        let segments = self.segments.unwrap_or_else(est_max_parallelism);
        let plan = SegmentPlan::new(tokens.len(), segments)?;

        log::info!("Segments (K):    {}", plan.segment_count());
        log::info!("Tokens (N):      {}", plan.token_count());
        log::info!(
            "Segment sizes:   {}..={} ({} non-empty)",
            plan.min_segment_len(),
            plan.max_segment_len(),
            plan.non_empty_count()
        );

        let reducer = self.reducer_options().init();
        let (elapsed, table) = timeit(|| reducer.reduce::<String, u64>(&tokens, plan.ranges()));
        let table: FrequencyTable<String, u64> = table?;

        log::info!(
            "Counted {} distinct words in {:.3?}",
            table.len(),
            elapsed
        );

        let mut writer = self.output.open_writer()?;
        render_table(&mut writer, &table, self.format, self.sort)?;

        Ok(())
    }
}
