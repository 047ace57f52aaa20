use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the head command.
#[derive(clap::Args, Debug)]
pub struct HeadArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Number of lines to deliver.
    #[arg(short = 'n', long, default_value = "10")]
    lines: usize,
}

impl HeadArgs {
    /// Run the head command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut seq = self.input.open_lines()?;
        let mut writer = self.output.open_writer()?;

        // Lines past the cutoff are never pulled, so the tail of the
        // input is never read at all.
        let mut delivered = 0usize;
        while delivered < self.lines {
            match seq.pull() {
                Some(line) => {
                    writeln!(writer, "{line}")?;
                    delivered += 1;
                }
                None => break,
            }
        }
        writer.flush()?;

        log::debug!("delivered {delivered} of {} requested lines", self.lines);

        if let Some(fault) = seq.generator_mut().take_fault() {
            return Err(fault.into());
        }

        Ok(())
    }
}
