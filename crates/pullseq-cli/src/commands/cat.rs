use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Trim surrounding whitespace from each line.
    #[arg(long)]
    trim: bool,

    /// Prefix each line with its 1-based line number.
    #[arg(long)]
    number: bool,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut writer = self.output.open_writer()?;

        // One lazy pipeline; each line is read, rendered, and written
        // before the next one is pulled off the input.
        let trim = self.trim;
        let number = self.number;
        let mut lineno = 0usize;
        let mut seq = self.input.open_lines()?.map(move |line| {
            let line = if trim {
                line.trim().to_string()
            } else {
                line
            };
            lineno += 1;
            if number {
                format!("{lineno}\t{line}")
            } else {
                line
            }
        });

        let mut written = 0usize;
        while let Some(line) = seq.pull() {
            writeln!(writer, "{line}")?;
            written += 1;
        }
        writer.flush()?;

        log::debug!("streamed {written} lines");

        // The sequence ends the same way on fault as on end of input;
        // the parked fault is what tells the two apart.
        if let Some(fault) = seq.generator_mut().source_mut().generator_mut().take_fault() {
            return Err(fault.into());
        }

        Ok(())
    }
}
