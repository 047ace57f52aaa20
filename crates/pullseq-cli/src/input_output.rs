use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

use pullseq::{LineSequence, lines};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open the input as a lazy line sequence.
    ///
    /// Nothing is read until the first line is pulled, and the reader is
    /// released as soon as the stream ends.
    pub fn open_lines(
        &self,
    ) -> Result<LineSequence<Box<dyn BufRead>>, Box<dyn std::error::Error>> {
        let reader: Box<dyn BufRead> = match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        };
        Ok(lines(reader))
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
