use crate::commands::{cat::CatArgs, head::HeadArgs};

pub mod cat;
pub mod head;

/// Subcommands for pullseq-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Stream lines from input to output.
    Cat(CatArgs),

    /// Stream the leading lines of input to output, then stop reading.
    Head(HeadArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Head(cmd) => cmd.run(),
        }
    }
}
