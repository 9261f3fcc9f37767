//! CLI Argument Parsing
//!
//! ```text
//! llmake world.llm                  # list entries
//! llmake world.llm --makefile -o Makefile
//! llmake world.llm city -o city.prompt
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Output destination meaning standard output
pub const STDOUT: &str = "-";

/// llmake - build chained LLM prompts with make
#[derive(Parser, Debug)]
#[command(name = "llmake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt source document
    pub file: PathBuf,

    /// Prompt to assemble
    #[arg(conflicts_with = "makefile")]
    pub prompt: Option<String>,

    /// Emit a Makefile for all prompts
    #[arg(long)]
    pub makefile: bool,

    /// Output file ("-" for standard output)
    #[arg(short, long, default_value = STDOUT)]
    pub output: PathBuf,

    /// Print the entry listing as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT
    }
}
