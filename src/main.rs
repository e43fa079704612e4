//! CLI entry point for the graph-based Ishihara plate generator

use clap::Parser;
use gbipg::io::cli::{Cli, FileProcessor};

fn main() -> gbipg::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
