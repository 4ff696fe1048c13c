use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect project source files into a single prompt document.",
    long_about = "codeprompt walks the project tree, picks source files by extension or exact name, \nand writes them as fenced code blocks to code_prompt.txt for use as LLM input. \nRun without arguments to collect the current directory.",
    after_help = "EXAMPLES:\n  codeprompt\n  codeprompt --root ~/src/kernel --sorted\n  codeprompt -o prompts/kernel.txt\n  codeprompt --stdout | wc -c"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Directory to collect from (default: current dir).",
        help_heading = "Project Setup",
        value_name = "PATH"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Write the prompt to FILE (default: code_prompt.txt).",
        help_heading = "Output Control",
        value_name = "FILE",
        conflicts_with = "stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        help = "Print the prompt to standard output instead of saving it.",
        help_heading = "Output Control"
    )]
    pub stdout: bool,

    #[arg(
        long,
        help = "Sort directory listings by name for reproducible output.",
        help_heading = "Output Control"
    )]
    pub sorted: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,
}
