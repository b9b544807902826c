use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "The schema file or an http(s) URL")]
    pub input: String,

    /// Global element to display; every global element below a schema box if omitted
    #[arg(long)]
    pub root: Option<String>,

    /// Print one diagram per global element
    #[arg(long, conflicts_with = "root")]
    pub all: bool,

    /// Only list the global elements and their namespaces
    #[arg(long, conflicts_with_all = ["root", "all"])]
    pub list_elements: bool,

    /// Show the elements below the displayed element without their content
    #[arg(long)]
    pub one_node_only: bool,

    /// Vertical position of the root box
    #[arg(long, allow_hyphen_values = true)]
    pub start_y: Option<i32>,

    #[arg(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
