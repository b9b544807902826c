mod cli;
mod error;
mod outline;

use std::io::{self, Write};
use std::{fs, process, str::FromStr};

use clap::Parser;
use dt_xsd::{Registry, SchemaModel};
use dt_xsd_diagram::{diagram, LayoutOptions, ResolveOptions};
use log::{error, info, LevelFilter};
use roxmltree::{Document, ParsingOptions};

use cli::Cli;
use error::Error;
use outline::write_outline;

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Reads the schema document from a file or, for http(s) URLs, over the network.
fn load(input: &str) -> Result<String, Error> {
    if is_url(input) {
        info!("Fetching {input}");
        reqwest::blocking::get(input)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| Error::Fetch {
                url: input.to_string(),
                source,
            })
    } else {
        info!("Reading {input}");
        fs::read_to_string(input).map_err(|source| Error::Read {
            path: input.to_string(),
            source,
        })
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = load(&cli.input)?;
    let options = ParsingOptions {
        allow_dtd: cli.allow_dtd,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(&source, options)?;
    let model = SchemaModel::new(&document);
    if model.is_empty() {
        return Err(Error::NotASchema);
    }
    let registry = Registry::collect(&model);

    let mut out = io::stdout().lock();

    if cli.list_elements {
        for name in registry.element_names() {
            match registry.element_namespace(name) {
                Some(namespace) => writeln!(out, "{name}\t{namespace}")?,
                None => writeln!(out, "{name}")?,
            }
        }
        return Ok(());
    }

    let layout_options = LayoutOptions {
        start_y: cli.start_y,
    };

    if cli.all {
        for name in registry.element_names() {
            info!("Drawing {name}");
            let resolve_options = ResolveOptions {
                root: Some(name.to_string()),
                one_node_only: cli.one_node_only,
            };
            let tree = diagram(&model, &resolve_options, &layout_options);
            writeln!(out, "# {name}")?;
            write_outline(&mut out, &tree)?;
        }
        return Ok(());
    }

    if let Some(root) = &cli.root {
        if registry.lookup_element(root).is_none() {
            return Err(Error::UnknownElement(root.clone()));
        }
    }
    let resolve_options = ResolveOptions {
        root: cli.root.clone(),
        one_node_only: cli.one_node_only,
    };
    let tree = diagram(&model, &resolve_options, &layout_options);
    info!("Laid out {} symbols", tree.len());
    write_outline(&mut out, &tree)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if let Err(err) = run(&cli) {
        error!("{err}");
        process::exit(1);
    }
}
