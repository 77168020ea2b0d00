use anyhow::Result;
use clap::{Arg, Command};
use std::fs;

use showbound::{render_bounded, DefaultProvider};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("showbound")
        .about("Render a JSON document as bounded-width text")
        .arg(
            Arg::new("input")
                .help("Input JSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Length directive, e.g. L120; default caps output at 80 characters"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let directive = matches.get_one::<String>("format").map(String::as_str);

    let json_content = fs::read_to_string(input_file)?;
    let value: serde_json::Value = serde_json::from_str(&json_content)?;

    let output = render_bounded(&value, directive, &DefaultProvider)?;
    println!("{}", output);

    Ok(())
}
