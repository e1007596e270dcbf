//! Parse command implementation.

use anyhow::{bail, Result};
use indicsig_config::AppConfig;
use indicsig_parser::SignalTextParser;

use super::read_message;
use crate::cli::ParseArgs;

pub async fn run(args: ParseArgs, config: &AppConfig) -> Result<()> {
    let message = read_message(args.message_file.as_deref())?;
    let parser = SignalTextParser::new(&config.dispatch.source_tag);

    match parser.parse(&message) {
        Ok(signal) => {
            println!("{}", serde_json::to_string_pretty(&signal)?);
            Ok(())
        }
        Err(reason) => bail!("Message could not be parsed: {}", reason),
    }
}
