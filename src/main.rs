// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;
use clap::Parser;

use hello_world::{greeter, log};

/// Print a greeting to stderr.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_BIN_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {}

fn main() -> Result<()> {
    let _args = App::parse();
    log::init()?;
    greeter::greet();
    Ok(())
}
