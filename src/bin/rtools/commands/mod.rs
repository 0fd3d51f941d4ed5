mod fits;
mod inputs;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::ToFits(args) => fits::run(args),
        Command::ToRadmc3d(args) => inputs::run(args, ctx),
    }
}
