use anyhow::Result;

use super::super::args::ParseCommand;
use super::{CommandResult, CommandSummary, ParseReport, helper::CommandContext};

pub fn parse(cmd: ParseCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load()?;
    let (input, collections) = ctx.read_collections(&cmd.common)?;

    Ok(CommandResult {
        summary: CommandSummary::Parse(ParseReport {
            input,
            collections,
            json: cmd.json,
        }),
    })
}
