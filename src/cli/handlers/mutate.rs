use anyhow::Result;

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<bool> {
    let schema = ctx.schema();
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    execute_and_print(&schema, &document, vars)
}
