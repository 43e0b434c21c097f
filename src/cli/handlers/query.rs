use anyhow::Result;

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<bool> {
    let schema = ctx.schema();
    let vars = parse_variables(variables)?;
    execute_and_print(&schema, &query, vars)
}
