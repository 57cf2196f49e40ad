use crate::cli::GlobalFlags;
use crate::cli::subcommands::DemandCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_json;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(
    action: &DemandCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resp = match action {
        DemandCommands::List { page, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            ctx.client.query_demand_records(*page, limit).await?
        }
        DemandCommands::Insert { project_data } => {
            let project_data = parse_json(project_data, "project_data")?;
            ctx.client.insert_demand_manager(project_data).await?
        }
        DemandCommands::Delete { id } => ctx.client.delete_demand_records(id).await?,
    };
    print_response(resp, flags).await
}
