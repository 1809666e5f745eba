use crate::{
    client::{
        api::helper::{get_json, proxied},
        model::error::ApiError,
    },
    model::command::{CommandDto, CommandListDto},
};

pub async fn get_commands() -> Result<Vec<CommandDto>, ApiError> {
    let list: CommandListDto = get_json(&proxied("/api/commands")).await?;
    Ok(list.commands)
}
