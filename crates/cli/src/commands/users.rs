use validator::Validate;

use reviewer_client::users::UserPayload;
use reviewer_client::ReviewerApi;

use crate::cli::UsersCommand;
use crate::output;

pub async fn run(command: UsersCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        UsersCommand::List => {
            for user in api.list_users().await? {
                output::print_user(&user);
            }
        }
        UsersCommand::Get { id } => output::print_user(&api.get_user(id).await?),
        UsersCommand::GetByUsername { username } => {
            output::print_user(&api.get_user_by_username(&username).await?)
        }
        UsersCommand::Create { username } => {
            let payload = UserPayload { username };
            payload.validate()?;
            let user = api.create_user(&payload).await?;
            println!("Created user #{} {}", user.id, user.username);
        }
        UsersCommand::Update { id, username } => {
            let payload = UserPayload { username };
            payload.validate()?;
            let user = api.update_user(id, &payload).await?;
            println!("Updated user #{} {}", user.id, user.username);
        }
        UsersCommand::Delete { id } => {
            api.delete_user(id).await?;
            println!("Deleted user #{id}");
        }
    }
    Ok(())
}
