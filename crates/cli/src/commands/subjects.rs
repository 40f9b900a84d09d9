use validator::Validate;

use reviewer_client::subjects::SubjectPayload;
use reviewer_client::ReviewerApi;

use crate::cli::SubjectsCommand;
use crate::output;

pub async fn run(command: SubjectsCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        SubjectsCommand::List => {
            for subject in api.list_subjects().await? {
                output::print_subject(&subject);
            }
        }
        SubjectsCommand::Get { id } => output::print_subject(&api.get_subject(id).await?),
        SubjectsCommand::GetByName { name } => {
            output::print_subject(&api.get_subject_by_name(&name).await?)
        }
        SubjectsCommand::Create { name } => {
            let payload = SubjectPayload { name };
            payload.validate()?;
            let subject = api.create_subject(&payload).await?;
            println!("Created subject #{} {}", subject.id, subject.name);
        }
        SubjectsCommand::Update { id, name } => {
            let payload = SubjectPayload { name };
            payload.validate()?;
            let subject = api.update_subject(id, &payload).await?;
            println!("Updated subject #{} {}", subject.id, subject.name);
        }
        SubjectsCommand::Delete { id } => {
            api.delete_subject(id).await?;
            println!("Deleted subject #{id}");
        }
    }
    Ok(())
}
