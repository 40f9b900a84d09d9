use std::path::Path;

use validator::Validate;

use reviewer_client::teachers::TeacherPayload;
use reviewer_client::ReviewerApi;

use crate::cli::TeachersCommand;
use crate::output;

pub async fn run(command: TeachersCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        TeachersCommand::List => {
            for teacher in api.list_teachers().await? {
                output::print_teacher(&teacher);
            }
        }
        TeachersCommand::Get { id } => output::print_teacher(&api.get_teacher(id).await?),
        TeachersCommand::Find { surname, name } => {
            output::print_teacher(&api.find_teacher_by_full_name(&surname, &name).await?)
        }
        TeachersCommand::BySubject { subject_name } => {
            for teacher in api.find_teachers_by_subject(&subject_name).await? {
                output::print_teacher(&teacher);
            }
        }
        TeachersCommand::Create {
            surname,
            name,
            patronym,
        } => {
            let payload = TeacherPayload {
                surname,
                name,
                patronym,
            };
            payload.validate()?;
            let teacher = api.create_teacher(&payload).await?;
            println!("Created teacher #{} {}", teacher.id, teacher.full_name());
        }
        TeachersCommand::Import { file } => import(api, &file).await?,
        TeachersCommand::Update {
            id,
            surname,
            name,
            patronym,
        } => {
            let payload = TeacherPayload {
                surname,
                name,
                patronym,
            };
            payload.validate()?;
            let teacher = api.update_teacher(id, &payload).await?;
            println!("Updated teacher #{} {}", teacher.id, teacher.full_name());
        }
        TeachersCommand::Delete { id } => {
            api.delete_teacher(id).await?;
            println!("Deleted teacher #{id}");
        }
        TeachersCommand::AssignSubject {
            teacher_id,
            subject_id,
        } => {
            api.assign_subject_to_teacher(teacher_id, subject_id).await?;
            println!("Assigned subject #{subject_id} to teacher #{teacher_id}");
        }
        TeachersCommand::UnassignSubject {
            teacher_id,
            subject_id,
        } => {
            api.remove_subject_from_teacher(teacher_id, subject_id)
                .await?;
            println!("Removed subject #{subject_id} from teacher #{teacher_id}");
        }
    }
    Ok(())
}

/// Bulk-create teachers from a JSON file holding an array of payloads.
async fn import(api: &ReviewerApi, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let payloads: Vec<TeacherPayload> = serde_json::from_str(&raw)?;
    for payload in &payloads {
        payload.validate()?;
    }
    let created = api.create_teachers_bulk(&payloads).await?;
    println!("Created {} teachers:", created.len());
    for teacher in &created {
        output::print_teacher(teacher);
    }
    Ok(())
}
