use super::*;

mod create_speaker;
mod delete_speaker;
mod get_speakers;
mod update_speaker;

fn speaker_fields(first_name: &str, last_name: &str) -> SpeakerFields {
    SpeakerFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: None,
        company: Some("Wilder Minds".to_string()),
        company_url: None,
        blog_url: None,
        twitter: Some("@shawnwildermuth".to_string()),
        git_hub: None,
    }
}
