use super::*;

mod create_talk;
mod delete_talk;
mod update_talk;

fn talk_fields(title: &str) -> TalkFields {
    TalkFields {
        title: title.to_string(),
        abstract_text: "How to get started".to_string(),
        level: 200,
    }
}
