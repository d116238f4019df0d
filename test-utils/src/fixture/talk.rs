//! Talk fixtures for creating in-memory test data.

use entity::talk;

/// Default test talk title.
pub const DEFAULT_TITLE: &str = "Entity Framework From Scratch";

/// Default test talk abstract.
pub const DEFAULT_ABSTRACT: &str = "Working with a data store from the ground up.";

/// Default talk level.
pub const DEFAULT_LEVEL: i32 = 100;

/// Creates a talk entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - camp_id: `1`
/// - speaker_id: `1`
/// - title: `"Entity Framework From Scratch"`
/// - level: `100`
pub fn entity() -> talk::Model {
    entity_builder().build()
}

/// Creates a talk entity builder for customization.
pub fn entity_builder() -> TalkEntityBuilder {
    TalkEntityBuilder::default()
}

/// Builder for customized talk entity models.
pub struct TalkEntityBuilder {
    model: talk::Model,
}

impl Default for TalkEntityBuilder {
    fn default() -> Self {
        Self {
            model: talk::Model {
                id: 1,
                camp_id: 1,
                speaker_id: 1,
                title: DEFAULT_TITLE.to_string(),
                abstract_text: DEFAULT_ABSTRACT.to_string(),
                level: DEFAULT_LEVEL,
            },
        }
    }
}

impl TalkEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn camp_id(mut self, camp_id: i32) -> Self {
        self.model.camp_id = camp_id;
        self
    }

    pub fn speaker_id(mut self, speaker_id: i32) -> Self {
        self.model.speaker_id = speaker_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.model.title = title.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.model.level = level;
        self
    }

    pub fn build(self) -> talk::Model {
        self.model
    }
}
