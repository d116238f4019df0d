//! Speaker fixtures for creating in-memory test data.

use entity::speaker;

/// Default test speaker first name.
pub const DEFAULT_FIRST_NAME: &str = "Shawn";

/// Default test speaker last name.
pub const DEFAULT_LAST_NAME: &str = "Wildermuth";

/// Creates a speaker entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Shawn"`
/// - last_name: `"Wildermuth"`
/// - every optional field: `None`
pub fn entity() -> speaker::Model {
    entity_builder().build()
}

/// Creates a speaker entity builder for customization.
pub fn entity_builder() -> SpeakerEntityBuilder {
    SpeakerEntityBuilder::default()
}

/// Builder for customized speaker entity models.
pub struct SpeakerEntityBuilder {
    model: speaker::Model,
}

impl Default for SpeakerEntityBuilder {
    fn default() -> Self {
        Self {
            model: speaker::Model {
                id: 1,
                first_name: DEFAULT_FIRST_NAME.to_string(),
                last_name: DEFAULT_LAST_NAME.to_string(),
                middle_name: None,
                company: None,
                company_url: None,
                blog_url: None,
                twitter: None,
                git_hub: None,
            },
        }
    }
}

impl SpeakerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.model.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.model.last_name = last_name.into();
        self
    }

    pub fn company(mut self, company: Option<&str>) -> Self {
        self.model.company = company.map(str::to_string);
        self
    }

    pub fn twitter(mut self, twitter: Option<&str>) -> Self {
        self.model.twitter = twitter.map(str::to_string);
        self
    }

    pub fn build(self) -> speaker::Model {
        self.model
    }
}
