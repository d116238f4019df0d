//! Camp fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::camp;

/// Default test camp moniker.
pub const DEFAULT_MONIKER: &str = "ATL2018";

/// Default test camp name.
pub const DEFAULT_NAME: &str = "Atlanta Code Camp";

/// Default camp length in days.
pub const DEFAULT_LENGTH: i32 = 1;

/// Default event date of test camps.
pub fn default_event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 10, 18).unwrap_or_default()
}

/// Creates a camp entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - moniker: `"ATL2018"`
/// - name: `"Atlanta Code Camp"`
/// - event_date: `2018-10-18`
/// - length: `1`
/// - location: all `None`
///
/// # Returns
/// - `camp::Model` - In-memory camp entity
pub fn entity() -> camp::Model {
    entity_builder().build()
}

/// Creates a camp entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let camp = fixture::camp::entity_builder()
///     .moniker("SEA2019")
///     .city_town(Some("Seattle"))
///     .build();
/// ```
pub fn entity_builder() -> CampEntityBuilder {
    CampEntityBuilder::default()
}

/// Builder for customized camp entity models.
pub struct CampEntityBuilder {
    model: camp::Model,
}

impl Default for CampEntityBuilder {
    fn default() -> Self {
        Self {
            model: camp::Model {
                id: 1,
                moniker: DEFAULT_MONIKER.to_string(),
                name: DEFAULT_NAME.to_string(),
                event_date: default_event_date(),
                length: DEFAULT_LENGTH,
                venue_name: None,
                address1: None,
                address2: None,
                address3: None,
                city_town: None,
                state_province: None,
                postal_code: None,
                country: None,
            },
        }
    }
}

impl CampEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn moniker(mut self, moniker: impl Into<String>) -> Self {
        self.model.moniker = moniker.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.model.event_date = event_date;
        self
    }

    pub fn length(mut self, length: i32) -> Self {
        self.model.length = length;
        self
    }

    pub fn venue_name(mut self, venue_name: Option<&str>) -> Self {
        self.model.venue_name = venue_name.map(str::to_string);
        self
    }

    pub fn city_town(mut self, city_town: Option<&str>) -> Self {
        self.model.city_town = city_town.map(str::to_string);
        self
    }

    pub fn country(mut self, country: Option<&str>) -> Self {
        self.model.country = country.map(str::to_string);
        self
    }

    pub fn build(self) -> camp::Model {
        self.model
    }
}
