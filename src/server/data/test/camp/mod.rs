use super::*;

mod create_camp;
mod get_all_camps;
mod get_camp;
mod update_camp;

fn camp_fields(name: &str) -> CampFields {
    CampFields {
        name: name.to_string(),
        event_date: date(2020, 10, 18),
        length: 1,
        location: Location {
            venue_name: Some("Atlanta Convention Center".to_string()),
            city_town: Some("Atlanta".to_string()),
            ..Default::default()
        },
    }
}
