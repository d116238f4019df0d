use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use url::Url;

use crate::server::{
    data::SeaOrmRepository,
    error::{persistence::PersistenceError, AppError},
    link::LinkGenerator,
    model::{
        camp::{CampFields, CreateCampParam, Location, UpdateCampParam},
        speaker::SpeakerFields,
        talk::{CreateTalkParam, TalkFields, UpdateTalkParam},
    },
    service::{camp::CampService, speaker::SpeakerService, talk::TalkService},
};


fn links() -> LinkGenerator {
    LinkGenerator::new(Url::parse("http://localhost:8080").unwrap())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
