use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{CampRepository, SeaOrmRepository, SpeakerRepository, TalkRepository},
    model::{
        camp::{CampFields, Location},
        speaker::SpeakerFields,
        talk::TalkFields,
    },
};

mod camp;
mod speaker;
mod talk;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
