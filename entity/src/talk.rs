use sea_orm::entity::prelude::*;

/// A presentation scheduled at one camp and given by one speaker.
///
/// Talks are removed together with their camp. A speaker cannot be removed
/// while talks still reference it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "talk")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub camp_id: i32,
    pub speaker_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::camp::Entity",
        from = "Column::CampId",
        to = "super::camp::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Camp,
    #[sea_orm(
        belongs_to = "super::speaker::Entity",
        from = "Column::SpeakerId",
        to = "super::speaker::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Speaker,
}

impl Related<super::camp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camp.def()
    }
}

impl Related<super::speaker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speaker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
