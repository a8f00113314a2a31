use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ball_instance::Entity")]
    BallInstance,
}

impl Related<super::ball_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BallInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
