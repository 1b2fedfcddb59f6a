use models::posts::{ActiveModel, Column, Model};
use models::prelude::Posts;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    pub async fn find_by_author(
        db: &DatabaseConnection,
        author_id: i32,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        let res = Posts::insert(model).exec(db).await?;
        Posts::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted post not found".to_string()))
    }
}
