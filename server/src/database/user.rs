use sea_orm::entity::prelude::*;
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_user: i32,
    pub nama: String,
    pub email: String,
    // this is the hashed password, never store plaintext
    pub password: String,
    pub no_handphone: String,
    pub alamat: String,
}
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::backend::ReadUserResponse {
    fn from(model: Model) -> Self {
        Self {
            id_user: model.id_user,
            nama: model.nama,
            email: model.email,
            password: model.password,
            no_handphone: model.no_handphone,
            alamat: model.alamat,
        }
    }
}
