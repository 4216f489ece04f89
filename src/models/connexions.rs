use crate::schema::connexions;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable)]
#[table_name = "connexions"]
pub struct ConnexionData {
    pub token: String,
    pub id_admin: u64,
    pub date_connexion: NaiveDateTime,
}
