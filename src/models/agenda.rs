use crate::schema::agenda;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct AgendaData {
    pub id_agenda: u64,
    pub id_patient: u64,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub ethnie: String,
    pub telephone: String,
    pub localite: String,
    pub tension: String,
    pub type_soin: String,
    pub diagnostique: String,
    pub prescription: String,
    pub id_admin: u64,
    pub date: NaiveDate,
    pub heure: String,
}

#[derive(Insertable)]
#[table_name = "agenda"]
pub struct NewAgenda {
    pub id_patient: u64,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub ethnie: String,
    pub telephone: String,
    pub localite: String,
    pub tension: String,
    pub type_soin: String,
    pub diagnostique: String,
    pub prescription: String,
    pub id_admin: u64,
    pub date: NaiveDate,
    pub heure: String,
}

#[derive(AsChangeset, Default)]
#[table_name = "agenda"]
pub struct UpdateAgenda {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub age: Option<i32>,
    pub sexe: Option<String>,
    pub ethnie: Option<String>,
    pub telephone: Option<String>,
    pub localite: Option<String>,
    pub tension: Option<String>,
    pub diagnostique: Option<String>,
    pub prescription: Option<String>,
    pub id_admin: Option<u64>,
    pub date: Option<NaiveDate>,
    pub heure: Option<String>,
}
