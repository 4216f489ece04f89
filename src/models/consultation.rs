use crate::schema::consultation;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct ConsultationData {
    pub id_consultation: u64,
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
    pub montant: f64,
    pub id_admin: u64,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "consultation"]
pub struct NewConsultation {
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
    pub montant: f64,
    pub id_admin: u64,
    pub date: NaiveDateTime,
}
