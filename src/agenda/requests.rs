use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddAgendaRequest {
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
    pub date: String,
    pub heure: String,
}

#[derive(Deserialize)]
pub struct ModifyAgendaRequest {
    pub id_agenda: u64,
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
    pub date: Option<String>,
    pub heure: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchAgendaRequest {
    pub departements: Option<Vec<String>>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewAgendaRequest {
    pub id_agenda: u64,
}

#[derive(Deserialize)]
pub struct DeleteAgendaRequest {
    pub id_agenda: u64,
}
