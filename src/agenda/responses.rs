use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchAgendaItem {
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
    pub date: String,
    pub heure: String,
}

#[derive(Default, Serialize)]
pub struct SearchAgendaResponse {
    pub success: bool,
    pub err: String,
    pub agenda: Vec<SearchAgendaItem>,
}

#[derive(Default, Serialize)]
pub struct ViewAgendaResponse {
    pub success: bool,
    pub err: String,
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
    pub date: String,
    pub heure: String,
}

crate::impl_err_response! {
    SearchAgendaResponse,
    ViewAgendaResponse,
}
