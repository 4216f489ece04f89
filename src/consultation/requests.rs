use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddConsultationRequest {
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
}

#[derive(Deserialize)]
pub struct SearchConsultationRequest {
    pub departements: Option<Vec<String>>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewConsultationRequest {
    pub id_consultation: u64,
}
