use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddPatientRequest {
    pub telephone: String,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub ethnie: String,
    pub localite: String,
    pub tension: String,
    pub type_soin: String,
    pub code_admin: String,
}

#[derive(Deserialize)]
pub struct SearchPatientRequest {
    pub departements: Option<Vec<String>>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewPatientRequest {
    pub id_patient: u64,
}

#[derive(Deserialize)]
pub struct DeletePatientRequest {
    pub id_patient: u64,
}
