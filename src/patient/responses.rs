use serde::Serialize;

#[derive(Default, Serialize)]
pub struct AddPatientResponse {
    pub success: bool,
    pub err: String,
    pub id_patient: u64,
    pub facture: String,
}

#[derive(Default, Serialize)]
pub struct SearchPatientItem {
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
    pub departement: String,
}

#[derive(Default, Serialize)]
pub struct SearchPatientResponse {
    pub success: bool,
    pub err: String,
    pub patients: Vec<SearchPatientItem>,
}

#[derive(Default, Serialize)]
pub struct ViewPatientResponse {
    pub success: bool,
    pub err: String,
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
}

crate::impl_err_response! {
    AddPatientResponse,
    SearchPatientResponse,
    ViewPatientResponse,
}
