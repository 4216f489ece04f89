use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchConsultationItem {
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
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct SearchConsultationResponse {
    pub success: bool,
    pub err: String,
    pub consultations: Vec<SearchConsultationItem>,
}

#[derive(Default, Serialize)]
pub struct ViewConsultationResponse {
    pub success: bool,
    pub err: String,
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
    pub date: String,
}

crate::impl_err_response! {
    SearchConsultationResponse,
    ViewConsultationResponse,
}
