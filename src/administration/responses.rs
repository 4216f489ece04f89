use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    pub redirect_page: String,
    pub login_token: String,
}

#[derive(Default, Serialize)]
pub struct SearchEmployeItem {
    pub id_admin: u64,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub situation: String,
    pub telephone: String,
    pub mail: String,
    pub departement: String,
    pub diplome: String,
    pub date_e: String,
    pub salaire_brute: f64,
    pub inps: f64,
    pub amo: f64,
    pub nombre_consultation: i32,
}

#[derive(Default, Serialize)]
pub struct SearchEmployeResponse {
    pub success: bool,
    pub err: String,
    pub employes: Vec<SearchEmployeItem>,
}

#[derive(Default, Serialize)]
pub struct ViewEmployeResponse {
    pub success: bool,
    pub err: String,
    pub id_admin: u64,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub situation: String,
    pub telephone: String,
    pub mail: String,
    pub departement: String,
    pub diplome: String,
    pub date_e: String,
    pub salaire_brute: f64,
    pub nombre_consultation: i32,
    pub profil: String,
    pub identite: String,
}

#[derive(Default, Serialize)]
pub struct AccountInfoResponse {
    pub success: bool,
    pub err: String,
    pub nom: String,
    pub prenom: String,
    pub profil: String,
}

#[derive(Default, Serialize)]
pub struct SearchDepartResponse {
    pub success: bool,
    pub err: String,
    pub departements: Vec<String>,
}

crate::impl_err_response! {
    LoginResponse,
    SearchEmployeResponse,
    ViewEmployeResponse,
    AccountInfoResponse,
    SearchDepartResponse,
}
