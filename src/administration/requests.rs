use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddEmployeRequest {
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub situation: String,
    pub telephone: String,
    pub mail: String,
    pub departement: String,
    pub code_admin: String,
    pub diplome: String,
    pub date_e: String,
    pub salaire: f64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub code_admin: String,
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct SearchEmployeRequest {
    pub nom: Option<String>,
    pub departement: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewEmployeRequest {
    pub id_admin: u64,
}

#[derive(Deserialize)]
pub struct ModifyEmployeRequest {
    pub id_admin: u64,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub age: Option<i32>,
    pub sexe: Option<String>,
    pub situation: Option<String>,
    pub telephone: Option<String>,
    pub mail: Option<String>,
    pub departement: Option<String>,
    pub code_admin: Option<String>,
    pub diplome: Option<String>,
    pub date_e: Option<String>,
    pub salaire: Option<f64>,
}

#[derive(Deserialize)]
pub struct DeleteEmployeRequest {
    pub id_admin: u64,
}

#[derive(Deserialize)]
pub struct AccountInfoRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct SearchDepartRequest {
    pub departement: Option<String>,
}
