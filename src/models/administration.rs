use crate::schema::administration;
use chrono::NaiveDate;

#[derive(Queryable, Identifiable)]
#[primary_key(id_admin)]
#[table_name = "administration"]
pub struct EmployeData {
    pub id_admin: u64,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub situation: String,
    pub telephone: String,
    pub mail: String,
    pub id_departement: u64,
    pub code_admin: String,
    pub diplome: String,
    pub date_e: NaiveDate,
    pub id_salaire: u64,
    pub nombre_consultation: i32,
    pub profil: Option<String>,
    pub identite: Option<String>,
}

#[derive(Insertable)]
#[table_name = "administration"]
pub struct NewEmploye {
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub situation: String,
    pub telephone: String,
    pub mail: String,
    pub id_departement: u64,
    pub code_admin: String,
    pub diplome: String,
    pub date_e: NaiveDate,
    pub id_salaire: u64,
    pub nombre_consultation: i32,
}

#[derive(AsChangeset, Default)]
#[table_name = "administration"]
pub struct UpdateEmploye {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub age: Option<i32>,
    pub sexe: Option<String>,
    pub situation: Option<String>,
    pub telephone: Option<String>,
    pub mail: Option<String>,
    pub id_departement: Option<u64>,
    pub code_admin: Option<String>,
    pub diplome: Option<String>,
    pub date_e: Option<NaiveDate>,
    pub id_salaire: Option<u64>,
}
