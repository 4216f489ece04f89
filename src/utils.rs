#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::{NaiveDate, NaiveDateTime, Utc};

pub fn assert_sexe_str(sexe: &str) -> anyhow::Result<()> {
    if sexe != "Homme" && sexe != "Femme" {
        bail!("Sexe invalide")
    }
    Ok(())
}

/// Empreinte stockée en base pour les codes personnels du personnel.
pub fn hash_code(code: &str) -> String {
    format!("{:x}", Blake2b::digest(code.as_bytes()))
}

pub fn generate_login_token(id_admin: u64) -> String {
    let stamp = Utc::now().naive_utc().timestamp_nanos();
    format!(
        "{:x}",
        Blake2b::digest(format!("{}:{}", id_admin, stamp).as_bytes())
    )
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), "%Y-%m-%d").context("Format de date invalide")
}

/// Fenêtre [début du mois, début du mois suivant) pour les requêtes
/// mensuelles (paie, comptabilité).
pub fn month_window(annee: i32, mois: u32) -> anyhow::Result<(NaiveDateTime, NaiveDateTime)> {
    if mois < 1 || mois > 12 {
        bail!("Mois invalide");
    }
    let start = NaiveDate::from_ymd(annee, mois, 1).and_hms(0, 0, 0);
    let end = if mois == 12 {
        NaiveDate::from_ymd(annee + 1, 1, 1)
    } else {
        NaiveDate::from_ymd(annee, mois + 1, 1)
    }
    .and_hms(0, 0, 0);
    Ok((start, end))
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn get_str_pattern_opt<S: AsRef<str>>(s: Option<S>) -> String {
    match s {
        Some(s) => get_str_pattern(s),
        None => "%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexe_str() {
        assert!(assert_sexe_str("Homme").is_ok());
        assert!(assert_sexe_str("Femme").is_ok());
        assert!(assert_sexe_str("autre").is_err());
        assert!(assert_sexe_str("").is_err());
    }

    #[test]
    fn hash_code_is_stable() {
        assert_eq!(hash_code("1234"), hash_code("1234"));
        assert_ne!(hash_code("1234"), hash_code("1235"));
        // hex digest, jamais le code en clair
        assert_ne!(hash_code("1234"), "1234");
    }

    #[test]
    fn parse_date() {
        assert_eq!(
            parse_date_str("2024-12-09").unwrap(),
            NaiveDate::from_ymd(2024, 12, 9)
        );
        assert!(parse_date_str("09/12/2024").is_err());
    }

    #[test]
    fn month_windows() {
        let (start, end) = month_window(2024, 11).unwrap();
        assert_eq!(start, NaiveDate::from_ymd(2024, 11, 1).and_hms(0, 0, 0));
        assert_eq!(end, NaiveDate::from_ymd(2024, 12, 1).and_hms(0, 0, 0));

        // décembre déborde sur l'année suivante
        let (_, end) = month_window(2024, 12).unwrap();
        assert_eq!(end, NaiveDate::from_ymd(2025, 1, 1).and_hms(0, 0, 0));

        assert!(month_window(2024, 0).is_err());
        assert!(month_window(2024, 13).is_err());
    }

    #[test]
    fn str_patterns() {
        assert_eq!(get_str_pattern("para"), "%para%");
        assert_eq!(get_str_pattern_opt(Some("para")), "%para%");
        assert_eq!(get_str_pattern_opt::<&str>(None), "%");
    }
}
