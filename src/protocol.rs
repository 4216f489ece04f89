use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

/// Réponse des insertions dont l'identifiant créé est renvoyé au front.
#[derive(Default, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub err: String,
    pub id: u64,
}

impl InsertResponse {
    pub fn ok(id: u64) -> Self {
        Self {
            success: true,
            err: "".to_string(),
            id,
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
    InsertResponse,
}
