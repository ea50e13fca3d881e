use std::{
    env::{self, VarError},
    path::PathBuf,
};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_root: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let data_root = match env::var("TABIWARI_DATA") {
            Ok(value) => PathBuf::from(value),
            Err(VarError::NotPresent) => PathBuf::from("data"),
            Err(err) => {
                return Err(AppError::Config(format!("invalid TABIWARI_DATA: {err}")));
            }
        };

        Ok(Self { data_root })
    }
}
