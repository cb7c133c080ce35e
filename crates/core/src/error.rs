use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{BadgeError, ObjectError, QuizItemError, SettingsError};
use crate::quiz::QuizConfigError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    QuizItem(#[from] QuizItemError),
    #[error(transparent)]
    QuizConfig(#[from] QuizConfigError),
    #[error(transparent)]
    Object(#[from] ObjectError),
    #[error(transparent)]
    Badge(#[from] BadgeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
