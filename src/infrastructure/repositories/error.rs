use crate::domain::errors::DomainError;

const CNT_ARTICLE_CATEGORY: &str = "articles_category_chk";
const CNT_ARTICLE_AFFILIATE_TYPE: &str = "articles_affiliate_type_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_CATEGORY => DomainError::Validation("category is invalid".into()),
                    CNT_ARTICLE_AFFILIATE_TYPE => {
                        DomainError::Validation("affiliate type is invalid".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
