use actix_web::web::Json;
use validator::{Validate, ValidationError, ValidationErrors};

use errors::Error;

fn collect_errors(errors: ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| match field_errors.first() {
            Some(ValidationError {
                message: Some(message),
                ..
            }) => message.to_string(),
            _ => format!("{} is invalid", field),
        })
        .collect();
    messages.sort();
    messages
}

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    match params.validate() {
        Ok(_) => Ok(()),
        Err(err) => Err(Error::ValidationError(collect_errors(err))),
    }
}
