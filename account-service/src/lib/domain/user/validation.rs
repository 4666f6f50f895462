use crate::domain::user::errors::ValidationError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::RegistrationForm;

/// Validate a registration form.
///
/// Checks run in a fixed order and stop at the first failing stage:
/// presence of every field, email format, password strength, column limits.
///
/// # Errors
/// * `MissingFields` - One or more fields are blank (all are listed)
/// * `InvalidEmailFormat` - Email is not a plain `local@domain` address
/// * `WeakPassword` - Password is shorter than 6 characters
/// * `TooLong` - A field exceeds its stored length
pub fn validate_registration(
    form: RegistrationForm,
) -> Result<RegisterUserCommand, ValidationError> {
    let missing: Vec<&'static str> = [
        ("firstName", is_blank(&form.first_name)),
        ("lastName", is_blank(&form.last_name)),
        ("email", is_blank(&form.email)),
        ("password", form.password.as_str().is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, blank)| blank.then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let email = EmailAddress::new(form.email)?;
    let password = form.password.checked()?;

    let first_name = PersonName::new("firstName", form.first_name)?;
    let last_name = PersonName::new("lastName", form.last_name)?;

    let email_length = email.as_str().chars().count();
    if email_length > EmailAddress::MAX_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email",
            max: EmailAddress::MAX_LENGTH,
            actual: email_length,
        });
    }

    Ok(RegisterUserCommand {
        first_name,
        last_name,
        email,
        password,
    })
}

/// Validate login credentials: presence and email format only.
pub fn validate_login(credentials: Credentials) -> Result<LoginCommand, ValidationError> {
    let missing: Vec<&'static str> = [
        ("email", is_blank(&credentials.email)),
        ("password", credentials.password.as_str().is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, blank)| blank.then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(LoginCommand {
        email: EmailAddress::new(credentials.email)?,
        password: credentials.password,
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
