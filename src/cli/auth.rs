//! Login, logout, registration, and password-reset command implementations

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::client::models::{
    CodePurpose, LoginRequest, RegisterRequest, ResetConfirmRequest, ResetPasswordRequest,
};
use crate::client::{AuthApi, MhflClient};
use crate::error::{Error, Result};

/// Run the login command.
///
/// Fetches a captcha challenge first and drops the image into a temp file;
/// username, password, and the solved code are prompted unless supplied via
/// flags (the non-interactive path used by scripts).
pub async fn login(
    username: Option<String>,
    password: Option<String>,
    captcha_code: Option<String>,
    remember: bool,
) -> Result<()> {
    let client = MhflClient::new()?;

    let captcha = client.captcha().await?;
    let image_path = write_captcha_image(&captcha.captcha_image)?;
    println!(
        "Captcha image saved to: {}",
        image_path.display().to_string().cyan()
    );

    let username = match username {
        Some(username) => username,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };
    let captcha_code = match captcha_code {
        Some(code) => code,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Captcha code")
            .interact_text()?,
    };

    client
        .login(LoginRequest {
            username,
            password,
            captcha_id: captcha.captcha_id,
            captcha_code,
            remember,
        })
        .await?;

    Ok(())
}

/// Run the logout command.
///
/// Credentials are evicted by the client only after the server acknowledges.
pub async fn logout() -> Result<()> {
    let client = MhflClient::new()?;
    client.logout().await?;
    Ok(())
}

/// Run the register command (interactive).
pub async fn register() -> Result<()> {
    let client = MhflClient::new()?;
    let theme = ColorfulTheme::default();

    println!("{}", "Register an MHFL account".bold());

    let username: String = Input::with_theme(&theme)
        .with_prompt("Username")
        .interact_text()?;
    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .interact_text()?;
    let telephone: String = Input::with_theme(&theme)
        .with_prompt("Telephone")
        .interact_text()?;
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    client.ask_code(&email, CodePurpose::Register).await?;
    let code: String = Input::with_theme(&theme)
        .with_prompt("Verification code")
        .interact_text()?;

    client
        .register(RegisterRequest {
            username,
            password,
            email,
            telephone,
            code,
        })
        .await?;

    Ok(())
}

/// Run the password-reset command (interactive, two server round-trips).
pub async fn reset() -> Result<()> {
    let client = MhflClient::new()?;
    let theme = ColorfulTheme::default();

    println!("{}", "Reset your MHFL password".bold());

    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .interact_text()?;

    client.ask_code(&email, CodePurpose::Reset).await?;
    let code: String = Input::with_theme(&theme)
        .with_prompt("Verification code")
        .interact_text()?;

    // Verify the code before asking for a new password
    client
        .confirm_reset(ResetConfirmRequest {
            email: email.clone(),
            code: code.clone(),
        })
        .await?;

    let password = Password::with_theme(&theme)
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()?;

    client
        .reset_password(ResetPasswordRequest {
            email,
            code,
            password,
        })
        .await?;

    Ok(())
}

/// Decode the base64 captcha image into a temp file the user can open.
///
/// Accepts both bare base64 and `data:image/png;base64,…` payloads.
fn write_captcha_image(encoded: &str) -> Result<PathBuf> {
    use base64::{Engine as _, engine::general_purpose};

    let raw = encoded.rsplit(',').next().unwrap_or_default();
    let bytes = general_purpose::STANDARD
        .decode(raw.trim())
        .map_err(|e| Error::Other(format!("could not decode captcha image: {}", e)))?;

    let path = std::env::temp_dir().join("mhflop-captcha.png");
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_captcha_image_bare_base64() {
        let path = write_captcha_image("aGVsbG8=").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_captcha_image_data_url() {
        let path = write_captcha_image("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_captcha_image_rejects_garbage() {
        assert!(write_captcha_image("!!not-base64!!").is_err());
    }
}
