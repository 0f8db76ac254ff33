//! Mock OTP sign-in commands.

use anyhow::Result;
use dialoguer::Input;

use verdant_auth::{AuthError, MAX_OTP_ATTEMPTS, OTP_RESEND_COOLDOWN_SECS};
use verdant_app::AppError;

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &mut Context) -> Result<()> {
    if let Some(customer) = ctx.storefront.customer() {
        ctx.output
            .info(&format!("Already signed in as {}", customer.mobile));
        return Ok(());
    }

    let mobile = match args.mobile {
        Some(mobile) => mobile,
        None => Input::new()
            .with_prompt("Mobile number (10 digits)")
            .interact_text()?,
    };

    ctx.storefront.request_otp(&mobile)?;
    ctx.output
        .info("OTP sent. (This build has no SMS gateway — the code is in the log, and any 6-digit code is accepted.)");
    ctx.output.debug(&format!(
        "Resend available after {}s; {} attempts recorded",
        OTP_RESEND_COOLDOWN_SECS, MAX_OTP_ATTEMPTS
    ));

    for _ in 0..MAX_OTP_ATTEMPTS {
        let code: String = Input::new().with_prompt("Enter the 6-digit code").interact_text()?;

        match ctx.storefront.verify_otp(&mobile, &code) {
            Ok(customer) => {
                ctx.output.success(&format!(
                    "Welcome back, {} ({})",
                    customer.name, customer.id
                ));
                return Ok(());
            }
            Err(AppError::Auth(AuthError::InvalidOtp)) => {
                ctx.output.warn("That code is not 6 digits — try again.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    ctx.output.error("Too many malformed codes. Run `verdant login` to start over.");
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &mut Context) -> Result<()> {
    ctx.storefront.logout()?;
    ctx.output.success("Signed out. Your bag has been cleared.");
    Ok(())
}
