//! Share command implementation
//!
//! Builds the share link for a signature, or extracts the signature from a
//! link with `--url`.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_spec::share::{extract_tx, share_link, x_share_intent};
use symph_spec::validate_signature;

use super::json_output::{emit, error_codes, JsonError, ShareResult};
use crate::config::SymphConfig;

/// What to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    /// Build links for this signature.
    Signature(String),
    /// Recover the signature from this link.
    Url(String),
}

/// Run the share command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    target: &ShareTarget,
    origin: Option<&str>,
    config: &SymphConfig,
    json_output: bool,
) -> Result<ExitCode> {
    let outcome = share(target, origin, config);
    if json_output {
        return emit(outcome);
    }

    let result = outcome?;
    match &result.link {
        Some(link) => {
            println!("{}", "Share:".cyan().bold());
            println!("{} {}", "Link:".dimmed(), link);
            if let Some(intent) = &result.x_intent {
                println!("{} {}", "Post:".dimmed(), intent);
            }
        }
        None => {
            println!("{} {}", "Signature:".dimmed(), result.signature);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Builds or parses a share link.
pub fn share(
    target: &ShareTarget,
    origin: Option<&str>,
    config: &SymphConfig,
) -> Result<ShareResult, JsonError> {
    match target {
        ShareTarget::Signature(signature) => {
            validate_signature(signature).map_err(|e| {
                JsonError::new(error_codes::INVALID_SIGNATURE, e.to_string())
            })?;
            let origin = origin.unwrap_or(&config.share_origin);
            Ok(ShareResult {
                signature: signature.clone(),
                link: Some(share_link(origin, signature)),
                x_intent: Some(x_share_intent(origin, signature)),
            })
        }
        ShareTarget::Url(url) => {
            let signature = extract_tx(url).ok_or_else(|| {
                JsonError::new(
                    error_codes::MISSING_SHARE_PARAM,
                    format!("share link has no tx parameter: {}", url),
                )
            })?;
            Ok(ShareResult {
                signature,
                link: None,
                x_intent: None,
            })
        }
    }
}
