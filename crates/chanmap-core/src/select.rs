use chanmap_client::LiveTvBackend;
use tracing::info;

use crate::error::Result;
use crate::shell::{Choice, Shell};

const PROVIDER_PROMPT_TITLE: &str = "EPG Guide";

/// Ask the operator which listing provider to work on.
///
/// Returns `None` when the operator cancels or the server has no providers.
pub(crate) fn choose_provider<B, S>(backend: &B, shell: &mut S, text: &str) -> Result<Option<String>>
where
    B: LiveTvBackend + ?Sized,
    S: Shell + ?Sized,
{
    let providers = backend.listing_providers()?;
    if providers.is_empty() {
        shell.show_message(
            PROVIDER_PROMPT_TITLE,
            "The server has no EPG listing providers configured.",
        )?;
        info!("no listing providers configured");
        return Ok(None);
    }

    let choices: Vec<Choice> = providers
        .iter()
        .map(|provider| Choice::new(&provider.id, provider.label()))
        .collect();
    let selected = shell.present_choice(PROVIDER_PROMPT_TITLE, text, &choices)?;
    match &selected {
        Some(provider_id) => info!(provider_id = %provider_id, "listing provider selected"),
        None => info!("provider selection cancelled"),
    }
    Ok(selected)
}
